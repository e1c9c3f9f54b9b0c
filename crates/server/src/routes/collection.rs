use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        response_errors::{validate_collection_name, CollectionError},
    },
    model::Document,
};
use tracing::{debug, instrument};

use crate::db::{model::StoredDocument, DatabaseConnection};

/// Every document in the collection ordered by key
///
/// Collections that were never written to are returned as an empty list
#[instrument(skip(conn))]
pub async fn fetch_collection(
    DatabaseConnection(conn): DatabaseConnection,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Document>>, ServerError<CollectionError>> {
    validate_collection_name(&collection)?;

    let documents = conn
        .interact(move |conn| StoredDocument::fetch_all::<CollectionError>(conn, &collection))
        .await??;
    debug!(count = documents.len(), "Fetched documents");

    Ok(Json(documents))
}

/// `GET /api/collections/` never reaches the named route, reject it the same way
/// as any other invalid name
pub async fn fetch_unnamed_collection() -> ServerError<CollectionError> {
    CollectionError::InvalidName { name: String::new() }.into()
}
