use rusqlite::Connection;
use sea_query::{Expr, Iden, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use serde_json::Value;
use shared::{api::error::ServerError, model::Document, other_error};

#[derive(Iden)]
enum DocumentIden {
    #[iden = "document"]
    Table,
    Collection,
    Key,
    Body,
}

/// Documents as stored in the `document` table, the body is kept as json text
pub struct StoredDocument;

impl StoredDocument {
    /// Every document in `collection` ordered by key. Empty for unknown collections
    pub fn fetch_all<E>(conn: &Connection, collection: &str) -> Result<Vec<Document>, ServerError<E>> {
        let (sql, values) = Query::select()
            .columns([DocumentIden::Key, DocumentIden::Body])
            .from(DocumentIden::Table)
            .and_where(Expr::col(DocumentIden::Collection).eq(collection))
            .order_by(DocumentIden::Key, Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = stmt
            .query_map(&*values.as_params(), |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(key, body)| {
                let fields: Value = serde_json::from_str(&body)?;
                Ok(Document { key, fields })
            })
            .collect()
    }

    /// Insert the document or replace the body of the existing one
    pub fn upsert<E>(
        conn: &Connection,
        collection: &str,
        key: &str,
        fields: &Value,
    ) -> Result<(), ServerError<E>> {
        let body = serde_json::to_string(fields)?;

        let (sql, values) = Query::insert()
            .into_table(DocumentIden::Table)
            .columns([DocumentIden::Collection, DocumentIden::Key, DocumentIden::Body])
            .values([collection.into(), key.into(), body.into()])
            .map_err(|e| other_error!("Building document upsert: {e}"))?
            .on_conflict(
                OnConflict::columns([DocumentIden::Collection, DocumentIden::Key])
                    .update_column(DocumentIden::Body)
                    .to_owned(),
            )
            .build_rusqlite(SqliteQueryBuilder);

        conn.execute(&sql, &*values.as_params())?;
        Ok(())
    }
}
