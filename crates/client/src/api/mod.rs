use shared::{
    api::{
        self,
        error::{FrontendError, Nothing, ServerError},
        response_errors::CollectionError,
    },
    model::{AdminConfig, Document},
    plans::PlanStore,
    utils::fetch::json_get,
};

/// The document store as served by the admin server
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPlanStore;

impl PlanStore for HttpPlanStore {
    type Error = FrontendError<ServerError<CollectionError>>;

    async fn fetch_documents(&self, collection: &str) -> Result<Vec<Document>, Self::Error> {
        json_get::<Vec<Document>, CollectionError>(&api::collection_path(collection)).await
    }
}

pub async fn fetch_admin_config() -> Result<AdminConfig, FrontendError<ServerError<Nothing>>> {
    json_get::<AdminConfig, Nothing>(api::Object::AdminConfig.path()).await
}

