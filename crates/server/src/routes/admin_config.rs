use axum::Json;
use shared::model::AdminConfig;

use crate::Args;

/// The collection the plans page lists and how it shows missing quotas
pub async fn admin_config(args: Args) -> Json<AdminConfig> {
    Json(AdminConfig {
        plans_collection: args.plans_env.collection().to_owned(),
        quota_display: args.quota_display,
    })
}
