use serde::{Deserialize, Serialize};

use crate::{model::PRICING_PLANS_COLLECTION, table::QuotaDisplay};

/// UI settings handed to the admin client by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    pub plans_collection: String,
    pub quota_display: QuotaDisplay,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            plans_collection: PRICING_PLANS_COLLECTION.to_owned(),
            quota_display: QuotaDisplay::default(),
        }
    }
}
