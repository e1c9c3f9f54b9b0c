use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw item read from a document store collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub key: String,
    pub fields: Value,
}

impl Document {
    pub fn new<K: Into<String>>(key: K, fields: Value) -> Self {
        Self { key: key.into(), fields }
    }
}

/// The body of a plan document, as stored and as written in the pricing config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFields {
    pub price_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_week: Option<u64>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
}

/// A subscription tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Key of the document the plan was read from
    pub id: String,
    pub price_cents: u64,
    pub quota_month: Option<u64>,
    pub quota_week: Option<u64>,
    pub features: Vec<String>,
    pub stripe_price_id: Option<String>,
}

impl Plan {
    pub fn new<S: Into<String>>(id: S, fields: PlanFields) -> Self {
        let PlanFields { price_cents, quota_month, quota_week, features, stripe_price_id } = fields;
        Self { id: id.into(), price_cents, quota_month, quota_week, features, stripe_price_id }
    }

    /// Takes the id from the document key and everything else from its body
    pub fn from_document(document: Document) -> Result<Self, serde_json::Error> {
        let fields: PlanFields = serde_json::from_value(document.fields)?;
        Ok(Self::new(document.key, fields))
    }

    /// Features in their stored order, joined for display
    pub fn features_label(&self) -> String {
        self.features.join(", ")
    }
}
