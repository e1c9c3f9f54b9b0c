use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PlanFields;

pub const PRICING_PLANS_COLLECTION: &str = "pricing_plans";
pub const PRICING_PLANS_DEV_COLLECTION: &str = "pricing_plans_dev";

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Reading pricing config {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Parsing pricing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown pricing tier: {0}")]
    UnknownTier(String),
}

/// Pricing config keyed by tier name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingPlans(BTreeMap<String, PlanFields>);

impl PricingPlans {
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| PricingError::Io { path: path.to_owned(), source })?;
        Self::from_json(&json)
    }

    pub fn get(&self, tier: &str) -> Result<&PlanFields, PricingError> {
        self.0.get(tier).ok_or_else(|| PricingError::UnknownTier(tier.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlanFields)> {
        self.0.iter()
    }
}

/// Which deployment a plan collection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanEnvironment {
    Dev,
    #[default]
    Prod,
}

impl PlanEnvironment {
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Dev => PRICING_PLANS_DEV_COLLECTION,
            Self::Prod => PRICING_PLANS_COLLECTION,
        }
    }
}

impl Display for PlanEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown environment {0:?}, expected one of: dev, prod")]
pub struct UnknownEnvironment(pub String);

impl FromStr for PlanEnvironment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            _ => Err(UnknownEnvironment(s.to_owned())),
        }
    }
}
