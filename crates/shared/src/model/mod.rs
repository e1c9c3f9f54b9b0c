mod admin_config;
pub use admin_config::*;

mod plan;
pub use plan::*;

mod pricing;
pub use pricing::*;
