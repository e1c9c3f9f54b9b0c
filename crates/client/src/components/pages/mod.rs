mod plans;
pub use plans::*;
