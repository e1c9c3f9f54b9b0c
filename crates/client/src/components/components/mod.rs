mod container;
pub use container::*;

mod plan_table;
pub use plan_table::*;
