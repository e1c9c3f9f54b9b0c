mod app;
pub use app::*;

mod components;
pub use components::*;

mod pages;
pub use pages::*;
