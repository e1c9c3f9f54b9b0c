mod admin_config;
pub use admin_config::*;

mod collection;
pub use collection::*;

mod not_found;
pub use not_found::*;

mod ping;
pub use ping::*;
