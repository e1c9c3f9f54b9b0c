use const_format::concatcp;

pub mod error;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

/// Catch-all for api paths no route matched
pub const API_FALLBACK_PATH: &str = concatcp!(API_BASE_PATH, "*path");

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    /// Collection listing with no name, always rejected
    Collections,
    Collection,
    AdminConfig,
    Ping,
}

impl Object {
    pub const fn path(&self) -> &'static str {
        use Object::*;
        match self {
            Collections => concatcp!(API_BASE_PATH, "collections/"),
            Collection => concatcp!(API_BASE_PATH, "collections/:collection"),
            AdminConfig => concatcp!(API_BASE_PATH, "admin/config"),
            Ping => concatcp!(API_BASE_PATH, "ping"),
        }
    }
}

/// Concrete url for reading every document in `collection`
pub fn collection_path(collection: &str) -> String {
    Object::Collection.path().replace(":collection", collection)
}
