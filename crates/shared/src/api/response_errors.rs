use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::ServerError;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error("{}::{}: {:?}", stringify!($name), stringify!($variant), self)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(CollectionError {
    #[code(StatusCode::BAD_REQUEST)]
    InvalidName { name: String },
});

response_error!(ApiError {
    #[code(StatusCode::NOT_FOUND)]
    NotFound { path: String },
});

/// Collection names end up in urls so they're limited to `[A-Za-z0-9_-]+`
pub fn validate_collection_name(name: &str) -> Result<(), CollectionError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CollectionError::InvalidName { name: name.to_owned() })
    }
}
