use std::{any::type_name, fmt::Display};

use gloo::net::http::{RequestBuilder, Response};
use headers::{CacheControl, Header};
use http::header::{self, ACCEPT, CACHE_CONTROL};
use mime::APPLICATION_JSON;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::error::{FrontendError, ResultContext, ServerError, WrongContentTypeError};

pub type JsonGetError<E> = FrontendError<ServerError<E>>;

pub trait ResponseContentType: Sized {
    fn content_type(&self) -> Option<String>;
    fn is_json(&self) -> bool;
}

impl ResponseContentType for Response {
    fn content_type(&self) -> Option<String> {
        self.headers().get(header::CONTENT_TYPE.as_str())
    }

    fn is_json(&self) -> bool {
        self.content_type().map_or(false, |v| {
            v.split(';').next().map(str::trim) == Some(APPLICATION_JSON.essence_str())
        })
    }
}

/// Ask the browser not to answer from its http cache
fn no_cache(builder: RequestBuilder) -> RequestBuilder {
    let mut values = Vec::with_capacity(1);
    CacheControl::new().with_no_store().encode(&mut values);

    match values.pop().as_ref().and_then(|v| v.to_str().ok()) {
        Some(value) => builder.header(CACHE_CONTROL.as_str(), value),
        None => builder,
    }
}

/// GET `url` and deserialize the json body
///
/// Non-2xx responses are deserialized as `ServerError<E>`. Responses that
/// aren't json are reported as `WrongContentType`. Not retried
pub async fn json_get<R, E>(url: &str) -> Result<R, JsonGetError<E>>
where
    R: DeserializeOwned,
    E: DeserializeOwned + Display,
{
    debug!("json_get({url})");

    let request = no_cache(RequestBuilder::new(url))
        .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str())
        .build()
        .map_err(JsonGetError::<E>::from)
        .with_context(|| format!("Building request for GET {url}"))?;

    let response = request
        .send()
        .await
        .map_err(JsonGetError::<E>::from)
        .with_context(|| format!("Sending GET {url}"))?;

    let is_json = response.is_json();
    debug!("json_get::response::is_json: {is_json}");

    // Handle non-json responses (this isn't to allow the api to return other
    // things, it's only to report errors usefully)
    if !is_json {
        let content_type = response.content_type();
        let body = response
            .text()
            .await
            .map_err(JsonGetError::<E>::from)
            .with_context(|| format!("Extracting response body as text from GET {url}"))?;

        return Err(JsonGetError::<E>::from(WrongContentTypeError {
            expected: APPLICATION_JSON.to_string(),
            got: content_type,
            body,
        }))
        .with_context(|| format!("Response from GET {url}"));
    }

    if !response.ok() {
        debug!("json_get::return Err(ServerError) status: {}", response.status());
        let inner = response
            .json::<ServerError<E>>()
            .await
            .map_err(JsonGetError::<E>::from)
            .with_context(|| {
                format!("Deserializing error response ({}) from GET {url}", type_name::<E>())
            })?;

        return Err(FrontendError::Inner { inner });
    }

    let payload = response
        .json::<R>()
        .await
        .map_err(JsonGetError::<E>::from)
        .with_context(|| format!("Deserializing OK response ({}) from GET {url}", type_name::<R>()))?;

    debug!("json_get::return Ok::<{}>", type_name::<R>());
    Ok(payload)
}
