//! Reading plans out of the document store
//!
//! The store handle is always passed in, the browser uses an http backed
//! store and the tests use an in-memory one.

use std::fmt::{self, Debug, Display};

use tracing::{debug, instrument};

use crate::model::{Document, Plan};

/// Read access to a document store collection
#[allow(async_fn_in_trait)]
pub trait PlanStore {
    type Error: Display;

    /// Every document in `collection`, in the order the store returns them
    async fn fetch_documents(&self, collection: &str) -> Result<Vec<Document>, Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlansError<E> {
    Store { collection: String, inner: E },
    MalformedDocument { key: String, message: String },
}

impl<E: Display> Display for FetchPlansError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store { collection, inner } => {
                write!(f, "Fetching plans from {collection:?} failed: {inner}")
            }
            Self::MalformedDocument { key, message } => {
                write!(f, "Plan document {key:?} is malformed: {message}")
            }
        }
    }
}

impl<E: Debug + Display> std::error::Error for FetchPlansError<E> {}

/// Issue one read-all query against `collection` and map the documents to plans
///
/// The plan id is the document key. Store order is kept. A single malformed
/// document fails the whole fetch
#[instrument(skip(store))]
pub async fn fetch_plans<S: PlanStore>(
    store: &S,
    collection: &str,
) -> Result<Vec<Plan>, FetchPlansError<S::Error>> {
    let documents = store
        .fetch_documents(collection)
        .await
        .map_err(|inner| FetchPlansError::Store { collection: collection.to_owned(), inner })?;
    debug!(count = documents.len(), "fetched plan documents");

    documents
        .into_iter()
        .map(|document| {
            let key = document.key.clone();
            Plan::from_document(document)
                .map_err(|e| FetchPlansError::MalformedDocument { key, message: e.to_string() })
        })
        .collect()
}

/// What the plans panel is currently showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlansState {
    /// Mounted, fetch still pending
    #[default]
    Empty,
    Loaded(Vec<Plan>),
    Failed(String),
}

impl PlansState {
    /// State for the current fetch result, `None` while it's still pending
    pub fn from_fetch<E: Display>(result: Option<Result<Vec<Plan>, E>>) -> Self {
        match result {
            None => PlansState::Empty,
            Some(Ok(plans)) => PlansState::Loaded(plans),
            Some(Err(e)) => PlansState::Failed(e.to_string()),
        }
    }

    /// Rows to show. Empty until the fetch succeeds
    pub fn plans(&self) -> &[Plan] {
        match self {
            PlansState::Loaded(plans) => plans,
            PlansState::Empty | PlansState::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            PlansState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
