//! Common traits for all backend resources

use serde::{de::DeserializeOwned, Serialize};

use crate::system::auth::Capability;

/// A record type exposed by the backend under `/api/v1/<collection_name>`
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Module index used as a log prefix, e.g. "a001"
    fn resource_index() -> &'static str;

    /// Capability a session needs to read or write this resource
    fn required_capability() -> Capability;

    /// URL segment of the collection, e.g. "categories"
    fn collection_name() -> &'static str;

    /// Human-readable name of one record
    fn element_name() -> &'static str;

    /// Human-readable name of the list
    fn list_name() -> &'static str;

    /// Backend-assigned id, `None` until saved
    fn id(&self) -> Option<i64>;

    /// Client-side form validation run before every save/update
    fn validate(&self) -> Result<(), String>;
}
