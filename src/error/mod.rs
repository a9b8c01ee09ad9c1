mod hub;

pub use hub::{ApiErrorBody, ApiErrorObject, HubError};
