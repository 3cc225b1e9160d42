//! Display-name change domain.

mod errors;
mod models;
mod rules;
mod service;

pub use errors::NameChangeError;
pub use models::{NameChanged, SessionCredential};
pub use rules::{
    DISPLAY_NAME_MAX_CHARS, DISPLAY_NAME_MIN_CHARS, DisplayNameError, validate_display_name,
};
pub use service::{MockNameChangeService, NameChangeService, UpstreamNameChangeService};
