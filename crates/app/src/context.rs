//! App Context

use std::sync::Arc;

use crate::{
    names::{NameChangeService, UpstreamNameChangeService},
    upstream::UpstreamClient,
};

#[derive(Clone)]
pub struct AppContext {
    pub names: Arc<dyn NameChangeService>,
}

impl AppContext {
    /// Build application context around the given name-change service.
    #[must_use]
    pub fn new(names: Arc<dyn NameChangeService>) -> Self {
        Self { names }
    }

    /// Build application context backed by the live upstream client.
    #[must_use]
    pub fn from_upstream(upstream: UpstreamClient) -> Self {
        Self::new(Arc::new(UpstreamNameChangeService::new(upstream)))
    }
}
