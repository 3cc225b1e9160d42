//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use renick_app::{context::AppContext, names::MockNameChangeService};

use crate::state::State;

pub(crate) fn state_with_names(names: MockNameChangeService) -> Arc<State> {
    Arc::new(State::new(AppContext::new(Arc::new(names))))
}

pub(crate) fn names_service(names: MockNameChangeService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_names(names)))
            .push(route),
    )
}
