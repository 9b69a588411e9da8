//! State

use std::sync::Arc;

use dishpatch_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Paystack public key for the client payment widget.
    pub(crate) paystack_public_key: Option<String>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, paystack_public_key: Option<String>) -> Self {
        Self {
            app,
            paystack_public_key,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(
        app: AppContext,
        paystack_public_key: Option<String>,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, paystack_public_key))
    }
}
