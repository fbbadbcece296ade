use tracing::{debug, error};

use super::Pipeline;
use crate::context::Context;

/// Recovery handlers run when a pipeline fails.
///
/// The failure is already on `ctx.intermediate.error` when they start. If a
/// recovery handler fails too, that failure is logged and dropped: the rest
/// of the recovery handlers are skipped and the original error stays in
/// place.
#[derive(Debug, Clone, Default)]
pub struct ErrorPolicy {
    recovery: Pipeline,
}

impl ErrorPolicy {
    pub fn new(recovery: impl Into<Pipeline>) -> Self {
        Self {
            recovery: recovery.into(),
        }
    }

    pub fn recovery(&self) -> &Pipeline {
        &self.recovery
    }

    pub async fn recover(&self, ctx: &mut Context) {
        debug!(handlers = self.recovery.len(), "running recovery");

        if let Err((index, err)) = self.recovery.try_run(ctx).await {
            error!(handler = index, error = %err, "recovery handler failed, dropping its error");
        }
    }
}
