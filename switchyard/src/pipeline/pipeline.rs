use std::sync::Arc;

use tracing::warn;

use super::{Cursor, ErrorPolicy};
use crate::context::Context;
use crate::traits_helpers::middleware::Handler;

/// An ordered list of handlers run one after another against a [`Context`].
///
/// A pipeline is immutable and cheap to clone. Every [`Pipeline::run`]
/// walks it with its own [`Cursor`], so the same pipeline may serve many
/// requests at once.
#[derive(Debug, Clone)]
pub struct Pipeline {
    handlers: Arc<[Handler]>,
}

impl Pipeline {
    pub fn of(handlers: impl IntoIterator<Item = Handler>) -> Self {
        handlers.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self {
            handlers: Vec::new().into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// A new pipeline running `self` then `other`. Neither operand changes.
    pub fn concat(&self, other: &Pipeline) -> Pipeline {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.handlers.iter().chain(other.handlers.iter()).cloned().collect()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.handlers)
    }

    /// Run every handler in order.
    ///
    /// The first failure is stored on `ctx.intermediate.error`, the remaining
    /// handlers are skipped and `policy` recovers. Failures never escape.
    pub async fn run(&self, ctx: &mut Context, policy: &ErrorPolicy) {
        if let Err((index, err)) = self.try_run(ctx).await {
            warn!(handler = index, error = %err, "handler failed, recovering");
            ctx.intermediate.error = Some(err);
            policy.recover(ctx).await;
        }
    }

    /// Run until the first failure and hand it back with the handler index
    pub(crate) async fn try_run(&self, ctx: &mut Context) -> Result<(), (usize, anyhow::Error)> {
        let mut cursor = self.cursor();

        while !cursor.is_done() {
            let index = cursor.position();
            let step = cursor.advance();
            let Some(handler) = step.handler else {
                break;
            };
            if let Err(err) = handler.call(ctx).await {
                cursor.halt();
                return Err((index, err));
            }
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pipelines are equal when they hold the same handlers in the same order
impl PartialEq for Pipeline {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|(a, b)| a.ptr_eq(b))
    }
}

impl FromIterator<Handler> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Handler>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Handler>> for Pipeline {
    fn from(handlers: Vec<Handler>) -> Self {
        Self {
            handlers: handlers.into(),
        }
    }
}

impl<const N: usize> From<[Handler; N]> for Pipeline {
    fn from(handlers: [Handler; N]) -> Self {
        Self::of(handlers)
    }
}

impl From<Handler> for Pipeline {
    fn from(handler: Handler) -> Self {
        Self::of([handler])
    }
}
