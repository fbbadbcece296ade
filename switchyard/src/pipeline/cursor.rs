use crate::traits_helpers::middleware::Handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    NotStarted,
    Running,
    Done,
}

/// One result of [`Cursor::advance`].
#[derive(Debug)]
pub struct Step<'p> {
    /// True on the step that yields the last handler, and on every step after.
    pub done: bool,
    pub handler: Option<&'p Handler>,
}

/// Single-pass stepper over the handlers of a pipeline.
///
/// Cursors borrow the handler list and own the position, so one pipeline
/// can be walked by any number of cursors at once. `Done` is terminal.
#[derive(Debug)]
pub struct Cursor<'p> {
    handlers: &'p [Handler],
    position: usize,
    state: CursorState,
}

impl<'p> Cursor<'p> {
    pub fn new(handlers: &'p [Handler]) -> Self {
        Self {
            handlers,
            position: 0,
            state: CursorState::NotStarted,
        }
    }

    pub fn advance(&mut self) -> Step<'p> {
        if self.state == CursorState::Done {
            return Step {
                done: true,
                handler: None,
            };
        }

        let handler = self.handlers.get(self.position);
        self.position += 1;

        let done = self.position >= self.handlers.len();
        self.state = if done {
            CursorState::Done
        } else {
            CursorState::Running
        };

        Step { done, handler }
    }

    /// Stop early. Later calls to [`Cursor::advance`] yield nothing.
    pub fn halt(&mut self) {
        self.state = CursorState::Done;
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == CursorState::Done
    }

    /// Index of the handler the next call to `advance` yields
    pub fn position(&self) -> usize {
        self.position
    }
}
