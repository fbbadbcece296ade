//! Ordered handler execution with short-circuit recovery.

mod cursor;
mod error_policy;
mod pipeline;

pub use cursor::{Cursor, CursorState, Step};
pub use error_policy::ErrorPolicy;
pub use pipeline::Pipeline;
