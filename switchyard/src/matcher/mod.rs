//! Route matchers and the prefix-merge arithmetic they are built on.

mod matcher;
mod route_pattern;

pub use matcher::{Matcher, PATTERN_SPECIFICITY_BASE};
pub use route_pattern::RoutePattern;
