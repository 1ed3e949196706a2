//! Version parsing and component bumping.

pub mod bump;
pub mod parse;

pub use bump::{BumpTarget, MIN_COMPONENTS, bump};
pub use parse::{MAX_COMPONENTS, Version};
