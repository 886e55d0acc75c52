//! Directory tree walking logic
//!
//! The walker performs a pre-order depth-first traversal, pruning a fixed
//! set of noise directories, and reports what it visits through the
//! `TreeOutput` trait so that rendering stays out of the traversal.

mod exclude;
mod walker;

pub use exclude::{EXCLUDED_DIRS, is_excluded};
pub use walker::{TreeOutput, walk};
