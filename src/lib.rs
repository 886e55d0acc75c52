//! Canopy - an indented directory outline that skips the noise

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{IndentFormatter, OutputConfig};
pub use tree::{EXCLUDED_DIRS, TreeOutput, is_excluded, walk};
