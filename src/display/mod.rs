//! Terminal display module
//!
//! Prints rendered Markdown, styled only on a color-capable TTY.

mod formatter;
mod terminal;

pub use formatter::{print_markdown, styled_output};
