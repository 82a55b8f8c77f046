//! Coefficient chart generation.
//!
//! The coefficient table is ranked once, descending by value, and the two
//! charts show its head and tail. Slicing is positional: "top" is the first
//! `n` ranked rows, "bottom" the last `m`, never a semantic threshold.

pub mod layout;
pub mod rank;
pub mod svg;

pub use layout::{Bar, BarChart};
pub use rank::{bottom_slice, format_label, rank_coefficients, top_slice};
pub use svg::{svg_string, write_svg_file};
