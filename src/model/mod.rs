//! Domain model for the company management shell.

mod section;

pub use section::Section;
