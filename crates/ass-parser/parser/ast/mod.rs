//! Output types of the grammar
//!
//! Plain immutable data consumed by renderers and script loaders:
//!
//! - [`part`] - dialogue parts and the override tag variants
//! - [`color`] - decoded `&H...&` colors
//! - [`script`] - section map of a whole script document

pub mod color;
pub mod part;
pub mod script;

pub use color::Color;
pub use part::{BoldWeight, DialoguePart};
pub use script::{Property, Record, Script, Section, SectionContents};
