//! # ASS-RS Parser
//!
//! Backtracking parser for ASS (Advanced `SubStation` Alpha) subtitle scripts
//! and the override tag language embedded in dialogue text.
//!
//! ## Features
//!
//! - **Script structure**: `[Section]` blocks with properties or `Format`-driven records
//! - **Dialogue text**: text runs, comments, `\N`, `\h` and every override tag
//!   as a typed [`DialoguePart`]
//! - **Named rules**: any grammar rule can be used as the start rule through [`parse`]
//! - **All or nothing**: a rule that stops short of the end of input is a failure
//! - **Thread-safe**: the rule registry is built once and shared read-only
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_parser::{parse_dialogue_parts, parse_script, DialoguePart};
//!
//! let script = parse_script(
//!     "[Events]\nFormat: Layer, Text\nDialogue: 0,{\\pos(10,20)}Hello\n",
//! )?;
//! let events = script.section("Events").and_then(|section| section.records());
//! let text = events.and_then(|records| records[0].field("Text")).unwrap_or_default();
//!
//! let parts = parse_dialogue_parts(text)?;
//! assert_eq!(
//!     parts,
//!     vec![
//!         DialoguePart::Position { x: 10.0, y: 20.0 },
//!         DialoguePart::Text("Hello".into()),
//!     ]
//! );
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod parser;
pub mod utils;

pub use parser::{
    parse, parse_dialogue_parts, parse_script, rule_names, BoldWeight, Color, DialoguePart,
    ParseError, Record, Script, SectionContents, Value,
};

/// Result type for the public entry points
pub type Result<T> = core::result::Result<T, ParseError>;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
