//! Script document types
//!
//! A script is a set of named sections. Each section either holds plain
//! `key: value` properties (e.g. `[Script Info]`) or a list of records driven
//! by a `Format:` line (e.g. `[V4+ Styles]`, `[Events]`).

use alloc::{string::String, vec::Vec};

use crate::utils::hashers::{create_hash_map, HashMap};

/// Parsed script document keyed by section name
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    sections: HashMap<String, SectionContents>,
}

impl Script {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: create_hash_map(),
        }
    }

    /// Contents of the section called `name`
    ///
    /// # Example
    ///
    /// ```rust
    /// let script = ass_parser::parse_script("[Script Info]\nTitle: Demo\n")?;
    /// let info = script.section("Script Info").and_then(|s| s.properties());
    /// assert_eq!(info.and_then(|p| p.get("Title")).map(String::as_str), Some("Demo"));
    /// # Ok::<(), ass_parser::ParseError>(())
    /// ```
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&SectionContents> {
        self.sections.get(name)
    }

    /// All sections, in no particular order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionContents)> {
        self.sections
            .iter()
            .map(|(name, contents)| (name.as_str(), contents))
    }

    /// Number of sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Add a section, replacing any earlier section with the same name
    pub(crate) fn insert(&mut self, section: Section) {
        self.sections.insert(section.name, section.contents);
    }
}

/// Body of a script section
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionContents {
    /// Plain `key: value` properties
    Properties(HashMap<String, String>),
    /// Rows read through the section's `Format:` line
    Records(Vec<Record>),
}

impl Default for SectionContents {
    fn default() -> Self {
        Self::Properties(create_hash_map())
    }
}

impl SectionContents {
    /// Property map of a plain section
    #[must_use]
    pub const fn properties(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Properties(properties) => Some(properties),
            Self::Records(_) => None,
        }
    }

    /// Rows of a `Format`-driven section
    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Self::Records(records) => Some(records),
            Self::Properties(_) => None,
        }
    }

    /// Whether the section holds no properties and no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Properties(properties) => properties.is_empty(),
            Self::Records(records) => records.is_empty(),
        }
    }
}

/// One data row of a `Format`-driven section
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Line type, i.e. the property key (`Style`, `Dialogue`, `Comment`, ...)
    pub kind: String,
    /// Format field name to raw field text
    pub template: HashMap<String, String>,
}

impl Record {
    /// Raw text of the field named `name`
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.template.get(name).map(String::as_str)
    }
}

/// Named section as produced by the `scriptSection` rule
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Header text between `[` and `]`
    pub name: String,
    /// Section body
    pub contents: SectionContents,
}

/// `key: value` line as produced by the `scriptProperty` rule
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Text before the first `:`
    pub key: String,
    /// Rest of the line after the colon and any spaces
    pub value: String,
}
