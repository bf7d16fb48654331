//! Rule payloads
//!
//! Each grammar rule leaves a [`Value`] on the node it creates. The start rule's
//! payload is what [`crate::parse`] returns.

use alloc::{string::String, vec::Vec};

use super::ast::{Color, DialoguePart, Property, Script, Section};

/// Payload produced by a grammar rule
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// No payload (structural nodes)
    #[default]
    Empty,
    /// Literal text, raw runs and names
    Str(String),
    /// Decoded decimal or alpha opacity
    Number(f64),
    /// Enable/disable flag
    Bool(bool),
    /// Decoded color
    Color(Color),
    /// Single dialogue part or override tag
    Part(DialoguePart),
    /// Ordered dialogue parts
    Parts(Vec<DialoguePart>),
    /// `key: value` line of a script section
    Property(Property),
    /// Named script section
    Section(Section),
    /// Whole script document
    Script(Script),
}

impl Value {
    /// Numeric payload, if any
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Boolean payload, if any
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Color payload, if any
    #[must_use]
    pub const fn as_color(&self) -> Option<&Color> {
        match self {
            Self::Color(color) => Some(color),
            _ => None,
        }
    }

    /// String payload, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Consume the value as a list of dialogue parts
    #[must_use]
    pub fn into_parts(self) -> Option<Vec<DialoguePart>> {
        match self {
            Self::Parts(parts) => Some(parts),
            _ => None,
        }
    }

    /// Consume the value as a script document
    #[must_use]
    pub fn into_script(self) -> Option<Script> {
        match self {
            Self::Script(script) => Some(script),
            _ => None,
        }
    }

    /// Consume the value as a single dialogue part
    #[must_use]
    pub fn into_part(self) -> Option<DialoguePart> {
        match self {
            Self::Part(part) => Some(part),
            _ => None,
        }
    }

    /// Consume the value as a string
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }
}

/// Extraction of a typed tag argument from a rule payload
///
/// Used by the tag factory to turn a value sub-rule's payload into the
/// argument type of the tag it builds.
pub trait FromValue: Sized {
    /// Decode `value`, `None` when the payload has the wrong shape
    fn from_value(value: Value) -> Option<Self>;
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Option<Self> {
        value.as_number()
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for Color {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Color(color) => Some(color),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_match_variant() {
        assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Empty.as_str(), None);
    }

    #[test]
    fn from_value_rejects_other_shapes() {
        assert_eq!(f64::from_value(Value::Number(2.0)), Some(2.0));
        assert_eq!(f64::from_value(Value::Str("2".into())), None);
        assert_eq!(bool::from_value(Value::Bool(true)), Some(true));
        assert_eq!(
            Color::from_value(Value::Color(Color::rgb(1, 2, 3))),
            Some(Color::rgb(1, 2, 3))
        );
        assert_eq!(Color::from_value(Value::Number(0.0)), None);
    }

    #[test]
    fn into_parts_consumes_list() {
        let value = Value::Parts(vec![DialoguePart::NewLine]);
        assert_eq!(value.into_parts(), Some(vec![DialoguePart::NewLine]));
        assert_eq!(Value::Empty.into_parts(), None);
    }
}
