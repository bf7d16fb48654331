//! Script structure rules
//!
//! A script is a sequence of `[Section]` blocks. Inside a section every line
//! is a `key: value` property, a `;` comment or blank. A `Format:` property
//! switches the section into record mode, where later properties are rows
//! split on the format's field names.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{
    ast::{Property, Record, Script, Section, SectionContents},
    tree::NodeId,
    value::Value,
    ParserRun,
};
use crate::utils::hashers::{create_hash_map, create_hash_map_with_capacity};

/// Whole script: sections and blank lines only
pub(crate) fn script(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);
    let mut script = Script::new();

    while run.have_more() {
        if let Some(node) = script_section(run, current) {
            if let Value::Section(section) = run.tree.take_value(node) {
                script.insert(section);
            }
        } else if blank_line(run, current).is_none() {
            return run.fail(parent);
        }
    }

    run.tree.set_value(current, Value::Script(script));
    Some(current)
}

/// Header followed by lines up to the next `[` or the end of input
pub(crate) fn script_section(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    let header = require!(run, parent, script_section_header(run, current));
    let name = run.tree.take_value(header).into_string().unwrap_or_default();

    let mut body = SectionBody::default();
    while run.have_more() && run.peek() != Some('[') {
        if let Some(node) = script_property(run, current) {
            if let Value::Property(property) = run.tree.take_value(node) {
                require!(run, parent, body.add(property));
            }
        } else if script_comment(run, current).is_none() && blank_line(run, current).is_none() {
            return run.fail(parent);
        }
    }

    let section = Section {
        name,
        contents: body.finish(),
    };
    run.tree.set_value(current, Value::Section(section));
    Some(current)
}

/// `[name]` with a non-empty name
pub(crate) fn script_section_header(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "["));

    let name = run.read_while(current, |ch| ch != ']' && ch != '\n');
    let name = run.slice(name);
    if name.is_empty() {
        return run.fail(parent);
    }

    require!(run, parent, run.read(current, "]"));

    run.tree.set_value(current, Value::Str(name.to_string()));
    Some(current)
}

/// `key: value` up to the end of the line
pub(crate) fn script_property(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    let key = run.read_while(current, |ch| ch != ':' && ch != '\n');
    let key = run.slice(key);
    if key.is_empty() {
        return run.fail(parent);
    }

    require!(run, parent, run.read(current, ":"));
    run.read_while(current, |ch| ch == ' ');

    let value = run.read_while(current, |ch| ch != '\n');
    let value = line_content(run.slice(value));

    let property = Property {
        key: key.to_string(),
        value: value.to_string(),
    };
    run.tree.set_value(current, Value::Property(property));
    Some(current)
}

/// `;` followed by the rest of the line
pub(crate) fn script_comment(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, ";"));
    let text = run.read_while(current, |ch| ch != '\n');
    let text = line_content(run.slice(text));

    run.tree.set_value(current, Value::Str(text.to_string()));
    Some(current)
}

/// `\n` or `\r\n`
fn blank_line(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    run.read(parent, "\n")
        .or_else(|| run.read(parent, "\r\n"))
}

/// Strip the carriage return of a CRLF line
fn line_content(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Accumulates a section's lines in properties or record mode
#[derive(Default)]
struct SectionBody {
    format: Option<Vec<String>>,
    contents: Option<SectionContents>,
}

impl SectionBody {
    /// Add one property line
    ///
    /// Returns `None` when a record row follows plain properties in the same
    /// section.
    fn add(&mut self, property: Property) -> Option<()> {
        if property.key == "Format" {
            self.format = Some(
                property
                    .value
                    .split(',')
                    .map(|field| field.trim().to_string())
                    .collect(),
            );
            return Some(());
        }

        match (&self.format, &mut self.contents) {
            (Some(format), contents) => {
                let record = record_from_row(format, property);
                match contents.get_or_insert_with(|| SectionContents::Records(Vec::new())) {
                    SectionContents::Records(records) => records.push(record),
                    SectionContents::Properties(_) => return None,
                }
            }
            (None, contents) => {
                match contents
                    .get_or_insert_with(|| SectionContents::Properties(create_hash_map()))
                {
                    SectionContents::Properties(properties) => {
                        properties.insert(property.key, property.value);
                    }
                    SectionContents::Records(_) => return None,
                }
            }
        }

        Some(())
    }

    fn finish(self) -> SectionContents {
        self.contents.unwrap_or_default()
    }
}

/// Split a row on commas into at most one field per format name
///
/// The last field keeps any further commas. Fields missing from a short row
/// are left out of the template.
fn record_from_row(format: &[String], property: Property) -> Record {
    let mut template = create_hash_map_with_capacity(format.len());
    for (name, field) in format
        .iter()
        .zip(property.value.splitn(format.len(), ','))
    {
        template.insert(name.clone(), field.trim().to_string());
    }

    Record {
        kind: property.key,
        template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, parse_script};

    #[test]
    fn header_name() {
        assert_eq!(
            parse("[Script Info]", "scriptSectionHeader"),
            Ok(Value::Str("Script Info".into()))
        );
        assert!(parse("[]", "scriptSectionHeader").is_err());
        assert!(parse("[Events", "scriptSectionHeader").is_err());
    }

    #[test]
    fn property_skips_spaces_after_colon() {
        assert_eq!(
            parse("Title:   My Show", "scriptProperty"),
            Ok(Value::Property(Property {
                key: "Title".into(),
                value: "My Show".into(),
            }))
        );
        assert_eq!(
            parse("Empty:", "scriptProperty"),
            Ok(Value::Property(Property {
                key: "Empty".into(),
                value: String::new(),
            }))
        );
        assert!(parse(": value", "scriptProperty").is_err());
        assert!(parse("no colon", "scriptProperty").is_err());
    }

    #[test]
    fn comment_text() {
        assert_eq!(
            parse("; generated", "scriptComment"),
            Ok(Value::Str(" generated".into()))
        );
    }

    #[test]
    fn properties_section() {
        let script = parse_script("[Script Info]\nTitle: Test\nPlayResX: 640\n").unwrap();
        let info = script.section("Script Info").unwrap().properties().unwrap();
        assert_eq!(info.get("Title").map(String::as_str), Some("Test"));
        assert_eq!(info.get("PlayResX").map(String::as_str), Some("640"));
    }

    #[test]
    fn records_follow_format() {
        let script = parse_script(
            "[Events]\nFormat: Layer, Text\nDialogue: 0, Hello, World\nComment: 1, note\n",
        )
        .unwrap();
        let records = script.section("Events").unwrap().records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "Dialogue");
        assert_eq!(records[0].field("Layer"), Some("0"));
        assert_eq!(records[0].field("Text"), Some("Hello, World"));
        assert_eq!(records[1].kind, "Comment");
        assert_eq!(records[1].field("Text"), Some("note"));
    }

    #[test]
    fn short_row_omits_missing_fields() {
        let script = parse_script("[Events]\nFormat: Layer, Start, Text\nDialogue: 0\n").unwrap();
        let record = &script.section("Events").unwrap().records().unwrap()[0];
        assert_eq!(record.field("Layer"), Some("0"));
        assert_eq!(record.field("Start"), None);
        assert_eq!(record.template.len(), 1);
    }

    #[test]
    fn comments_and_blank_lines_inside_sections() {
        let script =
            parse_script("[Script Info]\n; comment\n\nTitle: x\r\n\r\n[Events]\n").unwrap();
        assert_eq!(script.len(), 2);
        let info = script.section("Script Info").unwrap().properties().unwrap();
        assert_eq!(info.get("Title").map(String::as_str), Some("x"));
        assert!(script.section("Events").unwrap().is_empty());
    }

    #[test]
    fn rows_after_properties_fail() {
        assert!(parse_script("[Events]\nTitle: x\nFormat: A\nDialogue: 1\n").is_err());
    }

    #[test]
    fn later_duplicates_win() {
        let script = parse_script("[A]\nk: 1\nk: 2\n[A]\nj: 3\n").unwrap();
        let section = script.section("A").unwrap().properties().unwrap();
        assert_eq!(section.get("j").map(String::as_str), Some("3"));
        assert!(section.get("k").is_none());
    }

    #[test]
    fn stray_text_before_first_section_fails() {
        assert!(parse_script("hello\n[Events]\n").is_err());
        assert!(parse_script("\n\n[Events]\n").is_ok());
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn section_rule_stops_at_next_header() {
        let mut run = ParserRun::new("[A]\nx: 1\n[B]\n");
        let root = run.tree.root();
        assert!(script_section(&mut run, root).is_some());
        assert_eq!(run.remaining(), "[B]\n");
    }
}
