//! Dialogue text rules
//!
//! Dialogue text is plain characters interleaved with `{...}` override blocks
//! and the `\N` / `\h` markers. Inside a block every backslash starts a tag;
//! anything that is not a recognized tag is kept as comment text.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{
    ast::{part::push_merged, DialoguePart},
    registry::{registry, TagSet},
    tree::NodeId,
    value::Value,
    ParserRun,
};

/// Full dialogue line
///
/// An unterminated `{` fails the whole rule.
pub(crate) fn dialogue_parts(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);
    let mut parts = Vec::new();

    while run.have_more() {
        if let Some(node) = enclosed_tags(run, current) {
            if let Some(block) = run.tree.take_value(node).into_parts() {
                parts.extend(block);
            }
            continue;
        }

        if run.peek() == Some('{') {
            return run.fail(parent);
        }

        if let Some(node) = newline(run, current).or_else(|| hardspace(run, current)) {
            parts.extend(run.take_part(node));
            continue;
        }

        let node = require!(run, parent, text(run, current));
        if let Some(part) = run.take_part(node) {
            push_merged(&mut parts, part);
        }
    }

    run.tree.set_value(current, Value::Parts(parts));
    Some(current)
}

/// `{` tags and comments `}`
pub(crate) fn enclosed_tags(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "{"));
    let parts = tag_sequence(run, current, TagSet::Override, &['}']);
    require!(run, parent, run.read(current, "}"));

    run.tree.set_value(current, Value::Parts(parts));
    Some(current)
}

/// `\N`
pub(crate) fn newline(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    marker(run, parent, "\\N", DialoguePart::NewLine)
}

/// `\h`
pub(crate) fn hardspace(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    marker(run, parent, "\\h", DialoguePart::HardSpace)
}

/// Any single character as text
pub(crate) fn text(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    single_char(run, parent, DialoguePart::Text)
}

/// Any single character as comment text
pub(crate) fn comment(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    single_char(run, parent, DialoguePart::Comment)
}

/// Tags and comment characters up to one of `terminators` or the end of input
///
/// Each backslash tries the tags of `set` in priority order; when none
/// matches, the backslash itself becomes comment text. Adjacent comment
/// characters are merged. The terminator is left unconsumed.
pub(crate) fn tag_sequence(
    run: &mut ParserRun<'_>,
    current: NodeId,
    set: TagSet,
    terminators: &[char],
) -> Vec<DialoguePart> {
    let mut parts = Vec::new();

    while let Some(next) = run.peek() {
        if terminators.contains(&next) {
            break;
        }

        let mut node = None;
        if run.read(current, "\\").is_some() {
            node = registry().first_tag(set, run, current);
            if node.is_none() {
                run.tree.pop(current);
            }
        }

        // `comment` accepts any character, so this always advances
        let Some(node) = node.or_else(|| comment(run, current)) else {
            break;
        };

        if let Some(part) = run.take_part(node) {
            push_merged(&mut parts, part);
        }
    }

    parts
}

fn marker(
    run: &mut ParserRun<'_>,
    parent: NodeId,
    literal: &str,
    part: DialoguePart,
) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, literal));

    run.tree.set_value(current, Value::Part(part));
    Some(current)
}

fn single_char(
    run: &mut ParserRun<'_>,
    parent: NodeId,
    construct: fn(String) -> DialoguePart,
) -> Option<NodeId> {
    let next = run.peek()?;
    let current = run.tree.push(parent);
    run.read_char(current, next);

    run.tree
        .set_value(current, Value::Part(construct(next.to_string())));
    Some(current)
}
