//! `\b`, `\fn` and `\r`

use alloc::string::{String, ToString};

use crate::parser::{
    ast::{BoldWeight, DialoguePart},
    primitives::enable_disable,
    tree::NodeId,
    value::Value,
    ParserRun,
};

/// `\b` with a weight (`100` to `900`), a flag, or nothing
///
/// Always matches once the name is read.
pub(crate) fn tag_b(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "b"));

    let weight = numeric_weight(run, current).or_else(|| {
        enable_disable(run, current)
            .and_then(|node| run.tree.value(node).as_bool())
            .map(BoldWeight::Toggle)
    });

    run.tree
        .set_value(current, Value::Part(DialoguePart::Bold(weight)));
    Some(current)
}

/// `\fn<name>`, an empty name resets to the style's font
pub(crate) fn tag_fn(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "fn"));
    let name = raw_argument(run, current);

    run.tree
        .set_value(current, Value::Part(DialoguePart::FontName(name)));
    Some(current)
}

/// `\r<style>`, an empty name resets to the line's own style
pub(crate) fn tag_r(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "r"));
    let style = raw_argument(run, current);

    run.tree
        .set_value(current, Value::Part(DialoguePart::Reset(style)));
    Some(current)
}

/// A non-zero digit followed by `00`
fn numeric_weight(run: &mut ParserRun<'_>, parent: NodeId) -> Option<BoldWeight> {
    let candidate = run.peek_str(3);
    let mut digits = candidate.chars();

    if !matches!(digits.next(), Some('1'..='9')) || digits.as_str() != "00" {
        return None;
    }

    let weight = candidate.parse().ok()?;
    run.read(parent, candidate);
    Some(BoldWeight::Numeric(weight))
}

/// Everything up to the next tag or the end of the block
fn raw_argument(run: &mut ParserRun<'_>, parent: NodeId) -> Option<String> {
    let node = run.read_while(parent, |ch| ch != '\\' && ch != '}');
    let text = run.slice(node);
    (!text.is_empty()).then(|| text.to_string())
}
