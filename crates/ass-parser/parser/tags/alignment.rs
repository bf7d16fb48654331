//! `\a`, `\an` and `\q`

use core::ops::RangeInclusive;

use crate::parser::{ast::DialoguePart, tree::NodeId, value::Value, ParserRun};

/// Legacy `\a` alignment, remapped onto numpad positions
///
/// SSA numbers bottom row 1-3, top row 5-7 and middle row 9-11.
pub(crate) fn tag_a(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "a"));

    let two = run.peek_str(2);
    let code = if matches!(two, "10" | "11") {
        two
    } else {
        run.peek_str(1)
    };
    let alignment = require!(run, parent, legacy_alignment(code));
    run.read(current, code);

    run.tree
        .set_value(current, Value::Part(DialoguePart::Alignment(alignment)));
    Some(current)
}

/// `\an1` to `\an9`
pub(crate) fn tag_an(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "an"));
    let alignment = require!(run, parent, read_digit(run, current, '1'..='9'));

    run.tree
        .set_value(current, Value::Part(DialoguePart::Alignment(alignment)));
    Some(current)
}

/// `\q0` to `\q3`
pub(crate) fn tag_q(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "q"));
    let style = require!(run, parent, read_digit(run, current, '0'..='3'));

    run.tree
        .set_value(current, Value::Part(DialoguePart::WrappingStyle(style)));
    Some(current)
}

fn legacy_alignment(code: &str) -> Option<u8> {
    match code {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "5" => Some(7),
        "6" => Some(8),
        "7" => Some(9),
        "9" => Some(4),
        "10" => Some(5),
        "11" => Some(6),
        _ => None,
    }
}

/// Consume one digit in `accepted`
fn read_digit(
    run: &mut ParserRun<'_>,
    parent: NodeId,
    accepted: RangeInclusive<char>,
) -> Option<u8> {
    let next = run.peek().filter(|ch| accepted.contains(ch))?;
    let digit = u8::try_from(next.to_digit(10)?).ok()?;
    run.read_char(parent, next);
    Some(digit)
}
