//! `\clip` and `\iclip`
//!
//! Both take either a rectangle `(x1,y1,x2,y2)` or drawing commands with an
//! optional leading scale `([scale,]commands)`. Drawing commands are kept as
//! raw text.

use alloc::string::ToString;

use super::decimal_args;
use crate::parser::{
    ast::DialoguePart, primitives::decimal_value, tree::NodeId, value::Value, ParserRun,
};

/// `\clip(...)`, keeps what is inside the region
pub(crate) fn tag_clip(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    clip(run, parent, "clip(", true)
}

/// `\iclip(...)`, keeps what is outside the region
pub(crate) fn tag_iclip(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    clip(run, parent, "iclip(", false)
}

fn clip(run: &mut ParserRun<'_>, parent: NodeId, tag: &str, inside: bool) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, tag));

    let mut scale = None;
    let mut corner = None;
    if let Some(first) = decimal_value(run, current) {
        require!(run, parent, run.read(current, ","));

        match decimal_value(run, current) {
            Some(second) => corner = Some((first, second)),
            None => scale = Some(first),
        }
    }

    let part = if let Some((x1, y1)) = corner {
        require!(run, parent, run.read(current, ","));
        let [x2, y2] = require!(run, parent, decimal_args::<2>(run, current));
        DialoguePart::RectangularClip {
            x1,
            y1,
            x2,
            y2,
            inside,
        }
    } else {
        let commands = run.read_while(current, |ch| ch != ')' && ch != '}');
        DialoguePart::VectorClip {
            scale: scale.unwrap_or(1.0),
            commands: run.slice(commands).to_string(),
            inside,
        }
    };

    require!(run, parent, run.read(current, ")"));

    run.tree.set_value(current, Value::Part(part));
    Some(current)
}
