//! Karaoke timing tags
//!
//! Durations stay in centiseconds as written. Unlike the generated tags a
//! karaoke tag without a duration is not recognized.

use crate::parser::{
    ast::DialoguePart, primitives::decimal_value, tree::NodeId, value::Value, ParserRun,
};

/// `\k<duration>`
pub(crate) fn tag_k(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    karaoke(run, parent, "k", DialoguePart::ColorKaraoke)
}

/// `\K<duration>`, same as `\kf`
pub(crate) fn tag_sweeping_k(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    karaoke(run, parent, "K", DialoguePart::SweepingColorKaraoke)
}

/// `\kf<duration>`
pub(crate) fn tag_kf(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    karaoke(run, parent, "kf", DialoguePart::SweepingColorKaraoke)
}

/// `\ko<duration>`
pub(crate) fn tag_ko(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    karaoke(run, parent, "ko", DialoguePart::OutlineKaraoke)
}

fn karaoke(
    run: &mut ParserRun<'_>,
    parent: NodeId,
    tag: &str,
    construct: fn(f64) -> DialoguePart,
) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, tag));
    let duration = require!(run, parent, decimal_value(run, current));

    run.tree.set_value(current, Value::Part(construct(duration)));
    Some(current)
}
