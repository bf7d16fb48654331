//! `\fad`, `\fade` and `\t`
//!
//! Times are written in milliseconds and stored in seconds.

use super::{decimal_args, seconds};
use crate::parser::{
    ast::DialoguePart,
    dialogue::tag_sequence,
    primitives::{decimal_value, opacity},
    registry::TagSet,
    tree::NodeId,
    value::Value,
    ParserRun,
};

/// `\fad(in,out)`
pub(crate) fn tag_fad(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "fad("));
    let [start, end] = require!(run, parent, decimal_args::<2>(run, current));
    require!(run, parent, run.read(current, ")"));

    let part = DialoguePart::Fade {
        start: seconds(start),
        end: seconds(end),
    };
    run.tree.set_value(current, Value::Part(part));
    Some(current)
}

/// `\fade(a1,a2,a3,t1,t2,t3,t4)` with transparency values `0` to `255`
pub(crate) fn tag_fade(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "fade("));
    let [a1, a2, a3, t1, t2, t3, t4] = require!(run, parent, decimal_args::<7>(run, current));
    require!(run, parent, run.read(current, ")"));

    let part = DialoguePart::ComplexFade {
        a1: opacity(a1),
        a2: opacity(a2),
        a3: opacity(a3),
        t1: seconds(t1),
        t2: seconds(t2),
        t3: seconds(t3),
        t4: seconds(t4),
    };
    run.tree.set_value(current, Value::Part(part));
    Some(current)
}

/// `\t([t1,t2,][accel,]tags)`
///
/// A lone leading number is the acceleration. Two numbers are the interval,
/// and a third after them is the acceleration. Every number is followed by a
/// comma and is divided by 1000, the acceleration included.
pub(crate) fn tag_t(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "t("));

    let mut interval = None;
    let mut acceleration = None;
    if let Some(first) = decimal_value(run, current) {
        require!(run, parent, run.read(current, ","));

        match decimal_value(run, current) {
            Some(second) => {
                require!(run, parent, run.read(current, ","));
                interval = Some((seconds(first), seconds(second)));

                if let Some(third) = decimal_value(run, current) {
                    require!(run, parent, run.read(current, ","));
                    acceleration = Some(seconds(third));
                }
            }
            None => acceleration = Some(seconds(first)),
        }
    }

    let tags = tag_sequence(run, current, TagSet::Transform, &[')', '}']);
    require!(run, parent, run.read(current, ")"));

    let part = DialoguePart::Transform {
        interval,
        acceleration,
        tags,
    };
    run.tree.set_value(current, Value::Part(part));
    Some(current)
}
