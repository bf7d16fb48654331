//! `\pos`, `\org` and `\move`

use super::{decimal_args, seconds};
use crate::parser::{ast::DialoguePart, tree::NodeId, value::Value, ParserRun};

/// `\pos(x,y)`
pub(crate) fn tag_pos(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    point(run, parent, "pos", |x, y| DialoguePart::Position { x, y })
}

/// `\org(x,y)`
pub(crate) fn tag_org(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    point(run, parent, "org", |x, y| DialoguePart::RotationOrigin { x, y })
}

/// `\move(x1,y1,x2,y2)` or `\move(x1,y1,x2,y2,t1,t2)` with times in milliseconds
pub(crate) fn tag_move(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "move("));
    let [x1, y1, x2, y2] = require!(run, parent, decimal_args::<4>(run, current));

    let times = if run.read(current, ",").is_some() {
        let [t1, t2] = require!(run, parent, decimal_args::<2>(run, current));
        Some((seconds(t1), seconds(t2)))
    } else {
        None
    };

    require!(run, parent, run.read(current, ")"));

    let part = DialoguePart::Move {
        x1,
        y1,
        x2,
        y2,
        times,
    };
    run.tree.set_value(current, Value::Part(part));
    Some(current)
}

fn point(
    run: &mut ParserRun<'_>,
    parent: NodeId,
    tag: &str,
    construct: fn(f64, f64) -> DialoguePart,
) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, tag));
    require!(run, parent, run.read(current, "("));
    let [x, y] = require!(run, parent, decimal_args::<2>(run, current));
    require!(run, parent, run.read(current, ")"));

    run.tree.set_value(current, Value::Part(construct(x, y)));
    Some(current)
}

#[cfg(test)]
mod tests {
    use crate::{parse_dialogue_parts, DialoguePart};

    fn tag(input: &str) -> Vec<DialoguePart> {
        parse_dialogue_parts(&format!("{{{input}}}")).unwrap()
    }

    #[test]
    fn position_and_origin() {
        assert_eq!(
            tag(r"\pos(10,20)"),
            vec![DialoguePart::Position { x: 10.0, y: 20.0 }]
        );
        assert_eq!(
            tag(r"\org(-5.5,0)"),
            vec![DialoguePart::RotationOrigin { x: -5.5, y: 0.0 }]
        );
    }

    #[test]
    fn malformed_position_falls_through_to_drawing_mode() {
        assert_eq!(
            tag(r"\pos(10)"),
            vec![
                DialoguePart::DrawingMode(None),
                DialoguePart::Comment("os(10)".into()),
            ]
        );
        assert_eq!(
            tag(r"\pos(1, 2)"),
            vec![
                DialoguePart::DrawingMode(None),
                DialoguePart::Comment("os(1, 2)".into()),
            ]
        );
    }

    #[test]
    fn move_without_times() {
        assert_eq!(
            tag(r"\move(1,2,3,4)"),
            vec![DialoguePart::Move {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                times: None,
            }]
        );
    }

    #[test]
    fn move_times_in_seconds() {
        assert_eq!(
            tag(r"\move(1,2,3,4,500,1500)"),
            vec![DialoguePart::Move {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                times: Some((0.5, 1.5)),
            }]
        );
    }

    #[test]
    fn move_with_one_time_is_comment() {
        assert_eq!(
            tag(r"\move(1,2,3,4,500)"),
            vec![DialoguePart::Comment(r"\move(1,2,3,4,500)".into())]
        );
    }
}
