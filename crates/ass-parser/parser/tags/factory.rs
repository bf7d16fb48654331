//! Generated rules for single-value tags
//!
//! A tag here is its literal name followed by one value rule. When the value
//! is missing the tag fails, unless it is marked required, in which case it
//! is still recognized with no value.

use alloc::{boxed::Box, vec, vec::Vec};
use core::marker::PhantomData;

use crate::parser::{
    ast::DialoguePart,
    primitives::{alpha, color, decimal, enable_disable},
    registry::{Rule, RuleFn},
    tree::NodeId,
    value::{FromValue, Value},
    ParserRun,
};

/// Rule for a tag carrying one value of type `T`
pub(crate) struct TagRule<T> {
    rule_name: &'static str,
    tag: &'static str,
    value: RuleFn,
    construct: fn(Option<T>) -> DialoguePart,
    required: bool,
    _value: PhantomData<fn() -> T>,
}

impl<T: FromValue> Rule for TagRule<T> {
    fn name(&self) -> &'static str {
        self.rule_name
    }

    fn apply(&self, run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
        let current = run.tree.push(parent);

        require!(run, parent, run.read(current, self.tag));

        let value = (self.value)(run, current)
            .and_then(|node| T::from_value(run.tree.take_value(node)));
        let part = match value {
            Some(value) => (self.construct)(Some(value)),
            None if self.required => (self.construct)(None),
            None => return run.fail(parent),
        };

        run.tree.set_value(current, Value::Part(part));
        Some(current)
    }
}

/// Build the rule for `\<tag><value>`
pub(crate) fn make_tag_rule<T: FromValue + 'static>(
    rule_name: &'static str,
    tag: &'static str,
    value: RuleFn,
    construct: fn(Option<T>) -> DialoguePart,
    required: bool,
) -> Box<dyn Rule> {
    Box::new(TagRule {
        rule_name,
        tag,
        value,
        construct,
        required,
        _value: PhantomData,
    })
}

macro_rules! tag {
    ($tag:literal, $value:expr, $construct:expr) => {
        make_tag_rule(concat!("tag_", $tag), $tag, $value, $construct, false)
    };
    ($tag:literal, $value:expr, $construct:expr, required) => {
        make_tag_rule(concat!("tag_", $tag), $tag, $value, $construct, true)
    };
}

/// All generated tag rules
pub(crate) fn tag_rules() -> Vec<Box<dyn Rule>> {
    vec![
        tag!("alpha", alpha, DialoguePart::Alpha),
        tag!("be", decimal, DialoguePart::Blur),
        tag!("blur", decimal, DialoguePart::GaussianBlur),
        tag!("bord", decimal, DialoguePart::Border),
        tag!("c", color, DialoguePart::PrimaryColor),
        tag!("fax", decimal, DialoguePart::SkewX),
        tag!("fay", decimal, DialoguePart::SkewY),
        tag!("fr", decimal, DialoguePart::RotateZ),
        tag!("frx", decimal, DialoguePart::RotateX),
        tag!("fry", decimal, DialoguePart::RotateY),
        tag!("frz", decimal, DialoguePart::RotateZ),
        tag!("fs", decimal, DialoguePart::FontSize),
        tag!("fscx", decimal, DialoguePart::FontScaleX),
        tag!("fscy", decimal, DialoguePart::FontScaleY),
        tag!("fsp", decimal, DialoguePart::LetterSpacing),
        tag!("i", enable_disable, DialoguePart::Italic),
        tag!("p", decimal, DialoguePart::DrawingMode, required),
        tag!("pbo", decimal, DialoguePart::DrawingBaselineOffset, required),
        tag!("s", enable_disable, DialoguePart::StrikeThrough),
        tag!("shad", decimal, DialoguePart::Shadow),
        tag!("u", enable_disable, DialoguePart::Underline),
        tag!("xbord", decimal, DialoguePart::BorderX),
        tag!("xshad", decimal, DialoguePart::ShadowX),
        tag!("ybord", decimal, DialoguePart::BorderY),
        tag!("yshad", decimal, DialoguePart::ShadowY),
        tag!("1a", alpha, DialoguePart::PrimaryAlpha),
        tag!("1c", color, DialoguePart::PrimaryColor),
        tag!("2a", alpha, DialoguePart::SecondaryAlpha),
        tag!("2c", color, DialoguePart::SecondaryColor),
        tag!("3a", alpha, DialoguePart::OutlineAlpha),
        tag!("3c", color, DialoguePart::OutlineColor),
        tag!("4a", alpha, DialoguePart::ShadowAlpha),
        tag!("4c", color, DialoguePart::ShadowColor),
    ]
}
