//! Backtracking parser for ASS scripts and dialogue text
//!
//! The grammar is a hand-written PEG: every rule is a function that tries to
//! build a subtree under a parent node of the [`tree::ParseTree`], and on failure
//! detaches everything it added before returning `None`. Ordered choice is
//! "try rules in sequence until one returns `Some`". There is no separate cursor;
//! the next input character is always read at the root's `end`.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::{parse_dialogue_parts, DialoguePart};
//!
//! let parts = parse_dialogue_parts(r"ab{\i1}cd")?;
//! assert_eq!(
//!     parts,
//!     vec![
//!         DialoguePart::Text("ab".into()),
//!         DialoguePart::Italic(Some(true)),
//!         DialoguePart::Text("cd".into()),
//!     ]
//! );
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

use alloc::{string::ToString, vec::Vec};

use tracing::{debug, trace};

/// Unwrap a rule attempt or roll back the current rule
///
/// On `None`, detaches the current rule's node from `$parent` and returns
/// `None` from the enclosing rule function.
macro_rules! require {
    ($run:ident, $parent:expr, $attempt:expr) => {
        match $attempt {
            Some(value) => value,
            None => return $run.fail($parent),
        }
    };
}

pub mod ast;
pub mod errors;
pub mod tree;
pub mod value;

mod dialogue;
mod primitives;
mod registry;
mod script;
mod tags;

pub use ast::{BoldWeight, Color, DialoguePart, Property, Record, Script, Section, SectionContents};
pub use errors::ParseError;
pub use value::Value;

use crate::Result;
use registry::Rule;
use tree::{NodeId, ParseTree};

/// State of a single parse: the input and the tree built over it
pub(crate) struct ParserRun<'a> {
    input: &'a str,
    tree: ParseTree,
}

impl<'a> ParserRun<'a> {
    /// Start a parse over `input` with an empty tree
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            tree: ParseTree::new(),
        }
    }

    /// Rightmost consumed offset
    pub(crate) fn position(&self) -> usize {
        self.tree.end(self.tree.root())
    }

    /// Whether unconsumed input remains
    pub(crate) fn have_more(&self) -> bool {
        self.position() < self.input.len()
    }

    /// Unconsumed input
    pub(crate) fn remaining(&self) -> &'a str {
        self.input.get(self.position()..).unwrap_or_default()
    }

    /// Next unconsumed character
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Up to `count` next unconsumed characters
    pub(crate) fn peek_str(&self, count: usize) -> &'a str {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .nth(count)
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..end]
    }

    /// Input covered by `node`
    pub(crate) fn slice(&self, node: NodeId) -> &'a str {
        self.input
            .get(self.tree.start(node)..self.tree.end(node))
            .unwrap_or_default()
    }

    /// Consume `literal` as a leaf under `parent` if it comes next
    pub(crate) fn read(&mut self, parent: NodeId, literal: &str) -> Option<NodeId> {
        self.remaining()
            .starts_with(literal)
            .then(|| self.tree.push_literal(parent, literal))
    }

    /// Consume a single character as a leaf under `parent`
    pub(crate) fn read_char(&mut self, parent: NodeId, ch: char) -> NodeId {
        let mut buffer = [0; 4];
        self.tree.push_literal(parent, ch.encode_utf8(&mut buffer))
    }

    /// Consume the longest run of characters satisfying `predicate`
    ///
    /// Always succeeds; the returned leaf may be empty.
    pub(crate) fn read_while(
        &mut self,
        parent: NodeId,
        mut predicate: impl FnMut(char) -> bool,
    ) -> NodeId {
        let rest = self.remaining();
        let len = rest.find(|ch: char| !predicate(ch)).unwrap_or(rest.len());
        self.tree.push_literal(parent, &rest[..len])
    }

    /// Detach the current rule from `parent` and report no match
    pub(crate) fn fail(&mut self, parent: NodeId) -> Option<NodeId> {
        self.tree.pop(parent);
        None
    }

    /// Move a single dialogue part out of `node`
    pub(crate) fn take_part(&mut self, node: NodeId) -> Option<DialoguePart> {
        self.tree.take_value(node).into_part()
    }
}

/// Parse `input` with the start rule called `rule`
///
/// Succeeds only when the rule matches the entire input. Rule names are those
/// listed by [`rule_names`], e.g. `"dialogueParts"`, `"script"`, `"color"`.
///
/// # Errors
///
/// Returns [`ParseError::UnknownRule`] for an unregistered rule name and
/// [`ParseError::Failed`] when the rule does not match or stops short of the
/// end of the input.
///
/// # Example
///
/// ```rust
/// use ass_parser::{parse, Color, Value};
///
/// assert_eq!(parse("&H0000FF&", "color")?, Value::Color(Color::rgb(255, 0, 0)));
/// assert!(parse("12abc", "decimal").is_err());
/// # Ok::<(), ass_parser::ParseError>(())
/// ```
pub fn parse(input: &str, rule: &str) -> Result<Value> {
    let start = registry::registry()
        .get(rule)
        .ok_or_else(|| ParseError::UnknownRule {
            rule: rule.to_string(),
        })?;

    run(input, start)
}

/// Parse dialogue text into its parts with the `dialogueParts` rule
///
/// # Errors
///
/// Returns [`ParseError::Failed`] when the text cannot be parsed, e.g. when an
/// override block `{` is never closed.
pub fn parse_dialogue_parts(input: &str) -> Result<Vec<DialoguePart>> {
    let value = parse(input, "dialogueParts")?;
    value.into_parts().ok_or_else(|| ParseError::Failed {
        rule: "dialogueParts".to_string(),
    })
}

/// Parse a whole script with the `script` rule
///
/// # Errors
///
/// Returns [`ParseError::Failed`] when any line is neither part of a section
/// nor blank.
pub fn parse_script(input: &str) -> Result<Script> {
    let value = parse(input, "script")?;
    value.into_script().ok_or_else(|| ParseError::Failed {
        rule: "script".to_string(),
    })
}

/// Names accepted by [`parse`]
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    registry::registry().names()
}

/// Run `start` over a fresh tree and check that it consumed everything
fn run(input: &str, start: &dyn Rule) -> Result<Value> {
    trace!(rule = start.name(), len = input.len(), "parse started");

    let mut run = ParserRun::new(input);
    let root = run.tree.root();

    match start.apply(&mut run, root) {
        Some(node) if run.tree.end(node) == input.len() => Ok(run.tree.take_value(node)),
        outcome => {
            debug!(
                rule = start.name(),
                consumed = outcome.map_or(0, |node| run.tree.end(node)),
                len = input.len(),
                "parse failed"
            );
            Err(ParseError::Failed {
                rule: start.name().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_reads_at_rightmost_end() {
        let mut run = ParserRun::new("héllo");
        let root = run.tree.root();
        assert_eq!(run.peek(), Some('h'));

        run.read(root, "h");
        assert_eq!(run.peek(), Some('é'));
        assert_eq!(run.peek_str(2), "él");
        assert_eq!(run.peek_str(10), "éllo");
    }

    #[test]
    fn read_rejects_mismatch_without_consuming() {
        let mut run = ParserRun::new("abc");
        let root = run.tree.root();
        assert!(run.read(root, "b").is_none());
        assert_eq!(run.position(), 0);
        assert!(run.read(root, "ab").is_some());
        assert_eq!(run.position(), 2);
    }

    #[test]
    fn read_while_may_be_empty() {
        let mut run = ParserRun::new("12ab");
        let root = run.tree.root();
        let digits = run.read_while(root, |ch| ch.is_ascii_digit());
        assert_eq!(run.slice(digits), "12");
        let more = run.read_while(root, |ch| ch.is_ascii_digit());
        assert_eq!(run.slice(more), "");
        assert_eq!(run.position(), 2);
    }

    #[test]
    fn fail_rolls_back_current_rule() {
        let mut run = ParserRun::new("abc");
        let root = run.tree.root();
        let current = run.tree.push(root);
        run.read(current, "ab");
        assert_eq!(run.position(), 2);

        assert!(run.fail(root).is_none());
        assert_eq!(run.position(), 0);
        assert!(run.tree.children(root).is_empty());
    }

    #[test]
    fn unknown_rule_is_reported() {
        assert_eq!(
            parse("x", "noSuchRule"),
            Err(ParseError::UnknownRule {
                rule: "noSuchRule".into()
            })
        );
    }

    #[test]
    fn prefix_match_is_failure() {
        assert_eq!(
            parse("12abc", "decimal"),
            Err(ParseError::Failed {
                rule: "decimal".into()
            })
        );
        assert_eq!(parse("12", "decimal"), Ok(Value::Number(12.0)));
    }

    #[test]
    fn empty_dialogue_is_empty_list() {
        assert_eq!(parse_dialogue_parts(""), Ok(Vec::new()));
    }

    #[test]
    fn rule_names_include_entry_rules() {
        let names: Vec<_> = rule_names().collect();
        assert!(names.contains(&"dialogueParts"));
        assert!(names.contains(&"script"));
        assert!(names.contains(&"tag_frz"));
    }
}
