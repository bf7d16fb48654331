//! Rule registry
//!
//! Maps every rule name accepted by [`crate::parse`] to its implementation and
//! resolves the two ordered tag lists used inside override blocks and `\t`.
//! Built once on first use and shared read-only afterwards.

use alloc::{boxed::Box, vec::Vec};

use once_cell::sync::Lazy;
use tracing::debug;

use super::{dialogue, primitives, script, tags, tree::NodeId, ParserRun};
use crate::utils::hashers::{create_hash_map_with_capacity, HashMap};

/// Signature shared by every grammar rule function
pub(crate) type RuleFn = for<'r, 'a> fn(&'r mut ParserRun<'a>, NodeId) -> Option<NodeId>;

/// A named grammar rule
///
/// `apply` attaches the rule's subtree under `parent` and returns its node, or
/// leaves the tree untouched and returns `None`.
pub(crate) trait Rule: Send + Sync {
    /// Registry name of the rule
    fn name(&self) -> &'static str;

    /// Attempt the rule at the current position
    fn apply(&self, run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId>;
}

/// Rule backed by a plain function
struct FnRule {
    name: &'static str,
    func: RuleFn,
}

impl Rule for FnRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
        (self.func)(run, parent)
    }
}

/// Hand-written rules, listed by registry name
const GRAMMAR_RULES: &[(&str, RuleFn)] = &[
    ("script", script::script),
    ("scriptSection", script::script_section),
    ("scriptSectionHeader", script::script_section_header),
    ("scriptProperty", script::script_property),
    ("scriptComment", script::script_comment),
    ("dialogueParts", dialogue::dialogue_parts),
    ("enclosedTags", dialogue::enclosed_tags),
    ("newline", dialogue::newline),
    ("hardspace", dialogue::hardspace),
    ("text", dialogue::text),
    ("comment", dialogue::comment),
    ("decimal", primitives::decimal),
    ("unsignedDecimal", primitives::unsigned_decimal),
    ("enableDisable", primitives::enable_disable),
    ("hex", primitives::hex),
    ("color", primitives::color),
    ("alpha", primitives::alpha),
    ("colorWithAlpha", primitives::color_with_alpha),
    ("tag_a", tags::alignment::tag_a),
    ("tag_an", tags::alignment::tag_an),
    ("tag_q", tags::alignment::tag_q),
    ("tag_b", tags::formatting::tag_b),
    ("tag_fn", tags::formatting::tag_fn),
    ("tag_r", tags::formatting::tag_r),
    ("tag_k", tags::karaoke::tag_k),
    ("tag_K", tags::karaoke::tag_sweeping_k),
    ("tag_kf", tags::karaoke::tag_kf),
    ("tag_ko", tags::karaoke::tag_ko),
    ("tag_pos", tags::position::tag_pos),
    ("tag_org", tags::position::tag_org),
    ("tag_move", tags::position::tag_move),
    ("tag_fad", tags::animation::tag_fad),
    ("tag_fade", tags::animation::tag_fade),
    ("tag_t", tags::animation::tag_t),
    ("tag_clip", tags::clipping::tag_clip),
    ("tag_iclip", tags::clipping::tag_iclip),
];

/// Which ordered tag list to try after a backslash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagSet {
    /// Tags allowed in a `{...}` block
    Override,
    /// Tags allowed inside `\t(...)`
    Transform,
}

/// All registered rules plus the resolved tag orders
pub(crate) struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    by_name: HashMap<&'static str, usize>,
    override_tags: Vec<usize>,
    transform_tags: Vec<usize>,
}

static REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::build);

/// Shared registry, built on first use
pub(crate) fn registry() -> &'static RuleRegistry {
    &REGISTRY
}

impl RuleRegistry {
    fn build() -> Self {
        let mut rules: Vec<Box<dyn Rule>> = GRAMMAR_RULES
            .iter()
            .map(|&(name, func)| Box::new(FnRule { name, func }) as Box<dyn Rule>)
            .collect();
        rules.extend(tags::factory::tag_rules());

        let mut by_name = create_hash_map_with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            by_name.insert(rule.name(), index);
        }

        let resolve = |order: &[&str]| -> Vec<usize> {
            order
                .iter()
                .filter_map(|name| by_name.get(*name).copied())
                .collect()
        };
        let override_tags = resolve(tags::OVERRIDE_TAG_ORDER);
        let transform_tags = resolve(tags::TRANSFORM_TAG_ORDER);

        debug!(
            rules = rules.len(),
            override_tags = override_tags.len(),
            transform_tags = transform_tags.len(),
            "rule registry built"
        );

        Self {
            rules,
            by_name,
            override_tags,
            transform_tags,
        }
    }

    /// Look up a rule by registry name
    pub(crate) fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.by_name
            .get(name)
            .and_then(|&index| self.rules.get(index))
            .map(|rule| rule.as_ref())
    }

    /// Registered names in registration order
    pub(crate) fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Try each tag of `set` in priority order, keeping the first match
    pub(crate) fn first_tag(
        &self,
        set: TagSet,
        run: &mut ParserRun<'_>,
        parent: NodeId,
    ) -> Option<NodeId> {
        let order = match set {
            TagSet::Override => &self.override_tags,
            TagSet::Transform => &self.transform_tags,
        };

        order
            .iter()
            .filter_map(|&index| self.rules.get(index))
            .find_map(|rule| rule.apply(run, parent))
    }
}
