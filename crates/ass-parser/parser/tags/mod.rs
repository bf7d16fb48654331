//! Override tag rules
//!
//! Every tag is registered as `tag_<name>`. Tags whose value is a single
//! decimal, color, alpha or flag come from the [`factory`]; the rest are
//! written out by hand, grouped by what they control.
//!
//! Names are matched as plain prefixes, so a tag whose name is a prefix of
//! another (`fr` and `frx`, `b` and `be`) must be tried after it. The orders
//! below put longer names first.

pub(crate) mod alignment;
pub(crate) mod animation;
pub(crate) mod clipping;
pub(crate) mod factory;
pub(crate) mod formatting;
pub(crate) mod karaoke;
pub(crate) mod position;

use super::{primitives::decimal_value, tree::NodeId, ParserRun};

/// Tags tried after a backslash inside `{...}`, highest priority first
pub(crate) const OVERRIDE_TAG_ORDER: &[&str] = &[
    "tag_alpha",
    "tag_iclip",
    "tag_xbord",
    "tag_ybord",
    "tag_xshad",
    "tag_yshad",
    "tag_blur",
    "tag_bord",
    "tag_clip",
    "tag_fade",
    "tag_fscx",
    "tag_fscy",
    "tag_move",
    "tag_shad",
    "tag_fad",
    "tag_fax",
    "tag_fay",
    "tag_frx",
    "tag_fry",
    "tag_frz",
    "tag_fsp",
    "tag_org",
    "tag_pbo",
    "tag_pos",
    "tag_an",
    "tag_be",
    "tag_fn",
    "tag_fr",
    "tag_fs",
    "tag_kf",
    "tag_ko",
    "tag_1a",
    "tag_1c",
    "tag_2a",
    "tag_2c",
    "tag_3a",
    "tag_3c",
    "tag_4a",
    "tag_4c",
    "tag_a",
    "tag_b",
    "tag_c",
    "tag_i",
    "tag_k",
    "tag_K",
    "tag_p",
    "tag_q",
    "tag_r",
    "tag_s",
    "tag_t",
    "tag_u",
];

/// Tags tried after a backslash inside `\t(...)`
///
/// Only tags that can be interpolated over time.
pub(crate) const TRANSFORM_TAG_ORDER: &[&str] = &[
    "tag_alpha",
    "tag_xbord",
    "tag_ybord",
    "tag_xshad",
    "tag_yshad",
    "tag_blur",
    "tag_bord",
    "tag_fscx",
    "tag_fscy",
    "tag_shad",
    "tag_fax",
    "tag_fay",
    "tag_frx",
    "tag_fry",
    "tag_frz",
    "tag_fsp",
    "tag_be",
    "tag_fr",
    "tag_fs",
    "tag_1a",
    "tag_1c",
    "tag_2a",
    "tag_2c",
    "tag_3a",
    "tag_3c",
    "tag_4a",
    "tag_4c",
    "tag_c",
];

/// Read `N` comma separated decimals
///
/// Leaves partial input attached to `current` on failure; callers roll back
/// the whole tag.
pub(crate) fn decimal_args<const N: usize>(
    run: &mut ParserRun<'_>,
    current: NodeId,
) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    for (index, slot) in values.iter_mut().enumerate() {
        if index > 0 {
            run.read(current, ",")?;
        }
        *slot = decimal_value(run, current)?;
    }
    Some(values)
}

/// Milliseconds to seconds
pub(crate) fn seconds(milliseconds: f64) -> f64 {
    milliseconds / 1000.0
}
