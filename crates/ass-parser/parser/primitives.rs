//! Primitive value rules
//!
//! Numbers, flags and the `&H...&` color and alpha notations. Colors are
//! written blue first: `&HBBGGRR&`. Alpha bytes are transparency, so they are
//! stored as opacity `1 - byte / 255`.

use alloc::string::String;

use super::{ast::Color, tree::NodeId, value::Value, ParserRun};

/// `-`? followed by an unsigned decimal
pub(crate) fn decimal(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    let negative = run.read(current, "-").is_some();
    let magnitude = require!(run, parent, unsigned_decimal_value(run, current));

    let number = if negative { -magnitude } else { magnitude };
    run.tree.set_value(current, Value::Number(number));
    Some(current)
}

/// Digits with an optional `.digits` fraction
///
/// A dot with no digits after it fails the whole rule.
pub(crate) fn unsigned_decimal(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    let characteristic = run.read_while(current, |ch| ch.is_ascii_digit());
    let mut digits = String::from(run.slice(characteristic));
    if digits.is_empty() {
        return run.fail(parent);
    }

    if run.read(current, ".").is_some() {
        let mantissa = run.read_while(current, |ch| ch.is_ascii_digit());
        let fraction = run.slice(mantissa);
        if fraction.is_empty() {
            return run.fail(parent);
        }
        digits.push('.');
        digits.push_str(fraction);
    }

    let number = require!(run, parent, digits.parse::<f64>().ok());
    run.tree.set_value(current, Value::Number(number));
    Some(current)
}

/// `0` or `1` as a boolean
pub(crate) fn enable_disable(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let next = run.peek().filter(|ch| matches!(*ch, '0' | '1'))?;

    let current = run.read_char(parent, next);
    run.tree.set_value(current, Value::Bool(next == '1'));
    Some(current)
}

/// A single hex digit, kept as text
pub(crate) fn hex(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let next = run.peek().filter(char::is_ascii_hexdigit)?;
    Some(run.read_char(parent, next))
}

/// `&H?BBGGRR(00)?&`
pub(crate) fn color(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "&"));
    run.read(current, "H");

    let mut digits = [0_u8; 6];
    for digit in &mut digits {
        *digit = require!(run, parent, hex_value(run, current));
    }

    // Trailing alpha byte, only ever `00`
    if run.read(current, "0").is_some() {
        require!(run, parent, run.read(current, "0"));
    }

    require!(run, parent, run.read(current, "&"));

    let [b1, b0, g1, g0, r1, r0] = digits;
    let color = Color::rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0));
    run.tree.set_value(current, Value::Color(color));
    Some(current)
}

/// `&H?A(A)?&?` as an opacity
///
/// A single digit stands for itself repeated: `&Hf&` is `&Hff&`.
pub(crate) fn alpha(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "&"));
    run.read(current, "H");

    let high = require!(run, parent, hex_value(run, current));
    let low = hex_value(run, current).unwrap_or(high);

    run.read(current, "&");

    run.tree
        .set_value(current, Value::Number(opacity(byte(high, low))));
    Some(current)
}

/// `&HAABBGGRR` as a color with opacity
pub(crate) fn color_with_alpha(run: &mut ParserRun<'_>, parent: NodeId) -> Option<NodeId> {
    let current = run.tree.push(parent);

    require!(run, parent, run.read(current, "&H"));

    let mut digits = [0_u8; 8];
    for digit in &mut digits {
        *digit = require!(run, parent, hex_value(run, current));
    }

    let [a1, a0, b1, b0, g1, g0, r1, r0] = digits;
    let color = Color::rgba(
        byte(r1, r0),
        byte(g1, g0),
        byte(b1, b0),
        opacity(byte(a1, a0)),
    );
    run.tree.set_value(current, Value::Color(color));
    Some(current)
}

/// Run [`decimal`] and return its number
pub(crate) fn decimal_value(run: &mut ParserRun<'_>, parent: NodeId) -> Option<f64> {
    let node = decimal(run, parent)?;
    run.tree.value(node).as_number()
}

fn unsigned_decimal_value(run: &mut ParserRun<'_>, parent: NodeId) -> Option<f64> {
    let node = unsigned_decimal(run, parent)?;
    run.tree.value(node).as_number()
}

/// Run [`hex`] and return the digit's value
fn hex_value(run: &mut ParserRun<'_>, parent: NodeId) -> Option<u8> {
    let node = hex(run, parent)?;
    let digit = run.slice(node).chars().next()?.to_digit(16)?;
    u8::try_from(digit).ok()
}

const fn byte(high: u8, low: u8) -> u8 {
    (high << 4) | low
}

/// Convert an ASS transparency byte or value to opacity
pub(crate) fn opacity(transparency: impl Into<f64>) -> f64 {
    1.0 - transparency.into() / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn number(input: &str, rule: &str) -> Option<f64> {
        parse(input, rule).ok()?.as_number()
    }

    #[test]
    fn decimals() {
        assert_eq!(number("42", "decimal"), Some(42.0));
        assert_eq!(number("-3.25", "decimal"), Some(-3.25));
        assert_eq!(number("0.5", "decimal"), Some(0.5));
        assert_eq!(number("007", "decimal"), Some(7.0));
    }

    #[test]
    fn malformed_decimals() {
        assert_eq!(number("3.", "decimal"), None);
        assert_eq!(number(".5", "decimal"), None);
        assert_eq!(number("-", "decimal"), None);
        assert_eq!(number("--1", "decimal"), None);
        assert_eq!(number("", "decimal"), None);
    }

    #[test]
    fn unsigned_rejects_sign() {
        assert_eq!(number("1.5", "unsignedDecimal"), Some(1.5));
        assert_eq!(number("-1", "unsignedDecimal"), None);
    }

    #[test]
    fn trailing_dot_leaves_nothing_consumed() {
        let mut run = ParserRun::new("3.x");
        let root = run.tree.root();
        assert!(decimal(&mut run, root).is_none());
        assert_eq!(run.position(), 0);
        assert!(run.tree.children(root).is_empty());
    }

    #[test]
    fn flags() {
        assert_eq!(parse("1", "enableDisable"), Ok(Value::Bool(true)));
        assert_eq!(parse("0", "enableDisable"), Ok(Value::Bool(false)));
        assert!(parse("2", "enableDisable").is_err());
    }

    #[test]
    fn hex_digit() {
        assert_eq!(parse("f", "hex"), Ok(Value::Str("f".into())));
        assert_eq!(parse("A", "hex"), Ok(Value::Str("A".into())));
        assert!(parse("g", "hex").is_err());
    }

    #[test]
    fn colors_are_blue_green_red() {
        assert_eq!(
            parse("&H0000FF&", "color"),
            Ok(Value::Color(Color::rgb(255, 0, 0)))
        );
        assert_eq!(
            parse("&HFF8000&", "color"),
            Ok(Value::Color(Color::rgb(0, 128, 255)))
        );
    }

    #[test]
    fn color_notation_variants() {
        let blue = Ok(Value::Color(Color::rgb(0, 0, 255)));
        assert_eq!(parse("&FF0000&", "color"), blue);
        assert_eq!(parse("&HFF000000&", "color"), blue);
        assert!(parse("&HFF00000&", "color").is_err());
        assert!(parse("&HFF0000", "color").is_err());
        assert!(parse("&HFF00&", "color").is_err());
    }

    #[test]
    fn alphas_are_opacity() {
        assert_eq!(number("&H00&", "alpha"), Some(1.0));
        assert_eq!(number("&HFF&", "alpha"), Some(0.0));
        assert_eq!(number("&Hf&", "alpha"), number("&Hff&", "alpha"));
        assert_eq!(number("&H80", "alpha"), Some(1.0 - 128.0 / 255.0));
        assert!(number("&H&", "alpha").is_none());
    }

    #[test]
    fn color_with_alpha_reads_eight_digits() {
        assert_eq!(
            parse("&H800000FF", "colorWithAlpha"),
            Ok(Value::Color(Color::rgba(255, 0, 0, 1.0 - 128.0 / 255.0)))
        );
        assert!(parse("&H0000FF", "colorWithAlpha").is_err());
        assert!(parse("&H000000FF&", "colorWithAlpha").is_err());
    }

    #[test]
    fn opacity_scale() {
        assert!((opacity(0_u8) - 1.0).abs() < f64::EPSILON);
        assert!(opacity(255_u8).abs() < f64::EPSILON);
        assert!((opacity(127.5) - 0.5).abs() < f64::EPSILON);
    }
}
