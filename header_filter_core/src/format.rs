//! Display labels for checklist rows.

use crate::source::SqlValue;

const FRACTIONS: [(f64, &str); 9] = [
    (1.0 / 8.0, "⅛"),
    (1.0 / 4.0, "¼"),
    (1.0 / 3.0, "⅓"),
    (3.0 / 8.0, "⅜"),
    (1.0 / 2.0, "½"),
    (5.0 / 8.0, "⅝"),
    (2.0 / 3.0, "⅔"),
    (3.0 / 4.0, "¾"),
    (7.0 / 8.0, "⅞"),
];

// Thirds are usually stored rounded to two digits.
const FRACTION_TOLERANCE: f64 = 0.005;

/// Render a stored number with a vulgar fraction: `0.5` → `½`, `2.25` → `2¼`.
///
/// Returns the label and whether a conversion took place. Values without a matching
/// fraction, and all values when `enabled` is false, come back unchanged.
pub fn number_with_fraction(value: &str, enabled: bool) -> (String, bool) {
    if !enabled {
        return (value.to_string(), false);
    }
    let Ok(number) = value.trim().parse::<f64>() else {
        return (value.to_string(), false);
    };
    if !number.is_finite() || number < 0.0 {
        return (value.to_string(), false);
    }

    let whole = number.trunc();
    let part = number - whole;
    let Some((_, glyph)) = FRACTIONS
        .iter()
        .find(|(fraction, _)| (part - fraction).abs() < FRACTION_TOLERANCE)
    else {
        return (value.to_string(), false);
    };

    if whole == 0.0 {
        (glyph.to_string(), true)
    } else {
        (format!("{whole}{glyph}"), true)
    }
}

/// Year label, negative years are shown as `"<n> BC"`.
pub fn year_label(value: &SqlValue, bc_suffix: &str) -> String {
    let year = match value {
        SqlValue::Integer(year) => Some(*year),
        SqlValue::Real(year) if year.is_finite() => Some(year.trunc() as i64),
        SqlValue::Text(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match year {
        Some(year) if year < 0 => format!("{} {bc_suffix}", -year),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.5", "½", true)]
    #[case("2.25", "2¼", true)]
    #[case("0.33", "⅓", true)]
    #[case("1.125", "1⅛", true)]
    #[case("10", "10", false)]
    #[case("0.1", "0.1", false)]
    #[case("abc", "abc", false)]
    fn fractions(#[case] value: &str, #[case] label: &str, #[case] converted: bool) {
        assert_eq!(number_with_fraction(value, true), (label.to_string(), converted));
    }

    #[test]
    fn conversion_can_be_disabled() {
        assert_eq!(number_with_fraction("0.5", false), ("0.5".to_string(), false));
    }

    #[test]
    fn years() {
        assert_eq!(year_label(&SqlValue::Integer(-44), "BC"), "44 BC");
        assert_eq!(year_label(&SqlValue::from("-330"), "BC"), "330 BC");
        assert_eq!(year_label(&SqlValue::Integer(1950), "BC"), "1950");
        assert_eq!(year_label(&SqlValue::from("1950s"), "BC"), "1950s");
        assert_eq!(year_label(&SqlValue::Real(-44.0), "BC"), "44 BC");
        assert_eq!(year_label(&SqlValue::Real(1950.0), "BC"), "1950");
    }
}
