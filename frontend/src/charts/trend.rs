use log::warn;

use crate::dom::{self, DomError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendClass {
    Positive,
    Negative,
    Neutral,
}

impl TrendClass {
    pub const ALL: [TrendClass; 3] = [TrendClass::Positive, TrendClass::Negative, TrendClass::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            TrendClass::Positive => "positive",
            TrendClass::Negative => "negative",
            TrendClass::Neutral => "neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendBadge {
    pub text: String,
    pub class: TrendClass,
}

impl TrendBadge {
    /// `None`, NaN and infinities render as "--".
    pub fn from_value(value: Option<f64>) -> Self {
        let value = match value {
            Some(value) if value.is_finite() => value,
            _ => {
                return Self { text: "--".to_string(), class: TrendClass::Neutral };
            }
        };

        // Half away from zero, so 5.25 shows as 5.3.
        let magnitude = (value.abs() * 10.0).round() / 10.0;
        if value > 0.0 {
            Self { text: format!("▲ +{:.1}%", magnitude), class: TrendClass::Positive }
        } else if value < 0.0 {
            Self { text: format!("▼ -{:.1}%", magnitude), class: TrendClass::Negative }
        } else {
            Self { text: "▬ 0.0%".to_string(), class: TrendClass::Neutral }
        }
    }
}

/// Writes the badge for `value` into the element with `element_id`.
/// A missing element is logged and otherwise ignored.
pub fn update_trend_badge(element_id: &str, value: Option<f64>) {
    if let Err(err) = apply_badge(element_id, &TrendBadge::from_value(value)) {
        warn!("trend badge not updated: {}", err);
    }
}

/// `current` with every trend class swapped out for `class`. Other classes
/// keep their order.
pub fn badge_class_name(current: &str, class: TrendClass) -> String {
    current
        .split_whitespace()
        .filter(|name| !TrendClass::ALL.iter().any(|trend| trend.as_str() == *name))
        .chain(std::iter::once(class.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply_badge(element_id: &str, badge: &TrendBadge) -> Result<(), DomError> {
    let element = dom::element_by_id(element_id)?;
    element.set_text_content(Some(&badge.text));
    element.set_class_name(&badge_class_name(&element.class_name(), badge.class));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rounds_half_up() {
        let badge = TrendBadge::from_value(Some(5.25));
        assert_eq!(badge.text, "▲ +5.3%");
        assert_eq!(badge.class, TrendClass::Positive);
    }

    #[test]
    fn negative_keeps_one_decimal() {
        let badge = TrendBadge::from_value(Some(-2.0));
        assert_eq!(badge.text, "▼ -2.0%");
        assert_eq!(badge.class, TrendClass::Negative);
    }

    #[test]
    fn missing_values_are_neutral_dashes() {
        for value in [None, Some(f64::NAN), Some(f64::INFINITY), Some(f64::NEG_INFINITY)] {
            let badge = TrendBadge::from_value(value);
            assert_eq!(badge.text, "--");
            assert_eq!(badge.class, TrendClass::Neutral);
        }
    }

    #[test]
    fn zero_is_flat() {
        let badge = TrendBadge::from_value(Some(0.0));
        assert_eq!(badge.text, "▬ 0.0%");
        assert_eq!(badge.class.as_str(), "neutral");
    }

    #[test]
    fn class_swap_drops_the_old_trend() {
        assert_eq!(
            badge_class_name("trend-badge positive", TrendClass::Negative),
            "trend-badge negative"
        );
        assert_eq!(
            badge_class_name("trend-badge neutral  positive wide", TrendClass::Positive),
            "trend-badge wide positive"
        );
        assert_eq!(badge_class_name("", TrendClass::Neutral), "neutral");
    }
}
