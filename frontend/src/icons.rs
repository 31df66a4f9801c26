use yew::prelude::*;

/// Every icon the site renders. Search entries, nav links and table of
/// contents rows all carry one of these instead of a free-form string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Info,
    Tag,
    Gears,
    Newspaper,
    Building,
    Handshake,
    Question,
    Shield,
    Document,
    Thermometer,
    Wrench,
    Tooth,
    Car,
    Scissors,
    Utensils,
    Paw,
    Roof,
    Leaf,
    Spine,
    Key,
    Broom,
    Message,
    QrCode,
    Star,
    Chart,
    Lock,
    Card,
    Scale,
}

impl Icon {
    #[cfg(test)]
    pub const ALL: [Icon; 29] = [
        Icon::Home,
        Icon::Info,
        Icon::Tag,
        Icon::Gears,
        Icon::Newspaper,
        Icon::Building,
        Icon::Handshake,
        Icon::Question,
        Icon::Shield,
        Icon::Document,
        Icon::Thermometer,
        Icon::Wrench,
        Icon::Tooth,
        Icon::Car,
        Icon::Scissors,
        Icon::Utensils,
        Icon::Paw,
        Icon::Roof,
        Icon::Leaf,
        Icon::Spine,
        Icon::Key,
        Icon::Broom,
        Icon::Message,
        Icon::QrCode,
        Icon::Star,
        Icon::Chart,
        Icon::Lock,
        Icon::Card,
        Icon::Scale,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::Info => "ℹ️",
            Icon::Tag => "🏷️",
            Icon::Gears => "⚙️",
            Icon::Newspaper => "📰",
            Icon::Building => "🏢",
            Icon::Handshake => "🤝",
            Icon::Question => "❓",
            Icon::Shield => "🛡️",
            Icon::Document => "📄",
            Icon::Thermometer => "🌡️",
            Icon::Wrench => "🔧",
            Icon::Tooth => "🦷",
            Icon::Car => "🚗",
            Icon::Scissors => "✂️",
            Icon::Utensils => "🍽️",
            Icon::Paw => "🐾",
            Icon::Roof => "🏘️",
            Icon::Leaf => "🌿",
            Icon::Spine => "🦴",
            Icon::Key => "🔑",
            Icon::Broom => "🧹",
            Icon::Message => "💬",
            Icon::QrCode => "🔳",
            Icon::Star => "⭐",
            Icon::Chart => "📈",
            Icon::Lock => "🔒",
            Icon::Card => "💳",
            Icon::Scale => "⚖️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Icon::Home => "icon-home",
            Icon::Info => "icon-info",
            Icon::Tag => "icon-tag",
            Icon::Gears => "icon-gears",
            Icon::Newspaper => "icon-newspaper",
            Icon::Building => "icon-building",
            Icon::Handshake => "icon-handshake",
            Icon::Question => "icon-question",
            Icon::Shield => "icon-shield",
            Icon::Document => "icon-document",
            Icon::Thermometer => "icon-thermometer",
            Icon::Wrench => "icon-wrench",
            Icon::Tooth => "icon-tooth",
            Icon::Car => "icon-car",
            Icon::Scissors => "icon-scissors",
            Icon::Utensils => "icon-utensils",
            Icon::Paw => "icon-paw",
            Icon::Roof => "icon-roof",
            Icon::Leaf => "icon-leaf",
            Icon::Spine => "icon-spine",
            Icon::Key => "icon-key",
            Icon::Broom => "icon-broom",
            Icon::Message => "icon-message",
            Icon::QrCode => "icon-qr-code",
            Icon::Star => "icon-star",
            Icon::Chart => "icon-chart",
            Icon::Lock => "icon-lock",
            Icon::Card => "icon-card",
            Icon::Scale => "icon-scale",
        }
    }

    pub fn render(self) -> Html {
        html! {
            <span class={classes!("icon", self.css_class())} aria-hidden="true">{self.glyph()}</span>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_icon_has_a_glyph_and_a_unique_class() {
        let mut classes = HashSet::new();
        for icon in Icon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?} has no glyph", icon);
            assert!(classes.insert(icon.css_class()), "{:?} reuses a class", icon);
        }
    }
}
