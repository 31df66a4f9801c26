use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse_hex(&value).ok_or_else(|| format!("`{}` is not a #RRGGBB color", value))
    }
}

pub const BRAND_PALETTE: [Rgb; 6] = [
    Rgb(0xFB, 0xBF, 0x24), // star amber
    Rgb(0x25, 0x63, 0xEB),
    Rgb(0x10, 0xB9, 0x81),
    Rgb(0xF4, 0x3F, 0x5E),
    Rgb(0x8B, 0x5C, 0xF6),
    Rgb(0x64, 0x74, 0x8B),
];

pub const BRAND_PRIMARY: Rgb = BRAND_PALETTE[0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Sparkline,
    Bar,
    Doughnut,
}

/// Turns a data value into label text (axis ticks, doughnut labels).
#[derive(Clone)]
pub struct ValueFormatter(Rc<dyn Fn(f64) -> String>);

impl ValueFormatter {
    pub fn new(format: impl Fn(f64) -> String + 'static) -> Self {
        Self(Rc::new(format))
    }

    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(|value| format!("{:.0}", value))
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Caller overrides. Every field left as `None` keeps the chart kind's default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub colors: Option<Vec<Rgb>>,
    pub line_width: Option<u32>,
    pub fill: Option<bool>,
    pub show_axes: Option<bool>,
    pub show_legend: Option<bool>,
    /// Fraction of the radius cut out of a doughnut. 0 draws a pie.
    pub cutout: Option<f64>,
    pub title: Option<String>,
    #[serde(skip)]
    pub value_format: Option<ValueFormatter>,
}

impl ChartOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn value_format(mut self, format: impl Fn(f64) -> String + 'static) -> Self {
        self.value_format = Some(ValueFormatter::new(format));
        self
    }
}

/// Fully resolved drawing settings for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub colors: Vec<Rgb>,
    pub line_width: u32,
    pub fill: bool,
    pub show_axes: bool,
    pub show_legend: bool,
    pub cutout: f64,
    pub title: Option<String>,
    pub value_format: ValueFormatter,
}

impl ChartConfig {
    pub fn defaults(kind: ChartKind) -> Self {
        let base = Self {
            kind,
            colors: BRAND_PALETTE.to_vec(),
            line_width: 2,
            fill: true,
            show_axes: true,
            show_legend: false,
            cutout: 0.0,
            title: None,
            value_format: ValueFormatter::default(),
        };
        match kind {
            ChartKind::Sparkline => Self {
                colors: vec![BRAND_PRIMARY],
                show_axes: false,
                ..base
            },
            ChartKind::Bar => Self {
                colors: vec![BRAND_PRIMARY],
                line_width: 0,
                ..base
            },
            ChartKind::Doughnut => Self {
                show_axes: false,
                show_legend: true,
                cutout: 0.6,
                ..base
            },
        }
    }

    pub fn merge(mut self, options: ChartOptions) -> Self {
        if let Some(colors) = options.colors.filter(|colors| !colors.is_empty()) {
            self.colors = colors;
        }
        if let Some(line_width) = options.line_width {
            self.line_width = line_width;
        }
        if let Some(fill) = options.fill {
            self.fill = fill;
        }
        if let Some(show_axes) = options.show_axes {
            self.show_axes = show_axes;
        }
        if let Some(show_legend) = options.show_legend {
            self.show_legend = show_legend;
        }
        if let Some(cutout) = options.cutout {
            self.cutout = cutout.clamp(0.0, 0.95);
        }
        if options.title.is_some() {
            self.title = options.title;
        }
        if let Some(value_format) = options.value_format {
            self.value_format = value_format;
        }
        self
    }

    /// Palette color for the `index`-th series entry, cycling.
    pub fn color(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            BRAND_PRIMARY
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_defaults_hide_chrome() {
        let config = ChartConfig::defaults(ChartKind::Sparkline);
        assert!(!config.show_axes);
        assert!(!config.show_legend);
        assert_eq!(config.colors, vec![BRAND_PRIMARY]);
    }

    #[test]
    fn doughnut_defaults_show_legend_with_hole() {
        let config = ChartConfig::defaults(ChartKind::Doughnut);
        assert!(config.show_legend);
        assert!(config.cutout > 0.0);
        assert_eq!(config.color(7), BRAND_PALETTE[1]);
    }

    #[test]
    fn caller_options_win_field_by_field() {
        let config = ChartConfig::defaults(ChartKind::Bar).merge(ChartOptions {
            show_legend: Some(true),
            title: Some("Reviews per week".into()),
            ..ChartOptions::default()
        });
        assert!(config.show_legend);
        assert!(config.show_axes);
        assert_eq!(config.title.as_deref(), Some("Reviews per week"));
        assert_eq!(config.colors, vec![BRAND_PRIMARY]);
    }

    #[test]
    fn custom_formatter_replaces_default() {
        let config = ChartConfig::defaults(ChartKind::Sparkline);
        assert_eq!(config.value_format.format(4.6), "5");

        let config = config.merge(ChartOptions::default().value_format(|v| format!("{:.1}★", v)));
        assert_eq!(config.value_format.format(4.6), "4.6★");
    }

    #[test]
    fn zero_cutout_makes_a_pie_and_cutout_is_clamped() {
        let cutout = |value: f64| ChartOptions { cutout: Some(value), ..ChartOptions::default() };
        let pie = ChartConfig::defaults(ChartKind::Doughnut).merge(cutout(0.0));
        assert_eq!(pie.cutout, 0.0);
        let clamped = ChartConfig::defaults(ChartKind::Doughnut).merge(cutout(3.0));
        assert_eq!(clamped.cutout, 0.95);
    }

    #[test]
    fn empty_color_override_keeps_palette() {
        let config = ChartConfig::defaults(ChartKind::Doughnut).merge(ChartOptions {
            colors: Some(vec![]),
            ..ChartOptions::default()
        });
        assert_eq!(config.colors.len(), BRAND_PALETTE.len());
    }

    #[test]
    fn options_parse_from_json() {
        let options = ChartOptions::from_json(r##"{"colors": ["#112233", "ffffff"], "showLegend": true}"##)
            .expect("valid options");
        assert_eq!(options.colors, Some(vec![Rgb(0x11, 0x22, 0x33), Rgb(0xFF, 0xFF, 0xFF)]));
        assert_eq!(options.show_legend, Some(true));
        assert_eq!(options.title, None);

        assert!(ChartOptions::from_json(r#"{"colors": ["blue"]}"#).is_err());
    }

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Rgb::parse_hex("#FBBF24"), Some(BRAND_PRIMARY));
        assert_eq!(Rgb::parse_hex("fbbf24"), Some(BRAND_PRIMARY));
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#zz0000"), None);
    }
}
