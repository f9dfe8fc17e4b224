//! Rendering options parsed from the card query string.
//!
//! Parsing is lenient by construction: every parameter is optional, and
//! unknown or out-of-range values silently fall back to their defaults.
//! A card request is never rejected because of its options.

use serde::Deserialize;

use crate::render::font::{self, Font};

/// Lower bound of an accepted size multiplier (inclusive).
pub const SIZE_MIN: f32 = 0.3;

/// Upper bound of an accepted size multiplier (inclusive).
pub const SIZE_MAX: f32 = 2.0;

/// Color palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse leniently: anything that isn't "light" is the default dark.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Label language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl Lang {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("ja") => Self::Ja,
            _ => Self::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

/// Per-role font size multipliers, each in [[`SIZE_MIN`], [`SIZE_MAX`]].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeOverrides {
    pub title: f32,
    pub level: f32,
    pub username: f32,
    pub bio: f32,
    pub stat_label: f32,
    pub stat_value: f32,
    pub bar_label: f32,
}

impl Default for SizeOverrides {
    fn default() -> Self {
        Self {
            title: 1.0,
            level: 1.0,
            username: 1.0,
            bio: 1.0,
            stat_label: 1.0,
            stat_value: 1.0,
            bar_label: 1.0,
        }
    }
}

/// Parse one size multiplier. Absent, non-numeric, and out-of-range inputs
/// all collapse to the neutral 1.0: discarded, never rejected.
fn scale(raw: Option<&str>) -> f32 {
    raw.and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| (SIZE_MIN..=SIZE_MAX).contains(v))
        .unwrap_or(1.0)
}

/// Validated rendering options for one card.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub theme: Theme,
    pub lang: Lang,
    pub font: &'static Font,
    pub sizes: SizeOverrides,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            lang: Lang::default(),
            font: font::default_font(),
            sizes: SizeOverrides::default(),
        }
    }
}

/// Raw query parameters of `GET /rpg/{username}`.
///
/// Everything is carried as an optional string so that deserialization can
/// never fail; normalization happens in [`CardQuery::into_options`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardQuery {
    pub theme: Option<String>,
    pub lang: Option<String>,
    pub font: Option<String>,
    pub sz_title: Option<String>,
    pub sz_level: Option<String>,
    pub sz_username: Option<String>,
    pub sz_bio: Option<String>,
    pub sz_stat_label: Option<String>,
    pub sz_stat_value: Option<String>,
    pub sz_bar_label: Option<String>,
}

impl CardQuery {
    /// Normalize the raw query into validated options.
    pub fn into_options(self) -> RenderOptions {
        RenderOptions {
            theme: Theme::parse(self.theme.as_deref()),
            lang: Lang::parse(self.lang.as_deref()),
            font: font::lookup(self.font.as_deref()),
            sizes: SizeOverrides {
                title: scale(self.sz_title.as_deref()),
                level: scale(self.sz_level.as_deref()),
                username: scale(self.sz_username.as_deref()),
                bio: scale(self.sz_bio.as_deref()),
                stat_label: scale(self.sz_stat_label.as_deref()),
                stat_value: scale(self.sz_stat_value.as_deref()),
                bar_label: scale(self.sz_bar_label.as_deref()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_defaults_to_dark() {
        assert_eq!(Theme::parse(None), Theme::Dark);
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
        assert_eq!(Theme::parse(Some("neon")), Theme::Dark);
        assert_eq!(Theme::parse(Some("LIGHT")), Theme::Dark);
    }

    #[test]
    fn theme_parse_light() {
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
    }

    #[test]
    fn lang_parse_defaults_to_en() {
        assert_eq!(Lang::parse(None), Lang::En);
        assert_eq!(Lang::parse(Some("en")), Lang::En);
        assert_eq!(Lang::parse(Some("fr")), Lang::En);
    }

    #[test]
    fn lang_parse_ja() {
        assert_eq!(Lang::parse(Some("ja")), Lang::Ja);
    }

    #[test]
    fn scale_absent_is_neutral() {
        assert_eq!(scale(None), 1.0);
    }

    #[test]
    fn scale_accepts_range_inclusive() {
        assert_eq!(scale(Some("0.3")), 0.3);
        assert_eq!(scale(Some("2.0")), 2.0);
        assert_eq!(scale(Some("1.5")), 1.5);
    }

    #[test]
    fn scale_discards_out_of_range() {
        assert_eq!(scale(Some("0.29")), 1.0);
        assert_eq!(scale(Some("2.01")), 1.0);
        assert_eq!(scale(Some("-1.0")), 1.0);
        assert_eq!(scale(Some("100")), 1.0);
    }

    #[test]
    fn scale_discards_non_numeric() {
        assert_eq!(scale(Some("big")), 1.0);
        assert_eq!(scale(Some("")), 1.0);
        assert_eq!(scale(Some("NaN")), 1.0);
    }

    #[test]
    fn query_normalizes_everything() {
        let query = CardQuery {
            theme: Some("light".to_string()),
            lang: Some("ja".to_string()),
            font: Some("no-such-font".to_string()),
            sz_bio: Some("1.5".to_string()),
            sz_title: Some("9.9".to_string()),
            ..Default::default()
        };
        let options = query.into_options();
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.lang, Lang::Ja);
        assert_eq!(options.font.key, font::default_font().key);
        assert_eq!(options.sizes.bio, 1.5);
        assert_eq!(options.sizes.title, 1.0);
        assert_eq!(options.sizes.level, 1.0);
    }

    #[test]
    fn empty_query_is_all_defaults() {
        let options = CardQuery::default().into_options();
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.lang, Lang::En);
        assert_eq!(options.sizes, SizeOverrides::default());
    }
}
