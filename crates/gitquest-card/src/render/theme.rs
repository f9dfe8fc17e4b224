//! Theme palettes.
//!
//! Selecting a theme swaps the whole palette; no per-color logic.

use crate::options::Theme;

/// Colors for one theme.
#[derive(Debug)]
pub struct Palette {
    /// Canvas background.
    pub background: &'static str,
    /// Window interior fill.
    pub window: &'static str,
    /// Window frame strokes.
    pub border: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Secondary text (bio, stat labels).
    pub dim: &'static str,
    /// Highlights (level badge, title).
    pub accent: &'static str,
    /// Unfilled bar track.
    pub bar_track: &'static str,
    /// Followers bar fill.
    pub bar_fill: &'static str,
    /// Following bar fill.
    pub bar_fill_alt: &'static str,
}

pub static DARK: Palette = Palette {
    background: "#1a1c2c",
    window: "#23263e",
    border: "#f4f4f4",
    text: "#f4f4f4",
    dim: "#94a1b2",
    accent: "#ffd803",
    bar_track: "#33365c",
    bar_fill: "#41a6f6",
    bar_fill_alt: "#73eff7",
};

pub static LIGHT: Palette = Palette {
    background: "#f4f1ea",
    window: "#fffdf5",
    border: "#1a1c2c",
    text: "#1a1c2c",
    dim: "#5f6c7b",
    accent: "#b45309",
    bar_track: "#ddd8cc",
    bar_fill: "#2563eb",
    bar_fill_alt: "#0e7490",
};

/// Palette lookup for a theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
