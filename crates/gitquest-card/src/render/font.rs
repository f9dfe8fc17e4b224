//! Font registry.
//!
//! A fixed table of named fonts; behavior per entry is pure data
//! substitution, so this is a lookup with a default, not a trait.

/// Broad rendering category, surfaced on the preview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontCategory {
    /// Bitmap-style faces. Crisp only near their native size; a caveat
    /// surfaced to callers, not enforced here.
    Pixel,
    Monospace,
    Sans,
}

impl FontCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pixel => "pixel",
            Self::Monospace => "monospace",
            Self::Sans => "sans",
        }
    }
}

/// One registry entry.
#[derive(Debug)]
pub struct Font {
    /// Registry key used in the `font` query parameter.
    pub key: &'static str,
    /// Human-readable name for the preview controls.
    pub display_name: &'static str,
    /// CSS font-family value embedded in the SVG.
    pub family: &'static str,
    pub category: FontCategory,
}

/// The fixed font set. The first entry is the fallback for unknown keys.
pub static FONTS: &[Font] = &[
    Font {
        key: "dotgothic",
        display_name: "DotGothic16",
        family: "'DotGothic16','MS Gothic',monospace",
        category: FontCategory::Pixel,
    },
    Font {
        key: "press-start",
        display_name: "Press Start 2P",
        family: "'Press Start 2P',monospace",
        category: FontCategory::Pixel,
    },
    Font {
        key: "pixelify",
        display_name: "Pixelify Sans",
        family: "'Pixelify Sans',sans-serif",
        category: FontCategory::Pixel,
    },
    Font {
        key: "mono",
        display_name: "System Mono",
        family: "ui-monospace,'SF Mono',Menlo,monospace",
        category: FontCategory::Monospace,
    },
    Font {
        key: "sans",
        display_name: "System Sans",
        family: "-apple-system,'Segoe UI',Roboto,sans-serif",
        category: FontCategory::Sans,
    },
];

/// The fallback entry used when the requested key is absent.
pub fn default_font() -> &'static Font {
    &FONTS[0]
}

/// Resolve a registry key, falling back to the default entry.
pub fn lookup(key: Option<&str>) -> &'static Font {
    key.and_then(|k| FONTS.iter().find(|f| f.key == k))
        .unwrap_or_else(default_font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_key() {
        assert_eq!(lookup(Some("press-start")).display_name, "Press Start 2P");
        assert_eq!(lookup(Some("mono")).category, FontCategory::Monospace);
    }

    #[test]
    fn lookup_unknown_key_falls_back() {
        assert_eq!(lookup(Some("comic-sans")).key, default_font().key);
    }

    #[test]
    fn lookup_absent_falls_back() {
        assert_eq!(lookup(None).key, "dotgothic");
    }

    #[test]
    fn registry_keys_are_unique() {
        for (i, a) in FONTS.iter().enumerate() {
            for b in &FONTS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
