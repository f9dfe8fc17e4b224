//! SVG rendering for status cards.
//!
//! [`render_card`] is a pure function from (user record, rendering options)
//! to a deterministic SVG document; [`render_error_card`] is the degraded
//! path used when no user record could be obtained, and reads nothing but
//! the error kind and theme.
//!
//! The document is assembled by hand into a `String`; everything taken
//! from a profile passes through [`escape::escape_xml`] first.

pub mod escape;
pub mod font;
pub mod lang;
pub mod theme;

use crate::error::FetchError;
use crate::github::UserRecord;
use crate::options::{RenderOptions, Theme};
use crate::render::escape::escape_xml;
use crate::render::theme::Palette;

/// Fixed canvas dimensions.
pub const CARD_WIDTH: u32 = 480;
pub const CARD_HEIGHT: u32 = 240;

/// Pixel width of a bar track.
const BAR_WIDTH: u32 = 212;

// Base font size per text role; the rendered size is base times the
// role's override multiplier. Oversized text may clip; the renderer
// never reflows.
const BASE_TITLE: f32 = 16.0;
const BASE_LEVEL: f32 = 14.0;
const BASE_USERNAME: f32 = 13.0;
const BASE_BIO: f32 = 11.0;
const BASE_STAT_LABEL: f32 = 11.0;
const BASE_STAT_VALUE: f32 = 11.0;
const BASE_BAR_LABEL: f32 = 10.0;

/// Bio wrapping bounds: display width units per line (ASCII counts 1,
/// everything else 2) and the line count before truncation.
const BIO_LINE_UNITS: usize = 64;
const BIO_MAX_LINES: usize = 2;

/// Render a user's status card.
pub fn render_card(record: &UserRecord, options: &RenderOptions) -> String {
    let pal = theme::palette(options.theme);
    let labels = lang::labels(options.lang);
    let family = options.font.family;
    let sizes = &options.sizes;

    let mut svg = String::with_capacity(4096);
    push_header(&mut svg, pal);
    push_frame(&mut svg, pal);

    // Title row with the level badge right-aligned
    push_text(
        &mut svg,
        28,
        40,
        &px(BASE_TITLE, sizes.title),
        pal.accent,
        family,
        r#" letter-spacing="2""#,
        labels.title,
    );
    push_text(
        &mut svg,
        452,
        40,
        &px(BASE_LEVEL, sizes.level),
        pal.accent,
        family,
        r#" text-anchor="end""#,
        &format!("{} {}", labels.level, record.level()),
    );
    svg.push_str(&format!(
        r##"<line x1="28" y1="52" x2="452" y2="52" stroke="{}" stroke-width="1"/>"##,
        pal.border
    ));

    // Username: display name plus a dimmed login when they differ
    let name = escape_xml(record.display_name());
    let login = escape_xml(&record.login);
    let user_line = if record.display_name() == record.login {
        format!("@{login}")
    } else {
        format!(
            r##"{name} <tspan fill="{dim}">@{login}</tspan>"##,
            dim = pal.dim
        )
    };
    push_text(
        &mut svg,
        28,
        78,
        &px(BASE_USERNAME, sizes.username),
        pal.text,
        family,
        "",
        &user_line,
    );

    // Bio, wrapped to the canvas width
    if let Some(bio) = record.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        for (i, line) in wrap_text(bio, BIO_LINE_UNITS, BIO_MAX_LINES)
            .iter()
            .enumerate()
        {
            push_text(
                &mut svg,
                28,
                100 + (i as u32) * 16,
                &px(BASE_BIO, sizes.bio),
                pal.dim,
                family,
                "",
                &escape_xml(line),
            );
        }
    }

    // Stat rows, left column
    let stats: [(&str, u32); 4] = [
        (labels.repos, record.public_repos),
        (labels.followers, record.followers),
        (labels.following, record.following),
        (labels.years, record.account_age_years()),
    ];
    for (i, (label, value)) in stats.iter().enumerate() {
        let y = 150 + (i as u32) * 20;
        push_text(
            &mut svg,
            28,
            y,
            &px(BASE_STAT_LABEL, sizes.stat_label),
            pal.dim,
            family,
            "",
            label,
        );
        push_text(
            &mut svg,
            196,
            y,
            &px(BASE_STAT_VALUE, sizes.stat_value),
            pal.text,
            family,
            r#" text-anchor="end""#,
            &value.to_string(),
        );
    }

    // Follower/following bars, right column, scaled to a shared maximum
    let max = record.followers.max(record.following).max(1) as f32;
    let bars: [(&str, u32, &str, u32); 2] = [
        (labels.followers, record.followers, pal.bar_fill, 150),
        (labels.following, record.following, pal.bar_fill_alt, 186),
    ];
    for (label, value, fill, y) in bars {
        push_text(
            &mut svg,
            240,
            y,
            &px(BASE_BAR_LABEL, sizes.bar_label),
            pal.dim,
            family,
            "",
            &format!("{label} {value}"),
        );
        svg.push_str(&format!(
            r##"<rect x="240" y="{ty}" width="{BAR_WIDTH}" height="10" fill="{track}"/>"##,
            ty = y + 8,
            track = pal.bar_track,
        ));
        let filled = ((value as f32 / max) * BAR_WIDTH as f32).round() as u32;
        if filled > 0 {
            svg.push_str(&format!(
                r##"<rect x="240" y="{ty}" width="{filled}" height="10" fill="{fill}"/>"##,
                ty = y + 8,
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Render a minimal themed error card.
///
/// Never touches a user record; the message comes from the error kind
/// alone, so this path works when upstream data cannot be obtained.
pub fn render_error_card(error: &FetchError, theme: Theme) -> String {
    let pal = theme::palette(theme);
    let family = font::default_font().family;

    let mut svg = String::with_capacity(1024);
    push_header(&mut svg, pal);
    push_frame(&mut svg, pal);

    push_text(
        &mut svg,
        28,
        40,
        &px(BASE_TITLE, 1.0),
        pal.accent,
        family,
        r#" letter-spacing="2""#,
        "STATUS",
    );
    svg.push_str(&format!(
        r##"<line x1="28" y1="52" x2="452" y2="52" stroke="{}" stroke-width="1"/>"##,
        pal.border
    ));

    push_text(
        &mut svg,
        240,
        116,
        "24.0",
        pal.dim,
        family,
        r#" text-anchor="middle""#,
        "(x_x)",
    );
    push_text(
        &mut svg,
        240,
        152,
        &px(BASE_USERNAME, 1.0),
        pal.text,
        family,
        r#" text-anchor="middle""#,
        error.card_message(),
    );

    svg.push_str("</svg>");
    svg
}

/// Document header and canvas background.
fn push_header(svg: &mut String, pal: &Palette) {
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img"><rect width="{w}" height="{h}" fill="{bg}"/>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        bg = pal.background,
    ));
}

/// Double-line retro window frame.
fn push_frame(svg: &mut String, pal: &Palette) {
    svg.push_str(&format!(
        r##"<rect x="8" y="8" width="464" height="224" fill="{window}" stroke="{border}" stroke-width="2"/><rect x="14" y="14" width="452" height="212" fill="none" stroke="{border}" stroke-width="1"/>"##,
        window = pal.window,
        border = pal.border,
    ));
}

/// Append one `<text>` element. `content` must already be escaped (or be
/// trusted markup such as a nested tspan); `extra` carries additional
/// attributes with a leading space.
fn push_text(
    svg: &mut String,
    x: u32,
    y: u32,
    size: &str,
    fill: &str,
    family: &str,
    extra: &str,
    content: &str,
) {
    svg.push_str(&format!(
        r##"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" fill="{fill}"{extra}>{content}</text>"##
    ));
}

/// Rendered font size for a role: base size times override multiplier.
fn px(base: f32, multiplier: f32) -> String {
    format!("{:.1}", base * multiplier)
}

/// Greedy width-aware wrap. ASCII counts one unit, everything else two
/// (covers CJK bios without a full width table). Truncation past
/// `max_lines` ends with an ellipsis.
fn wrap_text(text: &str, max_units: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut units = 0usize;

    for c in text.chars() {
        let c = if c.is_whitespace() { ' ' } else { c };
        let width = if c.is_ascii() { 1 } else { 2 };

        if units + width > max_units {
            lines.push(line.trim_end().to_string());
            if lines.len() == max_lines {
                if let Some(last) = lines.last_mut() {
                    last.push('…');
                }
                return lines;
            }
            line = String::new();
            units = 0;
            if c == ' ' {
                continue;
            }
        }

        line.push(c);
        units += width;
    }

    let tail = line.trim_end();
    if !tail.is_empty() {
        lines.push(tail.to_string());
    }
    lines
}
