//! Preview page with live rendering controls.
//!
//! Handles `GET /preview/{username}`: an HTML page embedding the card image
//! with controls that rewrite the image query string client-side. This is
//! also where rendering trade-offs are surfaced to callers: oversized text
//! may clip, and pixel fonts are crisp only near their native size.

use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::error::PageError;
use crate::github;
use crate::render::font;
use crate::state::AppState;

/// The adjustable size roles, as (query parameter, control label).
const SIZE_ROLES: &[(&str, &str)] = &[
    ("sz_title", "Title"),
    ("sz_level", "Level"),
    ("sz_username", "Username"),
    ("sz_bio", "Bio"),
    ("sz_stat_label", "Stat label"),
    ("sz_stat_value", "Stat value"),
    ("sz_bar_label", "Bar label"),
];

/// Content-Security-Policy for preview pages.
///
/// Inline style and the small inline control script only; images from
/// this origin (the card endpoint).
const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src 'self'; form-action 'none'; frame-ancestors 'none'";

/// Handle a preview request.
///
/// The username is validated against the same grammar as the card route
/// and rejected with 400 before any rendering occurs.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, PageError> {
    let username = username.trim();
    if github::validate_username(username).is_err() {
        return Err(PageError::InvalidUsername(username.to_string()));
    }

    let markup = preview_page(&state, username);

    let mut response = markup.into_response();
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    Ok(response)
}

/// Render the preview page for a validated username.
fn preview_page(state: &AppState, username: &str) -> Markup {
    let site_name = &state.config.site_name;
    let title = format!("{username} — {site_name} preview");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="robots" content="noindex";
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                main class="preview" {
                    h1 { (site_name) " preview" }
                    img id="card" data-user=(username) src={"/rpg/" (username)}
                        alt={"RPG status card for " (username)}
                        width="480" height="240";

                    div class="controls" {
                        div class="control" {
                            label for="theme" { "Theme" }
                            select id="theme" data-param="theme" data-default="dark" {
                                option value="dark" selected { "Dark" }
                                option value="light" { "Light" }
                            }
                        }
                        div class="control" {
                            label for="lang" { "Language" }
                            select id="lang" data-param="lang" data-default="en" {
                                option value="en" selected { "English" }
                                option value="ja" { "日本語" }
                            }
                        }
                        div class="control" {
                            label for="font" { "Font" }
                            select id="font" data-param="font" data-default=(font::default_font().key) {
                                @for entry in font::FONTS {
                                    option value=(entry.key) selected[entry.key == font::default_font().key] {
                                        (entry.display_name) " (" (entry.category.as_str()) ")"
                                    }
                                }
                            }
                        }
                        @for (param, label) in SIZE_ROLES {
                            div class="control" {
                                label for=(param) { (label) " size" }
                                input id=(param) type="range" min="0.3" max="2" step="0.1"
                                    value="1" data-param=(param) data-default="1";
                            }
                        }
                    }

                    p class="caveat" {
                        "Sizes scale each text role independently; the layout is fixed, "
                        "so oversized text may clip. Pixel fonts render crisply only near "
                        "their native size."
                    }

                    p class="embed" {
                        "Embed: " code id="embed-url" { (state.config.base_url) "/rpg/" (username) }
                    }
                }
                script { (PreEscaped(PREVIEW_JS)) }
            }
        }
    }
}

/// Inline CSS for the preview page.
const PREVIEW_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#f4f1ea;color:#1a1c2c;display:flex;justify-content:center;padding:2rem 1rem}
.preview{max-width:520px;width:100%}
h1{font-size:1.2rem;margin-bottom:1rem}
img{width:100%;height:auto;border-radius:4px}
.controls{display:grid;grid-template-columns:1fr 1fr;gap:.6rem 1.25rem;margin-top:1.25rem}
.control{display:flex;flex-direction:column;gap:.2rem}
.control label{font-size:.78rem;font-weight:600;color:#5f6c7b;text-transform:uppercase;letter-spacing:.04em}
select{padding:.3rem;border:1px solid #ddd8cc;border-radius:4px;background:#fffdf5;font-size:.9rem}
input[type=range]{accent-color:#b45309}
.caveat{margin-top:1.25rem;font-size:.85rem;color:#5f6c7b;line-height:1.5}
.embed{margin-top:.75rem;font-size:.85rem;color:#5f6c7b}
.embed code{font-family:ui-monospace,Menlo,monospace;background:#fffdf5;border:1px solid #ddd8cc;border-radius:4px;padding:.15rem .4rem;word-break:break-all}
@media(prefers-color-scheme:dark){
body{background:#1a1c2c;color:#f4f4f4}
select{background:#23263e;border-color:#33365c;color:#f4f4f4}
.embed code{background:#23263e;border-color:#33365c}
input[type=range]{accent-color:#ffd803}
}
"#;

/// Inline control script: rebuild the image query string from any control
/// whose value differs from its default.
const PREVIEW_JS: &str = r#"
const card=document.getElementById('card');
const user=card.dataset.user;
const embed=document.getElementById('embed-url');
const controls=document.querySelectorAll('[data-param]');
function refresh(){
  const params=new URLSearchParams();
  controls.forEach(el=>{
    if(el.value!==el.dataset.default)params.set(el.dataset.param,el.value);
  });
  const q=params.toString();
  const path='/rpg/'+user+(q?'?'+q:'');
  card.src=path;
  if(embed)embed.textContent=embed.textContent.split('/rpg/')[0]+path;
}
controls.forEach(el=>el.addEventListener('input',refresh));
"#;
