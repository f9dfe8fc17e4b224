//! Landing page describing the service.

use axum::extract::State;
use axum::response::IntoResponse;
use maud::{DOCTYPE, PreEscaped, html};

use crate::state::AppState;

/// Render the home page. Doubles as the liveness response.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let site_name = state.config.site_name.clone();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_name) " — RPG status cards for GitHub profiles" }
                meta name="description" content="Embed any GitHub profile as a retro RPG status screen. Just add a username to the URL.";
                style { (PreEscaped(HOME_CSS)) }
            }
            body {
                main class="home" {
                    h1 class="home-title" { "Git" span class="home-accent" { "Quest" } }
                    p class="home-tagline" {
                        "Any GitHub profile as a retro RPG status screen."
                    }

                    div class="home-how" {
                        p { "Add a username to the URL:" }
                        div class="home-examples" {
                            div class="home-example" {
                                span class="home-label" { "Card" }
                                code { "/rpg/" span class="home-highlight" { "{username}" } }
                            }
                            div class="home-example" {
                                span class="home-label" { "Preview" }
                                code { "/preview/" span class="home-highlight" { "{username}" } }
                            }
                        }
                    }

                    div class="home-try" {
                        p { "Try one:" }
                        a href="/preview/octocat" { "Preview a card" }
                    }
                }
            }
        }
    }
}

/// CSS for the home page only.
const HOME_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#f4f1ea;color:#1a1c2c;display:flex;justify-content:center;padding:2rem 1rem}
.home{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:60vh;text-align:center;max-width:420px}
.home-title{font-size:3rem;font-weight:800;letter-spacing:-.03em}
.home-accent{color:#b45309}
.home-tagline{font-size:1.1rem;color:#5f6c7b;margin-top:.5rem}
.home-how{margin-top:2.5rem;width:100%}
.home-how>p{font-size:.95rem;color:#5f6c7b;margin-bottom:1rem}
.home-examples{display:flex;flex-direction:column;gap:.5rem}
.home-example{display:flex;align-items:center;gap:.75rem;padding:.5rem .75rem;border-radius:6px;border:1px solid #ddd8cc}
.home-label{font-size:.75rem;font-weight:600;color:#5f6c7b;text-transform:uppercase;letter-spacing:.05em;width:64px;text-align:right;flex-shrink:0}
.home-example code{font-family:ui-monospace,Menlo,monospace;font-size:.85rem;color:#5f6c7b}
.home-highlight{color:#b45309;font-weight:600}
.home-try{margin-top:2rem;display:flex;flex-direction:column;align-items:center;gap:.75rem}
.home-try p{font-size:.85rem;color:#5f6c7b}
.home-try a{font-size:.9rem;color:#b45309;text-decoration:none}
.home-try a:hover{text-decoration:underline}
@media(prefers-color-scheme:dark){
body{background:#1a1c2c;color:#f4f4f4}
.home-accent,.home-highlight,.home-try a{color:#ffd803}
.home-example{border-color:#33365c}
}
"#;
