// templates/pages/login.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>, next: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            h1 { "Sign in" }

            @if let Some(msg) = error {
                p class="form-error" { (msg) }
            }

            form method="post" action="/login" class="login-form" {
                label {
                    "Email"
                    input type="email" name="email" required placeholder="you@example.com";
                }
                @if let Some(next) = next {
                    input type="hidden" name="next" value=(next);
                }
                button type="submit" { "Sign in" }
            }
        },
    )
}
