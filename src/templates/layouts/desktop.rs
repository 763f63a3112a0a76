use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " – Motormart" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                script src="/static/like.js" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Motormart" }
                    nav {
                        ul {
                            li { a href="/" { "Browse" } }
                            li { a href="/sell" { "Sell your car" } }
                        }
                    }
                    @if signed_in {
                        form method="post" action="/logout" class="inline" {
                            button type="submit" class="link-button" { "Sign out" }
                        }
                    } @else {
                        a href="/login" { "Sign in" }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
