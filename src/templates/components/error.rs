use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page for a failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" style="max-width: 720px; margin: 4rem auto;" {
                h1 { "Error " (status) }
                p class="lead" { (message) }
                p { a href="/" { "← Back to the dashboard" } }
            }
        },
    )
}
