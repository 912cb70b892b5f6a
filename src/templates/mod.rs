//! src/templates/mod.rs
//!
//! The two HTML emails sent for every contact form submission.
//!
//! Renderers take raw user text and escape it themselves, so escaping
//! happens exactly once, at render time.
mod confirmation;
pub use confirmation::render_confirmation;

mod notification;
pub use notification::render_notification;

pub const OWNER_NAME: &str = "Sahil Saykar";
pub const OWNER_TITLE: &str = "DevOps Engineer";
pub const OWNER_EMAIL: &str = "sahilsaykar24@gmail.com";

const LINE_BREAK: &str = "<br>";

/// Escapes `& < > " '` in a single pass.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes `text`, then turns each `\n` into a `<br>`.
fn escape_multiline(text: &str) -> String {
    escape_html(text).replace('\n', LINE_BREAK)
}
