//! Contact line: two rows joined by `<br />`, items within a row by `" | "`.
//!
//! Row 1: email | phone | location
//! Row 2: linkedin | github | website
//!
//! Only present (non-empty) items are appended, so separators never dangle.

use crate::models::{non_empty, ResumeData};
use crate::render::escape::escape_html;

const ITEM_SEPARATOR: &str = " | ";
const ROW_SEPARATOR: &str = "<br />";

pub fn render_contact(data: &ResumeData) -> String {
    let rows: Vec<String> = [personal_row(data), profile_row(data)]
        .into_iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.join(ITEM_SEPARATOR))
        .collect();
    rows.join(ROW_SEPARATOR)
}

fn personal_row(data: &ResumeData) -> Vec<String> {
    let mut row = Vec::new();

    if let Some(email) = non_empty(&data.email) {
        let email = escape_html(email);
        row.push(format!(r#"<a href="mailto:{email}">{email}</a>"#));
    }

    match (non_empty(&data.phone_display), non_empty(&data.phone_e164)) {
        (Some(display), Some(e164)) => row.push(format!(
            r#"<a href="tel:{}">{}</a>"#,
            escape_html(e164),
            escape_html(display)
        )),
        (Some(display), None) => row.push(escape_html(display)),
        // An E.164 number alone has nothing to show.
        (None, _) => {}
    }

    if let Some(location) = non_empty(&data.location) {
        row.push(escape_html(location));
    }

    row
}

fn profile_row(data: &ResumeData) -> Vec<String> {
    [&data.linkedin_url, &data.github_url, &data.website_url]
        .into_iter()
        .filter_map(non_empty)
        .map(profile_link)
        .collect()
}

fn profile_link(url: &str) -> String {
    format!(
        r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(strip_scheme(url))
    )
}

/// Drops one leading `http://` or `https://` for display.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
