/// Escapes the four characters that can break out of HTML text or a
/// double-quoted attribute: `&`, `<`, `>` and `"`.
///
/// Single quotes pass through unchanged, so the output is not safe inside a
/// single-quoted attribute.
///
/// Not idempotent: escaping `&amp;` again yields `&amp;amp;`. Escape each field
/// exactly once, where it is interpolated.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
