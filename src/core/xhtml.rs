//! Markup framing an XHTML log file

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub const DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;
pub const STYLE: &str =
    r#"<style type="text/css">body { font-family: monospace; font-size: 10pt; }</style>"#;
pub const FOOTER: &str = "</body></html>";

/// Header lines in write order, each written as its own append
pub fn header_lines(title: &str) -> Vec<String> {
    vec![
        XML_DECLARATION.to_string(),
        DOCTYPE.to_string(),
        r#"<html xmlns="http://www.w3.org/1999/xhtml">"#.to_string(),
        "<head>".to_string(),
        format!("<title>{}</title>", escape(title)),
        STYLE.to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
    ]
}

/// Escape the characters that would break element content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
