// src/core/html.rs

/// Escape text for use inside an element or a double-quoted attribute.
pub fn escape<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// ` class="x"` for a non-empty class, nothing otherwise.
pub fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(c) if !c.is_empty() => format!(r#" class="{}""#, escape(c)),
        _ => s!(),
    }
}
