// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Driver-name cleanup applied before alias lookup:
/// drop `.`, turn `-` into a space, trim the ends.
/// Inner whitespace is left as-is so alias keys match byte for byte.
pub fn clean_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '.' => {}
            '-' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out.trim().to_string()
}

/// "Dutch Grand Prix" → "Dutch GP". Case-insensitive on the phrase.
pub fn short_event_name(name: &str) -> String {
    let name = normalize_ws(name);
    let lc = name.to_ascii_lowercase();
    match lc.find("grand prix") {
        Some(i) => format!("{}GP{}", &name[..i], &name[i + "grand prix".len()..]),
        None => name,
    }
}
