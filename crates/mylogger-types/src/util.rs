use once_cell::sync::Lazy;
use regex::Regex;

static FRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"File "(.*?)", line (\d+), in (.*)"#).expect("frame pattern is valid")
});

/// Best-effort line number recovery from a free-text diagnostic.
///
/// Scans for `File "<path>", line <N>, in <func>` substrings and returns the
/// line number of the last match, which corresponds to the deepest frame of
/// a rendered propagation stack. Returns `None` when no match exists; a
/// missing line is tolerated by every consumer.
pub fn line_from_message(message: &str) -> Option<i64> {
    FRAME_PATTERN
        .captures_iter(message)
        .last()
        .and_then(|caps| caps.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

/// Strip the module path off a fully qualified type name.
///
/// `std::any::type_name` yields names like `core::num::ParseIntError`;
/// records store the bare `ParseIntError`, matching how exception types are
/// reported to humans.
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
