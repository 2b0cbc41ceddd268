use std::panic::Location;
use std::time::Instant;

use mylogger_types::line_from_message;

/// Structured diagnostic fields derived from a failure and its call context.
#[derive(Debug, Clone)]
pub struct ExtractedFields {
    /// Source file of the capture site; `<unknown>` without a location.
    pub file_path: String,
    /// 1-based line of the deepest resolvable frame, else `None`.
    pub line: Option<i64>,
    /// Literal text of that source line, empty when inaccessible.
    pub line_code: String,
    /// Wall-clock seconds since the Unix epoch.
    pub time: f64,
    /// Seconds since the supplied reference instant.
    pub elapsed: f64,
    pub process_id: i64,
    pub process_name: Option<String>,
    pub thread_id: Option<i64>,
    pub thread_name: String,
}

/// Derive diagnostic fields from a capture site and a rendered diagnostic.
///
/// Line resolution: an explicit location (the point the failure crossed the
/// capture boundary) wins; without one, the last `File "...", line N, in ...`
/// match in `diagnostic` is used; failing both, the line is `None` and the
/// caller must tolerate it.
pub fn extract(
    location: Option<&Location<'static>>,
    diagnostic: &str,
    started: Instant,
) -> ExtractedFields {
    let file_path = location
        .map(|loc| loc.file().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());
    let line = location
        .map(|loc| loc.line() as i64)
        .or_else(|| line_from_message(diagnostic));
    let line_code = line
        .and_then(|line| source_line(&file_path, line))
        .unwrap_or_default();

    let thread = std::thread::current();

    ExtractedFields {
        file_path,
        line,
        line_code,
        time: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
        elapsed: started.elapsed().as_secs_f64(),
        process_id: std::process::id() as i64,
        process_name: process_name(),
        thread_id: thread_id_value(),
        thread_name: thread.name().unwrap_or("unnamed").to_string(),
    }
}

/// Best-effort source snippet at a 1-based line. Never an error condition.
fn source_line(file_path: &str, line: i64) -> Option<String> {
    if line < 1 {
        return None;
    }
    let contents = std::fs::read_to_string(file_path).ok()?;
    contents
        .lines()
        .nth(line as usize - 1)
        .map(|text| text.trim().to_string())
}

fn process_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

// ThreadId has no stable numeric accessor; recover the counter from its
// debug rendering ("ThreadId(3)").
fn thread_id_value() -> Option<i64> {
    let repr = format!("{:?}", std::thread::current().id());
    let digits: String = repr.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
