//! Record formatting: timestamps, labels, indentation and separator blocks

use std::error::Error;

use chrono::{DateTime, Local};

use crate::types::Severity;

/// Line terminator appended to every record
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// `[MM/dd/yyyy hh:mm:ss.fff] ` on a 12-hour clock
const TIMESTAMP_FORMAT: &str = "[%m/%d/%Y %I:%M:%S%.3f] ";

/// Replacement for `[DATE]` in separator messages
const SEPARATOR_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S";

/// Token substituted in separator messages
pub const DATE_TOKEN: &str = "[DATE]";

pub const TIMESTAMP_WIDTH: usize = 26;
pub const LABEL_WIDTH: usize = 11;

/// Prefix for echoed lines; as wide as timestamp plus label so continuation
/// text lines up under the text of a labeled record.
pub const INDENT: &str = "                                     ";

/// Rule framing a separator block
pub const RULE: &str = "==================================================";

/// Header text used by `Logger::exception` when no message is given
pub const EXCEPTION_HEADER: &str = "An exception occurred:";

/// Render the timestamp prefix of a labeled record
pub fn timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Fixed-width tag for a severity
pub fn level_label(level: Severity) -> &'static str {
    level.label()
}

/// `timestamp + label + text`
pub fn leveled_line(at: &DateTime<Local>, level: Severity, text: &str) -> String {
    format!("{}{}{}", timestamp(at), level_label(level), text)
}

/// Prefix `text` with [`INDENT`] when `indent` is set
pub fn echo_line(text: &str, indent: bool) -> String {
    if indent {
        format!("{}{}", INDENT, text)
    } else {
        text.to_string()
    }
}

/// Lines of a separator block: blank, rule, message, rule, blank
pub fn separator_lines(message: &str, at: &DateTime<Local>) -> Vec<String> {
    let date = at.format(SEPARATOR_DATE_FORMAT).to_string();
    vec![
        String::new(),
        RULE.to_string(),
        message.replace(DATE_TOKEN, &date),
        RULE.to_string(),
        String::new(),
    ]
}

/// Full description of an error: its message followed by one
/// `Caused by: ...` entry per source, split into lines.
pub fn describe_error(err: &dyn Error) -> Vec<String> {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str("Caused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    split_lines(&text)
}

/// Split on `\r\n` and `\n`, keeping empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
