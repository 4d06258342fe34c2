//! Leveled file logger
//!
//! Every operation that produces output opens the target file in
//! append-or-create mode, writes its record(s), and closes the file again
//! before returning. No handle is held between calls, so several loggers (or
//! other processes) may point at the same path without sharing any state.
//!
//! Filesystem failures are returned to the caller; the logger never hides
//! failures of its own medium.
//!
//! # Comparison directions
//!
//! Most operations write when `threshold >= level`. A few deliberately keep a
//! different rule and are kept as separate methods so callers pick the exact
//! behavior they rely on:
//!
//! | Method | Writes when |
//! |---|---|
//! | [`Logger::echo_at`] | `threshold >= level` |
//! | [`Logger::echo_at_with_indent`] | `level >= threshold` |
//! | [`Logger::exception`], [`Logger::exception_with_message`] | `level >= threshold` |
//! | [`Logger::linefeed`] | the logger is disabled |
//! | [`Logger::linefeed_at`] | `threshold >= level` |

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::console::ConsoleSink;
use super::format::{self, EXCEPTION_HEADER, NEWLINE};
use super::traits::SharedSink;
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::types::{InitMode, Severity};

/// Logger writing leveled, timestamped records to a single file
///
/// # Example
///
/// ```no_run
/// use levelog_core::{Logger, LoggerConfig, Severity, InitMode};
///
/// let config = LoggerConfig::new("/tmp/app.log")
///     .with_threshold(Severity::Debug)
///     .with_init_mode(InitMode::Overwrite);
/// let logger = Logger::from_config(config)?;
///
/// logger.write_separator("Run started [DATE]")?;
/// logger.info("listening on port 8080")?;
/// logger.echo("second line, aligned under the text above")?;
/// logger.massive("dropped: above the Debug threshold")?;
/// # Ok::<(), levelog_core::LogError>(())
/// ```
pub struct Logger {
    path: PathBuf,
    threshold: Severity,
    disabled: bool,
    debug_mirror_enabled: bool,
    mirror: SharedSink,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Create a logger at the `Info` threshold in append mode
    ///
    /// Never touches the file; an invalid path surfaces on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            threshold: Severity::Info,
            disabled: false,
            debug_mirror_enabled: false,
            mirror: Arc::new(ConsoleSink::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a logger from a configuration
    ///
    /// With [`InitMode::Overwrite`] the file is truncated (and created if
    /// absent) right away, unless the threshold is [`Severity::None`]: a
    /// disabled logger leaves the file untouched.
    pub fn from_config(config: LoggerConfig) -> LogResult<Self> {
        let mut logger = Self::new(config.file_path);
        logger.set_threshold(config.threshold);

        if !logger.disabled && config.init_mode == InitMode::Overwrite {
            File::create(&logger.path).map_err(|e| LogError::io(&logger.path, e))?;
        }

        Ok(logger)
    }

    /// Replace the debug sink that receives mirrored records
    ///
    /// Does not enable mirroring by itself.
    pub fn with_mirror(mut self, sink: SharedSink) -> Self {
        self.mirror = sink;
        self
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Path of the target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Upper-case name of the current threshold, e.g. `"INFO"`
    pub fn threshold_label(&self) -> &'static str {
        self.threshold.name()
    }

    /// Change the threshold; [`Severity::None`] disables the logger
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
        self.disabled = threshold == Severity::None;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Start copying every written record to the debug sink
    pub fn enable_debug_mirror(&mut self) {
        self.debug_mirror_enabled = true;
    }

    pub fn disable_debug_mirror(&mut self) {
        self.debug_mirror_enabled = false;
    }

    pub fn is_debug_mirror_enabled(&self) -> bool {
        self.debug_mirror_enabled
    }

    fn passes(&self, level: Severity) -> bool {
        !self.disabled && self.threshold >= level
    }

    /// Write a labeled record at `level` if the threshold lets it through
    ///
    /// `Severity::None` is not a message level and writes nothing.
    pub fn log(&self, level: Severity, text: &str) -> LogResult<()> {
        if level == Severity::None || !self.passes(level) {
            return Ok(());
        }
        let line = format::leveled_line(&self.clock.now(), level, text);
        self.write_message(&line)
    }

    pub fn critical(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Critical, text)
    }

    pub fn error(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Error, text)
    }

    pub fn warning(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Warning, text)
    }

    pub fn info(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Info, text)
    }

    pub fn debug(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Debug, text)
    }

    pub fn massive(&self, text: &str) -> LogResult<()> {
        self.log(Severity::Massive, text)
    }

    /// Write `text` indented, regardless of the threshold
    pub fn echo(&self, text: &str) -> LogResult<()> {
        self.echo_with_indent(text, true)
    }

    /// Write `text`, indented or not, regardless of the threshold
    pub fn echo_with_indent(&self, text: &str, indent: bool) -> LogResult<()> {
        if self.disabled {
            return Ok(());
        }
        self.write_message(&format::echo_line(text, indent))
    }

    /// Write `text` indented when `threshold >= level`
    pub fn echo_at(&self, text: &str, level: Severity) -> LogResult<()> {
        if !self.passes(level) {
            return Ok(());
        }
        self.write_message(&format::echo_line(text, true))
    }

    /// Write `text` when `level >= threshold`
    ///
    /// Note the direction: this is the reverse of [`Logger::echo_at`].
    pub fn echo_at_with_indent(&self, text: &str, level: Severity, indent: bool) -> LogResult<()> {
        if self.disabled || level < self.threshold {
            return Ok(());
        }
        self.write_message(&format::echo_line(text, indent))
    }

    /// Write an empty record, but only while the logger is disabled
    pub fn linefeed(&self) -> LogResult<()> {
        if !self.disabled {
            return Ok(());
        }
        self.write_message("")
    }

    /// Write an empty record when `threshold >= level`
    pub fn linefeed_at(&self, level: Severity) -> LogResult<()> {
        if !self.passes(level) {
            return Ok(());
        }
        self.write_message("")
    }

    /// Append a separator block, ignoring the threshold
    ///
    /// Every `[DATE]` in `text` becomes the current `MM/dd/yyyy hh:mm:ss`.
    pub fn write_separator(&self, text: &str) -> LogResult<()> {
        if self.disabled {
            return Ok(());
        }
        self.write_lines(&format::separator_lines(text, &self.clock.now()))
    }

    /// Log an error and its source chain when `level >= threshold`
    pub fn exception(&self, level: Severity, err: &dyn Error) -> LogResult<()> {
        self.exception_with_message(level, err, EXCEPTION_HEADER)
    }

    /// Like [`Logger::exception`] with a custom header text
    pub fn exception_with_message(&self, level: Severity, err: &dyn Error, text: &str) -> LogResult<()> {
        if self.disabled || level < self.threshold {
            return Ok(());
        }

        self.write_message(&format::leveled_line(&self.clock.now(), level, text))?;
        for line in format::describe_error(err) {
            self.echo_with_indent(&line, true)?;
        }
        Ok(())
    }

    /// Truncate the file if it exists; never creates it
    pub fn clear(&self) -> LogResult<()> {
        if self.disabled {
            return Ok(());
        }

        match OpenOptions::new().write(true).truncate(true).open(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LogError::io(&self.path, e)),
        }
    }

    fn write_message(&self, line: &str) -> LogResult<()> {
        self.write_lines(&[line])
    }

    /// Mirror, then append all lines in a single open/close cycle
    fn write_lines<S: AsRef<str>>(&self, lines: &[S]) -> LogResult<()> {
        let mut record = String::new();
        for line in lines {
            let line = line.as_ref();
            if self.debug_mirror_enabled {
                self.mirror.write_line(line);
            }
            record.push_str(line);
            record.push_str(NEWLINE);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::io(&self.path, e))?;
        file.write_all(record.as_bytes())
            .map_err(|e| LogError::io(&self.path, e))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("threshold", &self.threshold)
            .field("disabled", &self.disabled)
            .field("debug_mirror_enabled", &self.debug_mirror_enabled)
            .field("mirror", &self.mirror.name())
            .finish()
    }
}
