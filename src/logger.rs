use std::cell::RefCell;

/// Sink for the messages filters emit while they run.
///
/// Filters only report information and warnings; failures travel through
/// [`FilterError`](crate::error::FilterError).
pub trait FilterLogger {
    fn information(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Forwards messages to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl FilterLogger for LogLogger {
    fn information(&self, message: &str) {
        log::info!(target: "dicom_series_filter", "{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!(target: "dicom_series_filter", "{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Information,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every message in emission order so a caller can present them
/// once the filters are done.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: RefCell<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warning)
    }

    pub fn informations(&self) -> Vec<String> {
        self.messages(LogLevel::Information)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_owned(),
        });
    }
}

impl FilterLogger for RecordingLogger {
    fn information(&self, message: &str) {
        self.push(LogLevel::Information, message);
    }

    fn warning(&self, message: &str) {
        self.push(LogLevel::Warning, message);
    }
}
