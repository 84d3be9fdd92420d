use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("taskboard")
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("taskboard-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(())
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

#[allow(deprecated)]
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let Ok(guard) = LOG_FILE.lock() else { return };
    if let Some(log_file) = guard.as_ref() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }

    // Never print to stderr: it corrupts the TUI
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}

/// One failure reported by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub label: String,
    pub detail: String,
}

/// Where the dashboard reports failures it swallows.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, label: &str, error: &dyn std::error::Error);
}

/// Writes diagnostics to the session log file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFileSink;

impl DiagnosticSink for LogFileSink {
    fn report(&self, label: &str, error: &dyn std::error::Error) {
        log_error(&format!("{}: {}", label, error));
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, label: &str, error: &dyn std::error::Error) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Diagnostic {
                label: label.to_string(),
                detail: error.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_memory_sink_records_label_and_error() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let error = BoardError::HttpStatus {
            status: 500,
            endpoint: "/tasks/all".to_string(),
        };
        sink.report("Error fetching tasks", &error);

        assert_eq!(
            sink.entries(),
            vec![Diagnostic {
                label: "Error fetching tasks".to_string(),
                detail: "HTTP 500 from /tasks/all".to_string(),
            }]
        );
    }
}
