//! A lazily-initialized, process-lifetime message log.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info};

/// Header line written before the messages by [`Logger::dump`].
pub const DUMP_HEADER: &str = "Accessing the log";

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// An append-only, ordered list of text messages.
///
/// # Two Ways In
/// - [`Logger::instance`] returns the process-wide logger, created on first access.
/// - [`Logger::new`] builds an independent logger you own and pass around explicitly.
///
/// Prefer the second wherever the caller can thread a `&Logger` through: it is
/// testable in isolation and does not couple unrelated code through global state. The
/// global instance exists for code that genuinely has no way to receive one.
#[derive(Debug, Default)]
pub struct Logger {
    messages: Mutex<Vec<String>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide logger.
    ///
    /// Built on the first call and never dropped. `OnceLock` guarantees the
    /// initializer runs once even when several threads race on the first access.
    pub fn instance() -> &'static Logger {
        INSTANCE.get_or_init(|| {
            info!("Logger was created");
            Logger::new()
        })
    }

    /// Whether [`Logger::instance`] has built the process-wide logger yet.
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock cannot leave a half-pushed message behind.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a message to the end of the log.
    pub fn add_message(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "Message added");
        self.lock().push(message);
    }

    /// Snapshot of the messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Writes the header followed by one message per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let messages = self.lock();
        writeln!(out, "{DUMP_HEADER}")?;
        for message in messages.iter() {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }

    /// The log rendered as text, in the same layout as [`Logger::write_to`].
    pub fn dump(&self) -> String {
        let messages = self.lock();
        let mut text = String::from(DUMP_HEADER);
        text.push('\n');
        for message in messages.iter() {
            text.push_str(message);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_append_order() {
        let logger = Logger::new();
        logger.add_message("first");
        logger.add_message(String::from("second"));
        logger.add_message("third");

        assert_eq!(logger.len(), 3);
        assert_eq!(logger.messages(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dump_layout() {
        let logger = Logger::new();
        assert_eq!(logger.dump(), "Accessing the log\n");

        logger.add_message("Hello, Message1");
        logger.add_message("Hello, Message2");
        assert_eq!(
            logger.dump(),
            "Accessing the log\nHello, Message1\nHello, Message2\n"
        );
    }

    #[test]
    fn test_write_to_matches_dump() {
        let logger = Logger::new();
        logger.add_message("one");
        logger.add_message("two");

        let mut out = Vec::new();
        logger.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), logger.dump());
    }

    #[test]
    fn test_instance_is_shared() {
        let first = Logger::instance();
        let second = Logger::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_instance_reports_initialized_after_first_access() {
        let logger = Logger::instance();
        assert!(Logger::is_initialized());
        assert!(std::ptr::eq(logger, Logger::instance()));
    }

    #[test]
    fn test_independent_loggers_do_not_share_messages() {
        let a = Logger::new();
        let b = Logger::new();
        a.add_message("only in a");
        assert!(b.is_empty());
    }
}
