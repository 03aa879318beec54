//! Tracer interface and the `log` backed implementation

use secs_core::Item;

/// Receiver of item traffic and diagnostic messages
#[cfg_attr(test, mockall::automock)]
pub trait SecsTracer: Send + Sync {
    /// An item was received; `tag` identifies the transaction
    fn trace_item_in(&self, item: &Item, tag: u32);

    /// An item was sent; `tag` identifies the transaction
    fn trace_item_out(&self, item: &Item, tag: u32);

    fn trace_info(&self, msg: &str);

    fn trace_warning(&self, msg: &str);

    fn trace_error(&self, msg: &str);
}

/// Trace line for a received item
pub fn incoming_line(item: &Item, tag: u32) -> String {
    format!("<-- [0x{:08X}] {}", tag, item.to_sml())
}

/// Trace line for a sent item
pub fn outgoing_line(item: &Item, tag: u32) -> String {
    format!("--> [0x{:08X}] {}", tag, item.to_sml())
}

/// Tracer writing to the `log` facade
#[derive(Debug, Clone)]
pub struct LogTracer {
    target: String,
}

impl LogTracer {
    /// Create a tracer logging under the given target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogTracer {
    fn default() -> Self {
        Self::new("secs")
    }
}

impl SecsTracer for LogTracer {
    fn trace_item_in(&self, item: &Item, tag: u32) {
        log::debug!(target: self.target.as_str(), "{}", incoming_line(item, tag));
    }

    fn trace_item_out(&self, item: &Item, tag: u32) {
        log::debug!(target: self.target.as_str(), "{}", outgoing_line(item, tag));
    }

    fn trace_info(&self, msg: &str) {
        log::info!(target: self.target.as_str(), "{}", msg);
    }

    fn trace_warning(&self, msg: &str) {
        log::warn!(target: self.target.as_str(), "{}", msg);
    }

    fn trace_error(&self, msg: &str) {
        log::error!(target: self.target.as_str(), "{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::sync::Mutex;

    #[test]
    fn test_trace_lines() {
        let item = Item::list([Item::u1([1])]);
        assert_eq!(
            outgoing_line(&item, 0x1234),
            "--> [0x00001234] <L [1]\n  <U1 [1] 1>\n>"
        );
        assert_eq!(
            incoming_line(&Item::ascii("OK"), 0xFFFF_FFFF),
            "<-- [0xFFFFFFFF] <A [2] 'OK'>"
        );
    }

    struct CaptureLogger {
        records: Mutex<Vec<(String, Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((
                    record.target().to_string(),
                    record.level(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    /// Records logged under `target` so far
    fn captured(target: &str) -> Vec<(Level, String)> {
        LOGGER
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _, _)| t == target)
            .map(|(_, level, msg)| (*level, msg.clone()))
            .collect()
    }

    #[test]
    fn test_log_tracer_levels() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let tracer = LogTracer::new("secs-tracer-levels");
        assert_eq!(tracer.target(), "secs-tracer-levels");

        tracer.trace_item_in(&Item::u2([7]), 1);
        tracer.trace_item_out(&Item::ascii("OK"), 0xAB);
        tracer.trace_info("info");
        tracer.trace_warning("warning");
        tracer.trace_error("error");

        assert_eq!(
            captured("secs-tracer-levels"),
            vec![
                (Level::Debug, "<-- [0x00000001] <U2 [1] 7>".to_string()),
                (Level::Debug, "--> [0x000000AB] <A [2] 'OK'>".to_string()),
                (Level::Info, "info".to_string()),
                (Level::Warn, "warning".to_string()),
                (Level::Error, "error".to_string()),
            ]
        );
    }

    #[test]
    fn test_log_tracer_default_target() {
        assert_eq!(LogTracer::default().target(), "secs");
    }
}
