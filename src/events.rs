//! RAM event log and the monitor that feeds it.

use core::fmt::Write;

use heapless::{Deque, String};

use crate::clock::DateTime;
use crate::config::{EVENT_LOG_CAPACITY, EVENT_STR_LENGTH};
use crate::devices::EventLog;

pub type EventLine = String<EVENT_STR_LENGTH>;

/// Fixed-capacity log. When full, the oldest entry makes room.
pub struct RamEventLog {
    entries: Deque<EventLine, EVENT_LOG_CAPACITY>,
}

impl RamEventLog {
    pub const fn new() -> Self {
        Self { entries: Deque::new() }
    }

    pub fn record(&mut self, name: &str, at: DateTime) {
        let mut line = EventLine::new();
        if write!(line, "Event = {}, Date and Time = {}", name, at).is_err() {
            warn!("event line truncated");
        }
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Room was made above.
        let _ = self.entries.push_back(line);
    }
}

impl Default for RamEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog for RamEventLog {
    fn event_count(&self) -> usize {
        self.entries.len()
    }

    fn event(&self, index: usize) -> Option<&str> {
        self.entries.iter().nth(index).map(|line| line.as_str())
    }
}

/// Snapshot of the states whose changes are logged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub alarm: bool,
    pub gas: bool,
    pub over_temperature: bool,
}

/// Logs an event on every edge of an observed state.
#[derive(Debug, Default)]
pub struct EventMonitor {
    last: Observed,
}

impl EventMonitor {
    pub const fn new() -> Self {
        Self {
            last: Observed { alarm: false, gas: false, over_temperature: false },
        }
    }

    pub fn update(&mut self, now: Observed, at: DateTime, log: &mut RamEventLog) {
        let edges = [
            (self.last.alarm, now.alarm, "ALARM_ON", "ALARM_OFF"),
            (self.last.gas, now.gas, "GAS_DET_ON", "GAS_DET_OFF"),
            (self.last.over_temperature, now.over_temperature, "OVER_TEMP_ON", "OVER_TEMP_OFF"),
        ];
        for (was, is, on, off) in edges {
            if was != is {
                log.record(if is { on } else { off }, at);
            }
        }
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: DateTime = DateTime::new(2024, 1, 15, 8, 30, 45);

    #[test]
    fn record_formats_line() {
        let mut log = RamEventLog::new();
        log.record("ALARM_ON", AT);
        assert_eq!(log.event_count(), 1);
        assert_eq!(
            log.event(0),
            Some("Event = ALARM_ON, Date and Time = Mon Jan 15 08:30:45 2024")
        );
        assert_eq!(log.event(1), None);
    }

    #[test]
    fn full_log_drops_oldest() {
        let mut log = RamEventLog::new();
        for _ in 0..EVENT_LOG_CAPACITY {
            log.record("GAS_DET_ON", AT);
        }
        log.record("ALARM_OFF", AT);
        assert_eq!(log.event_count(), EVENT_LOG_CAPACITY);
        assert!(log.event(EVENT_LOG_CAPACITY - 1).unwrap().contains("ALARM_OFF"));
    }

    #[test]
    fn monitor_logs_edges_only() {
        let mut log = RamEventLog::new();
        let mut monitor = EventMonitor::new();
        let gas = Observed { alarm: true, gas: true, over_temperature: false };

        monitor.update(gas, AT, &mut log);
        monitor.update(gas, AT, &mut log);
        assert_eq!(log.event_count(), 2);
        assert!(log.event(0).unwrap().contains("ALARM_ON"));
        assert!(log.event(1).unwrap().contains("GAS_DET_ON"));

        monitor.update(Observed { alarm: true, ..Observed::default() }, AT, &mut log);
        assert_eq!(log.event_count(), 3);
        assert!(log.event(2).unwrap().contains("GAS_DET_OFF"));
    }
}
