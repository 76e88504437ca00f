//! JSONL log of engine events.
//!
//! One object per line: `{"ts_ms":..,"session":..,"event":{"type":..,..}}`.
//! The first write error disables the log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::engine::GameObserver;
use crate::types::GameEvent;

#[derive(Serialize)]
struct EventRecord<'a> {
    ts_ms: i64,
    session: u32,
    event: &'a GameEvent,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Append to the file at `path`, creating it if needed
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Open `path` if given; failures are logged and leave the log off
    pub fn open_or_disabled(path: Option<&Path>) -> Self {
        match path.map(Self::open) {
            Some(Ok(log)) => log,
            Some(Err(e)) => {
                eprintln!("[EventLog] {:#}; event log disabled", e);
                Self::disabled()
            }
            None => Self::disabled(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn write_record(&mut self, session: u32, event: &GameEvent) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        let record = EventRecord {
            ts_ms: chrono::Utc::now().timestamp_millis(),
            session,
            event,
        };
        serde_json::to_writer(&mut self.buf, &record).context("encode event")?;
        self.buf.push(b'\n');
        out.write_all(&self.buf).context("write event")?;
        out.flush().context("flush event log")?;
        Ok(())
    }
}

impl<W: Write> GameObserver for EventLog<W> {
    fn on_event(&mut self, session: u32, event: &GameEvent) {
        if let Err(e) = self.write_record(session, event) {
            eprintln!("[EventLog] {:#}; event log disabled", e);
            self.out = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, PieceKind};
    use std::io;

    #[test]
    fn test_writes_one_json_object_per_event() {
        let mut log = EventLog::from_writer(Vec::new());
        log.on_event(1, &GameEvent::Started { session: 1 });
        log.on_event(
            1,
            &GameEvent::Moved {
                direction: Direction::Left,
            },
        );
        log.on_event(1, &GameEvent::Locked { kind: PieceKind::T });

        let bytes = log.into_inner().unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["session"], 1);
        assert_eq!(lines[0]["event"]["type"], "started");
        assert_eq!(lines[1]["event"]["type"], "moved");
        assert_eq!(lines[1]["event"]["direction"], "left");
        assert_eq!(lines[2]["event"]["kind"], "T");
        assert!(lines[2]["ts_ms"].as_i64().unwrap() > 0);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_disables_log() {
        let mut log = EventLog::from_writer(FailingWriter);
        assert!(log.is_enabled());
        log.on_event(1, &GameEvent::Paused);
        assert!(!log.is_enabled());
        // Further events are ignored quietly.
        log.on_event(1, &GameEvent::Resumed);
    }

    #[test]
    fn test_disabled_log_ignores_events() {
        let mut log = EventLog::disabled();
        log.on_event(3, &GameEvent::Fell);
        assert!(!log.is_enabled());
    }

    #[test]
    fn test_open_failure_leaves_log_off() {
        let dir = std::env::temp_dir().join("retro_tetris_no_such_dir_for_log");
        let log = EventLog::open_or_disabled(Some(&dir.join("missing").join("events.jsonl")));
        assert!(!log.is_enabled());
    }
}
