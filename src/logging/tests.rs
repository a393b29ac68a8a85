// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use super::{LogConfig, LogLevel, document_span};
use crate::config::types::GlobalConfig;

#[test]
fn test_log_level_bounds() {
    assert_eq!(LogLevel::new(6).unwrap(), LogLevel::Dump);
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(2), Some(LogLevel::Warn));
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(LogLevel::Debug.as_u8(), 4);
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<String> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| level.level_filter().to_string())
        .collect();
    insta::assert_snapshot!(filters.join(","), @"off,error,warn,info,debug,trace,trace");
    assert_eq!(LogLevel::Silent.level_filter(), LevelFilter::OFF);
}

#[test]
fn test_log_level_serde_as_integer() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "2");
    assert_eq!(
        serde_json::from_str::<LogLevel>("5").unwrap(),
        LogLevel::Trace
    );
    let err = serde_json::from_str::<LogLevel>("8").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert_eq!(config.log_file(), None);
}

#[test]
fn test_log_config_from_global() {
    let global = GlobalConfig {
        output_log_level: LogLevel::Error,
        file_log_level: LogLevel::Debug,
        log_file: Some(PathBuf::from("out/plistenv.log")),
    };
    let config = LogConfig::from(&global);
    assert_eq!(config.console_level(), LogLevel::Error);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert_eq!(config.log_file(), Some(Path::new("out/plistenv.log")));
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_document_span_records_counts_on_close() {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = document_span("expand", Path::new("Info.json"));
        let _entered = span.enter();
        span.record("undefined", 2);
        span.record("removed", 1);
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("document{"), "{output}");
    assert!(output.contains("command=\"expand\""), "{output}");
    assert!(output.contains("file=Info.json"), "{output}");
    assert!(output.contains("undefined=2"), "{output}");
    assert!(output.contains("removed=1"), "{output}");
}
