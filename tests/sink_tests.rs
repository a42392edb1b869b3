use std::fs::{self, File};
use std::sync::Arc;
use std::thread;

use tempfile::tempdir;
use tracing_subscriber::EnvFilter;
use typed_logger::subscriber::file_subscriber;
use typed_logger::{
    channel_log, Channels, Hex, LogFacadeSink, MemorySink, NullSink, Severity,
    TracingSink, WriterSink,
};

#[test]
fn test_writer_sink_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("channels.log");

    let sink = WriterSink::new(File::create(&path).unwrap());
    {
        let log: Channels = Channels::new(&sink);
        log.info.call("{} of {}", (3u32, "widgets"));
        log.error.call("code={:#}", (Hex(0x2au8),));
        log.fatal.call("{} left", (0u64,));
    }
    assert_eq!(sink.write_errors(), 0);
    drop(sink.into_inner());

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "INFO: 3 of widgets\nERROR: code=0x2a\nFATAL: 0 left\n");
}

#[test]
fn test_writer_sink_flushes_each_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flushed.log");

    let sink = WriterSink::new(std::io::BufWriter::new(File::create(&path).unwrap()));
    let log: Channels = Channels::new(&sink);
    log.warning.call("disk at {}%", (91u8,));

    // Readable while the writer is still alive
    assert_eq!(fs::read_to_string(&path).unwrap(), "WARNING: disk at 91%\n");
}

#[test]
fn test_tracing_sink_reaches_subscriber() {
    let dir = tempdir().unwrap();
    let subscriber = file_subscriber(dir.path(), "trace.log", EnvFilter::new("debug"));

    tracing::subscriber::with_default(subscriber, || {
        let sink = TracingSink;
        let log: Channels = Channels::new(&sink);
        log.debug.call("probe {}", (1u8,));
        log.verbose.call("{} of {}", (3u32, "widgets"));
        log.warning.call("load={:.1}", (0.76f64,));
    });

    let contents = fs::read_to_string(dir.path().join("trace.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("DEBUG") && lines[0].ends_with("typed_logger: probe 1"));
    assert!(lines[1].contains("INFO") && lines[1].ends_with("typed_logger: 3 of widgets"));
    assert!(lines[2].contains("WARN") && lines[2].ends_with("typed_logger: load=0.8"));
}

#[test]
fn test_file_subscriber_applies_filter() {
    let dir = tempdir().unwrap();
    let subscriber = file_subscriber(dir.path(), "filtered.log", EnvFilter::new("warn"));

    tracing::subscriber::with_default(subscriber, || {
        let log: Channels = Channels::new(&TracingSink);
        log.info.call("quiet", ());
        log.error.call("loud", ());
    });

    let contents = fs::read_to_string(dir.path().join("filtered.log")).unwrap();
    assert!(!contents.contains("quiet"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("typed_logger: loud"));
}

#[test]
fn test_shared_sink_across_threads() {
    let sink = Arc::new(MemorySink::new());

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                let log: Channels = Channels::new(&sink);
                for i in 0..25u32 {
                    channel_log!(log.info, "worker {} line {}", worker, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.len(), 100);
    assert_eq!(sink.count(Severity::Info), 100);
    assert!(sink
        .lines()
        .iter()
        .any(|(_, line)| line == "worker 3 line 24"));
}

#[test]
fn test_boxed_and_null_sinks() {
    let boxed = Box::new(MemorySink::new());
    let log: Channels = Channels::new(&boxed);
    log.info.call("through a box", ());
    assert_eq!(boxed.lines(), vec![(Severity::Info, "through a box".to_string())]);

    let null = NullSink;
    let silent: Channels = Channels::new(&null);
    silent.fatal.call("{}", (1u8,));
}

#[test]
fn test_log_facade_sink_target() {
    assert_eq!(LogFacadeSink::default().target(), "typed_logger");
    assert_eq!(LogFacadeSink::new("app::net").target(), "app::net");

    // No logger installed in this process; records are discarded.
    let sink = LogFacadeSink::default();
    let log: Channels = Channels::new(&sink);
    log.warning.call("{} of {}", (3u32, "widgets"));
}
