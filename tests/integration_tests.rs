//! Integration tests for the logger
//!
//! These tests verify:
//! - Level gating, including that suppressed calls never resolve a caller
//! - Key derivation and inheritance across `with`
//! - Null-value suppression and the omitted keys segment
//! - Prefixes and caller locations in the printed line
//! - Thread safety of shared loggers

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use timber::prelude::*;
use timber::keys;

#[derive(Clone, Default)]
struct CaptureAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureAppender {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Appender for CaptureAppender {
    fn append(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

#[derive(Clone, Default)]
struct CountingResolver {
    calls: Arc<AtomicUsize>,
}

impl CallerResolver for CountingResolver {
    fn resolve(&self, _skip: usize) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        "app.rs:7".to_string()
    }
}

fn test_logger(level: Level) -> (Logger, CaptureAppender, CountingResolver) {
    let appender = CaptureAppender::default();
    let resolver = CountingResolver::default();
    let logger = Logger::builder()
        .min_level(level)
        .colors(false)
        .appender(appender.clone())
        .resolver(resolver.clone())
        .build();
    (logger, appender, resolver)
}

#[test]
fn test_end_to_end_debug_line() {
    let (logger, appender, _) = test_logger(Level::Debug);
    logger.with(&keys! { "thing" => "stuff" }).debug("test");

    let lines = appender.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "[DBG] app.rs:7 { thing: stuff } | test");
}

#[test]
fn test_end_to_end_above_threshold_prints_nothing() {
    let (logger, appender, resolver) = test_logger(Level::Info);
    logger.with(&keys! { "thing" => "stuff" }).debug("test");

    assert!(appender.lines().is_empty());
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_level_gate_for_every_pair() {
    for &threshold in Level::ALL {
        let (logger, appender, resolver) = test_logger(threshold);
        for &level in Level::ALL {
            logger.logf(level, format_args!("{}", level));
        }
        let expected: Vec<Level> = Level::ALL
            .iter()
            .copied()
            .filter(|level| level.ordinal() >= threshold.ordinal())
            .collect();
        assert_eq!(appender.lines().len(), expected.len());
        assert_eq!(resolver.calls.load(Ordering::SeqCst), expected.len());
        for (line, level) in appender.lines().iter().zip(expected) {
            assert!(line.starts_with(&format!("[{}]", level.short_tag())));
        }
    }
}

#[test]
fn test_with_is_non_destructive() {
    let (parent, appender, _) = test_logger(Level::Trace);
    let child = parent.with(&keys! { "a" => 1 });
    let sibling = parent.with(&keys! { "b" => 2 });

    assert!(!sibling.keys().contains_key("a"));
    assert!(parent.keys().is_empty());

    let grandchild = child.with(&keys! { "c" => 3 });
    assert!(grandchild.keys().contains_key("a"));
    assert!(grandchild.keys().contains_key("c"));
    assert!(!child.keys().contains_key("c"));

    parent.info("parent");
    sibling.info("sibling");
    assert_eq!(
        appender.lines(),
        vec!["[INF] app.rs:7 parent", "[INF] app.rs:7 { b: 2 } | sibling"]
    );
}

#[test]
fn test_innermost_key_wins() {
    let (parent, appender, _) = test_logger(Level::Trace);
    parent
        .with(&keys! { "a" => 1 })
        .with(&keys! { "a" => 2 })
        .info("collision");
    assert_eq!(appender.lines(), vec!["[INF] app.rs:7 { a: 2 } | collision"]);
}

#[test]
fn test_null_only_keys_omit_segment() {
    let (parent, appender, _) = test_logger(Level::Trace);
    parent.with(&keys! { "a" => FieldValue::Null }).info("bare");
    parent
        .with(&keys! { "things" => "stuff", "otherThings" => None::<i64> })
        .info("partial");
    assert_eq!(
        appender.lines(),
        vec!["[INF] app.rs:7 bare", "[INF] app.rs:7 { things: stuff } | partial"]
    );
}

#[test]
fn test_prefix_segment() {
    let (parent, appender, _) = test_logger(Level::Trace);
    parent
        .with(&keys! { "things" => "stuff", "otherThings" => FieldValue::Null })
        .prefix("12.0.0.1:54313")
        .debug("test");
    assert_eq!(
        appender.lines(),
        vec!["[DBG] [12.0.0.1:54313] app.rs:7 { things: stuff } | test"]
    );
}

#[test]
fn test_formatted_and_keyed_variants() {
    let (logger, appender, _) = test_logger(Level::Trace);
    logger.infof(format_args!("test {}", "format"));
    logger.critical_ex(&keys! { "thing" => "stuff" }, format_args!("test"));
    logger.log_ex(Level::Verbose, None, format_args!("no keys"));
    assert_eq!(
        appender.lines(),
        vec![
            "[INF] app.rs:7 test format",
            "[CRT] app.rs:7 { thing: stuff } | test",
            "[VRB] app.rs:7 no keys",
        ]
    );
}

#[test]
fn test_multiline_message_stays_on_one_line() {
    let (logger, appender, _) = test_logger(Level::Trace);
    logger.info("User login\nERROR fake entry\n");
    let lines = appender.lines();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains('\n'));
    assert!(lines[0].ends_with("User login\\nERROR fake entry\\n"));
}

fn location_of(line: &str) -> &str {
    line.split(' ').nth(1).unwrap_or_default()
}

fn located_logger(extra_depth: usize) -> (Logger, CaptureAppender) {
    let appender = CaptureAppender::default();
    let logger = Logger::builder()
        .min_level(Level::Trace)
        .colors(false)
        .depth(extra_depth)
        .appender(appender.clone())
        .build();
    (logger, appender)
}

#[test]
fn test_real_caller_location() {
    let (logger, appender) = located_logger(0);

    let plain = line!() + 1;
    logger.info("located");
    let derived = line!() + 1;
    logger.with(&keys! { "k" => 1 }).warningf(format_args!("located {}", 2));
    let via_log = line!() + 1;
    timber::log!(logger, Level::Error, "located {}", 3);
    let via_info = line!() + 1;
    timber::info!(logger, keys: keys! { "k" => 2 }, "located {}", 4);

    let lines = appender.lines();
    assert_eq!(lines.len(), 4);
    for (line, expected) in lines.iter().zip([plain, derived, via_log, via_info]) {
        assert_eq!(
            location_of(line),
            format!("integration_tests.rs:{}", expected),
            "line: {}",
            line
        );
    }
}

#[test]
fn test_extra_depth_points_at_wrapper_caller() {
    #[track_caller]
    #[inline(never)]
    fn wrapper(logger: &Logger) {
        logger.info("wrapped");
    }

    let (logger, appender) = located_logger(1);
    let expected = line!() + 1;
    wrapper(&logger);

    let line = appender.lines().remove(0);
    assert_eq!(location_of(&line), format!("integration_tests.rs:{}", expected));
}

#[test]
fn test_prefix_and_keys_stay_on_one_line() {
    let (logger, appender, _) = test_logger(Level::Trace);
    logger.with(&keys! { "k" => "x\nFAKE line" }).info("m");
    logger.prefix("p\r\nq").info("n");

    let lines = appender.lines();
    assert_eq!(
        lines,
        vec![
            "[INF] app.rs:7 { k: x\\nFAKE line } | m",
            "[INF] [p\\r\\nq] app.rs:7 n",
        ]
    );
    for line in &lines {
        assert!(!line.contains('\n') && !line.contains('\r'));
    }
}

#[test]
fn test_concurrent_with_and_info() {
    let (parent, appender, _) = test_logger(Level::Trace);
    let parent = Arc::new(parent.with(&keys! { "service" => "api" }));

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let parent = Arc::clone(&parent);
            thread::spawn(move || {
                parent
                    .with(&keys! { "thread" => i })
                    .infof(format_args!("this is a message"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = appender.lines();
    assert_eq!(lines.len(), 100);
    for line in &lines {
        assert!(line.starts_with("[INF] app.rs:7 { service: api, thread: "));
        assert!(line.ends_with(" } | this is a message"));
    }
    assert_eq!(parent.keys().len(), 1);
}

#[test]
fn test_concurrent_instance_level_changes() {
    let (logger, appender, _) = test_logger(Level::Verbose);
    let logger = Arc::new(logger);
    let done = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let toggler = {
        let logger = Arc::clone(&logger);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                let next = if logger.get_level() == Level::Debug {
                    Level::Verbose
                } else {
                    Level::Debug
                };
                logger.set_level(next);
            }
        })
    };

    let handles: Vec<_> = (0..200)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let level = logger.get_level();
                assert!(Level::ALL.contains(&level));
                let child = logger.with(&keys! { format!("thread-{}", i) => i });
                child.info("test");
                child.debug("test");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    done.store(true, Ordering::Relaxed);
    toggler.join().expect("toggler panicked");

    // Info is above both toggled thresholds, so every thread printed it.
    let infos = appender
        .lines()
        .iter()
        .filter(|line| line.starts_with("[INF]"))
        .count();
    assert_eq!(infos, 200);
}

#[test]
fn test_custom_key_style() {
    let appender = CaptureAppender::default();
    let logger = Logger::builder()
        .min_level(Level::Trace)
        .colors(false)
        .key_style(KeyStyle {
            open: "[".to_string(),
            close: "]".to_string(),
            separator: " ".to_string(),
        })
        .key("a", 1)
        .key("b", true)
        .appender(appender.clone())
        .resolver(CountingResolver::default())
        .build();
    logger.info("styled");
    assert_eq!(appender.lines(), vec!["[INF] app.rs:7 [a: 1 b: true] | styled"]);
}

#[test]
fn test_failing_appender_does_not_panic() {
    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&self, _line: &str) -> Result<()> {
            Err(LoggerError::io_operation(
                "writing line",
                "simulated failure",
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
            ))
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    let logger = Logger::builder()
        .min_level(Level::Trace)
        .appender(FailingAppender)
        .build();
    logger.error("goes nowhere");
    assert!(logger.flush().is_ok());
}
