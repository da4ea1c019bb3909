//! Basic logger usage example
//!
//! Demonstrates levels, inherited keys, prefixes and the global logger.
//!
//! Run with: cargo run --example basic_usage

use timber::prelude::*;
use timber::{info, keys};

fn main() -> Result<()> {
    println!("=== Timber - Basic Usage Example ===\n");

    // Log messages at different levels through the global logger
    println!("1. Logging at different levels:");
    timber::set_level(Level::Trace);
    timber::trace("This is a trace message");
    timber::verbose("This is a verbose message");
    timber::debug("This is a debug message");
    timber::info("This is an info message");
    timber::warning("This is a warning message");
    timber::error("This is an error message");
    timber::critical("This is a critical message");
    timber::fatal("This is a fatal message");

    println!("\n2. Changing the global minimum level:");
    timber::set_level(Level::Info);
    println!("   Minimum level set to Info - trace and debug won't show:");
    timber::trace("Trace message (hidden)");
    timber::debug("Debug message (hidden)");
    timber::info("Info message (visible)");
    timber::warning("Warning message (visible)");

    println!("\n3. Keys and prefixes:");
    let logger = Logger::builder().min_level(Level::Debug).build();
    let conn = logger.with(&keys! { "user" => "alice", "session" => 42 });
    conn.prefix("127.0.0.1:54313");
    conn.debug("connection accepted");
    conn.info_ex(&keys! { "bytes" => 512 }, format_args!("read {} frames", 3));
    info!(conn, "closing after {}ms", 12);

    println!("\n4. Configuration from JSON:");
    let config = LoggerConfig::from_json(
        r#"{ "level": "warning", "prefix": "db", "keys": { "pool": 4 } }"#,
    )?;
    let db = Logger::from_config(&config);
    db.info("Info message (hidden)");
    db.warning("pool exhausted");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
