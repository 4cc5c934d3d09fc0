//! Basic logger-tree usage example
//!
//! Demonstrates lazy logger creation, severity filtering and the stdout sink.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_tree::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Logger Tree - Basic Usage Example ===\n");

    // Create a registry; the root logger exists from the start
    let registry = SharedLoggerTree::new();
    registry.add_tree_sink(SinkFactory::stdout());

    // Asking for a dotted name creates the whole ancestor chain
    let logger = registry.get_or_create("svc.http.server");
    logger.set_formatter(PatternFormatter::with_pattern("svc.http.server: %(message)\n"));

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Logging with a raised severity:");
    logger.set_severity(Severity::Info);
    println!("   Severity set to INFO - trace and debug won't show:");
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)\n");

    logger.flush()?;

    println!("3. The registry created every ancestor:");
    let mut names: Vec<String> = registry.logger_list().into_keys().collect();
    names.sort();
    for name in names {
        println!("   {}", name);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
