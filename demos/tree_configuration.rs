//! Tree and branch reconfiguration example
//!
//! Demonstrates bulk severity changes, branch-targeted sinks and snapshot
//! inheritance.
//!
//! Run with: cargo run --example tree_configuration

use rust_logger_tree::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Logger Tree - Tree Configuration Example ===\n");

    let registry = SharedLoggerTree::new();
    registry.add_tree_sink(SinkFactory::stdout());

    registry.get_or_create("svc.http.server");
    registry.get_or_create("svc.db.pool");
    registry.get_or_create("jobs.mailer");

    println!("1. Branch severity: silence everything below ERROR under svc.db");
    registry.set_branch_severity("svc.db", Severity::Error)?;
    registry.get_or_create("svc.db.pool").info("hidden\n");
    registry
        .get_or_create("svc.db.pool")
        .error("db pool exhausted\n");
    registry.get_or_create("svc.http.server").info("still chatty\n");

    println!("\n2. Branch sinks: svc.http additionally logs to a file");
    let file_sink = SinkFactory::file("tree_configuration.log")?;
    registry.add_branch_sink("svc.http", file_sink)?;
    registry
        .get_or_create("svc.http.server")
        .warn("written to stdout and to the file\n");

    println!("\n3. Snapshot inheritance: new nodes copy their ancestor now");
    let late = registry.get_or_create("svc.db.replica");
    println!(
        "   svc.db.replica starts at {} (inherited from svc.db)",
        late.severity()
    );

    println!("\n4. Unknown branch roots are rejected:");
    match registry.set_branch_severity("svc.cache", Severity::Warn) {
        Err(e) => println!("   {}", e),
        Ok(()) => unreachable!("svc.cache was never registered"),
    }

    registry.get_or_create("svc.http.server").flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
