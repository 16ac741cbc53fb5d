//! File logging example
//!
//! Demonstrates text file logging from several threads, then the console
//! fallback when the file cannot be written.
//!
//! Run with: cargo run --example file_logging

use mutex_logger::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Mutex Logger - File Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .format(LogFormat::Text)
            .level(LogLevel::ALL | LogLevel::DEBUG)
            .file("application.log")
            .build(),
    );

    println!("1. Logging to 'application.log' from four threads:");

    logger.info("Application started");
    let workers: Vec<_> = (1..=4)
        .map(|id| {
            let logger = Arc::clone(&logger);
            std::thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || {
                    for item in 1..=3 {
                        logger.debug(format!("processing item {}", item));
                    }
                    logger.info(format!("worker {} finished", id));
                })
                .expect("failed to spawn worker")
        })
        .collect();
    for worker in workers {
        let _ = worker.join();
    }
    logger.log_multi(["Shutting down", "Goodbye"]);

    println!("\n2. Pointing the logger at an unwritable path:");

    logger.set_file("no-such-directory/application.log");
    logger.error("This write fails and trips the console fallback");
    logger.error("This one goes straight to the console");
    println!("   format is now {}, state {}", logger.format(), logger.sink_state());

    println!("\n=== Example completed! ===");
    println!(
        "Check 'application.log' ({} lines written)",
        logger.metrics().lines_written()
    );
}
