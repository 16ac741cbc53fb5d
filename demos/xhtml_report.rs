//! XHTML report example
//!
//! Writes a small XHTML log document framed by an explicit header and footer.
//!
//! Run with: cargo run --example xhtml_report

use mutex_logger::prelude::*;
use mutex_logger::{exception, warning};

fn main() {
    let logger = Logger::builder()
        .format(LogFormat::Xhtml)
        .level(LogLevel::ALL)
        .file("report.html")
        .build();

    logger.write_header(Some("Nightly import"));

    logger.info("Import started");
    warning!(logger, "{} rows had missing dates", 3);

    let err = "field 'amount' is not a number".parse::<f64>().unwrap_err();
    exception!(logger, &err, "Row {} skipped", 42);

    logger.custom("Import finished");
    logger.write_footer();

    println!("Wrote 'report.html' (format {})", logger.format());
}
