// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_decimal::prelude::*;
use std::io;
use std::sync::Arc;

fn main() {
    println!("=== Exact Decimal Example ===\n");

    // Validate literals
    println!("Validating literals...");
    for text in ["1", "+0001.0", "-0001.005", "-5.", "-.5", "+-1", "1.2.3"] {
        match Literal::parse(text) {
            Ok(_) => println!("  {:>10}  valid", text),
            Err(err) => println!("  {:>10}  invalid ({})", text, err),
        }
    }

    // Exact arithmetic
    println!("\n=== Arithmetic ===");
    let a: DecimalValue = "0.1".parse().unwrap();
    let b: DecimalValue = "0.2".parse().unwrap();
    println!("  {} + {} = {}", a, b, &a + &b);

    let big: DecimalValue = "99999999999999999999999999999999.999".parse().unwrap();
    let tiny: DecimalValue = "0.001".parse().unwrap();
    println!("  {} + {} = {}", big, tiny, &big + &tiny);

    let total: DecimalValue = ["10.5", "-3.25", "0.75", "-8"]
        .iter()
        .map(|s| s.parse::<DecimalValue>().unwrap())
        .sum();
    println!("  10.5 - 3.25 + 0.75 - 8 = {}", total);

    // Batch processing, reports written to stdout
    println!("\n=== Batch ===\n");
    let processor = BatchProcessorBuilder::new()
        .build(Arc::new(WriterReportSink::text(io::stdout())))
        .unwrap();

    let outcome = processor
        .run_text("1 1.0\n+0001.0 -0001.005\n-5. 3\n100 -100\n0.1 0.2\nunpaired")
        .unwrap();

    println!("=== Summary ===");
    println!("Cases:   {}", outcome.summary.total);
    println!("Valid:   {}", outcome.summary.valid);
    println!("Invalid: {}", outcome.summary.invalid);
    println!("Ignored: {:?}", outcome.summary.discarded_token);
}
