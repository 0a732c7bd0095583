//! Clamping Trace Example
//!
//! Shows the `debug` events emitted with the `tracing` feature when a value
//! is rejected or clamped.
//!
//! Run with: cargo run --example clamping_trace --features tracing

use tidemark::constraint::{closed, less_equal};
use tidemark::{make_bounded, make_clamped, Clamping, Verifier};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    // Accepted values emit nothing
    let _ = make_bounded(3, 1, 5);

    // Rejection carries the constraint description
    let _ = make_bounded(9, 1, 5);

    // Clamping into an interval
    let level = make_clamped(120, 0, 100);
    println!("clamped level: {level}");

    // Clamping against a single inclusive bound
    let ceiling = Clamping::verify(12, &less_equal(10));
    println!("clamped to ceiling: {:?}", ceiling);

    let interval = closed(0.0, 1.0);
    println!(
        "{} clamps 1.5 to {:?}",
        interval,
        Clamping::verify(1.5, &interval)
    );
}
