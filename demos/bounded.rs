//! Bounded Values Example
//!
//! Demonstrates predicates, intervals and constrained values.
//! Shows practical patterns including:
//! - Build-time and run-time bounds
//! - Open and closed intervals
//! - Rejecting and clamping verifiers
//! - The deducing factories

use std::mem::size_of_val;

use tidemark::aliases::{Percentage, Port, UnitInterval};
use tidemark::constraint::{closed, open, ClosedInterval, ConstI32, Constraint, Less};
use tidemark::{clamp, make_bounded, make_bounded_exclusive, make_clamped};

// ==================== Predicates ====================

/// Example 1: A single bound, fixed or supplied at run time
fn example_predicates() {
    println!("\n=== Example 1: Predicates ===");

    let fixed = Less::<i32, ConstI32<10>>::fixed();
    let dynamic = Less::new(10);

    println!("{} holds for 9: {}", fixed.description(), fixed.test(&9));
    println!(
        "{} holds for 10: {}",
        dynamic.description(),
        dynamic.test(&10)
    );
    println!(
        "sizes: fixed = {} bytes, dynamic = {} bytes",
        size_of_val(&fixed),
        size_of_val(&dynamic)
    );
}

// ==================== Intervals ====================

/// Example 2: Two bounds composed into an interval
fn example_intervals() {
    println!("\n=== Example 2: Intervals ===");

    let closed_range = closed(2, 5);
    let open_range = open(2, 5);
    for x in [1, 2, 3, 5, 6] {
        println!(
            "{x}: in {} = {}, in {} = {}",
            closed_range,
            closed_range.test(&x),
            open_range,
            open_range.test(&x)
        );
    }

    let digit = ClosedInterval::<i32, ConstI32<0>, ConstI32<9>>::fixed();
    println!("{} occupies {} bytes", digit, size_of_val(&digit));

    for x in [-1, 3, 10] {
        println!("clamp({}, {x}) = {}", closed_range, clamp(&closed_range, x));
    }
}

// ==================== Constrained values ====================

/// Example 3: Values that keep their invariant
fn example_constrained() {
    println!("\n=== Example 3: Constrained Values ===");

    match make_bounded(3, 1, 5) {
        Ok(n) => println!(
            "make_bounded(3, 1, 5) = {} within [{}, {}]",
            n,
            n.get_lower_bound(),
            n.get_upper_bound()
        ),
        Err(e) => println!("unexpected: {e}"),
    }

    if let Err(e) = make_bounded(6, 1, 5) {
        println!("make_bounded(6, 1, 5) failed: {e}");
    }
    if let Err(e) = make_bounded_exclusive(5, 2, 5) {
        println!("make_bounded_exclusive(5, 2, 5) failed: {e}");
    }

    let mut gain = make_clamped(6, 1, 5);
    println!("make_clamped(6, 1, 5) = {gain}");
    gain.assign(-20);
    println!("after assigning -20: {gain}");
}

// ==================== Domain aliases ====================

/// Example 4: Ready-made aliases
fn example_aliases() {
    println!("\n=== Example 4: Aliases ===");

    for raw in [0_u8, 42, 101] {
        match Percentage::fixed(raw) {
            Ok(pct) => println!("{pct}%"),
            Err(e) => println!("{e}"),
        }
    }

    for raw in [0_u16, 8080] {
        match Port::fixed(raw) {
            Ok(port) => println!("port {port}"),
            Err(e) => println!("{e}"),
        }
    }

    println!(
        "unit interval of 1.7 = {}",
        UnitInterval::clamped_fixed(1.7)
    );
}

fn main() {
    println!("Tidemark Bounded Values Examples");
    println!("================================");

    example_predicates();
    example_intervals();
    example_constrained();
    example_aliases();

    println!("\n=== All Examples Complete ===");
}
