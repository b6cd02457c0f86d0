//! Route Planning
//!
//! This example plans TMS sequences for a typical scan session: reset the
//! TAP, load an instruction, shift a data register and park in Run-Test/Idle.
//!
//! Key concepts:
//! - Building the complete shortest-path table once
//! - Looking up single paths and chaining them into a route
//! - Replaying a route to see every state it passes through
//!
//! Run with: cargo run --example route_planning

use tapwalk::{ResultTable, TapState, TransitionTable, Walk, RESET_SEQUENCE};

fn main() {
    println!("=== Route Planning Example ===\n");

    let table = ResultTable::build().unwrap();
    println!("Table covers {} pairs", table.len());
    println!("Longest shortest path: {} clocks\n", table.diameter());

    // Wherever the TAP was left, five clocks with TMS high reset it
    let reset: String = RESET_SEQUENCE
        .iter()
        .map(|&tms| if tms { '1' } else { '0' })
        .collect();
    println!("Reset sequence: {reset}");

    for (start, end) in [
        (TapState::TestLogicReset, TapState::ShiftIR),
        (TapState::Exit1IR, TapState::ShiftDR),
        (TapState::ShiftDR, TapState::RunTestIdle),
    ] {
        println!("{start} -> {end}: {}", table.get(start, end));
    }

    // One scan session as a single sequence of clocks
    let via = [
        TapState::ShiftIR,
        TapState::Exit1IR,
        TapState::ShiftDR,
        TapState::Exit1DR,
        TapState::RunTestIdle,
    ];
    let route = table.route(TapState::TestLogicReset, &via);
    println!("\nScan session: {route} ({} clocks)", route.len());

    let walk = Walk::replay(&TransitionTable::STANDARD, TapState::TestLogicReset, &route);
    println!("{walk}");

    println!("\n=== Example Complete ===");
}
