//! Arcade Round
//!
//! Drives one cabinet through a few rounds at 60 ticks per second,
//! printing the events a UI or audio layer would react to.
//!
//! Key concepts:
//! - Fire-and-forget commands
//! - Per-frame ticking with a fixed delta
//! - Draining events once per frame
//!
//! Run with: cargo run --example arcade_round
//! More detail: RUST_LOG=debug cargo run --example arcade_round

use claw_machine::builder::ClawMachineBuilder;
use claw_machine::claw::{ClawBody, ClawEvent, RandomPrizeDetector};
use claw_machine::config::ClawConfig;
use claw_machine::core::{ClawState, Direction};
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Arcade Round ===\n");

    let mut claw = match ClawMachineBuilder::new()
        .config(ClawConfig::default())
        .claw_body(ClawBody::at(0.0, 0.0, 0.0))
        .detector(RandomPrizeDetector::seeded(0.5, 7))
        .build()
    {
        Ok(claw) => claw,
        Err(err) => {
            eprintln!("cabinet setup failed: {err}");
            return;
        }
    };

    let plays = [(Direction::Right, 30), (Direction::Left, 75), (Direction::Right, 10)];

    for (direction, frames) in plays {
        // Hold the stick for a while, then let go and drop
        claw.move_claw(direction);
        for _ in 0..frames {
            claw.tick_with_input(FRAME, Some(direction));
        }
        claw.stop_movement();
        println!("Round {} dropping at x = {:.2}", claw.round() + 1, claw.position().x);

        claw.lower_claw();
        while claw.state() != ClawState::Idle {
            claw.tick(FRAME);
            for record in claw.drain_events() {
                match record.event {
                    ClawEvent::ClampResolved { success: true } => println!("  grabbed something!"),
                    ClawEvent::ClampResolved { success: false } => println!("  came up empty"),
                    ClawEvent::PrizeReleased => println!("  prize dropped in the chute"),
                    ClawEvent::SequenceReset => println!("  ready for the next round\n"),
                    ClawEvent::StateChanged { .. } => {}
                }
            }
        }
    }

    let path: Vec<String> = claw
        .history()
        .get_path()
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("Recent path: {}", path.join(" -> "));
    println!("\n=== Example Complete ===");
}
