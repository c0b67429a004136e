//! Scatter Prizes
//!
//! Generates a prize layout for the cabinet floor and prints it as JSON,
//! ready for a scene loader to instantiate.
//!
//! Run with: cargo run --example scatter_prizes

use claw_machine::scatter::{PrizeScatter, PrizeTemplate, ScatterSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = ScatterSettings {
        count: 6,
        ..ScatterSettings::default()
    };
    let template = PrizeTemplate {
        name: "plush-duck".to_string(),
        has_sprite: true,
    };
    let mut rng = StdRng::seed_from_u64(42);

    match PrizeScatter::new(settings).generate(Some(&template), &mut rng) {
        Ok(prizes) => match serde_json::to_string_pretty(&prizes) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("could not encode layout: {err}"),
        },
        Err(err) => eprintln!("scatter failed: {err}"),
    }

    // Without a template nothing can be generated
    if let Err(err) = PrizeScatter::default().generate(None, &mut rng) {
        println!("\nExpected failure: {err}");
    }
}
