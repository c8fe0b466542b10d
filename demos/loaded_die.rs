//! Roll a loaded die built from command-line weights.
//!
//!     cargo run --example loaded_die -- 1 1 1 1 1 5
//!     RUST_LOG=trace cargo run --example loaded_die -- .1 .2 .3

use vose_alias::{AliasSampler, parse_weights};

const ROLLS: usize = 200_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let weights = if args.trim().is_empty() {
        vec![10.0, 20.0, 30.0, 40.0]
    } else {
        parse_weights(&args)?
    };

    let mut die = AliasSampler::new(&weights)?;
    if die.table().augmented() {
        println!(
            "weights sum below 1: face {} is \"none of the above\"",
            die.size() - 1
        );
    }

    let counts = die.sample_counts(ROLLS);
    for (face, count) in counts.iter().enumerate() {
        let expected = die.table().outcome_probability(face);
        let observed = *count as f64 / ROLLS as f64;
        println!("{face: >3} {count: >7}  observed {observed:.4}  expected {expected:.4}");
    }

    Ok(())
}
