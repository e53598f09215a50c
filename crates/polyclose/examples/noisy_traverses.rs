//! Show closure error and post-rounding residual for a few simulated surveys.
//!
//! Usage:
//!   cargo run -p polyclose --example noisy_traverses -- [sides] [noise_seconds]
//!
//! Prints one line per draw: sides, error, corrected sum, residual, misclosure.

use polyclose::synth::{draw_traverse, ReplayToken, SideCount, TraverseCfg};
use polyclose::{build_polygon, correct_angles};

fn main() {
    let mut args = std::env::args().skip(1);
    let sides = args.next().and_then(|s| s.parse().ok()).unwrap_or(6usize);
    let noise = args.next().and_then(|s| s.parse().ok()).unwrap_or(30i64);
    let cfg = TraverseCfg {
        sides: SideCount::Fixed(sides),
        noise_seconds: noise,
        ..TraverseCfg::default()
    };
    for index in 0..8 {
        let t = draw_traverse(cfg, ReplayToken { seed: 2024, index });
        let r = match correct_angles(&t.observed, t.sides()) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("draw {index}: {e}");
                continue;
            }
        };
        let misclosure = build_polygon(&r.corrected)
            .map(|g| g.misclosure())
            .unwrap_or(f64::NAN);
        println!(
            "n={:<3} error={:>5}\" sum={} residual={:>2}\" misclosure={:.3e}",
            t.sides(),
            r.error_seconds,
            r.corrected_sum(),
            r.residual_seconds(),
            misclosure
        );
    }
}
