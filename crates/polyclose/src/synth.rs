//! Synthetic traverses: closed convex polygons with simulated field readings.
//!
//! Model
//! - Draw `n` positive exterior-angle weights with bounded jitter and scale
//!   them to exactly 360° in whole arc-seconds; interior = 180° − exterior.
//!   The true set therefore closes exactly.
//! - Observed readings add independent integer noise in
//!   `[-noise_seconds, noise_seconds]` to every true angle.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a failing case can be re-drawn from two integers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::{MIN_SIDES, SECONDS_PER_DEGREE};
use crate::dms::{from_whole_seconds, Angle};

/// Full turn in arc-seconds.
const FULL_TURN: i64 = 360 * SECONDS_PER_DEGREE;
/// Straight angle in arc-seconds.
const STRAIGHT: i64 = 180 * SECONDS_PER_DEGREE;

/// Side count distribution.
#[derive(Clone, Copy, Debug)]
pub enum SideCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl SideCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            SideCount::Fixed(n) => n.max(MIN_SIDES),
            SideCount::Uniform { min, max } => {
                let lo = min.max(MIN_SIDES);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Traverse sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TraverseCfg {
    pub sides: SideCount,
    /// Relative jitter of the exterior-angle weights. Clamped to `[0, 0.2]`,
    /// which keeps every exterior angle below 180° even for triangles.
    pub shape_jitter: f64,
    /// Half-width of the uniform reading noise, in arc-seconds.
    pub noise_seconds: i64,
}

impl Default for TraverseCfg {
    fn default() -> Self {
        Self {
            sides: SideCount::Fixed(6),
            shape_jitter: 0.15,
            noise_seconds: 20,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One simulated survey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traverse {
    /// Interior angles that close exactly.
    pub truth: Vec<Angle>,
    /// `truth` plus reading noise, same order.
    pub observed: Vec<Angle>,
}

impl Traverse {
    #[inline]
    pub fn sides(&self) -> usize {
        self.truth.len()
    }
}

/// Draw a closed convex traverse and noisy readings of it.
pub fn draw_traverse(cfg: TraverseCfg, tok: ReplayToken) -> Traverse {
    let mut rng = tok.to_std_rng();
    let n = cfg.sides.sample(&mut rng);
    let jitter = cfg.shape_jitter.clamp(0.0, 0.2);
    let noise = cfg.noise_seconds.max(0);

    let weights: Vec<f64> = (0..n)
        .map(|_| 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter)
        .collect();
    let wsum: f64 = weights.iter().sum();
    let mut exterior: Vec<i64> = weights[..n - 1]
        .iter()
        .map(|w| (FULL_TURN as f64 * w / wsum).round() as i64)
        .collect();
    // Last exterior angle takes the remainder so the turn is exact.
    exterior.push(FULL_TURN - exterior.iter().sum::<i64>());

    let truth_secs: Vec<i64> = exterior.iter().map(|e| STRAIGHT - e).collect();
    let observed = truth_secs
        .iter()
        .map(|&s| {
            let e = if noise > 0 { rng.gen_range(-noise..=noise) } else { 0 };
            from_whole_seconds(i128::from((s + e).max(0)))
        })
        .collect();
    Traverse {
        truth: truth_secs
            .into_iter()
            .map(|s| from_whole_seconds(i128::from(s)))
            .collect(),
        observed,
    }
}
