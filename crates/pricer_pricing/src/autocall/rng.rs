//! CRN-stable, stream-splittable random number source.
//!
//! The entire variance-reduction contract of the Greek engine rests on one
//! property: the normal draw returned for a given `(seed, global_path, step,
//! asset, stream)` tuple must be bit-identical between the base term sheet
//! and every bumped term sheet — and, per the concurrency model's
//! determinism contract, identical regardless of how `num_paths` is
//! partitioned into blocks. The coordinate is therefore the path's *global*
//! index (its position across the whole run), never a block-relative one:
//! keying on `(block_index, path_in_block)` instead would let the same
//! logical path draw a different stream under a different `block_size`,
//! since a path's block/local-index pair is a property of the partition, not
//! of the path itself. The sibling `rng::PricerRng` (`StdRng::seed_from_u64`
//! plus a `seed()` accessor) draws from a single running stream and
//! therefore cannot give this guarantee once a bumped run perturbs step
//! counts or branch order. Instead, each logical draw gets its own `StdRng`,
//! seeded deterministically by hashing its coordinates together with the
//! run seed.
//!
//! Normals are produced by inverse CDF (Beasley-Springer-Moro, the same
//! rational approximation `pricer_models::models::heston::HestonModel` uses
//! privately for its own QE scheme, promoted here to a shared utility) rather
//! than `rand_distr::StandardNormal`'s Ziggurat method, so that antithetic
//! pairing `U <-> 1-U` maps exactly to `Z <-> -Z`.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Tags the logical purpose of a draw, so that (e.g.) the spot-shock stream
/// and the Brownian-bridge-hit-test stream never collide even when every
/// other coordinate matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamTag {
    /// Independent standard normal driving the correlated spot shock.
    Spot,
    /// Uniform draw deciding a continuous-monitoring Brownian-bridge KI hit.
    BridgeHit,
    /// Independent standard normal driving the Heston/LSV variance process.
    Variance,
    /// Uniform draw feeding the QE scheme's exponential-branch zero-mass mixture.
    VarianceMix,
}

impl StreamTag {
    fn discriminant(self) -> u64 {
        match self {
            StreamTag::Spot => 0,
            StreamTag::BridgeHit => 1,
            StreamTag::Variance => 2,
            StreamTag::VarianceMix => 3,
        }
    }
}

/// Mixes a tuple of coordinates into a single 64-bit seed using a splitmix64
/// finalizer applied to each coordinate in turn (the same mixing constants
/// as Vigna's splitmix64 generator). Deterministic and allocation-free.
fn mix_seed(coords: &[u64]) -> u64 {
    let mut h: u64 = 0x9E3779B97F4A7C15;
    for &c in coords {
        h ^= c.wrapping_add(0x9E3779B97F4A7C15);
        h = h.wrapping_mul(0xBF58476D1CE4E5B9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94D049BB133111EB);
        h ^= h >> 31;
    }
    h
}

/// Derives the per-draw seed for `(base_seed, global_path, step, asset,
/// tag)`, where `global_path` is the path's index across the whole run (not
/// relative to any block). Exposed so the path generator and Greek engine
/// agree on exactly the same coordinate -> seed mapping.
pub fn draw_seed(base_seed: u64, global_path: u64, step: u64, asset: u64, tag: StreamTag) -> u64 {
    mix_seed(&[base_seed, global_path, step, asset, tag.discriminant()])
}

/// Draws a single standard uniform `U(0,1)` for the given coordinates.
/// Never returns exactly 0.0 or 1.0 (clamped to `f64::EPSILON` either side)
/// so downstream inverse-CDF transforms stay finite.
pub fn draw_uniform(base_seed: u64, global_path: u64, step: u64, asset: u64, tag: StreamTag) -> f64 {
    let seed = draw_seed(base_seed, global_path, step, asset, tag);
    let mut rng = StdRng::seed_from_u64(seed);
    let u: f64 = rng.gen();
    u.clamp(f64::EPSILON, 1.0 - f64::EPSILON)
}

/// Draws a single standard normal `Z` for the given coordinates, via inverse
/// CDF so that `draw_normal(.., tag)` computed from `U` and `1 - U` are exact
/// negatives of one another under antithetic pairing (see
/// [`antithetic_normal`]).
pub fn draw_normal(base_seed: u64, global_path: u64, step: u64, asset: u64, tag: StreamTag) -> f64 {
    let u = draw_uniform(base_seed, global_path, step, asset, tag);
    inverse_normal_cdf(u)
}

/// Given a primary path's draw, returns the antithetic partner's draw:
/// exactly `-z`. The path generator calls [`draw_normal`] for primary paths
/// and this for their antithetic partners, rather than re-drawing from `1-u`,
/// to make the exact-negation contract self-evident at the call site.
pub fn antithetic_normal(primary: f64) -> f64 {
    -primary
}

/// Beasley-Springer-Moro rational approximation to the inverse standard
/// normal CDF. Promoted from `pricer_models::models::heston`'s private
/// `HestonModel::inverse_normal_cdf` to a shared, dependency-free utility —
/// this module has no `HestonModel` to attach it to and the approximation
/// itself is generic over nothing.
pub fn inverse_normal_cdf(u: f64) -> f64 {
    const A: [f64; 4] = [
        2.50662823884,
        -18.61500062529,
        41.39119773534,
        -25.44106049637,
    ];
    const B: [f64; 4] = [
        -8.47351093090,
        23.08336743743,
        -21.06224101826,
        3.13082909833,
    ];
    const C: [f64; 9] = [
        0.3374754822726147,
        0.9761690190917186,
        0.1607979714918209,
        0.0276438810333863,
        0.0038405729373609,
        0.0003951896511919,
        0.0000321767881768,
        0.0000002888167364,
        0.0000003960315187,
    ];

    let u = u.clamp(f64::EPSILON, 1.0 - f64::EPSILON);
    let y = u - 0.5;

    if y.abs() <= 0.42 {
        let r = y * y;
        let numer = A[0] + r * (A[1] + r * (A[2] + r * A[3]));
        let denom = 1.0 + r * (B[0] + r * (B[1] + r * (B[2] + r * B[3])));
        y * numer / denom
    } else {
        let r = if y < 0.0 { u } else { 1.0 - u };
        let s = (-r.ln()).ln();
        let z = C[0]
            + s * (C[1]
                + s * (C[2]
                    + s * (C[3]
                        + s * (C[4]
                            + s * (C[5] + s * (C[6] + s * (C[7] + s * C[8])))))));
        if y < 0.0 {
            -z
        } else {
            z
        }
    }
}
