/**
 * Random utilities.
 */

use std::time::SystemTime;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

pub fn seed_from_system_time() -> u64 {
    // A clock before the epoch still gives a usable seed
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// The generator for the given seed, or for a fresh one. Returns the seed
/// actually used, so a run can be reproduced.
pub fn make_rng(seed: Option<u64>) -> (u64, Mcg128Xsl64) {
    let seed = seed.unwrap_or_else(seed_from_system_time);
    (seed, Mcg128Xsl64::seed_from_u64(seed))
}

// Tests ///////////////////////////////////////////////////////////////////////
