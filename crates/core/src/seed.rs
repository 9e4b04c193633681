//! Seed selection for dungeon generation.
//! Generation itself never reads the clock; callers pick a seed here and pass it in.

use std::fmt;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use xxhash_rust::xxh3::xxh3_64;

/// A generator seed tagged with where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    /// Passed on the command line; the run can be reproduced from it.
    Explicit(u64),
    /// Drawn from the environment because none was given.
    Runtime(u64),
}

impl SeedChoice {
    /// An explicit seed wins; otherwise `runtime` is called for a fresh one.
    pub fn resolve(explicit: Option<u64>, runtime: impl FnOnce() -> u64) -> Self {
        match explicit {
            Some(seed) => Self::Explicit(seed),
            None => Self::Runtime(runtime()),
        }
    }

    pub fn seed(self) -> u64 {
        match self {
            Self::Explicit(seed) | Self::Runtime(seed) => seed,
        }
    }

    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl fmt::Display for SeedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(seed) => write!(f, "{seed} (explicit)"),
            Self::Runtime(seed) => write!(f, "{seed} (runtime)"),
        }
    }
}

/// Calls within one clock tick, such as a fuzz loop, still get distinct seeds.
static RUNTIME_SEED_CALLS: AtomicU64 = AtomicU64::new(0);

/// Hashes wall-clock nanoseconds, the process id and a per-process call count.
pub fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |elapsed| elapsed.as_nanos());
    let call = RUNTIME_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    seed_from_entropy(now_nanos, process::id(), call)
}

fn seed_from_entropy(now_nanos: u128, pid: u32, call: u64) -> u64 {
    let mut bytes = [0_u8; 28];
    bytes[..16].copy_from_slice(&now_nanos.to_le_bytes());
    bytes[16..20].copy_from_slice(&pid.to_le_bytes());
    bytes[20..].copy_from_slice(&call.to_le_bytes());
    xxh3_64(&bytes)
}
