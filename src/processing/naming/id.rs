use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

/// Length of the random id embedded in every filename
pub const ID_LENGTH: usize = 7;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_ATTEMPTS: usize = 1000;

/// Issues 7-character `[A-Z0-9]` ids, unique within one run.
///
/// Uniqueness only covers ids issued by this generator; nothing is persisted.
pub struct IdGenerator {
    rng: StdRng,
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Returns an id not issued before in this run.
    pub fn next_id(&mut self) -> String {
        for _ in 0..MAX_ATTEMPTS {
            let id = self.random_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }

        let id = self.timestamp_id();
        warn!("Random id space exhausted after {} attempts, using timestamp id {}", MAX_ATTEMPTS, id);
        self.issued.insert(id.clone());
        id
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    fn random_id(&mut self) -> String {
        (0..ID_LENGTH)
            .map(|_| ID_CHARSET[self.rng.random_range(0..ID_CHARSET.len())] as char)
            .collect()
    }

    fn timestamp_id(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{:0width$}", millis % 10u128.pow(ID_LENGTH as u32), width = ID_LENGTH)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
