//! Per-invocation record of every random value drawn while generating shares.

use std::collections::HashSet;

use rand::CryptoRng;
use tracing::trace;

use super::error::{ShareError, ShareResult};
use super::field::FieldElement;

/// Upper bound on redraws when a random value collides with an earlier one.
pub const MAX_DRAW_ATTEMPTS: usize = 64;

/// Random field values already handed out during one `generate` call.
///
/// Coefficients and x-coordinates are drawn from the same set, so no two
/// draws in an invocation coincide. A fresh set is created per call.
#[derive(Debug, Default)]
pub struct UniquenessSet {
    seen: HashSet<FieldElement>,
}

impl UniquenessSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a random element in `[1, P)` that has not been drawn before.
    pub fn draw<R: CryptoRng + ?Sized>(&mut self, rng: &mut R) -> ShareResult<FieldElement> {
        for attempt in 1..=MAX_DRAW_ATTEMPTS {
            let candidate = FieldElement::random(rng);
            if self.seen.insert(candidate.clone()) {
                return Ok(candidate);
            }
            trace!(attempt, "random draw collided with an earlier value");
        }

        Err(ShareError::EntropyExhausted {
            attempts: MAX_DRAW_ATTEMPTS,
        })
    }

    pub fn contains(&self, value: &FieldElement) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
