//! Splitting a secret into shares.

use rand::CryptoRng;
use tracing::debug;

use super::chunker;
use super::codec::{self, SharePoint};
use super::error::{ShareError, ShareResult};
use super::polynomial::Polynomial;
use super::uniqueness::UniquenessSet;

/// A validated `(minimum, shares)` threshold configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretShare {
    minimum: usize,
    shares: usize,
}

impl SecretShare {
    /// Requires `1 <= minimum <= shares`.
    pub fn new(minimum: usize, shares: usize) -> ShareResult<Self> {
        if minimum == 0 || shares == 0 || shares < minimum {
            return Err(ShareError::InvalidThreshold { minimum, shares });
        }
        Ok(Self { minimum, shares })
    }

    /// Shares needed to reconstruct the secret.
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// Shares produced by [`SecretShare::generate`].
    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Split `secret` using the thread-local CSPRNG.
    pub fn generate(&self, secret: &[u8]) -> ShareResult<Vec<String>> {
        let mut rng = rand::rng();
        self.generate_with_rng(secret, &mut rng)
    }

    /// Split `secret` drawing randomness from `rng`.
    ///
    /// Each chunk gets its own polynomial of degree `minimum - 1`. Every
    /// coefficient and x-coordinate drawn during this call is distinct.
    pub fn generate_with_rng<R: CryptoRng + ?Sized>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> ShareResult<Vec<String>> {
        self.generate_recording(secret, rng, &mut UniquenessSet::new())
    }

    /// Generate using `seen` for every coefficient and x-coordinate draw.
    pub(crate) fn generate_recording<R: CryptoRng + ?Sized>(
        &self,
        secret: &[u8],
        rng: &mut R,
        seen: &mut UniquenessSet,
    ) -> ShareResult<Vec<String>> {
        let polynomials = chunker::encode(secret)
            .into_iter()
            .map(|chunk| Polynomial::random(chunk, self.minimum - 1, &mut *rng, &mut *seen))
            .collect::<ShareResult<Vec<_>>>()?;

        debug!(
            chunks = polynomials.len(),
            minimum = self.minimum,
            shares = self.shares,
            "generating secret shares"
        );

        let mut output = Vec::with_capacity(self.shares);
        for _ in 0..self.shares {
            let mut points = Vec::with_capacity(polynomials.len());
            for polynomial in &polynomials {
                let x = seen.draw(rng)?;
                let y = polynomial.evaluate(&x);
                points.push(SharePoint { x, y });
            }
            output.push(codec::encode_share(&points));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shamir::codec::{decode_share, ENCODED_POINT_LEN};
    use crate::shamir::uniqueness::tests::StuckRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn rejects_bad_thresholds() {
        for (minimum, shares) in [(0, 5), (6, 5), (0, 0), (1, 0)] {
            assert_eq!(
                SecretShare::new(minimum, shares),
                Err(ShareError::InvalidThreshold { minimum, shares })
            );
        }
    }

    #[test]
    fn accepts_valid_thresholds() {
        let ss = SecretShare::new(3, 5).unwrap();
        assert_eq!(ss.minimum(), 3);
        assert_eq!(ss.shares(), 5);
        assert!(SecretShare::new(1, 1).is_ok());
        assert!(SecretShare::new(5, 5).is_ok());
    }

    #[test]
    fn produces_requested_number_of_shares() {
        let ss = SecretShare::new(3, 5).unwrap();
        let shares = ss.generate(b"super-secret message").unwrap();
        assert_eq!(shares.len(), 5);
    }

    #[test]
    fn share_length_tracks_chunk_count() {
        let ss = SecretShare::new(2, 3).unwrap();
        for (len, chunks) in [(1, 1), (32, 1), (33, 2), (100, 4)] {
            let shares = ss.generate(&vec![b'k'; len]).unwrap();
            assert!(shares.iter().all(|s| s.len() == chunks * ENCODED_POINT_LEN));
        }
    }

    #[test]
    fn x_coordinates_are_distinct_and_nonzero() {
        let mut rng = StdRng::seed_from_u64(99);
        let ss = SecretShare::new(3, 6).unwrap();
        let shares = ss.generate_with_rng(&[b'q'; 70], &mut rng).unwrap();

        let mut xs = HashSet::new();
        for share in &shares {
            for point in decode_share(share).unwrap() {
                assert!(!point.x.is_zero());
                assert!(xs.insert(point.x), "x-coordinate reused");
            }
        }
        assert_eq!(xs.len(), 6 * 3);
    }

    #[test]
    fn coefficients_and_x_coordinates_share_one_draw_set() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut seen = UniquenessSet::new();
        let (minimum, count, chunks) = (3, 4, 2);
        let ss = SecretShare::new(minimum, count).unwrap();
        let shares = ss
            .generate_recording(&[b'z'; 40], &mut rng, &mut seen)
            .unwrap();

        // Every draw landed in the set, so none repeated.
        assert_eq!(seen.len(), chunks * (minimum - 1) + count * chunks);
        for share in &shares {
            for point in decode_share(share).unwrap() {
                assert!(seen.contains(&point.x));
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let ss = SecretShare::new(2, 3).unwrap();
        let a = ss
            .generate_with_rng(b"same", &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = ss
            .generate_with_rng(b"same", &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_secret_gives_empty_shares() {
        let ss = SecretShare::new(2, 3).unwrap();
        let shares = ss.generate(b"").unwrap();
        assert_eq!(shares, vec![String::new(); 3]);
    }

    #[test]
    fn broken_entropy_source_is_fatal() {
        let ss = SecretShare::new(2, 3).unwrap();
        let err = ss
            .generate_with_rng(b"secret", &mut StuckRng(0x01))
            .unwrap_err();
        assert!(matches!(err, ShareError::EntropyExhausted { .. }));
    }
}
