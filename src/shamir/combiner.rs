//! Reconstructing a secret from shares by Lagrange interpolation at zero.

use tracing::debug;

use super::chunker;
use super::codec::{self, SharePoint};
use super::error::{ShareError, ShareResult};
use super::field::FieldElement;

/// Recover the secret from a set of shares.
///
/// With at least `minimum` shares from one `generate` call the output is
/// the original secret. With fewer, or with shares from different calls,
/// the result is a well-formed but unrelated byte string and no error is
/// raised.
pub fn combine<S: AsRef<str>>(shares: &[S]) -> ShareResult<Vec<u8>> {
    let decoded = shares
        .iter()
        .map(|share| codec::decode_share(share.as_ref()))
        .collect::<ShareResult<Vec<_>>>()?;

    let expected = match decoded.first() {
        Some(points) => points.len(),
        None => return Err(ShareError::MalformedShare("no shares supplied".into())),
    };

    if let Some(mismatch) = decoded.iter().find(|points| points.len() != expected) {
        return Err(ShareError::InconsistentChunkCount {
            expected,
            found: mismatch.len(),
        });
    }

    debug!(
        shares = decoded.len(),
        chunks = expected,
        "combining secret shares"
    );

    let chunks = (0..expected)
        .map(|chunk| {
            let points: Vec<&SharePoint> = decoded.iter().map(|share| &share[chunk]).collect();
            interpolate_at_zero(&points)
        })
        .collect::<ShareResult<Vec<_>>>()?;

    Ok(chunker::decode(&chunks))
}

/// Evaluate at `x = 0` the unique polynomial through `points`.
///
/// `sum_i y_i * prod_{j != i} (-x_j) / (x_i - x_j)`
pub(crate) fn interpolate_at_zero(points: &[&SharePoint]) -> ShareResult<FieldElement> {
    let mut secret = FieldElement::zero();

    for (i, point) in points.iter().enumerate() {
        let mut numerator = FieldElement::one();
        let mut denominator = FieldElement::one();

        for (j, peer) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = &numerator * &(-&peer.x);
            denominator = &denominator * &(&point.x - &peer.x);
        }

        let term = &(&point.y * &numerator) * &denominator.inverse()?;
        secret = &secret + &term;
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shamir::codec::encode_share;
    use crate::shamir::generator::SecretShare;
    use crate::shamir::polynomial::Polynomial;

    fn fe(v: u64) -> FieldElement {
        FieldElement::from(v)
    }

    fn sample(poly: &Polynomial, xs: &[u64]) -> Vec<SharePoint> {
        xs.iter()
            .map(|&x| SharePoint {
                x: fe(x),
                y: poly.evaluate(&fe(x)),
            })
            .collect()
    }

    #[test]
    fn interpolation_recovers_constant_term() {
        let poly = Polynomial::new(vec![fe(42), fe(7), fe(3)]);
        let points = sample(&poly, &[1, 2, 3]);
        let refs: Vec<&SharePoint> = points.iter().collect();
        assert_eq!(interpolate_at_zero(&refs).unwrap(), fe(42));
    }

    #[test]
    fn extra_points_do_not_change_result() {
        let poly = Polynomial::new(vec![fe(1000), fe(5)]);
        let points = sample(&poly, &[10, 20, 30, 40]);
        let refs: Vec<&SharePoint> = points.iter().collect();
        assert_eq!(interpolate_at_zero(&refs).unwrap(), fe(1000));
    }

    #[test]
    fn duplicate_x_is_a_zero_inverse() {
        let poly = Polynomial::new(vec![fe(1), fe(2)]);
        let points = sample(&poly, &[4, 4]);
        let refs: Vec<&SharePoint> = points.iter().collect();
        assert_eq!(interpolate_at_zero(&refs), Err(ShareError::ZeroInverse));
    }

    #[test]
    fn single_point_returns_its_y() {
        let point = SharePoint { x: fe(3), y: fe(77) };
        assert_eq!(interpolate_at_zero(&[&point]).unwrap(), fe(77));
    }

    #[test]
    fn combine_rejects_empty_input() {
        let none: [&str; 0] = [];
        assert!(matches!(
            combine(&none),
            Err(ShareError::MalformedShare(_))
        ));
    }

    #[test]
    fn combine_rejects_mismatched_chunk_counts() {
        let one = encode_share(&[SharePoint { x: fe(1), y: fe(2) }]);
        let two = encode_share(&[
            SharePoint { x: fe(3), y: fe(4) },
            SharePoint { x: fe(5), y: fe(6) },
        ]);
        assert_eq!(
            combine(&[one, two]),
            Err(ShareError::InconsistentChunkCount {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn same_share_twice_is_reported() {
        let shares = SecretShare::new(2, 3).unwrap().generate(b"twice").unwrap();
        let doubled = [shares[0].clone(), shares[0].clone()];
        assert_eq!(combine(&doubled), Err(ShareError::ZeroInverse));
    }

    #[test]
    fn combines_generated_shares() {
        let shares = SecretShare::new(3, 5)
            .unwrap()
            .generate(b"super-secret message")
            .unwrap();
        assert_eq!(combine(&shares[1..4]).unwrap(), b"super-secret message");
    }

    #[test]
    fn empty_shares_combine_to_empty_secret() {
        assert!(combine(&["", ""]).unwrap().is_empty());
    }
}
