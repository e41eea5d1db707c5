//! Polynomials over the prime field.

use rand::CryptoRng;

use super::error::ShareResult;
use super::field::FieldElement;
use super::uniqueness::UniquenessSet;

/// A polynomial stored constant term first: `coefficients[0]` is the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<FieldElement>) -> Self {
        Self { coefficients }
    }

    /// A polynomial of the given degree hiding `secret` as its constant term.
    ///
    /// Every other coefficient is a fresh draw from `seen`.
    pub fn random<R: CryptoRng + ?Sized>(
        secret: FieldElement,
        degree: usize,
        rng: &mut R,
        seen: &mut UniquenessSet,
    ) -> ShareResult<Self> {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(secret);
        for _ in 0..degree {
            coefficients.push(seen.draw(rng)?);
        }
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    /// Degree of the polynomial (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        evaluate(&self.coefficients, x)
    }
}

/// Horner's method, highest degree first.
pub fn evaluate(coefficients: &[FieldElement], x: &FieldElement) -> FieldElement {
    coefficients
        .iter()
        .rev()
        .fold(FieldElement::zero(), |acc, coeff| &(&acc * x) + coeff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fe(v: u64) -> FieldElement {
        FieldElement::from(v)
    }

    #[test]
    fn evaluates_with_horner() {
        // 3 + 2x + x^2
        let poly = Polynomial::new(vec![fe(3), fe(2), fe(1)]);
        assert_eq!(poly.evaluate(&fe(0)), fe(3));
        assert_eq!(poly.evaluate(&fe(1)), fe(6));
        assert_eq!(poly.evaluate(&fe(5)), fe(38));
    }

    #[test]
    fn empty_polynomial_is_zero() {
        assert_eq!(evaluate(&[], &fe(9)), FieldElement::zero());
    }

    #[test]
    fn evaluation_at_zero_is_constant_term() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = UniquenessSet::new();
        let poly = Polynomial::random(fe(1234), 4, &mut rng, &mut seen).unwrap();
        assert_eq!(poly.evaluate(&FieldElement::zero()), fe(1234));
    }

    #[test]
    fn random_polynomial_has_requested_degree() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = UniquenessSet::new();
        let poly = Polynomial::random(fe(7), 2, &mut rng, &mut seen).unwrap();

        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.coefficients()[0], fe(7));
        assert_eq!(seen.len(), 2);
        assert!(poly.coefficients()[1..].iter().all(|c| seen.contains(c)));
    }

    #[test]
    fn degree_zero_is_constant() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = UniquenessSet::new();
        let poly = Polynomial::random(fe(99), 0, &mut rng, &mut seen).unwrap();
        assert_eq!(poly.evaluate(&fe(12345)), fe(99));
        assert!(seen.is_empty());
    }
}
