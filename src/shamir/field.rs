//! Arithmetic in the prime field `GF(P)`.
//!
//! `P` is a fixed 257-bit prime, so every 32-byte chunk of a secret is a
//! valid field element and every element fits in [`FIELD_BYTES`] bytes.
//! Changing `P` invalidates every share produced with the old value.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand::CryptoRng;
use zeroize::Zeroize;

use super::error::{ShareError, ShareResult};

/// Width of a serialized field element in bytes (big-endian).
pub const FIELD_BYTES: usize = 33;

/// Only the lowest bit of the leading byte can be set for values below `P`.
const TOP_BYTE_MASK: u8 = 0x01;

/// P = 214663014907494254264734401372860550616125566004826012670437788223410219893687,
/// as little-endian 32-bit limbs.
const PRIME_LIMBS: [u32; 9] = [
    0x7241_c3b7,
    0x4fb1_87ca,
    0xee22_647c,
    0x4161_412d,
    0xcdf7_87c7,
    0xa699_1e44,
    0x3328_441e,
    0xda96_f5f8,
    0x0000_0001,
];

/// The field modulus.
pub fn prime() -> &'static BigUint {
    static PRIME: OnceLock<BigUint> = OnceLock::new();
    PRIME.get_or_init(|| BigUint::from_slice(&PRIME_LIMBS))
}

/// An integer in `[0, P)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Reduce an arbitrary integer into the field.
    pub fn new(value: BigUint) -> Self {
        Self(value % prime())
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn one() -> Self {
        Self(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Build an element from one 32-byte chunk. Always below `P`.
    pub(crate) fn from_chunk(chunk: &[u8; 32]) -> Self {
        Self(BigUint::from_bytes_be(chunk))
    }

    /// The low 256 bits of the element, big-endian.
    ///
    /// For any element built with [`FieldElement::from_chunk`] this is the
    /// original chunk.
    pub(crate) fn to_chunk(&self) -> [u8; 32] {
        let bytes = self.0.to_bytes_be();
        let mut chunk = [0u8; 32];
        let take = bytes.len().min(32);
        chunk[32 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
        chunk
    }

    /// Fixed-width big-endian encoding.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES] {
        let bytes = self.0.to_bytes_be();
        let mut out = [0u8; FIELD_BYTES];
        out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Parse a fixed-width big-endian encoding, rejecting values `>= P`.
    pub fn from_bytes(bytes: &[u8]) -> ShareResult<Self> {
        if bytes.len() != FIELD_BYTES {
            return Err(ShareError::MalformedShare(format!(
                "field element must be {FIELD_BYTES} bytes, got {}",
                bytes.len()
            )));
        }

        let value = BigUint::from_bytes_be(bytes);
        if &value >= prime() {
            return Err(ShareError::MalformedShare(
                "field element is outside the prime field".into(),
            ));
        }

        Ok(Self(value))
    }

    /// Draw a uniformly random element in `[1, P)` by rejection sampling.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut buf = [0u8; FIELD_BYTES];
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= TOP_BYTE_MASK;
            let candidate = BigUint::from_bytes_be(&buf);
            if !candidate.is_zero() && &candidate < prime() {
                buf.zeroize();
                return Self(candidate);
            }
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// Zero has no inverse. During interpolation that only happens when two
    /// points share an x-coordinate.
    pub fn inverse(&self) -> ShareResult<Self> {
        if self.is_zero() {
            return Err(ShareError::ZeroInverse);
        }

        let (mut old_r, mut r) = (BigInt::from(self.0.clone()), BigInt::from(prime().clone()));
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

        while !r.is_zero() {
            let quotient = &old_r / &r;
            let next_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, next_r);
            let next_s = &old_s - &quotient * &s;
            old_s = std::mem::replace(&mut s, next_s);
        }

        // gcd(a, P) == 1 for every non-zero a because P is prime.
        if !old_r.is_one() {
            return Err(ShareError::ZeroInverse);
        }

        let (sign, magnitude) = old_s.into_parts();
        let magnitude = magnitude % prime();
        if sign == Sign::Minus && !magnitude.is_zero() {
            Ok(Self(prime() - magnitude))
        } else {
            Ok(Self(magnitude))
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl<'a> Add<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % prime())
    }
}

impl<'a> Sub<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 + prime() - &rhs.0) % prime())
    }
}

impl<'a> Mul<&'a FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % prime())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(prime() - &self.0)
        }
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }
}
