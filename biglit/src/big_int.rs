//! # BigInt
//! Arbitrary-precision integers as a sign and a [`BigNat`] magnitude. There is no negative zero.
//!
//! Division is Euclidean: for `a = b * q + r` the remainder always satisfies `0 <= r < |b|`,
//! whatever the signs of `a` and `b`.
//!
//! | a, b  | 4, 3 | -4, 3 | 4, -3 | -4, -3 |
//! |-------|------|-------|-------|--------|
//! | a / b |  1   |  -2   |  -1   |   2    |
//! | a % b |  1   |   2   |   1   |   2    |
//!
//! # Example
//! ```
//! use biglit::BigInt;
//!
//! let a = BigInt::from(-0x137);
//! let b = BigInt::from(0x42);
//! let (q, r) = a.divmod(&b).unwrap();
//! assert_eq!(q, BigInt::from(-5));
//! assert_eq!(r, BigInt::from(0x13));
//! assert_eq!(&(&b * &q) + &r, a);
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::big_nat::{fatal, BigNat};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: BigNat,
}

// 实现构造
impl BigInt {
    pub fn zero() -> BigInt {
        BigInt::positive(BigNat::zero())
    }

    pub fn one() -> BigInt {
        BigInt::positive(BigNat::one())
    }

    /// A negative zero comes out as zero.
    pub fn from_parts(negative: bool, magnitude: BigNat) -> BigInt {
        BigInt { negative: negative && !magnitude.is_zero(), magnitude }
    }

    pub fn positive(magnitude: BigNat) -> BigInt {
        BigInt::from_parts(false, magnitude)
    }

    pub fn negative(magnitude: BigNat) -> BigInt {
        BigInt::from_parts(true, magnitude)
    }
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN from overflowing
            BigInt::from_parts(val < 0, BigNat::from(val.unsigned_abs()))
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::positive(BigNat::from(val))
        }
    }
    )*
    };
}
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);

impl From<BigNat> for BigInt {
    fn from(magnitude: BigNat) -> Self {
        BigInt::positive(magnitude)
    }
}

// 实现查询
impl BigInt {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn magnitude(&self) -> &BigNat {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> BigNat {
        self.magnitude
    }

    pub fn abs(&self) -> BigInt {
        BigInt::positive(self.magnitude.clone())
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

// 实现取反
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let BigInt { negative, magnitude } = self;
        BigInt::from_parts(!negative, magnitude)
    }
}

// 实现加减法
impl BigInt {
    pub fn inc(&self) -> BigInt {
        if self.negative {
            BigInt::negative(self.magnitude.dec())
        } else {
            BigInt::positive(self.magnitude.inc())
        }
    }

    pub fn dec(&self) -> BigInt {
        if self.negative || self.is_zero() {
            BigInt::negative(self.magnitude.inc())
        } else {
            BigInt::positive(self.magnitude.dec())
        }
    }

    /// `a + b` where `b` carries the sign `b_negative`.
    fn add_signed(&self, b_negative: bool, b: &BigNat) -> BigInt {
        if self.negative == b_negative {
            return BigInt::from_parts(b_negative, &self.magnitude + b);
        }
        match self.magnitude.cmp(b) {
            Ordering::Greater => BigInt::from_parts(self.negative, &self.magnitude - b),
            Ordering::Equal => BigInt::zero(),
            Ordering::Less => BigInt::from_parts(b_negative, b - &self.magnitude),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        self.add_signed(rhs.negative, &rhs.magnitude)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self.add_signed(!rhs.negative && !rhs.is_zero(), &rhs.magnitude)
    }
}

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        // from_parts forces a zero product non-negative
        BigInt::from_parts(self.negative ^ rhs.negative, &self.magnitude * &rhs.magnitude)
    }
}

// 实现除法
impl BigInt {
    /// Euclidean quotient and remainder: `self = d * q + r` with `0 <= r < |d|`.
    pub fn divmod(&self, d: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.magnitude.divmod(&d.magnitude)?;
        if !self.negative {
            return Ok((BigInt::from_parts(d.negative, q), BigInt::positive(r)));
        }
        if r.is_zero() {
            return Ok((BigInt::from_parts(!d.negative, q), BigInt::zero()));
        }
        // a negative dividend with a remainder rounds the quotient away from zero
        let r = &d.magnitude - &r;
        Ok((BigInt::from_parts(!d.negative, q.inc()), BigInt::positive(r)))
    }

    pub fn checked_div(&self, d: &BigInt) -> Result<BigInt> {
        self.divmod(d).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, d: &BigInt) -> Result<BigInt> {
        self.divmod(d).map(|(_, r)| r)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        fatal(self.checked_div(rhs))
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        fatal(self.checked_rem(rhs))
    }
}

forward_binop!(BigInt;
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
);

#[cfg(test)]
fn int(v: i128) -> BigInt {
    BigInt::from(v)
}

#[test]
fn test_from() {
    assert_eq!(int(0x42).magnitude(), &BigNat::from(0x42u8));
    assert!(int(-0x137).is_negative());
    assert_eq!(int(-0x137).magnitude(), &BigNat::from(0x137u16));
    assert!(!int(0).is_negative());

    let max = BigInt::from(i64::MAX);
    assert_eq!(max.magnitude().to_u128(), Some(i64::MAX as u128));
    let min = BigInt::from(i64::MIN);
    assert!(min.is_negative());
    assert_eq!(min.magnitude().to_u128(), Some(1 << 63));
    let min = BigInt::from(i128::MIN);
    assert_eq!(min.magnitude().to_u128(), Some(1 << 127));
    assert_eq!(min.magnitude().byte_len(), 16);

    let nat = BigNat::from(0x137u16);
    assert_eq!(BigInt::from(nat.clone()), int(0x137));
    assert_eq!(int(-0x137).abs(), int(0x137));
    assert_eq!(int(-0x137).into_magnitude(), nat);
}

#[test]
fn test_no_negative_zero() {
    assert_eq!(BigInt::negative(BigNat::zero()), BigInt::zero());
    assert!(!(-BigInt::zero()).is_negative());
    assert_eq!(int(0).signum(), 0);
    assert_eq!(int(-3).signum(), -1);
    assert_eq!(int(3).signum(), 1);
}

#[test]
fn test_cmp() {
    let a = int(-0x137);
    let b = int(-0x137);
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert!(a < int(0x137));
    assert!(int(0x137) > a);
    assert!(int(-0x42) > int(-0x137));
    assert!(int(-0x137) < int(-0x42));
    assert!(int(-1) < int(0));
}

#[test]
fn test_add_sub() {
    let a = 0xdeadbeef_i128;
    let b = 0x11_i128;
    for (x, y) in [(a, b), (a, -b), (-a, b), (-a, -b)] {
        assert_eq!(int(x) + int(y), int(x + y), "{} + {}", x, y);
        assert_eq!(int(y) + int(x), int(x + y), "{} + {}", y, x);
        assert_eq!(int(x) - int(y), int(x - y), "{} - {}", x, y);
        assert_eq!(int(y) - int(x), int(y - x), "{} - {}", y, x);
    }
    assert_eq!(int(a) + int(-a), BigInt::zero());
    assert!(!(int(-a) + int(a)).is_negative());
    assert_eq!(int(5) - int(0), int(5));
    assert_eq!(int(0) - int(5), int(-5));
}

#[test]
fn test_inc_dec() {
    assert_eq!(int(-1).inc(), int(0));
    assert!(!int(-1).inc().is_negative());
    assert_eq!(int(-0x100).inc(), int(-0xFF));
    assert_eq!(int(0xFF).inc(), int(0x100));
    assert_eq!(int(0).dec(), int(-1));
    assert_eq!(int(-0xFF).dec(), int(-0x100));
    assert_eq!(int(1).dec(), int(0));
}

#[test]
fn test_mul() {
    assert_eq!(int(0xFFFF) * int(0xF), int(0xEFFF1));
    assert_eq!(int(-0xFFFF) * int(0xF), int(-0xEFFF1));
    assert_eq!(int(-0xFFFF) * int(-0xF), int(0xEFFF1));
    assert_eq!(int(0xFFFF) * int(-0xF), int(-0xEFFF1));
    assert!(!(int(-0xFFFF) * int(0)).is_negative());
    assert_eq!(int(-0xFFFF) * int(0), BigInt::zero());
}

#[test]
fn test_divmod_sign_table() {
    assert_eq!(int(4).divmod(&int(3)), Ok((int(1), int(1))));
    assert_eq!(int(-4).divmod(&int(3)), Ok((int(-2), int(2))));
    assert_eq!(int(4).divmod(&int(-3)), Ok((int(-1), int(1))));
    assert_eq!(int(-4).divmod(&int(-3)), Ok((int(2), int(2))));

    assert_eq!(int(0x5032).divmod(&int(0x2000)), Ok((int(2), int(0x1032))));
    assert_eq!(int(-0x5032).divmod(&int(0x2000)), Ok((int(-3), int(0xFCE))));
    assert_eq!(int(-0x5032).divmod(&int(-0x2000)), Ok((int(3), int(0xFCE))));
    assert_eq!(int(0x5032).divmod(&int(-0x2000)), Ok((int(-2), int(0x1032))));
}

#[test]
fn test_divmod_exact_and_small() {
    assert_eq!(int(-6).divmod(&int(3)), Ok((int(-2), int(0))));
    assert_eq!(int(-6).divmod(&int(-3)), Ok((int(2), int(0))));
    assert_eq!(int(6).divmod(&int(-3)), Ok((int(-2), int(0))));
    // |a| < |b|: the truncated quotient is zero
    assert_eq!(int(-1).divmod(&int(5)), Ok((int(-1), int(4))));
    assert_eq!(int(-1).divmod(&int(-5)), Ok((int(1), int(4))));
    assert_eq!(int(1).divmod(&int(-5)), Ok((int(0), int(1))));
    assert_eq!(int(0).divmod(&int(-5)), Ok((int(0), int(0))));
}

#[test]
fn test_divmod_by_zero() {
    assert_eq!(int(-7).divmod(&int(0)), Err(crate::error::ArithError::DivideByZero));
    assert_eq!(int(7).checked_rem(&int(0)), Err(crate::error::ArithError::DivideByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_by_zero_is_fatal() {
    let _ = int(-7) % int(0);
}

#[test]
fn test_euclid_matches_std() {
    for a in -40i128..=40 {
        for b in (-9i128..=9).filter(|&b| b != 0) {
            assert_eq!(int(a) / int(b), int(a.div_euclid(b)), "{} / {}", a, b);
            assert_eq!(int(a) % int(b), int(a.rem_euclid(b)), "{} % {}", a, b);
        }
    }
}
