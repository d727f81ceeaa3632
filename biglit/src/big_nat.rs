//! # BigNat
//! Arbitrary-precision natural numbers. Every value is normalized and owns its digits; every
//! operation allocates a fresh result sized by its capacity predictor.
//! # Example
//! ```
//! use biglit::BigNat;
//!
//! let a = BigNat::from(0x137u32);
//! let b = BigNat::from(0x42u32);
//! let (q, r) = a.divmod(&b).unwrap();
//! assert_eq!(q, BigNat::from(4u8));
//! assert_eq!(r, BigNat::from(0x2Fu8));
//! assert_eq!(&b - &a, BigNat::zero());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Add, Sub, Mul, Div, Rem, Shl, Shr};

use crate::big_num_cache::SMALL_NATS;
use crate::big_num_constants::*;
use crate::capacity;
use crate::digit_buf::NatBuf;
use crate::engine;
use crate::error::{ArithError, Result};

#[derive(Clone)]
pub struct BigNat {
    buf: NatBuf,
}

// 杂项辅助函数
impl BigNat {
    fn normalized(mut buf: NatBuf) -> BigNat {
        engine::normalize(&mut buf);
        BigNat { buf }
    }

    fn value_of(val: u128, width: usize) -> BigNat {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_NATS[val as usize].clone();
        }
        let mut buf = NatBuf::zeroed(width);
        sized(engine::load_u128(&mut buf, val));
        BigNat { buf }
    }
}

/// Unwraps an engine result whose destination came from the matching predictor.
fn sized<T>(res: Result<T>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => unreachable!("predictor-sized destination faulted: {}", e),
    }
}

// 实现构造
impl BigNat {
    pub fn zero() -> BigNat {
        SMALL_NATS[0].clone()
    }

    pub fn one() -> BigNat {
        SMALL_NATS[1].clone()
    }

    /// Reads little-endian base-256 digits; high zero digits are dropped.
    pub fn from_le_bytes(bytes: &[u8]) -> BigNat {
        let mut buf = NatBuf::zeroed(bytes.len());
        sized(engine::copy(&mut buf, bytes));
        BigNat::normalized(buf)
    }

    /// Adopts a hand-filled buffer, keeping at most its low `max_bytes` digits.
    pub fn from_buffer(mut buf: NatBuf, max_bytes: usize) -> BigNat {
        if max_bytes < buf.len() {
            buf.len = max_bytes;
        }
        BigNat::normalized(buf)
    }

    /// A fresh `n_bytes`-digit buffer holding this value, truncated if it does not fit.
    pub fn to_buffer(&self, n_bytes: usize) -> NatBuf {
        let mut buf = NatBuf::zeroed(n_bytes);
        let n = n_bytes.min(self.byte_len());
        buf.digits_mut()[..n].copy_from_slice(&self.digits()[..n]);
        buf
    }

    pub fn into_buffer(self) -> NatBuf {
        self.buf
    }
}

macro_rules! impl_unsigned_to_big_nat {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNat {
        fn from(val: $u) -> Self {
            BigNat::value_of(val as u128, capacity::for_native::<$u>())
        }
    }
    )*
    };
}
impl_unsigned_to_big_nat!(u8, u16, u32, u64, u128, usize);

impl Default for BigNat {
    fn default() -> Self {
        BigNat::zero()
    }
}

// 实现查询
impl BigNat {
    pub fn digits(&self) -> &[u8] {
        self.buf.digits()
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.digits().to_vec()
    }

    pub fn is_zero(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn bit(&self, i: usize) -> bool {
        engine::bit(self.digits(), i)
    }

    pub fn bit_len(&self) -> usize {
        match self.digits().last() {
            Some(hi) => self.byte_len() * DIGIT_BITS - hi.leading_zeros() as usize,
            None => 0,
        }
    }

    pub fn byte(&self, i: usize) -> u8 {
        engine::byte(self.digits(), i)
    }

    pub fn byte_len(&self) -> usize {
        self.buf.len()
    }

    /// `None` when the value is wider than 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.byte_len() > capacity::for_native::<u128>() {
            return None;
        }
        Some(self.digits().iter().rev().fold(0, |acc, &d| acc << DIGIT_BITS | d as u128))
    }
}

// 实现大小比较
impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}
impl Eq for BigNat {}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        // normalized, so the longer number is the larger
        self.byte_len()
            .cmp(&other.byte_len())
            .then_with(|| engine::cmp(self.digits(), other.digits()))
    }
}

impl Hash for BigNat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits().hash(state);
    }
}

impl fmt::Debug for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigNat").field(&self.digits()).finish()
    }
}

// 实现位运算
impl BitAnd<&BigNat> for &BigNat {
    type Output = BigNat;

    fn bitand(self, rhs: &BigNat) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_and(self.byte_len(), rhs.byte_len()));
        engine::and(&mut buf, self.digits(), rhs.digits());
        BigNat::normalized(buf)
    }
}

impl BitOr<&BigNat> for &BigNat {
    type Output = BigNat;

    fn bitor(self, rhs: &BigNat) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_or(self.byte_len(), rhs.byte_len()));
        engine::or(&mut buf, self.digits(), rhs.digits());
        BigNat::normalized(buf)
    }
}

impl BitXor<&BigNat> for &BigNat {
    type Output = BigNat;

    fn bitxor(self, rhs: &BigNat) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_xor(self.byte_len(), rhs.byte_len()));
        engine::xor(&mut buf, self.digits(), rhs.digits());
        BigNat::normalized(buf)
    }
}

// 实现加减法
impl BigNat {
    pub fn inc(&self) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_inc(self.byte_len()));
        sized(engine::inc(&mut buf, self.digits()));
        BigNat::normalized(buf)
    }

    /// Saturates: the predecessor of zero is zero.
    pub fn dec(&self) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_dec(self.byte_len()));
        saturate(engine::dec(&mut buf, self.digits()).map(|_| BigNat::normalized(buf)))
    }

    /// `Err(Underflow)` when `rhs > self`.
    pub fn checked_sub(&self, rhs: &BigNat) -> Result<BigNat> {
        let mut buf = NatBuf::zeroed(capacity::for_sub(self.byte_len(), rhs.byte_len()));
        engine::sub(&mut buf, self.digits(), rhs.digits())?;
        Ok(BigNat::normalized(buf))
    }

    /// Zero when `rhs > self`. This is the policy behind `-`.
    pub fn saturating_sub(&self, rhs: &BigNat) -> BigNat {
        saturate(self.checked_sub(rhs))
    }
}

fn saturate(res: Result<BigNat>) -> BigNat {
    match res {
        Err(ArithError::Underflow) => BigNat::zero(),
        other => sized(other),
    }
}

impl Add<&BigNat> for &BigNat {
    type Output = BigNat;

    fn add(self, rhs: &BigNat) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_add(self.byte_len(), rhs.byte_len()));
        sized(engine::add(&mut buf, self.digits(), rhs.digits()));
        BigNat::normalized(buf)
    }
}

impl Sub<&BigNat> for &BigNat {
    type Output = BigNat;

    fn sub(self, rhs: &BigNat) -> BigNat {
        self.saturating_sub(rhs)
    }
}

// 实现乘法
impl Mul<&BigNat> for &BigNat {
    type Output = BigNat;

    fn mul(self, rhs: &BigNat) -> BigNat {
        if self.is_zero() || rhs.is_zero() {
            return BigNat::zero();
        }
        let mut buf = NatBuf::zeroed(capacity::for_mul(self.byte_len(), rhs.byte_len()));
        sized(engine::mul(&mut buf, self.digits(), rhs.digits()));
        BigNat::normalized(buf)
    }
}

// 实现除法
impl BigNat {
    /// Truncating quotient and remainder, `0 <= r < d`.
    pub fn divmod(&self, d: &BigNat) -> Result<(BigNat, BigNat)> {
        if d.is_zero() {
            return Err(ArithError::DivideByZero);
        }
        let mut q = NatBuf::zeroed(capacity::for_div(self.byte_len(), d.byte_len()));
        let mut r = NatBuf::zeroed(capacity::for_mod(self.byte_len(), d.byte_len()));
        sized(engine::divmod(&mut q, &mut r, self.digits(), d.digits()));
        Ok((BigNat::normalized(q), BigNat::normalized(r)))
    }

    pub fn checked_div(&self, d: &BigNat) -> Result<BigNat> {
        self.divmod(d).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, d: &BigNat) -> Result<BigNat> {
        self.divmod(d).map(|(_, r)| r)
    }
}

/// The operator forms treat a zero divisor as fatal.
pub(crate) fn fatal<T>(res: Result<T>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => {
            log::error!("{}", e);
            panic!("{}", e);
        }
    }
}

impl Div<&BigNat> for &BigNat {
    type Output = BigNat;

    fn div(self, rhs: &BigNat) -> BigNat {
        fatal(self.checked_div(rhs))
    }
}

impl Rem<&BigNat> for &BigNat {
    type Output = BigNat;

    fn rem(self, rhs: &BigNat) -> BigNat {
        fatal(self.checked_rem(rhs))
    }
}

forward_binop!(BigNat;
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
);

// 实现移位
impl Shl<usize> for &BigNat {
    type Output = BigNat;

    fn shl(self, amt: usize) -> BigNat {
        if self.is_zero() {
            return BigNat::zero();
        }
        let mut buf = NatBuf::zeroed(capacity::for_shl(self.byte_len(), amt));
        sized(engine::copy(&mut buf, self.digits()));
        engine::shl(&mut buf, amt);
        BigNat::normalized(buf)
    }
}

impl Shr<usize> for &BigNat {
    type Output = BigNat;

    fn shr(self, amt: usize) -> BigNat {
        let mut buf = NatBuf::zeroed(capacity::for_shr(self.byte_len()));
        sized(engine::copy(&mut buf, self.digits()));
        engine::shr(&mut buf, amt);
        BigNat::normalized(buf)
    }
}

forward_shift!(BigNat);

#[cfg(test)]
fn nat(v: u128) -> BigNat {
    BigNat::from(v)
}

#[test]
fn test_from() {
    assert!(BigNat::from(0u8).is_zero());
    assert_eq!(BigNat::from(0x42u8).digits(), &[0x42]);
    assert_eq!(BigNat::from(0xdeadbeefu32).digits(), &[0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(BigNat::from(u64::MAX).byte_len(), 8);
    assert_eq!(BigNat::from(u128::MAX).to_u128(), Some(u128::MAX));
    assert_eq!(BigNat::from_le_bytes(&[0x01, 0x00, 0x00]).digits(), &[0x01]);
    assert_eq!(BigNat::from(0x1234usize), nat(0x1234));
}

#[test]
fn test_buffers() {
    let mut buf = NatBuf::zeroed(4);
    buf.write_byte(0, 0x21);
    buf.write_byte(1, 0x43);
    buf.write_bit(17, true);
    assert_eq!(BigNat::from_buffer(buf.clone(), usize::MAX), nat(0x024321));
    assert_eq!(BigNat::from_buffer(buf, 1), nat(0x21));

    let a = nat(0x54321);
    let copy = a.to_buffer(8);
    assert_eq!(copy.capacity(), 8);
    assert_eq!(BigNat::from_buffer(copy, usize::MAX), a);
    let short = a.to_buffer(2);
    assert_eq!(BigNat::from_buffer(short, usize::MAX), nat(0x4321));
}

#[test]
fn test_queries() {
    let a = nat(0x1F0);
    assert_eq!(a.bit_len(), 9);
    assert_eq!(a.byte_len(), 2);
    assert!(a.bit(4));
    assert!(!a.bit(3));
    assert!(!a.bit(1000));
    assert_eq!(a.byte(1), 0x01);
    assert_eq!(a.byte(7), 0);
    assert_eq!(BigNat::zero().bit_len(), 0);
    assert_eq!(nat(1).bit_len(), 1);
    assert_eq!((nat(1) << 200).to_u128(), None);
}

#[test]
fn test_cmp() {
    assert!(nat(0x123) < nat(0x9876543210));
    assert!(nat(0x200) > nat(0x1FF));
    assert_eq!(nat(0x123).cmp(&nat(0x123)), Ordering::Equal);
    assert!(BigNat::zero() < BigNat::one());
}

#[test]
fn test_add_sub() {
    assert_eq!(nat(0x04) + nat(0xFFFF), nat(0x10003));
    assert_eq!(nat(0xdeadbeef) + nat(0x11), nat(0xdeadbf00));
    assert_eq!(nat(0x01FE) - nat(0x00FF), nat(0x00FF));
    assert_eq!(nat(0x11) - nat(0xDEADBEEF), BigNat::zero());
    assert_eq!(nat(0x11).checked_sub(&nat(0xDEADBEEF)), Err(ArithError::Underflow));
    assert_eq!(nat(0x11).checked_sub(&nat(0x11)), Ok(BigNat::zero()));

    let mut acc = nat(0xFF);
    acc += nat(1);
    acc -= &nat(0x10);
    assert_eq!(acc, nat(0xF0));
}

#[test]
fn test_inc_dec() {
    assert_eq!(nat(0xFF).inc(), nat(0x100));
    assert_eq!(BigNat::zero().inc(), BigNat::one());
    assert_eq!(nat(0x100).dec(), nat(0xFF));
    assert_eq!(BigNat::one().dec(), BigNat::zero());
    assert_eq!(BigNat::zero().dec(), BigNat::zero());
}

#[test]
fn test_mul() {
    assert_eq!(nat(0xFF) * nat(0xFFFF), nat(0xFEFF01));
    assert_eq!(nat(0xFFFF) * BigNat::zero(), BigNat::zero());
    assert_eq!(&nat(0x123) * &nat(0x9876543210), nat(0xAD4E81B4E830));
}

#[test]
fn test_divmod() {
    assert_eq!(nat(0x137).divmod(&nat(0x42)), Ok((nat(0x4), nat(0x2F))));
    assert_eq!(nat(0x42).divmod(&nat(0x137)), Ok((BigNat::zero(), nat(0x42))));
    assert_eq!(nat(0x42).divmod(&BigNat::zero()), Err(ArithError::DivideByZero));
    assert_eq!(nat(1_000_000_007) / nat(1000), nat(1_000_000));
    assert_eq!(nat(1_000_000_007) % nat(1000), nat(7));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_by_zero_is_fatal() {
    let _ = nat(0x42) / BigNat::zero();
}

#[test]
fn test_bitwise() {
    assert_eq!(nat(0x321) & nat(0x23), nat(0x21));
    assert_eq!(nat(0x321) | nat(0x23), nat(0x323));
    assert_eq!(nat(0x321) ^ nat(0x23), nat(0x302));
    assert_eq!(nat(0xFF00) & nat(0x00FF), BigNat::zero());
    assert_eq!((nat(0xFF00) & nat(0x00FF)).byte_len(), 0);
}

#[test]
fn test_shifts() {
    assert_eq!(nat(0x54321) >> 8, nat(0x543));
    assert_eq!(nat(0x54321) >> 17, nat(0x2));
    assert_eq!(nat(0x54321) >> 64, BigNat::zero());
    assert_eq!(nat(0x54321) << 17, nat(0xA86420000));
    assert_eq!(BigNat::zero() << 100, BigNat::zero());
}

#[test]
fn test_shl_never_loses_high_bits() {
    // every residual bit count against a value whose top digit is saturated
    let a = nat(0xFFFF_FFFF);
    for amt in 0..64 {
        let shifted = &a << amt;
        assert_eq!(shifted.bit_len(), 32 + amt, "shift by {}", amt);
        assert_eq!(&shifted >> amt, a, "shift by {}", amt);
    }
    let wide = BigNat::from_le_bytes(&[0xFF; 40]);
    assert_eq!((&wide << 7).bit_len(), 40 * 8 + 7);
    assert_eq!((&wide << 1000).bit_len(), 40 * 8 + 1000);
}
