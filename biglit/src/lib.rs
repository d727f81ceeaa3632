//! Biglit \
//! This crate provides:
//! - [`BigNat`]: arbitrary-precision natural numbers. Subtraction saturates at zero.
//! - [`BigInt`]: arbitrary-precision integers with Euclidean division, so remainders are never negative.
//! - [`engine`]: the non-allocating digit algorithms underneath both, working on caller-sized [`DigitBuf`]s
//!   with the bounds from [`capacity`].
//!
//! Numbers are little-endian base-256 digit sequences. Dividing by zero through `/` or `%` panics;
//! `divmod`, `checked_div` and `checked_rem` return [`ArithError::DivideByZero`] instead.

#[macro_use]
mod macros;

mod big_int;
mod big_nat;
mod big_num_cache;
mod big_num_constants;
mod digit_buf;
mod error;

pub mod capacity;
pub mod engine;

pub use big_int::BigInt;
pub use big_nat::BigNat;
pub use big_num_constants::DIGIT_BITS;
pub use digit_buf::{DigitBuf, NatBuf};
pub use error::{ArithError, Result};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{capacity, engine, init_logger, BigInt, BigNat, DigitBuf};

    fn nat() -> impl Strategy<Value = BigNat> {
        prop::collection::vec(any::<u8>(), 0..24).prop_map(|bytes| BigNat::from_le_bytes(&bytes))
    }

    fn int() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), nat()).prop_map(|(negative, magnitude)| BigInt::from_parts(negative, magnitude))
    }

    #[test]
    fn it_works() {
        init_logger();
        let a = BigNat::from(10000000000000u64);
        let b = BigNat::from(900000000000u64);
        assert_eq!(&a + &b, BigNat::from(10900000000000u64));
        assert_eq!(&a - &b, BigNat::from(9100000000000u64));
        assert_eq!(&a * &b, BigNat::from(9000000000000000000000000u128));
        assert_eq!(&a / &b, BigNat::from(11u8));
        assert_eq!(&a % &b, BigNat::from(100000000000u64));
        assert_eq!(&a << 10, BigNat::from(10240000000000000u64));
        assert_eq!(&a >> 10, BigNat::from(9765625000u64));
    }

    #[test]
    fn worked_examples() {
        init_logger();
        assert_eq!(BigNat::from(0x04u8) + BigNat::from(0xFFFFu16), BigNat::from(0x10003u32));
        assert_eq!(BigNat::from(0x01FEu16) - BigNat::from(0x00FFu16), BigNat::from(0x00FFu8));
        assert_eq!(BigNat::from(0x11u8) - BigNat::from(0xDEADBEEFu32), BigNat::zero());
        assert_eq!(BigNat::from(0xFFu8) * BigNat::from(0xFFFFu16), BigNat::from(0xFEFF01u32));

        let (q, r) = BigNat::from(0x137u16).divmod(&BigNat::from(0x42u8)).unwrap();
        assert_eq!((q, r), (BigNat::from(0x4u8), BigNat::from(0x2Fu8)));

        let (q, r) = BigInt::from(-0x137).divmod(&BigInt::from(0x42)).unwrap();
        assert_eq!((q, r), (BigInt::from(-5), BigInt::from(0x13)));

        let min = BigInt::from(i128::MIN);
        assert_eq!(BigInt::negative(min.magnitude().clone()), min);
        assert_eq!(min.magnitude().bit_len(), 128);
    }

    proptest! {
        #[test]
        fn nat_add_commutes(a in nat(), b in nat()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn nat_sub_undoes_add(a in nat(), b in nat()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn nat_sub_saturates(a in nat(), b in nat()) {
            let diff = &a - &b;
            if b > a {
                prop_assert!(diff.is_zero());
            } else {
                prop_assert_eq!(&diff + &b, a);
            }
        }

        #[test]
        fn nat_mul_commutes(a in nat(), b in nat()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn nat_divmod_reconstructs(a in nat(), b in nat()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.divmod(&b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn nat_matches_u128(x in any::<u64>(), y in 1..=u64::MAX) {
            let (a, b) = (BigNat::from(x), BigNat::from(y));
            prop_assert_eq!((&a * &b).to_u128(), Some(x as u128 * y as u128));
            prop_assert_eq!((&a / &b).to_u128(), Some((x / y) as u128));
            prop_assert_eq!((&a % &b).to_u128(), Some((x % y) as u128));
            prop_assert_eq!((&a + &b).to_u128(), Some(x as u128 + y as u128));
        }

        #[test]
        fn engine_accepts_padded_operands(x in any::<u64>(), y in 1..=u64::MAX, pa in 0usize..4, pb in 0usize..4) {
            let mut n = BigNat::from(x).to_le_bytes();
            n.resize(n.len() + pa, 0);
            let mut d = BigNat::from(y).to_le_bytes();
            d.resize(d.len() + pb, 0);

            let mut q = DigitBuf::new(vec![0u8; capacity::for_div(n.len(), d.len())]);
            let mut r = DigitBuf::new(vec![0u8; capacity::for_mod(n.len(), d.len())]);
            engine::divmod(&mut q, &mut r, &n, &d).unwrap();
            prop_assert_eq!(BigNat::from_le_bytes(q.digits()), BigNat::from(x / y));
            prop_assert_eq!(BigNat::from_le_bytes(r.digits()), BigNat::from(x % y));

            let mut p = DigitBuf::new(vec![0u8; capacity::for_mul(n.len(), d.len())]);
            engine::mul(&mut p, &n, &d).unwrap();
            prop_assert_eq!(BigNat::from_le_bytes(p.digits()), BigNat::from(x as u128 * y as u128));
        }

        #[test]
        fn int_divmod_is_euclidean(a in int(), b in int()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.divmod(&b).unwrap();
            prop_assert!(!r.is_negative());
            prop_assert!(r.magnitude() < b.magnitude());
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn int_add_sub_round_trip(a in int(), b in int()) {
            prop_assert_eq!(&(&a + &b) - &b, a.clone());
            prop_assert_eq!(&a - &a, BigInt::zero());
        }

        #[test]
        fn int_matches_i64(x in any::<i64>(), y in any::<i64>()) {
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            let (x, y) = (x as i128, y as i128);
            prop_assert_eq!(&a + &b, BigInt::from(x + y));
            prop_assert_eq!(&a - &b, BigInt::from(x - y));
            prop_assert_eq!(&a * &b, BigInt::from(x * y));
            prop_assert_eq!(a.cmp(&b), x.cmp(&y));
            if y != 0 {
                prop_assert_eq!(&a / &b, BigInt::from(x.div_euclid(y)));
                prop_assert_eq!(&a % &b, BigInt::from(x.rem_euclid(y)));
            }
        }

        #[test]
        fn shift_round_trip_clears_low_bits(a in nat(), k in 0usize..64) {
            prop_assume!(k <= a.bit_len());
            let back = &(&a >> k) << k;
            let low = &(&BigNat::one() << k) - &BigNat::one();
            prop_assert_eq!(back, &a - &(&a & &low));
        }

        #[test]
        fn bitwise_identities(a in nat()) {
            prop_assert_eq!(&a & &a, a.clone());
            prop_assert!((&a ^ &a).is_zero());
            prop_assert_eq!(&a | &BigNat::zero(), a.clone());
        }

        #[test]
        fn normalized_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..24)) {
            let a = BigNat::from_le_bytes(&bytes);
            prop_assert_eq!(BigNat::from_le_bytes(a.digits()), a.clone());
            prop_assert!(a.digits().last().map_or(true, |&hi| hi != 0));
        }
    }
}
