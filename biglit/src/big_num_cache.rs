use lazy_static::*;

use crate::big_nat::BigNat;
use crate::big_num_constants::*;

lazy_static! {
    /// `0..=MAX_CONSTANT`, built once and cloned out by the constructors.
    pub static ref SMALL_NATS: Vec<BigNat> = (0..=MAX_CONSTANT as u8)
        .map(|v| BigNat::from_le_bytes(&[v]))
        .collect();
}

#[test]
fn test_small_nats_are_normalized() {
    assert_eq!(SMALL_NATS.len(), MAX_CONSTANT + 1);
    assert!(SMALL_NATS[0].is_zero());
    assert_eq!(SMALL_NATS[0].byte_len(), 0);
    for (v, n) in SMALL_NATS.iter().enumerate().skip(1) {
        assert_eq!(n.digits(), &[v as u8]);
    }
}
