//! # Capacity predictors
//! Worst-case digit counts for every engine operation, computed from operand lengths alone.
//! A destination at least this large never triggers a capacity fault.

use crate::big_num_constants::DIGIT_BITS;

pub fn for_and(a_len: usize, b_len: usize) -> usize {
    a_len.min(b_len)
}

pub fn for_or(a_len: usize, b_len: usize) -> usize {
    a_len.max(b_len)
}

pub fn for_xor(a_len: usize, b_len: usize) -> usize {
    a_len.max(b_len)
}

/// One extra digit for the final carry.
pub fn for_add(a_len: usize, b_len: usize) -> usize {
    a_len.max(b_len) + 1
}

pub fn for_inc(len: usize) -> usize {
    len + 1
}

/// Subtraction never grows the minuend.
pub fn for_sub(a_len: usize, _b_len: usize) -> usize {
    a_len
}

pub fn for_dec(len: usize) -> usize {
    len
}

pub fn for_mul(a_len: usize, b_len: usize) -> usize {
    a_len + b_len
}

pub fn for_div(n_len: usize, _d_len: usize) -> usize {
    n_len
}

pub fn for_mod(_n_len: usize, d_len: usize) -> usize {
    d_len
}

/// `len` digits shifted left by `amt` bits occupy at most `len + ceil(amt / 8)` digits.
pub fn for_shl(len: usize, amt: usize) -> usize {
    len + amt / DIGIT_BITS + 1
}

pub fn for_shr(len: usize) -> usize {
    len
}

/// Digits needed for an `nbits`-bit number.
pub fn for_bits(nbits: usize) -> usize {
    (nbits + DIGIT_BITS - 1) / DIGIT_BITS
}

/// Digits needed for any value of the native integer `T`.
pub fn for_native<T>() -> usize {
    std::mem::size_of::<T>()
}

#[test]
fn test_for_bits() {
    assert_eq!(for_bits(1024), 128);
    assert_eq!(for_bits(1023), 128);
    assert_eq!(for_bits(7), 1);
    assert_eq!(for_bits(0), 0);
}

#[test]
fn test_binary_bounds() {
    assert_eq!(for_and(3, 5), 3);
    assert_eq!(for_or(3, 5), 5);
    assert_eq!(for_xor(5, 3), 5);
    assert_eq!(for_add(2, 1), 3);
    assert_eq!(for_sub(4, 2), 4);
    assert_eq!(for_mul(1, 2), 3);
    assert_eq!(for_div(7, 2), 7);
    assert_eq!(for_mod(7, 2), 2);
    assert_eq!(for_native::<u64>(), 8);
    assert_eq!(for_native::<i128>(), 16);
}
