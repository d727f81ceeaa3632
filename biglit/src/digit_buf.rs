//! # DigitBuf
//! A fixed-capacity run of base-256 digits, least significant first, with an explicit logical length.
//! The storage decides the capacity and never grows; the engine writes into it and reports a
//! capacity fault instead of resizing.
//!
//! Any `AsRef<[u8]> + AsMut<[u8]>` storage works, so a stack array serves callers who want no
//! allocation at all:
//! ```
//! use biglit::{engine, DigitBuf};
//!
//! let mut sum = DigitBuf::new([0u8; 3]);
//! engine::add(&mut sum, &[0x04], &[0xFF, 0xFF]).unwrap();
//! assert_eq!(sum.digits(), &[0x03, 0x00, 0x01]);
//! ```

use crate::big_num_constants::DIGIT_BITS;
use crate::error::{ArithError, Result};

#[derive(Debug, Clone)]
pub struct DigitBuf<S = Box<[u8]>> {
    store: S,
    pub(crate) len: usize,
}

/// The owned buffer handed out by [`BigNat`](crate::BigNat).
pub type NatBuf = DigitBuf<Box<[u8]>>;

impl<S: AsRef<[u8]>> DigitBuf<S> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.as_ref().len()
    }

    /// The digits inside the logical length.
    pub fn digits(&self) -> &[u8] {
        &self.store.as_ref()[..self.len]
    }

    pub fn into_inner(self) -> (S, usize) {
        (self.store, self.len)
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> DigitBuf<S> {
    /// Wraps `store`, taking its whole capacity as the logical length.
    pub fn new(store: S) -> Self {
        let len = store.as_ref().len();
        DigitBuf { store, len }
    }

    pub fn with_len(store: S, len: usize) -> Result<Self> {
        let mut buf = DigitBuf::new(store);
        buf.set_len(len)?;
        Ok(buf)
    }

    pub fn set_len(&mut self, len: usize) -> Result<()> {
        if len > self.capacity() {
            return Err(ArithError::capacity(len, self.capacity()));
        }
        self.len = len;
        Ok(())
    }

    pub fn digits_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.store.as_mut()[..len]
    }

    /// The whole storage, ignoring the logical length.
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        self.store.as_mut()
    }

    /// Zeroes every digit of the storage and extends the length over all of it.
    pub fn blank(&mut self) {
        self.store.as_mut().fill(0);
        self.len = self.capacity();
    }

    /// Sets or clears bit `i` of the logical digits; out-of-range writes are ignored.
    pub fn write_bit(&mut self, i: usize, bit: bool) {
        let digit = i / DIGIT_BITS;
        if digit >= self.len {
            return;
        }
        let overlay = 1u8 << (i % DIGIT_BITS);
        let d = &mut self.digits_mut()[digit];
        if bit {
            *d |= overlay;
        } else {
            *d &= !overlay;
        }
    }

    /// Overwrites digit `i`; out-of-range writes are ignored.
    pub fn write_byte(&mut self, i: usize, byte: u8) {
        if let Some(d) = self.digits_mut().get_mut(i) {
            *d = byte;
        }
    }
}

impl NatBuf {
    /// A fresh blank buffer of `capacity` digits.
    pub fn zeroed(capacity: usize) -> NatBuf {
        DigitBuf::new(vec![0u8; capacity].into_boxed_slice())
    }
}

#[test]
fn test_with_len_respects_capacity() {
    let buf = DigitBuf::with_len([1u8, 2, 3, 4], 2).unwrap();
    assert_eq!(buf.digits(), &[1, 2]);
    assert_eq!(buf.capacity(), 4);

    let err = DigitBuf::with_len([0u8; 2], 3).unwrap_err();
    assert_eq!(err, ArithError::Capacity { required: 3, available: 2 });
}

#[test]
fn test_blank_spans_capacity() {
    let mut buf = DigitBuf::with_len(vec![0xAAu8; 5], 1).unwrap();
    buf.blank();
    assert_eq!(buf.len(), 5);
    assert!(buf.digits().iter().all(|&d| d == 0));
}

#[test]
fn test_write_bit_and_byte_ignore_out_of_range() {
    let mut buf = NatBuf::zeroed(2);
    buf.write_bit(9, true);
    buf.write_bit(0, true);
    buf.write_bit(16, true);
    assert_eq!(buf.digits(), &[0x01, 0x02]);
    buf.write_bit(9, false);
    buf.write_byte(1, 0x7F);
    buf.write_byte(2, 0xFF);
    assert_eq!(buf.digits(), &[0x01, 0x7F]);
}

#[test]
fn test_borrowed_storage() {
    let mut raw = [0u8; 4];
    {
        let mut buf = DigitBuf::with_len(&mut raw[..], 3).unwrap();
        buf.write_byte(2, 0x42);
        assert_eq!(buf.len(), 3);
    }
    assert_eq!(raw, [0, 0, 0x42, 0]);
}
