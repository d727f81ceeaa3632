//! # Engine
//! Digit-level algorithms over caller-supplied buffers. Nothing here allocates.
//!
//! Inputs are plain digit slices and need not be normalized; outputs are generally left
//! unnormalized, so call [`normalize`] when a canonical form is needed. Every destination is a
//! [`DigitBuf`] whose capacity bounds what may be written; size it with the matching function in
//! [`capacity`](crate::capacity) and no capacity fault can occur.

use std::cmp::Ordering;

use crate::big_num_constants::DIGIT_BITS;
use crate::digit_buf::DigitBuf;
use crate::error::{ArithError, Result};

// 查询

/// Bit `i` of `src`, zero-indexed from the least significant. Bits past the end read as zero.
pub fn bit(src: &[u8], i: usize) -> bool {
    match src.get(i / DIGIT_BITS) {
        Some(d) => (d >> (i % DIGIT_BITS)) & 0x01 == 1,
        None => false,
    }
}

/// Digit `i` of `src`, zero past the end.
pub fn byte(src: &[u8], i: usize) -> u8 {
    src.get(i).copied().unwrap_or(0)
}

/// Compares by value: high zero digits on the longer operand are ignored.
pub fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    let (long, short, flip) = if a.len() < b.len() {
        (b, a, true)
    } else {
        (a, b, false)
    };
    let ord = if long[short.len()..].iter().any(|&d| d != 0) {
        Ordering::Greater
    } else {
        long[..short.len()]
            .iter()
            .rev()
            .zip(short.iter().rev())
            .map(|(x, y)| x.cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    };
    if flip { ord.reverse() } else { ord }
}

// 初始化

/// Copies `src` into `dst`, zeroing the rest of the capacity. The length spans the whole capacity.
pub fn copy<S>(dst: &mut DigitBuf<S>, src: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let cap = dst.capacity();
    if cap < src.len() {
        return Err(ArithError::capacity(src.len(), cap));
    }
    let out = dst.spare_mut();
    out[..src.len()].copy_from_slice(src);
    out[src.len()..].fill(0);
    dst.len = cap;
    Ok(())
}

/// Stores a native value in `dst` and normalizes it.
pub fn load_u128<S>(dst: &mut DigitBuf<S>, src: u128) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let cap = dst.capacity();
    let mut rest = src;
    for d in dst.spare_mut().iter_mut() {
        *d = rest as u8;
        rest >>= DIGIT_BITS;
    }
    if rest != 0 {
        let required = (u128::BITS - src.leading_zeros()) as usize;
        return Err(ArithError::capacity((required + DIGIT_BITS - 1) / DIGIT_BITS, cap));
    }
    dst.len = cap;
    normalize(dst);
    Ok(())
}

// 位运算

/// Stops at the shorter operand; the length becomes the number of digits written.
pub fn and<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8])
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let n = dst.capacity().min(a.len()).min(b.len());
    let out = dst.spare_mut();
    for i in 0..n {
        out[i] = a[i] & b[i];
    }
    dst.len = n;
}

pub fn or<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8])
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    combine(dst, a, b, |x, y| x | y);
}

pub fn xor<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8])
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    combine(dst, a, b, |x, y| x ^ y);
}

/// Combines the overlapping digits and copies the rest of the longer operand, up to capacity.
fn combine<S, F>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8], op: F)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    F: Fn(u8, u8) -> u8,
{
    let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let n = dst.capacity().min(long.len());
    let out = dst.spare_mut();
    for i in 0..n.min(short.len()) {
        out[i] = op(long[i], short[i]);
    }
    for i in short.len()..n {
        out[i] = long[i];
    }
    dst.len = n;
}

// 加减法

/// `dst = a + b`. Needs no blank destination. Faults only if the digits produced, final carry
/// included, exceed the capacity.
pub fn add<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let cap = dst.capacity();
    if cap < a.len() {
        return Err(ArithError::capacity(a.len(), cap));
    }
    let out = dst.spare_mut();
    let mut carry: u16 = 0;
    for i in 0..a.len() {
        carry += a[i] as u16 + byte(b, i) as u16;
        out[i] = carry as u8;
        carry >>= DIGIT_BITS;
    }
    let mut len = a.len();
    if carry != 0 {
        if cap == len {
            return Err(ArithError::capacity(len + 1, cap));
        }
        out[len] = carry as u8;
        len += 1;
    }
    dst.len = len;
    Ok(())
}

pub fn inc<S>(dst: &mut DigitBuf<S>, src: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    add(dst, src, &[1])
}

/// `dst = a - b`. Reports `Underflow` when `b` has more digits than `a` or a borrow is left
/// over, leaving `dst` empty. Needs no blank destination.
pub fn sub<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    if b.len() > a.len() {
        dst.len = 0;
        return Err(ArithError::Underflow);
    }
    let cap = dst.capacity();
    if cap < a.len() {
        return Err(ArithError::capacity(a.len(), cap));
    }
    let out = dst.spare_mut();
    let mut borrow: i16 = 0;
    for i in 0..a.len() {
        borrow += a[i] as i16 - byte(b, i) as i16;
        out[i] = borrow as u8;
        borrow >>= DIGIT_BITS;
    }
    if borrow != 0 {
        dst.len = 0;
        log::debug!("sub: {}-digit subtrahend exceeds minuend", b.len());
        return Err(ArithError::Underflow);
    }
    dst.len = a.len();
    Ok(())
}

pub fn dec<S>(dst: &mut DigitBuf<S>, src: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    sub(dst, src, &[1])
}

/// `acc -= b` modulo `256^acc.len()`.
fn sub_wrapping(acc: &mut [u8], b: &[u8]) {
    let mut borrow: i16 = 0;
    for (i, d) in acc.iter_mut().enumerate() {
        borrow += *d as i16 - byte(b, i) as i16;
        *d = borrow as u8;
        borrow >>= DIGIT_BITS;
    }
}

// 乘法

/// Accumulates `a * b` into `dst`, which must be blank over its first `a.len() + b.len()` digits
/// for the result to be the plain product.
pub fn mul<S>(dst: &mut DigitBuf<S>, a: &[u8], b: &[u8]) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let width = a.len() + b.len();
    let cap = dst.capacity();
    if cap < width {
        return Err(ArithError::capacity(width, cap));
    }
    let out = &mut dst.spare_mut()[..width];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            let mut carry = x as u16 * y as u16;
            // the tight width keeps every carry inside `out`
            for d in out[i + j..].iter_mut() {
                carry += *d as u16;
                *d = carry as u8;
                carry >>= DIGIT_BITS;
                if carry == 0 {
                    break;
                }
            }
        }
    }
    dst.len = width;
    Ok(())
}

// 除法

/// Truncating `q = n / d`, `r = n % d` by bit-serial restoring division.
///
/// Both destinations must be blank over the first `n.len()` and `d.len()` digits respectively.
/// A zero divisor is not checked: the loop still terminates, with meaningless `q` and `r`.
pub fn divmod<Q, R>(q: &mut DigitBuf<Q>, r: &mut DigitBuf<R>, n: &[u8], d: &[u8]) -> Result<()>
where
    Q: AsRef<[u8]> + AsMut<[u8]>,
    R: AsRef<[u8]> + AsMut<[u8]>,
{
    if q.capacity() < n.len() {
        return Err(ArithError::capacity(n.len(), q.capacity()));
    }
    if r.capacity() < d.len() {
        return Err(ArithError::capacity(d.len(), r.capacity()));
    }
    q.len = n.len();
    r.len = d.len();
    log::trace!("divmod: {} dividend bits over a {}-digit divisor", n.len() * DIGIT_BITS, d.len());

    for i in (0..n.len() * DIGIT_BITS).rev() {
        // r < d held before the shift, so a bit pushed out of the top means r > d now
        let carried = r.len > 0 && bit(r.digits(), r.len * DIGIT_BITS - 1);
        shl(r, 1);
        if bit(n, i) {
            r.write_bit(0, true);
        }
        if carried || cmp(r.digits(), d) != Ordering::Less {
            sub_wrapping(r.digits_mut(), d);
            q.write_bit(i, true);
        }
    }
    Ok(())
}

// 移位与规范化

/// Sets bit `i` within the current length.
pub fn write_bit<S>(dst: &mut DigitBuf<S>, i: usize, val: bool) -> Result<()>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let digit = i / DIGIT_BITS;
    if digit >= dst.len {
        return Err(ArithError::capacity(digit + 1, dst.len));
    }
    dst.write_bit(i, val);
    Ok(())
}

/// Shifts right in place. The length shrinks by `amt / 8` digits rather than zeroing the top.
pub fn shr<S>(dst: &mut DigitBuf<S>, amt: usize)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let digits = amt / DIGIT_BITS;
    let bits = amt % DIGIT_BITS;
    let len = dst.len;
    if digits >= len {
        dst.len = 0;
        return;
    }
    let buf = dst.digits_mut();
    // low to high, so every source digit is read before it is overwritten
    for dst_i in 0..len - digits {
        let src_i = dst_i + digits;
        let hi = if src_i + 1 < len { buf[src_i + 1] } else { 0 };
        let lo = buf[src_i];
        let pair = (hi as u32) << DIGIT_BITS | lo as u32;
        buf[dst_i] = (pair >> bits) as u8;
    }
    dst.len = len - digits;
}

/// Shifts left in place within the current length. High bits shifted out are lost.
pub fn shl<S>(dst: &mut DigitBuf<S>, amt: usize)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let digits = amt / DIGIT_BITS;
    let bits = amt % DIGIT_BITS;
    let len = dst.len;
    let buf = dst.digits_mut();
    // high to low, so every source digit is read before it is overwritten
    for dst_i in (digits.min(len)..len).rev() {
        let src_i = dst_i - digits;
        let hi = buf[src_i];
        let lo = if src_i > 0 { buf[src_i - 1] } else { 0 };
        let pair = (hi as u32) << DIGIT_BITS | lo as u32;
        buf[dst_i] = ((pair << bits) >> DIGIT_BITS) as u8;
    }
    buf[..digits.min(len)].fill(0);
}

/// Drops zero digits from the most significant end. Idempotent.
pub fn normalize<S>(dst: &mut DigitBuf<S>)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    while dst.len > 0 && dst.digits()[dst.len - 1] == 0 {
        dst.len -= 1;
    }
}

#[cfg(test)]
fn scratch(len: usize) -> DigitBuf<Vec<u8>> {
    DigitBuf::new(vec![0u8; len])
}

#[cfg(test)]
fn loaded(v: u128) -> DigitBuf<Vec<u8>> {
    let mut buf = scratch(16);
    load_u128(&mut buf, v).unwrap();
    buf
}

#[cfg(test)]
fn value(buf: &[u8]) -> u128 {
    buf.iter().rev().fold(0, |acc, &d| acc << 8 | d as u128)
}

#[test]
fn test_load_u128() {
    assert!(loaded(0).is_empty());
    assert_eq!(loaded(0xdeadbeef).digits(), &[0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(loaded(u64::MAX as u128).len(), 8);
    assert_eq!(loaded(u128::MAX).len(), 16);

    let mut small = scratch(2);
    let err = load_u128(&mut small, 0x123456).unwrap_err();
    assert_eq!(err, ArithError::Capacity { required: 3, available: 2 });
    let err = copy(&mut small, &[0x56, 0x34, 0x12]).unwrap_err();
    assert_eq!(err, ArithError::Capacity { required: 3, available: 2 });
}

#[test]
fn test_bit_reads_past_end() {
    let a = loaded(0xf0);
    let bits: Vec<bool> = (0..8).map(|i| bit(a.digits(), i)).collect();
    assert_eq!(bits, vec![false, false, false, false, true, true, true, true]);
    assert!(!bit(a.digits(), 87));
    assert!(!bit(a.digits(), 8 * 256));
    assert_eq!(byte(a.digits(), 0), 0xf0);
    assert_eq!(byte(a.digits(), 9), 0);
}

#[test]
fn test_write_bit_faults_past_len() {
    let mut a = scratch(32);
    write_bit(&mut a, 42, true).unwrap();
    write_bit(&mut a, 41, true).unwrap();
    write_bit(&mut a, 42, false).unwrap();
    assert_eq!(value(a.digits()), 1 << 41);
    a.len = 5;
    assert!(write_bit(&mut a, 40, true).is_err());
    assert!(write_bit(&mut a, 39, true).is_ok());
}

#[test]
fn test_cmp_ignores_high_zeros() {
    let a = loaded(0x123);
    let c = loaded(0x9876543210);
    assert_eq!(cmp(a.digits(), a.digits()), Ordering::Equal);
    assert_eq!(cmp(a.digits(), c.digits()), Ordering::Less);
    assert_eq!(cmp(c.digits(), a.digits()), Ordering::Greater);
    assert_eq!(cmp(&[0x23, 0x01, 0, 0], a.digits()), Ordering::Equal);
    assert_eq!(cmp(a.digits(), &[0x23, 0x01, 0, 0]), Ordering::Equal);
    assert_eq!(cmp(&[], &[0, 0]), Ordering::Equal);
    assert_eq!(cmp(&[0x24, 0x01, 0], a.digits()), Ordering::Greater);
}

#[test]
fn test_bitwise() {
    let a = loaded(0x321);
    let b = loaded(0x23);
    let mut c = scratch(crate::capacity::for_and(a.len(), b.len()));
    and(&mut c, a.digits(), b.digits());
    assert_eq!(value(c.digits()), 0x21);

    let mut c = scratch(crate::capacity::for_or(a.len(), b.len()));
    or(&mut c, a.digits(), b.digits());
    assert_eq!(value(c.digits()), 0x323);

    let mut c = scratch(crate::capacity::for_xor(a.len(), b.len()));
    xor(&mut c, b.digits(), a.digits());
    assert_eq!(value(c.digits()), 0x302);
}

#[test]
fn test_bitwise_leaves_excess_capacity() {
    let mut c = DigitBuf::new(vec![0xEEu8; 4]);
    or(&mut c, &[0x01], &[0x10, 0x20]);
    assert_eq!(c.digits(), &[0x11, 0x20]);
    assert_eq!(c.into_inner().0, vec![0x11, 0x20, 0xEE, 0xEE]);
}

#[test]
fn test_add() {
    let cases: [(u128, u128, u128); 3] = [
        (0x123, 0x9876543210, 0x9876543333),
        (0x4, 0xFFFF, 0x10003),
        (0x4, 0xFFF0, 0xFFF4),
    ];
    for (x, y, sum) in cases {
        let a = loaded(x);
        let b = loaded(y);
        let mut c = scratch(crate::capacity::for_add(a.len(), b.len()));
        add(&mut c, a.digits(), b.digits()).unwrap();
        assert_eq!(value(c.digits()), sum, "{:x} + {:x}", x, y);
    }
}

#[test]
fn test_add_faults_without_carry_room() {
    let mut c = scratch(2);
    assert!(add(&mut c, &[0x04], &[0xF0, 0xFF]).is_ok());
    let err = add(&mut c, &[0x04], &[0xFF, 0xFF]).unwrap_err();
    assert_eq!(err, ArithError::Capacity { required: 3, available: 2 });
    let mut c = scratch(1);
    assert!(add(&mut c, &[0x04], &[0xFF, 0xFF]).is_err());
}

#[test]
fn test_sub() {
    let mut c = scratch(2);
    sub(&mut c, &[0xFF, 0xFF], &[0x04]).unwrap();
    assert_eq!(value(c.digits()), 0xFFFB);

    let a = loaded(0x9876543210);
    let b = loaded(0x123);
    let mut c = scratch(crate::capacity::for_sub(a.len(), b.len()));
    sub(&mut c, a.digits(), b.digits()).unwrap();
    assert_eq!(value(c.digits()), 0x98765430ED);

    let mut c = scratch(2);
    sub(&mut c, &[0xFE, 0x01], &[0xFF]).unwrap();
    assert_eq!(c.digits(), &[0xFF, 0x00]);
}

#[test]
fn test_sub_underflow() {
    let mut c = scratch(4);
    assert_eq!(sub(&mut c, &[0x11], &[0xEF, 0xBE, 0xAD, 0xDE]), Err(ArithError::Underflow));
    assert!(c.is_empty());
    assert_eq!(sub(&mut c, &[0x11, 0x00], &[0x12, 0x00]), Err(ArithError::Underflow));
    assert!(c.is_empty());
    assert_eq!(dec(&mut c, &[]), Err(ArithError::Underflow));
    // a longer subtrahend underflows even when its extra digits are zero
    assert_eq!(sub(&mut c, &[0x05], &[0x01, 0x00]), Err(ArithError::Underflow));
    assert!(c.is_empty());
}

#[test]
fn test_mul() {
    let cases: [(u128, u128, u128); 4] = [
        (0x10, 0x10, 0x100),
        (0x4, 0x1000, 0x4000),
        (0xFF, 0xFFFF, 0xFEFF01),
        (0x123, 0x9876543210, 0xAD4E81B4E830),
    ];
    for (x, y, product) in cases {
        let a = loaded(x);
        let b = loaded(y);
        let mut c = scratch(crate::capacity::for_mul(a.len(), b.len()));
        mul(&mut c, a.digits(), b.digits()).unwrap();
        assert_eq!(value(c.digits()), product, "{:x} * {:x}", x, y);
    }
}

#[test]
fn test_mul_needs_tight_bound() {
    let mut c = scratch(2);
    let err = mul(&mut c, &[0xFF], &[0xFF, 0xFF]).unwrap_err();
    assert_eq!(err, ArithError::Capacity { required: 3, available: 2 });
}

#[test]
fn test_divmod() {
    let cases: [(u128, u128, u128, u128); 4] = [
        (0x137, 0x42, 0x4, 0x2F),
        (0x42, 0x137, 0x0, 0x42),
        (0x5032, 0x2000, 0x2, 0x1032),
        (0xFFFF_FFFF_FFFF, 0xFF, 0x10101010101, 0x0),
    ];
    for (x, y, div, rem) in cases {
        let n = loaded(x);
        let d = loaded(y);
        let mut q = scratch(crate::capacity::for_div(n.len(), d.len()));
        let mut r = scratch(crate::capacity::for_mod(n.len(), d.len()));
        divmod(&mut q, &mut r, n.digits(), d.digits()).unwrap();
        assert_eq!(value(q.digits()), div, "{:x} / {:x}", x, y);
        assert_eq!(value(r.digits()), rem, "{:x} % {:x}", x, y);
    }
}

#[cfg(test)]
fn padded(v: u128, pad: usize) -> Vec<u8> {
    let mut digits = loaded(v).digits().to_vec();
    digits.resize(digits.len() + pad, 0);
    digits
}

#[test]
fn test_arithmetic_on_padded_operands() {
    let xs: [u128; 8] = [0, 1, 0xFF, 0x137, 0x5032, 0xFEDC_BA98, 0xFFFF_FFFF_FFFF, u64::MAX as u128];
    let ys: [u128; 7] = [1, 0x42, 0xFF, 0x2000, 0xFFFF, 0x1_0000_0001, u64::MAX as u128];
    for x in xs {
        for y in ys {
            for (pa, pb) in (0..=3).flat_map(|pa| (0..=3).map(move |pb| (pa, pb))) {
                let a = padded(x, pa);
                let b = padded(y, pb);

                let mut c = scratch(crate::capacity::for_add(a.len(), b.len()));
                add(&mut c, &a, &b).unwrap();
                assert_eq!(value(c.digits()), x + y, "{:x}+{} + {:x}+{}", x, pa, y, pb);

                let mut c = scratch(crate::capacity::for_sub(a.len(), b.len()));
                let expected = if b.len() > a.len() { None } else { x.checked_sub(y) };
                let got = sub(&mut c, &a, &b).map(|_| value(c.digits()));
                assert_eq!(got, expected.ok_or(ArithError::Underflow), "{:x}+{} - {:x}+{}", x, pa, y, pb);

                let mut c = scratch(crate::capacity::for_mul(a.len(), b.len()));
                mul(&mut c, &a, &b).unwrap();
                assert_eq!(value(c.digits()), x * y, "{:x}+{} * {:x}+{}", x, pa, y, pb);

                let mut q = scratch(crate::capacity::for_div(a.len(), b.len()));
                let mut r = scratch(crate::capacity::for_mod(a.len(), b.len()));
                divmod(&mut q, &mut r, &a, &b).unwrap();
                assert_eq!(value(q.digits()), x / y, "{:x}+{} / {:x}+{}", x, pa, y, pb);
                assert_eq!(value(r.digits()), x % y, "{:x}+{} % {:x}+{}", x, pa, y, pb);
            }
        }
    }
}

#[test]
fn test_divmod_top_bit_divisor() {
    // remainders of an 0xFF.. divisor overflow the divisor width when shifted
    let n = loaded(0xFEDC_BA98);
    let d = loaded(0xFFFF);
    let mut q = scratch(n.len());
    let mut r = scratch(d.len());
    divmod(&mut q, &mut r, n.digits(), d.digits()).unwrap();
    assert_eq!(value(q.digits()), 0xFEDC_BA98 / 0xFFFF);
    assert_eq!(value(r.digits()), 0xFEDC_BA98 % 0xFFFF);
}

#[test]
fn test_divmod_by_zero_terminates() {
    let n = loaded(0x1234);
    let mut q = scratch(n.len());
    let mut r = scratch(0);
    assert!(divmod(&mut q, &mut r, n.digits(), &[]).is_ok());
}

#[test]
fn test_divmod_faults_on_small_destinations() {
    let mut q = scratch(1);
    let mut r = scratch(1);
    assert!(divmod(&mut q, &mut r, &[0, 1], &[3]).is_err());
    let mut q = scratch(2);
    assert!(divmod(&mut q, &mut r, &[0, 1], &[3, 1]).is_err());
}

#[test]
fn test_shr() {
    let mut a = loaded(0x54321);
    shr(&mut a, 8);
    assert_eq!(value(a.digits()), 0x543);
    assert_eq!(a.len(), 2);
    shr(&mut a, 1);
    assert_eq!(value(a.digits()), 0x2A1);

    let mut a = loaded(0x54321);
    shr(&mut a, 17);
    assert_eq!(value(a.digits()), 0x2);

    let mut a = loaded(0x54321);
    shr(&mut a, 40);
    assert!(a.is_empty());
}

#[test]
fn test_shl() {
    let mut a = scratch(4);
    load_u128(&mut a, 0x54321).unwrap();
    a.len = 4;
    shl(&mut a, 8);
    assert_eq!(value(a.digits()), 0x5432100);
    shl(&mut a, 1);
    assert_eq!(value(a.digits()), 0xA864200);

    let mut a = loaded(0x54321);
    a.len = 5;
    shl(&mut a, 17);
    assert_eq!(value(a.digits()), 0xA86420000);
}

#[test]
fn test_shl_drops_high_bits() {
    let mut a = DigitBuf::new(vec![0x81u8, 0x80]);
    shl(&mut a, 1);
    assert_eq!(a.digits(), &[0x02, 0x01]);
    shl(&mut a, 24);
    assert_eq!(a.digits(), &[0x00, 0x00]);
}

#[test]
fn test_normalize_is_idempotent() {
    let mut a = DigitBuf::new(vec![0x01u8, 0x00, 0x02, 0x00, 0x00]);
    normalize(&mut a);
    assert_eq!(a.len(), 3);
    normalize(&mut a);
    assert_eq!(a.len(), 3);

    let mut z = scratch(3);
    normalize(&mut z);
    assert_eq!(z.len(), 0);
}
