//! Bit-field primitives shared by every tile accessor
//!
//! Fields are addressed by start bit `s` and width `n`. Writes that do not
//! fit their field are rejected instead of bleeding into the neighbours.

use num_traits::{PrimInt, WrappingAdd};

fn field_mask<T: PrimInt>(n: u8) -> T {
    let width = T::zero().count_zeros() as usize;
    if usize::from(n) >= width {
        !T::zero()
    } else {
        (T::one() << usize::from(n)) - T::one()
    }
}

/// Read `n` bits of `x` starting at bit `s`
#[inline]
pub fn gb<T: PrimInt>(x: T, s: u8, n: u8) -> T {
    (x >> usize::from(s)) & field_mask(n)
}

/// Replace `n` bits of `x` starting at bit `s` with `d`
///
/// # Panics
///
/// Panics when `d` needs more than `n` bits
#[inline]
pub fn sb<T: PrimInt>(x: &mut T, s: u8, n: u8, d: T) {
    let mask: T = field_mask(n);
    assert!(
        d & !mask == T::zero(),
        "value does not fit a {n}-bit field at bit {s}"
    );
    let shifted = mask << usize::from(s);
    *x = (*x & !shifted) | (d << usize::from(s));
}

/// Add `i` to the `n`-bit field of `x` at bit `s`, wrapping inside the field
#[inline]
pub fn ab<T: PrimInt + WrappingAdd>(x: &mut T, s: u8, n: u8, i: T) {
    let shifted = field_mask::<T>(n) << usize::from(s);
    let sum = x.wrapping_add(&(i << usize::from(s)));
    *x = (*x & !shifted) | (sum & shifted);
}

/// Whether bit `y` of `x` is set
#[inline]
pub fn has_bit<T: PrimInt>(x: T, y: u8) -> bool {
    gb(x, y, 1) != T::zero()
}

/// Set bit `y` of `x`
#[inline]
pub fn set_bit<T: PrimInt>(x: &mut T, y: u8) {
    *x = *x | (T::one() << usize::from(y));
}

/// Clear bit `y` of `x`
#[inline]
pub fn clr_bit<T: PrimInt>(x: &mut T, y: u8) {
    *x = *x & !(T::one() << usize::from(y));
}

/// Set or clear bit `y` of `x`
#[inline]
pub fn assign_bit<T: PrimInt>(x: &mut T, y: u8, value: bool) {
    if value {
        set_bit(x, y);
    } else {
        clr_bit(x, y);
    }
}
