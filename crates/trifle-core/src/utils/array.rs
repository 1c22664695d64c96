//! Numeric slice operations.

use std::ops::Add;

/// Sum every value in the slice, returning zero for an empty slice
pub fn sum_array<T>(values: &[T]) -> T
where
    T: Copy + Default + Add<Output = T>,
{
    values.iter().fold(T::default(), |acc, &value| acc + value)
}

/// Equality used for deduplication.
///
/// Matches ordinary `==` except that NaN is equal to NaN, so floating point
/// sequences collapse repeated NaNs like any other repeated value.
pub trait SameValueZero {
    fn same_value_zero(&self, other: &Self) -> bool;
}

macro_rules! impl_same_value_zero_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValueZero for $ty {
                fn same_value_zero(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_same_value_zero_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValueZero for $ty {
                fn same_value_zero(&self, other: &Self) -> bool {
                    // -0.0 == 0.0 already holds under IEEE comparison
                    self == other || (self.is_nan() && other.is_nan())
                }
            }
        )*
    };
}

impl_same_value_zero_eq!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_same_value_zero_float!(f32, f64);

/// Keep the first occurrence of every distinct value, preserving order.
///
/// Each value is checked against the values kept so far, so this is
/// quadratic in the number of distinct values.
pub fn remove_duplicates<T>(values: &[T]) -> Vec<T>
where
    T: Copy + SameValueZero,
{
    let mut result: Vec<T> = Vec::new();
    for value in values {
        if !result.iter().any(|kept| kept.same_value_zero(value)) {
            result.push(*value);
        }
    }
    result
}
