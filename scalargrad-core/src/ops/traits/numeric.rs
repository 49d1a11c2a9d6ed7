use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the scalar types a [`Graph`](crate::graph::Graph) can hold.
///
/// Strictly reserved to floating point types (`f32`, `f64`): every primitive
/// relies on `Float` for `powf`, `tanh` and `exp`, and numeric edge cases are
/// expected to surface as IEEE infinities/NaNs.
pub trait ScalarNumeric:
    Float // Includes Num + Copy + NumCast + etc.
    + NumAssignOps
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
}

impl ScalarNumeric for f32 {}
impl ScalarNumeric for f64 {}

/// Converts an `f64` constant (learning rates, init bounds, ...) into `T`.
pub(crate) fn cast<T: ScalarNumeric>(value: f64) -> Result<T, crate::ScalarGradError> {
    T::from(value).ok_or(crate::ScalarGradError::NumericCast { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: ScalarNumeric>(value: T) -> T {
        value * T::one()
    }

    #[test]
    fn test_f32_impl_scalar_numeric() {
        assert_eq!(process_numeric(1.5f32), 1.5);
    }

    #[test]
    fn test_f64_impl_scalar_numeric() {
        assert_eq!(process_numeric(-2.0f64), -2.0);
    }

    #[test]
    fn test_cast_constant() {
        let v: f32 = cast(0.25).unwrap();
        assert_eq!(v, 0.25f32);
    }
}
