/// Errors from checked arithmetic and integer conversions
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<u128>, Option<u128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<u128>),
}

/// Same as the `checked_add` functions but returns an error
///
/// ```
/// # use sepia_common::math::SafeAdd;
/// assert_eq!(2_u64.safe_add(3).unwrap(), 5);
/// assert!(u64::MAX.safe_add(1).is_err());
/// ```
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

impl SafeAdd for u64 {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError> {
        self.checked_add(rhs)
            .ok_or_else(|| MathError::AddFailed(self.try_into().ok(), rhs.try_into().ok()))
    }
}

impl SafeAdd for usize {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError> {
        self.checked_add(rhs)
            .ok_or_else(|| MathError::AddFailed(self.try_into().ok(), rhs.try_into().ok()))
    }
}

pub trait ToU64: Sized + TryInto<u64> + TryInto<u128> + Copy {
    fn u64(self) -> Result<u64, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU64 for usize {}

pub trait ToUsize: Sized + TryInto<usize> + TryInto<u128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u64 {}
