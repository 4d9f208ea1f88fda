//! The arity bound every generated macro is sized against

use std::{
    fmt::{self, Display},
    num::{NonZeroUsize, ParseIntError},
    ops::RangeInclusive,
    str::FromStr,
};

use thiserror::Error;

/// Errors produced while reading an arity bound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArityError {
    /// A bound of zero would leave `PP_UTILS_NARGS` without a ladder and the
    /// dispatch table with only its empty entry.
    #[error("the arity bound must be at least 1")]
    Zero,
    /// The bound exceeds [`ArityBound::MAX`]
    #[error("the arity bound must be at most {max}, got {0}", max = ArityBound::MAX)]
    TooLarge(usize),
    /// The text was not a non-negative decimal integer
    #[error("`{0}` is not a valid arity bound: {1}")]
    Malformed(String, ParseIntError),
}

/// The largest number of variadic arguments the generated macros accept
///
/// Always between 1 and [`ArityBound::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArityBound(NonZeroUsize);
impl ArityBound {
    /// The largest accepted bound
    ///
    /// The dispatch table grows quadratically with the bound: at this size the
    /// header already holds over half a million `FUNC(NAME, _i)` invocations.
    pub const MAX: usize = 1024;

    /// Create a new bound
    ///
    /// # Errors
    /// Returns [`ArityError::Zero`] if `value` is zero and
    /// [`ArityError::TooLarge`] if it is above [`ArityBound::MAX`].
    pub fn new(value: usize) -> Result<Self, ArityError> {
        if value > Self::MAX {
            return Err(ArityError::TooLarge(value));
        }
        match NonZeroUsize::new(value) {
            Some(value) => Ok(Self(value)),
            None => Err(ArityError::Zero),
        }
    }

    /// The bound as a plain integer
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Every arity the dispatch table covers, `0..=N`
    #[must_use]
    pub const fn arities(self) -> RangeInclusive<usize> {
        0..=self.get()
    }
}
impl FromStr for ArityBound {
    type Err = ArityError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = text
            .trim()
            .parse::<usize>()
            .map_err(|err| ArityError::Malformed(text.to_string(), err))?;
        Self::new(value)
    }
}
impl Display for ArityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
