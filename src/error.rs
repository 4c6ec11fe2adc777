//! When big integer arithmetic or text conversion goes wrong.

use crate::io;
use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur while growing,
/// computing with, reducing, parsing or formatting a [`BigInt`].
///
/// [`BigInt`]: crate::BigInt
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Every digit-level operation returns `Result<(), Error>`, so keeping it
    /// one pointer wide matters.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `mpint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Memory` - digit storage or a scratch buffer could not be
    ///   allocated
    /// - `Category::Value` - an argument was outside the range an operation
    ///   accepts
    /// - `Category::Io` - failure to read or write bytes on a character
    ///   source or sink
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::OutOfMemory => Category::Memory,
            ErrorCode::InvalidRadix(_)
            | ErrorCode::DigitOutOfRange
            | ErrorCode::DivisionByZero
            | ErrorCode::InvalidModulus
            | ErrorCode::ReductionOutOfRange
            | ErrorCode::TrailingCharacters => Category::Value,
            ErrorCode::Io(_) => Category::Io,
        }
    }

    /// The closed status code this error reports as.
    ///
    /// Allocation failures are [`Status::Mem`]. Everything else, including a
    /// sink that fails partway through a write, is [`Status::Val`].
    pub fn status(&self) -> Status {
        match self.classify() {
            Category::Memory => Status::Mem,
            Category::Value | Category::Io => Status::Val,
        }
    }

    /// Returns true if this error was caused by an allocation failure.
    pub fn is_memory(&self) -> bool {
        self.classify() == Category::Memory
    }

    /// Returns true if this error was caused by an argument out of range.
    pub fn is_value(&self) -> bool {
        self.classify() == Category::Value
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on a character source or sink.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }
}

/// Categorizes the cause of a `mpint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// Digit storage or a scratch buffer could not be allocated.
    Memory,

    /// An argument was outside the range the operation accepts.
    Value,

    /// A character source or sink failed.
    Io,
}

/// The closed set of status codes an operation can finish with.
///
/// The numeric values are stable and are what [`error_to_string`] accepts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    /// The operation succeeded.
    Okay,
    /// Out of heap.
    Mem,
    /// Value out of range.
    Val,
}

impl Status {
    /// Numeric form of the status.
    pub const fn code(self) -> i32 {
        match self {
            Status::Okay => 0,
            Status::Mem => -2,
            Status::Val => -3,
        }
    }

    /// Status for a numeric code, if the code is one of the known ones.
    pub const fn from_code(code: i32) -> Option<Status> {
        match code {
            0 => Some(Status::Okay),
            -2 => Some(Status::Mem),
            -3 => Some(Status::Val),
            _ => None,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(error_to_string(self.code()))
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Okay,
            Err(err) => err.status(),
        }
    }
}

static MESSAGES: [(Status, &str); 3] = [
    (Status::Okay, "Successful"),
    (Status::Mem, "Out of heap"),
    (Status::Val, "Value out of range"),
];

/// Human-readable text for a numeric status code.
///
/// ```
/// use mpint::{error_to_string, Status};
///
/// assert_eq!(error_to_string(Status::Okay.code()), "Successful");
/// assert_eq!(error_to_string(9999), "Invalid error code");
/// ```
pub fn error_to_string(code: i32) -> &'static str {
    for &(status, msg) in &MESSAGES {
        if status.code() == code {
            return msg;
        }
    }
    "Invalid error code"
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `mpint::Error` into an `io::Error`.
    ///
    /// Source and sink failures are unwrapped back into the original IO
    /// error. Allocation failures become `OutOfMemory` IO errors and argument
    /// errors become `InvalidInput` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Memory => io::Error::new(io::ErrorKind::OutOfMemory, j),
                Category::Value => io::Error::new(io::ErrorKind::InvalidInput, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when operating on
/// a `BigInt`.
pub enum ErrorCode {
    /// Digit storage or a scratch buffer could not be allocated.
    OutOfMemory,

    /// Radix outside of `2..=64`.
    InvalidRadix(u32),

    /// A single-digit operand was not below `2^DIGIT_BITS`.
    DigitOutOfRange,

    /// Division by a zero digit.
    DivisionByZero,

    /// The modulus given to a reduction was zero or negative.
    InvalidModulus,

    /// The value given to a reduction was negative or wider than twice the
    /// modulus.
    ReductionOutOfRange,

    /// Text has characters after the last digit.
    TrailingCharacters,

    /// Some IO error occurred while reading or writing text.
    Io(io::Error),
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::OutOfMemory => f.write_str("OutOfMemory"),
            ErrorCode::InvalidRadix(radix) => f.debug_tuple("InvalidRadix").field(radix).finish(),
            ErrorCode::DigitOutOfRange => f.write_str("DigitOutOfRange"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::InvalidModulus => f.write_str("InvalidModulus"),
            ErrorCode::ReductionOutOfRange => f.write_str("ReductionOutOfRange"),
            ErrorCode::TrailingCharacters => f.write_str("TrailingCharacters"),
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::InvalidRadix(l0), ErrorCode::InvalidRadix(r0)) => l0 == r0,
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }

    #[cold]
    pub(crate) fn out_of_memory() -> Self {
        Error::new(ErrorCode::OutOfMemory)
    }

    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error::new(ErrorCode::Io(error))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::OutOfMemory => f.write_str("out of memory"),
            ErrorCode::InvalidRadix(radix) => {
                write!(f, "invalid radix {}, expected 2 through 64", radix)
            }
            ErrorCode::DigitOutOfRange => f.write_str("digit out of range"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::InvalidModulus => f.write_str("modulus must be positive"),
            ErrorCode::ReductionOutOfRange => f.write_str("value out of range for reduction"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::Io(err) => Display::fmt(err, f),
        }
    }
}

impl serde::de::StdError for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, status: {:?})", self.err.code, self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_test() {
        assert_eq!(Error::out_of_memory().status(), Status::Mem);
        assert_eq!(Error::new(ErrorCode::InvalidRadix(1)).status(), Status::Val);
        assert_eq!(Error::new(ErrorCode::TrailingCharacters).status(), Status::Val);
        assert!(Error::new(ErrorCode::DivisionByZero).is_value());
        assert!(Error::out_of_memory().is_memory());
    }

    #[test]
    fn display_test() {
        let err = Error::new(ErrorCode::InvalidRadix(65));
        assert_eq!(err.to_string(), "invalid radix 65, expected 2 through 64");
        assert_eq!(
            format!("{:?}", err),
            "Error(InvalidRadix(65), status: Val)"
        );
    }

    #[test]
    fn status_code_test() {
        for status in [Status::Okay, Status::Mem, Status::Val] {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code(1), None);
        assert_eq!(Status::Mem.to_string(), "Out of heap");
    }
}
