//! # mpint
//!
//! Multiple-precision signed integers: digit storage, signed addition and
//! subtraction, diminished-radix modular reduction, and conversion to and
//! from text in any radix from 2 through 64.
//!
//! ```toml
//! [dependencies]
//! mpint = "0.1"
//! ```
//!
//! # Representation
//!
//! A [`BigInt`] is a sign and a little-endian sequence of digits in base
//! [`RADIX`] `= 2^DIGIT_BITS`. The digit width is fixed when the crate is
//! built: 60-bit digits on common 64-bit targets, 28-bit digits elsewhere.
//! Each digit sits in a storage word a few bits wider than the digit, so
//! carries and borrows never overflow.
//!
//! Every method that may allocate returns a [`Result`], and allocation
//! failure is reported as an error instead of aborting the process. The
//! standard traits that cannot fail (`Clone`, `From` of the primitive
//! integers, `Neg` on a reference) allocate the ordinary way.
//!
//! # Arithmetic
//!
//! ```
//! use mpint::BigInt;
//!
//! # fn main() -> mpint::Result<()> {
//! let a = BigInt::from(123);
//! let b = BigInt::from(-456);
//!
//! // The sign of the larger magnitude wins.
//! let sum = a.add(&b)?;
//! assert_eq!(sum, BigInt::from(-333));
//!
//! let mut x = mpint::from_str("FFFFFFFFFFFFFFFFFFFFFFFF", 16)?;
//! x.mul_digit(3)?;
//! x.add_digit(1)?;
//! assert_eq!(x.to_radix(16)?, "2FFFFFFFFFFFFFFFFFFFFFFFE");
//! # Ok(())
//! # }
//! ```
//!
//! # Diminished-radix reduction
//!
//! Moduli of the form `RADIX^m - k` with a single-digit `k` reduce without
//! division. [`BigInt::dr_setup`] finds `k` and [`BigInt::dr_reduce`] does
//! the reduction in place.
//!
//! ```
//! use mpint::{BigInt, MASK};
//!
//! # fn main() -> mpint::Result<()> {
//! // n = RADIX^2 - 5
//! let mut n = BigInt::from(MASK);
//! n.mul_digit(MASK)?;
//! n.add_digit(MASK)?;
//! n.add_digit(MASK)?;
//! n.sub_digit(4)?;
//! assert!(n.is_dr_modulus());
//! let k = n.dr_setup();
//! assert_eq!(k, 5);
//!
//! let mut x = n.add(&BigInt::from(7))?;
//! x.dr_reduce(&n, k)?;
//! assert_eq!(x, BigInt::from(7));
//! # Ok(())
//! # }
//! ```
//!
//! # Text
//!
//! Parsing reads from a character source and stops in front of the first
//! byte that is not a digit of the radix. Formatting builds the whole text
//! in a scratch buffer and writes it in one go. `Display` and the `{:x}`,
//! `{:X}`, `{:o}` and `{:b}` formats honor width, fill and sign flags like
//! the primitive integers do.
//!
//! ```
//! use mpint::BigInt;
//!
//! # fn main() -> mpint::Result<()> {
//! let x = mpint::from_str("-1F", 16)?;
//! assert_eq!(x, BigInt::from(-31));
//! assert_eq!(x.radix_size(2)?, 6);
//! assert_eq!(x.to_radix(2)?, "-11111");
//! assert_eq!(x.to_string(), "-31");
//! assert_eq!(format!("{:#06x}", x), "-0x01f");
//! # Ok(())
//! # }
//! ```
//!
//! Status codes of failed operations have fixed numeric values and stable
//! descriptions:
//!
//! ```
//! use mpint::{error_to_string, Status};
//!
//! let err = mpint::from_str("12", 99).unwrap_err();
//! assert_eq!(err.status(), Status::Val);
//! assert_eq!(error_to_string(err.status().code()), "Value out of range");
//! ```
//!
//! # No-std support
//!
//! Disable the default `std` feature and enable `alloc` to use mpint
//! without the rest of the Rust standard library. Only in-memory character
//! sources and sinks are available in that mode.
//!
//! ```toml
//! [dependencies]
//! mpint = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/mpint/0.1.0")]
// Ignored clippy lints
#![allow(
    // things are often more readable this way
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::manual_range_contains,
    clippy::needless_range_loop,
    clippy::should_implement_trait,
)]
// Ignored clippy_pedantic lints
#![allow(
    // digit arithmetic narrows on purpose after masking
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // noisy
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

extern crate serde_core as serde;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::digit::{Digit, Word, DIGIT_BITS, MASK, RADIX};
#[doc(inline)]
pub use crate::error::{error_to_string, Error, Result, Status};
#[doc(inline)]
pub use crate::radix::{from_read, from_slice, from_str, to_string, to_vec, to_writer};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::read::IoRead;
#[doc(inline)]
pub use crate::read::{Read, SliceRead, StrRead};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::write::IoWrite;
#[doc(inline)]
pub use crate::write::{VecWriter, Write, WriterFormatter};

// We only use our own error type; no need for From conversions provided by
// the standard library's try! macro. This reduces lines of LLVM IR by 4%.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

mod arith;
mod bigint;
mod de;
pub mod digit;
pub mod error;
mod features_check;
mod io;
mod math;
mod radix;
pub mod read;
mod reduce;
mod ser;
pub mod write;
