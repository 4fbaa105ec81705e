//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that the codec deals with.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with associated constants for all
//! well-defined values. Since we cannot restrict that integer to only the
//! well-defined values, the full set of possible values is allowed.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` convert from the mnemonics to the
//! values and back.

use core::fmt;

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;

//------------ FromStrError --------------------------------------------------

/// A string could not be converted into an IANA value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError;

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown mnemonic")
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================
