//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. In their wire-format representation labels are
//! prefixed with an octet containing the number of octets in the label and
//! the name ends with the empty root label.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored earlier in the message. Names that share a suffix
//! therefore are best kept as a shared structure as well. This is what the
//! [`NameInterner`] does: it keeps each distinct name exactly once as a
//! segment consisting of its first label and a reference to the segment of
//! the remaining name. Names are referred to through [`NameId`] handles
//! that are only meaningful for the interner that issued them.
//!
//! When writing a message, the [`WritePositions`] of a single export
//! remember where each segment was written so that later occurrences can be
//! replaced by a compression pointer.

pub use self::interner::{NameId, NameInterner, WritePositions};
pub use self::label::{Label, LabelType, NameError};

mod interner;
mod label;
