//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::{NameId, NameInterner, WritePositions};
use super::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// Questions are generic over the domain name type. Inside a message, the
/// name is a [`NameId`] handle into the message’s [`NameInterner`].
/// [`map_name`][Self::map_name] converts between name types, e.g., to
/// resolve handles into their presentation format.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question<N = NameId> {
    /// The domain name of the question.
    qname: N,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl<N> Question<N> {
    /// Creates a new question from its three componets.
    pub fn new(qname: N, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: N, qtype: Rtype) -> Self {
        Question {
            qname,
            qtype,
            qclass: Class::IN,
        }
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> N {
        self.qname
    }

    /// Converts the name of the question into a different type.
    pub fn map_name<NN, F: FnOnce(N) -> NN>(self, f: F) -> Question<NN> {
        Question {
            qname: f(self.qname),
            qtype: self.qtype,
            qclass: self.qclass,
        }
    }

    /// Converts the name of the question with a fallible conversion.
    pub fn try_map_name<NN, E, F: FnOnce(N) -> Result<NN, E>>(
        self,
        f: F,
    ) -> Result<Question<NN>, E> {
        Ok(Question {
            qname: f(self.qname)?,
            qtype: self.qtype,
            qclass: self.qclass,
        })
    }
}

/// # Field Access
///
impl<N> Question<N> {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &N {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question<NameId> {
    /// Takes a question from the beginning of `cursor`.
    ///
    /// The name is added to `names`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
        names: &mut NameInterner,
    ) -> Result<Self, ParseError> {
        Ok(Question::new(
            names.import(cursor)?,
            Rtype::parse(cursor)?,
            Class::parse(cursor)?,
        ))
    }

    /// Appends the question to `writer`.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
        names: &NameInterner,
        positions: &mut WritePositions,
    ) -> Result<(), ComposeError> {
        names.export(writer, positions, self.qname)?;
        self.qtype.compose(writer)?;
        self.qclass.compose(writer)
    }
}

//--- From

impl<N> From<(N, Rtype, Class)> for Question<N> {
    fn from((name, rtype, class): (N, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl<N> From<(N, Rtype)> for Question<N> {
    fn from((name, rtype): (N, Rtype)) -> Self {
        Question::new_in(name, rtype)
    }
}

//--- Display and Debug

impl<N: fmt::Display> fmt::Display for Question<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qtype, self.qclass)
    }
}

impl<N: fmt::Debug> fmt::Debug for Question<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Question")
            .field("qname", &self.qname)
            .field("qtype", &self.qtype)
            .field("qclass", &self.qclass)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_compose() {
        let buf = b"\x06google\x03com\x00\x00\x01\x00\x01";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        let question = Question::parse(&mut cursor, &mut names).unwrap();
        assert_eq!(names.name(*question.qname()), "google.com");
        assert_eq!(question.qtype(), Rtype::A);
        assert_eq!(question.qclass(), Class::IN);

        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        question.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(writer.as_slice(), &buf[..]);
    }

    #[test]
    fn short_question() {
        let buf = b"\x06google\x03com\x00\x00\x01\x00";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        assert!(Question::parse(&mut cursor, &mut names).is_err());
    }

    #[test]
    fn display() {
        let question = Question::new_in("example.com", Rtype::MX);
        assert_eq!(question.to_string(), "example.com\tMX\tIN");
        let question = Question::from(("example.com", Rtype::AAAA))
            .map_name(str::len);
        assert_eq!(*question.qname(), 11);
    }
}
