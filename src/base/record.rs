//! Resource Records.
//!
//! This module defines [`Record`], a complete resource record, and
//! [`Section`], the three message sections records can appear in.

use super::iana::{Class, Rtype};
use super::message::MessageError;
use super::name::{NameId, NameInterner, WritePositions};
use super::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use crate::rdata::RecordData;
use core::fmt;
use serde_json::{json, Value};
use tracing::trace;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The domain name is called the *owner* of the record.
///
/// The record type describes the kind of data the record holds, such as IP
/// addresses. The class describes which sort of network the information is
/// for. In practice, the only relevant class is IN, the Internet.
///
/// The payload of a resource record is its data. Its purpose, meaning, and
/// format is determined by the record type. Here, the record type is
/// implied by the variant of the [`RecordData`].
///
/// There is one more piece of data: the TTL or time to live. This value
/// says how long a record remains valid before it should be refreshed from
/// its original source.
///
/// Because a record’s owner is a domain name, the `Record` type is
/// generic over the domain name type. Inside a message, this is a
/// [`NameId`] handle.
///
/// A record parsed from a message also remembers the record data length
/// announced in the message. It is recalculated whenever the record is
/// composed and is not considered when comparing records.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<N = NameId> {
    /// The owner of the record.
    owner: N,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: u32,

    /// The record data length as announced in a parsed message.
    rdlen: Option<u16>,

    /// The record data. It also provides the record type.
    data: RecordData<N>,
}

/// # Creation and Element Access
///
impl<N> Record<N> {
    /// Creates a new record from its parts.
    pub fn new(
        owner: N,
        class: Class,
        ttl: u32,
        data: RecordData<N>,
    ) -> Self {
        Record {
            owner,
            class,
            ttl,
            rdlen: None,
            data,
        }
    }

    /// Returns a reference to the owner domain name.
    ///
    /// The owner of a record is the domain name that specifies the node in
    /// the DNS tree this record belongs to.
    pub fn owner(&self) -> &N {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Sets the class of the record.
    pub fn set_class(&mut self, class: Class) {
        self.class = class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the record’s time-to-live.
    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl
    }

    /// Returns the record data length announced in a parsed message.
    ///
    /// Returns `None` if the record wasn’t parsed from a message.
    pub fn rdlen(&self) -> Option<u16> {
        self.rdlen
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData<N> {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData<N> {
        self.data
    }

    /// Converts all domain names of the record into a different type.
    pub fn map_names<NN, F: FnMut(N) -> NN>(self, mut f: F) -> Record<NN> {
        Record {
            owner: f(self.owner),
            class: self.class,
            ttl: self.ttl,
            rdlen: self.rdlen,
            data: self.data.map_names(f),
        }
    }

    /// Converts all domain names of the record with a fallible conversion.
    pub fn try_map_names<NN, E, F: FnMut(N) -> Result<NN, E>>(
        self,
        mut f: F,
    ) -> Result<Record<NN>, E> {
        Ok(Record {
            owner: f(self.owner)?,
            class: self.class,
            ttl: self.ttl,
            rdlen: self.rdlen,
            data: self.data.try_map_names(f)?,
        })
    }
}

/// # Parsing and Composing
///
impl Record<NameId> {
    /// Takes a record from the beginning of `cursor`.
    ///
    /// All names are added to `names`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
        names: &mut NameInterner,
    ) -> Result<Self, ParseError> {
        let owner = names.import(cursor)?;
        let rtype = Rtype::parse(cursor)?;
        let class = Class::parse(cursor)?;
        let ttl = cursor.next_u32()?;
        let rdlen = cursor.next_u16()?;
        let data = RecordData::parse(rtype, rdlen, cursor, names)?;
        Ok(Record {
            owner,
            class,
            ttl,
            rdlen: Some(rdlen),
            data,
        })
    }

    /// Appends the record to `writer`.
    ///
    /// The record data length is written as zero first and patched once
    /// the record data has been written.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
        names: &NameInterner,
        positions: &mut WritePositions,
    ) -> Result<(), ComposeError> {
        names.export(writer, positions, self.owner)?;
        self.rtype().compose(writer)?;
        self.class.compose(writer)?;
        writer.write_u32(self.ttl)?;
        let len_at = writer.current_byte();
        writer.write_u16(0)?;
        self.data.compose(writer, names, positions)?;
        let len = u16::try_from(writer.current_byte() - len_at - 2)
            .map_err(|_| ComposeError::form_error("long record data"))?;
        trace!(rtype = %self.rtype(), len, "composed record");
        writer.write_at(16, len, len_at)?;
        Ok(())
    }
}

impl<N: fmt::Display> Record<N> {
    /// Returns the record as a generic tree.
    pub fn render(&self) -> Value {
        json!({
            "Label": self.owner.to_string(),
            "Type": self.rtype().to_int(),
            "Class": self.class.to_int(),
            "TTL": self.ttl,
            "Length": self.rdlen,
            "Record": self.data.render(),
        })
    }
}

//--- From

impl<N> From<(N, Class, u32, RecordData<N>)> for Record<N> {
    fn from(
        (owner, class, ttl, data): (N, Class, u32, RecordData<N>),
    ) -> Self {
        Self::new(owner, class, ttl, data)
    }
}

//--- PartialEq and Eq

impl<N: PartialEq> PartialEq for Record<N> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.class == other.class
            && self.ttl == other.ttl
            && self.data == other.data
    }
}

impl<N: Eq> Eq for Record<N> {}

//--- Display

impl<N: fmt::Display> fmt::Display for Record<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ Section -------------------------------------------------------

/// A message section containing resource records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// The answer section.
    Answer,

    /// The authority section.
    Authority,

    /// The additional section.
    Additional,
}

impl Section {
    /// All record sections in the order they appear in a message.
    pub const ALL: [Section; 3] =
        [Section::Answer, Section::Authority, Section::Additional];

    /// Returns the section for its index in [`ALL`][Self::ALL].
    pub fn from_int(index: usize) -> Result<Self, MessageError> {
        Self::ALL.get(index).copied().ok_or(MessageError::IndexOutOfRange {
            index,
            len: Self::ALL.len(),
        })
    }

    /// Returns the index of the section in [`ALL`][Self::ALL].
    #[must_use]
    pub fn to_int(self) -> usize {
        match self {
            Section::Answer => 0,
            Section::Authority => 1,
            Section::Additional => 2,
        }
    }

    /// Returns the name used for the section in rendered messages.
    #[must_use]
    pub fn render_name(self) -> &'static str {
        match self {
            Section::Answer => "Answers",
            Section::Authority => "Authorities",
            Section::Additional => "Additional",
        }
    }
}

//--- Display

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::{Mx, A};

    #[test]
    fn parse_compose() {
        let buf = b"\x06google\x03com\x00\x00\x01\x00\x01\
                    \x00\x00\x01\x25\x00\x04\xd8\x3a\xd3\x8e";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        let record = Record::parse(&mut cursor, &mut names).unwrap();
        assert_eq!(names.name(*record.owner()), "google.com");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 0x125);
        assert_eq!(record.rdlen(), Some(4));
        assert_eq!(
            record.data(),
            &RecordData::A(A::from_octets(216, 58, 211, 142))
        );

        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        record.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(writer.as_slice(), &buf[..]);
    }

    #[test]
    fn compose_patches_length() {
        let mut names = NameInterner::new();
        let record = Record::new(
            "example.com",
            Class::IN,
            3600,
            Mx::new(10, "mail.example.com").into(),
        )
        .try_map_names(|name| names.segment_for(name))
        .unwrap();
        assert_eq!(record.rdlen(), None);

        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        record.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(
            writer.as_slice(),
            b"\x07example\x03com\x00\x00\x0f\x00\x01\x00\x00\x0e\x10\
              \x00\x09\x00\x0a\x04mail\xc0\x00"
        );
    }

    #[test]
    fn compose_fails_when_full() {
        let names = NameInterner::new();
        let record = Record::new(
            NameId::ROOT,
            Class::IN,
            0,
            A::from_octets(1, 2, 3, 4).into(),
        );
        let mut writer = BitWriter::new(14);
        let mut positions = WritePositions::new();
        assert!(record.compose(&mut writer, &names, &mut positions).is_err());
    }

    #[test]
    fn equality_ignores_rdlen() {
        let buf = b"\x00\x00\x01\x00\x01\x00\x00\x00\x00\x00\x04\
                    \x01\x02\x03\x04";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        let parsed = Record::parse(&mut cursor, &mut names).unwrap();
        let built = Record::new(
            NameId::ROOT,
            Class::IN,
            0,
            A::from_octets(1, 2, 3, 4).into(),
        );
        assert_eq!(parsed, built);
    }

    #[test]
    fn render() {
        let record: Record<&str> = Record::new(
            "google.com",
            Class::IN,
            0x125,
            A::from_octets(216, 58, 211, 142).into(),
        );
        assert_eq!(
            record.render(),
            json!({
                "Label": "google.com",
                "Type": 1,
                "Class": 1,
                "TTL": 0x125,
                "Length": null,
                "Record": { "IP": "216.58.211.142" },
            })
        );
        assert_eq!(
            record.to_string(),
            "google.com\t293\tIN\tA\t216.58.211.142"
        );
    }

    #[test]
    fn sections() {
        assert_eq!(Section::from_int(1).unwrap(), Section::Authority);
        assert!(matches!(
            Section::from_int(3),
            Err(MessageError::IndexOutOfRange { index: 3, len: 3 })
        ));
        for section in Section::ALL {
            assert_eq!(Section::from_int(section.to_int()).unwrap(), section);
        }
    }
}
