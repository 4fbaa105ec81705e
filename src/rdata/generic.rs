//! Record data for unknown record types.

use super::interprets;
use crate::base::iana::Rtype;
use crate::base::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::fmt;
use serde_json::{json, Value};

//------------ UnknownRecordData ---------------------------------------------

/// A type for parsing any type of record data.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data as an octets sequence. It is used for all record types the codec
/// doesn’t interpret. When composed, the data is written back as it is.
///
/// The text representation is the generic format defined in [RFC 3597].
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates generic record data from a bytes value contain the data.
    ///
    /// Fails if the data is longer than 65535 octets or if `rtype` is one
    /// of the record types with their own record data type. Such data
    /// would be parsed as that type when reading the message back.
    pub fn from_octets(
        rtype: Rtype,
        data: Vec<u8>,
    ) -> Result<Self, UnknownRecordDataError> {
        if interprets(rtype) {
            return Err(UnknownRecordDataError::KnownType(rtype));
        }
        if data.len() > usize::from(u16::MAX) {
            return Err(UnknownRecordDataError::LongData);
        }
        Ok(UnknownRecordData { rtype, data })
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Converts the value into the record data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Takes `rdlen` octets of record data from the beginning of `cursor`.
    pub fn parse<Octs: AsRef<[u8]>>(
        rtype: Rtype,
        cursor: &mut BitCursor<Octs>,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        let mut data = vec![0; usize::from(rdlen)];
        cursor.next_buf(&mut data)?;
        Ok(UnknownRecordData { rtype, data })
    }

    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        writer.write_slice(&self.data).map_err(Into::into)
    }

    /// Returns the record data as a generic tree.
    pub fn render(&self) -> Value {
        json!({ "Data": self.to_string() })
    }
}

//--- AsRef

impl AsRef<[u8]> for UnknownRecordData {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for ch in &self.data {
            write!(f, " {:02x}", *ch)?
        }
        Ok(())
    }
}

//------------ UnknownRecordDataError ----------------------------------------

/// Generic record data could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnknownRecordDataError {
    /// The record data was longer than 65535 octets.
    LongData,

    /// The record type has its own record data type.
    KnownType(Rtype),
}

impl fmt::Display for UnknownRecordDataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UnknownRecordDataError::LongData => {
                f.write_str("record data too long")
            }
            UnknownRecordDataError::KnownType(rtype) => {
                write!(f, "record type {} needs typed record data", rtype)
            }
        }
    }
}

impl std::error::Error for UnknownRecordDataError {}

//============ Testing =======================================================
