//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::{NameId, NameInterner, WritePositions};
use crate::base::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::fmt;
use serde_json::{json, Value};

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx<N = NameId> {
    preference: u16,
    exchange: N,
}

impl<N> Mx<N> {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::MX;

    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: N) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &N {
        &self.exchange
    }

    /// Converts the exchange name into a different type.
    pub fn map_name<NN, F: FnOnce(N) -> NN>(self, f: F) -> Mx<NN> {
        Mx::new(self.preference, f(self.exchange))
    }

    /// Converts the exchange name with a fallible conversion.
    pub fn try_map_name<NN, E, F: FnOnce(N) -> Result<NN, E>>(
        self,
        f: F,
    ) -> Result<Mx<NN>, E> {
        Ok(Mx::new(self.preference, f(self.exchange)?))
    }
}

impl Mx<NameId> {
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
        names: &mut NameInterner,
    ) -> Result<Self, ParseError> {
        Ok(Self::new(cursor.next_u16()?, names.import(cursor)?))
    }

    pub fn compose(
        &self,
        writer: &mut BitWriter,
        names: &NameInterner,
        positions: &mut WritePositions,
    ) -> Result<(), ComposeError> {
        writer.write_u16(self.preference)?;
        names.export(writer, positions, self.exchange)
    }
}

impl<N: fmt::Display> Mx<N> {
    /// Returns the record data as a generic tree.
    pub fn render(&self) -> Value {
        json!({
            "Priority": self.preference,
            "Label": self.exchange.to_string(),
        })
    }
}

//--- Display

impl<N: fmt::Display> fmt::Display for Mx<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_compose() {
        let buf = b"\x00\x0a\x04mail\x07example\x03com\x00";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        let rdata = Mx::parse(&mut cursor, &mut names).unwrap();
        assert_eq!(rdata.preference(), 10);
        assert_eq!(names.name(*rdata.exchange()), "mail.example.com");

        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        rdata.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(writer.as_slice(), &buf[..]);
    }

    #[test]
    fn compressed_exchange() {
        let mut names = NameInterner::new();
        let owner = names.segment_for("example.com").unwrap();
        let rdata = Mx::new(5, "mail.example.com")
            .try_map_name(|name| names.segment_for(name))
            .unwrap();
        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        names.export(&mut writer, &mut positions, owner).unwrap();
        rdata.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(
            writer.as_slice(),
            b"\x07example\x03com\x00\x00\x05\x04mail\xc0\x00"
        );
    }

    #[test]
    fn render() {
        let rdata = Mx::new(10, "mail.example.com");
        assert_eq!(
            rdata.render(),
            json!({ "Priority": 10, "Label": "mail.example.com" })
        );
        assert_eq!(rdata.to_string(), "10 mail.example.com");
    }
}
