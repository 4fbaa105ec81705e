//! Resource data implementations.
//!
//! This module contains the record data types the codec knows how to
//! interpret: A, NS, CNAME, and MX from [RFC 1035] and AAAA from
//! [RFC 3596]. All other record types are kept as
//! [`UnknownRecordData`].
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in and re-exported at the top level here.
//!
//! The [`RecordData`] enum combines all these types into a single type.
//! Types containing domain names are generic over the name type. Inside a
//! message, names are [`NameId`] handles. Other name types, most notably
//! `&str`, can be used to construct record data and are converted via
//! [`RecordData::try_map_names`].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

pub use self::aaaa::Aaaa;
pub use self::generic::{UnknownRecordData, UnknownRecordDataError};
pub use self::rfc1035::{Cname, Mx, Ns, A};

pub mod rfc1035;

mod aaaa;
mod generic;

use crate::base::iana::Rtype;
use crate::base::name::{NameId, NameInterner, WritePositions};
use crate::base::wire::{
    BitCursor, BitWriter, ComposeError, FormError, ParseError,
};
use core::fmt;
use serde_json::Value;
use tracing::trace;

//------------ interprets ----------------------------------------------------

/// Returns whether `rtype` has its own variant in [`RecordData`].
pub fn interprets(rtype: Rtype) -> bool {
    matches!(
        rtype,
        Rtype::A | Rtype::NS | Rtype::CNAME | Rtype::MX | Rtype::AAAA
    )
}

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
///
/// The variant is determined by the record type. Record types without a
/// dedicated variant end up in [`Unknown`][Self::Unknown] which keeps the
/// raw octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData<N = NameId> {
    A(A),
    Ns(Ns<N>),
    Cname(Cname<N>),
    Mx(Mx<N>),
    Aaaa(Aaaa),
    Unknown(UnknownRecordData),
}

impl<N> RecordData<N> {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(_) => A::RTYPE,
            RecordData::Ns(_) => Rtype::NS,
            RecordData::Cname(_) => Rtype::CNAME,
            RecordData::Mx(_) => Rtype::MX,
            RecordData::Aaaa(_) => Aaaa::RTYPE,
            RecordData::Unknown(ref data) => data.rtype(),
        }
    }

    /// Converts the domain names contained in the data.
    pub fn map_names<NN, F: FnMut(N) -> NN>(
        self,
        mut f: F,
    ) -> RecordData<NN> {
        match self {
            RecordData::A(data) => RecordData::A(data),
            RecordData::Ns(data) => RecordData::Ns(data.map_name(&mut f)),
            RecordData::Cname(data) => {
                RecordData::Cname(data.map_name(&mut f))
            }
            RecordData::Mx(data) => RecordData::Mx(data.map_name(&mut f)),
            RecordData::Aaaa(data) => RecordData::Aaaa(data),
            RecordData::Unknown(data) => RecordData::Unknown(data),
        }
    }

    /// Converts the domain names contained in the data fallibly.
    pub fn try_map_names<NN, E, F: FnMut(N) -> Result<NN, E>>(
        self,
        mut f: F,
    ) -> Result<RecordData<NN>, E> {
        Ok(match self {
            RecordData::A(data) => RecordData::A(data),
            RecordData::Ns(data) => {
                RecordData::Ns(data.try_map_name(&mut f)?)
            }
            RecordData::Cname(data) => {
                RecordData::Cname(data.try_map_name(&mut f)?)
            }
            RecordData::Mx(data) => {
                RecordData::Mx(data.try_map_name(&mut f)?)
            }
            RecordData::Aaaa(data) => RecordData::Aaaa(data),
            RecordData::Unknown(data) => RecordData::Unknown(data),
        })
    }
}

impl RecordData<NameId> {
    /// Takes the record data of a record of type `rtype` from `cursor`.
    ///
    /// `rdlen` is the record data length announced in the record. Parsing
    /// fails unless exactly that many octets are consumed. Names are added
    /// to `names`.
    pub fn parse<Octs: AsRef<[u8]>>(
        rtype: Rtype,
        rdlen: u16,
        cursor: &mut BitCursor<Octs>,
        names: &mut NameInterner,
    ) -> Result<Self, ParseError> {
        trace!(%rtype, rdlen, "parsing record data");
        let fixed_len = match rtype {
            Rtype::A => Some(A::LEN),
            Rtype::AAAA => Some(Aaaa::LEN),
            _ => None,
        };
        if fixed_len.map_or(false, |len| len != rdlen) {
            return Err(FormError::new("record data length mismatch").into());
        }
        let start = cursor.current_byte();
        let res = match rtype {
            Rtype::A => RecordData::A(A::parse(cursor)?),
            Rtype::NS => RecordData::Ns(Ns::parse(cursor, names)?),
            Rtype::CNAME => RecordData::Cname(Cname::parse(cursor, names)?),
            Rtype::MX => RecordData::Mx(Mx::parse(cursor, names)?),
            Rtype::AAAA => RecordData::Aaaa(Aaaa::parse(cursor)?),
            _ => RecordData::Unknown(UnknownRecordData::parse(
                rtype, cursor, rdlen,
            )?),
        };
        if cursor.current_byte() - start != usize::from(rdlen) {
            return Err(
                FormError::new("record data length mismatch").into()
            );
        }
        Ok(res)
    }

    /// Appends the record data to `writer`.
    ///
    /// Names may be compressed.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
        names: &NameInterner,
        positions: &mut WritePositions,
    ) -> Result<(), ComposeError> {
        match *self {
            RecordData::A(ref data) => data.compose(writer),
            RecordData::Ns(ref data) => {
                data.compose(writer, names, positions)
            }
            RecordData::Cname(ref data) => {
                data.compose(writer, names, positions)
            }
            RecordData::Mx(ref data) => {
                data.compose(writer, names, positions)
            }
            RecordData::Aaaa(ref data) => data.compose(writer),
            RecordData::Unknown(ref data) => data.compose(writer),
        }
    }
}

impl<N: fmt::Display> RecordData<N> {
    /// Returns the record data as a generic tree.
    pub fn render(&self) -> Value {
        match *self {
            RecordData::A(ref data) => data.render(),
            RecordData::Ns(ref data) => data.render(),
            RecordData::Cname(ref data) => data.render(),
            RecordData::Mx(ref data) => data.render(),
            RecordData::Aaaa(ref data) => data.render(),
            RecordData::Unknown(ref data) => data.render(),
        }
    }
}

//--- From

impl<N> From<A> for RecordData<N> {
    fn from(data: A) -> Self {
        RecordData::A(data)
    }
}

impl<N> From<Ns<N>> for RecordData<N> {
    fn from(data: Ns<N>) -> Self {
        RecordData::Ns(data)
    }
}

impl<N> From<Cname<N>> for RecordData<N> {
    fn from(data: Cname<N>) -> Self {
        RecordData::Cname(data)
    }
}

impl<N> From<Mx<N>> for RecordData<N> {
    fn from(data: Mx<N>) -> Self {
        RecordData::Mx(data)
    }
}

impl<N> From<Aaaa> for RecordData<N> {
    fn from(data: Aaaa) -> Self {
        RecordData::Aaaa(data)
    }
}

impl<N> From<UnknownRecordData> for RecordData<N> {
    fn from(data: UnknownRecordData) -> Self {
        RecordData::Unknown(data)
    }
}

//--- Display

impl<N: fmt::Display> fmt::Display for RecordData<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ns(ref data) => fmt::Display::fmt(data, f),
            RecordData::Cname(ref data) => fmt::Display::fmt(data, f),
            RecordData::Mx(ref data) => fmt::Display::fmt(data, f),
            RecordData::Aaaa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Unknown(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Rtype::A, &b"\x01\x02\x03\x04"[..], "1.2.3.4")]
    #[case(Rtype::NS, &b"\x02ns\x00"[..], "ns")]
    #[case(Rtype::CNAME, &b"\x03www\x00"[..], "www")]
    #[case(Rtype::MX, &b"\x00\x01\x02mx\x00"[..], "1 mx")]
    #[case(Rtype::AAAA, &[0; 16][..], "::")]
    #[case(Rtype::TXT, &b"\x02hi"[..], "\\# 3 02 68 69")]
    fn parse_dispatch(
        #[case] rtype: Rtype,
        #[case] wire: &[u8],
        #[case] text: &str,
    ) {
        let mut cursor = BitCursor::new(wire);
        let mut names = NameInterner::new();
        let rdlen = wire.len() as u16;
        let data =
            RecordData::parse(rtype, rdlen, &mut cursor, &mut names).unwrap();
        assert_eq!(data.rtype(), rtype);
        let resolved = data.clone().map_names(|id| names.name(id));
        assert_eq!(resolved.to_string(), text);

        let mut writer = BitWriter::new(64);
        let mut positions = WritePositions::new();
        data.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(writer.as_slice(), wire);
    }

    #[rstest]
    // Announced length shorter than the address.
    #[case(Rtype::A, &b"\x01\x02\x03\x04"[..], 3)]
    // Announced length longer than the address.
    #[case(Rtype::A, &b"\x01\x02\x03\x04\x05"[..], 5)]
    // Name ends before the announced length.
    #[case(Rtype::NS, &b"\x02ns\x00\xff"[..], 5)]
    // Not enough data for an unknown record.
    #[case(Rtype::TXT, &b"\x02hi"[..], 4)]
    fn parse_length_mismatch(
        #[case] rtype: Rtype,
        #[case] wire: &[u8],
        #[case] rdlen: u16,
    ) {
        let mut cursor = BitCursor::new(wire);
        let mut names = NameInterner::new();
        assert!(
            RecordData::parse(rtype, rdlen, &mut cursor, &mut names).is_err()
        );
    }

    #[rstest]
    #[case(Rtype::A, 3)]
    #[case(Rtype::A, 16)]
    #[case(Rtype::AAAA, 4)]
    #[case(Rtype::AAAA, 17)]
    fn fixed_length_checked_before_reading(
        #[case] rtype: Rtype,
        #[case] rdlen: u16,
    ) {
        let wire = [0u8; 32];
        let mut cursor = BitCursor::new(&wire[..]);
        let mut names = NameInterner::new();
        assert_eq!(
            RecordData::parse(rtype, rdlen, &mut cursor, &mut names),
            Err(FormError::new("record data length mismatch").into())
        );
        assert_eq!(cursor.current_byte(), 0);
    }

    #[test]
    fn interpreted_types() {
        for rtype in [Rtype::A, Rtype::NS, Rtype::CNAME, Rtype::MX] {
            assert!(interprets(rtype));
        }
        assert!(interprets(Rtype::AAAA));
        assert!(!interprets(Rtype::TXT));
        assert!(!interprets(Rtype::from_int(99)));
    }

    #[test]
    fn map_names() {
        let mut names = NameInterner::new();
        let data: RecordData<&str> = Mx::new(10, "mx.example.com").into();
        let data =
            data.try_map_names(|name| names.segment_for(name)).unwrap();
        assert_eq!(data.rtype(), Rtype::MX);
        assert_eq!(
            data.map_names(|id| names.name(id)).render(),
            json!({ "Priority": 10, "Label": "mx.example.com" })
        );

        let data: RecordData<&str> = A::from_octets(1, 2, 3, 4).into();
        assert_eq!(data.render(), json!({ "IP": "1.2.3.4" }));
        let data = data.map_names(|_| NameId::ROOT);
        assert_eq!(data, RecordData::A(A::from_octets(1, 2, 3, 4)));
    }
}
