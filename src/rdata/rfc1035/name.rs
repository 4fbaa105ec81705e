//! Record data types from RFC 1035 that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::{NameId, NameInterner, WritePositions};
use crate::base::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::fmt;
use core::str::FromStr;
use serde_json::{json, Value};

//------------ name_type! ----------------------------------------------------

/// Defines a record data type consisting of a single domain name.
///
/// The name is rendered under the key given as the last argument.
macro_rules! name_type {
    (
        $(#[$attr:meta])*
        ( $target:ident, $rtype:ident, $field:ident, $into_field:ident,
          $key:literal )
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target<N = NameId> {
            $field: N,
        }

        impl<N> $target<N> {
            /// The rtype of this record data type.
            pub const RTYPE: Rtype = Rtype::$rtype;

            /// Creates new record data from the domain name.
            pub fn new($field: N) -> Self {
                $target { $field }
            }

            /// Returns a reference to the domain name.
            pub fn $field(&self) -> &N {
                &self.$field
            }

            /// Converts the record data into its domain name.
            pub fn $into_field(self) -> N {
                self.$field
            }

            /// Converts the domain name into a different type.
            pub fn map_name<NN, F: FnOnce(N) -> NN>(
                self, f: F
            ) -> $target<NN> {
                $target::new(f(self.$field))
            }

            /// Converts the domain name with a fallible conversion.
            pub fn try_map_name<NN, E, F: FnOnce(N) -> Result<NN, E>>(
                self, f: F
            ) -> Result<$target<NN>, E> {
                f(self.$field).map($target::new)
            }
        }

        impl $target<NameId> {
            /// Takes the record data from the beginning of `cursor`.
            pub fn parse<Octs: AsRef<[u8]>>(
                cursor: &mut BitCursor<Octs>,
                names: &mut NameInterner,
            ) -> Result<Self, ParseError> {
                names.import(cursor).map(Self::new)
            }

            /// Appends the record data to `writer`.
            ///
            /// The name may be compressed.
            pub fn compose(
                &self,
                writer: &mut BitWriter,
                names: &NameInterner,
                positions: &mut WritePositions,
            ) -> Result<(), ComposeError> {
                names.export(writer, positions, self.$field)
            }
        }

        impl<N: fmt::Display> $target<N> {
            /// Returns the record data as a generic tree.
            pub fn render(&self) -> Value {
                json!({ $key: self.$field.to_string() })
            }
        }

        //--- From and FromStr

        impl<N> From<N> for $target<N> {
            fn from(name: N) -> Self {
                Self::new(name)
            }
        }

        impl<N: FromStr> FromStr for $target<N> {
            type Err = N::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                N::from_str(s).map(Self::new)
            }
        }

        //--- Display

        impl<N: fmt::Display> fmt::Display for $target<N> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.$field, f)
            }
        }
    }
}

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for domain
    /// name alias.
    ///
    /// The CNAME type is defined in [RFC 1035, section 3.3.1][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.1
    (Cname, CNAME, cname, into_cname, "Name")
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and
    /// domain.
    ///
    /// The NS record type is defined in [RFC 1035, section 3.3.11][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
    (Ns, NS, nsdname, into_nsdname, "Label")
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_compose() {
        let buf = b"\x02ns\x07example\x03com\x00";
        let mut cursor = BitCursor::new(&buf[..]);
        let mut names = NameInterner::new();
        let rdata = Ns::parse(&mut cursor, &mut names).unwrap();
        assert_eq!(names.name(*rdata.nsdname()), "ns.example.com");

        let mut writer = BitWriter::new(512);
        let mut positions = WritePositions::new();
        rdata.compose(&mut writer, &names, &mut positions).unwrap();
        assert_eq!(writer.as_slice(), &buf[..]);
    }

    #[test]
    fn map_and_render() {
        let mut names = NameInterner::new();
        let rdata = Cname::new("www.example.com")
            .try_map_name(|name| names.segment_for(name))
            .unwrap();
        let rdata = rdata.map_name(|id| names.name(id));
        assert_eq!(rdata.cname(), &"www.example.com");
        assert_eq!(rdata.render(), json!({ "Name": "www.example.com" }));
        assert_eq!(
            Ns::new("ns.example.com").render(),
            json!({ "Label": "ns.example.com" })
        );
        assert_eq!(Ns::<()>::RTYPE, Rtype::NS);
    }
}
