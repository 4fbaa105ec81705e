//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! In order to reflect the fact that changing the section counts may
//! invalidate the rest of the message whereas the other elements of the
//! header section can safely be modified, the whole header has been split
//! into two separate types: [`Header`] contains the safely modifyable part
//! at the beginning and [`HeaderCounts`] contains the section counts. In
//! addition, the [`HeaderSection`] type wraps both of them into a single
//! type.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::{fmt, str::FromStr};

//------------ Header --------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags.
/// The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// Methods are available for accessing each of these fields. Unlike the
/// wire format, the fields are kept separately and are only packed when
/// the header is composed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Header {
    id: u16,
    flags: Flags,
    opcode: Opcode,
    z: u8,
    rcode: Rcode,
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a new header.
    ///
    /// All fields and flags are initialized to zero, the opcode is
    /// [`Opcode::QUERY`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    #[must_use]
    pub fn id(self) -> u16 {
        self.id
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.id = value
    }

    /// Sets the value of the ID field to a randomly chosen number.
    #[cfg(feature = "rand")]
    pub fn set_random_id(&mut self) {
        self.set_id(::rand::random())
    }

    /// Returns whether the [QR](Flags::qr) bit is set.
    #[must_use]
    pub fn qr(self) -> bool {
        self.flags.qr
    }

    /// Sets the value of the [QR](Flags::qr) bit.
    pub fn set_qr(&mut self, set: bool) {
        self.flags.qr = set
    }

    /// Returns the value of the Opcode field.
    ///
    /// This field specifies the kind of query a message contains. Normal
    /// queries have the value [`Opcode::QUERY`].
    #[must_use]
    pub fn opcode(self) -> Opcode {
        self.opcode
    }

    /// Sets the value of the opcode field.
    ///
    /// The field is only four bits wide. Composing a header with a larger
    /// value fails.
    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.opcode = opcode
    }

    /// Returns all flags contained in the header.
    #[must_use]
    pub fn flags(self) -> Flags {
        self.flags
    }

    /// Sets all flag bits.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags
    }

    /// Returns whether the [AA](Flags::aa) bit is set.
    #[must_use]
    pub fn aa(self) -> bool {
        self.flags.aa
    }

    /// Sets the value of the [AA](Flags::aa) bit.
    pub fn set_aa(&mut self, set: bool) {
        self.flags.aa = set
    }

    /// Returns whether the [TC](Flags::tc) bit is set.
    #[must_use]
    pub fn tc(self) -> bool {
        self.flags.tc
    }

    /// Sets the value of the [TC](Flags::tc) bit.
    pub fn set_tc(&mut self, set: bool) {
        self.flags.tc = set
    }

    /// Returns whether the [RD](Flags::rd) bit is set.
    #[must_use]
    pub fn rd(self) -> bool {
        self.flags.rd
    }

    /// Sets the value of the [RD](Flags::rd) bit.
    pub fn set_rd(&mut self, set: bool) {
        self.flags.rd = set
    }

    /// Returns whether the [RA](Flags::ra) bit is set.
    #[must_use]
    pub fn ra(self) -> bool {
        self.flags.ra
    }

    /// Sets the value of the [RA](Flags::ra) bit.
    pub fn set_ra(&mut self, set: bool) {
        self.flags.ra = set
    }

    /// Returns the value of the three reserved bits.
    ///
    /// These bits are reserved for future use and must be zero in all
    /// queries and responses. They are kept as they are nonetheless.
    #[must_use]
    pub fn z(self) -> u8 {
        self.z
    }

    /// Sets the value of the reserved bits.
    ///
    /// Only the lowest three bits of `value` are used.
    pub fn set_z(&mut self, value: u8) {
        self.z = value & 0x07
    }

    /// Returns the value of the RCODE field.
    ///
    /// The *response code* is used in a response to indicate what happened
    /// when processing the query. See the [`Rcode`] type for information on
    /// possible values and their meaning.
    #[must_use]
    pub fn rcode(self) -> Rcode {
        self.rcode
    }

    /// Sets the value of the RCODE field.
    ///
    /// The field is only four bits wide. Composing a header with a larger
    /// value fails.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.rcode = rcode
    }
}

/// # Parsing and Composing
///
impl Header {
    /// Takes a header from the beginning of `cursor`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
    ) -> Result<Self, ParseError> {
        let id = cursor.next_u16()?;
        let qr = cursor.next::<u8>(1)? == 1;
        let opcode = Opcode::from_int(cursor.next(4)?);
        let aa = cursor.next::<u8>(1)? == 1;
        let tc = cursor.next::<u8>(1)? == 1;
        let rd = cursor.next::<u8>(1)? == 1;
        let ra = cursor.next::<u8>(1)? == 1;
        let z = cursor.next(3)?;
        let rcode = Rcode::from_int(cursor.next(4)?);
        Ok(Header {
            id,
            flags: Flags {
                qr,
                aa,
                tc,
                rd,
                ra,
            },
            opcode,
            z,
            rcode,
        })
    }

    /// Appends the header to `writer`.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        if self.opcode.to_int() > 0x0F {
            return Err(ComposeError::form_error("opcode out of range"));
        }
        if self.rcode.to_int() > 0x0F {
            return Err(ComposeError::form_error("rcode out of range"));
        }
        writer.write_u16(self.id)?;
        writer.write(1, u8::from(self.flags.qr))?;
        writer.write(4, self.opcode.to_int())?;
        writer.write(1, u8::from(self.flags.aa))?;
        writer.write(1, u8::from(self.flags.tc))?;
        writer.write(1, u8::from(self.flags.rd))?;
        writer.write(1, u8::from(self.flags.ra))?;
        writer.write(3, self.z)?;
        writer.write(4, self.rcode.to_int())?;
        Ok(())
    }
}

//------------ Flags ---------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This is a utility type that makes it easier to work with flags. It
/// contains the single bit flags of the [`Header`].
///
/// This type has a text notation and can be created from it as well. Each
/// flags that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name.  If mutliple flags are set, the tokens
/// are separated by space.
///
/// ```
/// use core::str::FromStr;
/// use dnswire::base::header::Flags;
///
/// let flags = Flags::from_str("QR AA").unwrap();
/// assert!(flags.qr && flags.aa);
/// assert_eq!(format!("{}", flags), "QR AA");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    pub qr: bool,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name, ie., whether this
    /// response is an *authoritative answer.* The field has no meaning in a
    /// query.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available
    /// then fit into the message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the
    /// name server to try and recursively gather a response if it doesn’t
    /// have the data available locally. The bit’s value is copied into the
    /// response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether
    /// the responding name server supports recursion. It has no meaning in a
    /// query.
    pub ra: bool,
}

impl Flags {
    /// Creates new flags.
    ///
    /// All flags will be unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

//--- Display & FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::new();
        for token in s.to_uppercase().split(' ') {
            match token {
                "QR" => flags.qr = true,
                "AA" => flags.aa = true,
                "TC" => flags.tc = true,
                "RD" => flags.rd = true,
                "RA" => flags.ra = true,
                "" => {}
                _ => return Err(FlagsFromStrError),
            }
        }
        Ok(flags)
    }
}

//------------ HeaderCounts -------------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message. The counters are arranged in the
/// same order as the sections themselves: QDCOUNT for the question section,
/// ANCOUNT for the answer section, NSCOUNT for the authority section, and
/// ARCOUNT for the additional section.
///
/// For each field there are three methods for getting, setting, and
/// incrementing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HeaderCounts {
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl HeaderCounts {
    /// Creates a new value with all counters set to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the QDCOUNT field.
    #[must_use]
    pub fn qdcount(self) -> u16 {
        self.qdcount
    }

    /// Sets the value of the QDCOUNT field.
    pub fn set_qdcount(&mut self, value: u16) {
        self.qdcount = value
    }

    /// Increases the value of the QDCOUNT field by one.
    ///
    /// If increasing the counter would result in an overflow, returns an
    /// error and leaves the counter unchanged.
    pub fn inc_qdcount(&mut self) -> Result<(), CountOverflow> {
        inc(&mut self.qdcount)
    }

    /// Returns the value of the ANCOUNT field.
    #[must_use]
    pub fn ancount(self) -> u16 {
        self.ancount
    }

    /// Sets the value of the ANCOUNT field.
    pub fn set_ancount(&mut self, value: u16) {
        self.ancount = value
    }

    /// Increases the value of the ANCOUNT field by one.
    pub fn inc_ancount(&mut self) -> Result<(), CountOverflow> {
        inc(&mut self.ancount)
    }

    /// Returns the value of the NSCOUNT field.
    #[must_use]
    pub fn nscount(self) -> u16 {
        self.nscount
    }

    /// Sets the value of the NSCOUNT field.
    pub fn set_nscount(&mut self, value: u16) {
        self.nscount = value
    }

    /// Increases the value of the NSCOUNT field by one.
    pub fn inc_nscount(&mut self) -> Result<(), CountOverflow> {
        inc(&mut self.nscount)
    }

    /// Returns the value of the ARCOUNT field.
    #[must_use]
    pub fn arcount(self) -> u16 {
        self.arcount
    }

    /// Sets the value of the ARCOUNT field.
    pub fn set_arcount(&mut self, value: u16) {
        self.arcount = value
    }

    /// Increases the value of the ARCOUNT field by one.
    pub fn inc_arcount(&mut self) -> Result<(), CountOverflow> {
        inc(&mut self.arcount)
    }

    /// Takes the counts from the beginning of `cursor`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
    ) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: cursor.next_u16()?,
            ancount: cursor.next_u16()?,
            nscount: cursor.next_u16()?,
            arcount: cursor.next_u16()?,
        })
    }

    /// Appends the counts to `writer`.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        writer.write_u16(self.qdcount)?;
        writer.write_u16(self.ancount)?;
        writer.write_u16(self.nscount)?;
        writer.write_u16(self.arcount)?;
        Ok(())
    }
}

fn inc(count: &mut u16) -> Result<(), CountOverflow> {
    *count = count.checked_add(1).ok_or(CountOverflow)?;
    Ok(())
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
///
/// Consists of a [`Header`] directly followed by a [`HeaderCounts`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

impl HeaderSection {
    /// The length of the header section in octets.
    pub const LEN: usize = 12;

    /// Creates a new header section.
    ///
    /// The value will have all header and header counts fields set to zero
    /// or false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns a reference to the header counts.
    #[must_use]
    pub fn counts(&self) -> &HeaderCounts {
        &self.counts
    }

    /// Returns a mutable reference to the header counts.
    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }

    /// Takes a header section from the beginning of `cursor`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
    ) -> Result<Self, ParseError> {
        Ok(HeaderSection {
            header: Header::parse(cursor)?,
            counts: HeaderCounts::parse(cursor)?,
        })
    }

    /// Appends the header section to `writer`.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        self.header.compose(writer)?;
        self.counts.compose(writer)
    }
}

//--- AsRef and AsMut

impl AsRef<Header> for HeaderSection {
    fn as_ref(&self) -> &Header {
        &self.header
    }
}

impl AsMut<Header> for HeaderSection {
    fn as_mut(&mut self) -> &mut Header {
        &mut self.header
    }
}

impl AsRef<HeaderCounts> for HeaderSection {
    fn as_ref(&self) -> &HeaderCounts {
        &self.counts
    }
}

impl AsMut<HeaderCounts> for HeaderSection {
    fn as_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }
}

//------------ FlagsFromStrError --------------------------------------------

/// An error happened when converting string to flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal flags token")
    }
}

impl std::error::Error for FlagsFromStrError {}

//------------ CountOverflow -------------------------------------------------

/// A section count would have exceeded its maximum of 65535.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountOverflow;

impl fmt::Display for CountOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("section count overflow")
    }
}

impl std::error::Error for CountOverflow {}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::wire::BitError;

    macro_rules! test_field {
        ($get:ident, $set:ident, $default:expr, $($value:expr),*) => {
            $({
                let mut h = Header::new();
                assert_eq!(h.$get(), $default);
                h.$set($value);
                assert_eq!(h.$get(), $value);
            })*
        }
    }

    #[test]
    fn header() {
        test_field!(id, set_id, 0, 0x1234);
        test_field!(qr, set_qr, false, true, false);
        test_field!(opcode, set_opcode, Opcode::QUERY, Opcode::NOTIFY);
        test_field!(
            flags,
            set_flags,
            Flags::new(),
            Flags {
                qr: true,
                ..Default::default()
            }
        );
        test_field!(aa, set_aa, false, true, false);
        test_field!(tc, set_tc, false, true, false);
        test_field!(rd, set_rd, false, true, false);
        test_field!(ra, set_ra, false, true, false);
        test_field!(z, set_z, 0, 5, 0);
        test_field!(rcode, set_rcode, Rcode::NOERROR, Rcode::REFUSED);

        let mut h = Header::new();
        h.set_z(0xFF);
        assert_eq!(h.z(), 7);
    }

    #[test]
    fn flags_str() {
        let flags: Flags = "qr rd  ra".parse().unwrap();
        assert_eq!(
            flags,
            Flags {
                qr: true,
                rd: true,
                ra: true,
                ..Default::default()
            }
        );
        assert_eq!(flags.to_string(), "QR RD RA");
        assert_eq!(Flags::new().to_string(), "");
        assert_eq!("QR XX".parse::<Flags>(), Err(FlagsFromStrError));
    }

    #[test]
    fn parse_bit_fields() {
        let buf = b"\x86\x2a\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00";
        let mut cursor = BitCursor::new(&buf[..]);
        let section = HeaderSection::parse(&mut cursor).unwrap();
        let header = section.header();
        assert_eq!(header.id(), 0x862a);
        assert!(header.qr());
        assert_eq!(header.opcode(), Opcode::QUERY);
        assert!(!header.aa());
        assert!(!header.tc());
        assert!(header.rd());
        assert!(header.ra());
        assert_eq!(header.z(), 0);
        assert_eq!(header.rcode(), Rcode::NOERROR);
        assert_eq!(section.counts().qdcount(), 1);
        assert_eq!(section.counts().ancount(), 1);
        assert_eq!(section.counts().nscount(), 0);
        assert_eq!(section.counts().arcount(), 0);
        assert_eq!(cursor.current_byte(), HeaderSection::LEN);
    }

    #[test]
    fn compose_bit_fields() {
        let mut section = HeaderSection::new();
        let header = section.header_mut();
        header.set_id(0xBEEF);
        header.set_opcode(Opcode::UPDATE);
        header.set_aa(true);
        header.set_tc(true);
        header.set_z(0b101);
        header.set_rcode(Rcode::NXDOMAIN);
        section.counts_mut().set_arcount(0x0102);
        let mut writer = BitWriter::new(12);
        section.compose(&mut writer).unwrap();
        // 0 0101 1 1 0 0 101 0011
        assert_eq!(
            writer.as_slice(),
            b"\xbe\xef\x2e\x53\x00\x00\x00\x00\x00\x00\x01\x02"
        );
        let mut cursor = writer.into_cursor();
        assert_eq!(HeaderSection::parse(&mut cursor).unwrap(), section);
    }

    #[test]
    fn compose_rejects_wide_fields() {
        let mut header = Header::new();
        header.set_opcode(Opcode::from_int(16));
        let mut writer = BitWriter::new(12);
        assert!(header.compose(&mut writer).is_err());
        header.set_opcode(Opcode::QUERY);
        header.set_rcode(Rcode::from_int(23));
        assert!(header.compose(&mut writer).is_err());
        assert_eq!(writer.current_byte(), 0);
    }

    #[test]
    fn short_header() {
        let mut cursor = BitCursor::new(&b"\x12\x34\x01"[..]);
        assert!(matches!(
            HeaderSection::parse(&mut cursor),
            Err(ParseError::Bits(BitError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn counts() {
        let mut c = HeaderCounts::new();
        c.set_qdcount(0xFFFE);
        c.inc_qdcount().unwrap();
        assert_eq!(c.qdcount(), 0xFFFF);
        assert_eq!(c.inc_qdcount(), Err(CountOverflow));
        assert_eq!(c.qdcount(), 0xFFFF);
        c.inc_ancount().unwrap();
        c.inc_nscount().unwrap();
        c.inc_nscount().unwrap();
        c.inc_arcount().unwrap();
        assert_eq!((c.ancount(), c.nscount(), c.arcount()), (1, 2, 1));
    }
}
