//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::wire::{BitCursor, FormError, ParseError};
use core::{fmt, str};
use octseq::array::Array;
use octseq::builder::OctetsBuilder;

//------------ Label ---------------------------------------------------------

/// A single label of a domain name.
///
/// A label is a sequence of up to 63 arbitrary octets. The empty label only
/// appears at the very end of a name where it represents the root. Labels
/// are stored inline, so they are cheap to clone.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(Array<63>);

impl Label {
    /// The maximum length of a label in octets.
    pub const MAX_LEN: usize = 63;

    /// Returns the empty label of the root.
    #[must_use]
    pub fn root() -> Self {
        Label(Array::new())
    }

    /// Creates a label from an octets slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, NameError> {
        let mut res = Array::new();
        res.append_slice(slice).map_err(|_| NameError::LongLabel)?;
        Ok(Label(res))
    }

    /// Creates a label from the characters of its presentation format.
    ///
    /// Printable ASCII characters are taken as they are. A backslash
    /// escapes the following character or, if followed by three decimal
    /// digits, introduces the octet with that value.
    pub fn from_chars(
        mut chars: impl Iterator<Item = char>,
    ) -> Result<Self, NameError> {
        let mut res = Array::<63>::new();
        while let Some(ch) = chars.next() {
            let ch = match ch {
                '!'..='[' | ']'..='~' => ch as u8,
                '\\' => parse_escape(&mut chars)?,
                _ => return Err(NameError::BadSymbol),
            };
            res.append_slice(&[ch]).map_err(|_| NameError::LongLabel)?;
        }
        Ok(Label(res))
    }

    /// Takes a label of `len` octets from the beginning of `cursor`.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
        len: usize,
    ) -> Result<Self, ParseError> {
        let mut res = Array::<63>::new();
        res.resize_raw(len)
            .map_err(|_| ParseError::form_error("long label"))?;
        cursor.next_buf(res.as_slice_mut())?;
        Ok(Label(res))
    }

    /// Reads a label of `len` octets starting at octet `byte` of `cursor`.
    ///
    /// The sequential position of the cursor is not changed.
    pub fn parse_at<Octs: AsRef<[u8]>>(
        cursor: &BitCursor<Octs>,
        byte: usize,
        len: usize,
    ) -> Result<Self, ParseError> {
        let mut res = Array::<63>::new();
        res.resize_raw(len)
            .map_err(|_| ParseError::form_error("long label"))?;
        cursor.read_buf_at(byte, res.as_slice_mut())?;
        Ok(Label(res))
    }

    /// Returns the length of the label in octets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the empty root label.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.as_slice().is_empty()
    }

    /// Returns the octets of the label.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns the length of the wire format of the label.
    ///
    /// This is the length of the content plus one for the length octet.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.len() + 1
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- FromStr

impl str::FromStr for Label {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s.chars())
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.as_slice() {
            if ch == b' ' || ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", (ch as char))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

/// Parses the escape sequence following a backslash.
fn parse_escape(
    chars: &mut impl Iterator<Item = char>,
) -> Result<u8, NameError> {
    let ch = chars.next().ok_or(NameError::BadEscape)?;
    if ch.is_ascii_digit() {
        let mut value = ch.to_digit(10).ok_or(NameError::BadEscape)?;
        for _ in 0..2 {
            let digit = chars
                .next()
                .and_then(|ch| ch.to_digit(10))
                .ok_or(NameError::BadEscape)?;
            value = value * 10 + digit;
        }
        u8::try_from(value).map_err(|_| NameError::BadEscape)
    } else if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(NameError::BadEscape)
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label as given by its first octet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// A normal label with the given length.
    ///
    /// A length of zero marks the end of a name.
    Normal(usize),

    /// A compression pointer to the given absolute position.
    Compressed(usize),
}

impl LabelType {
    /// Takes a label type from the beginning of `cursor`.
    ///
    /// For a compression pointer, both octets of the pointer are consumed.
    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
    ) -> Result<Self, ParseError> {
        let ltype = cursor.next_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(usize::from(ltype))),
            0xC0..=0xFF => {
                let low = cursor.next_u8()?;
                Ok(Self::pointer(ltype, low))
            }
            _ => Err(FormError::new("invalid label type").into()),
        }
    }

    /// Reads the label type starting at octet `byte` of `cursor`.
    pub fn parse_at<Octs: AsRef<[u8]>>(
        cursor: &BitCursor<Octs>,
        byte: usize,
    ) -> Result<Self, ParseError> {
        let ltype = cursor.read_u8_at(byte)?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(usize::from(ltype))),
            0xC0..=0xFF => {
                let low = cursor.read_u8_at(byte + 1)?;
                Ok(Self::pointer(ltype, low))
            }
            _ => Err(FormError::new("invalid label type").into()),
        }
    }

    fn pointer(high: u8, low: u8) -> Self {
        LabelType::Compressed(
            (usize::from(high & 0x3F) << 8) | usize::from(low),
        )
    }

    /// Returns the number of octets the label type occupies on the wire.
    #[must_use]
    pub fn wire_len(self) -> usize {
        match self {
            LabelType::Normal(_) => 1,
            LabelType::Compressed(_) => 2,
        }
    }
}

//------------ NameError -----------------------------------------------------

/// A domain name could not be created from its presentation format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// An empty label appeared before the end of the name.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The wire format of the name would be longer than 255 octets.
    LongName,

    /// An illegal escape sequence was encountered.
    BadEscape,

    /// A character outside of printable ASCII was encountered.
    BadSymbol,
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::EmptyLabel => "an empty label was encountered",
            NameError::LongLabel => "label length limit exceeded",
            NameError::LongName => "long domain name",
            NameError::BadEscape => "illegal escape sequence",
            NameError::BadSymbol => "illegal character",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_str() {
        let label: Label = "example".parse().unwrap();
        assert_eq!(label.as_slice(), b"example");
        assert_eq!(label.wire_len(), 8);

        let label: Label = "a\\.b\\032c\\\\".parse().unwrap();
        assert_eq!(label.as_slice(), b"a.b c\\");
        assert_eq!(label.to_string(), "a\\.b\\ c\\\\");
    }

    #[rstest]
    #[case("a\\", NameError::BadEscape)]
    #[case("a\\25", NameError::BadEscape)]
    #[case("\\256", NameError::BadEscape)]
    #[case("a b", NameError::BadSymbol)]
    #[case("ä", NameError::BadSymbol)]
    fn from_str_errors(#[case] s: &str, #[case] err: NameError) {
        assert_eq!(s.parse::<Label>(), Err(err));
    }

    #[test]
    fn long_label() {
        let ok = [b'x'; 63];
        assert_eq!(Label::from_slice(&ok).unwrap().len(), 63);
        let long = [b'x'; 64];
        assert_eq!(Label::from_slice(&long), Err(NameError::LongLabel));
        let s = "x".repeat(64);
        assert_eq!(s.parse::<Label>(), Err(NameError::LongLabel));
    }

    #[test]
    fn display_non_printable() {
        let label = Label::from_slice(b"a\x00\x7f").unwrap();
        assert_eq!(label.to_string(), "a\\000\\127");
        assert_eq!(format!("{:?}", label), "Label(a\\000\\127)");
    }

    #[test]
    fn parse_label_types() {
        let mut cursor = BitCursor::new(&b"\x03www\xc0\x0c\x00\x40"[..]);
        assert_eq!(
            LabelType::parse(&mut cursor).unwrap(),
            LabelType::Normal(3)
        );
        assert_eq!(Label::parse(&mut cursor, 3).unwrap().as_slice(), b"www");
        assert_eq!(
            LabelType::parse(&mut cursor).unwrap(),
            LabelType::Compressed(12)
        );
        assert_eq!(
            LabelType::parse(&mut cursor).unwrap(),
            LabelType::Normal(0)
        );
        assert!(matches!(
            LabelType::parse(&mut cursor),
            Err(ParseError::Form(_))
        ));

        assert_eq!(
            LabelType::parse_at(&cursor, 4).unwrap(),
            LabelType::Compressed(12)
        );
        assert_eq!(
            Label::parse_at(&cursor, 1, 3).unwrap().as_slice(),
            b"www"
        );
        assert!(matches!(
            Label::parse_at(&cursor, 6, 3),
            Err(ParseError::Bits(_))
        ));
    }

    #[test]
    fn truncated_pointer() {
        let mut cursor = BitCursor::new(&b"\xc0"[..]);
        assert!(matches!(
            LabelType::parse(&mut cursor),
            Err(ParseError::Bits(_))
        ));
    }
}
