//! Reading and writing DNS data at bit granularity.
//!
//! The header of a DNS message packs several fields into single octets, so
//! the codec works on bits rather than octets. [`BitCursor`] reads from a
//! received message in two independent modes: [`next`][BitCursor::next]
//! consumes bits sequentially while [`read_at`][BitCursor::read_at] reads
//! at an arbitrary absolute position without touching the sequential
//! state. The latter is what resolving compression pointers needs.
//!
//! [`BitWriter`] is the composing counterpart. It has a fixed capacity and
//! can patch fields it has already written, which is how the record data
//! length is filled in once the data itself is known.
//!
//! Bits are always ordered most significant bit first.

use core::{cmp, fmt};

//------------ Uint ----------------------------------------------------------

/// An unsigned integer type that bit fields can be read into.
pub trait Uint: Copy {
    /// The width of the type in bits.
    const BITS: u32;

    /// Truncates a 64 bit value to this type.
    fn from_u64(value: u64) -> Self;

    /// Widens the value to 64 bits.
    fn into_u64(self) -> u64;
}

macro_rules! uint_impl {
    ( $type:ident ) => {
        impl Uint for $type {
            const BITS: u32 = $type::BITS;

            fn from_u64(value: u64) -> Self {
                value as $type
            }

            fn into_u64(self) -> u64 {
                u64::from(self)
            }
        }
    };
}

uint_impl!(u8);
uint_impl!(u16);
uint_impl!(u32);
uint_impl!(u64);

fn check_width<T: Uint>(bits: u32) -> Result<(), BitError> {
    if bits > T::BITS {
        Err(BitError::InvalidBitWidth { bits, max: T::BITS })
    } else {
        Ok(())
    }
}

//------------ BitCursor -----------------------------------------------------

/// A bit reader atop an octets sequence.
///
/// The cursor keeps the index of the next unread octet and up to eight bits
/// left over from a previous read that ended in the middle of an octet.
/// Only [`next`][Self::next] and the methods built on it use this state.
/// [`read_at`][Self::read_at] always computes its position from the given
/// absolute address.
///
/// If a sequential read fails, the position of the cursor should be
/// considered undefined.
#[derive(Clone, Debug)]
pub struct BitCursor<Octs> {
    /// The underlying octets.
    octets: Octs,

    /// The index of the next octet to be loaded.
    next: usize,

    /// Left over bits of the last loaded octet, left aligned.
    carry: u8,

    /// The number of valid bits in `carry`.
    carry_len: u32,
}

impl<Octs> BitCursor<Octs> {
    /// Creates a new cursor positioned at the start of `octets`.
    pub fn new(octets: Octs) -> Self {
        BitCursor {
            octets,
            next: 0,
            carry: 0,
            carry_len: 0,
        }
    }

    /// Converts the cursor into the underlying octets.
    pub fn into_octets(self) -> Octs {
        self.octets
    }

    /// Returns the index of the next octet to be loaded.
    ///
    /// If the cursor is in the middle of an octet, this is the index of the
    /// octet following it.
    pub fn current_byte(&self) -> usize {
        self.next
    }

    /// Returns the absolute position of the next unread bit.
    pub fn bit_position(&self) -> usize {
        self.next * 8 - self.carry_len as usize
    }

    /// Returns whether the next unread bit starts an octet.
    pub fn is_aligned(&self) -> bool {
        self.carry_len == 0
    }
}

impl<Octs: AsRef<[u8]>> BitCursor<Octs> {
    /// Returns the complete underlying octets slice.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns the length of the underlying octets slice.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether the underlying octets slice is empty.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the number of bits left for sequential reading.
    pub fn remaining_bits(&self) -> usize {
        (self.len() * 8).saturating_sub(self.bit_position())
    }

    fn byte(&self, index: usize) -> Result<u8, BitError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(BitError::OutOfBounds { byte: index, len })
    }

    /// Reads `bits` bits starting at an absolute bit address.
    ///
    /// The address is given as the index of an octet and the number of the
    /// bit within that octet, with 0 being the most significant bit. The
    /// sequential state of the cursor is not affected.
    pub fn read_at<T: Uint>(
        &self,
        bits: u32,
        byte: usize,
        bit: u8,
    ) -> Result<T, BitError> {
        check_width::<T>(bits)?;
        if bit > 7 {
            return Err(BitError::InvalidBitOffset(bit));
        }
        if bits == 0 {
            return Ok(T::from_u64(0));
        }
        let len = self.len();
        let span = (usize::from(bit) + bits as usize - 1) / 8;
        let last = byte
            .checked_add(span)
            .ok_or(BitError::OutOfBounds { byte, len })?;
        if last >= len {
            return Err(BitError::OutOfBounds {
                byte: cmp::max(byte, len),
                len,
            });
        }
        let slice = self.as_slice();
        let mut value = 0u64;
        for i in 0..bits as usize {
            let pos = usize::from(bit) + i;
            let octet = slice[byte + pos / 8];
            value = (value << 1) | u64::from((octet >> (7 - pos % 8)) & 1);
        }
        Ok(T::from_u64(value))
    }

    /// Reads a single octet at the given index.
    pub fn read_u8_at(&self, byte: usize) -> Result<u8, BitError> {
        self.read_at(8, byte, 0)
    }

    /// Fills `buf` from the octets starting at `byte`.
    pub fn read_buf_at(
        &self,
        byte: usize,
        buf: &mut [u8],
    ) -> Result<(), BitError> {
        let len = self.len();
        let end = byte
            .checked_add(buf.len())
            .ok_or(BitError::OutOfBounds { byte, len })?;
        match self.as_slice().get(byte..end) {
            Some(slice) => {
                buf.copy_from_slice(slice);
                Ok(())
            }
            None => Err(BitError::OutOfBounds {
                byte: cmp::max(byte, len),
                len,
            }),
        }
    }

    /// Consumes the next `bits` bits.
    ///
    /// Bits left over from a previous read are used first. Whole octets are
    /// loaded from the underlying slice as needed, any part of the last of
    /// them that isn’t consumed is kept for the next read.
    pub fn next<T: Uint>(&mut self, bits: u32) -> Result<T, BitError> {
        check_width::<T>(bits)?;
        let mut value = 0u64;
        let mut remaining = bits;
        while remaining > 0 {
            if self.carry_len == 0 {
                self.carry = self.byte(self.next)?;
                self.next += 1;
                self.carry_len = 8;
            }
            let take = cmp::min(remaining, self.carry_len);
            let chunk = u64::from(self.carry) >> (8 - take);
            value = (value << take) | chunk;
            self.carry = ((u16::from(self.carry) << take) & 0xFF) as u8;
            self.carry_len -= take;
            remaining -= take;
        }
        Ok(T::from_u64(value))
    }

    /// Consumes the next octet.
    pub fn next_u8(&mut self) -> Result<u8, BitError> {
        self.next(8)
    }

    /// Consumes the next 16 bits as a big endian integer.
    pub fn next_u16(&mut self) -> Result<u16, BitError> {
        self.next(16)
    }

    /// Consumes the next 32 bits as a big endian integer.
    pub fn next_u32(&mut self) -> Result<u32, BitError> {
        self.next(32)
    }

    /// Fills `buf` with the next octets.
    pub fn next_buf(&mut self, buf: &mut [u8]) -> Result<(), BitError> {
        if buf.len() * 8 > self.remaining_bits() {
            return Err(BitError::OutOfBounds {
                byte: self.len(),
                len: self.len(),
            });
        }
        for octet in buf.iter_mut() {
            *octet = self.next_u8()?;
        }
        Ok(())
    }
}

//------------ BitWriter -----------------------------------------------------

/// A bit writer with a fixed capacity.
///
/// The writer owns a zeroed buffer of the capacity given upon creation. It
/// never grows: a write that doesn’t fit fails with
/// [`BitError::OutOfBounds`] and leaves the buffer untouched.
#[derive(Clone, Debug)]
pub struct BitWriter {
    /// The output buffer. Its length is the capacity.
    buf: Vec<u8>,

    /// The index of the octet currently being written.
    byte: usize,

    /// The next bit to be written within `byte`, 7 being the most
    /// significant bit.
    bit: u8,
}

impl BitWriter {
    /// Creates a new writer with room for `capacity` octets.
    pub fn new(capacity: usize) -> Self {
        BitWriter {
            buf: vec![0; capacity],
            byte: 0,
            bit: 7,
        }
    }

    /// Returns the capacity of the writer in octets.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of fully or partially written octets.
    pub fn current_byte(&self) -> usize {
        if self.bit == 7 {
            self.byte
        } else {
            self.byte + 1
        }
    }

    /// Returns whether the next bit starts a new octet.
    pub fn is_aligned(&self) -> bool {
        self.bit == 7
    }

    /// Returns the number of bits that can still be written.
    pub fn remaining_bits(&self) -> usize {
        (self.buf.len().saturating_sub(self.byte) * 8)
            .saturating_sub(usize::from(7 - self.bit))
    }

    /// Returns the octets written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.current_byte()]
    }

    fn write_bit(&mut self, set: bool) -> Result<(), BitError> {
        let len = self.buf.len();
        let octet = self
            .buf
            .get_mut(self.byte)
            .ok_or(BitError::OutOfBounds { byte: self.byte, len })?;
        if set {
            *octet |= 1 << self.bit
        } else {
            *octet &= !(1 << self.bit)
        }
        if self.bit == 0 {
            self.bit = 7;
            self.byte += 1;
        } else {
            self.bit -= 1;
        }
        Ok(())
    }

    fn reserve(&self, bits: usize) -> Result<(), BitError> {
        if bits > self.remaining_bits() {
            Err(BitError::OutOfBounds {
                byte: cmp::max(self.byte, self.buf.len()),
                len: self.buf.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Appends the lowest `bits` bits of `value`.
    pub fn write<T: Uint>(
        &mut self,
        bits: u32,
        value: T,
    ) -> Result<(), BitError> {
        check_width::<T>(bits)?;
        self.reserve(bits as usize)?;
        let value = value.into_u64();
        for i in (0..bits).rev() {
            self.write_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Writes `value` starting at the beginning of octet `byte`.
    ///
    /// The write position is restored afterwards, whether the write
    /// succeeded or not.
    pub fn write_at<T: Uint>(
        &mut self,
        bits: u32,
        value: T,
        byte: usize,
    ) -> Result<(), BitError> {
        let saved = (self.byte, self.bit);
        self.byte = byte;
        self.bit = 7;
        let res = self.write(bits, value);
        (self.byte, self.bit) = saved;
        res
    }

    /// Appends an octet.
    pub fn write_u8(&mut self, value: u8) -> Result<(), BitError> {
        self.write(8, value)
    }

    /// Appends a 16 bit integer in network byte order.
    pub fn write_u16(&mut self, value: u16) -> Result<(), BitError> {
        self.write(16, value)
    }

    /// Appends a 32 bit integer in network byte order.
    pub fn write_u32(&mut self, value: u32) -> Result<(), BitError> {
        self.write(32, value)
    }

    /// Appends all octets of `slice`.
    pub fn write_slice(&mut self, slice: &[u8]) -> Result<(), BitError> {
        self.reserve(slice.len() * 8)?;
        for &octet in slice {
            self.write_u8(octet)?;
        }
        Ok(())
    }

    /// Copies the written octets to the beginning of `target`.
    ///
    /// Returns the number of octets copied.
    pub fn finish_into(&self, target: &mut [u8]) -> Result<usize, BitError> {
        let written = self.as_slice();
        match target.get_mut(..written.len()) {
            Some(target) => {
                target.copy_from_slice(written);
                Ok(written.len())
            }
            None => Err(BitError::OutOfBounds {
                byte: target.len(),
                len: target.len(),
            }),
        }
    }

    /// Converts the writer into the written octets.
    pub fn into_bytes(mut self) -> Vec<u8> {
        let len = self.current_byte();
        self.buf.truncate(len);
        self.buf
    }

    /// Converts the writer into a cursor over the written octets.
    pub fn into_cursor(self) -> BitCursor<Vec<u8>> {
        BitCursor::new(self.into_bytes())
    }
}

//============ Error Types ===================================================

//------------ BitError ------------------------------------------------------

/// An access of the bit layer failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BitError {
    /// An octet at or past the end of the buffer was needed.
    OutOfBounds {
        /// The index of the offending octet.
        byte: usize,

        /// The length of the buffer.
        len: usize,
    },

    /// A bit offset outside of 0 to 7 was given.
    InvalidBitOffset(u8),

    /// More bits were requested than the target type can hold.
    InvalidBitWidth {
        /// The number of bits requested.
        bits: u32,

        /// The width of the target type.
        max: u32,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BitError::OutOfBounds { byte, len } => {
                write!(f, "out of bounds access at octet {byte} of {len}")
            }
            BitError::InvalidBitOffset(bit) => {
                write!(f, "invalid bit offset {bit}")
            }
            BitError::InvalidBitWidth { bits, max } => {
                write!(f, "cannot fit {bits} bits into {max}")
            }
        }
    }
}

impl std::error::Error for BitError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    /// Returns the diagnostics string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//------------ ParseError ----------------------------------------------------

/// Decoding wire format data failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Reading from the underlying buffer failed.
    Bits(BitError),

    /// The data doesn’t follow the wire format.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

impl From<BitError> for ParseError {
    fn from(err: BitError) -> Self {
        ParseError::Bits(err)
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Bits(ref err) => write!(f, "parsing error: {err}"),
            ParseError::Form(ref err) => write!(f, "parsing error: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Bits(err) => Some(err),
            ParseError::Form(err) => Some(err),
        }
    }
}

//------------ ComposeError --------------------------------------------------

/// Encoding data into wire format failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// Writing to the output buffer failed.
    Bits(BitError),

    /// The data can’t be represented in wire format.
    Form(FormError),
}

impl ComposeError {
    /// Creates a new compose error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

impl From<BitError> for ComposeError {
    fn from(err: BitError) -> Self {
        ComposeError::Bits(err)
    }
}

impl From<FormError> for ComposeError {
    fn from(err: FormError) -> Self {
        ComposeError::Form(err)
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::Bits(ref err) => {
                write!(f, "composing error: {err}")
            }
            ComposeError::Form(ref err) => {
                write!(f, "composing error: {err}")
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Bits(err) => Some(err),
            ComposeError::Form(err) => Some(err),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    static BITS: &[u8] = &[0xDB, 0x6D, 0xB6, 0xDB, 0xAA, 0x00, 0x5C, 0x3F];

    #[test]
    fn read_at_basics() {
        let cursor = BitCursor::new(BITS);
        assert_eq!(cursor.read_at::<u32>(32, 0, 0), Ok(0xDB6D_B6DB));
        assert_eq!(cursor.read_at::<u8>(3, 0, 0), Ok(0b110));
        assert_eq!(cursor.read_at::<u8>(3, 0, 1), Ok(0b101));
        assert_eq!(cursor.read_at::<u8>(7, 0, 3), Ok(0b110_1101));
        assert_eq!(cursor.read_at::<u16>(12, 4, 4), Ok(0xA00));
        assert_eq!(cursor.read_u8_at(6), Ok(0x5C));
    }

    #[test]
    fn read_at_leaves_cursor_alone() {
        let mut cursor = BitCursor::new(BITS);
        assert_eq!(cursor.next::<u8>(4), Ok(0xD));
        assert_eq!(cursor.read_at::<u8>(8, 4, 0), Ok(0xAA));
        assert_eq!(cursor.bit_position(), 4);
        assert_eq!(cursor.next::<u8>(8), Ok(0xB6));
    }

    #[test]
    fn read_at_bounds() {
        let cursor = BitCursor::new(BITS);
        let last = BITS.len() - 1;
        assert_eq!(cursor.read_at::<u8>(1, last, 7), Ok(1));
        assert_eq!(
            cursor.read_at::<u8>(1, last + 1, 0),
            Err(BitError::OutOfBounds { byte: 8, len: 8 })
        );
        assert!(matches!(
            cursor.read_at::<u16>(9, last, 0),
            Err(BitError::OutOfBounds { .. })
        ));
        assert!(matches!(
            cursor.read_at::<u8>(1, usize::MAX, 0),
            Err(BitError::OutOfBounds { .. })
        ));
    }

    #[rstest]
    #[case(8)]
    #[case(9)]
    #[case(200)]
    fn read_at_invalid_bit_offset(#[case] bit: u8) {
        let cursor = BitCursor::new(BITS);
        assert_eq!(
            cursor.read_at::<u8>(1, 0, bit),
            Err(BitError::InvalidBitOffset(bit))
        );
    }

    #[test]
    fn invalid_width() {
        let mut cursor = BitCursor::new(BITS);
        assert_eq!(
            cursor.next::<u8>(9),
            Err(BitError::InvalidBitWidth { bits: 9, max: 8 })
        );
        assert_eq!(
            cursor.read_at::<u16>(17, 0, 0),
            Err(BitError::InvalidBitWidth { bits: 17, max: 16 })
        );
        assert_eq!(cursor.bit_position(), 0);
    }

    #[test]
    fn next_carries_bits() {
        let mut cursor = BitCursor::new(&[0xAA, 0x00, 0x5C][..]);
        assert_eq!(cursor.next::<u8>(4), Ok(0xA));
        assert_eq!(cursor.next::<u8>(4), Ok(0xA));
        assert!(cursor.is_aligned());
        assert_eq!(cursor.next::<u8>(1), Ok(0));
        assert_eq!(cursor.next::<u16>(10), Ok(0b0000_0000_10));
        assert_eq!(cursor.bit_position(), 19);
        assert_eq!(cursor.current_byte(), 3);
        assert_eq!(cursor.next::<u8>(5), Ok(0b11100));
        assert!(matches!(
            cursor.next::<u8>(1),
            Err(BitError::OutOfBounds { byte: 3, len: 3 })
        ));
    }

    #[test]
    fn next_buf() {
        let mut cursor = BitCursor::new(BITS);
        let mut buf = [0u8; 3];
        cursor.next_buf(&mut buf).unwrap();
        assert_eq!(buf, [0xDB, 0x6D, 0xB6]);
        let mut buf = [0u8; 6];
        assert!(cursor.next_buf(&mut buf).is_err());
        assert_eq!(cursor.current_byte(), 3);
    }

    #[rstest]
    fn sequential_matches_random_access(
        #[values(0, 1, 3, 7, 8, 13, 16)] skip: u32,
        #[values(1, 2, 5, 8, 11, 16, 24, 32)] width: u32,
    ) {
        if (skip + width) as usize > BITS.len() * 8 {
            return;
        }
        let mut cursor = BitCursor::new(BITS);
        cursor.next::<u64>(skip).unwrap();
        let random = cursor
            .read_at::<u32>(width, (skip / 8) as usize, (skip % 8) as u8)
            .unwrap();
        assert_eq!(cursor.next::<u32>(width).unwrap(), random);
    }

    #[test]
    fn write_bits() {
        let mut writer = BitWriter::new(4);
        writer.write(6, 0xAAu8).unwrap();
        assert_eq!(writer.current_byte(), 1);
        assert!(!writer.is_aligned());
        writer.write(2, 0b11u8).unwrap();
        writer.write_u16(0x1234).unwrap();
        assert_eq!(writer.as_slice(), &[0b1010_1011, 0x12, 0x34]);
        assert_eq!(writer.remaining_bits(), 8);
        assert!(matches!(
            writer.write_u16(0xFFFF),
            Err(BitError::OutOfBounds { .. })
        ));
        assert_eq!(writer.current_byte(), 3);
        writer.write_u8(0x56).unwrap();
        assert!(writer.write(1, 1u8).is_err());
    }

    #[test]
    fn write_at_restores_position() {
        let mut writer = BitWriter::new(8);
        writer.write_u8(0xFF).unwrap();
        let len_at = writer.current_byte();
        writer.write_u16(0).unwrap();
        writer.write_slice(b"abc").unwrap();
        writer.write(3, 0b101u8).unwrap();
        writer
            .write_at(16, (writer.current_byte() - len_at - 2) as u16, len_at)
            .unwrap();
        assert_eq!(writer.current_byte(), 7);
        writer.write(5, 0b1_0001u8).unwrap();
        assert_eq!(
            writer.as_slice(),
            &[0xFF, 0x00, 0x04, b'a', b'b', b'c', 0b1011_0001]
        );
        assert!(writer.write_at(16, 1u16, 7).is_err());
        assert_eq!(writer.current_byte(), 7);
    }

    #[test]
    fn finish() {
        let mut writer = BitWriter::new(512);
        writer.write_slice(b"\x01\x02\x03").unwrap();
        let mut out = [0u8; 3];
        assert_eq!(writer.finish_into(&mut out), Ok(3));
        assert_eq!(out, [1, 2, 3]);
        let mut short = [0u8; 2];
        assert!(writer.finish_into(&mut short).is_err());
        let mut cursor = writer.into_cursor();
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.next_u16(), Ok(0x0102));
    }

    #[test]
    fn error_chain() {
        use std::error::Error;

        let err = ParseError::from(BitError::OutOfBounds { byte: 3, len: 3 });
        assert_eq!(
            err.source().unwrap().to_string(),
            "out of bounds access at octet 3 of 3"
        );
    }

    #[test]
    fn error_display_names_bit_cause() {
        assert_eq!(
            ParseError::from(BitError::InvalidBitOffset(9)).to_string(),
            "parsing error: invalid bit offset 9"
        );
        assert_eq!(
            ParseError::from(BitError::OutOfBounds { byte: 3, len: 3 })
                .to_string(),
            "parsing error: out of bounds access at octet 3 of 3"
        );
        assert_eq!(
            ComposeError::from(BitError::InvalidBitWidth { bits: 9, max: 8 })
                .to_string(),
            "composing error: cannot fit 9 bits into 8"
        );
        assert_eq!(
            ComposeError::form_error("long record data").to_string(),
            "composing error: long record data"
        );
    }
}
