//! Interned domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::label::{Label, LabelType, NameError};
use crate::base::wire::{
    BitCursor, BitWriter, ComposeError, FormError, ParseError,
};
use core::fmt;
use std::collections::HashMap;
use tracing::debug;

//------------ NameId --------------------------------------------------------

/// A handle to a name kept by a [`NameInterner`].
///
/// A handle is only meaningful for the interner that issued it.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NameId(u32);

impl NameId {
    /// The handle of the root name.
    ///
    /// Every interner contains the root name under this handle.
    pub const ROOT: NameId = NameId(0);

    /// Returns whether this is the handle of the root name.
    #[must_use]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NameId({})", self.0)
    }
}

//------------ Segment -------------------------------------------------------

/// A name as stored in the interner.
#[derive(Clone, Debug)]
struct Segment {
    /// The first label of the name.
    label: Label,

    /// The presentation format of the complete name.
    name: Box<str>,

    /// The name without its first label.
    ///
    /// This is `None` for the root name only.
    suffix: Option<NameId>,

    /// The length of the uncompressed wire format of the name.
    wire_len: usize,
}

//------------ NameInterner --------------------------------------------------

/// The names of a message.
///
/// The interner keeps every name exactly once, keyed by its presentation
/// format. Each name is stored as its first label and a handle to the name
/// that follows it. Names sharing a suffix therefore share the segments
/// for that suffix.
///
/// Names enter the interner either from their presentation format through
/// [`segment_for`][Self::segment_for] or from a message through
/// [`import`][Self::import] and [`import_at`][Self::import_at]. They are
/// written to a message, possibly compressed, by
/// [`export`][Self::export].
#[derive(Clone, Debug)]
pub struct NameInterner {
    /// The segments. The root name is always the first one.
    segments: Vec<Segment>,

    /// The handle for each presentation format.
    index: HashMap<Box<str>, NameId>,

    /// The maximum number of compression pointers followed for one name.
    max_pointer_hops: u8,
}

impl NameInterner {
    /// The maximum length of the wire format of a name.
    pub const MAX_WIRE_LEN: usize = 255;

    /// The default limit for compression pointers followed for one name.
    pub const DEFAULT_POINTER_HOPS: u8 = 64;

    /// Creates a new interner containing only the root name.
    #[must_use]
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert(Box::from("."), NameId::ROOT);
        NameInterner {
            segments: vec![Segment {
                label: Label::root(),
                name: Box::from("."),
                suffix: None,
                wire_len: 1,
            }],
            index,
            max_pointer_hops: Self::DEFAULT_POINTER_HOPS,
        }
    }

    /// Returns the maximum number of pointers followed while importing.
    #[must_use]
    pub fn max_pointer_hops(&self) -> u8 {
        self.max_pointer_hops
    }

    /// Sets the maximum number of pointers followed while importing.
    pub fn set_max_pointer_hops(&mut self, hops: u8) {
        self.max_pointer_hops = hops
    }

    /// Returns the number of names in the interner, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the interner contains nothing but the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns the handle for a name if the interner knows it.
    pub fn get(&self, name: &str) -> Option<NameId> {
        let labels = split_labels(name).ok()?;
        if labels.is_empty() {
            return Some(NameId::ROOT);
        }
        let key = labels
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        self.index.get(key.as_str()).copied()
    }

    /// Returns whether `id` was issued by this interner.
    #[must_use]
    pub fn contains(&self, id: NameId) -> bool {
        id.index() < self.segments.len()
    }

    /// Returns the presentation format of a name.
    ///
    /// The root name is presented as a single dot, all other names without
    /// the final dot.
    ///
    /// # Panics
    ///
    /// The method panics if `id` was not issued by this interner.
    #[must_use]
    pub fn name(&self, id: NameId) -> &str {
        &self.segments[id.index()].name
    }

    /// Returns the first label of a name.
    ///
    /// # Panics
    ///
    /// The method panics if `id` was not issued by this interner.
    #[must_use]
    pub fn label(&self, id: NameId) -> &Label {
        &self.segments[id.index()].label
    }

    /// Returns the name following the first label of a name.
    ///
    /// Returns `None` for the root name.
    ///
    /// # Panics
    ///
    /// The method panics if `id` was not issued by this interner.
    #[must_use]
    pub fn suffix(&self, id: NameId) -> Option<NameId> {
        self.segments[id.index()].suffix
    }

    /// Returns the length of the uncompressed wire format of a name.
    ///
    /// # Panics
    ///
    /// The method panics if `id` was not issued by this interner.
    #[must_use]
    pub fn wire_len(&self, id: NameId) -> usize {
        self.segments[id.index()].wire_len
    }

    /// Returns the handle for a name given in presentation format.
    ///
    /// The name and all its suffixes are added if they aren’t known yet.
    /// A single trailing dot is accepted and ignored. Both the empty
    /// string and a single dot refer to the root.
    pub fn segment_for(&mut self, name: &str) -> Result<NameId, NameError> {
        let labels = split_labels(name)?;
        self.intern(labels)
    }

    /// Adds the name made of `labels` and returns its handle.
    fn intern(&mut self, labels: Vec<Label>) -> Result<NameId, NameError> {
        let wire_len = labels.iter().map(Label::wire_len).sum::<usize>() + 1;
        if wire_len > Self::MAX_WIRE_LEN {
            return Err(NameError::LongName);
        }
        let mut suffix = NameId::ROOT;
        for label in labels.into_iter().rev() {
            suffix = self.intern_segment(label, suffix);
        }
        Ok(suffix)
    }

    /// Returns the segment for `label` followed by `suffix`.
    fn intern_segment(&mut self, label: Label, suffix: NameId) -> NameId {
        let name = if suffix.is_root() {
            label.to_string()
        } else {
            let mut name = label.to_string();
            name.push('.');
            name.push_str(self.name(suffix));
            name
        };
        if let Some(id) = self.index.get(name.as_str()) {
            return *id;
        }
        let id = NameId(self.segments.len() as u32);
        let name = Box::<str>::from(name);
        self.index.insert(name.clone(), id);
        self.segments.push(Segment {
            wire_len: label.wire_len() + self.wire_len(suffix),
            label,
            name,
            suffix: Some(suffix),
        });
        id
    }

    /// Takes a name from the beginning of `cursor`.
    ///
    /// If the name ends in a compression pointer, the remainder of the name
    /// is read through [`import_at`][Self::import_at] and the cursor only
    /// advances past the two octets of the pointer.
    pub fn import<Octs: AsRef<[u8]>>(
        &mut self,
        cursor: &mut BitCursor<Octs>,
    ) -> Result<NameId, ParseError> {
        let mut labels = Vec::new();
        let mut wire_len = 1;
        let start = cursor.current_byte();
        loop {
            let pos = cursor.current_byte();
            match LabelType::parse(cursor)? {
                LabelType::Normal(0) => break,
                LabelType::Normal(len) => {
                    wire_len += len + 1;
                    check_wire_len(wire_len)?;
                    labels.push(Label::parse(cursor, len)?);
                }
                LabelType::Compressed(ptr) => {
                    self.resolve_pointer(
                        cursor, pos, ptr, start, wire_len, &mut labels,
                    )?;
                    break;
                }
            }
        }
        self.intern(labels).map_err(name_error)
    }

    /// Reads a name starting at octet `byte` of `cursor`.
    ///
    /// The sequential position of the cursor is not changed. Any
    /// compression pointer encountered must point to a position before
    /// the start of the labels read so far. The number of pointers
    /// followed is limited by [`max_pointer_hops`][Self::max_pointer_hops].
    pub fn import_at<Octs: AsRef<[u8]>>(
        &mut self,
        cursor: &BitCursor<Octs>,
        byte: usize,
    ) -> Result<NameId, ParseError> {
        let mut labels = Vec::new();
        self.collect_at(cursor, byte, 0, 1, &mut labels)?;
        self.intern(labels).map_err(name_error)
    }

    /// Follows the pointer at `pos` to `ptr`.
    ///
    /// `start` is the position of the first label of the run of labels the
    /// pointer ends.
    fn resolve_pointer<Octs: AsRef<[u8]>>(
        &self,
        cursor: &BitCursor<Octs>,
        pos: usize,
        ptr: usize,
        start: usize,
        wire_len: usize,
        labels: &mut Vec<Label>,
    ) -> Result<(), ParseError> {
        if ptr >= start {
            debug!(pos, ptr, "compression pointer not pointing backwards");
            return Err(FormError::new(
                "compression pointer not pointing backwards",
            )
            .into());
        }
        self.collect_at(cursor, ptr, 1, wire_len, labels)
    }

    /// Collects the labels of the name at `byte` without consuming them.
    ///
    /// `hops` is the number of pointers already followed for this name and
    /// `wire_len` the wire length of the labels already collected plus one
    /// for the root label.
    fn collect_at<Octs: AsRef<[u8]>>(
        &self,
        cursor: &BitCursor<Octs>,
        byte: usize,
        mut hops: u8,
        mut wire_len: usize,
        labels: &mut Vec<Label>,
    ) -> Result<(), ParseError> {
        let mut start = byte;
        let mut pos = byte;
        loop {
            if hops > self.max_pointer_hops {
                debug!(pos, hops, "too many compression pointers");
                return Err(
                    FormError::new("too many compression pointers").into()
                );
            }
            let ltype = LabelType::parse_at(cursor, pos)?;
            match ltype {
                LabelType::Normal(0) => return Ok(()),
                LabelType::Normal(len) => {
                    wire_len += len + 1;
                    check_wire_len(wire_len)?;
                    labels.push(Label::parse_at(cursor, pos + 1, len)?);
                    pos += len + 1;
                }
                LabelType::Compressed(ptr) => {
                    if ptr >= start {
                        debug!(
                            pos, ptr,
                            "compression pointer not pointing backwards"
                        );
                        return Err(FormError::new(
                            "compression pointer not pointing backwards",
                        )
                        .into());
                    }
                    hops += 1;
                    start = ptr;
                    pos = ptr;
                }
            }
        }
    }

    /// Appends the wire format of a name to `writer`.
    ///
    /// Every segment written is recorded in `positions`. If a segment has
    /// been written before, a compression pointer to it ends the name.
    /// Otherwise the name ends with the root label.
    pub fn export(
        &self,
        writer: &mut BitWriter,
        positions: &mut WritePositions,
        id: NameId,
    ) -> Result<(), ComposeError> {
        if !self.contains(id) {
            return Err(ComposeError::form_error("unknown name"));
        }
        let mut id = id;
        loop {
            let segment = &self.segments[id.index()];
            let suffix = match segment.suffix {
                Some(suffix) => suffix,
                None => {
                    writer.write_u8(0)?;
                    return Ok(());
                }
            };
            if let Some(pos) = positions.get(id) {
                writer.write_u16(0xC000 | pos)?;
                return Ok(());
            }
            positions.insert(id, writer.current_byte());
            writer.write_u8(segment.label.len() as u8)?;
            writer.write_slice(segment.label.as_slice())?;
            id = suffix;
        }
    }
}

//--- Default

impl Default for NameInterner {
    fn default() -> Self {
        Self::new()
    }
}

//------------ WritePositions ------------------------------------------------

/// The positions names have been written at during one export.
///
/// Only positions that can be expressed in a compression pointer, i.e.,
/// that are less than 2^14, are kept.
#[derive(Clone, Debug, Default)]
pub struct WritePositions(HashMap<NameId, u16>);

impl WritePositions {
    /// Creates a new, empty position table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position a name has been written at.
    #[must_use]
    pub fn get(&self, id: NameId) -> Option<u16> {
        self.0.get(&id).copied()
    }

    /// Records the position a name is written at.
    ///
    /// Positions that don’t fit into a compression pointer are ignored as
    /// are names that have been recorded before.
    pub fn insert(&mut self, id: NameId, pos: usize) {
        if let Ok(pos) = u16::try_from(pos) {
            if pos < 0x4000 {
                self.0.entry(id).or_insert(pos);
            }
        }
    }

    /// Returns the number of recorded names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no names have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Forgets all recorded positions.
    pub fn clear(&mut self) {
        self.0.clear()
    }
}

//------------ Helper Functions ----------------------------------------------

/// Splits the presentation format of a name into its labels.
///
/// The root label is not included.
fn split_labels(name: &str) -> Result<Vec<Label>, NameError> {
    if name.is_empty() || name == "." {
        return Ok(Vec::new());
    }
    let mut labels = Vec::new();
    let mut current = String::new();
    let mut chars = name.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if current.is_empty() {
                    return Err(NameError::EmptyLabel);
                }
                labels.push(current.parse()?);
                current.clear();
            }
            '\\' => {
                current.push(ch);
                current.push(chars.next().ok_or(NameError::BadEscape)?);
            }
            _ => current.push(ch),
        }
    }
    // A trailing dot leaves nothing behind.
    if !current.is_empty() {
        labels.push(current.parse()?);
    }
    Ok(labels)
}

fn check_wire_len(len: usize) -> Result<(), ParseError> {
    if len > NameInterner::MAX_WIRE_LEN {
        Err(FormError::new("long domain name").into())
    } else {
        Ok(())
    }
}

fn name_error(err: NameError) -> ParseError {
    match err {
        NameError::LongName => FormError::new("long domain name").into(),
        _ => FormError::new("invalid domain name").into(),
    }
}

//============ Testing =======================================================
