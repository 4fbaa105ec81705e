//! Accessing and creating DNS messages.
//!
//! This module defines [`Message`], the complete, decoded representation
//! of a DNS message. A message is created either by decoding its wire
//! format via [`Message::decode`] or by starting with an empty message
//! and adding questions and records to it. In either case, all domain
//! names of a message are kept by the message’s own [`NameInterner`] and
//! questions and records refer to them via [`NameId`] handles.
//!
//! A message is turned into its wire format via [`Message::encode`] which
//! compresses domain names wherever possible.

use super::header::{CountOverflow, Header, HeaderCounts, HeaderSection};
use super::iana::{Class, Rcode, Rtype};
use super::name::{NameError, NameId, NameInterner, WritePositions};
use super::question::Question;
use super::record::{Record, Section};
use super::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use crate::rdata::RecordData;
use crate::utils::config::DefMinMax;
use core::fmt;
use serde_json::{json, Map, Value};
use tracing::{debug, trace};

//------------ Configuration Constants ---------------------------------------

/// The capacity of the buffer created by [`Message::to_vec`].
///
/// The default is the classic UDP limit of 512 octets. The minimum is the
/// size of the header section and the maximum is the largest message that
/// can be sent over TCP.
const MAX_SIZE: DefMinMax<usize> = DefMinMax::new(512, 12, 65535);

/// The number of compression pointers followed for a single name.
const MAX_POINTER_HOPS: DefMinMax<u8> = DefMinMax::new(64, 1, 127);

//------------ MessageConfig -------------------------------------------------

/// Configuration for decoding and encoding messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MessageConfig {
    /// The capacity used by [`Message::to_vec`].
    max_size: usize,

    /// The limit for compression pointers followed for one name.
    max_pointer_hops: u8,
}

impl MessageConfig {
    /// Creates a new, default config.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the capacity used when encoding into a new vec.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Sets the capacity used when encoding into a new vec.
    ///
    /// The value has to be between 12 and 65,535. The default value is
    /// 512. If the value is outside the range, it is trimmed to fit.
    pub fn set_max_size(&mut self, value: usize) {
        self.max_size = MAX_SIZE.limit(value)
    }

    /// Returns the limit for compression pointers followed for one name.
    #[must_use]
    pub fn max_pointer_hops(&self) -> u8 {
        self.max_pointer_hops
    }

    /// Sets the limit for compression pointers followed for one name.
    ///
    /// The value has to be between 1 and 127. The default value is 64. If
    /// the value is outside the range, it is trimmed to fit.
    pub fn set_max_pointer_hops(&mut self, value: u8) {
        self.max_pointer_hops = MAX_POINTER_HOPS.limit(value)
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_SIZE.default(),
            max_pointer_hops: MAX_POINTER_HOPS.default(),
        }
    }
}

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// A message consists of a header section and four sections of entries:
/// the question section, and the answer, authority, and additional
/// sections containing resource records.
///
/// The section counts of the header always match the number of entries
/// in the sections. They can only be changed by adding entries through
/// [`add_question`][Self::add_question] and
/// [`add_record`][Self::add_record].
///
/// Domain names are kept by the message’s [`NameInterner`] and referred
/// to by [`NameId`] handles. Use [`name`][Self::name] to get the
/// presentation format of a name. Two messages compare equal if all their
/// fields and names are equal, regardless of the handles.
#[derive(Clone, Debug, Default)]
pub struct Message {
    /// The header without the counts.
    header: Header,

    /// The section counts.
    counts: HeaderCounts,

    /// The question section.
    questions: Vec<Question>,

    /// The answer section.
    answer: Vec<Record>,

    /// The authority section.
    authority: Vec<Record>,

    /// The additional section.
    additional: Vec<Record>,

    /// The domain names of the message.
    names: NameInterner,

    /// The configuration of the message.
    config: MessageConfig,
}

/// # Creation and Conversion
///
impl Message {
    /// Creates a new, empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty message with the given configuration.
    #[must_use]
    pub fn with_config(config: MessageConfig) -> Self {
        let mut res = Self::default();
        res.names.set_max_pointer_hops(config.max_pointer_hops());
        res.config = config;
        res
    }

    /// Decodes a message from its wire format.
    pub fn decode(octets: &[u8]) -> Result<Self, MessageError> {
        Self::decode_with_config(octets, MessageConfig::default())
    }

    /// Decodes a message from its wire format using the given config.
    ///
    /// Octets following the last record announced in the header are
    /// ignored.
    pub fn decode_with_config(
        octets: &[u8],
        config: MessageConfig,
    ) -> Result<Self, MessageError> {
        trace!(len = octets.len(), "decoding message");
        let mut res = Self::with_config(config);
        let mut cursor = BitCursor::new(octets);
        let section = HeaderSection::parse(&mut cursor)
            .map_err(|err| rejected("header", err))?;
        res.header = *section.header();
        res.counts = *section.counts();
        for _ in 0..res.counts.qdcount() {
            let question = Question::parse(&mut cursor, &mut res.names)
                .map_err(|err| rejected("question", err))?;
            res.questions.push(question);
        }
        for section in Section::ALL {
            for _ in 0..res.count(section) {
                let record = Record::parse(&mut cursor, &mut res.names)
                    .map_err(|err| rejected(section, err))?;
                res.section_mut(section).push(record);
            }
        }
        trace!(
            id = res.header.id(),
            names = res.names.len(),
            trailing = cursor.remaining_bits() / 8,
            "decoded message"
        );
        Ok(res)
    }

    /// Encodes the message into `target`.
    ///
    /// Returns the number of octets written. Fails if `target` is too
    /// short for the message. Only the octets of the message are written,
    /// the remainder of `target` is left untouched.
    pub fn encode(&self, target: &mut [u8]) -> Result<usize, MessageError> {
        let mut writer = BitWriter::new(target.len());
        self.compose(&mut writer)?;
        let len = writer.finish_into(target).map_err(ComposeError::from)?;
        trace!(id = self.header.id(), len, "encoded message");
        Ok(len)
    }

    /// Encodes the message into a new vec.
    ///
    /// The message may be at most as long as the configured
    /// [`max_size`][MessageConfig::max_size].
    pub fn to_vec(&self) -> Result<Vec<u8>, MessageError> {
        let mut writer = BitWriter::new(self.config.max_size());
        self.compose(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Appends the wire format of the message to `writer`.
    ///
    /// Name compression only refers to names written by this call.
    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        let mut positions = WritePositions::new();
        let mut section = HeaderSection::new();
        *section.header_mut() = self.header;
        *section.counts_mut() = self.counts;
        section.compose(writer)?;
        for question in &self.questions {
            question.compose(writer, &self.names, &mut positions)?;
        }
        for section in Section::ALL {
            for record in self.section(section) {
                record.compose(writer, &self.names, &mut positions)?;
            }
        }
        Ok(())
    }

    /// Starts an answer to the given query.
    ///
    /// Specifically, this sets the ID, QR, OPCODE, RD, and RCODE fields
    /// in the header and copies the query’s questions.
    pub fn start_answer(
        query: &Message,
        rcode: Rcode,
    ) -> Result<Self, MessageError> {
        let mut res = Self::with_config(query.config);
        res.header.set_id(query.header.id());
        res.header.set_qr(true);
        res.header.set_opcode(query.header.opcode());
        res.header.set_rd(query.header.rd());
        res.header.set_rcode(rcode);
        for question in &query.questions {
            res.add_question(
                query.name(*question.qname()),
                question.qtype(),
                question.qclass(),
            )?;
        }
        Ok(res)
    }
}

/// # Header Access
///
impl Message {
    /// Returns the header of the message.
    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the header of the message.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the section counts of the message.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        self.counts
    }

    /// Returns the configuration of the message.
    #[must_use]
    pub fn config(&self) -> MessageConfig {
        self.config
    }

    fn count(&self, section: Section) -> u16 {
        match section {
            Section::Answer => self.counts.ancount(),
            Section::Authority => self.counts.nscount(),
            Section::Additional => self.counts.arcount(),
        }
    }
}

/// # Section Access
///
impl Message {
    /// Returns the questions of the message.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question with the given index.
    pub fn question(&self, index: usize) -> Result<&Question, MessageError> {
        self.questions.get(index).ok_or(MessageError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Returns the records of a section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Record] {
        match section {
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Record> {
        match section {
            Section::Answer => &mut self.answer,
            Section::Authority => &mut self.authority,
            Section::Additional => &mut self.additional,
        }
    }

    /// Returns the record with the given index in a section.
    pub fn record(
        &self,
        section: Section,
        index: usize,
    ) -> Result<&Record, MessageError> {
        let records = self.section(section);
        records.get(index).ok_or(MessageError::IndexOutOfRange {
            index,
            len: records.len(),
        })
    }

    /// Returns the answer record with the given index.
    pub fn answer(&self, index: usize) -> Result<&Record, MessageError> {
        self.record(Section::Answer, index)
    }

    /// Returns the authority record with the given index.
    pub fn authority(&self, index: usize) -> Result<&Record, MessageError> {
        self.record(Section::Authority, index)
    }

    /// Returns the additional record with the given index.
    pub fn additional(&self, index: usize) -> Result<&Record, MessageError> {
        self.record(Section::Additional, index)
    }

    /// Returns the name interner of the message.
    #[must_use]
    pub fn names(&self) -> &NameInterner {
        &self.names
    }

    /// Returns the presentation format of a name of this message.
    ///
    /// # Panics
    ///
    /// The method panics if `id` wasn’t issued by this message.
    #[must_use]
    pub fn name(&self, id: NameId) -> &str {
        self.names.name(id)
    }

    /// Returns a question with its name resolved.
    pub fn resolve_question(&self, question: &Question) -> Question<&str> {
        question.map_name(|id| self.names.name(id))
    }

    /// Returns a record with its names resolved.
    pub fn resolve_record(&self, record: &Record) -> Record<&str> {
        record.clone().map_names(|id| self.names.name(id))
    }
}

/// # Adding Entries
///
impl Message {
    /// Adds a question to the question section.
    ///
    /// The QDCOUNT field of the header is increased accordingly. If that
    /// would overflow or `name` is not a valid domain name, the message
    /// is left unchanged.
    pub fn add_question(
        &mut self,
        name: &str,
        qtype: Rtype,
        qclass: Class,
    ) -> Result<(), MessageError> {
        let mut counts = self.counts;
        counts.inc_qdcount()?;
        let qname = self.names.segment_for(name)?;
        self.questions.push(Question::new(qname, qtype, qclass));
        self.counts = counts;
        Ok(())
    }

    /// Adds a record to a record section.
    ///
    /// The names in `data` can be of any type that can be converted into a
    /// string slice, e.g., `&str`. The section’s count in the header is
    /// increased accordingly. If that would overflow or any of the names
    /// is not a valid domain name, no record is added.
    pub fn add_record<N: AsRef<str>>(
        &mut self,
        section: Section,
        name: &str,
        class: Class,
        ttl: u32,
        data: RecordData<N>,
    ) -> Result<(), MessageError> {
        let mut counts = self.counts;
        match section {
            Section::Answer => counts.inc_ancount(),
            Section::Authority => counts.inc_nscount(),
            Section::Additional => counts.inc_arcount(),
        }?;
        let owner = self.names.segment_for(name)?;
        let names = &mut self.names;
        let data =
            data.try_map_names(|name| names.segment_for(name.as_ref()))?;
        self.section_mut(section)
            .push(Record::new(owner, class, ttl, data));
        self.counts = counts;
        Ok(())
    }
}

/// # Rendering
///
impl Message {
    /// Returns the message as a generic tree.
    ///
    /// Sections are only included if they aren’t empty.
    pub fn render(&self) -> Value {
        let header = self.header;
        let yes_no = |set: bool| if set { "Yes" } else { "No" };
        let mut res = Map::new();
        res.insert("ID".into(), json!(format!("{:#06x}", header.id())));
        res.insert(
            "Type".into(),
            json!(if header.qr() { "Response" } else { "Query" }),
        );
        res.insert(
            "Opcode".into(),
            json!(format!("{:#06b}", header.opcode().to_int())),
        );
        res.insert("Authoritative".into(), json!(yes_no(header.aa())));
        res.insert("Truncated".into(), json!(yes_no(header.tc())));
        res.insert("Recursion Desired".into(), json!(yes_no(header.rd())));
        res.insert(
            "Recursion Available".into(),
            json!(yes_no(header.ra())),
        );
        res.insert("Reserved".into(), json!(format!("{:#05b}", header.z())));
        res.insert(
            "Response Code".into(),
            json!(format!("{:#06b}", header.rcode().to_int())),
        );
        if !self.questions.is_empty() {
            res.insert("QC".into(), json!(self.counts.qdcount()));
            res.insert(
                "Questions".into(),
                self.questions
                    .iter()
                    .map(|question| {
                        json!({
                            "Label": self.name(*question.qname()),
                            "Type": question.qtype().to_int(),
                            "Class": question.qclass().to_int(),
                        })
                    })
                    .collect(),
            );
        }
        for (section, key) in
            Section::ALL.into_iter().zip(["AC", "NC", "DC"])
        {
            if self.section(section).is_empty() {
                continue;
            }
            res.insert(key.into(), json!(self.count(section)));
            res.insert(
                section.render_name().into(),
                self.section(section)
                    .iter()
                    .map(|record| self.resolve_record(record).render())
                    .collect(),
            );
        }
        Value::Object(res)
    }
}

//--- PartialEq and Eq

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        if self.header != other.header
            || self.counts != other.counts
            || self.questions.len() != other.questions.len()
        {
            return false;
        }
        let questions_eq =
            self.questions.iter().zip(&other.questions).all(|(l, r)| {
                self.resolve_question(l) == other.resolve_question(r)
            });
        questions_eq
            && Section::ALL.into_iter().all(|section| {
                let (left, right) =
                    (self.section(section), other.section(section));
                left.len() == right.len()
                    && left.iter().zip(right).all(|(l, r)| {
                        self.resolve_record(l) == other.resolve_record(r)
                    })
            })
    }
}

impl Eq for Message {}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            self.header.opcode(),
            self.header.rcode(),
            self.header.id()
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, \
             ADDITIONAL: {}",
            self.header.flags(),
            self.counts.qdcount(),
            self.counts.ancount(),
            self.counts.nscount(),
            self.counts.arcount()
        )?;
        if !self.questions.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for question in &self.questions {
                writeln!(f, ";{}", self.resolve_question(question))?;
            }
        }
        for section in Section::ALL {
            if self.section(section).is_empty() {
                continue;
            }
            writeln!(
                f,
                "\n;; {} SECTION:",
                section.to_string().to_uppercase()
            )?;
            for record in self.section(section) {
                writeln!(f, "{}", self.resolve_record(record))?;
            }
        }
        Ok(())
    }
}

/// Logs why a message was rejected and converts the error.
fn rejected(section: impl fmt::Display, err: ParseError) -> MessageError {
    debug!(%section, %err, "rejecting malformed message");
    MessageError::Parse(err)
}

//============ Error Types ===================================================

//------------ MessageError --------------------------------------------------

/// An error happened while working with a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageError {
    /// The wire format of a message was broken.
    Parse(ParseError),

    /// The message could not be composed.
    Compose(ComposeError),

    /// A domain name was invalid.
    Name(NameError),

    /// A section or an entry of a section was accessed that doesn’t exist.
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,

        /// The number of available items.
        len: usize,
    },

    /// A section already contains the maximum number of entries.
    CountOverflow,

    /// There is no way to answer questions for this record type.
    ///
    /// The codec itself never returns this error. It is meant for
    /// applications that answer queries for a limited set of record types.
    UnsupportedRecordType(Rtype),
}

//--- From

impl From<ParseError> for MessageError {
    fn from(err: ParseError) -> Self {
        MessageError::Parse(err)
    }
}

impl From<ComposeError> for MessageError {
    fn from(err: ComposeError) -> Self {
        MessageError::Compose(err)
    }
}

impl From<NameError> for MessageError {
    fn from(err: NameError) -> Self {
        MessageError::Name(err)
    }
}

impl From<CountOverflow> for MessageError {
    fn from(_: CountOverflow) -> Self {
        MessageError::CountOverflow
    }
}

//--- Display and Error

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MessageError::Parse(ref err) => fmt::Display::fmt(err, f),
            MessageError::Compose(ref err) => fmt::Display::fmt(err, f),
            MessageError::Name(ref err) => fmt::Display::fmt(err, f),
            MessageError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} items", index, len)
            }
            MessageError::CountOverflow => f.write_str("counter overflow"),
            MessageError::UnsupportedRecordType(rtype) => {
                write!(f, "unsupported record type {}", rtype)
            }
        }
    }
}

impl std::error::Error for MessageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            MessageError::Parse(ref err) => Some(err),
            MessageError::Compose(ref err) => Some(err),
            MessageError::Name(ref err) => Some(err),
            _ => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::wire::BitError;
    use crate::rdata::{Aaaa, Cname, Mx, Ns, UnknownRecordData, A};

    fn example() -> Message {
        let mut msg = Message::new();
        msg.header_mut().set_id(0x1234);
        msg.header_mut().set_rd(true);
        msg.add_question("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        msg.add_record(
            Section::Answer,
            "www.example.com",
            Class::IN,
            300,
            Cname::new("example.com").into(),
        )
        .unwrap();
        msg.add_record::<&str>(
            Section::Answer,
            "example.com",
            Class::IN,
            300,
            A::from_octets(192, 0, 2, 1).into(),
        )
        .unwrap();
        msg.add_record(
            Section::Authority,
            "example.com",
            Class::IN,
            3600,
            Ns::new("ns.example.com").into(),
        )
        .unwrap();
        msg.add_record::<&str>(
            Section::Additional,
            "ns.example.com",
            Class::IN,
            3600,
            Aaaa::new("2001:db8::53".parse().unwrap()).into(),
        )
        .unwrap();
        msg.add_record(
            Section::Additional,
            "example.com",
            Class::IN,
            3600,
            Mx::new(10, "mail.example.com").into(),
        )
        .unwrap();
        msg.add_record::<&str>(
            Section::Additional,
            "example.com",
            Class::CH,
            0,
            UnknownRecordData::from_octets(Rtype::TXT, b"\x02hi".to_vec())
                .unwrap()
                .into(),
        )
        .unwrap();
        msg
    }

    #[test]
    fn counts_follow_sections() {
        let msg = example();
        let counts = msg.counts();
        assert_eq!(counts.qdcount(), 1);
        assert_eq!(counts.ancount(), 2);
        assert_eq!(counts.nscount(), 1);
        assert_eq!(counts.arcount(), 3);
        assert_eq!(msg.questions().len(), 1);
        assert_eq!(msg.section(Section::Additional).len(), 3);
    }

    #[test]
    fn round_trip() {
        let msg = example();
        let wire = msg.to_vec().unwrap();
        let decoded = Message::decode(&wire).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(decoded.to_vec().unwrap(), wire);
    }

    #[test]
    fn encode_into_slice() {
        let msg = example();
        let wire = msg.to_vec().unwrap();
        let mut buf = [0xFFu8; 512];
        let len = msg.encode(&mut buf).unwrap();
        assert_eq!(&buf[..len], wire.as_slice());
        assert_eq!(buf[len], 0xFF);

        let mut short = vec![0u8; wire.len() - 1];
        assert!(matches!(
            msg.encode(&mut short),
            Err(MessageError::Compose(ComposeError::Bits(
                BitError::OutOfBounds { .. }
            )))
        ));
    }

    #[test]
    fn to_vec_respects_max_size() {
        let mut config = MessageConfig::new();
        config.set_max_size(20);
        let mut msg = Message::with_config(config);
        msg.add_question("www.example.com", Rtype::A, Class::IN)
            .unwrap();
        assert!(msg.to_vec().is_err());
        config.set_max_size(0);
        assert_eq!(config.max_size(), 12);
    }

    #[test]
    fn accessors() {
        let msg = example();
        let question = msg.question(0).unwrap();
        assert_eq!(msg.name(*question.qname()), "www.example.com");
        assert!(matches!(
            msg.question(1),
            Err(MessageError::IndexOutOfRange { index: 1, len: 1 })
        ));
        let record = msg.answer(1).unwrap();
        assert_eq!(msg.name(*record.owner()), "example.com");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(msg.authority(0).unwrap().rtype(), Rtype::NS);
        assert_eq!(msg.additional(2).unwrap().class(), Class::CH);
        assert!(matches!(
            msg.record(Section::Authority, 1),
            Err(MessageError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn rejected_additions_leave_message_alone() {
        let mut msg = Message::new();
        assert!(matches!(
            msg.add_question("a..b", Rtype::A, Class::IN),
            Err(MessageError::Name(NameError::EmptyLabel))
        ));
        assert_eq!(msg.counts().qdcount(), 0);
        assert!(msg.questions().is_empty());

        msg.counts.set_ancount(u16::MAX);
        assert_eq!(
            msg.add_record::<&str>(
                Section::Answer,
                "example.com",
                Class::IN,
                0,
                A::from_octets(1, 2, 3, 4).into(),
            ),
            Err(MessageError::CountOverflow)
        );
        assert_eq!(msg.counts().ancount(), u16::MAX);
        assert!(msg.section(Section::Answer).is_empty());
    }

    #[test]
    fn start_answer() {
        let query = example();
        let answer = Message::start_answer(&query, Rcode::NXDOMAIN).unwrap();
        assert_eq!(answer.header().id(), 0x1234);
        assert!(answer.header().qr());
        assert!(answer.header().rd());
        assert_eq!(answer.header().rcode(), Rcode::NXDOMAIN);
        assert_eq!(answer.counts().qdcount(), 1);
        assert_eq!(answer.counts().ancount(), 0);
        assert_eq!(
            answer.resolve_question(answer.question(0).unwrap()),
            query.resolve_question(query.question(0).unwrap())
        );
    }

    #[test]
    fn equality_ignores_handles() {
        let mut left = Message::new();
        left.add_question("a.example.com", Rtype::A, Class::IN).unwrap();
        let mut right = Message::new();
        right.names.segment_for("unrelated.example.org").unwrap();
        right.add_question("a.example.com", Rtype::A, Class::IN).unwrap();
        assert_eq!(left, right);
        right.header_mut().set_aa(true);
        assert_ne!(left, right);
    }

    #[test]
    fn render() {
        let mut msg = Message::new();
        msg.header_mut().set_id(0x862a);
        msg.header_mut().set_qr(true);
        msg.add_question("google.com", Rtype::A, Class::IN).unwrap();
        let tree = msg.render();
        assert_eq!(tree["ID"], "0x862a");
        assert_eq!(tree["Type"], "Response");
        assert_eq!(tree["Opcode"], "0b0000");
        assert_eq!(tree["Reserved"], "0b000");
        assert_eq!(tree["QC"], 1);
        assert_eq!(
            tree["Questions"],
            json!([{ "Label": "google.com", "Type": 1, "Class": 1 }])
        );
        assert!(tree.get("Answers").is_none());
    }

    #[test]
    fn display() {
        let text = example().to_string();
        assert!(text.contains(";www.example.com\tA\tIN"));
        assert!(
            text.contains("www.example.com\t300\tIN\tCNAME\texample.com")
        );
        assert!(text.contains(";; ADDITIONAL SECTION:"));
    }
}
