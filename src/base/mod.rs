//! Basics.
//!
//! This module provides the types for working with DNS messages. It allows
//! creating messages from scratch, extracting them from their wire format,
//! and assembling that wire format again.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and dissecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Both parsing and composing happen on buffers holding a complete DNS
//! message. This is a reasonable choice given the limited size of DNS
//! messages and the complexities introduced by compressing domain names in
//! a message by referencing other parts of the message. The fundamental
//! types for parsing and composing, [`BitCursor`][wire::BitCursor] and
//! [`BitWriter`][wire::BitWriter], live in the [wire] module. Since the
//! header of a message packs several fields into single octets, both work
//! on the bit level.
//!
//! Unless you are implementing your own record types, you are unlikely to
//! ever deal with them directly. Instead, [`Message`] provides
//! [`decode`][Message::decode] and [`encode`][Message::encode] as well as
//! methods to add questions and records to a message step-by-step.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules.
//! These are:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the registered values of the various DNS parameters,
//! * [message] for complete messages,
//! * [name] for domain names and their compression,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [wire] for the bit-level cursor and writer.
//!
//! The record data of the individual record types lives in the top-level
//! [rdata][crate::rdata] module.

//--- Re-exports

pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::{Message, MessageConfig, MessageError};
pub use self::name::{NameId, NameInterner};
pub use self::question::Question;
pub use self::record::{Record, Section};
pub use self::wire::{BitCursor, BitWriter, ComposeError, ParseError};

//--- Modules

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
