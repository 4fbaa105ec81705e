//! A DNS message codec for Rust.
//!
//! This crate decodes DNS messages from their wire format into a typed
//! representation and encodes them back, compressing domain names along
//! the way.
//!
//! # Modules
//!
//! * [base] contains the types for messages, their header, questions,
//!   and records, the handling of domain names, and the bit-level cursor
//!   and writer used for parsing and composing, and
//! * [rdata] contains the record data for the record types the crate
//!   interprets: A, NS, CNAME, MX, and AAAA. All other record types are
//!   kept as raw octets.
//!
//! # Example
//!
//! ```
//! use dnswire::base::{Class, Message, Rtype, Section};
//! use dnswire::rdata::A;
//!
//! let mut msg = Message::new();
//! msg.header_mut().set_id(0x862a);
//! msg.add_question("google.com", Rtype::A, Class::IN).unwrap();
//! msg.add_record::<&str>(
//!     Section::Answer,
//!     "google.com",
//!     Class::IN,
//!     3600,
//!     A::from_octets(192, 168, 1, 1).into(),
//! ).unwrap();
//!
//! let wire = msg.to_vec().unwrap();
//! assert_eq!(Message::decode(&wire).unwrap(), msg);
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `rand`: Enables [`Header::set_random_id`][base::Header::set_random_id]
//!   via the [rand](https://github.com/rust-random/rand) crate. This
//!   feature is enabled by default.
//! * `serde`: Enables serde serialization for a number of basic types.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;

mod utils;
