//! Record data from [RFC 1035]: initial record types.
//!
//! This RFC defines the initial set of record types. Of these, the codec
//! interprets A, NS, CNAME, and MX records.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;
pub use self::mx::Mx;
pub use self::name::{Cname, Ns};

mod a;
mod mx;
mod name;
