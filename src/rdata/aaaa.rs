//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the Aaaa record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::wire::{BitCursor, BitWriter, ComposeError, ParseError};
use core::fmt;
use core::str::FromStr;
use serde_json::{json, Value};
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::AAAA;

    /// The length of the wire format of the record data.
    pub const LEN: u16 = 16;
}

impl Aaaa {
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv6Addr) {
        self.addr = addr
    }

    pub fn parse<Octs: AsRef<[u8]>>(
        cursor: &mut BitCursor<Octs>,
    ) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        cursor.next_buf(&mut buf)?;
        Ok(Self::new(Ipv6Addr::from(buf)))
    }

    pub fn compose(
        &self,
        writer: &mut BitWriter,
    ) -> Result<(), ComposeError> {
        writer.write_slice(&self.addr.octets()).map_err(Into::into)
    }

    /// Returns the record data as a generic tree.
    #[must_use]
    pub fn render(&self) -> Value {
        json!({ "IP": self.addr.to_string() })
    }
}

//--- From and FromStr

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

impl FromStr for Aaaa {
    type Err = <Ipv6Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Addr::from_str(s).map(Aaaa::new)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================
