//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. In the
    /// message header it only occupies four bits, so values above 15 can
    /// be created but not encoded.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Opcode, u8;

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (1, obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4).
    ///
    /// Defined in [RFC 1996](https://tools.ietf.org/html/rfc1996).
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5).
    ///
    /// Defined in [RFC 2136](https://tools.ietf.org/html/rfc2136).
    (UPDATE => 5, "UPDATE")
}

int_enum_str_with_prefix!(Opcode, "OPCODE", u8);

//--- Default

impl Default for Opcode {
    fn default() -> Self {
        Opcode::QUERY
    }
}
