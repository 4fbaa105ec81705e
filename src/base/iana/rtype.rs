//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. Questions carry the type
    /// of record information that is requested.
    ///
    /// The codec only knows how to interpret the data of a handful of these
    /// types. The others are listed so they are shown by their mnemonic.
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For Responsible Person.
    (RP => 17, "RP")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// Location Information.
    (LOC => 29, "LOC")

    /// Server Selection.
    (SRV => 33, "SRV")

    /// Option.
    (OPT => 41, "OPT")

    /// A request for a transfer of an entire zone.
    (AXFR => 252, "AXFR")

    /// A request for all records the server has available.
    (ANY => 255, "ANY")

    /// Certification Authority Restriction.
    (CAA => 257, "CAA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16);
