use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::CodecError;

/// Record and query types known to the diagnostic renderer and the CLI.
/// The codec itself carries types as raw `u16`.
#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum DNSType {
    #[default]
    A, // 1
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA, // 28
    SRV,
    NAPTR,
    KX,
    CERT,
    A6,
    DNAME,
    SINK,
    OPT, // 41
    APL,
    DS,
    SSHFP,
    IPSECKEY,
    RRSIG,
    NSEC,
    DNSKEY,
    DHCID,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    SVCB, // 64
    HTTPS,
    SPF, // 99
    // QTYPE
    ASTERISK, // 255
    UNKNOWN(u16),
}

const MNEMONICS: &[DNSType] = &[
    DNSType::A, DNSType::NS, DNSType::CNAME, DNSType::SOA, DNSType::PTR, DNSType::MX,
    DNSType::TXT, DNSType::AAAA, DNSType::SRV, DNSType::NAPTR, DNSType::KX, DNSType::CERT,
    DNSType::A6, DNSType::DNAME, DNSType::SINK, DNSType::OPT, DNSType::APL, DNSType::DS,
    DNSType::SSHFP, DNSType::IPSECKEY, DNSType::RRSIG, DNSType::NSEC, DNSType::DNSKEY,
    DNSType::DHCID, DNSType::NSEC3, DNSType::NSEC3PARAM, DNSType::TLSA, DNSType::SVCB,
    DNSType::HTTPS, DNSType::SPF,
];

impl DNSType {
    pub fn from(value: u16) -> DNSType {
        match value {
            1 => DNSType::A,
            2 => DNSType::NS,
            5 => DNSType::CNAME,
            6 => DNSType::SOA,
            12 => DNSType::PTR,
            15 => DNSType::MX,
            16 => DNSType::TXT,
            28 => DNSType::AAAA,
            33 => DNSType::SRV,
            35 => DNSType::NAPTR,
            36 => DNSType::KX,
            37 => DNSType::CERT,
            38 => DNSType::A6,
            39 => DNSType::DNAME,
            40 => DNSType::SINK,
            41 => DNSType::OPT,
            42 => DNSType::APL,
            43 => DNSType::DS,
            44 => DNSType::SSHFP,
            45 => DNSType::IPSECKEY,
            46 => DNSType::RRSIG,
            47 => DNSType::NSEC,
            48 => DNSType::DNSKEY,
            49 => DNSType::DHCID,
            50 => DNSType::NSEC3,
            51 => DNSType::NSEC3PARAM,
            52 => DNSType::TLSA,
            64 => DNSType::SVCB,
            65 => DNSType::HTTPS,
            99 => DNSType::SPF,
            255 => DNSType::ASTERISK,
            n => DNSType::UNKNOWN(n),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            DNSType::A => 1,
            DNSType::NS => 2,
            DNSType::CNAME => 5,
            DNSType::SOA => 6,
            DNSType::PTR => 12,
            DNSType::MX => 15,
            DNSType::TXT => 16,
            DNSType::AAAA => 28,
            DNSType::SRV => 33,
            DNSType::NAPTR => 35,
            DNSType::KX => 36,
            DNSType::CERT => 37,
            DNSType::A6 => 38,
            DNSType::DNAME => 39,
            DNSType::SINK => 40,
            DNSType::OPT => 41,
            DNSType::APL => 42,
            DNSType::DS => 43,
            DNSType::SSHFP => 44,
            DNSType::IPSECKEY => 45,
            DNSType::RRSIG => 46,
            DNSType::NSEC => 47,
            DNSType::DNSKEY => 48,
            DNSType::DHCID => 49,
            DNSType::NSEC3 => 50,
            DNSType::NSEC3PARAM => 51,
            DNSType::TLSA => 52,
            DNSType::SVCB => 64,
            DNSType::HTTPS => 65,
            DNSType::SPF => 99,
            DNSType::ASTERISK => 255,
            DNSType::UNKNOWN(n) => n,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DNSType::A => "Address",
            DNSType::NS => "Name server",
            DNSType::CNAME => "Canonical name",
            DNSType::SOA => "Start of authority",
            DNSType::PTR => "Pointer",
            DNSType::MX => "Mail exchange",
            DNSType::TXT => "Text",
            DNSType::AAAA => "IPv6 address",
            DNSType::SRV => "Service locator",
            DNSType::NAPTR => "Name authority pointer",
            DNSType::KX => "Key exchange",
            DNSType::CERT => "Certificate",
            DNSType::A6 => "IPv6 address",
            DNSType::DNAME => "Delegation name",
            DNSType::SINK => "Kitchen sink",
            DNSType::OPT => "Option",
            DNSType::APL => "Address prefix list",
            DNSType::DS => "Delegation signer",
            DNSType::SSHFP => "SSH key fingerprint",
            DNSType::IPSECKEY => "IPsec key",
            DNSType::RRSIG => "Resource record signature",
            DNSType::NSEC => "Next secure",
            DNSType::DNSKEY => "DNS key",
            DNSType::DHCID => "DHCP identifier",
            DNSType::NSEC3 => "Next secure version 3",
            DNSType::NSEC3PARAM => "NSEC3 parameters",
            DNSType::TLSA => "TLSA certificate association",
            DNSType::SVCB => "Service binding",
            DNSType::HTTPS => "HTTPS binding",
            DNSType::SPF => "Sender policy framework",
            DNSType::ASTERISK => "Any type",
            DNSType::UNKNOWN(_) => "Unknown type",
        }
    }
}

impl Display for DNSType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DNSType::UNKNOWN(n) => write!(f, "TYPE{}", n),
            DNSType::ASTERISK => write!(f, "ANY"),
            other => write!(f, "{:?}", other),
        }
    }
}

impl FromStr for DNSType {
    type Err = CodecError;

    /// Accepts a mnemonic (`aaaa`, `MX`), `ANY`/`*`, `TYPEnn` or a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        if upper == "ANY" || upper == "*" {
            return Ok(DNSType::ASTERISK);
        }

        let numeric = upper.strip_prefix("TYPE").unwrap_or(&upper);
        if let Ok(n) = numeric.parse::<u16>() {
            return Ok(DNSType::from(n));
        }

        MNEMONICS
            .iter()
            .copied()
            .find(|t| t.to_string() == upper)
            .ok_or_else(|| CodecError::invalid(format!("unknown record type {:?}", s)))
    }
}
