use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::CodecError;

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum DNSClass {
    #[default]
    IN, // 1
    CS,
    CH,
    HS,
    ASTERISK, // 255
}

impl DNSClass {
    /// Only the enumerated classes are accepted; anything else is rejected
    /// rather than mapped to a catch-all.
    pub fn from(value: u16) -> Result<Self, CodecError> {
        match value {
            1 => Ok(DNSClass::IN),
            2 => Ok(DNSClass::CS),
            3 => Ok(DNSClass::CH),
            4 => Ok(DNSClass::HS),
            255 => Ok(DNSClass::ASTERISK),
            _ => Err(CodecError::invalid(format!("unknown class {}", value))),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            DNSClass::IN => 1,
            DNSClass::CS => 2,
            DNSClass::CH => 3,
            DNSClass::HS => 4,
            DNSClass::ASTERISK => 255,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DNSClass::IN => "Internet",
            DNSClass::CS => "CSNET, obsolete",
            DNSClass::CH => "CHAOS",
            DNSClass::HS => "Hesiod",
            DNSClass::ASTERISK => "Any class",
        }
    }

    /// Description for a raw class value as found on the wire.
    pub fn describe(value: u16) -> &'static str {
        DNSClass::from(value)
            .map(|class| class.description())
            .unwrap_or("Unknown class")
    }
}

impl Display for DNSClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DNSClass::ASTERISK => write!(f, "ANY"),
            other => write!(f, "{:?}", other),
        }
    }
}

impl FromStr for DNSClass {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(DNSClass::IN),
            "CS" => Ok(DNSClass::CS),
            "CH" => Ok(DNSClass::CH),
            "HS" => Ok(DNSClass::HS),
            "ANY" | "*" => Ok(DNSClass::ASTERISK),
            other => match other.parse::<u16>() {
                Ok(n) => DNSClass::from(n),
                Err(_) => Err(CodecError::invalid(format!("unknown class {:?}", s))),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validates_classes() {
        assert_eq!(DNSClass::from(1), Ok(DNSClass::IN));
        assert_eq!(DNSClass::from(255), Ok(DNSClass::ASTERISK));
        assert!(DNSClass::from(0).is_err());
        assert!(DNSClass::from(5).is_err());
        assert_eq!(DNSClass::describe(3), "CHAOS");
        assert_eq!(DNSClass::describe(42), "Unknown class");
    }

    #[test]
    fn parses_names() {
        assert_eq!("in".parse::<DNSClass>(), Ok(DNSClass::IN));
        assert_eq!("ANY".parse::<DNSClass>(), Ok(DNSClass::ASTERISK));
        assert_eq!("4".parse::<DNSClass>(), Ok(DNSClass::HS));
        assert!("XX".parse::<DNSClass>().is_err());
        assert_eq!(DNSClass::CH.to_string(), "CH");
    }
}
