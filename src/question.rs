use std::fmt::{Display, Formatter};
use crate::dns_class::DNSClass;
use crate::dns_type::DNSType;
use crate::error::{CodecError, Result};
use crate::hex::wire_hex;
use crate::name;
use crate::parser::WireParser;
use crate::wire::{check_capacity, owned_copy, Wire};
use crate::writer::WireWriter;

const TRAILER_LEN: usize = 4;

/// A query question. The name is held in encoded label form, terminator
/// included, so serializing it is a straight copy.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    qname: Vec<u8>,
    qtype: u16,
    qclass: u16,
}

impl Question {
    pub fn new(name: &str, qtype: DNSType, qclass: DNSClass) -> Result<Question> {
        let mut question = Question::default();
        question.set_name(name)?;
        question.set_qtype(qtype.to_num());
        question.set_qclass(qclass.to_num())?;

        Ok(question)
    }

    pub fn clear(&mut self) {
        *self = Question::default();
    }

    pub fn has_name(&self) -> bool {
        !self.qname.is_empty()
    }

    /// Encodes `name` and replaces the current one. On error the question
    /// keeps its previous name.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.qname = name::encode(name)?;

        Ok(())
    }

    /// Copies an already encoded label sequence. Bytes after the terminator
    /// are ignored.
    pub fn set_encoded_name(&mut self, labels: &[u8]) -> Result<()> {
        let len = name::encoded_len(labels)?;
        self.qname = owned_copy(&labels[..len])?;

        Ok(())
    }

    pub fn encoded_name(&self) -> &[u8] {
        &self.qname
    }

    pub fn name(&self) -> Result<String> {
        if !self.has_name() {
            return Err(CodecError::invalid("question has no name"));
        }

        name::decode(&self.qname)
    }

    pub fn qtype(&self) -> u16 {
        self.qtype
    }

    pub fn set_qtype(&mut self, qtype: u16) {
        self.qtype = qtype;
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }

    pub fn set_qclass(&mut self, qclass: u16) -> Result<()> {
        DNSClass::from(qclass)?;
        self.qclass = qclass;

        Ok(())
    }

    fn read(data: &[u8]) -> Result<(Question, usize)> {
        let name_len = name::encoded_len(data)?;
        let needed = name_len + TRAILER_LEN;
        if data.len() < needed {
            return Err(CodecError::TruncatedInput {
                needed,
                available: data.len(),
            });
        }

        let mut parser = WireParser::new(data);
        let qname = owned_copy(parser.take(name_len)?)?;
        let qtype = parser.next_u16()?;
        let qclass = parser.next_u16()?;

        Ok((Question { qname, qtype, qclass }, parser.offset()))
    }
}

impl Wire for Question {
    fn wire_len(&self) -> usize {
        self.qname.len() + TRAILER_LEN
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<usize> {
        if !self.has_name() {
            return Err(CodecError::invalid("question has no name"));
        }
        check_capacity(self.wire_len(), buf.len())?;

        let mut writer = WireWriter::new(buf);
        writer.write_bytes(&self.qname)?;
        writer.write_u16(self.qtype)?;
        writer.write_u16(self.qclass)?;

        Ok(writer.offset())
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<usize> {
        self.clear();

        let (question, n) = Question::read(data)?;
        *self = question;

        Ok(n)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let qtype = DNSType::from(self.qtype);

        writeln!(f, "DNS Question({}): [{}]", self.wire_len(), wire_hex(self))?;
        writeln!(
            f,
            "  |-qname  : {} - {}",
            name::debug_string(&self.qname),
            name::decode(&self.qname).unwrap_or_default()
        )?;
        writeln!(f, "  |-qtype  : {} - {} ({})", self.qtype, qtype, qtype.description())?;
        writeln!(f, "  |-qclass : {} - {}", self.qclass, DNSClass::describe(self.qclass))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BAIDU_A_IN: [u8; 19] = [
        0x03, 0x77, 0x77, 0x77, 0x05, 0x62, 0x61, 0x69, 0x64, 0x75, 0x03, 0x63, 0x6F, 0x6D, 0x00,
        0x00, 0x01, 0x00, 0x01,
    ];

    fn baidu() -> Question {
        Question::new("www.baidu.com", DNSType::A, DNSClass::IN).unwrap()
    }

    #[test]
    fn serializes_labels_type_and_class() {
        let question = baidu();

        assert_eq!(question.wire_len(), 19);
        assert_eq!(question.to_bytes().unwrap(), BAIDU_A_IN.to_vec());
    }

    #[test]
    fn deserializes_known_bytes() {
        let mut question = Question::default();

        assert_eq!(question.deserialize(&BAIDU_A_IN), Ok(19));
        assert_eq!(question, baidu());
        assert_eq!(question.name().unwrap(), "www.baidu.com");
        assert_eq!(name::debug_string(question.encoded_name()), "3www5baidu3com");
        assert_eq!(question.qtype(), 1);
        assert_eq!(question.qclass(), 1);
    }

    #[test]
    fn consumes_only_its_own_bytes() {
        let mut data = BAIDU_A_IN.to_vec();
        data.extend_from_slice(&[0xAA, 0xBB]);
        let mut question = Question::default();

        assert_eq!(question.deserialize(&data), Ok(19));
        assert_eq!(question, baidu());
    }

    #[test]
    fn one_byte_short_fails() {
        let question = baidu();
        let mut buf = vec![0u8; question.wire_len() - 1];

        assert!(matches!(
            question.serialize(&mut buf),
            Err(CodecError::BufferTooSmall { needed: 19, available: 18 })
        ));
        assert_eq!(question, baidu());

        let mut decoded = baidu();
        assert_eq!(
            decoded.deserialize(&BAIDU_A_IN[..18]),
            Err(CodecError::TruncatedInput { needed: 19, available: 18 })
        );
        assert_eq!(decoded, Question::default());
    }

    #[test]
    fn requires_a_name() {
        let question = Question::default();
        let mut buf = [0u8; 64];

        assert!(matches!(
            question.serialize(&mut buf),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(question.name().is_err());
    }

    #[test]
    fn setters_replace_and_validate() {
        let mut question = baidu();

        question.set_name("example.org").unwrap();
        assert_eq!(question.name().unwrap(), "example.org");

        assert!(question.set_name(&"x".repeat(64)).is_err());
        assert_eq!(question.name().unwrap(), "example.org");

        assert!(question.set_qclass(7).is_err());
        assert_eq!(question.qclass(), 1);
        question.set_qclass(255).unwrap();
        assert_eq!(question.qclass(), 255);

        question.set_encoded_name(&BAIDU_A_IN).unwrap();
        assert_eq!(question.encoded_name(), &BAIDU_A_IN[..15]);
    }

    #[test]
    fn equality_covers_every_field() {
        let mut other = baidu();
        assert_eq!(other, baidu());

        other.set_qtype(28);
        assert_ne!(other, baidu());

        let clone = other.clone();
        other.set_name("www.baidu.cn").unwrap();
        assert_ne!(clone, other);
        assert_eq!(clone.name().unwrap(), "www.baidu.com");
    }

    #[test]
    fn renders_fields() {
        let text = baidu().to_string();

        assert!(text.starts_with("DNS Question(19): [03777777056261696475036"));
        assert!(text.contains("|-qname  : 3www5baidu3com - www.baidu.com"));
        assert!(text.contains("|-qtype  : 1 - A (Address)"));
        assert!(text.contains("|-qclass : 1 - Internet"));
    }

    #[test]
    fn renders_missing_name() {
        let question = Question::default();

        assert!(question
            .to_string()
            .starts_with("DNS Question(4): [unencodable: invalid argument: question has no name]"));
    }
}
