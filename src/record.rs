use std::fmt::{Display, Formatter};
use crate::dns_class::DNSClass;
use crate::dns_type::DNSType;
use crate::error::{CodecError, Result};
use crate::hex::{to_hex, wire_hex};
use crate::name;
use crate::parser::WireParser;
use crate::wire::{check_capacity, owned_copy, Wire};
use crate::writer::WireWriter;

/// rtype, rclass, ttl and rdlength.
const FIXED_LEN: usize = 10;

/// A resource record with opaque rdata. The rdata length on the wire is
/// always `rdata.len()`, so the two cannot disagree.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    rname: Vec<u8>,
    rtype: u16,
    rclass: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

impl Record {
    pub fn new(name: &str, rtype: DNSType, rclass: DNSClass, ttl: u32, data: &[u8]) -> Result<Record> {
        let mut record = Record::default();
        record.set_name(name)?;
        record.set_rtype(rtype.to_num());
        record.set_rclass(rclass.to_num())?;
        record.set_ttl(ttl);
        record.set_rdata(data)?;

        Ok(record)
    }

    pub fn clear(&mut self) {
        *self = Record::default();
    }

    pub fn has_name(&self) -> bool {
        !self.rname.is_empty()
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.rname = name::encode(name)?;

        Ok(())
    }

    /// Copies an already encoded label sequence, e.g. the name of the
    /// question being answered.
    pub fn set_encoded_name(&mut self, labels: &[u8]) -> Result<()> {
        let len = name::encoded_len(labels)?;
        self.rname = owned_copy(&labels[..len])?;

        Ok(())
    }

    pub fn encoded_name(&self) -> &[u8] {
        &self.rname
    }

    pub fn name(&self) -> Result<String> {
        if !self.has_name() {
            return Err(CodecError::invalid("record has no name"));
        }

        name::decode(&self.rname)
    }

    pub fn rtype(&self) -> u16 {
        self.rtype
    }

    pub fn set_rtype(&mut self, rtype: u16) {
        self.rtype = rtype;
    }

    pub fn rclass(&self) -> u16 {
        self.rclass
    }

    pub fn set_rclass(&mut self, rclass: u16) -> Result<()> {
        DNSClass::from(rclass)?;
        self.rclass = rclass;

        Ok(())
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }

    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    /// Replaces the rdata. It must hold between 1 and 65535 bytes.
    pub fn set_rdata(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(CodecError::invalid("record data must not be empty"));
        }

        if data.len() > u16::MAX as usize {
            return Err(CodecError::invalid(format!(
                "record data of {} bytes exceeds {}",
                data.len(),
                u16::MAX
            )));
        }

        self.rdata = owned_copy(data)?;

        Ok(())
    }

    fn read(data: &[u8]) -> Result<(Record, usize)> {
        let name_len = name::encoded_len(data)?;
        let needed = name_len + FIXED_LEN;
        if data.len() < needed {
            return Err(CodecError::TruncatedInput {
                needed,
                available: data.len(),
            });
        }

        let mut parser = WireParser::new(data);
        let rname = owned_copy(parser.take(name_len)?)?;
        let rtype = parser.next_u16()?;
        let rclass = parser.next_u16()?;
        let ttl = parser.next_u32()?;
        let rdlength = parser.next_u16()? as usize;

        let rdata = if rdlength > 0 {
            owned_copy(parser.take(rdlength)?)?
        } else {
            Vec::new()
        };

        Ok((
            Record {
                rname,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            parser.offset(),
        ))
    }
}

impl Wire for Record {
    fn wire_len(&self) -> usize {
        self.rname.len() + FIXED_LEN + self.rdata.len()
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<usize> {
        if !self.has_name() {
            return Err(CodecError::invalid("record has no name"));
        }

        if self.rdata.is_empty() {
            return Err(CodecError::invalid("record has no data"));
        }
        check_capacity(self.wire_len(), buf.len())?;

        let mut writer = WireWriter::new(buf);
        writer.write_bytes(&self.rname)?;
        writer.write_u16(self.rtype)?;
        writer.write_u16(self.rclass)?;
        writer.write_u32(self.ttl)?;
        writer.write_u16(self.rdlength())?;
        writer.write_bytes(&self.rdata)?;

        Ok(writer.offset())
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<usize> {
        self.clear();

        let (record, n) = Record::read(data)?;
        *self = record;

        Ok(n)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rtype = DNSType::from(self.rtype);

        writeln!(f, "DNS Record({}): [{}]", self.wire_len(), wire_hex(self))?;
        writeln!(
            f,
            "  |-Name   : {} - {}",
            name::debug_string(&self.rname),
            name::decode(&self.rname).unwrap_or_default()
        )?;
        writeln!(f, "  |-Type   : {} - {} ({})", self.rtype, rtype, rtype.description())?;
        writeln!(f, "  |-Class  : {} - {}", self.rclass, DNSClass::describe(self.rclass))?;
        writeln!(f, "  |-TTL    : {} - seconds", self.ttl)?;
        writeln!(f, "  |-Length : {} - bytes", self.rdlength())?;
        writeln!(f, "  |-Data   : [{}]", to_hex(&self.rdata))
    }
}
