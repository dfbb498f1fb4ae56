use std::fmt::{Display, Formatter};
use crate::error::Result;
use crate::flags::Flags;
use crate::hex::wire_hex;
use crate::parser::WireParser;
use crate::wire::{check_capacity, Wire};
use crate::writer::WireWriter;

pub const HEADER_LEN: usize = 12;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn new() -> Header {
        Header::default()
    }

    pub fn new_with_id(id: u16) -> Header {
        Header {
            id,
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Header::default();
    }
}

impl Wire for Header {
    fn wire_len(&self) -> usize {
        HEADER_LEN
    }

    fn serialize(&self, buf: &mut [u8]) -> Result<usize> {
        check_capacity(HEADER_LEN, buf.len())?;

        let mut writer = WireWriter::new(buf);
        writer.write_u16(self.id)?;
        writer.write_u16(self.flags.bits())?;
        writer.write_u16(self.question_count)?;
        writer.write_u16(self.answer_count)?;
        writer.write_u16(self.authority_count)?;
        writer.write_u16(self.additional_count)?;

        Ok(writer.offset())
    }

    fn deserialize(&mut self, data: &[u8]) -> Result<usize> {
        let fields = match WireParser::new(data).take(HEADER_LEN) {
            Ok(fields) => fields,
            Err(err) => {
                self.clear();

                return Err(err);
            }
        };
        let mut parser = WireParser::new(fields);

        *self = Header {
            id: parser.next_u16()?,
            flags: Flags::new(parser.next_u16()?),
            question_count: parser.next_u16()?,
            answer_count: parser.next_u16()?,
            authority_count: parser.next_u16()?,
            additional_count: parser.next_u16()?,
        };

        Ok(HEADER_LEN)
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DNS Header({}): [{}]", HEADER_LEN, wire_hex(self))?;
        writeln!(f, "  |-ID              : 0x{:04x}", self.id)?;
        writeln!(f, "  |-Question Count  : {}", self.question_count)?;
        writeln!(f, "  |-Answer Count    : {}", self.answer_count)?;
        writeln!(f, "  |-Authority Count : {}", self.authority_count)?;
        writeln!(f, "  |-Additional Count: {}", self.additional_count)?;
        writeln!(f, "  |-Flags           :")?;
        write!(f, "{}", self.flags)
    }
}
