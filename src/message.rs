use std::fmt::{Display, Formatter};
use tracing::{debug, trace};
use crate::dns_class::DNSClass;
use crate::dns_type::DNSType;
use crate::error::{CodecError, Result};
use crate::flags::Flags;
use crate::header::{Header, HEADER_LEN};
use crate::hex::wire_hex;
use crate::question::Question;
use crate::record::Record;
use crate::wire::{check_capacity, Wire};
use crate::writer::WireWriter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        };

        write!(f, "{}", name)
    }
}

/// A whole message: header followed by the question, answer, authority and
/// additional sections, in that order.
///
/// Every header count always equals the length of its section. The counts
/// are only changed by the `add_*` methods and by `deserialize`, which
/// either fills the whole message or leaves it cleared.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<Record>,
    authorities: Vec<Record>,
    additionals: Vec<Record>,
}

impl Message {
    pub fn new() -> Message {
        Message {
            ..Default::default()
        }
    }

    pub fn new_with_id(id: u16) -> Message {
        Message {
            header: Header::new_with_id(id),
            ..Default::default()
        }
    }

    /// A standard query with recursion desired and a single question.
    pub fn query(id: u16, name: &str, qtype: DNSType, qclass: DNSClass) -> Result<Message> {
        let mut message = Message::new_with_id(id);
        message.flags_mut().set_rd(1)?;
        message.add_question(&Question::new(name, qtype, qclass)?)?;

        Ok(message)
    }

    /// Parses a complete message.
    pub fn parse(data: &[u8]) -> Result<Message> {
        let mut message = Message::new();
        message.deserialize(data)?;

        Ok(message)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn flags(&self) -> Flags {
        self.header.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.header.flags
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }

    pub fn add_question(&mut self, question: &Question) -> Result<()> {
        push(
            &mut self.questions,
            &mut self.header.question_count,
            question.clone(),
            Section::Question,
        )
    }

    pub fn add_answer(&mut self, record: &Record) -> Result<()> {
        push(
            &mut self.answers,
            &mut self.header.answer_count,
            record.clone(),
            Section::Answer,
        )
    }

    pub fn add_authority(&mut self, record: &Record) -> Result<()> {
        push(
            &mut self.authorities,
            &mut self.header.authority_count,
            record.clone(),
            Section::Authority,
        )
    }

    pub fn add_additional(&mut self, record: &Record) -> Result<()> {
        push(
            &mut self.additionals,
            &mut self.header.additional_count,
            record.clone(),
            Section::Additional,
        )
    }

    /// Drops every question and record and resets the header.
    pub fn clear(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.authorities.clear();
        self.additionals.clear();
        self.header.clear();
    }

    fn check_counts(&self) -> Result<()> {
        let sections = [
            (Section::Question, self.header.question_count, self.questions.len()),
            (Section::Answer, self.header.answer_count, self.answers.len()),
            (Section::Authority, self.header.authority_count, self.authorities.len()),
            (Section::Additional, self.header.additional_count, self.additionals.len()),
        ];

        for (section, count, len) in sections {
            if count as usize != len {
                return Err(CodecError::invalid(format!(
                    "header declares {} {} entries but the message holds {}",
                    count, section, len
                )));
            }
        }

        Ok(())
    }

    fn read(&mut self, data: &[u8]) -> Result<usize> {
        let mut header = Header::new();
        let mut offset = header.deserialize(data)?;

        // counts are rebuilt as entries are appended
        self.header = Header {
            id: header.id,
            flags: header.flags,
            ..Default::default()
        };

        read_section(
            data,
            &mut offset,
            header.question_count,
            &mut self.questions,
            &mut self.header.question_count,
            Section::Question,
        )?;
        read_section(
            data,
            &mut offset,
            header.answer_count,
            &mut self.answers,
            &mut self.header.answer_count,
            Section::Answer,
        )?;
        read_section(
            data,
            &mut offset,
            header.authority_count,
            &mut self.authorities,
            &mut self.header.authority_count,
            Section::Authority,
        )?;
        read_section(
            data,
            &mut offset,
            header.additional_count,
            &mut self.additionals,
            &mut self.header.additional_count,
            Section::Additional,
        )?;

        Ok(offset)
    }
}

fn push<T>(items: &mut Vec<T>, count: &mut u16, item: T, section: Section) -> Result<()> {
    let next = count.checked_add(1).ok_or_else(|| {
        CodecError::invalid(format!("{} section is full ({} entries)", section, u16::MAX))
    })?;

    items
        .try_reserve(1)
        .map_err(|_| CodecError::AllocationFailure(std::mem::size_of::<T>()))?;
    items.push(item);
    *count = next;

    Ok(())
}

fn write_section<T: Wire>(writer: &mut WireWriter, items: &[T], section: Section) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        let offset = writer.offset();
        writer
            .write_with(|buf| item.serialize(buf))
            .map_err(|err| {
                debug!("failed to serialize {} #{} at offset {}: {}", section, i, offset, err);
                err
            })?;
        trace!("serialized {} #{} at offset {}", section, i, offset);
    }

    Ok(())
}

fn read_section<T: Wire + Default>(
    data: &[u8],
    offset: &mut usize,
    declared: u16,
    items: &mut Vec<T>,
    count: &mut u16,
    section: Section,
) -> Result<()> {
    for i in 0..declared {
        let mut item = T::default();
        let n = item.deserialize(&data[*offset..]).map_err(|err| {
            debug!("failed to deserialize {} #{} at offset {}: {}", section, i, *offset, err);
            err
        })?;
        trace!("deserialized {} #{} at offset {} ({} bytes)", section, i, *offset, n);

        push(items, count, item, section)?;
        *offset += n;
    }

    Ok(())
}

impl Wire for Message {
    fn wire_len(&self) -> usize {
        HEADER_LEN
            + self.questions.iter().map(|q| q.wire_len()).sum::<usize>()
            + self
                .answers
                .iter()
                .chain(&self.authorities)
                .chain(&self.additionals)
                .map(|r| r.wire_len())
                .sum::<usize>()
    }

    /// Writes the header and every section. On error the contents of `buf`
    /// are unspecified.
    fn serialize(&self, buf: &mut [u8]) -> Result<usize> {
        self.check_counts()?;
        check_capacity(self.wire_len(), buf.len())?;

        let mut writer = WireWriter::new(buf);
        writer.write_with(|buf| self.header.serialize(buf))?;
        write_section(&mut writer, &self.questions, Section::Question)?;
        write_section(&mut writer, &self.answers, Section::Answer)?;
        write_section(&mut writer, &self.authorities, Section::Authority)?;
        write_section(&mut writer, &self.additionals, Section::Additional)?;

        Ok(writer.offset())
    }

    /// All-or-nothing: on error the message is left cleared.
    fn deserialize(&mut self, data: &[u8]) -> Result<usize> {
        self.clear();

        match self.read(data) {
            Ok(n) => Ok(n),
            Err(err) => {
                debug!("discarding partially decoded message: {}", err);
                self.clear();

                Err(err)
            }
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DNS Message({}): [{}]", self.wire_len(), wire_hex(self))?;
        write!(f, "{}", self.header)?;

        for question in &self.questions {
            write!(f, "{}", question)?;
        }

        for (section, records) in [
            (Section::Answer, &self.answers),
            (Section::Authority, &self.authorities),
            (Section::Additional, &self.additionals),
        ] {
            for record in records {
                write!(f, "[{}] {}", section, record)?;
            }
        }

        Ok(())
    }
}
