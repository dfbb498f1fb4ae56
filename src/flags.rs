use std::fmt::{Display, Formatter};
use crate::error::{CodecError, Result};
use crate::result_code::{Opcode, ResultCode};

const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const Z_SHIFT: u16 = 4;
const RCODE_SHIFT: u16 = 0;

const BIT_MASK: u16 = 0x1;
const Z_MASK: u16 = 0x7;
const NIBBLE_MASK: u16 = 0xF;

/// View over the 16-bit header flags word.
///
/// Layout, most significant bit first:
/// `QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4)`.
/// Setters validate their input and leave the word unchanged on failure;
/// getters accept any value, including non-zero Z bits.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Flags(pub u16);

impl Flags {
    pub fn new(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    fn get(self, shift: u16, mask: u16) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    fn set(&mut self, shift: u16, mask: u16, value: u8) {
        self.0 &= !(mask << shift);
        self.0 |= (value as u16 & mask) << shift;
    }

    fn set_bit(&mut self, name: &str, shift: u16, value: u8) -> Result<()> {
        if value > 1 {
            return Err(CodecError::invalid(format!("{} must be 0 or 1, got {}", name, value)));
        }

        self.set(shift, BIT_MASK, value);

        Ok(())
    }

    pub fn qr(self) -> u8 {
        self.get(QR_SHIFT, BIT_MASK)
    }

    pub fn opcode(self) -> u8 {
        self.get(OPCODE_SHIFT, NIBBLE_MASK)
    }

    pub fn aa(self) -> u8 {
        self.get(AA_SHIFT, BIT_MASK)
    }

    pub fn tc(self) -> u8 {
        self.get(TC_SHIFT, BIT_MASK)
    }

    pub fn rd(self) -> u8 {
        self.get(RD_SHIFT, BIT_MASK)
    }

    pub fn ra(self) -> u8 {
        self.get(RA_SHIFT, BIT_MASK)
    }

    /// Reserved bits. Never written by the setters.
    pub fn z(self) -> u8 {
        self.get(Z_SHIFT, Z_MASK)
    }

    pub fn rcode(self) -> u8 {
        self.get(RCODE_SHIFT, NIBBLE_MASK)
    }

    pub fn set_qr(&mut self, qr: u8) -> Result<()> {
        self.set_bit("qr", QR_SHIFT, qr)
    }

    pub fn set_opcode(&mut self, opcode: u8) -> Result<()> {
        let opcode = Opcode::try_from(opcode)?;
        self.set(OPCODE_SHIFT, NIBBLE_MASK, opcode.to_u8());

        Ok(())
    }

    pub fn set_aa(&mut self, aa: u8) -> Result<()> {
        self.set_bit("aa", AA_SHIFT, aa)
    }

    pub fn set_tc(&mut self, tc: u8) -> Result<()> {
        self.set_bit("tc", TC_SHIFT, tc)
    }

    pub fn set_rd(&mut self, rd: u8) -> Result<()> {
        self.set_bit("rd", RD_SHIFT, rd)
    }

    pub fn set_ra(&mut self, ra: u8) -> Result<()> {
        self.set_bit("ra", RA_SHIFT, ra)
    }

    pub fn set_rcode(&mut self, rcode: u8) -> Result<()> {
        let rcode = ResultCode::try_from(rcode)?;
        self.set(RCODE_SHIFT, NIBBLE_MASK, rcode.to_u8());

        Ok(())
    }
}

impl From<u16> for Flags {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

/// Binary digits of `value` in groups of four, `,` inside a byte and a
/// space between bytes: `1000,0001 1000,0000`.
pub fn binary_string(value: u16) -> String {
    let mut res = String::with_capacity(19);

    for i in (0..16).rev() {
        res.push(if (value >> i) & 1 == 1 { '1' } else { '0' });

        if i > 0 && i % 4 == 0 {
            res.push(if i % 8 == 0 { ' ' } else { ',' });
        }
    }

    res
}

fn yes_no(value: u8, yes: &'static str, no: &'static str) -> &'static str {
    if value == 1 {
        yes
    } else {
        no
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let opcode = Opcode::try_from(self.opcode())
            .map(|opcode| opcode.description())
            .unwrap_or("Reserved");
        let rcode = ResultCode::try_from(self.rcode())
            .map(|rcode| rcode.description())
            .unwrap_or("Reserved");

        writeln!(
            f,
            "flags: 0x{:04X}=[{}] {{QR(1)|opcode(4)|AA(1)|TC(1)|RD(1)|RA(1)|zero(3)|rcode(4)}}",
            self.0,
            binary_string(self.0)
        )?;
        writeln!(f, "  QR    : {} - {}", self.qr(), yes_no(self.qr(), "Response", "Query"))?;
        writeln!(f, "  OPCODE: {} - {}", self.opcode(), opcode)?;
        writeln!(
            f,
            "  AA    : {} - {}",
            self.aa(),
            yes_no(self.aa(), "Authoritative Answer", "Not Authoritative")
        )?;
        writeln!(f, "  TC    : {} - {}", self.tc(), yes_no(self.tc(), "Truncated", "Not Truncated"))?;
        writeln!(
            f,
            "  RD    : {} - {}",
            self.rd(),
            yes_no(self.rd(), "Recursion Desired", "Recursion Not Desired")
        )?;
        writeln!(
            f,
            "  RA    : {} - {}",
            self.ra(),
            yes_no(self.ra(), "Recursion Available", "Recursion Not Available")
        )?;
        writeln!(f, "  RCODE : {} - {}", self.rcode(), rcode)
    }
}
