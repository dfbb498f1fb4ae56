use crate::error::CodecError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultCode {
    #[default]
    NOERROR = 0,
    FORMERR = 1,
    SERVFAIL = 2,
    NXDOMAIN = 3,
    NOTIMP = 4,
    REFUSED = 5,
    YXDOMAIN = 6,
    YXRRSET = 7,
    NXRRSET = 8,
    NOTAUTH = 9,
    NOTZONE = 10,
}

impl ResultCode {
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResultCode::NOERROR => "No Error",
            ResultCode::FORMERR => "Format Error",
            ResultCode::SERVFAIL => "Server Failure",
            ResultCode::NXDOMAIN => "Name Error",
            ResultCode::NOTIMP => "Not Implemented",
            ResultCode::REFUSED => "Refused",
            ResultCode::YXDOMAIN => "YXDomain",
            ResultCode::YXRRSET => "YXRRSet",
            ResultCode::NXRRSET => "NXRRSet",
            ResultCode::NOTAUTH => "NotAuth",
            ResultCode::NOTZONE => "NotZone",
        }
    }
}

impl TryFrom<u8> for ResultCode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResultCode::NOERROR),
            1 => Ok(ResultCode::FORMERR),
            2 => Ok(ResultCode::SERVFAIL),
            3 => Ok(ResultCode::NXDOMAIN),
            4 => Ok(ResultCode::NOTIMP),
            5 => Ok(ResultCode::REFUSED),
            6 => Ok(ResultCode::YXDOMAIN),
            7 => Ok(ResultCode::YXRRSET),
            8 => Ok(ResultCode::NXRRSET),
            9 => Ok(ResultCode::NOTAUTH),
            10 => Ok(ResultCode::NOTZONE),
            _ => Err(CodecError::invalid(format!("unknown rcode {}", value))),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Opcode {
    #[default]
    QUERY = 0,
    IQUERY = 1,
    STATUS = 2,
    NOTIFY = 4,
    UPDATE = 5,
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        match self {
            Opcode::QUERY => "Standard Query",
            Opcode::IQUERY => "Inverse Query",
            Opcode::STATUS => "Server Status Request",
            Opcode::NOTIFY => "Zone Change Notification",
            Opcode::UPDATE => "Zone Update Message",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Opcode::QUERY),
            1 => Ok(Opcode::IQUERY),
            2 => Ok(Opcode::STATUS),
            4 => Ok(Opcode::NOTIFY),
            5 => Ok(Opcode::UPDATE),
            _ => Err(CodecError::invalid(format!("unknown opcode {}", value))),
        }
    }
}
