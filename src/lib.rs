//! Binary codec for DNS messages.
//!
//! Converts between [`Message`] and its wire form: a 12-byte header followed
//! by the question, answer, authority and additional sections. Names are
//! plain label sequences (no compression) and rdata is carried as opaque
//! bytes.
//!
//! ```
//! use dnscodec::{DNSClass, DNSType, Message, Wire};
//!
//! let query = Message::query(0x1234, "www.baidu.com", DNSType::A, DNSClass::IN).unwrap();
//! let bytes = query.to_bytes().unwrap();
//! assert_eq!(Message::parse(&bytes).unwrap(), query);
//! ```

pub mod dns_class;
pub mod dns_type;
pub mod error;
pub mod flags;
pub mod header;
pub mod hex;
pub mod message;
pub mod name;
pub mod parser;
pub mod question;
pub mod record;
pub mod result_code;
pub mod wire;
pub mod writer;

pub use dns_class::DNSClass;
pub use dns_type::DNSType;
pub use error::{CodecError, Result};
pub use flags::Flags;
pub use header::{Header, HEADER_LEN};
pub use message::{Message, Section};
pub use question::Question;
pub use record::Record;
pub use result_code::{Opcode, ResultCode};
pub use wire::Wire;
