//! Wire-format core of a DNS stub resolver, per RFC 1035.
//!
//! The crate encodes query messages and decodes arbitrary response
//! messages, including compressed-name resolution, and nothing else:
//! sockets, retries, caching and id generation belong to the transport
//! layer that feeds bytes in and out of [`encode_query`] and
//! [`decode_message`]. Both functions are pure over their buffers and
//! safe to call from any number of threads.
//!
//! Malformed or adversarial input always yields an [`Error`], never a
//! panic, an out-of-bounds read or an unterminated pointer chase.
//!
//! ```no_run
//! use stubdns::{decode_message, encode_query, Name, QueryClass, QueryType};
//!
//! let name = Name::from_str("example.com")?;
//! let query = encode_query(&name, QueryType::A, QueryClass::IN, 0x1234)?;
//! // ... send query, receive response over UDP ...
//! # let response: Vec<u8> = unimplemented!();
//! let message = decode_message(&response)?;
//! for answer in &message.answers {
//!     println!("{} -> {:?}", answer.name, answer.data);
//! }
//! # Ok::<(), stubdns::Error>(())
//! ```

mod builder;
mod enums;
mod error;
mod header;
mod name;
mod parser;
mod rrdata;
mod structs;

pub use crate::builder::encode_query;
pub use crate::enums::{Class, Opcode, QueryClass, QueryType, ResponseCode, Type};
pub use crate::error::Error;
pub use crate::header::Header;
pub use crate::name::Name;
pub use crate::parser::decode_message;
pub use crate::rrdata::{RRData, Soa};
pub use crate::structs::{Message, Question, ResourceRecord};
