use super::{Class, Header, Name, QueryClass, QueryType, RRData};

/// A fully decoded DNS message
///
/// This is the sole product of `decode_message` and owns all of its
/// contents; nothing borrows the wire buffer. The decoder does not
/// match responses to queries: the transport compares `header.id` and
/// the echoed question against what it sent.
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

/// One entry of the question section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: QueryType,
    pub qclass: QueryClass,
}

/// A single resource record; the record type lives inside `data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub class: Class,
    pub ttl: u32,
    pub data: RRData,
}
