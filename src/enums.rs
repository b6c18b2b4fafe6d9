use super::Error;

/// The QTYPE value of a question, a superset of the record types a
/// stub resolver asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    A = 1,
    NS = 2,
    CNAME = 5,
    SOA = 6,
    PTR = 12,
    MX = 15,
    TXT = 16,
    AAAA = 28,
}

/// The QCLASS value of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryClass {
    IN = 1,
    CS = 2,
    CH = 3,
    HS = 4,
}

/// The TYPE field of a resource record, for the types this crate
/// decodes into structured data. Anything else is carried verbatim in
/// `RRData::Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    A = 1,
    NS = 2,
    CNAME = 5,
    SOA = 6,
    PTR = 12,
    MX = 15,
    TXT = 16,
    AAAA = 28,
}

/// The CLASS field of a resource record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    IN = 1,
    CS = 2,
    CH = 3,
    HS = 4,
}

/// The OPCODE header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    ServerStatusRequest,
    Reserved(u8),
}

/// The RCODE header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Reserved(u8),
}

impl QueryType {
    pub fn parse(code: u16) -> Result<QueryType, Error> {
        use self::QueryType::*;
        match code {
            1 => Ok(A),
            2 => Ok(NS),
            5 => Ok(CNAME),
            6 => Ok(SOA),
            12 => Ok(PTR),
            15 => Ok(MX),
            16 => Ok(TXT),
            28 => Ok(AAAA),
            _ => Err(Error::InvalidRecord),
        }
    }
}

impl QueryClass {
    pub fn parse(code: u16) -> Result<QueryClass, Error> {
        use self::QueryClass::*;
        match code {
            1 => Ok(IN),
            2 => Ok(CS),
            3 => Ok(CH),
            4 => Ok(HS),
            _ => Err(Error::InvalidRecord),
        }
    }
}

impl Type {
    /// Returns `None` for a type code this crate has no structured
    /// representation for; the caller keeps the raw rdata instead.
    pub fn from_code(code: u16) -> Option<Type> {
        use self::Type::*;
        match code {
            1 => Some(A),
            2 => Some(NS),
            5 => Some(CNAME),
            6 => Some(SOA),
            12 => Some(PTR),
            15 => Some(MX),
            16 => Some(TXT),
            28 => Some(AAAA),
            _ => None,
        }
    }
}

impl Class {
    pub fn parse(code: u16) -> Result<Class, Error> {
        use self::Class::*;
        match code {
            1 => Ok(IN),
            2 => Ok(CS),
            3 => Ok(CH),
            4 => Ok(HS),
            _ => Err(Error::InvalidRecord),
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Opcode {
        use self::Opcode::*;
        match code {
            0 => StandardQuery,
            1 => InverseQuery,
            2 => ServerStatusRequest,
            code => Reserved(code),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        use self::Opcode::*;
        match opcode {
            StandardQuery => 0,
            InverseQuery => 1,
            ServerStatusRequest => 2,
            Reserved(code) => code,
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        use self::ResponseCode::*;
        match code {
            0 => NoError,
            1 => FormatError,
            2 => ServerFailure,
            3 => NameError,
            4 => NotImplemented,
            5 => Refused,
            code => Reserved(code),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(rcode: ResponseCode) -> u8 {
        use self::ResponseCode::*;
        match rcode {
            NoError => 0,
            FormatError => 1,
            ServerFailure => 2,
            NameError => 3,
            NotImplemented => 4,
            Refused => 5,
            Reserved(code) => code,
        }
    }
}
