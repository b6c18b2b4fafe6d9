use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder};

use super::{Error, Name, Type};

/// The decoded RDATA of a resource record
///
/// Types the crate knows get structured variants; everything else is
/// carried verbatim in `Unknown` with its raw type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(Name),
    NS(Name),
    PTR(Name),
    MX { preference: u16, exchange: Name },
    TXT(Vec<Vec<u8>>),
    SOA(Soa),
    Unknown { typ: u16, data: Vec<u8> },
}

/// The fields of an SOA record in wire order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    pub mname: Name,
    pub rname: Name,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl RRData {
    /// Decodes the rdata region `[rdata_start, rdata_start + rdlen)` of
    /// `message` according to `typ`.
    ///
    /// The whole message is passed because names inside rdata may use
    /// compression pointers into any part of it. The caller has already
    /// verified the region lies within the buffer.
    pub fn parse(typ: u16, message: &[u8], rdata_start: usize, rdlen: usize) -> Result<RRData, Error> {
        let rdata = &message[rdata_start..rdata_start + rdlen];
        match Type::from_code(typ) {
            Some(Type::A) => {
                if rdata.len() != 4 {
                    return Err(Error::InvalidRecord);
                }
                Ok(RRData::A(Ipv4Addr::from(BigEndian::read_u32(rdata))))
            }
            Some(Type::AAAA) => {
                if rdata.len() != 16 {
                    return Err(Error::InvalidRecord);
                }
                let mut segments = [0u16; 8];
                for (i, segment) in segments.iter_mut().enumerate() {
                    *segment = BigEndian::read_u16(&rdata[i * 2..i * 2 + 2]);
                }
                Ok(RRData::AAAA(segments.into()))
            }
            Some(Type::CNAME) => Ok(RRData::CNAME(Self::scan_within(message, rdata_start, rdlen)?.0)),
            Some(Type::NS) => Ok(RRData::NS(Self::scan_within(message, rdata_start, rdlen)?.0)),
            Some(Type::PTR) => Ok(RRData::PTR(Self::scan_within(message, rdata_start, rdlen)?.0)),
            Some(Type::MX) => {
                if rdata.len() < 3 {
                    return Err(Error::InvalidRecord);
                }
                Ok(RRData::MX {
                    preference: BigEndian::read_u16(&rdata[..2]),
                    exchange: Self::scan_within(message, rdata_start + 2, rdlen - 2)?.0,
                })
            }
            Some(Type::TXT) => {
                let mut strings = Vec::new();
                let mut pos = 0;
                while pos < rdata.len() {
                    let len = rdata[pos] as usize;
                    if pos + 1 + len > rdata.len() {
                        return Err(Error::InvalidRecord);
                    }
                    strings.push(rdata[pos + 1..pos + 1 + len].to_vec());
                    pos += 1 + len;
                }
                Ok(RRData::TXT(strings))
            }
            Some(Type::SOA) => {
                let (mname, used) = Self::scan_within(message, rdata_start, rdlen)?;
                let mut pos = used;
                let (rname, used) = Self::scan_within(message, rdata_start + pos, rdlen - pos)?;
                pos += used;
                if rdlen - pos < 20 {
                    return Err(Error::InvalidRecord);
                }
                let ints = &rdata[pos..pos + 20];
                Ok(RRData::SOA(Soa {
                    mname,
                    rname,
                    serial: BigEndian::read_u32(&ints[0..4]),
                    refresh: BigEndian::read_u32(&ints[4..8]),
                    retry: BigEndian::read_u32(&ints[8..12]),
                    expire: BigEndian::read_u32(&ints[12..16]),
                    minimum: BigEndian::read_u32(&ints[16..20]),
                }))
            }
            None => Ok(RRData::Unknown {
                typ,
                data: rdata.to_vec(),
            }),
        }
    }

    // A name whose uncompressed field overruns its rdata region is a
    // malformed record even when the scan itself stays in bounds.
    fn scan_within(message: &[u8], offset: usize, budget: usize) -> Result<(Name, usize), Error> {
        let (name, consumed) = Name::scan(message, offset)?;
        if consumed > budget {
            return Err(Error::InvalidRecord);
        }
        Ok((name, consumed))
    }

    /// The wire type code of this rdata
    pub fn code(&self) -> u16 {
        match *self {
            RRData::A(..) => Type::A as u16,
            RRData::AAAA(..) => Type::AAAA as u16,
            RRData::CNAME(..) => Type::CNAME as u16,
            RRData::NS(..) => Type::NS as u16,
            RRData::PTR(..) => Type::PTR as u16,
            RRData::MX { .. } => Type::MX as u16,
            RRData::TXT(..) => Type::TXT as u16,
            RRData::SOA(..) => Type::SOA as u16,
            RRData::Unknown { typ, .. } => typ,
        }
    }

    pub fn as_a(&self) -> Result<Ipv4Addr, Error> {
        match *self {
            RRData::A(addr) => Ok(addr),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_aaaa(&self) -> Result<Ipv6Addr, Error> {
        match *self {
            RRData::AAAA(addr) => Ok(addr),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_cname(&self) -> Result<&Name, Error> {
        match self {
            RRData::CNAME(name) => Ok(name),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_ns(&self) -> Result<&Name, Error> {
        match self {
            RRData::NS(name) => Ok(name),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_ptr(&self) -> Result<&Name, Error> {
        match self {
            RRData::PTR(name) => Ok(name),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_mx(&self) -> Result<(u16, &Name), Error> {
        match self {
            RRData::MX { preference, exchange } => Ok((*preference, exchange)),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_txt(&self) -> Result<&[Vec<u8>], Error> {
        match self {
            RRData::TXT(strings) => Ok(strings),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub fn as_soa(&self) -> Result<&Soa, Error> {
        match self {
            RRData::SOA(soa) => Ok(soa),
            _ => Err(Error::TypeMismatch),
        }
    }
}
