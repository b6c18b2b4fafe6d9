use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use super::{
    Class, Error, Header, Message, Name, QueryClass, QueryType, Question, RRData, ResourceRecord,
};

/// Decodes a complete DNS message from `buffer`.
///
/// The buffer is one UDP datagram, or a TCP payload with its 2-byte
/// length prefix already stripped. Decoding is all-or-nothing: every
/// declared count must be satisfied from the available bytes, and every
/// read is bounds-checked first. Bytes left over after the last
/// declared record are ignored.
pub fn decode_message(buffer: &[u8]) -> Result<Message, Error> {
    let header = Header::parse(buffer)?;
    trace!(
        "decoding message id={:#06x} qd={} an={} ns={} ar={}",
        header.id,
        header.questions,
        header.answers,
        header.nameservers,
        header.additional
    );

    let mut offset = Header::size();
    let mut questions = Vec::with_capacity(header.questions as usize);
    for _ in 0..header.questions {
        let question = parse_question(buffer, &mut offset)?;
        questions.push(question);
    }
    let mut answers = Vec::with_capacity(header.answers as usize);
    for _ in 0..header.answers {
        answers.push(parse_record(buffer, &mut offset)?);
    }
    let mut authority = Vec::with_capacity(header.nameservers as usize);
    for _ in 0..header.nameservers {
        authority.push(parse_record(buffer, &mut offset)?);
    }
    let mut additional = Vec::with_capacity(header.additional as usize);
    for _ in 0..header.additional {
        additional.push(parse_record(buffer, &mut offset)?);
    }

    if offset < buffer.len() {
        debug!("ignoring {} trailing bytes", buffer.len() - offset);
    }

    Ok(Message {
        header,
        questions,
        answers,
        authority,
        additional,
    })
}

fn parse_question(buffer: &[u8], offset: &mut usize) -> Result<Question, Error> {
    let (qname, consumed) = Name::scan(buffer, *offset)?;
    let pos = *offset + consumed;
    if buffer.len() < pos + 4 {
        return Err(Error::TruncatedMessage);
    }
    let qtype = QueryType::parse(BigEndian::read_u16(&buffer[pos..pos + 2]))?;
    let qclass = QueryClass::parse(BigEndian::read_u16(&buffer[pos + 2..pos + 4]))?;
    *offset = pos + 4;
    Ok(Question {
        qname,
        qtype,
        qclass,
    })
}

fn parse_record(buffer: &[u8], offset: &mut usize) -> Result<ResourceRecord, Error> {
    let (name, consumed) = Name::scan(buffer, *offset)?;
    let pos = *offset + consumed;
    if buffer.len() < pos + 10 {
        return Err(Error::TruncatedMessage);
    }
    let typ = BigEndian::read_u16(&buffer[pos..pos + 2]);
    let class = Class::parse(BigEndian::read_u16(&buffer[pos + 2..pos + 4]))?;
    let ttl = BigEndian::read_u32(&buffer[pos + 4..pos + 8]);
    let rdlen = BigEndian::read_u16(&buffer[pos + 8..pos + 10]) as usize;
    let rdata_start = pos + 10;
    if buffer.len() < rdata_start + rdlen {
        return Err(Error::TruncatedMessage);
    }
    let data = RRData::parse(typ, buffer, rdata_start, rdlen)?;
    *offset = rdata_start + rdlen;
    Ok(ResourceRecord {
        name,
        class,
        ttl,
        data,
    })
}
