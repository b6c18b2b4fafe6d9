use byteorder::{BigEndian, WriteBytesExt};

use super::{Error, Header, Name, Opcode, QueryClass, QueryType, ResponseCode};

// Queries without EDNS0 must fit one UDP datagram.
const MAX_UDP_SIZE: usize = 512;

/// Encodes a standard recursive query with a single question.
///
/// The id is whatever the caller chose; picking one that an off-path
/// attacker cannot predict is the transport's job, the codec only
/// copies it into the header.
pub fn encode_query(
    name: &Name,
    qtype: QueryType,
    qclass: QueryClass,
    id: u16,
) -> Result<Vec<u8>, Error> {
    let header = Header {
        id,
        query: true,
        opcode: Opcode::StandardQuery,
        authoritative: false,
        truncated: false,
        recursion_desired: true,
        recursion_available: false,
        response_code: ResponseCode::NoError,
        questions: 1,
        answers: 0,
        nameservers: 0,
        additional: 0,
    };

    let mut buf = Vec::with_capacity(Header::size() + name.encoded_len() + 4);
    buf.extend([0u8; 12].iter());
    header.write(&mut buf[..12]);

    // Writing to a Vec cannot fail
    name.write_to(&mut buf).unwrap();
    buf.write_u16::<BigEndian>(qtype as u16).unwrap();
    buf.write_u16::<BigEndian>(qclass as u16).unwrap();

    if buf.len() > MAX_UDP_SIZE {
        return Err(Error::MessageTooLarge);
    }
    Ok(buf)
}
