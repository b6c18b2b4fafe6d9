use byteorder::{BigEndian, ByteOrder};

use super::{Error, Opcode, ResponseCode};

/// The fixed 12-byte header of every DNS message
///
/// All fields are extracted and composed with explicit shifts and
/// masks; nothing here depends on struct layout or host endianness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub query: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Header {
    pub fn size() -> usize {
        12
    }

    /// Parses the header from the front of `data`.
    ///
    /// The three reserved Z bits are read and discarded; real servers
    /// are not always strict about them and a stub resolver gains
    /// nothing by rejecting the whole response.
    pub fn parse(data: &[u8]) -> Result<Header, Error> {
        if data.len() < Self::size() {
            return Err(Error::TruncatedMessage);
        }
        let flags = BigEndian::read_u16(&data[2..4]);
        Ok(Header {
            id: BigEndian::read_u16(&data[0..2]),
            query: flags & 0x8000 == 0,
            opcode: (((flags >> 11) & 0x0F) as u8).into(),
            authoritative: flags & 0x0400 != 0,
            truncated: flags & 0x0200 != 0,
            recursion_desired: flags & 0x0100 != 0,
            recursion_available: flags & 0x0080 != 0,
            response_code: ((flags & 0x000F) as u8).into(),
            questions: BigEndian::read_u16(&data[4..6]),
            answers: BigEndian::read_u16(&data[6..8]),
            nameservers: BigEndian::read_u16(&data[8..10]),
            additional: BigEndian::read_u16(&data[10..12]),
        })
    }

    /// Writes the header into the first 12 bytes of `data`.
    ///
    /// Z is always written as zero.
    pub fn write(&self, data: &mut [u8]) {
        let mut flags = 0u16;
        if !self.query {
            flags |= 0x8000;
        }
        flags |= (u8::from(self.opcode) as u16 & 0x0F) << 11;
        if self.authoritative {
            flags |= 0x0400;
        }
        if self.truncated {
            flags |= 0x0200;
        }
        if self.recursion_desired {
            flags |= 0x0100;
        }
        if self.recursion_available {
            flags |= 0x0080;
        }
        flags |= u8::from(self.response_code) as u16 & 0x000F;

        BigEndian::write_u16(&mut data[0..2], self.id);
        BigEndian::write_u16(&mut data[2..4], flags);
        BigEndian::write_u16(&mut data[4..6], self.questions);
        BigEndian::write_u16(&mut data[6..8], self.answers);
        BigEndian::write_u16(&mut data[8..10], self.nameservers);
        BigEndian::write_u16(&mut data[10..12], self.additional);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_query_header() {
        let data = b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00";
        let header = Header::parse(data).unwrap();
        assert_eq!(header.id, 0x1234);
        assert!(header.query);
        assert_eq!(header.opcode, Opcode::StandardQuery);
        assert!(header.recursion_desired);
        assert!(!header.recursion_available);
        assert_eq!(header.response_code, ResponseCode::NoError);
        assert_eq!(header.questions, 1);
        assert_eq!(header.answers, 0);
    }

    #[test]
    fn parse_response_header() {
        // qr=1, rd=1, ra=1, rcode=3 (NXDOMAIN), one question, no answers
        let data = b"\xab\xcd\x81\x83\x00\x01\x00\x00\x00\x01\x00\x00";
        let header = Header::parse(data).unwrap();
        assert!(!header.query);
        assert!(header.recursion_available);
        assert_eq!(header.response_code, ResponseCode::NameError);
        assert_eq!(header.nameservers, 1);
    }

    #[test]
    fn nonzero_z_bits_are_tolerated() {
        let data = b"\x00\x01\x80\x40\x00\x00\x00\x00\x00\x00\x00\x00";
        let header = Header::parse(data).unwrap();
        assert!(!header.query);
        assert_eq!(header.response_code, ResponseCode::NoError);
    }

    #[test]
    fn write_round_trips() {
        let header = Header {
            id: 0xbeef,
            query: false,
            opcode: Opcode::StandardQuery,
            authoritative: true,
            truncated: false,
            recursion_desired: true,
            recursion_available: true,
            response_code: ResponseCode::Refused,
            questions: 1,
            answers: 2,
            nameservers: 3,
            additional: 4,
        };
        let mut buf = [0u8; 12];
        header.write(&mut buf);
        assert_eq!(Header::parse(&buf).unwrap(), header);
    }

    #[test]
    fn short_buffer_is_truncated() {
        assert_eq!(Header::parse(b"\x12\x34\x01\x00"), Err(Error::TruncatedMessage));
    }
}
