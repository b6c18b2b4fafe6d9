use std::collections::HashSet;
use std::fmt;
use std::io;
use std::str::from_utf8;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use super::Error;

const MAX_LABEL_LEN: usize = 63;
// Maximum encoded length of a whole name, root octet included.
const MAX_NAME_LEN: usize = 255;

/// A domain name as an owned sequence of labels
///
/// Decoding resolves compression pointers eagerly, so a `Name` never
/// borrows the message it came from. A label that contains a literal
/// dot is displayed dot-joined like any other, which makes its textual
/// form ambiguous; RFC 1035 names are label sequences, not strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    labels: Vec<String>,
}

impl Name {
    /// Parses a textual name, `"example.com"` style.
    ///
    /// A single trailing root dot is accepted and normalized away.
    /// Empty labels, labels over 63 octets and names whose encoded
    /// form would exceed 255 octets are rejected.
    pub fn from_str(name: &str) -> Result<Name, Error> {
        let name = name.strip_suffix('.').unwrap_or(name);
        if name.is_empty() {
            return Ok(Name { labels: Vec::new() });
        }
        let mut labels = Vec::new();
        let mut encoded_len = 1;
        for label in name.split('.') {
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(Error::InvalidName);
            }
            encoded_len += label.len() + 1;
            if encoded_len > MAX_NAME_LEN {
                return Err(Error::InvalidName);
            }
            labels.push(label.to_owned());
        }
        Ok(Name { labels })
    }

    /// Decodes a name starting at `offset` in `message`, following
    /// compression pointers through the full message buffer.
    ///
    /// Returns the name and the number of bytes the name field itself
    /// occupies at `offset`: once a pointer is reached that is fixed at
    /// the bytes up to and including the first pointer, regardless of
    /// how long the pointed-to tail is.
    pub fn scan(message: &[u8], offset: usize) -> Result<(Name, usize), Error> {
        let mut labels = Vec::new();
        let mut pos = offset;
        let mut consumed = None;
        let mut visited = HashSet::new();
        let mut hops = 0;
        let mut encoded_len = 1;

        loop {
            if pos >= message.len() {
                return Err(Error::TruncatedMessage);
            }
            let byte = message[pos];
            if byte == 0 {
                // Once a pointer was followed, pos may be anywhere in
                // the message, so the fallback must stay unevaluated.
                let consumed = consumed.unwrap_or_else(|| pos + 1 - offset);
                return Ok((Name { labels }, consumed));
            } else if byte & 0xC0 == 0xC0 {
                if pos + 1 >= message.len() {
                    return Err(Error::TruncatedMessage);
                }
                let target = (BigEndian::read_u16(&message[pos..pos + 2]) & 0x3FFF) as usize;
                if consumed.is_none() {
                    consumed = Some(pos + 2 - offset);
                }
                if !visited.insert(target) {
                    return Err(Error::CompressionLoop);
                }
                hops += 1;
                if hops > message.len() {
                    return Err(Error::CompressionLoop);
                }
                if target >= message.len() {
                    return Err(Error::TruncatedMessage);
                }
                pos = target;
            } else if byte & 0xC0 == 0 {
                let end = pos + 1 + byte as usize;
                if end > message.len() {
                    return Err(Error::TruncatedMessage);
                }
                encoded_len += byte as usize + 1;
                if encoded_len > MAX_NAME_LEN {
                    return Err(Error::InvalidName);
                }
                let label = from_utf8(&message[pos + 1..end]).map_err(|_| Error::InvalidName)?;
                labels.push(label.to_owned());
                pos = end;
            } else {
                // 0b01 and 0b10 prefixes are reserved
                return Err(Error::InvalidName);
            }
        }
    }

    /// Writes the name as length-prefixed labels plus the root octet.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for label in &self.labels {
            writer.write_u8(label.len() as u8)?;
            writer.write_all(label.as_bytes())?;
        }
        writer.write_u8(0)
    }

    /// Encoded length in octets, root octet included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label sequence itself, the unambiguous form when a label
    /// contains a literal dot.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i != 0 {
                fmt.write_str(".")?;
            }
            fmt.write_str(label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(name: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        Name::from_str(name).unwrap().write_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn encode_simple_name() {
        assert_eq!(encode("example.com"), b"\x07example\x03com\x00");
    }

    #[test]
    fn trailing_dot_is_normalized() {
        assert_eq!(
            Name::from_str("example.com.").unwrap(),
            Name::from_str("example.com").unwrap()
        );
    }

    #[test]
    fn root_name() {
        assert_eq!(encode(""), b"\x00");
        assert!(Name::from_str(".").unwrap().is_root());
    }

    #[test]
    fn empty_label_is_rejected() {
        assert_eq!(Name::from_str("mail..com"), Err(Error::InvalidName));
        assert_eq!(Name::from_str(".com"), Err(Error::InvalidName));
    }

    #[test]
    fn oversized_label_is_rejected() {
        let label = "a".repeat(64);
        assert_eq!(Name::from_str(&label), Err(Error::InvalidName));
        assert!(Name::from_str(&label[..63]).is_ok());
    }

    #[test]
    fn oversized_name_is_rejected() {
        // Four 63-octet labels encode to 257 octets
        let long = ["a".repeat(63), "b".repeat(63), "c".repeat(63), "d".repeat(63)].join(".");
        assert_eq!(Name::from_str(&long), Err(Error::InvalidName));
    }

    #[test]
    fn round_trip() {
        for name in &["example.com", "mail.yahoo.com", "a.b.c.d.e", "xn--nxasmq6b.example"] {
            let buf = encode(name);
            let (decoded, consumed) = Name::scan(&buf, 0).unwrap();
            assert_eq!(consumed, buf.len());
            assert_eq!(decoded.to_string(), *name);
        }
    }

    #[test]
    fn scan_follows_pointer() {
        // "foo.example.com" at 2, then "bar" + pointer to "example.com" at 6
        let buf = b"\x00\x00\x03foo\x07example\x03com\x00\x03bar\xc0\x06";
        let (name, consumed) = Name::scan(buf, 2).unwrap();
        assert_eq!(name.to_string(), "foo.example.com");
        assert_eq!(consumed, 17);
        let (name, consumed) = Name::scan(buf, 19).unwrap();
        assert_eq!(name.to_string(), "bar.example.com");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn backward_pointer_ending_before_field_start() {
        // the pointed-to name lies entirely before the pointer, so the
        // terminator turns up at a lower offset than the field itself
        let buf = b"\x03foo\x00\xc0\x00";
        let (name, consumed) = Name::scan(buf, 5).unwrap();
        assert_eq!(name.to_string(), "foo");
        assert_eq!(consumed, 2);
    }

    #[test]
    fn labels_expose_true_boundaries() {
        // a label with a literal dot is ambiguous in dotted text
        let buf = b"\x05a.b.c\x03com\x00";
        let (name, _) = Name::scan(buf, 0).unwrap();
        assert_eq!(name.to_string(), "a.b.c.com");
        assert_eq!(name.labels(), ["a.b.c", "com"]);
    }

    #[test]
    fn pointer_to_pointer() {
        let buf = b"\x07example\x03com\x00\xc0\x00\x03www\xc0\x0d";
        let (name, consumed) = Name::scan(buf, 15).unwrap();
        assert_eq!(name.to_string(), "www.example.com");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn pointer_cycle_is_detected() {
        // pointer at 0 -> 2, pointer at 2 -> 0
        let buf = b"\xc0\x02\xc0\x00";
        assert_eq!(Name::scan(buf, 0), Err(Error::CompressionLoop));
    }

    #[test]
    fn self_pointer_is_detected() {
        let buf = b"\x03foo\xc0\x04";
        assert_eq!(Name::scan(buf, 0), Err(Error::CompressionLoop));
    }

    #[test]
    fn truncated_label_fails() {
        assert_eq!(Name::scan(b"\x07exam", 0), Err(Error::TruncatedMessage));
        // missing terminating root octet
        assert_eq!(Name::scan(b"\x03com", 0), Err(Error::TruncatedMessage));
    }

    #[test]
    fn truncated_pointer_fails() {
        assert_eq!(Name::scan(b"\x03foo\xc0", 4), Err(Error::TruncatedMessage));
    }

    #[test]
    fn pointer_past_end_fails() {
        assert_eq!(Name::scan(b"\xc0\x63", 0), Err(Error::TruncatedMessage));
    }

    #[test]
    fn reserved_label_bits_fail() {
        assert_eq!(Name::scan(b"\x40foo\x00", 0), Err(Error::InvalidName));
        assert_eq!(Name::scan(b"\x80foo\x00", 0), Err(Error::InvalidName));
    }

    #[test]
    fn decompressed_name_over_255_fails() {
        // a 63-octet label followed by a pointer back to itself grows
        // past the limit before the cycle check can fire twice
        let mut buf = vec![63u8];
        buf.extend(std::iter::repeat(b'a').take(63));
        buf.push(0xc0);
        buf.push(0x00);
        assert!(matches!(
            Name::scan(&buf, 0),
            Err(Error::InvalidName) | Err(Error::CompressionLoop)
        ));
    }
}
