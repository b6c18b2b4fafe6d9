use thiserror::Error;

/// Error decoding or encoding a DNS message
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("domain name is not valid")]
    InvalidName,
    #[error("encoded message exceeds the 512 octet UDP limit")]
    MessageTooLarge,
    #[error("message ends before its declared contents")]
    TruncatedMessage,
    #[error("compression pointers in a name form a cycle")]
    CompressionLoop,
    #[error("resource record data does not match its type")]
    InvalidRecord,
    #[error("record data accessed as the wrong type")]
    TypeMismatch,
}
