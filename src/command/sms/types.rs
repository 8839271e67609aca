//! Argument and parameter types used by SMS Commands and Responses
use atat::atat_derive::AtatEnum;

/// `<stat>` of received messages not yet read
pub const REC_UNREAD: &str = "REC UNREAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum MessageFormat {
    /// 0 (default value): PDU mode
    Pdu = 0,
    /// 1: text mode
    Text = 1,
}

/// `<delflag>` of +CMGD; anything but `Index` ignores the given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum DeleteFlag {
    /// 0: delete the message at `<index>`
    Index = 0,
    /// 1: delete all read messages
    Read = 1,
    /// 2: delete all read and sent messages
    ReadSent = 2,
    /// 3: delete all read, sent and unsent messages
    ReadSentUnsent = 3,
    /// 4: delete all messages
    All = 4,
}
