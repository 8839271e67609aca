//! Responses for SMS Commands
use crate::parser::InformationResponse;
use atat::atat_derive::AtatResp;
use heapless::String;

/// Header line of one text mode `+CMGL` list entry,
/// `+CMGL: <index>,<stat>,<oa>,[<alpha>],[<scts>]`
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct MessageListEntry {
    #[at_arg(position = 0)]
    pub index: u16,
    #[at_arg(position = 1)]
    pub stat: String<10>,
    /// Originating address, reported as `""` when unknown
    #[at_arg(position = 2)]
    pub sender: Option<String<32>>,
    #[at_arg(position = 3)]
    pub alpha: Option<String<32>>,
    /// Service centre time stamp
    #[at_arg(position = 4)]
    pub timestamp: Option<String<24>>,
}

impl InformationResponse for MessageListEntry {
    const PREFIX: &'static str = "+CMGL:";
}
