//! Responses for Packet domain Commands
use super::types::GPRSAttachedState;
use crate::command::network_service::types::AccessTechnology;
use crate::parser::InformationResponse;
use crate::registration::Status;
use atat::atat_derive::AtatResp;
use heapless::String;

/// 7.2.2 Packet domain attach or detach +CGATT
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct GPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

impl InformationResponse for GPRSAttached {
    const PREFIX: &'static str = "+CGATT:";
}

/// 7.2.6 GPRS network registration status +CGREG
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct GPRSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: Status,
    #[at_arg(position = 2)]
    pub lac: Option<String<8>>,
    #[at_arg(position = 3)]
    pub ci: Option<String<8>>,
    /// Only reported with `<n>=2` while registered
    #[at_arg(position = 4)]
    pub act: Option<AccessTechnology>,
}

impl InformationResponse for GPRSNetworkRegistrationStatus {
    const PREFIX: &'static str = "+CGREG:";
}
