//! Responses for Network service Commands
use super::types::AccessTechnology;
use crate::parser::InformationResponse;
use crate::registration::Status;
use atat::atat_derive::AtatResp;
use heapless::String;

/// 5.2.1 Network registration +CREG
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct NetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1)]
    pub stat: Status,
}

impl InformationResponse for NetworkRegistrationStatus {
    const PREFIX: &'static str = "+CREG:";
}

/// 5.2.2 Operator selection +COPS
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct OperatorSelection {
    #[at_arg(position = 0)]
    pub mode: u8,
    #[at_arg(position = 1)]
    pub format: Option<u8>,
    #[at_arg(position = 2)]
    pub name: Option<String<32>>,
    #[at_arg(position = 3)]
    pub act: Option<AccessTechnology>,
}

impl InformationResponse for OperatorSelection {
    const PREFIX: &'static str = "+COPS:";
}

/// 5.2.4 Signal quality +CSQ
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    #[at_arg(position = 0)]
    pub rssi: u8,
    #[at_arg(position = 1)]
    pub ber: u8,
}

impl SignalQuality {
    /// Received signal strength in dBm, `None` when not known or detectable.
    pub fn dbm(&self) -> Option<i16> {
        match self.rssi {
            0..=31 => Some(-113 + 2 * i16::from(self.rssi)),
            _ => None,
        }
    }
}

impl InformationResponse for SignalQuality {
    const PREFIX: &'static str = "+CSQ:";
}
