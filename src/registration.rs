use atat::atat_derive::AtatEnum;
use serde::Serialize;

use crate::command::network_service::types::AccessTechnology;

/// 3GPP registration state, `<stat>` of `+CREG` and `+CGREG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// • 0: not registered, the MT is not searching for an operator
    NotRegistering = 0,
    /// • 1: registered, home network
    Home = 1,
    /// • 2: not registered, but the MT is searching for an operator
    Searching = 2,
    /// • 3: registration denied
    Denied = 3,
    /// • 4: unknown (e.g. out of coverage)
    OutOfCoverage = 4,
    /// • 5: registered, roaming
    Roaming = 5,
    /// • 6: registered for "SMS only", home network
    HomeSmsOnly = 6,
}

impl Status {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Home | Self::Roaming | Self::HomeSmsOnly)
    }
}

/// Packet domain registration read back once the PDP context is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GprsRegistration {
    pub stat: Status,
    pub act: AccessTechnology,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_states() {
        for (v, registered) in [
            (0u8, false),
            (1, true),
            (2, false),
            (3, false),
            (4, false),
            (5, true),
            (6, true),
        ] {
            assert_eq!(Status::try_from(v).unwrap().is_registered(), registered);
        }
        assert_eq!(Status::try_from(7u8), Err(()));
    }
}
