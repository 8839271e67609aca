//! ### 7 - Packet domain
//!
//! Packet switched attach, PDP context activation and the packet domain
//! registration state. A PDP context must be active before any of the
//! internet services (HTTP(S), TCP/IP) can be used.

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::{GPRSAttached, GPRSNetworkRegistrationStatus};
use types::PDPContextStatus;

use super::NoResponse;

/// 7.2.2 Packet domain attach or detach +CGATT
///
/// Reads the state of the packet domain service, `1` when attached.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT?", GPRSAttached)]
pub struct GetGPRSAttached;

/// 7.2.4 PDP context activate or deactivate +CGACT
///
/// Activates or deactivates the PDP context `<cid>`. The network may take a
/// few seconds to grant the context, so the deadline is longer than that of
/// local commands.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGACT", NoResponse, timeout_ms = 5000)]
pub struct SetPDPContextState {
    #[at_arg(position = 0)]
    pub status: PDPContextStatus,
    #[at_arg(position = 1)]
    pub cid: u8,
}

/// 7.2.6 GPRS network registration status +CGREG
///
/// `+CGREG: <n>,<stat>[,<lac>,<ci>[,<AcT>]]`
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGREG?", GPRSNetworkRegistrationStatus, timeout_ms = 5000)]
pub struct GetGPRSNetworkRegistrationStatus;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::text;

    #[test]
    fn command_text() {
        assert_eq!(text(&GetGPRSAttached), "AT+CGATT?");
        assert_eq!(
            text(&SetPDPContextState {
                status: PDPContextStatus::Activated,
                cid: 1,
            }),
            "AT+CGACT=1,1"
        );
        assert_eq!(text(&GetGPRSNetworkRegistrationStatus), "AT+CGREG?");
    }
}
