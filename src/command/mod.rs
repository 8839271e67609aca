//! AT Commands for the SIMCom A76xx cellular module family\
//! Following the SIMCom A76XX Series AT Command Manual
//!
//! Every command is an [`atat::AtatCmd`] so its text and its deadline
//! (`timeout_ms`, 1000 ms unless stated) live in one place.

pub mod call_control;
pub mod control;
pub mod http;
pub mod mobile_control;
pub mod network_service;
pub mod psn;
pub mod sms;

use atat::atat_derive::{AtatCmd, AtatResp};

#[derive(Debug, Clone, AtatResp)]
pub struct NoResponse;

/// Attention, answered with `OK` by any responsive module
#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse)]
pub struct AT;

#[cfg(test)]
pub(crate) mod tests {
    use atat::AtatCmd;

    /// Command text as written to the modem, without its terminator.
    pub fn text<Cmd: AtatCmd>(cmd: &Cmd) -> std::string::String {
        let mut buf = [0u8; 512];
        let len = cmd.write(&mut buf);
        std::string::String::from_utf8(buf[..len].to_vec())
            .unwrap()
            .trim_end()
            .to_string()
    }

    #[test]
    fn attention() {
        assert_eq!(text(&super::AT), "AT");
    }
}
