//! ### 3 - Call control
pub mod types;

use atat::atat_derive::AtatCmd;

use self::types::{CallingLineIdentification, VoiceHangupControl};

use super::NoResponse;

/// 3.2.2 Calling line identification presentation +CLIP
///
/// Enables the `+CLIP: <number>,<type>` unsolicited report after every
/// `RING` of an incoming call.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CLIP", NoResponse)]
pub struct SetCallingLineIdentification {
    #[at_arg(position = 0)]
    pub n: CallingLineIdentification,
}

/// 3.2.9 Voice hang up control +CVHU
///
/// Selects whether `ATH` disconnects a voice call.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CVHU", NoResponse)]
pub struct SetVoiceHangupControl {
    #[at_arg(position = 0)]
    pub mode: VoiceHangupControl,
}
