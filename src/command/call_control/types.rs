//! Argument and parameter types used by Call Control Commands

use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AtatEnum)]
pub enum CallingLineIdentification {
    /// 0 (default value): disable the +CLIP report
    #[default]
    Disabled = 0,
    /// 1: enable the +CLIP report
    Enabled = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum VoiceHangupControl {
    /// 0: ATH disconnects the voice call
    Disconnect = 0,
    /// 1: ATH is ignored, only `OK` is returned
    Ignore = 1,
}
