//! Argument and parameter types used by Packet domain Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum PDPContextStatus {
    Deactivated = 0,
    Activated = 1,
}
