//! Argument and parameter types used by Mobile equipment control Commands
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum AutomaticTimezone {
    Disabled = 0,
    Enabled = 1,
}
