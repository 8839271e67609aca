//! ### 4 - Mobile equipment control and status
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::AutomaticTimezone;

/// 4.2.15 Automatic time and time zone update +CTZU
///
/// Lets the module update its real time clock from the network's NITZ
/// information.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CTZU", NoResponse)]
pub struct SetAutomaticTimezoneUpdate {
    #[at_arg(position = 0)]
    pub on_off: AutomaticTimezone,
}
