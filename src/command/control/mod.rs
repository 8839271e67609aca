//! ### 2 - V.25TER control
//! Basic commands without `=`, read (`?`) or test (`=?`) forms.
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::Echo;

/// 2.2.6 Command echo E
///
/// Controls whether the module echoes characters received from the DTE
/// during command state. Echo is turned off during bring-up so responses
/// carry only the module's own output.
#[derive(Clone, AtatCmd)]
#[at_cmd("E", NoResponse, value_sep = false)]
pub struct SetEcho {
    #[at_arg(position = 0)]
    pub enabled: Echo,
}
