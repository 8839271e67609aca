//! ### 5 - Network service
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::*;

/// 5.2.1 Network registration +CREG
///
/// Reads the circuit switched registration state of the MT. The reply
/// carries the URC setting `<n>` followed by `<stat>`, and `<lac>`, `<ci>`
/// when the location report is enabled.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG?", NetworkRegistrationStatus, timeout_ms = 5000)]
pub struct GetNetworkRegistrationStatus;

/// 5.2.2 Operator selection +COPS
///
/// Reads the current selection mode, the operator name and the access
/// technology the MT is camped on.
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS?", OperatorSelection)]
pub struct GetOperatorSelection;

/// 5.2.4 Signal quality +CSQ
///
/// `<rssi>` 0..=31 maps to -113..=-51 dBm, 99 is unknown. `<ber>` 0..=7, 99
/// is unknown.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSQ", SignalQuality)]
pub struct GetSignalQuality;
