//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;

/// Access technology of the serving cell, `<AcT>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessTechnology {
    /// • 0: GSM
    Gsm = 0,
    /// • 1: GSM Compact
    GsmCompact = 1,
    /// • 2: UTRAN
    Utran = 2,
    /// • 3: GSM w/EGPRS
    GsmEgprs = 3,
    /// • 4: UTRAN w/HSDPA
    UtranHsdpa = 4,
    /// • 5: UTRAN w/HSUPA
    UtranHsupa = 5,
    /// • 6: UTRAN w/HSDPA and HSUPA
    UtranHsdpaHsupa = 6,
    /// • 7: E-UTRAN
    Eutran = 7,
    /// • 8: EC-GSM-IoT (A/Gb mode)
    EcGsmIot = 8,
    /// • 9: E-UTRAN (NB-S1 mode)
    EutranNbS1 = 9,
}
