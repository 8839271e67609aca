use crate::{
    client::Client,
    command::network_service::{
        responses::SignalQuality, GetNetworkRegistrationStatus, GetSignalQuality,
    },
    error::Error,
    registration::Status,
    traits::{Clock, Transport},
};

pub trait Gsm {
    /// Circuit switched registration state, as reported by `AT+CREG?`.
    ///
    /// A module that is not registered is not an error; use
    /// [`Status::is_registered`] on the result.
    fn register_network(&mut self) -> Result<Status, Error>;

    fn signal_quality(&mut self) -> Result<SignalQuality, Error>;
}

impl<T, C, const N: usize> Gsm for Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    fn register_network(&mut self) -> Result<Status, Error> {
        let reg = self
            .query(&GetNetworkRegistrationStatus)
            .inspect_err(|e| warn!("Network registration query failed: {:?}", e))?;

        if reg.stat.is_registered() {
            info!("Registered on network: {:?}", reg.stat);
        } else {
            debug!("Not registered: {:?}", reg.stat);
        }
        Ok(reg.stat)
    }

    fn signal_quality(&mut self) -> Result<SignalQuality, Error> {
        self.query(&GetSignalQuality)
    }
}
