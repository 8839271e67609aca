use crate::{
    client::Client,
    command::{
        network_service::GetOperatorSelection,
        psn::{
            types::{GPRSAttachedState, PDPContextStatus},
            GetGPRSAttached, GetGPRSNetworkRegistrationStatus, SetPDPContextState,
        },
    },
    error::{Error, GprsError},
    registration::GprsRegistration,
    traits::{Clock, Transport},
};

/// PDP context activated by [`Gprs::register_gprs`]
pub const CONTEXT_ID: u8 = 1;

pub trait Gprs {
    /// Bring up packet data: read the operator's access technology, check
    /// the packet domain attach, activate PDP context 1 and read back the
    /// packet domain registration.
    ///
    /// Runs in that order and stops at the first failing stage. A context
    /// that was activated is left active.
    fn register_gprs(&mut self) -> Result<GprsRegistration, Error>;
}

impl<T, C, const N: usize> Gprs for Client<T, C, N>
where
    T: Transport,
    C: Clock,
{
    fn register_gprs(&mut self) -> Result<GprsRegistration, Error> {
        let operator = self.query(&GetOperatorSelection).map_err(|e| {
            warn!("Operator query failed: {:?}", e);
            GprsError::Operator
        })?;
        let Some(operator_act) = operator.act else {
            warn!("Operator reports no access technology");
            return Err(GprsError::Operator.into());
        };

        match self.query(&GetGPRSAttached) {
            Ok(attached) if attached.state == GPRSAttachedState::Attached => {}
            Ok(_) => {
                warn!("Not attached to the packet domain");
                return Err(GprsError::PacketDomain.into());
            }
            Err(e) => {
                warn!("Packet domain attach query failed: {:?}", e);
                return Err(GprsError::PacketDomain.into());
            }
        }

        self.send(&SetPDPContextState {
            status: PDPContextStatus::Activated,
            cid: CONTEXT_ID,
        })
        .map_err(|e| {
            warn!("PDP context activation failed: {:?}", e);
            GprsError::PdpContext
        })?;

        let reg = self
            .query(&GetGPRSNetworkRegistrationStatus)
            .map_err(|e| {
                warn!("GPRS registration query failed: {:?}", e);
                GprsError::Network
            })?;

        let registration = GprsRegistration {
            stat: reg.stat,
            act: reg.act.unwrap_or(operator_act),
        };
        info!(
            "GPRS registration: {:?} on {:?}",
            registration.stat, registration.act
        );
        Ok(registration)
    }
}
