use super::dto::{EventTriggerConfig, TriggerList, TriggerRequest};
use crate::domain::catalog::{self, Remote};
use crate::platform::{
    AutomationInfo, DeviceEntry, DeviceRegistry, EventSource, EventTriggerAttacher,
    GatewayRegistry,
};
use crate::utils::TriggerError;
use crate::PLATFORM_DEVICE;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

/// Device triggers for deCONZ remotes
///
/// Stateless apart from its collaborators: every call resolves the device again, so
/// registry or gateway changes are picked up without invalidation.
pub struct DeviceTriggerService<A: EventTriggerAttacher> {
    devices: Arc<dyn DeviceRegistry>,
    gateways: Arc<dyn GatewayRegistry>,
    attacher: A,
}

impl<A: EventTriggerAttacher> DeviceTriggerService<A> {
    pub fn new(
        devices: Arc<dyn DeviceRegistry>,
        gateways: Arc<dyn GatewayRegistry>,
        attacher: A,
    ) -> Self {
        Self {
            devices,
            gateways,
            attacher,
        }
    }

    /// Check that the device is a supported remote and offers the requested gesture
    ///
    /// Returns the request unchanged on success.
    pub async fn validate_trigger_config(
        &self,
        request: TriggerRequest,
    ) -> Result<TriggerRequest, TriggerError> {
        request.validate()?;

        let device = self.devices.get_device(&request.device_id).await?;
        let remote = supported_remote(&device)?;

        if !remote.contains(&request.kind, &request.subtype) {
            warn!(
                device_id = %request.device_id,
                model = ?device.model,
                trigger_type = %request.kind,
                subtype = %request.subtype,
                "Trigger not supported by remote"
            );
            return Err(TriggerError::unsupported_trigger(
                model_of(&device),
                &request.kind,
                &request.subtype,
            ));
        }

        debug!(
            device_id = %request.device_id,
            trigger_type = %request.kind,
            subtype = %request.subtype,
            "Trigger config validated"
        );
        Ok(request)
    }

    /// Triggers offered by a device, `None` when its model is not a supported remote
    pub async fn get_triggers(&self, device_id: &str) -> Result<Option<TriggerList>, TriggerError> {
        let device = self.devices.get_device(device_id).await?;

        let Some(remote) = device.model.as_deref().and_then(catalog::lookup) else {
            debug!(device_id = %device_id, model = ?device.model, "No triggers for device");
            return Ok(None);
        };

        debug!(
            device_id = %device_id,
            model = ?device.model,
            count = remote.len(),
            "Listing device triggers"
        );
        Ok(Some(TriggerList::new(device_id, remote)))
    }

    /// Bind a trigger to the host's event trigger
    ///
    /// Resolves the gesture code and the device's event source serial, then hands an
    /// `event` trigger listening on `deconz_event` to the attacher. The returned handle
    /// comes straight from the attacher.
    pub async fn attach_trigger(
        &self,
        request: &TriggerRequest,
        action: A::Action,
        info: AutomationInfo,
    ) -> Result<A::Handle, TriggerError> {
        let device = self.devices.get_device(&request.device_id).await?;
        let remote = supported_remote(&device)?;

        let code = remote
            .code_of(&request.kind, &request.subtype)
            .ok_or_else(|| {
                TriggerError::unsupported_trigger(
                    model_of(&device),
                    &request.kind,
                    &request.subtype,
                )
            })?;

        let Some(source) = self.find_event_source(&device.id).await else {
            warn!(device_id = %device.id, "No deCONZ event source for device");
            return Err(TriggerError::device_not_ready(device.id));
        };

        let config = EventTriggerConfig::deconz(source.serial, code);

        let handle = self
            .attacher
            .attach(config, action, info, PLATFORM_DEVICE)
            .await?;

        info!(
            device_id = %device.id,
            trigger_type = %request.kind,
            subtype = %request.subtype,
            code = code,
            "Device trigger attached"
        );
        Ok(handle)
    }

    /// First event source owned by the device across all configured gateways
    pub async fn find_event_source(&self, device_id: &str) -> Option<EventSource> {
        for gateway in self.gateways.gateways().await {
            if let Some(source) = gateway
                .events()
                .await
                .into_iter()
                .find(|event| event.device_id == device_id)
            {
                return Some(source);
            }
        }
        None
    }
}

fn model_of(device: &DeviceEntry) -> &str {
    device.model.as_deref().unwrap_or_default()
}

fn supported_remote(device: &DeviceEntry) -> Result<&'static Remote, TriggerError> {
    let model = model_of(device);
    catalog::lookup(model).ok_or_else(|| {
        warn!(device_id = %device.id, model = %model, "Device model is not a supported remote");
        TriggerError::unsupported_model(model)
    })
}
