use crate::domain::catalog::Remote;
use crate::utils::TriggerError;
use crate::{CONF_EVENT, CONF_UNIQUE_ID, DECONZ_EVENT, DOMAIN, PLATFORM_DEVICE, PLATFORM_EVENT};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn default_platform() -> String {
    PLATFORM_DEVICE.to_string()
}

fn default_domain() -> String {
    DOMAIN.to_string()
}

fn validate_platform(platform: &str) -> Result<(), ValidationError> {
    if platform != PLATFORM_DEVICE {
        let mut error = ValidationError::new("platform");
        error.message = Some(format!("platform must be '{}'", PLATFORM_DEVICE).into());
        return Err(error);
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    if domain != DOMAIN {
        let mut error = ValidationError::new("domain");
        error.message = Some(format!("domain must be '{}'", DOMAIN).into());
        return Err(error);
    }
    Ok(())
}

/// Device trigger config as stored in an automation
///
/// `platform` and `domain` default to `device` / `deconz` when omitted.
/// `subtype` is required but may be empty for gestures without a button or side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TriggerRequest {
    #[serde(default = "default_platform")]
    #[validate(custom(function = "validate_platform"))]
    pub platform: String,

    #[serde(default = "default_domain")]
    #[validate(custom(function = "validate_domain"))]
    pub domain: String,

    #[validate(length(min = 1, message = "device_id is required"))]
    pub device_id: String,

    /// Gesture type
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub kind: String,

    pub subtype: String,
}

impl TriggerRequest {
    pub fn new(
        device_id: impl Into<String>,
        kind: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            platform: default_platform(),
            domain: default_domain(),
            device_id: device_id.into(),
            kind: kind.into(),
            subtype: subtype.into(),
        }
    }

    /// Parse and schema-check a raw trigger config
    pub fn from_value(value: serde_json::Value) -> Result<Self, TriggerError> {
        let request: TriggerRequest = serde_json::from_value(value)
            .map_err(|e| TriggerError::invalid_config(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }
}

/// One entry of the trigger list offered for a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDescriptor {
    pub device_id: String,
    pub domain: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
}

impl TriggerDescriptor {
    /// Whether this descriptor describes the same trigger as a request
    pub fn matches(&self, request: &TriggerRequest) -> bool {
        self.device_id == request.device_id
            && self.kind == request.kind
            && self.subtype == request.subtype
    }
}

impl From<TriggerDescriptor> for TriggerRequest {
    fn from(descriptor: TriggerDescriptor) -> Self {
        Self {
            platform: descriptor.platform,
            domain: descriptor.domain,
            device_id: descriptor.device_id,
            kind: descriptor.kind,
            subtype: descriptor.subtype,
        }
    }
}

/// Triggers available for one device
///
/// Descriptors are built on demand; `iter` can be called any number of times and
/// always yields the catalog entries in table order.
#[derive(Debug, Clone)]
pub struct TriggerList {
    device_id: String,
    remote: &'static Remote,
}

impl TriggerList {
    pub fn new(device_id: impl Into<String>, remote: &'static Remote) -> Self {
        Self {
            device_id: device_id.into(),
            remote,
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn len(&self) -> usize {
        self.remote.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remote.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TriggerDescriptor> + '_ {
        self.remote.gestures().map(move |(gesture, _)| TriggerDescriptor {
            device_id: self.device_id.clone(),
            domain: DOMAIN.to_string(),
            platform: PLATFORM_DEVICE.to_string(),
            kind: gesture.kind.to_string(),
            subtype: gesture.subtype.to_string(),
        })
    }
}

impl<'a> IntoIterator for &'a TriggerList {
    type Item = TriggerDescriptor;
    type IntoIter = Box<dyn Iterator<Item = TriggerDescriptor> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Event data a `deconz_event` must carry for the trigger to fire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// Serial of the device's event source
    pub unique_id: String,
    /// Gesture code
    pub event: u32,
}

impl EventData {
    /// Whether a raw event payload carries this serial and code
    pub fn matches(&self, payload: &serde_json::Value) -> bool {
        payload.get(CONF_UNIQUE_ID).and_then(|v| v.as_str()) == Some(self.unique_id.as_str())
            && payload.get(CONF_EVENT).and_then(|v| v.as_u64()) == Some(u64::from(self.event))
    }
}

/// Config for the host's generic event trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTriggerConfig {
    pub platform: String,
    pub event_type: String,
    pub event_data: EventData,
}

impl EventTriggerConfig {
    /// Listen on `deconz_event` for one serial and code
    pub fn deconz(unique_id: impl Into<String>, event: u32) -> Self {
        Self {
            platform: PLATFORM_EVENT.to_string(),
            event_type: DECONZ_EVENT.to_string(),
            event_data: EventData {
                unique_id: unique_id.into(),
                event,
            },
        }
    }
}
