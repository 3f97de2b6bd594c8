use crate::platform::{AttachError, RegistryError};
use validator::ValidationErrors;

/// Errors raised while validating, listing or attaching device triggers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TriggerError {
    /// The trigger config does not have the expected shape
    #[error("invalid trigger config: {0}")]
    InvalidConfig(String),

    /// The model is not a supported remote, or the gesture is not valid for it
    #[error("unsupported device configuration: {0}")]
    UnsupportedDeviceConfiguration(String),

    /// The device is supported but its gateway has not created an event source yet
    #[error("device not ready: no deCONZ event source for device {0}")]
    DeviceNotReady(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Attach(#[from] AttachError),
}

impl TriggerError {
    /// Stable code for host-side error reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            TriggerError::InvalidConfig(_) => "TRIGGER4000",
            TriggerError::UnsupportedDeviceConfiguration(_) => "TRIGGER4001",
            TriggerError::DeviceNotReady(_) => "TRIGGER5031",
            TriggerError::Registry(RegistryError::NotFound(_)) => "DEVICE4041",
            TriggerError::Registry(RegistryError::Unavailable(_)) => "DEVICE5031",
            TriggerError::Attach(_) => "TRIGGER5001",
        }
    }

    /// Whether the caller may succeed by trying again later (e.g. after gateway reconnect)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TriggerError::DeviceNotReady(_)
                | TriggerError::Registry(RegistryError::Unavailable(_))
        )
    }
}

/// Convenience constructors
impl TriggerError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        TriggerError::InvalidConfig(msg.into())
    }

    pub fn unsupported_model(model: &str) -> Self {
        TriggerError::UnsupportedDeviceConfiguration(format!(
            "model '{}' is not a supported remote",
            model
        ))
    }

    pub fn unsupported_trigger(model: &str, kind: &str, subtype: &str) -> Self {
        TriggerError::UnsupportedDeviceConfiguration(format!(
            "trigger ('{}', '{}') is not supported by model '{}'",
            kind, subtype, model
        ))
    }

    pub fn device_not_ready(device_id: impl Into<String>) -> Self {
        TriggerError::DeviceNotReady(device_id.into())
    }
}

/// Schema failures from `validator` become `InvalidConfig`
impl From<ValidationErrors> for TriggerError {
    fn from(errors: ValidationErrors) -> Self {
        TriggerError::InvalidConfig(errors.to_string())
    }
}
