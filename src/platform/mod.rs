//! Host platform collaborators
//!
//! The trigger service never owns devices, gateways or event subscriptions. It talks
//! to the automation host through these traits:
//! - `DeviceRegistry`: device id → model
//! - `GatewayRegistry` / `Gateway`: live deCONZ event sources per gateway
//! - `EventTriggerAttacher`: the host's generic event trigger

pub mod memory;

use crate::domain::trigger::EventTriggerConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use memory::{InMemoryDeviceRegistry, InMemoryGateway, InMemoryGatewayRegistry};

/// Device registry entry as seen by this integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub id: String,
    /// Manufacturer model identifier, absent for devices that never reported one
    pub model: Option<String>,
}

impl DeviceEntry {
    pub fn new(id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: Some(model.into()),
        }
    }

    pub fn without_model(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("device not found: {0}")]
    NotFound(String),
    #[error("device registry unavailable: {0}")]
    Unavailable(String),
}

/// Resolves device identifiers to registry entries
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    async fn get_device(&self, device_id: &str) -> Result<DeviceEntry, RegistryError>;
}

/// Live per-device handle through which a gateway delivers `deconz_event`s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    /// Registry id of the owning device
    pub device_id: String,
    /// deCONZ serial, published as `unique_id` in event data
    pub serial: String,
}

impl EventSource {
    pub fn new(device_id: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            serial: serial.into(),
        }
    }
}

/// One configured deCONZ gateway connection
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Snapshot of the event sources currently registered on this gateway
    async fn events(&self) -> Vec<EventSource>;
}

/// All configured gateway connections
#[async_trait]
pub trait GatewayRegistry: Send + Sync {
    async fn gateways(&self) -> Vec<Arc<dyn Gateway>>;
}

/// Automation run metadata, handed to the event trigger untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationInfo {
    pub name: String,
    #[serde(default)]
    pub variables: serde_json::Value,
}

impl AutomationInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: serde_json::Value::Null,
        }
    }

    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = variables;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("event trigger attach failed: {0}")]
pub struct AttachError(pub String);

/// The host's generic event trigger
///
/// Owns subscription, matching, dispatch and teardown. `Handle` is whatever the host
/// uses to cancel the subscription and is returned to the caller unchanged.
#[async_trait]
pub trait EventTriggerAttacher: Send + Sync {
    type Action: Send + 'static;
    type Handle: Send;

    async fn attach(
        &self,
        config: EventTriggerConfig,
        action: Self::Action,
        info: AutomationInfo,
        platform_type: &str,
    ) -> Result<Self::Handle, AttachError>;
}
