//! In-memory collaborators
//!
//! Suitable for embedding hosts that keep their registries in process, and for tests.

use super::{DeviceEntry, DeviceRegistry, EventSource, Gateway, GatewayRegistry, RegistryError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Device registry backed by a map of device id → entry
#[derive(Debug, Default)]
pub struct InMemoryDeviceRegistry {
    devices: RwLock<HashMap<String, DeviceEntry>>,
}

impl InMemoryDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with entries
    pub fn with_devices(devices: impl IntoIterator<Item = DeviceEntry>) -> Self {
        let devices = devices
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect();
        Self {
            devices: RwLock::new(devices),
        }
    }

    /// Insert or replace a device entry
    pub async fn insert(&self, entry: DeviceEntry) {
        debug!(device_id = %entry.id, model = ?entry.model, "Device registered");
        self.devices.write().await.insert(entry.id.clone(), entry);
    }

    pub async fn remove(&self, device_id: &str) -> Option<DeviceEntry> {
        self.devices.write().await.remove(device_id)
    }
}

#[async_trait]
impl DeviceRegistry for InMemoryDeviceRegistry {
    async fn get_device(&self, device_id: &str) -> Result<DeviceEntry, RegistryError> {
        self.devices
            .read()
            .await
            .get(device_id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(device_id.to_string()))
    }
}

/// Gateway whose event sources are added and removed by the host
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    events: RwLock<Vec<EventSource>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = EventSource>) -> Self {
        Self {
            events: RwLock::new(events.into_iter().collect()),
        }
    }

    /// Register a live event source, e.g. once the gateway has created it
    pub async fn add_event(&self, event: EventSource) {
        debug!(device_id = %event.device_id, serial = %event.serial, "Event source added");
        self.events.write().await.push(event);
    }

    /// Drop every event source owned by a device
    pub async fn remove_device_events(&self, device_id: &str) {
        self.events
            .write()
            .await
            .retain(|event| event.device_id != device_id);
    }

    /// Forget all event sources, as on gateway disconnect
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn events(&self) -> Vec<EventSource> {
        self.events.read().await.clone()
    }
}

/// Ordered list of configured gateways
#[derive(Default)]
pub struct InMemoryGatewayRegistry {
    gateways: RwLock<Vec<Arc<dyn Gateway>>>,
}

impl InMemoryGatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gateways(gateways: impl IntoIterator<Item = Arc<dyn Gateway>>) -> Self {
        Self {
            gateways: RwLock::new(gateways.into_iter().collect()),
        }
    }

    pub async fn add_gateway(&self, gateway: Arc<dyn Gateway>) {
        self.gateways.write().await.push(gateway);
    }
}

#[async_trait]
impl GatewayRegistry for InMemoryGatewayRegistry {
    async fn gateways(&self) -> Vec<Arc<dyn Gateway>> {
        self.gateways.read().await.clone()
    }
}
