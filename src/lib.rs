//! Device triggers for deCONZ Zigbee remotes
//!
//! Translates button gestures of supported remotes (Hue, IKEA TRADFRI, Aqara) into
//! device triggers an automation engine can list, validate and attach. Raw events
//! come from the deCONZ gateway as `deconz_event`s; attaching a trigger registers a
//! generic event trigger filtered by the device's serial and gesture code.

pub mod config;
pub mod domain;
pub mod platform;
pub mod utils;

pub use domain::catalog;
pub use domain::trigger::{
    DeviceTriggerService, EventData, EventTriggerConfig, TriggerDescriptor, TriggerList,
    TriggerRequest,
};
pub use utils::TriggerError;

/// Integration domain carried by every trigger descriptor
pub const DOMAIN: &str = "deconz";
/// Event type of the raw gateway event stream
pub const DECONZ_EVENT: &str = "deconz_event";
pub const CONF_UNIQUE_ID: &str = "unique_id";
pub const CONF_EVENT: &str = "event";
pub const PLATFORM_DEVICE: &str = "device";
pub const PLATFORM_EVENT: &str = "event";
