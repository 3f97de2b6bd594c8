//! Device trigger resolver, lister and binder

pub mod dto;
pub mod service;

pub use dto::{EventData, EventTriggerConfig, TriggerDescriptor, TriggerList, TriggerRequest};
pub use service::DeviceTriggerService;
