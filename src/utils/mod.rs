pub mod error;
pub mod logging;

pub use error::TriggerError;
pub use logging::init_logging;
