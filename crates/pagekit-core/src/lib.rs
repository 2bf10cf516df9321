pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod validate;

pub use config::PagerConfig;
pub use error::PagerError;
pub use logging::{LogEntry, Loggable};
pub use result::PagerResult;
