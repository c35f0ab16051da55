pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::WorkOrderError;
pub use result::WorkOrderResult;
