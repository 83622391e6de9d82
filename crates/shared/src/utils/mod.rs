mod logs;
mod metrics;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{GuardMetrics, GuardOutcome, Method, Metrics, Status};
pub use self::shutdown::shutdown_signal;
