//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing and config produce:
//!     → tracing events (registration, reload, rejected routes)
//!     → metrics.rs (match and registration counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
