//! FEMS Client Library
//!
//! Provides a typed HTTP client for polling telemetry channels from a
//! FEMS (Field Energy Management System) REST interface, plus a leveled
//! colored console logger for polling-loop diagnostics.
//!
//! # Example
//!
//! ```rust,no_run
//! use fems_client::{ConsoleLogger, Endpoint, FemsClient};
//!
//! fn main() -> fems_client::Result<()> {
//!     let client = FemsClient::new("192.168.180.2", 80, "x", "user")?;
//!
//!     // Read the battery state of charge (percent)
//!     let soc = client.fetch_int(Endpoint::ChargingState)?;
//!
//!     // Read the current grid exchange (watts, negative = feed-in)
//!     let grid = client.fetch_int(Endpoint::GridPower)?;
//!
//!     let log = ConsoleLogger::global();
//!     log.info(&format!("soc: {soc} %, grid: {grid} W"));
//!
//!     Ok(())
//! }
//! ```
//!
//! Every `fetch_int` call is a single blocking HTTP exchange; there is no
//! retry, caching, or connection state beyond reqwest's own pool. Calls
//! may be issued from multiple threads concurrently.
//!
//! # Testing
//!
//! The `testing` module provides a local HTTP server for integration
//! tests:
//!
//! ```rust,ignore
//! use fems_client::testing::TestServer;
//!
//! let server = TestServer::start(router)?;
//! let client = server.client("admin", "secret")?;
//! let value = client.fetch_int(Endpoint::BatteryPower)?;
//! ```

mod client;
mod endpoint;
mod error;
pub mod logger;
pub mod testing;

pub use client::FemsClient;
pub use endpoint::Endpoint;
pub use error::{FemsError, Result};
pub use logger::ConsoleLogger;
