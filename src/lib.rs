pub mod classifier;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod tracker;
pub mod transport;
pub mod ui;

#[cfg(test)]
mod testing;

pub use classifier::classify_page;
pub use client::TrackingClient;
pub use config::{resolve_config, TrackerConfig};
pub use errors::{FailureKind, TrackerError};
pub use form::{FormFields, FormOutcome, VisitorForm};
pub use tracker::{PageContext, PageLoadReport, Tracker};
pub use transport::{ApiTransport, HttpTransport};
