#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns diagnostics plumbing for the bdelta workspace: the
//! verbosity model driven by repeated `-v` flags, the `tracing` subscriber
//! installed by the binary, and subsystem macros that tag events with stable
//! targets (`bdelta::align`, `bdelta::build`, `bdelta::apply`, ...).
//!
//! # Design
//!
//! Library crates only emit events through the macros in this crate; they
//! never install a subscriber. The binary calls [`init_tracing`] once with a
//! [`VerbosityConfig`], which installs a `tracing-subscriber` fmt layer on
//! stderr filtered by an `EnvFilter`. `RUST_LOG`, when set, overrides the
//! level derived from the verbosity count.
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, trace_build};
//! use tracing::level_filters::LevelFilter;
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level_filter(), LevelFilter::DEBUG);
//!
//! // Without a subscriber installed the event is simply discarded.
//! trace_build!("aligned {} bytes", 42);
//! ```

mod config;
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use tracing_bridge::{TARGET_PREFIX, init_tracing, init_tracing_with_writer};
