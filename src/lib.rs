//! a365 - Agent 365 command-line tool.
//!
//! This crate carries the tool's update check: it asks the package feed
//! which versions are published, picks the newest one, and tells the user
//! how to upgrade when it is newer than the running binary.
//!
//! # Example
//!
//! ```
//! use a365::version::semver::{is_newer_version, select_latest};
//!
//! let published = vec!["1.0.0".to_string(), "1.2.0-preview.4".to_string()];
//! let latest = select_latest(&published).unwrap();
//! assert_eq!(latest, "1.2.0-preview.4");
//! assert!(is_newer_version(latest, "1.1.0"));
//! ```

pub mod config;
pub mod environment;
pub mod logging;
pub mod output;
pub mod version;
