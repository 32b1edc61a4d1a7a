//! Version checking layer for the a365 update notice
//!
//! This module decides whether the package feed has published a release
//! newer than the running tool and what command upgrades to it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Feed     │────▶│   Checker   │────▶│   Upgrade   │
//! │  (fetch)    │     │ (orchestr.) │     │  (command)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │    Feeds    │     │   Semver    │
//! │   (NuGet)   │     │(parse, cmp) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Update check orchestration and cancellation
//! - [`feed`]: Feed trait for listing published versions
//! - [`feeds`]: Concrete feed implementations (NuGet)
//! - [`semver`]: Version parsing, latest-candidate selection and comparison
//! - [`upgrade`]: Upgrade command construction
//! - [`error`]: Error types for feed and check operations
//! - [`types`]: Common types like `Version` and `VersionCheckResult`

pub mod checker;
pub mod error;
pub mod feed;
pub mod feeds;
pub mod semver;
pub mod types;
pub mod upgrade;
