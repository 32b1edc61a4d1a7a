//! Feed implementations for fetching published versions

pub mod nuget;

pub use nuget::NuGetFeed;
