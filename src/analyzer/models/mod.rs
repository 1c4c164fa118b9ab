/// Per-core residency and frequency records
mod core_record;
/// Named profile collections with an archived flag
mod group;
/// Derived threading-behavior metrics
mod insights;
/// The per-report performance profile
mod profile;

pub use core_record::{CoreRecord, CoreType, ProfileMetadata};
pub use group::Group;
pub use insights::{Insights, ThreadingModel};
pub use profile::Profile;
