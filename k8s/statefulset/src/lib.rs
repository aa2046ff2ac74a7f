/// Module for StatefulSet helper errors.
pub mod error;
/// Reading StatefulSet manifests from disk.
pub mod manifest;
/// Volume mount resolution against volumes and claim templates.
pub mod mounts;
/// Rollout classification of a StatefulSet.
pub mod upgrading;

pub use mounts::{not_exist_mount, resolvable_volume_names, validate_volume_mounts};
pub use upgrading::{statefulset_is_upgrading, upgrade_state, UpgradeState};

#[cfg(test)]
pub(crate) mod test_utils;
