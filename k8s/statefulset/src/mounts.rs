use crate::error::{DanglingVolumeMounts, Result};
use k8s_openapi::api::{apps::v1::StatefulSet, core::v1::PodSpec};
use kube::ResourceExt;
use snafu::ensure;
use std::collections::HashSet;
use tracing::debug;

/// The pod template's PodSpec, if any.
fn pod_spec(set: &StatefulSet) -> Option<&PodSpec> {
    set.spec.as_ref().and_then(|spec| spec.template.spec.as_ref())
}

/// Names of the volume claim templates. Templates without a name are skipped.
fn claim_template_names(set: &StatefulSet) -> impl Iterator<Item = &str> {
    set.spec
        .iter()
        .flat_map(|spec| spec.volume_claim_templates.iter().flatten())
        .filter_map(|claim| claim.metadata.name.as_deref())
}

/// Names of the volumes declared in the pod template.
fn template_volume_names(set: &StatefulSet) -> impl Iterator<Item = &str> {
    pod_spec(set)
        .into_iter()
        .flat_map(|pod| pod.volumes.iter().flatten())
        .map(|volume| volume.name.as_str())
}

/// Names referenced by the volumeMounts of every container in the pod template.
fn volume_mount_names(set: &StatefulSet) -> impl Iterator<Item = &str> {
    pod_spec(set)
        .into_iter()
        .flat_map(|pod| pod.containers.iter())
        .flat_map(|container| container.volume_mounts.iter().flatten())
        .map(|mount| mount.name.as_str())
}

/// All names a volumeMount of the new StatefulSet may refer to: the volume claim templates of
/// both the new and the old StatefulSet, and the volumes of the new pod template. The old claim
/// templates are included as their PersistentVolumeClaims may still be bound to the Pods.
pub fn resolvable_volume_names<'a>(
    new: &'a StatefulSet,
    old: &'a StatefulSet,
) -> HashSet<&'a str> {
    claim_template_names(new)
        .chain(claim_template_names(old))
        .chain(template_volume_names(new))
        .collect()
}

/// Returns the names of the volumeMounts in the new StatefulSet's containers which resolve to
/// none of the names from `resolvable_volume_names`. The returned set is unordered.
pub fn not_exist_mount(new: &StatefulSet, old: &StatefulSet) -> HashSet<String> {
    let resolvable = resolvable_volume_names(new, old);

    let dangling: HashSet<String> = volume_mount_names(new)
        .filter(|name| !resolvable.contains(name))
        .map(ToString::to_string)
        .collect();

    if !dangling.is_empty() {
        debug!(
            statefulset.name = %new.name_any(),
            mounts = ?sorted(&dangling),
            "Found volume mounts with no volume source"
        );
    }

    dangling
}

/// The names in lexical order, for stable output.
pub(crate) fn sorted(names: &HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = names.iter().cloned().collect();
    names.sort();
    names
}

/// Fails with the sorted list of dangling volumeMount names if the new StatefulSet has any.
pub fn validate_volume_mounts(new: &StatefulSet, old: &StatefulSet) -> Result<()> {
    let mounts = sorted(&not_exist_mount(new, old));

    ensure!(
        mounts.is_empty(),
        DanglingVolumeMounts {
            name: new.name_any(),
            mounts,
        }
    );

    Ok(())
}
