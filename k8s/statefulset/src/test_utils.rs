use k8s_openapi::{
    api::{
        apps::v1::{StatefulSet, StatefulSetSpec, StatefulSetStatus},
        core::v1::{Container, PersistentVolumeClaim, PodSpec, Volume, VolumeMount},
    },
    apimachinery::pkg::apis::meta::v1::ObjectMeta,
};

/// A named StatefulSet in the default namespace, with nothing else set.
pub(crate) fn statefulset(name: &str) -> StatefulSet {
    StatefulSet {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mutable access to the status, creating an empty one if absent.
pub(crate) fn status_mut(set: &mut StatefulSet) -> &mut StatefulSetStatus {
    set.status.get_or_insert_with(Default::default)
}

/// Mutable access to the spec, creating an empty one if absent.
pub(crate) fn spec_mut(set: &mut StatefulSet) -> &mut StatefulSetSpec {
    set.spec.get_or_insert_with(Default::default)
}

/// Mutable access to the pod template's PodSpec, creating empty ones if absent.
pub(crate) fn pod_spec_mut(set: &mut StatefulSet) -> &mut PodSpec {
    spec_mut(set).template.spec.get_or_insert_with(Default::default)
}

/// Replace the volume claim templates with templates of these names.
pub(crate) fn with_claim_templates(set: &mut StatefulSet, names: &[&str]) {
    spec_mut(set).volume_claim_templates = Some(
        names
            .iter()
            .map(|name| PersistentVolumeClaim {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            })
            .collect(),
    );
}

/// Replace the pod template volumes with empty-source volumes of these names.
pub(crate) fn with_volumes(set: &mut StatefulSet, names: &[&str]) {
    pod_spec_mut(set).volumes = Some(
        names
            .iter()
            .map(|name| Volume {
                name: name.to_string(),
                ..Default::default()
            })
            .collect(),
    );
}

/// A container which mounts volumes of these names.
pub(crate) fn container(name: &str, mounts: &[&str]) -> Container {
    Container {
        name: name.to_string(),
        volume_mounts: Some(
            mounts
                .iter()
                .map(|mount| VolumeMount {
                    name: mount.to_string(),
                    mount_path: format!("/mnt/{mount}"),
                    ..Default::default()
                })
                .collect(),
        ),
        ..Default::default()
    }
}

/// Replace the pod template containers.
pub(crate) fn with_containers(set: &mut StatefulSet, containers: Vec<Container>) {
    pod_spec_mut(set).containers = containers;
}
