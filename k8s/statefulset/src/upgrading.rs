use k8s_openapi::api::apps::v1::StatefulSet;
use kube::ResourceExt;
use std::fmt;
use tracing::{debug, trace};

/// The rollout state of a StatefulSet, along with the condition which decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeState {
    /// The StatefulSet controller has not reconciled this object yet, i.e. there is no
    /// .status.observedGeneration.
    NotObserved,
    /// Pods of two different revisions may coexist.
    RevisionMismatch {
        current_revision: String,
        update_revision: String,
    },
    /// The spec was edited after the last reconciliation and the replica count already matches,
    /// so the pending change must be to the pod template.
    GenerationNotObserved {
        generation: i64,
        observed_generation: i64,
    },
    /// No rollout in progress.
    Steady,
}

impl UpgradeState {
    /// Returns true if the state is that of an ongoing rollout.
    pub fn is_upgrading(&self) -> bool {
        matches!(
            self,
            Self::RevisionMismatch { .. } | Self::GenerationNotObserved { .. }
        )
    }
}

impl fmt::Display for UpgradeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotObserved => write!(f, "not yet observed by the StatefulSet controller"),
            Self::RevisionMismatch {
                current_revision,
                update_revision,
            } => write!(
                f,
                "upgrading from revision '{current_revision}' to revision '{update_revision}'"
            ),
            Self::GenerationNotObserved {
                generation,
                observed_generation,
            } => write!(
                f,
                "upgrading, generation {generation} not yet observed (last observed {observed_generation})"
            ),
            Self::Steady => write!(f, "steady"),
        }
    }
}

/// Classify the rollout state of a StatefulSet. The conditions are checked in this order:
/// 1. No .status.observedGeneration: NotObserved.
/// 2. .status.currentRevision differs from .status.updateRevision: RevisionMismatch.
/// 3. .metadata.generation is ahead of .status.observedGeneration, and .spec.replicas is set
///    and equal to .status.replicas: GenerationNotObserved.
/// 4. Steady.
///
/// An unset .spec.replicas never satisfies (3), as a pending scale operation can't be ruled out.
pub fn upgrade_state(set: &StatefulSet) -> UpgradeState {
    let (status, observed_generation) = match set
        .status
        .as_ref()
        .and_then(|status| status.observed_generation.map(|observed| (status, observed)))
    {
        Some(observed) => observed,
        None => {
            trace!(
                statefulset.name = %set.name_any(),
                "StatefulSet has no observed generation"
            );
            return UpgradeState::NotObserved;
        }
    };

    // Revisions are opaque, unset reads the same as empty.
    let current_revision = status.current_revision.as_deref().unwrap_or_default();
    let update_revision = status.update_revision.as_deref().unwrap_or_default();
    if current_revision != update_revision {
        debug!(
            statefulset.name = %set.name_any(),
            current_revision,
            update_revision,
            "StatefulSet revisions differ"
        );
        return UpgradeState::RevisionMismatch {
            current_revision: current_revision.to_string(),
            update_revision: update_revision.to_string(),
        };
    }

    let generation = set.metadata.generation.unwrap_or_default();
    let desired_replicas = set.spec.as_ref().and_then(|spec| spec.replicas);
    if generation > observed_generation && desired_replicas == Some(status.replicas) {
        debug!(
            statefulset.name = %set.name_any(),
            generation,
            observed_generation,
            replicas = status.replicas,
            "StatefulSet spec changed without a change in replicas"
        );
        return UpgradeState::GenerationNotObserved {
            generation,
            observed_generation,
        };
    }

    UpgradeState::Steady
}

/// Returns true if the StatefulSet is in the middle of a rollout.
pub fn statefulset_is_upgrading(set: &StatefulSet) -> bool {
    upgrade_state(set).is_upgrading()
}
