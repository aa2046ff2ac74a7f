use snafu::Snafu;
use std::path::PathBuf;

/// Errors from the wrappers around the StatefulSet predicates. The predicates themselves never
/// fail.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum Error {
    /// Error for when a manifest file could not be read.
    #[snafu(display("Failed to read file {}: {}", filepath.display(), source))]
    ReadingFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    /// Error for when a manifest file could not be parsed as a StatefulSet.
    #[snafu(display(
        "Failed to parse StatefulSet from file {}: {}",
        filepath.display(),
        source
    ))]
    YamlParseFromFile {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },

    /// Error for when containers of a StatefulSet mount volumes which resolve to neither a
    /// pod template volume nor a volume claim template.
    #[snafu(display(
        "StatefulSet '{}' mounts volumes with no volume source: {}",
        name,
        mounts.join(", ")
    ))]
    DanglingVolumeMounts { name: String, mounts: Vec<String> },
}

/// A wrapper type to remove repeated Result<T, Error> returns.
pub type Result<T, E = Error> = std::result::Result<T, E>;
