use crate::error::{ReadingFile, Result, YamlParseFromFile};
use k8s_openapi::api::apps::v1::StatefulSet;
use snafu::ResultExt;
use std::{fs, path::Path};

/// Read a StatefulSet manifest from a YAML or JSON file.
pub fn read_statefulset<P>(path: P) -> Result<StatefulSet>
where
    P: AsRef<Path>,
{
    let filepath = path.as_ref();
    let buf = fs::read(filepath).context(ReadingFile {
        filepath: filepath.to_path_buf(),
    })?;

    serde_yaml::from_slice(buf.as_slice()).context(YamlParseFromFile {
        filepath: filepath.to_path_buf(),
    })
}
