use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// These are the supported cli configuration options for statefulset-check.
#[derive(Parser, Debug)]
#[command(name = "statefulset-check", version)]
#[command(
    about = "Checks StatefulSet manifests for an ongoing rollout and for dangling volume mounts",
    long_about = None
)]
pub(crate) struct CliArgs {
    #[command(subcommand)]
    check: Check,

    /// Use ANSI colours for the logs and the console output.
    #[arg(
        long,
        global = true,
        env = "ANSI_COLOURS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    ansi_colours: bool,
}

/// The checks which may be run against StatefulSet manifests.
#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Check {
    /// Reports if the StatefulSet is rolling out a new revision.
    Upgrading {
        /// This is the StatefulSet manifest filepath (YAML or JSON).
        #[arg(value_name = "FILE_PATH")]
        manifest: PathBuf,
    },

    /// Fails if the new StatefulSet's containers mount volumes which resolve to no volume
    /// source.
    Mounts {
        /// This is the manifest filepath of the StatefulSet as it is going to be applied.
        #[arg(long, value_name = "FILE_PATH")]
        new: PathBuf,

        /// This is the manifest filepath of the StatefulSet as it is currently applied.
        #[arg(long, value_name = "FILE_PATH")]
        old: PathBuf,
    },
}

impl CliArgs {
    /// This returns the check to run.
    pub(crate) fn check(&self) -> &Check {
        &self.check
    }

    /// This returns ansi_colours arg.
    pub(crate) fn ansi_colours(&self) -> bool {
        self.ansi_colours
    }
}
