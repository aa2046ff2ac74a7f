use crate::opts::{Check, CliArgs};
use clap::Parser;
use console_logger::Console;
use k8s_openapi::api::apps::v1::StatefulSet;
use kube::ResourceExt;
use statefulset::{
    error::{Error, Result},
    manifest::read_statefulset,
    upgrade_state, validate_volume_mounts,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod opts;

fn main() -> Result<()> {
    let opts = CliArgs::parse();
    init_logging(opts.ansi_colours());

    run(&opts).map_err(|error| {
        error!(%error, "StatefulSet check failed");
        error
    })
}

/// Initialize logging components -- tracing. Logs go to stderr, verdicts to stdout.
fn init_logging(ansi_colours: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi_colours)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the check selected on the command line.
fn run(opts: &CliArgs) -> Result<()> {
    let console = Console::new(opts.ansi_colours());

    match opts.check() {
        Check::Upgrading { manifest } => {
            let set = read_statefulset(manifest)?;
            let state = upgrade_state(&set);
            info!(
                statefulset.name = %set.name_any(),
                upgrading = state.is_upgrading(),
                "Classified StatefulSet rollout state"
            );
            console.print_verdict(&subject(&set), &state.to_string(), state.is_upgrading());
        }
        Check::Mounts { new, old } => {
            let new_set = read_statefulset(new)?;
            let old_set = read_statefulset(old)?;
            match validate_volume_mounts(&new_set, &old_set) {
                Ok(()) => {
                    info!(statefulset.name = %new_set.name_any(), "All volume mounts resolve");
                    console.print_verdict(&subject(&new_set), "all volume mounts resolve", false);
                }
                Err(Error::DanglingVolumeMounts { name, mounts }) => {
                    console.print_list(
                        &format!("{}: volume mounts with no volume source:", subject(&new_set)),
                        &mounts,
                    );
                    return Err(Error::DanglingVolumeMounts { name, mounts });
                }
                Err(error) => return Err(error),
            }
        }
    }

    Ok(())
}

/// 'StatefulSet <namespace>/<name>', or without the namespace if the manifest has none.
fn subject(set: &StatefulSet) -> String {
    match set.namespace() {
        Some(namespace) => format!("StatefulSet {namespace}/{}", set.name_any()),
        None => format!("StatefulSet {}", set.name_any()),
    }
}
