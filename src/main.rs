use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use bump_version::cli::{run_bump_workflow, Invocation};
use bump_version::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    disable_version_flag = true,
    about = "Bump the version in package.json, package-lock.json and helm/values/values.yaml",
    after_help = "Examples:\n  bump-version --patch\n  bump-version --minor --dry-run\n  bump-version version=2.0.0-rc.1"
)]
struct Args {
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Project root holding the manifests (defaults to the current directory)"
    )]
    dir: Option<PathBuf>,

    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "version=<semver>, --major, --minor, --patch, --dry-run (matched by prefix, any order)"
    )]
    args: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = config::load_config(args.dir.as_deref())
        .context("Cannot determine the project directory")?;
    let invocation = Invocation::new(args.args);

    match run_bump_workflow(&invocation, &config) {
        Ok(result) => {
            ui::report_workflow(&result);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            Ok(ExitCode::from(1))
        }
    }
}
