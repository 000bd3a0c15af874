//! CLI Adapter.

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::{AppError, BuildInfo, parse_mapping};

#[derive(Parser)]
#[command(name = "set-property")]
#[command(disable_version_flag = true)]
#[command(
    about = "Set entries in a properties file from environment variables",
    long_about = None
)]
struct Cli {
    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,
    /// The properties file to update
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
    /// The name of the property to set
    #[arg(short, long, value_name = "NAME")]
    property: Option<String>,
    /// The name of the environment variable to map from
    #[arg(short, long, value_name = "NAME")]
    env_var: Option<String>,
    /// If specified, limits the values that can be passed from ENV_VAR
    #[arg(short, long, value_name = "VALUES", value_delimiter = ',')]
    allowed: Vec<String>,
    /// Maps a given value into the property value to set
    #[arg(
        short,
        long,
        value_name = "FROM=TO",
        value_delimiter = ',',
        value_parser = parse_mapping
    )]
    mapping: Vec<(String, String)>,
    /// The name of a bulk definition JSON file
    #[arg(long, value_name = "FILE")]
    bulk: Option<PathBuf>,
    /// Directory for the temporary file that stages a rewrite
    #[arg(long, value_name = "DIR", env = "SET_PROPERTY_TMP_DIR")]
    tmp_dir: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if cli.version {
        println!("{}", BuildInfo::current());
        return;
    }

    match execute(cli) {
        Ok(()) => {}
        Err(AppError::Usage(message)) => {
            eprintln!("{}", message);
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let Some(file) = cli.file else {
        return Err(AppError::usage("Need to specify a properties file"));
    };
    let tmp_dir = cli.tmp_dir.as_deref();

    if let Some(bulk) = cli.bulk {
        api::set_bulk_properties(&file, &bulk, tmp_dir)?;
        return Ok(());
    }

    match (cli.property, cli.env_var) {
        (Some(property), Some(env_var)) if !property.is_empty() && !env_var.is_empty() => {
            let mappings = (!cli.mapping.is_empty())
                .then(|| cli.mapping.into_iter().collect::<BTreeMap<_, _>>());
            let allowed = (!cli.allowed.is_empty()).then_some(cli.allowed);
            api::set_single_property(&file, &property, &env_var, mappings, allowed, tmp_dir)?;
            Ok(())
        }
        _ => Err(AppError::usage("Need to pass single property definition or bulk file")),
    }
}
