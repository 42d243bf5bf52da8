//! appdirs CLI
//!
//! Command-line interface for inspecting and creating XDG application
//! directories.

use anyhow::Result;
use appdirsctl::cli::{
    generate_completion, handle_base, handle_config, handle_create, handle_dir, handle_files,
    handle_show, open_app, resolve_base_dirs, Cli, Commands, OutputFormat,
};
use appdirsctl::config::CliConfig;
use clap::Parser;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose.unwrap_or(false);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        if verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Build configuration using priority chain: defaults → file → env → CLI args
    let load_file = !cli.no_config;
    let config_path = CliConfig::startup_path(cli.config.as_deref(), load_file)?;

    let mut builder = CliConfig::builder();

    if let (true, Some(path)) = (load_file, config_path.as_deref()) {
        builder = builder.with_config_file(path)?;
    }

    builder = builder.with_env_overrides();

    if let Some(ref app) = cli.app {
        builder = builder.with_app(app)?;
    }
    if let Some(format) = cli.format {
        builder = builder.with_output_format(format.as_str())?;
    }
    if let Some(verbose) = cli.verbose {
        builder = builder.with_verbose(verbose);
    }

    let config = builder.build()?;
    let format = OutputFormat::from_config(&config.output_format);

    init_tracing(config.verbose);
    if let Some(ref path) = config_path {
        debug!("Configuration file: {}", path.display());
    }
    debug!("Output format: {:?}", format);

    let user = cli.user.as_deref();
    let open = || open_app(&config, resolve_base_dirs(user)?);

    match cli.command {
        Commands::Show => handle_show(&open()?, &format),
        Commands::Base => handle_base(&resolve_base_dirs(user)?, &format),
        Commands::Dir { kind } => handle_dir(&open()?, kind, &format),
        Commands::Files {
            kind,
            filename,
            system,
        } => handle_files(&open()?, kind, &filename, system, &format),
        Commands::Create => handle_create(&open()?, &format),
        Commands::Config { command } => {
            let path = match config_path {
                Some(path) => path,
                None => CliConfig::default_path()?,
            };
            handle_config(command, &config, &path, &format)
        }
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
