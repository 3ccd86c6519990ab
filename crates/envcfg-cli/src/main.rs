//! `envcfg` command-line entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use envcfg_core::{
    create_credential_source, list_credential_sources, log_info, ChainCredentialSource,
    ConsoleLogger, CredentialSource, EnvironmentConfig, EnvironmentFile, EnvironmentFormat,
    EnvironmentProvider, FileCredentialSource, LogLevel, SharedLogger, SIGNING_ALGORITHMS,
};

#[derive(Debug, Parser)]
#[command(name = "envcfg", version, about = "Load and export the frontend environment configuration")]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the loaded environment
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (json or yaml)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Load and validate, printing the derived Auth0 endpoints
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write the environment file, backing up an existing one
    Write {
        /// Destination; `.yaml`/`.yml` selects YAML, anything else JSON
        output: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the registered credentials sources
    Sources,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Credentials file (JSON or YAML)
    #[arg(short, long, env = "ENVCFG_CREDENTIALS")]
    credentials: Option<PathBuf>,

    /// Registered credentials source to use
    #[arg(short, long, default_value = "env")]
    source: String,
}

impl SourceArgs {
    /// The named source, with the credentials file (if any) as fallback
    fn build(&self, logger: &SharedLogger) -> Result<Arc<dyn CredentialSource>> {
        let named = create_credential_source(&self.source)
            .ok_or_else(|| anyhow!("unknown credentials source '{}'", self.source))?;

        let Some(path) = &self.credentials else {
            return Ok(named);
        };

        let file: Arc<dyn CredentialSource> =
            Arc::new(FileCredentialSource::new(path).with_logger(logger.clone()));
        Ok(Arc::new(ChainCredentialSource::new(vec![named, file])))
    }

    fn load(&self, logger: &SharedLogger) -> Result<Arc<EnvironmentConfig>> {
        let source = self.build(logger)?;
        let provider = EnvironmentProvider::new(source, logger.clone());
        provider.get().context("failed to load environment")
    }
}

fn run(cli: Cli, logger: SharedLogger) -> Result<()> {
    match cli.command {
        Command::Show { source, format } => {
            let env = source.load(&logger)?;
            let format = EnvironmentFormat::from_name(&format)?;
            print!("{}", format.render(&env)?);
            if format == EnvironmentFormat::Json {
                println!();
            }
        }
        Command::Check { source } => {
            let env = source.load(&logger)?;
            let auth = env.auth0();
            println!("api server:  {}", env.api_server_url());
            println!("issuer:      {}", auth.issuer());
            println!("jwks:        {}", auth.jwks_url());
            println!("algorithms:  {}", SIGNING_ALGORITHMS.join(", "));
            println!("login:       {}", auth.login_url("")?);
        }
        Command::Write { output, source } => {
            let env = source.load(&logger)?;
            let file = EnvironmentFile::new(output);
            if let Some(backup) = file.backup()? {
                log_info!(logger, "previous file saved to {}", backup.display());
            }
            file.write(&env)
                .with_context(|| format!("failed to write {}", file.path().display()))?;
            log_info!(logger, "wrote {}", file.path().display());
        }
        Command::Sources => {
            for (name, description) in list_credential_sources() {
                println!("{:<10} {}", name, description);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::from_env() };
    let logger: SharedLogger = Arc::new(ConsoleLogger::new().with_level(level));

    match run(cli, logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
