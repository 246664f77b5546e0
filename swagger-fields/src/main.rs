//! swagger-fields
//!
//! Prints the Rust field declarations for one definition of a Swagger or
//! OpenAPI document.
//!
//! ## Usage
//!
//! ```bash
//! # Fields of the `User` definition in ./swagger.v1.json
//! swagger-fields User
//!
//! # Read another document, or extract with jq
//! swagger-fields --document api.yaml Repository
//! swagger-fields --jq Repository
//!
//! # List available definitions
//! swagger-fields --list
//!
//! # Generate shell completions
//! source <(COMPLETE=bash swagger-fields)
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use clap_complete::Shell;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use swagger_fields::emit::write_fields;
use swagger_fields::extract::{DocumentExtractor, DocumentFormat, JqExtractor, SchemaExtractor};

/// Environment variable consulted when `--document` is not given.
const DOCUMENT_ENV: &str = "SWAGGER_FIELDS_DOCUMENT";

/// Document read when neither `--document` nor the environment names one.
const DEFAULT_DOCUMENT: &str = "swagger.v1.json";

/// Emit Rust struct fields for a Swagger/OpenAPI definition
#[derive(Parser, Debug)]
#[command(name = "swagger-fields", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Name of the definition to emit fields for
    #[arg(
        value_name = "DEFINITION",
        required_unless_present = "list",
        value_parser = NonEmptyStringValueParser::new()
    )]
    definition: Option<String>,

    /// Swagger/OpenAPI document, JSON or YAML
    /// (falls back to $SWAGGER_FIELDS_DOCUMENT, then swagger.v1.json)
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    document: Option<PathBuf>,

    /// Extract the definition with the external `jq` program (JSON documents only)
    #[arg(long)]
    jq: bool,

    /// List definition names instead of emitting fields
    #[arg(long, conflicts_with = "definition")]
    list: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash swagger-fields)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh swagger-fields)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish swagger-fields | source

EXAMPLES:
  swagger-fields User                       # fields of User in swagger.v1.json
  swagger-fields -d openapi.yaml Repository # read a YAML document
  swagger-fields --jq User                  # extract with jq
  swagger-fields --list                     # list definitions
";

/// Runtime settings resolved from the command line and environment.
#[derive(Debug)]
struct Settings {
    document: PathBuf,
    use_jq: bool,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Self> {
        let document = cli
            .document
            .clone()
            .or_else(|| {
                std::env::var(DOCUMENT_ENV)
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT));

        // jq reads JSON only
        if cli.jq && DocumentFormat::from_path(&document) == DocumentFormat::Yaml {
            return Err(eyre!(
                "--jq only supports JSON documents, got {}",
                document.display()
            ));
        }

        Ok(Self {
            document,
            use_jq: cli.jq,
        })
    }

    fn extractor(&self) -> Result<Box<dyn SchemaExtractor>> {
        if self.use_jq {
            return Ok(Box::new(JqExtractor::new(&self.document)));
        }

        let extractor = DocumentExtractor::from_path(&self.document)
            .wrap_err_with(|| format!("Failed to load {}", self.document.display()))?;
        Ok(Box::new(extractor))
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Diagnostics always go to stderr so stdout stays paste-ready.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,swagger_fields=info".to_string(),
            2 => "warn,swagger_fields=debug".to_string(),
            _ => "debug,swagger_fields=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions(&shell_name);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::resolve(&cli)?;
    info!(
        document = %settings.document.display(),
        jq = settings.use_jq,
        "Resolved settings"
    );

    let extractor = settings.extractor()?;
    let mut out = io::stdout().lock();

    if cli.list {
        for name in extractor.definitions().wrap_err("Failed to list definitions")? {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    // clap enforces the definition whenever --list is absent
    let definition = cli
        .definition
        .ok_or_else(|| eyre!("A definition name is required"))?;

    let properties = extractor
        .properties(&definition)
        .wrap_err_with(|| format!("Failed to extract definition '{definition}'"))?;
    info!(definition = %definition, properties = properties.len(), "Emitting fields");

    write_fields(&mut out, &properties)?;
    Ok(())
}

/// Generate shell completions to stdout.
fn generate_completions(shell_name: &str) -> Result<()> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            return Err(eyre!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            ));
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "swagger-fields", &mut io::stdout());
    Ok(())
}
