// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, warn};
use std::io::{Read, Write};
use std::path::Path;

use transcritic::app_config::{self, Config};
use transcritic::language_utils::{language_display_name, resolve_language_key};
use transcritic::{PipelineResult, TranslationCriticPipeline};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a text and critique the translation (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for transcritic
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct TranslateArgs {
    /// Text to translate, or '-' to read it from stdin
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Target language key, display name or ISO code (e.g. 'french', 'fr')
    #[arg(short, long, default_value = "english")]
    target_language: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Bearer credential for the text-generation endpoint
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// URL of the text-generation endpoint
    #[arg(long, env = "API_ENDPOINT")]
    api_endpoint: Option<String>,

    /// Return canned responses instead of calling the endpoint
    #[arg(long, env = "ENABLE_MOCKS")]
    mock: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// transcritic - Translator & Critic
///
/// Translates a text with a remote text-generation service, then asks a judge
/// model to rate the translation.
#[derive(Parser, Debug)]
#[command(name = "transcritic")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "AI translation with an automatic quality critique")]
#[command(long_about = "transcritic translates a text with a remote text-generation service and then asks a judge model to critique the translation.

EXAMPLES:
    transcritic -t french \"The sun is shining.\"     # Translate into French
    echo \"Hallo Welt\" | transcritic -t en -          # Read the text from stdin
    transcritic --mock -t german \"Hello\"             # Canned responses, no network
    transcritic --json -t fr \"Hello\"                 # Machine-readable output
    transcritic completions bash > transcritic.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created. API_KEY, API_ENDPOINT and ENABLE_MOCKS environment
    variables override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger);
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once; the level is adjusted after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transcritic", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.translate).await,
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&options)?;

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    config.validate().context("Configuration validation failed")?;

    let text = read_text(options.text.as_deref())?;

    // Unknown languages pass through unchanged so the validator reports them
    let target_language = resolve_language_key(&options.target_language, &config.supported_languages)
        .unwrap_or_else(|| options.target_language.clone());
    debug!("Target language '{}' resolved to '{}'", options.target_language, target_language);

    let pipeline = TranslationCriticPipeline::from_config(&config)?;
    let result = pipeline.run(&text, &target_language).await;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, &config);
    }

    match result.error {
        Some(error) => Err(anyhow!(error)),
        None => Ok(()),
    }
}

/// Load the config file (creating a default one if missing) and apply CLI overrides
fn load_config(options: &TranslateArgs) -> Result<Config> {
    let config_path = Path::new(&options.config_path);
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", options.config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(api_key) = &options.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(api_endpoint) = &options.api_endpoint {
        config.api_endpoint = api_endpoint.clone();
    }
    if options.mock {
        config.enable_mocks = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

/// Take the text from the argument, or from stdin when it is '-'
fn read_text(arg: Option<&str>) -> Result<String> {
    match arg {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
        Some(text) => Ok(text.to_string()),
        None => Err(anyhow!("TEXT is required (use '-' to read from stdin)")),
    }
}

fn print_result(result: &PipelineResult, config: &Config) {
    let language = language_display_name(&result.target_language, &config.supported_languages);

    if let Some(translation) = &result.translation {
        println!("Translation ({}):\n{}\n", language, translation);
    }
    if let Some(critique) = &result.critique {
        println!("Critique:\n{}", critique);
    }
}
