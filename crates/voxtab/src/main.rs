//! Voxtab - voice-driven browser assistant CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

use voxtab::action_executor::{ActionExecutor, Flow};
use voxtab::bridge::Bridge;
use voxtab::host::{
    BrowserHost, ConsoleSynth, DesktopBrowser, LinePrompt, ProcessSynth, SpeechSynth,
};
use voxtab::services::{HttpAnswerService, HttpEntityExtractor};
use voxtab::session::VoiceSession;
use voxtab_common::VoxtabConfig;

#[derive(Parser)]
#[command(name = "voxtab")]
#[command(about = "Voice-driven browser assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (default: ~/.config/voxtab/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print responses instead of speaking them
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a capture session and execute spoken commands until "stop"
    Listen,

    /// Execute a single typed utterance without a capture session
    Exec {
        /// The utterance, e.g. `voxtab exec open example.org`
        utterance: Vec<String>,
    },

    /// Show the effective configuration (credential redacted)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VoxtabConfig::load_from(path)?,
        None => VoxtabConfig::load()?,
    };

    match cli.command {
        Commands::Listen => listen(config, cli.quiet).await,
        Commands::Exec { utterance } => exec(config, cli.quiet, utterance.join(" ")).await,
        Commands::Config => {
            print!("{}", config.redacted_toml()?);
            Ok(())
        }
    }
}

fn build_session(config: &VoxtabConfig, quiet: bool) -> VoiceSession {
    let browser: Arc<dyn BrowserHost> = Arc::new(DesktopBrowser::new());
    let synth: Arc<dyn SpeechSynth> = if quiet {
        Arc::new(ConsoleSynth)
    } else {
        Arc::new(ProcessSynth::new(
            config.speech.synth_command.clone(),
            config.speech.rate,
        ))
    };
    let bridge = Bridge::spawn(browser.clone());
    let executor = ActionExecutor::new(
        config,
        browser,
        synth.clone(),
        bridge.handle(),
        Arc::new(HttpEntityExtractor::new(
            config.language_api.endpoint.clone(),
            config.language_api.api_key.clone(),
        )),
        Arc::new(HttpAnswerService::new(config.answers.endpoint.clone())),
    );
    VoiceSession::new(Box::new(LinePrompt::new()), executor, synth, bridge)
}

async fn listen(config: VoxtabConfig, quiet: bool) -> Result<()> {
    let mut session = build_session(&config, quiet);
    info!("Voxtab v{} listening", env!("CARGO_PKG_VERSION"));
    println!("Listening... (say \"stop\" to end the session)");

    while session.run_once().await? == Flow::Continue {}

    info!("capture session ended");
    Ok(())
}

async fn exec(config: VoxtabConfig, quiet: bool, utterance: String) -> Result<()> {
    let mut session = build_session(&config, quiet);
    session.handle_utterance(&utterance).await?;
    session.stop().await;
    Ok(())
}
