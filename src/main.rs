//! Friday - Voice Assistant
//!
//! Command-line front end: listen, dispatch, print, repeat.

use anyhow::Result;
use clap::Parser;
use friday::asr::{MicrophoneCapture, SpeechCapture};
use friday::commands::CommandProcessor;
use friday::config::Config;
use friday::gui::AssistantState;
use friday::tts::SpeechOutput;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Audio input device index
    #[arg(short, long)]
    device: Option<usize>,

    /// Use speechd-ng for TTS feedback
    #[arg(long)]
    speechd: bool,

    /// Run one typed command instead of listening
    #[arg(long, value_name = "TEXT")]
    say: Option<String>,

    /// Listen for a single command, then exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🤖 Friday v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.speechd {
        config.tts_engine = "speechd".to_string();
    }
    if args.device.is_some() {
        config.audio_device = args.device;
    }

    let mut state = AssistantState::new();

    if let Some(text) = args.say {
        let speech = SpeechOutput::start(&config).await;
        let processor = CommandProcessor::from_config(&config, speech);
        // Typed commands go through the same normalization as transcripts
        run_command(&processor, &mut state, &text.to_lowercase()).await;
        return Ok(());
    }

    // Voice list and recognizer model load side by side
    let (speech, capture) = futures::join!(
        SpeechOutput::start(&config),
        MicrophoneCapture::load(config.clone())
    );
    let processor = CommandProcessor::from_config(&config, speech);
    let capture = capture?;
    info!("✅ Friday ready - speak a command");
    info!("   Try: 'open youtube', 'what is your name', 'who is bill gates'");

    loop {
        if !state.begin_listening() {
            break;
        }
        let heard = match capture.capture().await {
            Ok(heard) => heard,
            Err(e) => {
                warn!("❌ Capture failed: {}", e);
                None
            }
        };
        state.finish_listening();

        if let Some(command) = heard {
            run_command(&processor, &mut state, &command).await;
        }

        if args.once {
            break;
        }
    }

    Ok(())
}

async fn run_command(processor: &CommandProcessor, state: &mut AssistantState, command: &str) {
    let ticket = state.record_transcript(command);
    let reply = processor.process(command).await;
    state.apply(ticket, &reply);

    println!("You:    {}", state.transcript);
    println!("Friday: {}", state.information);
}
