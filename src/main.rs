use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_scribe::{
    create_router, AppState, CaptureConfig, CaptureSession, Config, FileSource, FileStore,
    OpenAiSummarizer, OpenAiTranscriber, SessionBrowser,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "meeting-scribe", about = "Record, transcribe and summarize meetings")]
struct Cli {
    /// Config file (without extension), resolved by the config crate
    #[arg(long, default_value = "config/meeting-scribe")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a session for a subject by replaying a WAV file through
    /// the capture loop
    Record {
        /// Subject ("patient") the session belongs to
        #[arg(long)]
        subject: String,

        /// WAV file to replay as the audio source
        #[arg(long)]
        input: String,
    },

    /// List subjects
    Subjects,

    /// List a subject's sessions, newest first
    Sessions { subject: String },

    /// Show a session (title, summary, transcript); generates the
    /// summary on first view of a titled session
    Show { subject: String, session_id: String },

    /// Set a session title
    Title {
        subject: String,
        session_id: String,
        title: String,
    },

    /// Run the HTTP browse API
    Serve,
}

fn api_key() -> Result<String> {
    std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")
}

fn browser(cfg: &Config) -> Result<SessionBrowser> {
    let store = FileStore::new(&cfg.storage.root)?;
    let summarizer =
        OpenAiSummarizer::new(&cfg.api.base_url, api_key()?, cfg.api.chat_model.clone())?;
    Ok(SessionBrowser::new(store, Arc::new(summarizer)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    match cli.command {
        Command::Record { subject, input } => {
            let store = FileStore::new(&cfg.storage.root)?;
            let transcriber = OpenAiTranscriber::new(
                &cfg.api.base_url,
                api_key()?,
                cfg.api.transcribe_model.clone(),
                cfg.api.language.clone(),
            )?;

            let source = FileSource::open(&input)?;

            let mut capture_config =
                CaptureConfig::new(subject, source.sample_rate(), source.channels());
            capture_config.chunk_interval =
                std::time::Duration::from_secs(cfg.capture.chunk_interval_secs);

            let session = CaptureSession::new(store, Arc::new(transcriber), capture_config)?;
            info!("Recording session {}", session.session_id());

            let stats = session.run(source.stream()).await?;

            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Command::Subjects => {
            let store = FileStore::new(&cfg.storage.root)?;
            for subject in store.list_subjects()? {
                println!("{subject}");
            }
        }

        Command::Sessions { subject } => {
            let store = FileStore::new(&cfg.storage.root)?;
            for session in store.list_sessions(&subject)? {
                println!("{}\t{}", session.id, session.label);
            }
        }

        Command::Show {
            subject,
            session_id,
        } => {
            let view = browser(&cfg)?.session_view(&subject, &session_id).await?;

            if view.title.is_empty() {
                println!("(untitled session: set a title to enable summaries)");
            } else {
                println!("## {}\n", view.title);
            }
            if !view.summary.is_empty() {
                println!("{}\n", view.summary);
            }
            println!("## Transcrição completa\n{}", view.transcript);
        }

        Command::Title {
            subject,
            session_id,
            title,
        } => {
            let store = FileStore::new(&cfg.storage.root)?;
            let paths = store.session(&subject, &session_id);
            anyhow::ensure!(
                paths.dir().is_dir(),
                "Session not found: {subject}/{session_id}"
            );
            store.write_text(&paths.title(), &title)?;
            println!("Title set for {subject}/{session_id}");
        }

        Command::Serve => {
            let state = AppState::new(browser(&cfg)?);
            let app = create_router(state);

            let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
            info!("{} listening on {}", cfg.service.name, addr);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
