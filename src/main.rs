mod common;
mod config;
mod error;
mod responder;
mod ui;

use std::time::Duration;

use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use config::AppConfig;
use responder::{AutoResponder, ResponseGenerator};
use ui::ChatApp;
use ui::app::ResponderLink;
use ui::state::AppState;

#[derive(Parser)]
#[command(
    name = "chat_plus",
    version,
    about = "Desktop chat client with a simulated auto-responding contact"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Start in dark mode
    #[arg(long)]
    dark: bool,
    /// Delay before the contact replies, in milliseconds
    #[arg(long, value_name = "MS")]
    reply_delay_ms: Option<u64>,
    /// Seed for the fallback replies (deterministic sessions)
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        config.dark_mode |= self.dark;
        if let Some(delay) = self.reply_delay_ms {
            config.reply_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = cli.apply(config::load_config(&cli.config));

    run_client(app_config).await
}

async fn run_client(app_config: AppConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Responder
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Responder -> UI
    let (event_tx, event_rx) = mpsc::channel(100);
    let shutdown = CancellationToken::new();

    // 2. Khởi chạy worker trả lời tự động (Chạy ngầm)
    let generator = match app_config.rng_seed {
        Some(seed) => ResponseGenerator::seeded(seed),
        None => ResponseGenerator::from_entropy(),
    };
    let responder = AutoResponder::new(
        cmd_rx,
        event_tx,
        generator,
        Duration::from_millis(app_config.reply_delay_ms),
        shutdown.clone(),
    );
    tokio::spawn(async move {
        if let Err(err) = responder.run().await {
            log::error!("Auto-responder terminated: {err}");
        }
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let title = app_config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            let state = AppState::with_sample_data(
                app_config.user_name.clone(),
                app_config.dark_mode,
                Local::now(),
            );
            log::info!(
                "Client started with {} contacts, reply delay {} ms",
                state.contacts.len(),
                app_config.reply_delay_ms
            );

            Ok(Box::new(ChatApp::new(
                cc,
                state,
                app_config.window_title.clone(),
                ResponderLink::new(cmd_tx.clone(), event_receiver),
                shutdown.clone(),
            )))
        }),
    )
}
