//! Review Launcher: generate, personalize and launch review text.
//!
//! Module map:
//!   - business     : registry of launchable businesses
//!   - templates    : per-business template sets and their JSON store
//!   - personalize  : staff-name integration and highlighting
//!   - llm          : remote chat completions client and prompt
//!   - generator    : cache → remote → fallback review generation
//!   - launch       : clipboard + browser launch flow, share link
//!   - settings     : API key resolution and keychain storage
//!   - cli          : command-line surface

pub mod business;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod launch;
pub mod llm;
pub mod personalize;
pub mod settings;
pub mod templates;

use clap::Parser;

/// Entry point for the `review-launcher` binary.
pub fn run() {
    // .env.local wins over .env; only the first one found is loaded.
    'env_load: for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    let cli = cli::Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start async runtime: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(cli::execute(cli)) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
