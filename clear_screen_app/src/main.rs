//! Clear screen demo
//!
//! Opens the default window, clears it to the configured color every frame
//! and exits when the window is closed. Construction failures are printed
//! to stderr and the process exits with -1.

use sl3d::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "clear_screen.toml";

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

struct ClearScreenApp {
    backend: OpenGlBackend<GlfwPlatform>,
    color: ClearColor,
}

impl ClearScreenApp {
    fn new(config: &AppConfig) -> Result<Self, BackendError> {
        config.backend.ensure_supported()?;
        let backend = OpenGlBackend::new(GlfwPlatform::new(), &config.window, &config.context)?;
        Ok(Self {
            backend,
            color: config.clear_color,
        })
    }
}

impl Render for ClearScreenApp {
    fn render(&mut self) {
        self.backend.clear(self.color);
        self.backend.swap_buffers();
        self.backend.poll_events();
    }
}

impl Application for ClearScreenApp {
    fn should_close(&self) -> bool {
        self.backend.should_close()
    }
}

/// First CLI argument, else `clear_screen.toml` when present, else defaults
fn load_config() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    match explicit {
        Some(path) => AppConfig::load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            AppConfig::load_from_file(DEFAULT_CONFIG_PATH)
        }
        None => Ok(AppConfig::default()),
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    sl3d::foundation::logging::init(&config.logging);

    log::info!("Starting clear screen demo with {} backend", config.backend);
    let mut app = ClearScreenApp::new(&config)?;
    sl3d::app::run(&mut app);

    log::info!("Clear screen demo completed successfully");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Clear screen demo failed: {e:?}");
        eprintln!("{e}");
        std::process::exit(-1);
    }
}
