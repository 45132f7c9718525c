mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};
use tracing_subscriber::EnvFilter;

use crate::app::App;

fn main() {
    init_tracing();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Ketqua"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "ketqua")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

/// The user's download folder, or an `exports` folder in the app data dir
/// when the platform has none.
fn default_export_dir() -> Result<PathBuf> {
    let download_dir = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf));
    match download_dir {
        Some(dir) => Ok(dir),
        None => Ok(project_dirs()?.data_local_dir().join("exports")),
    }
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
