mod app;
mod components;
mod screens;
mod textures;
mod theme;
mod utils;

use profilecard_app_core::ProfileCardApplication;
use profilecard_config::{WINDOW_MIN_SIZE, WINDOW_SIZE};
use profilecard_core::ProfileStore;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global `RUST_LOG`-filtered subscriber (default `info`). Later calls are no-ops.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Opens the window and runs until it is closed. `profiles` is shared by every screen.
pub fn run(profiles: ProfileStore) -> eframe::Result<()> {
    tracing::info!("Starting with {} profiles", profiles.len());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_title("Profile Card"),
        ..Default::default()
    };

    eframe::run_native(
        "Profile Card",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            let core = ProfileCardApplication::with_store(profiles);
            Ok(Box::new(app::ProfileCardUiApp::new(core)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_can_be_installed_twice() {
        setup_logging();
        setup_logging();
        assert!(tracing::dispatcher::has_been_set());
        tracing::error!("logging still works after a repeated setup");
    }
}
