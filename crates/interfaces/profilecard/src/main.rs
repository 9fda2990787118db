#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use profilecard_core::ProfileStore;

fn main() {
    profilecard_ui::setup_logging();

    let store = match ProfileStore::sample() {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("Profile data is invalid: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = profilecard_ui::run(store) {
        tracing::error!("Profile Card failed: {err}");
        std::process::exit(1);
    }
}
