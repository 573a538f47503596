#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Demo application
mod app;

use app::SeekBarDemo;
use range_seek_bar::SeekBarConfig;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting RangeSeekBar demo");

    // Keep the server alive for the lifetime of the app
    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let config_path = SeekBarDemo::default_config_path();
    let config = if config_path.exists() {
        SeekBarConfig::load(&config_path).unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", config_path.display(), e);
            SeekBarConfig::default()
        })
    } else {
        SeekBarConfig::default()
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "RangeSeekBar Demo",
        options,
        Box::new(move |_| {
            let demo = SeekBarDemo::new(config, config_path)?;
            Ok(Box::new(demo))
        }),
    )
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            log::info!("Puffin server listening on {}", addr);
            Some(server)
        }
        Err(e) => {
            log::warn!("Failed to start puffin server: {}", e);
            None
        }
    }
}
