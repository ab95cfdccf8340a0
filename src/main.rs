//! Panel entry point: logging, then the shell window.

use floem::prelude::*;
use floem::window::WindowConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prismfx::app_view;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("starting PrismFX control panel");

    floem::Application::new()
        .window(
            move |_| {
                app_view().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((1120.0, 780.0))
                    .title("PrismFX ARGB Control"),
            ),
        )
        .run();
}
