use std::sync::Arc;

use hitplane::app::{AppEvent, PlaneController};
use hitplane::config::PlaneConfig;
use hitplane::domain::region::Radius;
use hitplane::input::PointerEvent;
use hitplane::platform::HttpHitCheck;

/// Usage: hitplane [service-base-url] [output.png]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(base_url) => PlaneConfig::with_base_url(base_url),
        None => PlaneConfig::default(),
    };
    let output = args.next();

    let config = Arc::new(config);
    let service = HttpHitCheck::new(&config.api);
    log::info!("Hit-check service at {}", service.url());

    let mut controller = match PlaneController::new(Arc::clone(&config), service) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    // Click graph point (1, 2) on r = 2 and submit it
    let events = [
        AppEvent::RadiusSelected(Radius::Two),
        AppEvent::Pointer(PointerEvent::Click {
            client_x: 240.0,
            client_y: 120.0,
        }),
        AppEvent::YBlurred,
        AppEvent::Submit,
    ];

    let mut now_ms = 0;
    for event in events {
        if let Err(err) = controller.handle_event(now_ms, event) {
            log::warn!("{err}");
        }
        now_ms += 10;
    }
    controller.tick(now_ms);

    if let Some(message) = controller.notification().message() {
        log::warn!("Notification: {message}");
    }
    for entry in controller.history().entries() {
        log::info!(
            "{} ({}, {}) r={} at {}",
            if entry.hit { "hit " } else { "miss" },
            entry.x,
            entry.y,
            entry.r,
            entry.timestamp
        );
    }

    if let Some(path) = output {
        match controller.surface().save_png(&path) {
            Ok(()) => log::info!("Plane written to {path}"),
            Err(err) => log::error!("Failed to write {path}: {err}"),
        }
    }
}
