use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::fmt::time::OffsetTime;

use uigeom::core::prelude::*;
use uigeom::util::gg_err;
use uigeom::{check, check_almost_eq, check_ge};

/// A popup placement request, e.g.
/// `{"source": {"width": 50, "height": 20}, "target": {"left": 40, "top": 40, "width": 20,
/// "height": 20}, "safeArea": {"width": 100, "height": 100}, "offset": 4}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PopupRequest {
    source: Rect,
    target: Rect,
    safe_area: Rect,
    #[serde(default)]
    offset: f64,
}

impl Default for PopupRequest {
    fn default() -> Self {
        Self {
            source: Rect::new(0.0, 0.0, 50.0, 20.0),
            target: Rect::new(40.0, 40.0, 20.0, 20.0),
            safe_area: Rect::new(0.0, 0.0, 100.0, 100.0),
            offset: 0.0,
        }
    }
}

fn setup_log() {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

fn parse_request(json: &str) -> Result<PopupRequest> {
    serde_json::from_str(json).with_context(|| format!("parsing popup request: {json}"))
}

fn run_sanity_checks() {
    let a = Vec2 { x: 1.0, y: 1.0 };
    check_almost_eq!(a * 2.0 - a, a);
    check_almost_eq!(Vec2 { x: 3.0, y: 4.0 }.rotated(1.0).len() * Vec2::one(), Vec2::splat(5.0));

    let mut fit = Transform2D::default();
    fit.contain_and_center(Vec2 { x: 200.0, y: 100.0 }, Vec2 { x: 100.0, y: 100.0 });
    check_almost_eq!(fit.scale, Vec2::splat(0.5));
    check_almost_eq!(fit.translate, Vec2 { x: 0.0, y: 25.0 });

    let r = Rect::new(5.0, 5.0, -10.0, 10.0);
    check_ge!(r.width(), 0.0);
    check!(r.within(&r));
}

fn main() -> Result<()> {
    setup_log();
    run_sanity_checks();

    let request = match std::env::args().nth(1) {
        Some(json) => gg_err::log_unwrap_or(PopupRequest::default(), parse_request(&json)),
        None => PopupRequest::default(),
    };
    let popup = build_safe(
        &request.source,
        &request.target,
        request.offset,
        &request.safe_area,
    );
    info!("popup for {} at {}", request.target, popup);
    if let Some(style) = gg_err::log_and_ok(
        serde_json::to_string(&popup.to_style()).context("serialising popup style"),
    ) {
        info!("style: {style}");
    }

    let mut view = Transform2D::default();
    let image = request.safe_area.size() * 2.0;
    view.contain_and_center(image, request.safe_area.size());
    info!("fitted {} into {}: {}", image, request.safe_area.size(), view);
    view.scale_from_point_with_origin(1.25, popup.center(), view.translate);
    info!("zoomed at {}: {}", popup.center(), view);
    view.rotate_from_point(std::f64::consts::FRAC_PI_2, popup.center());
    info!("rotated about {}: {}", popup.center(), view);
    Ok(())
}
