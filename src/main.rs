#![warn(clippy::all)]

//! Landsat Workbench - A web-based Landsat imagery acquisition tool.
//!
//! This application provides an interface for selecting spectral bands,
//! filtering acquisitions by date range and cloud coverage, and picking
//! target locations on a map with scene-center lookup and email
//! notification sign-up.

mod api;
mod geo;
mod state;
mod tiles;
mod ui;

use api::{ApiChannel, ApiResult};
use eframe::egui;
use geo::PoiLayer;
use state::{AppState, SubmitOutcome, WorkspaceView};
use tiles::{TileFetchChannel, TileFetchResult, TileTextureCache};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Landsat Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(WorkbenchApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(WorkbenchApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

// Embed the scene-center catalog at compile time
static CENTERS_KML: &str = include_str!("../assets/poi/centers.kml");

/// Main application state and logic.
pub struct WorkbenchApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Scene-center features parsed from the embedded KML catalog
    poi_layer: PoiLayer,

    /// Channel for async imagery service requests
    api_channel: ApiChannel,

    /// Channel for async basemap tile downloads
    tile_channel: TileFetchChannel,

    /// Texture cache for downloaded basemap tiles
    tile_cache: TileTextureCache,

    /// Zoom level at the last tile cache prune
    last_tile_zoom: u8,
}

impl WorkbenchApp {
    /// Creates a new WorkbenchApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut poi_layer = PoiLayer::new();

        // Load the embedded scene-center catalog
        match poi_layer.load_from_kml(CENTERS_KML) {
            Ok(count) => log::info!("Loaded {} scene centers", count),
            Err(e) => log::error!("Failed to load scene centers: {}", e),
        }

        let state = AppState::new();
        let last_tile_zoom = state.map_view.zoom;

        // One-shot service liveness probe; the result is only logged
        let api_channel = ApiChannel::new();
        api_channel.probe(&cc.egui_ctx);

        Self {
            state,
            poi_layer,
            api_channel,
            tile_channel: TileFetchChannel::new(),
            tile_cache: TileTextureCache::new(),
            last_tile_zoom,
        }
    }

    fn handle_api_result(&mut self, result: ApiResult) {
        match result {
            ApiResult::ImageryLoaded {
                endpoint,
                bytes,
                latency_ms,
            } => {
                log::info!(
                    "Received {} payload: {} bytes in {:.0} ms",
                    endpoint.label(),
                    bytes,
                    latency_ms
                );
                self.state.pending_fetches = self.state.pending_fetches.saturating_sub(1);
                if !self.state.fetch_in_progress() && self.state.band_error.is_none() {
                    self.state.status_message = "Imagery fetch complete".to_string();
                }
            }
            ApiResult::ImageryFailed {
                endpoint,
                body,
                detail,
            } => {
                log::error!("Error fetching data from {}: {}", endpoint.label(), detail);
                self.state.pending_fetches = self.state.pending_fetches.saturating_sub(1);
                self.state.band_error = Some(ApiResult::imagery_error_message(&body));
                self.state.status_message = "Imagery fetch failed".to_string();
            }
            ApiResult::NotificationAccepted { body } => {
                log::info!("Form submitted successfully: {}", body);
                self.state.location_form.outcome = SubmitOutcome::NotificationSubmitted;
            }
            ApiResult::NotificationFailed { detail } => {
                log::error!("Error submitting the form: {}", detail);
                self.state.location_form.outcome = SubmitOutcome::NotificationFailed;
            }
            ApiResult::ProbeCompleted { body } => {
                log::info!("Response from server: {}", body);
            }
            ApiResult::ProbeFailed { detail } => {
                log::error!("Failed to fetch: {}", detail);
            }
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process completed service requests
        while let Some(result) = self.api_channel.try_recv() {
            self.handle_api_result(result);
        }

        // Process completed tile downloads
        while let Some(result) = self.tile_channel.try_recv() {
            match result {
                TileFetchResult::Loaded { coord, image } => {
                    self.tile_cache.insert(ctx, coord, image);
                }
                TileFetchResult::Error { coord, message } => {
                    log::warn!(
                        "Tile {}/{}/{} failed: {}",
                        coord.zoom,
                        coord.x,
                        coord.y,
                        message
                    );
                    self.tile_cache.mark_failed(coord);
                }
            }
        }

        // Drop cached tiles far from the active zoom level
        if self.state.map_view.zoom != self.last_tile_zoom {
            self.last_tile_zoom = self.state.map_view.zoom;
            self.tile_cache.prune(self.last_tile_zoom);
        }

        // Render UI panels in the correct order for egui layout
        // Side and top panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &mut self.state);

        match self.state.active_view {
            WorkspaceView::Bands => {
                ui::render_bands_sidebar(ctx, &mut self.state, &self.api_channel);
                ui::render_bands_content(ctx, &mut self.state);
            }
            WorkspaceView::Map => {
                ui::render_map_sidebar(
                    ctx,
                    &mut self.state,
                    &mut self.poi_layer,
                    &self.api_channel,
                );
                ui::render_map_canvas(
                    ctx,
                    &mut self.state,
                    &mut self.poi_layer,
                    &self.tile_channel,
                    &mut self.tile_cache,
                );
            }
        }
    }
}
