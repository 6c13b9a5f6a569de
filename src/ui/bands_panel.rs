//! Bands workspace UI: acquisition filters and the spectral band grid.

use crate::api::{ApiChannel, ImageryEndpoint, ImageryQuery};
use crate::state::{AppState, ImageSize, BAND_CATALOG, BAND_COUNT, CLOUD_COVERAGE_RANGE};
use eframe::egui::{self, Color32, RichText, ScrollArea};

const CARDS_PER_ROW: usize = 3;
const CARD_WIDTH: f32 = 180.0;

/// Renders the filter sidebar for the bands workspace.
pub fn render_bands_sidebar(ctx: &egui::Context, state: &mut AppState, api: &ApiChannel) {
    egui::SidePanel::left("bands_panel")
        .resizable(true)
        .default_width(250.0)
        .min_width(200.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Filters");
            ui.separator();

            ui.label("Start Date:");
            ui.add(
                egui::TextEdit::singleline(&mut state.filters.start_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(120.0)
                    .font(egui::FontId::monospace(13.0)),
            );

            ui.add_space(5.0);

            ui.label("End Date:");
            ui.add(
                egui::TextEdit::singleline(&mut state.filters.end_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(120.0)
                    .font(egui::FontId::monospace(13.0)),
            );

            ui.add_space(10.0);

            ui.label("Pick the Image Size");
            egui::ComboBox::from_id_salt("image_size_selector")
                .selected_text(state.filters.image_size.label())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for size in ImageSize::all() {
                        ui.selectable_value(&mut state.filters.image_size, *size, size.label());
                    }
                });

            ui.add_space(10.0);

            ui.add(
                egui::Slider::new(&mut state.filters.cloud_coverage, CLOUD_COVERAGE_RANGE)
                    .suffix("%")
                    .text("Cloud Coverage"),
            );

            ui.add_space(10.0);

            let fetching = state.fetch_in_progress();

            ui.add_enabled_ui(!fetching, |ui| {
                if ui.button("Fetch Data").clicked() {
                    start_fetch(ctx, state, api);
                }
            });

            if fetching {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching imagery...");
                });
            }

            if !state.band_message.is_empty() {
                ui.add_space(5.0);
                ui.label(RichText::new(&state.band_message).color(Color32::LIGHT_RED));
            }
        });
}

fn start_fetch(ctx: &egui::Context, state: &mut AppState, api: &ApiChannel) {
    if let Err(message) = state.filters.validate() {
        state.band_message = message;
        return;
    }

    let query = ImageryQuery {
        bands: state.band_selection.join_selected(),
        start_date: state.filters.start_date.trim().to_string(),
        end_date: state.filters.end_date.trim().to_string(),
    };
    log::debug!(
        "Fetching imagery: bands=[{}], imageSize={}, cloudCoverage={}%",
        query.bands,
        state.filters.image_size.request_value(),
        state.filters.cloud_coverage
    );

    state.band_message.clear();
    state.band_error = None;
    state.pending_fetches = ImageryEndpoint::all().len() as u8;
    state.status_message = "Fetching imagery...".to_string();

    api.fetch_imagery(ctx, &query);
}

/// Renders the band selection grid, or the last fetch error in its place.
pub fn render_bands_content(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.heading("Choose Your Desired Landsat Bands:");
            ui.label(
                RichText::new("Hover over each card to view detailed descriptions.")
                    .color(Color32::GRAY),
            );
        });

        ui.add_space(10.0);

        if let Some(error) = state.band_error.clone() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("Error: {}", error))
                        .size(14.0)
                        .color(Color32::LIGHT_RED),
                );
            });
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            let rows = BAND_COUNT.div_ceil(CARDS_PER_ROW);
            for row in 0..rows {
                ui.horizontal(|ui| {
                    for col in 0..CARDS_PER_ROW {
                        let index = row * CARDS_PER_ROW + col;
                        if index < BAND_COUNT {
                            render_band_card(ui, state, index);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });
    });
}

fn render_band_card(ui: &mut egui::Ui, state: &mut AppState, index: usize) {
    let band = &BAND_CATALOG[index];

    let response = ui
        .group(|ui| {
            ui.set_width(CARD_WIDTH);
            ui.checkbox(
                state.band_selection.selected_mut(index),
                RichText::new(band.label).strong(),
            );
        })
        .response;

    response.on_hover_text(band.description);
}
