//! Map workspace UI: location form and notification sign-up.

use crate::api::ApiChannel;
use crate::geo::PoiLayer;
use crate::state::{AppState, LeadTime, SubmitOutcome, SubmitPlan, CLOUD_COVERAGE_RANGE};
use eframe::egui::{self, Color32, RichText};

/// Renders the location sidebar for the map workspace.
pub fn render_map_sidebar(
    ctx: &egui::Context,
    state: &mut AppState,
    poi: &mut PoiLayer,
    api: &ApiChannel,
) {
    egui::SidePanel::left("location_panel")
        .resizable(true)
        .default_width(250.0)
        .min_width(200.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Search Location");
            ui.separator();

            ui.label("Or input Lat/Long manually:");
            ui.add_space(5.0);

            ui.label("Latitude");
            ui.add(
                egui::TextEdit::singleline(&mut state.location_form.lat_input)
                    .hint_text("44.593214")
                    .desired_width(120.0)
                    .font(egui::FontId::monospace(13.0)),
            );

            ui.label("Longitude");
            ui.add(
                egui::TextEdit::singleline(&mut state.location_form.lng_input)
                    .hint_text("-79.457808")
                    .desired_width(120.0)
                    .font(egui::FontId::monospace(13.0)),
            );

            ui.add_space(10.0);

            ui.checkbox(
                &mut state.location_form.notifications_enabled,
                "Receive a notification for selected location?",
            );

            if state.location_form.notifications_enabled {
                ui.indent("notification_indent", |ui| {
                    ui.label("Email");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.location_form.email)
                            .hint_text("you@example.com")
                            .desired_width(180.0),
                    );

                    ui.add_space(5.0);

                    ui.label("Lead Time");
                    egui::ComboBox::from_id_salt("lead_time_selector")
                        .selected_text(state.location_form.lead_time.label())
                        .width(120.0)
                        .show_ui(ui, |ui| {
                            for lead_time in LeadTime::all() {
                                ui.selectable_value(
                                    &mut state.location_form.lead_time,
                                    *lead_time,
                                    lead_time.label(),
                                );
                            }
                        });

                    ui.add_space(5.0);

                    ui.add(
                        egui::Slider::new(
                            &mut state.location_form.cloud_coverage,
                            CLOUD_COVERAGE_RANGE,
                        )
                        .suffix("%")
                        .text("Cloud Coverage"),
                    );
                });
            }

            ui.add_space(10.0);

            if ui.button("Submit").clicked() {
                submit_form(ctx, state, poi, api);
            }

            render_outcome(ui, state.location_form.outcome);

            ui.add_space(10.0);
            render_view_section(ui, state, poi);
        });
}

fn submit_form(ctx: &egui::Context, state: &mut AppState, poi: &mut PoiLayer, api: &ApiChannel) {
    log::debug!(
        "Form submitted: lat={}, lng={}, notify={}, lead_time={}h, cloud={}%",
        state.location_form.lat_input,
        state.location_form.lng_input,
        state.location_form.notifications_enabled,
        state.location_form.lead_time.hours(),
        state.location_form.cloud_coverage,
    );

    match state.location_form.plan_submission() {
        SubmitPlan::Invalid => {
            state.location_form.outcome = SubmitOutcome::ValidationFailed;
        }
        SubmitPlan::Reposition(point) => {
            state.place_marker(poi, point);
            state.location_form.outcome = SubmitOutcome::SubmittedWithoutNotification;
        }
        SubmitPlan::RepositionAndNotify(point, request) => {
            state.place_marker(poi, point);
            state.location_form.outcome = SubmitOutcome::NotificationPending;
            api.submit_notification(ctx, request);
        }
    }
}

fn render_outcome(ui: &mut egui::Ui, outcome: SubmitOutcome) {
    if outcome == SubmitOutcome::Idle {
        return;
    }

    ui.add_space(5.0);

    if outcome == SubmitOutcome::NotificationPending {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(outcome.message());
        });
        return;
    }

    let color = if outcome.is_error() {
        Color32::LIGHT_RED
    } else {
        Color32::from_rgb(100, 200, 100)
    };
    ui.label(RichText::new(outcome.message()).color(color));
}

fn render_view_section(ui: &mut egui::Ui, state: &mut AppState, poi: &PoiLayer) {
    egui::CollapsingHeader::new(RichText::new("View").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.checkbox(&mut state.map_view.show_scene_centers, "Scene Centers");

            if ui.button("Reset view").clicked() {
                state.map_view.reset();
            }

            if let Some(index) = poi.highlighted {
                if let Some(feature) = poi.features.get(index) {
                    let label = feature.label.as_deref().unwrap_or("unnamed");
                    ui.add_space(5.0);
                    ui.label(RichText::new("Nearest scene center").small());
                    ui.label(RichText::new(label).strong().monospace());
                }
            }
        });
}
