//! Central map canvas: basemap tiles, scene footprint, scene centers,
//! and the target location marker.

use crate::geo::{MapTransform, PoiLayer, SCENE_FOOTPRINT};
use crate::state::AppState;
use crate::tiles::{tiles_in_extent, TileCoord, TileFetchChannel, TileTextureCache};
use eframe::egui::{self, Color32, Painter, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use geo_types::Coord;

pub fn render_map_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    poi: &mut PoiLayer,
    tiles: &TileFetchChannel,
    tile_cache: &mut TileTextureCache,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        // Allocate the full available space for the canvas
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());

        let rect = response.rect;

        // Draw background
        painter.rect_filled(rect, 0.0, Color32::from_rgb(20, 20, 35));

        let transform = MapTransform::new(state.map_view.center, state.map_view.zoom, rect);

        render_basemap(ctx, &painter, &transform, tiles, tile_cache);
        render_scene_footprint(&painter, &transform);

        if state.map_view.show_scene_centers && poi.visible {
            render_scene_centers(&painter, &transform, poi);
        }

        render_marker(&painter, &transform, state.map_view.marker);

        // Draw overlay info in top-left corner
        draw_overlay_info(ui, &rect, state, poi);

        // Handle pan/zoom/click interactions
        handle_canvas_interaction(&response, &transform, state, poi);
    });
}

fn render_basemap(
    ctx: &egui::Context,
    painter: &Painter,
    transform: &MapTransform,
    tiles: &TileFetchChannel,
    cache: &mut TileTextureCache,
) {
    let (min, max) = transform.visible_extent();
    let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));

    for coord in tiles_in_extent(min, max, transform.zoom) {
        let (tile_min, tile_max) = coord.mercator_extent();

        // Mercator Y grows north, screen Y grows south
        let top_left = transform.map_to_screen(Coord {
            x: tile_min.x,
            y: tile_max.y,
        });
        let bottom_right = transform.map_to_screen(Coord {
            x: tile_max.x,
            y: tile_min.y,
        });
        let tile_rect = Rect::from_min_max(top_left, bottom_right);

        if let Some(texture) = cache.texture(&coord) {
            painter.image(texture.id(), tile_rect, uv, Color32::WHITE);
        } else {
            painter.rect_filled(tile_rect, 0.0, Color32::from_rgb(30, 30, 45));

            if !cache.is_requested(&coord) {
                cache.mark_pending(coord);
                tiles.fetch(ctx.clone(), coord);
            }
        }
    }
}

/// Draws the acquisition scene footprint as a closed white outline.
fn render_scene_footprint(painter: &Painter, transform: &MapTransform) {
    let points: Vec<Pos2> = SCENE_FOOTPRINT
        .iter()
        .map(|corner| transform.geo_to_screen(*corner))
        .collect();

    for i in 0..points.len() {
        let next = (i + 1) % points.len();
        painter.line_segment([points[i], points[next]], Stroke::new(2.0, Color32::WHITE));
    }
}

/// Draws the scene-center markers, emphasizing the nearest one.
fn render_scene_centers(painter: &Painter, transform: &MapTransform, poi: &PoiLayer) {
    let center_color = Color32::from_rgb(255, 180, 80);
    let highlight_color = Color32::from_rgb(50, 200, 255);

    for (index, feature) in poi.features.iter().enumerate() {
        let screen_pos = transform.geo_to_screen(feature.coord);

        // Cull markers outside the canvas
        if !transform.screen_rect.expand(20.0).contains(screen_pos) {
            continue;
        }

        if poi.highlighted == Some(index) {
            painter.circle_filled(screen_pos, 6.0, highlight_color);
            painter.circle_stroke(
                screen_pos,
                6.0,
                Stroke::new(1.5, Color32::from_rgb(30, 150, 200)),
            );

            if let Some(ref label) = feature.label {
                painter.text(
                    screen_pos + Vec2::new(8.0, -2.0),
                    egui::Align2::LEFT_CENTER,
                    label,
                    egui::FontId::proportional(11.0),
                    highlight_color,
                );
            }
        } else {
            painter.circle_filled(screen_pos, 4.0, center_color);
            painter.circle_stroke(
                screen_pos,
                4.0,
                Stroke::new(1.0, Color32::from_rgb(180, 120, 40)),
            );
        }
    }
}

fn render_marker(painter: &Painter, transform: &MapTransform, marker: Coord<f64>) {
    let pos = transform.geo_to_screen(marker);

    painter.circle_filled(pos, 6.0, Color32::from_rgb(230, 70, 70));
    painter.circle_stroke(pos, 6.0, Stroke::new(1.5, Color32::WHITE));
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState, poi: &PoiLayer) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);

    // Create a small overlay area
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(260.0, 88.0));
    let text_color = Color32::from_rgb(200, 200, 220);

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!(
                    "Marker: {:.6}, {:.6}",
                    state.map_view.marker.y, state.map_view.marker.x
                ))
                .monospace()
                .size(12.0)
                .color(text_color),
            );
            ui.label(
                RichText::new(format!("Zoom: {}", state.map_view.zoom))
                    .monospace()
                    .size(12.0)
                    .color(text_color),
            );

            let center_tile = TileCoord::from_lon_lat(state.map_view.center, state.map_view.zoom);
            ui.label(
                RichText::new(format!(
                    "Tile: {}/{}/{}",
                    center_tile.zoom, center_tile.x, center_tile.y
                ))
                .monospace()
                .size(12.0)
                .color(text_color),
            );

            if let Some(nearest) = poi.nearest(state.map_view.marker) {
                let label = poi.features[nearest.index]
                    .label
                    .as_deref()
                    .unwrap_or("unnamed");
                ui.label(
                    RichText::new(format!(
                        "Nearest: {} ({:.1} km)",
                        label,
                        nearest.distance_m / 1000.0
                    ))
                    .monospace()
                    .size(12.0)
                    .color(text_color),
                );
            }
        });
    });
}

fn handle_canvas_interaction(
    response: &egui::Response,
    transform: &MapTransform,
    state: &mut AppState,
    poi: &mut PoiLayer,
) {
    // Handle dragging for panning
    if response.dragged() {
        let mut moved = transform.clone();
        moved.translate(-response.drag_delta());
        state.map_view.center = moved.center_lon_lat();
    }

    // Handle scroll for zooming relative to cursor position
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let old_zoom = state.map_view.zoom;
            if scroll_delta.y > 0.0 {
                state.map_view.zoom_in();
            } else {
                state.map_view.zoom_out();
            }

            if state.map_view.zoom != old_zoom {
                // Keep the point under the cursor stationary
                if let Some(cursor_pos) = response.hover_pos() {
                    let mut zoomed = transform.clone();
                    zoomed.zoom_about(cursor_pos, state.map_view.zoom);
                    state.map_view.center = zoomed.center_lon_lat();
                }
            }
        }
    }

    // Click places the acquisition marker
    if response.clicked() {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let lon_lat = transform.screen_to_geo(pointer_pos);
            state.place_marker(poi, lon_lat);
        }
    }
}
