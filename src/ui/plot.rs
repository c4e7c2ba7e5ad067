use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, Points};

use crate::color::ColorMap;
use crate::data::model::GameTable;
use crate::data::views::GeoPoint;

// ---------------------------------------------------------------------------
// Points per game (bar chart)
// ---------------------------------------------------------------------------

/// One bar per game, placed at the game's index label and coloured by the
/// colour map's column (the game result).
pub fn points_chart(
    ui: &mut Ui,
    games: &GameTable,
    points: &[(usize, i64)],
    color_map: Option<&ColorMap>,
) {
    if points.is_empty() {
        ui.weak("Nothing to chart.");
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|&(index, pts)| {
            let color = color_map
                .and_then(|cm| {
                    let row = games.rows().iter().find(|r| r.index == index)?;
                    let value = games.cell(row, &cm.column)?;
                    Some(cm.color_for(value))
                })
                .unwrap_or(Color32::LIGHT_BLUE);
            Bar::new(index as f64, pts as f64)
                .fill(color)
                .name(format!("game {index}"))
        })
        .collect();

    if let Some(cm) = color_map {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(format!("{}:", cm.column));
            for (label, color) in cm.legend_entries() {
                ui.colored_label(color, format!("■ {label}"));
            }
        });
    }

    Plot::new("points_chart")
        .height(240.0)
        .x_axis_label("Game")
        .y_axis_label("Points")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.7));
        });
}

// ---------------------------------------------------------------------------
// Venue map
// ---------------------------------------------------------------------------

/// Degrees of longitude/latitude shown around the marker.
const MAP_SPAN: f64 = 6.0;

/// Single marker on a longitude/latitude grid.
pub fn venue_map(ui: &mut Ui, venue: GeoPoint) {
    Plot::new("venue_map")
        .height(260.0)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(venue.lon - MAP_SPAN)
        .include_x(venue.lon + MAP_SPAN)
        .include_y(venue.lat - MAP_SPAN)
        .include_y(venue.lat + MAP_SPAN)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(vec![[venue.lon, venue.lat]])
                    .radius(6.0)
                    .color(Color32::RED)
                    .name("Miami"),
            );
        });
}
