use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{OpponentFilter, ResultMode};
use crate::data::views::{opponent_options, points_range};
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Edits `state.request` and refreshes the view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No games loaded.");
            return;
        }
    };

    let range = points_range(dataset);
    let opponents = opponent_options(dataset);
    let request = &mut state.request;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Win / loss ----
            ui.strong("Select Result:");
            for mode in ResultMode::ALL {
                ui.radio_value(&mut request.result_mode, mode, mode.to_string());
            }
            ui.separator();

            // ---- Minimum points ----
            if let Some((lo, hi)) = range {
                ui.strong("Minimum Points");
                ui.add(egui::Slider::new(&mut request.min_points, lo..=hi));
                ui.separator();
            }

            // ---- Opponent (only when the file has one) ----
            if let Some(opponents) = opponents {
                ui.strong("Select Opponent:");
                egui::ComboBox::from_id_salt("opponent")
                    .selected_text(request.opponent.label().to_string())
                    .show_ui(ui, |ui: &mut Ui| {
                        let options =
                            std::iter::once(OpponentFilter::ALL_LABEL.to_string()).chain(opponents);
                        for option in options {
                            let value = OpponentFilter::from_selection(&option);
                            ui.selectable_value(&mut request.opponent, value, option);
                        }
                    });
                ui.separator();
            }

            ui.checkbox(&mut request.show_high_scoring, "Show games with 110+ points");
            ui.checkbox(&mut request.show_all, "Show all games again");
        });

    state.refresh();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            ui.label(format!(
                "{} games loaded, {} visible",
                ds.len(),
                view.filtered.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – tables, chart, map
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new(&state.config.window_title).size(24.0));
            ui.label("Interactive dashboard built with egui showing 2023 playoff stats.");
            ui.add_space(8.0);

            let (Some(full), Some(view)) = (&state.dataset, &state.view) else {
                ui.label("No games loaded  (File → Reload)");
                return;
            };

            // ---- Result selection ----
            ui.heading("Filtered Game Stats");
            table::game_table(ui, "by_result", &view.by_result);
            ui.add_space(8.0);

            // ---- Points chart ----
            ui.heading("Points Scored per Game");
            plot::points_chart(ui, &view.by_result, &view.points, state.color_map.as_ref());

            if let Some(hs) = &view.high_scoring {
                ui.label(
                    RichText::new(format!(
                        "{} games found with 110 or more points.",
                        hs.count
                    ))
                    .color(Color32::DARK_GREEN),
                );
                table::game_table(ui, "high_scoring", &hs.games);
            }

            if let Some(notice) = &view.size_notice {
                ui.label(RichText::new(notice).color(Color32::from_rgb(0xd0, 0x8a, 0x00)));
            }
            ui.add_space(8.0);

            // ---- Threshold and opponent ----
            ui.heading(&view.points_heading);
            if let Some(heading) = &view.opponent_heading {
                ui.label(heading);
            }
            table::game_table(ui, "filtered", &view.filtered);
            ui.add_space(8.0);

            if view.show_all {
                ui.label(RichText::new("Showing full dataset again below.").color(Color32::LIGHT_BLUE));
                table::game_table(ui, "all_games", full);
                ui.add_space(8.0);
            }

            // ---- Map ----
            ui.heading("Game Location: Miami Home Base");
            plot::venue_map(ui, view.venue);

            ui.add_space(8.0);
            ui.weak("This dashboard was built using egui.");
        });
}
