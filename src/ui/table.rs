use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::GameTable;

/// Render a game table with its index labels in the first column.
/// `id` must be unique among the tables shown in one frame.
pub fn game_table(ui: &mut Ui, id: &str, table: &GameTable) {
    if table.is_empty() {
        ui.weak("No games match the current filters.");
        return;
    }

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(Column::auto())
            .columns(Column::auto().at_least(48.0), table.columns().len())
            .header(20.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("#");
                });
                for name in table.columns() {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for row in table.rows() {
                    body.row(18.0, |mut table_row| {
                        table_row.col(|ui: &mut Ui| {
                            ui.weak(row.index.to_string());
                        });
                        for cell in &row.cells {
                            table_row.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                }
            });
    });
}
