use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Cell, GameTable};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: cell value → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct values of one column to distinct colours, so chart bars
/// can be told apart (e.g. wins from losses).
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub column: String,
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the distinct values of `column` in `table`.
    /// Returns `None` if the column is absent.
    pub fn for_column(table: &GameTable, column: &str) -> Option<Self> {
        let values = table.unique_text(column)?;
        let palette = generate_palette(values.len());
        Some(ColorMap {
            column: column.to_string(),
            mapping: values.into_iter().zip(palette).collect(),
            default_color: Color32::LIGHT_BLUE,
        })
    }

    /// Look up the colour for a given cell value.
    pub fn color_for(&self, value: &Cell) -> Color32 {
        self.mapping
            .get(&value.to_string())
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (value label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping.iter().map(|(v, c)| (v.clone(), *c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::games;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let colours = generate_palette(4);
        assert_eq!(colours.len(), 4);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn results_get_their_own_colours() {
        let table = games(&[("W", 100, "A"), ("L", 90, "B"), ("W", 120, "C")]);
        let map = ColorMap::for_column(&table, "Result").expect("result column");
        let win = map.color_for(&Cell::Text("W".into()));
        let loss = map.color_for(&Cell::Text("L".into()));
        assert_ne!(win, loss);
        assert_eq!(map.color_for(&Cell::Null), Color32::LIGHT_BLUE);
        let labels: Vec<String> = map.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["L".to_string(), "W".to_string()]);
    }

    #[test]
    fn absent_column_has_no_map() {
        let table = games(&[("W", 100, "A")]);
        assert!(ColorMap::for_column(&table, "Arena").is_none());
    }
}
