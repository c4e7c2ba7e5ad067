use std::path::PathBuf;

/// Fixed settings of the dashboard. There are no flags or environment
/// variables; the game file lives at a fixed path relative to the working
/// directory.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Initial minimum-points slider value, clamped into the data range.
    pub default_min_points: i64,
    pub window_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("miami_heat_2023.csv"),
            default_min_points: 100,
            window_title: "Miami Heat 2023 Playoff Dashboard".to_string(),
        }
    }
}
