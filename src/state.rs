use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::dashboard::{build_view, DashboardRequest, DashboardView};
use crate::data::loader::load_file;
use crate::data::model::{columns, GameTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded table (None until the file loads successfully).
    pub dataset: Option<GameTable>,

    /// Control values edited by the side panel.
    pub request: DashboardRequest,

    /// View computed for `built_for` (cached until the controls change).
    pub view: Option<DashboardView>,
    built_for: Option<DashboardRequest>,

    /// Bar colours by game result.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            request: DashboardRequest::default(),
            view: None,
            built_for: None,
            color_map: None,
            status_message: None,
        }
    }

    /// Read the game file from the configured path.
    pub fn reload(&mut self) {
        let path = self.config.data_path.clone();
        match load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} games from {} with columns {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.columns()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded table, reset controls and colours.
    pub fn set_dataset(&mut self, dataset: GameTable) {
        self.request = DashboardRequest::initial(&dataset, &self.config);
        self.color_map = ColorMap::for_column(&dataset, columns::RESULT);
        self.dataset = Some(dataset);
        self.built_for = None;
        self.status_message = None;
        self.refresh();
    }

    /// Rebuild the view if the controls changed since the last build.
    pub fn refresh(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        if self.built_for.as_ref() == Some(&self.request) {
            return;
        }
        self.view = Some(build_view(dataset, &self.request));
        self.built_for = Some(self.request.clone());
    }
}
