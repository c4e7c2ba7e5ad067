use crate::config::DashboardConfig;
use crate::data::filter::{by_result, filter, OpponentFilter, ResultMode};
use crate::data::model::{columns, GameTable};
use crate::data::views::{
    high_scoring, points_range, points_series, size_notice, GeoPoint, HighScoring, HOME_VENUE,
};

// ---------------------------------------------------------------------------
// Request: the current control values
// ---------------------------------------------------------------------------

/// Control values collected from the side panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardRequest {
    pub result_mode: ResultMode,
    pub min_points: i64,
    pub opponent: OpponentFilter,
    pub show_all: bool,
    pub show_high_scoring: bool,
}

impl DashboardRequest {
    /// Starting controls for a freshly loaded table.
    pub fn initial(full: &GameTable, config: &DashboardConfig) -> Self {
        Self {
            result_mode: ResultMode::All,
            min_points: clamp_to_range(config.default_min_points, points_range(full)),
            opponent: OpponentFilter::All,
            show_all: false,
            show_high_scoring: false,
        }
    }
}

/// Clamp a slider value into `[min, max]`; unchanged when there is no range.
pub fn clamp_to_range(value: i64, range: Option<(i64, i64)>) -> i64 {
    match range {
        Some((lo, hi)) => value.clamp(lo, hi),
        None => value,
    }
}

// ---------------------------------------------------------------------------
// View-model: everything the central panel renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Games matching the result selection only. Feeds the stats table,
    /// the chart, the high-scoring list and the size notice.
    pub by_result: GameTable,
    /// Games passing every filter stage (result, points, opponent).
    pub filtered: GameTable,
    /// Bar chart input: `(index label, points)`.
    pub points: Vec<(usize, i64)>,
    /// Present only when the high-scoring toggle is on.
    pub high_scoring: Option<HighScoring>,
    pub size_notice: Option<String>,
    pub points_heading: String,
    /// Present only when one opponent is selected and the table has opponents.
    pub opponent_heading: Option<String>,
    pub show_all: bool,
    pub venue: GeoPoint,
}

/// Run the filter pipeline for `request`. The chart, high-scoring list and
/// size notice come from the result stage; the threshold and opponent
/// stages only narrow `filtered`. `full` is only read.
pub fn build_view(full: &GameTable, request: &DashboardRequest) -> DashboardView {
    let by_result = by_result(full, request.result_mode);
    let filtered = filter(full, request.result_mode, request.min_points, &request.opponent);

    let opponent_heading = match &request.opponent {
        OpponentFilter::Team(name) if full.has_column(columns::OPPONENT) => {
            Some(format!("Filtered games against {name}:"))
        }
        _ => None,
    };

    log::debug!(
        "view rebuilt: {} of {} games ({}), {} after >= {} pts and opponent {}",
        by_result.len(),
        full.len(),
        request.result_mode,
        filtered.len(),
        request.min_points,
        request.opponent.label()
    );

    DashboardView {
        points: points_series(&by_result),
        high_scoring: request.show_high_scoring.then(|| high_scoring(&by_result)),
        size_notice: size_notice(&by_result, full),
        points_heading: format!("Games with at least {} points", request.min_points),
        opponent_heading,
        show_all: request.show_all,
        venue: HOME_VENUE,
        by_result,
        filtered,
    }
}
