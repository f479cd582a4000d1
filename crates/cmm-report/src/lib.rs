pub mod chart;
pub mod summary;

pub use chart::{CHART_Y_RANGE, HorizonMarker, IncidenceChart, incidence_chart};
pub use summary::{
    HorizonIncidence, IncidenceSummary, REPORT_HORIZONS, format_percent, incidence_summary,
};
