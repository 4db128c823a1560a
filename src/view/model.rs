use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{
    analysis::types::{AnalysisReport, ComparisonResult, EntityKind, InjuryRecord, StatisticsSummary},
    error::DashboardError,
};


pub const LABEL_TOTAL_INJURIES: &str = "Gesamte Verletzungen";
pub const LABEL_INJURIES: &str = "Verletzungen";
pub const LABEL_AVERAGE_DAYS_OUT: &str = "Ø Ausfalltage";
pub const LABEL_GAMES_MISSED: &str = "Verpasste Spiele";

/// Placeholder option every selection dropdown starts with.
pub const SELECT_PLACEHOLDER: &str = "Bitte wählen...";

pub const TEAM_SELECT_IDS: [&str; 3] = ["team-select", "team1-select", "team2-select"];
pub const PLAYER_SELECT_IDS: [&str; 3] = ["player-select", "player1-select", "player2-select"];

/// The dashboard's tabs. Each owns one output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Overview,
    Team,
    Player,
    Compare,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Overview,
        ViewKind::Team,
        ViewKind::Player,
        ViewKind::Compare,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ViewKind::Overview => "overview",
            ViewKind::Team => "team",
            ViewKind::Player => "player",
            ViewKind::Compare => "compare",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Overview => "Übersicht",
            ViewKind::Team => "Team-Analyse",
            ViewKind::Player => "Spieler-Analyse",
            ViewKind::Compare => "Vergleich",
        }
    }

    /// DOM id of the view's output region.
    pub fn region_id(&self) -> &'static str {
        match self {
            ViewKind::Overview => "overview-results",
            ViewKind::Team => "team-results",
            ViewKind::Player => "player-results",
            ViewKind::Compare => "compare-results",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ViewKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ViewKind::ALL
            .into_iter()
            .find(|v| v.id() == wanted)
            .ok_or_else(|| DashboardError::Config {
                message: format!(
                    "unknown tab '{}' (expected overview, team, player or compare)",
                    s
                ),
            })
    }
}

/// A column of the injury table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Player,
    Team,
    InjuryType,
    Season,
    DaysOut,
    GamesMissed,
}

impl Column {
    pub const OVERVIEW: [Column; 6] = [
        Column::Player,
        Column::Team,
        Column::InjuryType,
        Column::Season,
        Column::DaysOut,
        Column::GamesMissed,
    ];

    /// A team report already names the team in its heading.
    pub const TEAM_REPORT: [Column; 5] = [
        Column::Player,
        Column::InjuryType,
        Column::Season,
        Column::DaysOut,
        Column::GamesMissed,
    ];

    pub const PLAYER_REPORT: [Column; 5] = [
        Column::Team,
        Column::InjuryType,
        Column::Season,
        Column::DaysOut,
        Column::GamesMissed,
    ];

    pub fn for_entity(kind: EntityKind) -> &'static [Column] {
        match kind {
            EntityKind::Team => &Self::TEAM_REPORT,
            EntityKind::Player => &Self::PLAYER_REPORT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::Player => "Spieler",
            Column::Team => "Team",
            Column::InjuryType => "Verletzung",
            Column::Season => "Saison",
            Column::DaysOut => "Ausfalltage",
            Column::GamesMissed => "Verpasste Spiele",
        }
    }

    pub fn cell(&self, record: &InjuryRecord) -> String {
        match self {
            Column::Player => record.player.clone(),
            Column::Team => record.team.clone(),
            Column::InjuryType => record.injury_type.clone(),
            Column::Season => record.season.clone(),
            Column::DaysOut => record.days_out.to_string(),
            Column::GamesMissed => record.games_missed.to_string(),
        }
    }
}

/// Average days out, one decimal place: `12.345` -> `"12.3"`. Ties round
/// away from zero (`1.25` -> `"1.3"`), unlike `{:.1}`.
pub fn format_average(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// One aggregate number with its label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub value: String,
    pub label: &'static str,
}

impl StatCard {
    /// The three cards for a summary. Reports label the count "Gesamte
    /// Verletzungen", comparisons just "Verletzungen".
    pub fn for_summary(summary: &StatisticsSummary, total_label: &'static str) -> Vec<StatCard> {
        vec![
            StatCard {
                value: summary.total_injuries.to_string(),
                label: total_label,
            },
            StatCard {
                value: format_average(summary.average_days_out),
                label: LABEL_AVERAGE_DAYS_OUT,
            },
            StatCard {
                value: summary.total_games_missed.to_string(),
                label: LABEL_GAMES_MISSED,
            },
        ]
    }
}

/// Header row plus one row per record, in the order given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn from_records(columns: &[Column], records: &[InjuryRecord]) -> Self {
        Self {
            headers: columns.iter().map(Column::label).collect(),
            rows: records
                .iter()
                .map(|r| columns.iter().map(|c| c.cell(r)).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub heading: Option<String>,
    pub cards: Vec<StatCard>,
    pub table: DataTable,
}

impl Report {
    pub fn overview(report: &AnalysisReport) -> Self {
        Self {
            heading: None,
            cards: StatCard::for_summary(&report.statistics, LABEL_TOTAL_INJURIES),
            table: DataTable::from_records(&Column::OVERVIEW, &report.data),
        }
    }

    /// `requested` is what the user picked; the echoed subject wins when present.
    pub fn for_entity(kind: EntityKind, requested: &str, report: &AnalysisReport) -> Self {
        let name = report.subject.as_deref().unwrap_or(requested);
        Self {
            heading: Some(format!("Analyse für {}", name)),
            cards: StatCard::for_summary(&report.statistics, LABEL_TOTAL_INJURIES),
            table: DataTable::from_records(Column::for_entity(kind), &report.data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCard {
    pub title: String,
    pub cards: Vec<StatCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub heading: &'static str,
    pub entries: Vec<ComparisonCard>,
}

impl ComparisonView {
    pub fn new(kind: EntityKind, result: &ComparisonResult) -> Self {
        let heading = match kind {
            EntityKind::Team => "Team-Vergleich",
            EntityKind::Player => "Spieler-Vergleich",
        };
        Self {
            heading,
            entries: [&result.first, &result.second]
                .into_iter()
                .map(|side| ComparisonCard {
                    title: side.name.clone(),
                    cards: StatCard::for_summary(&side.statistics, LABEL_INJURIES),
                })
                .collect(),
        }
    }
}

/// Content of an output region. Each action replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    #[default]
    Empty,
    Loading {
        message: String,
    },
    Error {
        message: String,
    },
    Report(Report),
    Comparison(ComparisonView),
}

impl Fragment {
    pub fn loading(message: impl Into<String>) -> Self {
        Fragment::Loading {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Fragment::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Fragment::Error { .. })
    }

    /// Rows of the rendered table, if this fragment has one.
    pub fn table(&self) -> Option<&DataTable> {
        match self {
            Fragment::Report(report) => Some(&report.table),
            _ => None,
        }
    }
}

/// A `<select>` and its options; the placeholder is always first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectControl {
    pub id: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<String>,
}

impl SelectControl {
    /// One control per id of `kind`, all filled from the same list.
    pub fn populate(kind: EntityKind, names: &[String]) -> Vec<SelectControl> {
        let ids = match kind {
            EntityKind::Team => TEAM_SELECT_IDS,
            EntityKind::Player => PLAYER_SELECT_IDS,
        };
        ids.into_iter()
            .map(|id| SelectControl {
                id,
                placeholder: SELECT_PLACEHOLDER,
                options: names.to_vec(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub id: &'static str,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pane {
    pub id: &'static str,
    pub title: &'static str,
    pub region_id: &'static str,
    pub active: bool,
    pub fragment: Fragment,
}

/// Whole-dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub tabs: Vec<Tab>,
    pub compare_mode: EntityKind,
    pub team_selects: Vec<SelectControl>,
    pub player_selects: Vec<SelectControl>,
    pub panes: Vec<Pane>,
}
