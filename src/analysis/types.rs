use crate::error::DashboardError;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;


/// Which kind of entity a selection names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Team,
    Player,
}

impl EntityKind {
    /// Path segment for the single-entity report, e.g. `/team/{name}`.
    pub fn report_segment(&self) -> &'static str {
        match self {
            EntityKind::Team => "team",
            EntityKind::Player => "player",
        }
    }

    /// Path segment for the reference list and the comparison endpoint.
    pub fn plural_segment(&self) -> &'static str {
        match self {
            EntityKind::Team => "teams",
            EntityKind::Player => "players",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural_segment())
    }
}

impl FromStr for EntityKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "team" | "teams" => Ok(EntityKind::Team),
            "player" | "players" => Ok(EntityKind::Player),
            other => Err(DashboardError::Config {
                message: format!("unknown entity kind '{}' (expected teams or players)", other),
            }),
        }
    }
}

/// Accept a count as an integer, a float (`21.0`) or a string such as `"21 Tage"`.
fn de_whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let value = match &raw {
        Value::Null => return Ok(0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("invalid number: {}", n)))?,
        Value::String(s) => {
            let trimmed = s.trim().trim_end_matches("Tage").trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid count: {:?}", s)))?
        }
        other => return Err(D::Error::custom(format!("invalid count: {}", other))),
    };

    if !value.is_finite() || value < 0.0 {
        return Err(D::Error::custom(format!("count out of range: {}", value)));
    }
    Ok(value.round() as u32)
}

/// Short CSV rows reach us as `null` cells.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Seasons come back as `"2023/24"` or as a bare year.
fn de_season<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid season: {}", other))),
    }
}

/// Aggregate figures the backend computes for a set of injuries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct StatisticsSummary {
    pub total_injuries: u64,
    pub average_days_out: f64,
    pub total_games_missed: u64,
}

/// One row of injury data. Wire keys are the German column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct InjuryRecord {
    #[serde(rename = "Spieler", default, deserialize_with = "de_text")]
    pub player: String,
    #[serde(rename = "Team", default, deserialize_with = "de_text")]
    pub team: String,
    #[serde(rename = "Verletzung", default, deserialize_with = "de_text")]
    pub injury_type: String,
    #[serde(rename = "Saison", default, deserialize_with = "de_season")]
    pub season: String,
    #[serde(rename = "Ausfalltage", default, deserialize_with = "de_whole_number")]
    pub days_out: u32,
    #[serde(
        rename = "Spiele_verpasst",
        alias = "Verpasste_Spiele",
        default,
        deserialize_with = "de_whole_number"
    )]
    pub games_missed: u32,
}

/// Body shared by `/overview`, `/team/{name}` and `/player/{name}`.
///
/// `subject` is the echoed `team` or `player` name; the overview has none.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisReport {
    #[serde(alias = "team", alias = "player", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub statistics: StatisticsSummary,
    #[serde(default)]
    pub data: Vec<InjuryRecord>,
}

/// Statistics for one side of a comparison.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NamedSummary {
    pub name: String,
    #[serde(flatten)]
    pub statistics: StatisticsSummary,
}

/// Response of `/compare/teams` and `/compare/players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComparisonResult {
    #[serde(alias = "team1", alias = "player1")]
    pub first: NamedSummary,
    #[serde(alias = "team2", alias = "player2")]
    pub second: NamedSummary,
}

#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    pub teams: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayersEnvelope {
    pub players: Vec<String>,
}

/// `{"error": "..."}` body the backend sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CompareTeamsRequest<'a> {
    pub team1: &'a str,
    pub team2: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ComparePlayersRequest<'a> {
    pub player1: &'a str,
    pub player2: &'a str,
}
