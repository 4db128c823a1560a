//! Unit tests for the view controller using a scripted in-memory API

use super::*;
use crate::analysis::types::{
    AnalysisReport, ComparisonResult, InjuryRecord, NamedSummary, StatisticsSummary,
};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Answers every call from canned data and records what was asked.
#[derive(Default)]
struct FakeApi {
    calls: AtomicUsize,
    status: Option<u16>,
    records: Vec<InjuryRecord>,
    requests: Mutex<Vec<String>>,
}

impl FakeApi {
    fn with_records(n: usize) -> Self {
        Self {
            records: (0..n)
                .map(|i| InjuryRecord {
                    player: format!("Spieler {}", i),
                    team: "Team".to_string(),
                    injury_type: "Prellung".to_string(),
                    season: "24/25".to_string(),
                    days_out: i as u32,
                    games_missed: 0,
                })
                .collect(),
            ..Default::default()
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self, what: String) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(what);
        match self.status {
            Some(status) => Err(DashboardError::Status {
                status,
                message: None,
            }),
            None => Ok(()),
        }
    }

    fn canned_report(&self, subject: Option<&str>) -> AnalysisReport {
        AnalysisReport {
            subject: subject.map(str::to_string),
            statistics: StatisticsSummary {
                total_injuries: self.records.len() as u64,
                average_days_out: 12.345,
                total_games_missed: 0,
            },
            data: self.records.clone(),
        }
    }
}

#[async_trait]
impl AnalysisApi for FakeApi {
    async fn names(&self, kind: EntityKind) -> Result<Vec<String>> {
        self.record_call(format!("names {}", kind))?;
        Ok(Vec::new())
    }

    async fn overview(&self) -> Result<AnalysisReport> {
        self.record_call("overview".to_string())?;
        Ok(self.canned_report(None))
    }

    async fn report(&self, kind: EntityKind, name: &str) -> Result<AnalysisReport> {
        self.record_call(format!("{} {}", kind.report_segment(), name))?;
        Ok(self.canned_report(Some(name)))
    }

    async fn compare(
        &self,
        kind: EntityKind,
        first: &str,
        second: &str,
    ) -> Result<ComparisonResult> {
        self.record_call(format!("compare {} {} {}", kind, first, second))?;
        let side = |name: &str| NamedSummary {
            name: name.to_string(),
            statistics: StatisticsSummary::default(),
        };
        Ok(ComparisonResult {
            first: side(first),
            second: side(second),
        })
    }
}

fn controller(kind: ViewKind, api: &Arc<FakeApi>) -> ViewController<FakeApi> {
    ViewController::new(kind, Arc::clone(api))
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_team_selection_makes_no_request() {
        let api = Arc::new(FakeApi::default());
        let mut view = controller(ViewKind::Team, &api);

        let fragment = view.analyze_team("").await.clone();

        assert_eq!(fragment, Fragment::error("Bitte wählen Sie ein Team aus."));
        assert_eq!(view.state(), ViewState::Error);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_player_selection_makes_no_request() {
        let api = Arc::new(FakeApi::default());
        let mut view = controller(ViewKind::Player, &api);

        let fragment = view.analyze_player("   ").await.clone();

        assert_eq!(
            fragment,
            Fragment::error("Bitte wählen Sie einen Spieler aus.")
        );
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_compare_requires_both_selections() {
        let api = Arc::new(FakeApi::default());
        let mut view = controller(ViewKind::Compare, &api);

        let teams = view.compare_teams("Team A", "").await.clone();
        assert_eq!(teams, Fragment::error("Bitte wählen Sie beide Teams aus."));

        let players = view.compare_players("", "Spieler B").await.clone();
        assert_eq!(
            players,
            Fragment::error("Bitte wählen Sie beide Spieler aus.")
        );

        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_replaces_previous_table() {
        let api = Arc::new(FakeApi::with_records(2));
        let mut view = controller(ViewKind::Team, &api);

        view.analyze_team("Team").await;
        assert!(view.content().table().is_some());

        view.analyze_team("").await;
        assert!(view.content().table().is_none());
        assert!(view.content().is_error());
        assert_eq!(api.calls(), 1);
    }
}

#[cfg(test)]
mod success_tests {
    use super::*;

    #[tokio::test]
    async fn test_overview_renders_all_records_in_order() {
        let api = Arc::new(FakeApi::with_records(5));
        let mut view = controller(ViewKind::Overview, &api);

        let fragment = view.load_overview().await.clone();

        let table = fragment.table().unwrap();
        assert_eq!(table.rows.len(), 5);
        let players: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(
            players,
            vec!["Spieler 0", "Spieler 1", "Spieler 2", "Spieler 3", "Spieler 4"]
        );
        assert_eq!(view.state(), ViewState::Success);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_team_sends_selection_unchanged() {
        let api = Arc::new(FakeApi::with_records(1));
        let mut view = controller(ViewKind::Team, &api);

        let fragment = view.analyze_team("1. FSV Mainz 05 ").await.clone();

        match fragment {
            Fragment::Report(report) => {
                assert_eq!(report.heading.as_deref(), Some("Analyse für 1. FSV Mainz 05 "));
                assert_eq!(report.cards[1].value, "12.3");
            }
            other => panic!("Expected report, got {:?}", other),
        }
        assert_eq!(
            *api.requests.lock().unwrap(),
            vec!["team 1. FSV Mainz 05 ".to_string()]
        );
    }

    #[tokio::test]
    async fn test_compare_players() {
        let api = Arc::new(FakeApi::default());
        let mut view = controller(ViewKind::Compare, &api);

        let fragment = view.compare_players("A", "B").await.clone();

        match fragment {
            Fragment::Comparison(comparison) => {
                assert_eq!(comparison.heading, "Spieler-Vergleich");
                assert_eq!(comparison.entries[0].title, "A");
                assert_eq!(comparison.entries[1].title, "B");
            }
            other => panic!("Expected comparison, got {:?}", other),
        }
        assert_eq!(
            *api.requests.lock().unwrap(),
            vec!["compare players A B".to_string()]
        );
    }

    #[tokio::test]
    async fn test_region_id_follows_view() {
        let api = Arc::new(FakeApi::default());
        let view = controller(ViewKind::Player, &api);

        assert_eq!(view.region().id(), "player-results");
        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(*view.content(), Fragment::Empty);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_error_is_inline_with_prefix() {
        let api = Arc::new(FakeApi::failing(404));
        let mut view = controller(ViewKind::Team, &api);

        let fragment = view.analyze_team("Hertha BSC").await.clone();

        assert_eq!(
            fragment,
            Fragment::error("Fehler beim Analysieren des Teams: HTTP error! status: 404")
        );
        assert_eq!(view.state(), ViewState::Error);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_each_action_has_its_own_prefix() {
        let api = Arc::new(FakeApi::failing(500));
        let mut view = controller(ViewKind::Compare, &api);

        let cases = [
            (
                view.load_overview().await.clone(),
                "Fehler beim Laden der Daten: ",
            ),
            (
                view.analyze_player("X").await.clone(),
                "Fehler beim Analysieren des Spielers: ",
            ),
            (
                view.compare_teams("X", "Y").await.clone(),
                "Fehler beim Vergleichen der Teams: ",
            ),
            (
                view.compare_players("X", "Y").await.clone(),
                "Fehler beim Vergleichen der Spieler: ",
            ),
        ];

        for (fragment, prefix) in cases {
            match fragment {
                Fragment::Error { message } => {
                    assert!(message.starts_with(prefix), "{}", message);
                    assert!(message.ends_with("HTTP error! status: 500"), "{}", message);
                }
                other => panic!("Expected error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_action_messages() {
        assert_eq!(Action::Overview.loading_message(), "Lade Daten...");
        assert_eq!(
            Action::Analyze(EntityKind::Team).loading_message(),
            "Analysiere Team..."
        );
        assert_eq!(
            Action::Compare(EntityKind::Player).loading_message(),
            "Vergleiche Spieler..."
        );
    }

    #[test]
    fn test_region_replace_and_clear() {
        let mut region = OutputRegion::new("overview-results");

        region.replace(Fragment::loading("Lade Daten..."));
        assert_eq!(*region.content(), Fragment::loading("Lade Daten..."));

        region.clear();
        assert_eq!(*region.content(), Fragment::Empty);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let api = Arc::new(FakeApi::failing(503));
        let mut view = controller(ViewKind::Overview, &api);

        view.load_overview().await;
        assert_eq!(view.state(), ViewState::Error);

        view.reset();
        assert_eq!(view.state(), ViewState::Idle);
        assert_eq!(*view.content(), Fragment::Empty);
    }
}
