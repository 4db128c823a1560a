//! Fetch-and-render cycle for a single dashboard view.
//!
//! Every action validates the selection, issues exactly one request and
//! replaces the view's output region with either the rendered result or an
//! inline error. Failures never escape as `Err`; they end up in the region.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    analysis::{AnalysisApi, EntityKind},
    error::DashboardError,
    view::{ComparisonView, Fragment, Report, ViewKind},
    Result,
};

#[cfg(test)]
mod tests;

/// Lifecycle of a view: `Idle -> Loading -> (Success | Error)`, and back to
/// `Loading` on the next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Idle,
    Loading,
    Success,
    Error,
}

/// What the user asked for; decides the messages shown around the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Overview,
    Analyze(EntityKind),
    Compare(EntityKind),
}

impl Action {
    pub fn validation_message(&self) -> &'static str {
        match self {
            Action::Overview => "",
            Action::Analyze(EntityKind::Team) => "Bitte wählen Sie ein Team aus.",
            Action::Analyze(EntityKind::Player) => "Bitte wählen Sie einen Spieler aus.",
            Action::Compare(EntityKind::Team) => "Bitte wählen Sie beide Teams aus.",
            Action::Compare(EntityKind::Player) => "Bitte wählen Sie beide Spieler aus.",
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Action::Overview => "Lade Daten...",
            Action::Analyze(EntityKind::Team) => "Analysiere Team...",
            Action::Analyze(EntityKind::Player) => "Analysiere Spieler...",
            Action::Compare(EntityKind::Team) => "Vergleiche Teams...",
            Action::Compare(EntityKind::Player) => "Vergleiche Spieler...",
        }
    }

    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Action::Overview => "Fehler beim Laden der Daten: ",
            Action::Analyze(EntityKind::Team) => "Fehler beim Analysieren des Teams: ",
            Action::Analyze(EntityKind::Player) => "Fehler beim Analysieren des Spielers: ",
            Action::Compare(EntityKind::Team) => "Fehler beim Vergleichen der Teams: ",
            Action::Compare(EntityKind::Player) => "Fehler beim Vergleichen der Spieler: ",
        }
    }
}

/// The replaceable content slot a view renders into.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRegion {
    id: &'static str,
    content: Fragment,
}

impl OutputRegion {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            content: Fragment::Empty,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn content(&self) -> &Fragment {
        &self.content
    }

    /// Swap in new content; nothing of the old content survives.
    pub fn replace(&mut self, fragment: Fragment) {
        self.content = fragment;
    }

    pub fn clear(&mut self) {
        self.content = Fragment::Empty;
    }
}

/// Reject empty (or whitespace-only) selections before any request. A
/// non-empty selection is passed on exactly as chosen.
fn require<'a>(name: &'a str, action: Action) -> Result<&'a str> {
    if name.trim().is_empty() {
        Err(DashboardError::validation(action.validation_message()))
    } else {
        Ok(name)
    }
}

pub struct ViewController<A: ?Sized> {
    kind: ViewKind,
    api: Arc<A>,
    state: ViewState,
    region: OutputRegion,
}

impl<A> ViewController<A>
where
    A: AnalysisApi + ?Sized,
{
    pub fn new(kind: ViewKind, api: Arc<A>) -> Self {
        Self {
            kind,
            api,
            state: ViewState::Idle,
            region: OutputRegion::new(kind.region_id()),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn region(&self) -> &OutputRegion {
        &self.region
    }

    pub fn content(&self) -> &Fragment {
        self.region.content()
    }

    /// Empty the region and return to `Idle`.
    pub fn reset(&mut self) {
        self.region.clear();
        self.state = ViewState::Idle;
    }

    fn begin(&mut self, action: Action) {
        debug!(view = %self.kind, ?action, "request started");
        self.state = ViewState::Loading;
        self.region.replace(Fragment::loading(action.loading_message()));
    }

    fn reject(&mut self, err: DashboardError) -> &Fragment {
        warn!(view = %self.kind, error = %err, "invalid selection");
        self.state = ViewState::Error;
        self.region.replace(Fragment::error(err.to_string()));
        self.region.content()
    }

    fn finish(&mut self, action: Action, outcome: Result<Fragment>) -> &Fragment {
        match outcome {
            Ok(fragment) => {
                self.state = ViewState::Success;
                self.region.replace(fragment);
            }
            Err(err) => {
                warn!(view = %self.kind, ?action, error = %err, "request failed");
                self.state = ViewState::Error;
                self.region.replace(Fragment::error(format!(
                    "{}{}",
                    action.failure_prefix(),
                    err
                )));
            }
        }
        self.region.content()
    }

    /// `GET /overview`.
    pub async fn load_overview(&mut self) -> &Fragment {
        let action = Action::Overview;
        self.begin(action);
        let outcome = self
            .api
            .overview()
            .await
            .map(|report| Fragment::Report(Report::overview(&report)));
        self.finish(action, outcome)
    }

    /// `GET /team/{name}` or `GET /player/{name}`.
    pub async fn analyze(&mut self, kind: EntityKind, name: &str) -> &Fragment {
        let action = Action::Analyze(kind);
        let name = match require(name, action) {
            Ok(name) => name,
            Err(err) => return self.reject(err),
        };

        self.begin(action);
        let outcome = self
            .api
            .report(kind, name)
            .await
            .map(|report| Fragment::Report(Report::for_entity(kind, name, &report)));
        self.finish(action, outcome)
    }

    /// Compare two teams or two players. Both selections are required.
    pub async fn compare(&mut self, kind: EntityKind, first: &str, second: &str) -> &Fragment {
        let action = Action::Compare(kind);
        let (first, second) = match (require(first, action), require(second, action)) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => return self.reject(err),
        };

        self.begin(action);
        let outcome = self
            .api
            .compare(kind, first, second)
            .await
            .map(|result| Fragment::Comparison(ComparisonView::new(kind, &result)));
        self.finish(action, outcome)
    }

    pub async fn analyze_team(&mut self, name: &str) -> &Fragment {
        self.analyze(EntityKind::Team, name).await
    }

    pub async fn analyze_player(&mut self, name: &str) -> &Fragment {
        self.analyze(EntityKind::Player, name).await
    }

    pub async fn compare_teams(&mut self, team1: &str, team2: &str) -> &Fragment {
        self.compare(EntityKind::Team, team1, team2).await
    }

    pub async fn compare_players(&mut self, player1: &str, player2: &str) -> &Fragment {
        self.compare(EntityKind::Player, player1, player2).await
    }
}
