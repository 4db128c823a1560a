//! Session-level orchestration: one controller per tab, the shared
//! reference lists, and which tab / comparison mode is showing.

use std::sync::Arc;

use tracing::warn;

use crate::{
    analysis::{AnalysisApi, EntityKind},
    controller::ViewController,
    session::SessionCache,
    view::{
        model::{Pane, Tab},
        Fragment, Page, SelectControl, ViewKind,
    },
};


pub const PAGE_TITLE: &str = "Bundesliga Verletzungsanalyse";

pub struct Dashboard<A: ?Sized> {
    api: Arc<A>,
    session: SessionCache,
    overview: ViewController<A>,
    team: ViewController<A>,
    player: ViewController<A>,
    compare: ViewController<A>,
    active: ViewKind,
    compare_mode: EntityKind,
}

impl<A> Dashboard<A>
where
    A: AnalysisApi + ?Sized,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            overview: ViewController::new(ViewKind::Overview, Arc::clone(&api)),
            team: ViewController::new(ViewKind::Team, Arc::clone(&api)),
            player: ViewController::new(ViewKind::Player, Arc::clone(&api)),
            compare: ViewController::new(ViewKind::Compare, Arc::clone(&api)),
            api,
            session: SessionCache::new(),
            active: ViewKind::Overview,
            compare_mode: EntityKind::Team,
        }
    }

    /// Load both reference lists. A failed list is logged and its dropdowns
    /// stay at the placeholder.
    pub async fn init(&mut self) {
        let api = &*self.api;
        let session = &self.session;
        let (teams, players) = tokio::join!(
            session.names(api, EntityKind::Team),
            session.names(api, EntityKind::Player)
        );
        if let Err(err) = teams {
            warn!(error = %err, "Failed to load teams");
        }
        if let Err(err) = players {
            warn!(error = %err, "Failed to load players");
        }
    }

    /// Drop the cached lists and fetch them again.
    pub async fn reload(&mut self) {
        self.session.reload();
        self.init().await;
    }

    pub fn session(&self) -> &SessionCache {
        &self.session
    }

    /// Cached names for `kind`; empty when the list never loaded.
    pub fn names(&self, kind: EntityKind) -> &[String] {
        self.session.cached(kind).unwrap_or_default()
    }

    /// Every dropdown of `kind`, filled from the one cached list.
    pub fn selects(&self, kind: EntityKind) -> Vec<SelectControl> {
        SelectControl::populate(kind, self.names(kind))
    }

    pub fn active_tab(&self) -> ViewKind {
        self.active
    }

    pub fn show_tab(&mut self, kind: ViewKind) {
        self.active = kind;
    }

    pub fn compare_mode(&self) -> EntityKind {
        self.compare_mode
    }

    /// Switch between team and player comparison. The compare region is
    /// shared, so whatever it showed is cleared.
    pub fn show_compare_type(&mut self, kind: EntityKind) {
        self.compare_mode = kind;
        self.compare.reset();
    }

    pub fn controller(&self, kind: ViewKind) -> &ViewController<A> {
        match kind {
            ViewKind::Overview => &self.overview,
            ViewKind::Team => &self.team,
            ViewKind::Player => &self.player,
            ViewKind::Compare => &self.compare,
        }
    }

    pub fn region(&self, kind: ViewKind) -> &Fragment {
        self.controller(kind).content()
    }

    pub async fn load_overview(&mut self) -> &Fragment {
        self.overview.load_overview().await
    }

    pub async fn analyze_team(&mut self, name: &str) -> &Fragment {
        self.team.analyze_team(name).await
    }

    pub async fn analyze_player(&mut self, name: &str) -> &Fragment {
        self.player.analyze_player(name).await
    }

    /// Compare in the current compare mode.
    pub async fn compare(&mut self, first: &str, second: &str) -> &Fragment {
        let mode = self.compare_mode;
        self.compare.compare(mode, first, second).await
    }

    /// Snapshot of the whole dashboard for rendering.
    pub fn page(&self) -> Page {
        Page {
            title: PAGE_TITLE,
            tabs: ViewKind::ALL
                .into_iter()
                .map(|kind| Tab {
                    id: kind.id(),
                    title: kind.title(),
                    active: kind == self.active,
                })
                .collect(),
            compare_mode: self.compare_mode,
            team_selects: self.selects(EntityKind::Team),
            player_selects: self.selects(EntityKind::Player),
            panes: ViewKind::ALL
                .into_iter()
                .map(|kind| Pane {
                    id: kind.id(),
                    title: kind.title(),
                    region_id: kind.region_id(),
                    active: kind == self.active,
                    fragment: self.region(kind).clone(),
                })
                .collect(),
        }
    }
}
