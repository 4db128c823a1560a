//! Reference lists (teams, players) cached for the lifetime of a session.
//!
//! Each list is fetched at most once; after that it is read-only until an
//! explicit [`SessionCache::reload`].

use tokio::sync::OnceCell;
use tracing::info;

use crate::{
    analysis::{AnalysisApi, EntityKind},
    Result,
};

#[derive(Debug, Default)]
pub struct SessionCache {
    teams: OnceCell<Vec<String>>,
    players: OnceCell<Vec<String>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, kind: EntityKind) -> &OnceCell<Vec<String>> {
        match kind {
            EntityKind::Team => &self.teams,
            EntityKind::Player => &self.players,
        }
    }

    /// Names of `kind`, fetching them on first use. A failed fetch leaves
    /// the cell empty.
    pub async fn names<A>(&self, api: &A, kind: EntityKind) -> Result<&[String]>
    where
        A: AnalysisApi + ?Sized,
    {
        let names = self
            .cell(kind)
            .get_or_try_init(|| async {
                let names = api.names(kind).await?;
                info!(%kind, count = names.len(), "loaded reference list");
                Ok::<_, crate::error::DashboardError>(names)
            })
            .await?;
        Ok(names.as_slice())
    }

    /// Names already loaded this session, without touching the network.
    pub fn cached(&self, kind: EntityKind) -> Option<&[String]> {
        self.cell(kind).get().map(Vec::as_slice)
    }

    pub fn is_loaded(&self, kind: EntityKind) -> bool {
        self.cell(kind).initialized()
    }

    /// Forget both lists; the next [`names`](Self::names) call fetches again.
    pub fn reload(&mut self) {
        self.teams = OnceCell::new();
        self.players = OnceCell::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{AnalysisReport, ComparisonResult};
    use crate::error::DashboardError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingApi {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AnalysisApi for CountingApi {
        async fn names(&self, kind: EntityKind) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DashboardError::Status {
                    status: 404,
                    message: None,
                });
            }
            Ok(match kind {
                EntityKind::Team => vec!["Team A".to_string(), "Team B".to_string()],
                EntityKind::Player => vec!["Spieler A".to_string()],
            })
        }

        async fn overview(&self) -> Result<AnalysisReport> {
            unreachable!("not used by the session cache")
        }

        async fn report(&self, _kind: EntityKind, _name: &str) -> Result<AnalysisReport> {
            unreachable!("not used by the session cache")
        }

        async fn compare(
            &self,
            _kind: EntityKind,
            _first: &str,
            _second: &str,
        ) -> Result<ComparisonResult> {
            unreachable!("not used by the session cache")
        }
    }

    #[tokio::test]
    async fn test_names_fetched_once() {
        let api = CountingApi::default();
        let cache = SessionCache::new();

        let first = cache.names(&api, EntityKind::Team).await.unwrap().to_vec();
        let second = cache.names(&api, EntityKind::Team).await.unwrap().to_vec();

        assert_eq!(first, vec!["Team A", "Team B"]);
        assert_eq!(first, second);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_lists_are_independent() {
        let api = CountingApi::default();
        let cache = SessionCache::new();

        cache.names(&api, EntityKind::Team).await.unwrap();
        assert!(cache.is_loaded(EntityKind::Team));
        assert!(!cache.is_loaded(EntityKind::Player));
        assert_eq!(cache.cached(EntityKind::Player), None);

        let players = cache.names(&api, EntityKind::Player).await.unwrap();
        assert_eq!(players, ["Spieler A".to_string()]);
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cell_empty() {
        let api = CountingApi {
            fail: true,
            ..Default::default()
        };
        let cache = SessionCache::new();

        let err = cache.names(&api, EntityKind::Team).await.unwrap_err();

        assert!(matches!(err, DashboardError::Status { status: 404, .. }));
        assert!(!cache.is_loaded(EntityKind::Team));
        assert_eq!(cache.cached(EntityKind::Team), None);
    }

    #[tokio::test]
    async fn test_reload_fetches_again() {
        let api = CountingApi::default();
        let mut cache = SessionCache::new();

        cache.names(&api, EntityKind::Team).await.unwrap();
        cache.reload();
        assert!(!cache.is_loaded(EntityKind::Team));

        cache.names(&api, EntityKind::Team).await.unwrap();
        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }
}
