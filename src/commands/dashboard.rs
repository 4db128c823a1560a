//! `dashboard`: render the full page in one go

use crate::{
    analysis::EntityKind,
    dashboard::Dashboard,
    view::ViewKind,
    Result,
};

use super::CommandContext;

/// Parameters for the dashboard command
#[derive(Debug)]
pub struct DashboardParams {
    pub tab: ViewKind,
    pub compare_type: EntityKind,
    pub team: Option<String>,
    pub player: Option<String>,
}

pub async fn handle_dashboard(ctx: &CommandContext, params: DashboardParams) -> Result<()> {
    let mut dash = Dashboard::new(ctx.api.clone());
    dash.init().await;
    dash.load_overview().await;

    if let Some(team) = params.team.as_deref() {
        dash.analyze_team(team).await;
    }
    if let Some(player) = params.player.as_deref() {
        dash.analyze_player(player).await;
    }

    dash.show_compare_type(params.compare_type);
    dash.show_tab(params.tab);

    let rendered = ctx.renderer.render_page(&dash.page())?;
    ctx.emit(&rendered)
}
