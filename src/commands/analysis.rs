//! `overview`, `team`, `player` and `compare`: one view, one request

use crate::{
    analysis::EntityKind,
    controller::ViewController,
    view::{Fragment, ViewKind},
    Result,
};

use super::CommandContext;

fn emit_fragment(ctx: &CommandContext, fragment: &Fragment) -> Result<()> {
    let rendered = ctx.renderer.render(fragment)?;
    ctx.emit(&rendered)
}

pub async fn handle_overview(ctx: &CommandContext) -> Result<()> {
    let mut view = ViewController::new(ViewKind::Overview, ctx.api.clone());
    let fragment = view.load_overview().await;
    emit_fragment(ctx, fragment)
}

pub async fn handle_analyze(ctx: &CommandContext, kind: EntityKind, name: &str) -> Result<()> {
    let view_kind = match kind {
        EntityKind::Team => ViewKind::Team,
        EntityKind::Player => ViewKind::Player,
    };
    let mut view = ViewController::new(view_kind, ctx.api.clone());
    let fragment = view.analyze(kind, name).await;
    emit_fragment(ctx, fragment)
}

pub async fn handle_compare(
    ctx: &CommandContext,
    kind: EntityKind,
    first: &str,
    second: &str,
) -> Result<()> {
    let mut view = ViewController::new(ViewKind::Compare, ctx.api.clone());
    let fragment = view.compare(kind, first, second).await;
    emit_fragment(ctx, fragment)
}
