//! `teams` / `players`: print the selectable names

use crate::{
    analysis::EntityKind, session::SessionCache, view::SelectControl, Result,
};

use super::CommandContext;

/// Fetch the list once and render it as the dropdowns it would populate.
pub async fn handle_reference_list(ctx: &CommandContext, kind: EntityKind) -> Result<()> {
    let session = SessionCache::new();
    let names = session.names(ctx.api.as_ref(), kind).await?;
    let selects = SelectControl::populate(kind, names);
    // The three dropdowns of one kind are identical; show the primary one.
    let rendered = ctx.renderer.render_selects(&selects[..1])?;
    ctx.emit(&rendered)
}
