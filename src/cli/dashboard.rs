//! Dashboard command

use super::{signed_in_currency, CommandContext};
use crate::error::PfmResult;
use crate::session::Session;
use crate::views::DashboardView;

pub async fn handle_dashboard(session: &mut Session, ctx: &CommandContext<'_>) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let name = session.require_user()?.name.clone();

    let scope = ctx.scope();
    let view = DashboardView::load(session.api(), &scope).await?;

    println!("Welcome back, {}\n", name);
    print!("{}", view.summary().format_terminal(&currency));
    Ok(())
}
