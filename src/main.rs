//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use injury_dash::{
    cli::{Cli, Commands, CompareCmd},
    commands::{
        analysis::{handle_analyze, handle_compare, handle_overview},
        common::load_default_file_config,
        dashboard::{handle_dashboard, DashboardParams},
        reference_lists::handle_reference_list,
        CommandContext,
    },
    config::Settings,
    logging, EntityKind,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = load_default_file_config()?;
    let settings = Settings::resolve(cli.global.base_url.clone(), cli.global.verbose, &file);
    logging::init(&settings.log_level)?;

    let ctx = CommandContext::new(settings, cli.global.format, cli.global.output.clone())?;

    match cli.command {
        Commands::Teams => handle_reference_list(&ctx, EntityKind::Team).await?,
        Commands::Players => handle_reference_list(&ctx, EntityKind::Player).await?,
        Commands::Overview => handle_overview(&ctx).await?,
        Commands::Team { name } => handle_analyze(&ctx, EntityKind::Team, &name).await?,
        Commands::Player { name } => handle_analyze(&ctx, EntityKind::Player, &name).await?,

        Commands::Compare { cmd } => match cmd {
            CompareCmd::Teams { team1, team2 } => {
                handle_compare(&ctx, EntityKind::Team, &team1, &team2).await?
            }
            CompareCmd::Players { player1, player2 } => {
                handle_compare(&ctx, EntityKind::Player, &player1, &player2).await?
            }
        },

        Commands::Dashboard {
            tab,
            compare_type,
            team,
            player,
        } => {
            handle_dashboard(
                &ctx,
                DashboardParams {
                    tab,
                    compare_type,
                    team,
                    player,
                },
            )
            .await?
        }
    }

    Ok(())
}
