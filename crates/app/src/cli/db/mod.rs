use clap::{Args, Subcommand};
use dishpatch_app::{
    database,
    seed::{self, SeedOutcome},
};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate(DatabaseArgs),

    /// Load the demo catalog into an empty database
    Seed(DatabaseArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate(args).await,
        DbSubcommand::Seed(args) => seed(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn seed(args: DatabaseArgs) -> Result<(), String> {
    let db = args.connect().await?;

    let outcome = seed::seed_catalog(db.pool())
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    match outcome {
        SeedOutcome::Seeded {
            restaurants,
            menu_items,
        } => println!("seeded {restaurants} restaurants and {menu_items} menu items"),
        SeedOutcome::Skipped => {
            println!("catalog already has restaurants; nothing to do");
        }
    }

    Ok(())
}
