use clap::{Args, Subcommand};
use dishpatch_app::domain::catalog::{CatalogService, PgCatalogService};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RestaurantsCommand {
    #[command(subcommand)]
    command: RestaurantsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RestaurantsSubcommand {
    /// List restaurants, optionally filtered by name or cuisine
    List(ListRestaurantsArgs),

    /// Show one restaurant's menu
    Menu(MenuArgs),
}

#[derive(Debug, Args)]
struct ListRestaurantsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Case-insensitive name or cuisine filter
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, Args)]
struct MenuArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Restaurant id
    restaurant: String,
}

pub(crate) async fn run(command: RestaurantsCommand) -> Result<(), String> {
    match command.command {
        RestaurantsSubcommand::List(args) => list(args).await,
        RestaurantsSubcommand::Menu(args) => menu(args).await,
    }
}

async fn list(args: ListRestaurantsArgs) -> Result<(), String> {
    let catalog = PgCatalogService::new(args.database.connect().await?);

    let restaurants = catalog
        .search_restaurants(args.search.unwrap_or_default())
        .await
        .map_err(|error| format!("failed to list restaurants: {error}"))?;

    if restaurants.is_empty() {
        println!("no restaurants found");
        return Ok(());
    }

    for restaurant in restaurants {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            restaurant.id,
            restaurant.name,
            restaurant.cuisine,
            restaurant.rating,
            restaurant.delivery_time
        );
    }

    Ok(())
}

async fn menu(args: MenuArgs) -> Result<(), String> {
    let catalog = PgCatalogService::new(args.database.connect().await?);

    let items = catalog
        .list_menu_items(args.restaurant.clone())
        .await
        .map_err(|error| format!("failed to list menu: {error}"))?;

    if items.is_empty() {
        println!("no menu items for restaurant {}", args.restaurant);
        return Ok(());
    }

    for item in items {
        println!("{}\t{}\t{}", item.id, item.name, item.price);
    }

    Ok(())
}
