use clap::Args;
use dishpatch_app::domain::orders::{OrdersService, PgOrdersService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListOrdersArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Only show orders for this user
    #[arg(long)]
    user_id: Option<String>,
}

pub(crate) async fn run(args: ListOrdersArgs) -> Result<(), String> {
    let service = PgOrdersService::new(args.database.connect().await?);

    let orders = service
        .list_orders(args.user_id)
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    for order in orders {
        println!(
            "{}\t{}\t{}\t{} items\t{}",
            order.uuid,
            order.status,
            order.total,
            order.items.len(),
            order.created_at
        );
    }

    Ok(())
}
