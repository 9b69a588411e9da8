use clap::{Args, Subcommand};

mod list;
mod place;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Build a cart from menu items and check it out
    Place(place::PlaceOrderArgs),

    /// List orders, newest first
    List(list::ListOrdersArgs),
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::Place(args) => place::run(args).await,
        OrdersSubcommand::List(args) => list::run(args).await,
    }
}
