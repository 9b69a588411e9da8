use std::str::FromStr;

use clap::Args;
use dishpatch_app::domain::{
    cart::{Cart, MAX_LINE_QUANTITY},
    catalog::{CatalogService, PgCatalogService},
    orders::{OrdersService, PgOrdersService},
};
use rustc_hash::FxHashMap;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct PlaceOrderArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Menu item to order as `ID` or `ID:QUANTITY`; repeatable
    #[arg(long = "item", required = true)]
    items: Vec<ItemArg>,

    /// User placing the order
    #[arg(long)]
    user_id: Option<String>,

    /// Payment reference to attach to the order
    #[arg(long)]
    payment_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemArg {
    item_id: String,
    quantity: i32,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (item_id, quantity) = match value.split_once(':') {
            Some((item_id, quantity)) => (
                item_id,
                quantity
                    .parse::<i32>()
                    .map_err(|error| format!("invalid quantity in {value:?}: {error}"))?,
            ),
            None => (value, 1),
        };

        if item_id.trim().is_empty() {
            return Err(format!("missing item id in {value:?}"));
        }

        if !(1..=MAX_LINE_QUANTITY).contains(&quantity) {
            return Err(format!(
                "quantity must be between 1 and {MAX_LINE_QUANTITY} in {value:?}"
            ));
        }

        Ok(Self {
            item_id: item_id.trim().to_string(),
            quantity,
        })
    }
}

pub(crate) async fn run(args: PlaceOrderArgs) -> Result<(), String> {
    let db = args.database.connect().await?;

    let catalog = PgCatalogService::new(db.clone());
    let orders = PgOrdersService::new(db);

    let menu: FxHashMap<_, _> = catalog
        .find_menu_items(args.items.iter().map(|arg| arg.item_id.clone()).collect())
        .await
        .map_err(|error| format!("failed to look up menu items: {error}"))?
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();

    let mut cart = Cart::new();

    for arg in &args.items {
        let item = menu
            .get(&arg.item_id)
            .ok_or_else(|| format!("unknown menu item: {}", arg.item_id))?;

        cart.add_quantity(item, arg.quantity)
            .map_err(|error| error.to_string())?;
    }

    let item_count = cart.item_count();

    let order = cart
        .checkout(args.user_id, args.payment_reference)
        .map_err(|error| error.to_string())?;

    let created = orders
        .create_order(order)
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    cart.clear();

    println!("order_id: {}", created.uuid);
    println!("status: {}", created.status);
    println!("estimated_time: {}", created.estimated_time);
    println!("items: {item_count}");

    for item in &created.items {
        println!("  {} x{} @ {}", item.name, item.quantity, item.price);
    }

    println!("total: {}", created.total);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_without_quantity_defaults_to_one() {
        assert_eq!(
            "m1".parse::<ItemArg>(),
            Ok(ItemArg {
                item_id: "m1".to_string(),
                quantity: 1
            })
        );
    }

    #[test]
    fn item_with_quantity() {
        assert_eq!(
            "m4:3".parse::<ItemArg>(),
            Ok(ItemArg {
                item_id: "m4".to_string(),
                quantity: 3
            })
        );
    }

    #[test]
    fn item_at_the_line_limit() {
        assert_eq!(
            "m1:99".parse::<ItemArg>(),
            Ok(ItemArg {
                item_id: "m1".to_string(),
                quantity: MAX_LINE_QUANTITY
            })
        );
    }

    #[test]
    fn rejects_bad_item_args() {
        assert!("".parse::<ItemArg>().is_err());
        assert!(":2".parse::<ItemArg>().is_err());
        assert!("m1:0".parse::<ItemArg>().is_err());
        assert!("m1:-1".parse::<ItemArg>().is_err());
        assert!("m1:two".parse::<ItemArg>().is_err());
        assert!("m1:100".parse::<ItemArg>().is_err());
        assert!("m1:4294967295".parse::<ItemArg>().is_err());
    }
}
