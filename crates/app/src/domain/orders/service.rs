//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        catalog::repository::PgCatalogRepository,
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            pricing::{order_total, totals_match},
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
            repositories::{OrderItemRow, OrderRow, PgOrderItemsRepository, PgOrdersRepository},
            status::OrderStatus,
        },
    },
};

/// Delivery estimate shown on every new order.
pub const DEFAULT_ESTIMATED_TIME: &str = "25-35 min";

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    items: PgOrderItemsRepository,
    catalog: PgCatalogRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            items: PgOrderItemsRepository::new(),
            catalog: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        if order.items.iter().any(|item| item.quantity < 1) {
            return Err(OrdersServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_transaction().await?;

        let ids: Vec<String> = order.items.iter().map(|item| item.item_id.clone()).collect();

        let menu: FxHashMap<String, _> = self
            .catalog
            .find_menu_items(&mut tx, &ids)
            .await?
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        let mut rows = Vec::with_capacity(order.items.len());

        for item in &order.items {
            let Some(menu_item) = menu.get(&item.item_id) else {
                return Err(OrdersServiceError::UnknownMenuItem(item.item_id.clone()));
            };

            rows.push(OrderItemRow {
                uuid: OrderItemUuid::new(),
                item_id: menu_item.id.clone(),
                name: menu_item.name.clone(),
                price: menu_item.price,
                quantity: item.quantity,
            });
        }

        let expected = order_total(rows.iter().map(|row| (row.price, row.quantity)));

        // Paid orders get no tolerance.
        let total_accepted = if order.payment_reference.is_some() {
            expected == order.total
        } else {
            totals_match(expected, order.total)
        };

        if !total_accepted {
            return Err(OrdersServiceError::TotalMismatch {
                expected,
                submitted: order.total,
            });
        }

        let mut created = self
            .orders
            .create_order(
                &mut tx,
                OrderRow {
                    uuid: OrderUuid::new(),
                    user_id: order.user_id.as_deref(),
                    status: OrderStatus::Preparing,
                    total: expected,
                    estimated_time: DEFAULT_ESTIMATED_TIME,
                    payment_reference: order.payment_reference.as_deref(),
                },
            )
            .await?;

        created.items = self
            .items
            .create_order_items(&mut tx, created.uuid, rows)
            .await?;

        tx.commit().await?;

        info!(
            order = %created.uuid,
            items = created.items.len(),
            total = %created.total,
            "order created"
        );

        Ok(created)
    }

    async fn list_orders(
        &self,
        user_id: Option<String>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut conn = self.db.acquire().await?;

        let mut orders = self
            .orders
            .list_orders(&mut conn, user_id.as_deref())
            .await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let mut grouped: FxHashMap<OrderUuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for item in self.items.get_items_for_orders(&mut conn, &uuids).await? {
            grouped.entry(item.order_uuid).or_default().push(item);
        }

        for order in &mut orders {
            order.items = grouped.remove(&order.uuid).unwrap_or_default();
        }

        debug!(count = orders.len(), "listed orders");

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut conn = self.db.acquire().await?;

        let mut record = self.orders.get_order(&mut conn, order).await?;

        record.items = self.items.get_order_items(&mut conn, order).await?;

        Ok(record)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let current = self.orders.lock_order(&mut tx, order).await?;

        if !current.status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let mut updated = self.orders.update_status(&mut tx, order, status).await?;

        updated.items = self.items.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        info!(%order, from = %current.status, to = %status, "order status updated");

        Ok(updated)
    }

    async fn record_payment(
        &self,
        order: OrderUuid,
        reference: String,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut updated = self
            .orders
            .record_payment(&mut tx, order, &reference)
            .await?;

        updated.items = self.items.get_order_items(&mut tx, order).await?;

        tx.commit().await?;

        info!(%order, %reference, "payment recorded");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates and prices a new order against the catalog, then stores the
    /// order and all of its items atomically. With a payment reference the
    /// submitted total must equal the menu total exactly, and the reference
    /// must not already settle another order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Orders with their items, newest first, optionally for one user.
    async fn list_orders(
        &self,
        user_id: Option<String>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// A single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Moves an order to `status`. Moving backwards is rejected; setting the
    /// current status again only refreshes `updated_at`.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Stores the payment provider's reference on an order.
    async fn record_payment(
        &self,
        order: OrderUuid,
        reference: String,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
