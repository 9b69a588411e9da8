//! Order Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::orders::records::{OrderItemRecord, OrderItemUuid, OrderUuid};

const CREATE_ORDER_ITEMS_SQL: &str = include_str!("../sql/create_order_items.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");
const GET_ITEMS_FOR_ORDERS_SQL: &str = include_str!("../sql/get_items_for_orders.sql");

/// Columns for a new `order_items` row. The stored `position` is the row's
/// index in the batch passed to `create_order_items`.
#[derive(Debug, Clone)]
pub(crate) struct OrderItemRow {
    pub uuid: OrderItemUuid,
    pub item_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert every line of an order in one statement. Returned in input
    /// order.
    pub(crate) async fn create_order_items(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
        items: Vec<OrderItemRow>,
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let len = items.len();

        let mut uuids = Vec::with_capacity(len);
        let mut item_ids = Vec::with_capacity(len);
        let mut names = Vec::with_capacity(len);
        let mut prices = Vec::with_capacity(len);
        let mut quantities = Vec::with_capacity(len);
        let mut positions = Vec::with_capacity(len);

        for (position, item) in (0_i32..).zip(items) {
            uuids.push(item.uuid.into_uuid());
            item_ids.push(item.item_id);
            names.push(item.name);
            prices.push(item.price);
            quantities.push(item.quantity);
            positions.push(position);
        }

        let mut created = query_as::<Postgres, OrderItemRecord>(CREATE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(uuids)
            .bind(item_ids)
            .bind(names)
            .bind(prices)
            .bind(quantities)
            .bind(positions)
            .fetch_all(&mut *conn)
            .await?;

        created.sort_by_key(|item| item.position);

        Ok(created)
    }

    pub(crate) async fn get_order_items(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut *conn)
            .await
    }

    /// Items of several orders in one round trip, ordered by order then
    /// position.
    pub(crate) async fn get_items_for_orders(
        &self,
        conn: &mut PgConnection,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = orders.iter().map(|order| order.into_uuid()).collect();

        query_as::<Postgres, OrderItemRecord>(GET_ITEMS_FOR_ORDERS_SQL)
            .bind(uuids)
            .fetch_all(&mut *conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            order_uuid: row.try_get::<Uuid, _>("order_uuid")?.into(),
            item_id: row.try_get("item_id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            position: row.try_get("position")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
