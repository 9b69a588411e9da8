//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::orders::{
    records::{OrderRecord, OrderUuid},
    status::OrderStatus,
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const GET_ORDER_FOR_UPDATE_SQL: &str = include_str!("../sql/get_order_for_update.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("../sql/update_order_status.sql");
const RECORD_PAYMENT_SQL: &str = include_str!("../sql/record_payment.sql");

/// Columns for a new `orders` row.
#[derive(Debug, Clone)]
pub(crate) struct OrderRow<'a> {
    pub uuid: OrderUuid,
    pub user_id: Option<&'a str>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub estimated_time: &'a str,
    pub payment_reference: Option<&'a str>,
}

/// Rows come back with an empty `items` list; callers attach items from
/// [`super::PgOrderItemsRepository`].
#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        conn: &mut PgConnection,
        order: OrderRow<'_>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_id)
            .bind(order.status.as_str())
            .bind(order.total)
            .bind(order.estimated_time)
            .bind(order.payment_reference)
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut *conn)
            .await
    }

    /// Fetch an order and hold a row lock on it until the transaction ends.
    pub(crate) async fn lock_order(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_FOR_UPDATE_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        conn: &mut PgConnection,
        user_id: Option<&str>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn record_payment(
        &self,
        conn: &mut PgConnection,
        order: OrderUuid,
        reference: &str,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(RECORD_PAYMENT_SQL)
            .bind(order.into_uuid())
            .bind(reference)
            .fetch_one(&mut *conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<&str, _>("status")?
            .parse::<OrderStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            user_id: row.try_get("user_id")?,
            status,
            total: row.try_get("total")?,
            estimated_time: row.try_get("estimated_time")?,
            payment_reference: row.try_get("payment_reference")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
