//! Order catalog - the fixed, read-only order data source

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};
use crate::types::{LineItem, Order, OrderId, OrderStatus};

const IMAGE_BASE: &str = "https://images.example.com/products";

/// Read interface over an ordered sequence of orders
pub trait OrderSource {
    /// All orders, in catalog order
    fn orders(&self) -> &[Order];

    fn len(&self) -> usize {
        self.orders().len()
    }

    fn is_empty(&self) -> bool {
        self.orders().is_empty()
    }
}

/// In-memory catalog constructed once at start-up and never mutated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCatalog {
    orders: Vec<Order>,
}

impl OrderCatalog {
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The built-in four-order purchase history
    ///
    /// Every seed goes through the same validation as any other order data, so
    /// a bad literal here fails start-up instead of reaching the screen.
    pub fn sample() -> Result<Self> {
        Ok(Self::from_orders(vec![
            order(
                1,
                "ORD-2024-001",
                (2024, 1, 15),
                dec!(159.99),
                OrderStatus::Settled,
                vec![
                    item(1, "Silla ergonómica", 1, dec!(129.99), "silla-ergonomica.jpg")?,
                    item(2, "Cojín lumbar", 1, dec!(30.00), "cojin-lumbar.jpg")?,
                ],
            )?,
            order(
                2,
                "ORD-2024-002",
                (2024, 2, 3),
                dec!(49.99),
                OrderStatus::Settled,
                vec![
                    item(1, "Silla plegable", 2, dec!(19.99), "silla-plegable.jpg")?,
                    item(2, "Funda de asiento", 1, dec!(10.01), "funda-asiento.jpg")?,
                ],
            )?,
            order(
                3,
                "ORD-2024-003",
                (2024, 2, 20),
                dec!(29.99),
                OrderStatus::Pending,
                vec![item(
                    1,
                    "Lámpara de escritorio",
                    1,
                    dec!(29.99),
                    "lampara-escritorio.jpg",
                )?],
            )?,
            order(
                4,
                "ORD-2024-004",
                (2024, 3, 8),
                dec!(99.99),
                OrderStatus::Cancelled,
                vec![
                    item(1, "Mesa auxiliar", 1, dec!(89.99), "mesa-auxiliar.jpg")?,
                    item(2, "Posavasos de corcho", 4, dec!(2.50), "posavasos.jpg")?,
                ],
            )?,
        ]))
    }
}

impl OrderSource for OrderCatalog {
    fn orders(&self) -> &[Order] {
        &self.orders
    }
}

fn order(
    id: u32,
    number: &str,
    (year, month, day): (i32, u32, u32),
    total: Decimal,
    status: OrderStatus,
    items: Vec<LineItem>,
) -> Result<Order> {
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::InvalidOrderDate {
            order_number: number.to_string(),
            year,
            month,
            day,
        })?;

    Ok(Order {
        id: OrderId(id),
        order_number: number.to_string(),
        date,
        total,
        status,
        items,
    })
}

fn item(
    id: u32,
    name: &str,
    quantity: u32,
    unit_price: Decimal,
    image: &str,
) -> Result<LineItem> {
    LineItem::new(id, name, quantity, unit_price, format!("{IMAGE_BASE}/{image}"))
}
