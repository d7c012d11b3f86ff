//! Order domain types
//!
//! The order row as stored, the shapes used to create and change it, and the
//! page snapshot that is cached.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// == Order Status ==
/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in workflow order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
}

// == Order ==
/// A stored order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier
    pub id: i64,
    /// User who owns the order
    pub owner_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub quantity: u32,
    pub note: String,
    pub status: OrderStatus,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

// == New Order ==
/// Fields supplied when creating an order. The store assigns the id; status
/// always starts as [`OrderStatus::New`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub owner_id: i64,
    pub name: String,
    pub order_type: String,
    pub quantity: u32,
    pub note: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

// == Order Changes ==
/// Full replacement of every mutable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderChanges {
    pub owner_id: i64,
    pub name: String,
    pub order_type: String,
    pub quantity: u32,
    pub note: String,
    pub status: OrderStatus,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl NewOrder {
    /// Builds the stored row for this payload.
    pub fn into_order(self, id: i64, now: DateTime<Utc>) -> Order {
        Order {
            id,
            owner_id: self.owner_id,
            name: self.name,
            order_type: self.order_type,
            quantity: self.quantity,
            note: self.note,
            status: OrderStatus::default(),
            start_date: self.start_date,
            due_date: self.due_date,
            updated_at: now,
        }
    }
}

impl Order {
    /// Overwrites every mutable field and stamps `updated_at`.
    pub fn apply(&mut self, changes: OrderChanges, now: DateTime<Utc>) {
        self.owner_id = changes.owner_id;
        self.name = changes.name;
        self.order_type = changes.order_type;
        self.quantity = changes.quantity;
        self.note = changes.note;
        self.status = changes.status;
        self.start_date = changes.start_date;
        self.due_date = changes.due_date;
        self.updated_at = now;
    }
}

// == Order Page ==
/// One cached window of the order list, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPage {
    pub page: u32,
    pub data: Vec<Order>,
}
