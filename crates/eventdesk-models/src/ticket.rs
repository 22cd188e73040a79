//! Ticket types: ticket definitions, coupons and purchases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket type offered for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket identifier.
    pub id: String,
    /// Code prefix for issued tickets.
    #[serde(default)]
    pub prefix: String,
    /// Code postfix for issued tickets.
    #[serde(default)]
    pub postfix: String,
    /// Display name.
    pub ticket_name: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Number of seats available.
    pub capacity: u32,
    /// Discount codes.
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    /// Purchases made so far.
    #[serde(default)]
    pub ticket_purchases: Vec<TicketPurchase>,
    /// When the ticket type was added.
    #[serde(deserialize_with = "crate::event::stamp::required")]
    pub date_added: DateTime<Utc>,
}

impl Ticket {
    /// Creates a ticket type with no coupons or purchases.
    pub fn new(id: impl Into<String>, ticket_name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            prefix: String::new(),
            postfix: String::new(),
            ticket_name: ticket_name.into(),
            price: 0.0,
            currency: "USD".to_string(),
            capacity,
            coupons: Vec::new(),
            ticket_purchases: Vec::new(),
            date_added: Utc::now(),
        }
    }

    /// Sets the unit price and currency.
    pub fn with_price(mut self, price: f64, currency: impl Into<String>) -> Self {
        self.price = price;
        self.currency = currency.into();
        self
    }

    /// Adds a coupon.
    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.coupons.push(coupon);
        self
    }

    /// Adds a purchase.
    pub fn with_purchase(mut self, purchase: TicketPurchase) -> Self {
        self.ticket_purchases.push(purchase);
        self
    }

    /// Total quantity purchased.
    pub fn sold(&self) -> u64 {
        self.ticket_purchases
            .iter()
            .map(|p| u64::from(p.quantity))
            .sum()
    }
}

/// A discount code on a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Coupon identifier.
    pub id: String,
    /// Code entered at checkout.
    pub code: String,
    /// Discount amount.
    pub discount: f64,
}

/// The person who bought tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchaser {
    /// Person identifier.
    pub id: String,
    /// First name.
    #[serde(default)]
    pub first_name: String,
}

/// A purchase of one or more tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPurchase {
    /// Purchase identifier.
    pub id: String,
    /// Buyer.
    pub person: Purchaser,
    /// Number of tickets bought.
    pub quantity: u32,
    /// When the purchase was made.
    #[serde(deserialize_with = "crate::event::stamp::required")]
    pub purchase_date: DateTime<Utc>,
    /// Amount charged.
    #[serde(default)]
    pub total_price: f64,
}

impl TicketPurchase {
    /// Creates a purchase made now by an anonymous buyer.
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        let id = id.into();
        Self {
            person: Purchaser {
                id: format!("person-{}", id),
                first_name: String::new(),
            },
            id,
            quantity,
            purchase_date: Utc::now(),
            total_price: 0.0,
        }
    }
}
