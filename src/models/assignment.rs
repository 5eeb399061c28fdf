use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::rider::RiderSnapshot;

/// An unconfirmed intention to put a rider on an order. Client-owned and
/// persisted locally; at most one per order id, overwritten rather than
/// merged. Cleared when the assignment commits server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftAssignment {
    pub order_id: String,
    pub rider: RiderSnapshot,
    pub assigned_at: DateTime<Utc>,
}

impl DraftAssignment {
    pub fn new(order_id: impl Into<String>, rider: RiderSnapshot) -> Self {
        Self {
            order_id: order_id.into(),
            rider,
            assigned_at: Utc::now(),
        }
    }
}
