use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::models::rider::RiderSnapshot;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// The next status on the linear delivery path. Terminal states have none.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Checks that `to` is reachable from `self`: one step forward on the
    /// linear path, or cancellation of a non-terminal order. No backward
    /// transitions.
    pub fn validate_transition(self, to: OrderStatus) -> Result<(), AdminError> {
        let legal = match to {
            OrderStatus::Cancelled => !self.is_terminal(),
            _ => self.next() == Some(to),
        };

        if legal {
            Ok(())
        } else {
            Err(AdminError::InvalidTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub rider_delivery_status: OrderStatus,
    pub customer: CustomerSnapshot,
    pub rider: Option<RiderSnapshot>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn delivery_path_is_linear() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::InProgress));
        assert_eq!(OrderStatus::InProgress.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn backward_transition_is_rejected() {
        let err = OrderStatus::InProgress
            .validate_transition(OrderStatus::Pending)
            .unwrap_err();
        assert!(err.to_string().contains("invalid status transition"));
    }

    #[test]
    fn skipping_a_step_is_rejected() {
        assert!(OrderStatus::Pending
            .validate_transition(OrderStatus::Completed)
            .is_err());
    }

    #[test]
    fn cancel_is_legal_from_any_non_terminal_state() {
        assert!(OrderStatus::Pending
            .validate_transition(OrderStatus::Cancelled)
            .is_ok());
        assert!(OrderStatus::InProgress
            .validate_transition(OrderStatus::Cancelled)
            .is_ok());
        assert!(OrderStatus::Completed
            .validate_transition(OrderStatus::Cancelled)
            .is_err());
    }

    #[test]
    fn in_progress_serializes_with_space() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
