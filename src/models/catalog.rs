use serde::{Deserialize, Serialize};

/// Backend list endpoints may include soft-deleted records; every screen
/// re-applies the `!is_deleted` filter after fetch.
pub trait SoftDeletable {
    fn is_deleted(&self) -> bool;
}

pub fn filter_deleted<T: SoftDeletable>(items: Vec<T>) -> Vec<T> {
    items.into_iter().filter(|item| !item.is_deleted()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomecareService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offering {
    pub id: String,
    pub service_id: String,
    pub title: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathologyTest {
    pub id: String,
    pub name: String,
    pub sample_type: String,
    pub price: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthPackage {
    pub id: String,
    pub name: String,
    pub test_ids: Vec<String>,
    pub price: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phlebotomist {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub service_city: String,
    pub status: crate::models::lookup::PhlebotomistStatus,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub discount_percent: f64,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

macro_rules! soft_deletable {
    ($($ty:ty),*) => {
        $(impl SoftDeletable for $ty {
            fn is_deleted(&self) -> bool {
                self.is_deleted
            }
        })*
    };
}

soft_deletable!(
    HomecareService,
    Offering,
    PathologyTest,
    HealthPackage,
    Phlebotomist,
    Coupon
);

impl SoftDeletable for crate::models::order::Order {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_deleted, HomecareService, SoftDeletable};

    fn service(id: &str, deleted: bool) -> HomecareService {
        HomecareService {
            id: id.to_string(),
            name: "Physiotherapy".to_string(),
            description: "Home visit".to_string(),
            price: 1200.0,
            is_active: true,
            is_deleted: deleted,
        }
    }

    #[test]
    fn deleted_records_are_dropped() {
        let filtered = filter_deleted(vec![
            service("a", false),
            service("b", true),
            service("c", false),
        ]);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| !s.is_deleted()));
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter_deleted(vec![service("a", false), service("b", true)]);
        let twice = filter_deleted(once.clone());

        assert_eq!(once, twice);
    }
}
