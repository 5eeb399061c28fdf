pub mod debounce;
pub mod list;
pub mod optimistic;

/// Records addressable by a stable backend id.
pub trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

keyed!(
    crate::models::order::Order,
    crate::models::rider::Rider,
    crate::models::catalog::HomecareService,
    crate::models::catalog::Offering,
    crate::models::catalog::PathologyTest,
    crate::models::catalog::HealthPackage,
    crate::models::catalog::Phlebotomist,
    crate::models::catalog::Coupon
);
