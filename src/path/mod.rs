//! Shortest-path search and fare calculation

mod discount;
mod engine;
mod fare;
mod response;
mod service;

pub use discount::{apply_discount, AgeDiscount, AgeGroup, Discount, NoDiscount};
pub use engine::{LineCharge, Path, PathEngine, PathLeg};
pub use fare::FareCalculator;
pub use response::PathResponse;
pub use service::PathService;
