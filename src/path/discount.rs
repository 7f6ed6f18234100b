//! Rider discounts applied to a fare after it has been calculated

use serde::{Deserialize, Serialize};
use crate::constants::DISCOUNT_DEDUCTIBLE;

pub trait Discount {
    fn apply(&self, fare: u64) -> u64;
}

/// Leaves the fare unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl Discount for NoDiscount {
    fn apply(&self, fare: u64) -> u64 {
        fare
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Ages 6 to 12
    Child,
    /// Ages 13 to 18
    Teenager,
    Adult,
}

impl AgeGroup {
    #[must_use]
    pub fn from_age(age: u32) -> Self {
        match age {
            6..=12 => Self::Child,
            13..=18 => Self::Teenager,
            _ => Self::Adult,
        }
    }

    /// Percentage of the discountable fare this group pays
    fn payable_percent(self) -> u64 {
        match self {
            Self::Child => 50,
            Self::Teenager => 80,
            Self::Adult => 100,
        }
    }
}

/// Discount for children and teenagers.
///
/// Discounted riders pay a share of the fare after the fixed deductible is
/// taken off; adults pay the full fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDiscount {
    pub group: AgeGroup,
}

impl AgeDiscount {
    #[must_use]
    pub fn for_age(age: u32) -> Self {
        Self {
            group: AgeGroup::from_age(age),
        }
    }
}

impl Discount for AgeDiscount {
    fn apply(&self, fare: u64) -> u64 {
        if self.group == AgeGroup::Adult {
            return fare;
        }
        fare.saturating_sub(u64::from(DISCOUNT_DEDUCTIBLE)) * self.group.payable_percent() / 100
    }
}

/// Apply `discount` to an already calculated fare
#[must_use]
pub fn apply_discount(fare: u64, discount: &impl Discount) -> u64 {
    discount.apply(fare)
}
