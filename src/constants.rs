/// Fare charged for any trip up to `BASE_DISTANCE` kilometres
pub const BASE_FARE: u32 = 1250;

/// Distance covered by the base fare, in kilometres
pub const BASE_DISTANCE: u32 = 10;

/// Upper bound of the middle fare tier, in kilometres
pub const MIDDLE_TIER_LIMIT: u32 = 50;

/// Kilometres per fare unit in the middle tier
pub const MIDDLE_TIER_UNIT_DISTANCE: u32 = 5;

/// Kilometres per fare unit beyond `MIDDLE_TIER_LIMIT`
pub const LONG_TIER_UNIT_DISTANCE: u32 = 8;

/// Price of one fare unit in either distance tier
pub const TIER_UNIT_FARE: u32 = 100;

/// Amount deducted before an age discount is applied
pub const DISCOUNT_DEDUCTIBLE: u32 = 350;

/// Surcharge of a line that does not charge extra
pub const NO_SURCHARGE: u32 = 0;
