pub mod calculator;
pub mod fresh_water;
pub mod salt_water;
