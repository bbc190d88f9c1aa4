#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adapters;
pub mod error;
pub mod models;
pub mod sound_speed;
pub mod tables;

#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::error::SoundSpeedError;
pub use crate::models::{
    Medium, Quantity, SaltWaterInputRange, SoundSpeedSummary, ValidRange, WaterSample,
};
pub use crate::sound_speed::calculator::compute_summary;
pub use crate::sound_speed::fresh_water::{Bracket, FreshWaterSoundSpeed, fresh_water_sound_speed};
pub use crate::sound_speed::salt_water::{SaltWaterSoundSpeed, salt_water_sound_speed};
