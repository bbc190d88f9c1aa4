use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SoundSpeedError;

/// Physical input checked against a [`ValidRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Temperature,
    Pressure,
    Salinity,
}

impl Quantity {
    /// Unit the quantity is expected in.
    pub const fn unit(self) -> &'static str {
        match self {
            Quantity::Temperature => "°C",
            Quantity::Pressure => "MPa",
            Quantity::Salinity => "PSU",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Pressure => "pressure",
            Quantity::Salinity => "salinity",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed interval `[min, max]` of accepted input values.
///
/// Bounds are inclusive. NaN is never contained, so a NaN input is rejected
/// like any other out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `value` unchanged when it lies in the range, otherwise an
    /// `OutOfRange` error naming `quantity`.
    pub fn check(&self, quantity: Quantity, value: f64) -> Result<f64, SoundSpeedError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(self.out_of_range(quantity, value))
        }
    }

    pub(crate) fn out_of_range(&self, quantity: Quantity, value: f64) -> SoundSpeedError {
        SoundSpeedError::OutOfRange {
            quantity,
            value,
            min: self.min,
            max: self.max,
        }
    }
}

/// Independent input bounds for the sea-water formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaltWaterInputRange {
    /// Temperature [°C]
    pub temperature: ValidRange,
    /// Pressure [MPa]
    pub pressure: ValidRange,
    /// Practical salinity [PSU]
    pub salinity: ValidRange,
}

impl SaltWaterInputRange {
    /// Checks temperature, pressure and salinity in that order and reports the
    /// first violation.
    pub fn check(
        &self,
        temperature: f64,
        pressure: f64,
        salinity: f64,
    ) -> Result<(), SoundSpeedError> {
        self.temperature.check(Quantity::Temperature, temperature)?;
        self.pressure.check(Quantity::Pressure, pressure)?;
        self.salinity.check(Quantity::Salinity, salinity)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    Fresh,
    Salt,
}

/// A single request for a sound speed evaluation.
///
/// Serialized with an internal `medium` tag:
/// `{"medium": "fresh", "temperature": 20.0}` or
/// `{"medium": "salt", "temperature": 10.0, "pressure": 50.0, "salinity": 35.0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "medium", rename_all = "snake_case")]
pub enum WaterSample {
    Fresh {
        temperature: f64,
    },
    Salt {
        temperature: f64,
        pressure: f64,
        salinity: f64,
    },
}

impl WaterSample {
    pub fn medium(&self) -> Medium {
        match self {
            WaterSample::Fresh { .. } => Medium::Fresh,
            WaterSample::Salt { .. } => Medium::Salt,
        }
    }

    pub fn temperature(&self) -> f64 {
        match *self {
            WaterSample::Fresh { temperature } | WaterSample::Salt { temperature, .. } => {
                temperature
            }
        }
    }
}

/// Result of evaluating a [`WaterSample`], echoing its inputs.
///
/// Fields:
/// - `medium`: which model produced the value
/// - `temperature`: input temperature [°C]
/// - `pressure`, `salinity`: sea-water inputs, absent for fresh water
/// - `sound_speed_m_s`: computed speed of sound [m/s]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SoundSpeedSummary {
    pub medium: Medium,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    pub sound_speed_m_s: f64,
}
