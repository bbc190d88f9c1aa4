use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::SoundSpeedError;
use crate::models::{Quantity, ValidRange};
use crate::tables::{FRESH_WATER_RANGE, FRESH_WATER_TABLE, Sample};

/// Table entries surrounding a queried temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bracket {
    /// The temperature is itself a table key.
    Exact(Sample),
    /// Nearest keys strictly below and strictly above the temperature.
    Between(Sample, Sample),
}

impl Bracket {
    /// Piecewise-linear value at `temperature`.
    ///
    /// An exact bracket returns the stored speed untouched, so no division by
    /// a zero-width interval ever happens.
    pub fn interpolate(&self, temperature: f64) -> f64 {
        match *self {
            Bracket::Exact((_, speed)) => speed,
            Bracket::Between((lo_t, lo_v), (hi_t, hi_v)) => {
                lo_v + (hi_v - lo_v) * (temperature - lo_t) / (hi_t - lo_t)
            }
        }
    }
}

/// Speed of sound in fresh water, interpolated from an empirical table.
///
/// The table is kept sorted by temperature and never changes after
/// construction. The default instance borrows the compiled-in
/// [`FRESH_WATER_TABLE`]; [`FreshWaterSoundSpeed::from_samples`] builds one
/// from other measurements.
#[derive(Clone, Debug)]
pub struct FreshWaterSoundSpeed {
    samples: Cow<'static, [Sample]>,
    range: ValidRange,
}

impl FreshWaterSoundSpeed {
    pub const fn new() -> Self {
        Self {
            samples: Cow::Borrowed(&FRESH_WATER_TABLE),
            range: FRESH_WATER_RANGE,
        }
    }

    /// Builds a table from `(temperature, speed)` pairs in any order.
    ///
    /// Pairs with a non-finite member are dropped. When a temperature appears
    /// more than once the first occurrence wins. The accepted range is the
    /// extent of the remaining keys.
    ///
    /// Returns `None` unless at least two distinct temperatures remain.
    pub fn from_samples<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        let mut samples: Vec<Sample> = samples
            .into_iter()
            .filter(|(t, v)| t.is_finite() && v.is_finite())
            .collect();
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));
        samples.dedup_by(|later, earlier| later.0 == earlier.0);

        let min = samples.first()?.0;
        let max = samples.last()?.0;
        if samples.len() < 2 {
            return None;
        }

        Some(Self {
            samples: Cow::Owned(samples),
            range: ValidRange::new(min, max),
        })
    }

    /// Table entries, ascending by temperature.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn valid_range(&self) -> ValidRange {
        self.range
    }

    /// Locates the entries bracketing `temperature`.
    ///
    /// Returns `None` when the temperature lies outside the table's key
    /// extent (or is NaN).
    pub fn bracket(&self, temperature: f64) -> Option<Bracket> {
        let samples = self.samples();
        let idx = samples.partition_point(|&(t, _)| t < temperature);
        let upper = *samples.get(idx)?;
        if upper.0 == temperature {
            return Some(Bracket::Exact(upper));
        }
        let lower = *samples.get(idx.checked_sub(1)?)?;
        Some(Bracket::Between(lower, upper))
    }

    /// Sound speed [m/s] at `temperature` [°C].
    ///
    /// # Errors
    /// `OutOfRange` when `temperature` lies outside the accepted range.
    pub fn speed_at(&self, temperature: f64) -> Result<f64, SoundSpeedError> {
        self.range.check(Quantity::Temperature, temperature)?;
        let bracket = self
            .bracket(temperature)
            .ok_or_else(|| self.range.out_of_range(Quantity::Temperature, temperature))?;
        Ok(bracket.interpolate(temperature))
    }
}

impl Default for FreshWaterSoundSpeed {
    fn default() -> Self {
        Self::new()
    }
}

static FRESH_WATER: FreshWaterSoundSpeed = FreshWaterSoundSpeed::new();

/// Sound speed in fresh water at `temperature` [°C] using the built-in table.
pub fn fresh_water_sound_speed(temperature: f64) -> Result<f64, SoundSpeedError> {
    FRESH_WATER.speed_at(temperature)
}
