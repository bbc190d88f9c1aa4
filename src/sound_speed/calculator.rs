use crate::error::SoundSpeedError;
use crate::models::{SoundSpeedSummary, WaterSample};
use crate::sound_speed::fresh_water::fresh_water_sound_speed;
use crate::sound_speed::salt_water::salt_water_sound_speed;

/// Evaluate a [`WaterSample`] with the model matching its medium.
///
/// Fresh water goes through the table interpolation, sea water through the
/// Wilson formula. The returned summary echoes the inputs next to the
/// computed `sound_speed_m_s`, which makes it suitable for JSON output.
///
/// # Errors
/// Propagates `OutOfRange` from the selected model unchanged.
pub fn compute_summary(sample: &WaterSample) -> Result<SoundSpeedSummary, SoundSpeedError> {
    let (speed, pressure, salinity) = match *sample {
        WaterSample::Fresh { temperature } => (fresh_water_sound_speed(temperature)?, None, None),
        WaterSample::Salt {
            temperature,
            pressure,
            salinity,
        } => (
            salt_water_sound_speed(temperature, pressure, salinity)?,
            Some(pressure),
            Some(salinity),
        ),
    };

    Ok(SoundSpeedSummary {
        medium: sample.medium(),
        temperature: sample.temperature(),
        pressure,
        salinity,
        sound_speed_m_s: speed,
    })
}
