use crate::error::SoundSpeedError;
use crate::models::SaltWaterInputRange;
use crate::tables::SALT_WATER_RANGE;

/// Speed of sound in sea water after Wilson's equation.
///
/// See <https://rbr-global.com/speed-of-sound-in-water/>. The coefficients are
/// a fitted empirical model and are reproduced exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaltWaterSoundSpeed;

impl SaltWaterSoundSpeed {
    pub const fn new() -> Self {
        Self
    }

    /// Validity domain of the formula.
    pub fn input_range(&self) -> SaltWaterInputRange {
        SALT_WATER_RANGE
    }

    /// Computes the sound speed [m/s] from temperature `t` [°C], pressure `p`
    /// [MPa] and practical salinity `s` [PSU].
    ///
    /// # Errors
    /// `OutOfRange` for the first of temperature, pressure, salinity that
    /// lies outside [`SALT_WATER_RANGE`]; nothing is computed in that case.
    pub fn speed_at(&self, t: f64, p: f64, s: f64) -> Result<f64, SoundSpeedError> {
        SALT_WATER_RANGE.check(t, p, s)?;
        Ok(wilson(t, p, s))
    }
}

/// Sound speed in sea water, see [`SaltWaterSoundSpeed::speed_at`].
pub fn salt_water_sound_speed(t: f64, p: f64, s: f64) -> Result<f64, SoundSpeedError> {
    SaltWaterSoundSpeed.speed_at(t, p, s)
}

/// Unchecked evaluation of the Wilson polynomial.
fn wilson(t: f64, p: f64, s: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let p2 = p * p;
    let p3 = p2 * p;
    let p4 = p3 * p;
    let ds = s - 35.0;

    let c0 = 1449.14;
    let dc_t = 4.5721 * t - 4.4532e-2 * t2 - 2.6045e-4 * t3 + 7.9851e-6 * t4;
    let dc_s = 1.39799 * ds - 1.69202e-3 * ds * ds;
    let dc_p = 1.63432 * p - 1.06768e-3 * p2 + 3.73403e-6 * p3 - 3.6332e-8 * p4;
    let dc_stp = ds
        * (-1.1244e-2 * t + 7.7711e-7 * t2 + 7.85344e-4 * p - 1.3458e-5 * p2
            + 3.2203e-7 * p * t
            + 1.6101e-8 * t2 * p)
        + p * (-1.8974e-3 * t + 7.6287e-5 * t2 + 4.6176e-7 * t3)
        + p2 * (-2.6301e-5 * t + 1.9302e-7 * t2)
        + p3 * (-2.0831e-7 * t);

    c0 + dc_t + dc_s + dc_p + dc_stp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn reference_salinity_drops_the_salinity_terms() {
        // s = 35 zeroes dc_s and the salinity part of dc_stp.
        let t = 10.0;
        let p = 10.0;
        let expected = 1449.14
            + (4.5721 * t - 4.4532e-2 * 100.0 - 2.6045e-4 * 1e3 + 7.9851e-6 * 1e4)
            + (1.63432 * p - 1.06768e-3 * 100.0 + 3.73403e-6 * 1e3 - 3.6332e-8 * 1e4)
            + p * (-1.8974e-3 * t + 7.6287e-5 * 100.0 + 4.6176e-7 * 1e3)
            + 100.0 * (-2.6301e-5 * t + 1.9302e-7 * 100.0)
            + 1e3 * (-2.0831e-7 * t);
        assert_relative_eq!(wilson(t, p, 35.0), expected, epsilon = 1e-9);
        assert_relative_eq!(wilson(t, p, 35.0), 1506.33171441, epsilon = 1e-7);
    }

    #[test]
    fn golden_value_at_50_mpa() {
        let c = SaltWaterSoundSpeed.speed_at(10.0, 50.0, 35.0).unwrap();
        assert_relative_eq!(c, 1568.09984525, epsilon = 1e-7);
    }

    #[test]
    fn each_input_is_checked_independently() {
        let sw = SaltWaterSoundSpeed::new();
        let cases = [
            ((-4.01, 10.0, 35.0), Quantity::Temperature),
            ((30.01, 10.0, 35.0), Quantity::Temperature),
            ((10.0, 0.09, 35.0), Quantity::Pressure),
            ((10.0, 100.5, 35.0), Quantity::Pressure),
            ((10.0, 10.0, -0.1), Quantity::Salinity),
            ((10.0, 10.0, 40.1), Quantity::Salinity),
        ];
        for ((t, p, s), quantity) in cases {
            let err = sw.speed_at(t, p, s).unwrap_err();
            assert_eq!(err.quantity(), quantity, "({t}, {p}, {s})");
        }
    }

    #[test]
    fn domain_corners_are_accepted() {
        let sw = SaltWaterSoundSpeed::new();
        for t in [-4.0, 30.0] {
            for p in [0.1, 100.0] {
                for s in [0.0, 40.0] {
                    assert!(sw.speed_at(t, p, s).is_ok(), "({t}, {p}, {s})");
                }
            }
        }
    }

    #[test]
    fn free_function_matches_method() {
        assert_eq!(
            salt_water_sound_speed(20.0, 1.0, 30.0).unwrap(),
            SaltWaterSoundSpeed.speed_at(20.0, 1.0, 30.0).unwrap()
        );
    }
}
