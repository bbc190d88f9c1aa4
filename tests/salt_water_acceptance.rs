use approx::assert_relative_eq;
use soundspeed_rs::{
    Medium, Quantity, SaltWaterSoundSpeed, WaterSample, compute_summary, salt_water_sound_speed,
};

#[test]
fn reference_scenarios() {
    assert_relative_eq!(
        salt_water_sound_speed(10.0, 50.0, 35.0).unwrap(),
        1568.09984525,
        epsilon = 1e-7
    );
    assert_relative_eq!(
        salt_water_sound_speed(10.0, 10.0, 35.0).unwrap(),
        1506.33171441,
        epsilon = 1e-7
    );
    assert_relative_eq!(
        salt_water_sound_speed(20.0, 1.0, 30.0).unwrap(),
        1517.678951364498,
        epsilon = 1e-7
    );
    assert_relative_eq!(
        salt_water_sound_speed(-4.0, 0.1, 0.0).unwrap(),
        1377.7423913916866,
        epsilon = 1e-7
    );
}

#[test]
fn sea_water_speed_is_in_plausible_band() {
    let sw = SaltWaterSoundSpeed::new();
    for t in [-4.0, 0.0, 10.0, 20.0, 30.0] {
        let c = sw.speed_at(t, 0.1, 35.0).unwrap();
        assert!((1400.0..=1560.0).contains(&c), "{c} at {t} °C");
    }
}

#[test]
fn speed_increases_with_pressure() {
    let sw = SaltWaterSoundSpeed::new();
    let shallow = sw.speed_at(5.0, 1.0, 35.0).unwrap();
    let deep = sw.speed_at(5.0, 60.0, 35.0).unwrap();
    assert!(deep > shallow);
}

#[test]
fn each_bound_fails_on_its_own() {
    let sw = SaltWaterSoundSpeed::new();
    assert_eq!(
        sw.speed_at(31.0, 10.0, 35.0).unwrap_err().quantity(),
        Quantity::Temperature
    );
    assert_eq!(
        sw.speed_at(10.0, 0.0, 35.0).unwrap_err().quantity(),
        Quantity::Pressure
    );
    assert_eq!(
        sw.speed_at(10.0, 10.0, 41.0).unwrap_err().quantity(),
        Quantity::Salinity
    );
    assert_eq!(
        sw.speed_at(10.0, f64::NAN, 35.0).unwrap_err().quantity(),
        Quantity::Pressure
    );
}

#[test]
fn input_range_exposes_formula_domain() {
    let r = SaltWaterSoundSpeed::new().input_range();
    assert_eq!((r.temperature.min, r.temperature.max), (-4.0, 30.0));
    assert_eq!((r.pressure.min, r.pressure.max), (0.1, 100.0));
    assert_eq!((r.salinity.min, r.salinity.max), (0.0, 40.0));
}

#[test]
fn summary_dispatches_on_medium() {
    let fresh = compute_summary(&WaterSample::Fresh { temperature: 4.0 }).unwrap();
    assert_eq!(fresh.medium, Medium::Fresh);
    assert_eq!(fresh.sound_speed_m_s, 1421.62);

    let salt = compute_summary(&WaterSample::Salt {
        temperature: 10.0,
        pressure: 10.0,
        salinity: 35.0,
    })
    .unwrap();
    assert_eq!(salt.medium, Medium::Salt);
    assert_relative_eq!(salt.sound_speed_m_s, 1506.33171441, epsilon = 1e-7);
}
