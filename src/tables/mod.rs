//! Fixed reference data: the empirical fresh-water table and the accepted
//! input ranges of both models.
//!
//! The fresh-water values come from a published freshwater sound speed sheet
//! (bathylogger.com, "Speed of Sound in Freshwater"). The sheet is printed in
//! four quadrants; the two upper blocks (39.2 to 86.0 in steps of 0.9) repeat
//! the speeds of the lower blocks (4.0 to 30.0 in steps of 0.5), and 62.6 reads
//! 1472.70 where 17.0 reads 1472.73. The set is kept exactly as published.
//!
//! Entries are stored sorted by temperature so lookups can binary search.

use crate::models::{SaltWaterInputRange, ValidRange};

/// One `(temperature [°C], sound speed [m/s])` entry.
pub type Sample = (f64, f64);

/// Number of entries in [`FRESH_WATER_TABLE`].
pub const FRESH_WATER_TABLE_LEN: usize = 106;

/// Measured speed of sound in fresh water, ascending by temperature.
pub const FRESH_WATER_TABLE: [Sample; FRESH_WATER_TABLE_LEN] = [
    (4.0, 1421.62), (4.5, 1423.90), (5.0, 1426.15), (5.5, 1428.38),
    (6.0, 1430.58), (6.5, 1432.75), (7.0, 1434.90), (7.5, 1437.02),
    (8.0, 1439.12), (8.5, 1441.19), (9.0, 1443.23), (9.5, 1445.25),
    (10.0, 1447.25), (10.5, 1449.22), (11.0, 1451.17), (11.5, 1453.09),
    (12.0, 1454.99), (12.5, 1456.87), (13.0, 1458.72), (13.5, 1460.55),
    (14.0, 1462.36), (14.5, 1464.14), (15.0, 1465.91), (15.5, 1467.65),
    (16.0, 1469.36), (16.5, 1471.06), (17.0, 1472.73), (17.5, 1474.38),
    (18.0, 1476.01), (18.5, 1477.62), (19.0, 1479.21), (19.5, 1480.77),
    (20.0, 1482.32), (20.5, 1483.84), (21.0, 1485.35), (21.5, 1486.83),
    (22.0, 1488.29), (22.5, 1489.74), (23.0, 1491.16), (23.5, 1492.56),
    (24.0, 1493.95), (24.5, 1495.32), (25.0, 1496.66), (25.5, 1497.99),
    (26.0, 1499.30), (26.5, 1500.59), (27.0, 1501.86), (27.5, 1503.11),
    (28.0, 1504.35), (28.5, 1505.56), (29.0, 1506.76), (29.5, 1507.94),
    (30.0, 1509.10), (39.2, 1421.62), (40.1, 1423.90), (41.0, 1426.15),
    (41.9, 1428.38), (42.8, 1430.58), (43.7, 1432.75), (44.6, 1434.90),
    (45.5, 1437.02), (46.4, 1439.12), (47.3, 1441.19), (48.2, 1443.23),
    (49.1, 1445.25), (50.0, 1447.25), (50.9, 1449.22), (51.8, 1451.17),
    (52.7, 1453.09), (53.6, 1454.99), (54.5, 1456.87), (55.4, 1458.72),
    (56.3, 1460.55), (57.2, 1462.36), (58.1, 1464.14), (59.0, 1465.91),
    (59.9, 1467.65), (60.8, 1469.36), (61.7, 1471.06), (62.6, 1472.70),
    (63.5, 1474.38), (64.4, 1476.01), (65.3, 1477.62), (66.2, 1479.21),
    (67.1, 1480.77), (68.0, 1482.32), (68.9, 1483.84), (69.8, 1485.35),
    (70.7, 1486.83), (71.6, 1488.29), (72.5, 1489.74), (73.4, 1491.16),
    (74.3, 1492.56), (75.2, 1493.95), (76.1, 1495.32), (77.0, 1496.66),
    (77.9, 1497.99), (78.8, 1499.30), (79.7, 1500.59), (80.6, 1501.86),
    (81.5, 1503.11), (82.4, 1504.35), (83.3, 1505.56), (84.2, 1506.76),
    (85.1, 1507.94), (86.0, 1509.10),
];

/// Lowest tabulated fresh-water temperature [°C].
pub const FRESH_WATER_MIN_TEMP: f64 = 4.0;
/// Highest tabulated fresh-water temperature [°C].
pub const FRESH_WATER_MAX_TEMP: f64 = 86.0;

/// Accepted fresh-water temperatures, the key extent of the table.
pub const FRESH_WATER_RANGE: ValidRange =
    ValidRange::new(FRESH_WATER_MIN_TEMP, FRESH_WATER_MAX_TEMP);

/// Validity domain of the Wilson sea-water formula.
pub const SALT_WATER_RANGE: SaltWaterInputRange = SaltWaterInputRange {
    temperature: ValidRange::new(-4.0, 30.0),
    pressure: ValidRange::new(0.1, 100.0),
    salinity: ValidRange::new(0.0, 40.0),
};
