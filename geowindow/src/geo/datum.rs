use crate::geo::length::LengthUnit;

/// Earth model used to convert between lengths on the surface and angular deltas.
///
/// Conversions treat the Earth as a sphere with the mean radius of the datum ellipsoid
/// (see [`Datum::mean_radius`]). Longitude deltas depend on the latitude they are measured at,
/// since meridians converge toward the poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Mean radius `R1 = a * (1 - f / 3)` in meters.
    pub fn mean_radius(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / (3.0 * self.inv_flattening))
    }

    /// Latitude span in degrees that corresponds to the given length along a meridian.
    pub fn length_to_latitude_delta(&self, length: f64, unit: LengthUnit) -> f64 {
        (unit.to_meters(length) / self.mean_radius()).to_degrees()
    }

    /// Longitude span in degrees that corresponds to the given length along the parallel at
    /// `latitude` (degrees).
    ///
    /// Near the poles the result grows without bound.
    pub fn length_to_longitude_delta(&self, length: f64, unit: LengthUnit, latitude: f64) -> f64 {
        let parallel_radius = self.mean_radius() * latitude.to_radians().cos();
        (unit.to_meters(length) / parallel_radius).to_degrees()
    }

    /// Length along a meridian that corresponds to the latitude span `delta` (degrees).
    pub fn latitude_delta_to_length(&self, delta: f64, unit: LengthUnit) -> f64 {
        unit.meters_to_length(delta.to_radians() * self.mean_radius())
    }

    /// Length along the parallel at `latitude` that corresponds to the longitude span `delta`
    /// (both in degrees).
    pub fn longitude_delta_to_length(&self, delta: f64, unit: LengthUnit, latitude: f64) -> f64 {
        let parallel_radius = self.mean_radius() * latitude.to_radians().cos();
        unit.meters_to_length(delta.to_radians() * parallel_radius)
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wgs84_mean_radius() {
        assert_abs_diff_eq!(Datum::WGS84.mean_radius(), 6_371_008.77, epsilon = 0.01);
    }

    #[test]
    fn one_degree_of_latitude() {
        let datum = Datum::default();
        let length = datum.latitude_delta_to_length(1.0, LengthUnit::Kilometer);
        assert_abs_diff_eq!(length, 111.195, epsilon = 0.001);
        assert_abs_diff_eq!(
            datum.length_to_latitude_delta(length, LengthUnit::Kilometer),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn longitude_delta_depends_on_latitude() {
        let datum = Datum::default();
        let at_equator = datum.length_to_longitude_delta(100.0, LengthUnit::Mile, 0.0);
        let at_60 = datum.length_to_longitude_delta(100.0, LengthUnit::Mile, 60.0);
        let at_minus_60 = datum.length_to_longitude_delta(100.0, LengthUnit::Mile, -60.0);

        assert_abs_diff_eq!(
            at_equator,
            datum.length_to_latitude_delta(100.0, LengthUnit::Mile),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(at_60, at_equator * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(at_60, at_minus_60, epsilon = 1e-12);

        assert_abs_diff_eq!(
            datum.longitude_delta_to_length(at_60, LengthUnit::Mile, 60.0),
            100.0,
            epsilon = 1e-9
        );
    }
}
