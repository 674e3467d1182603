use crate::degrees::Degrees;
use crate::error::GeoWindowError;
use crate::geo::normalize::{normalize_latitude, normalize_longitude};
use crate::geo::traits::point::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Geographic coordinate with exact latitude and longitude.
///
/// Latitude is always within `[-90, 90]` and longitude within `(-180, 180]`: constructors
/// squash latitude at the poles and wrap longitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng", into = "RawLatLng")]
pub struct LatLng {
    lat: Degrees,
    lng: Degrees,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Creates a new coordinate from latitude and longitude in degrees.
    ///
    /// Fails if any of the values is not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoWindowError> {
        if !lat.is_finite() {
            return Err(GeoWindowError::InvalidArgument("latitude"));
        }
        if !lng.is_finite() {
            return Err(GeoWindowError::InvalidArgument("longitude"));
        }

        let lat = lat.clamp(-90.0, 90.0);
        let lng = if lng.abs() > 360.0 {
            lng.rem_euclid(360.0)
        } else {
            lng
        };

        let lat = Degrees::from_f64(lat).ok_or(GeoWindowError::InvalidArgument("latitude"))?;
        let lng = Degrees::from_f64(lng).ok_or(GeoWindowError::InvalidArgument("longitude"))?;

        Ok(Self::from_degrees(lat, lng))
    }

    /// Creates a new coordinate from exact values, normalizing them.
    pub fn from_degrees(lat: Degrees, lng: Degrees) -> Self {
        Self {
            lat: normalize_latitude(lat),
            lng: normalize_longitude(lng),
        }
    }

    /// Converts any other point type into a `LatLng`.
    pub fn from_point(point: &impl GeoPoint<Num = f64>) -> Result<Self, GeoWindowError> {
        Self::new(point.lat(), point.lon())
    }

    /// Exact latitude.
    pub fn latitude(&self) -> Degrees {
        self.lat
    }

    /// Exact longitude.
    pub fn longitude(&self) -> Degrees {
        self.lng
    }
}

impl GeoPoint for LatLng {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat.to_f64()
    }

    fn lon(&self) -> f64 {
        self.lng.to_f64()
    }
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = GeoWindowError;

    fn try_from(value: RawLatLng) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

impl From<LatLng> for RawLatLng {
    fn from(value: LatLng) -> Self {
        Self {
            lat: value.lat(),
            lng: value.lon(),
        }
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.lat, self.lng)
    }
}

/// Creates a new [`LatLng`] from latitude and longitude values (in degrees).
///
/// Panics if any of the values is not finite.
///
/// ```
/// use geowindow::geo::GeoPoint;
/// use geowindow::latlng;
///
/// let point = latlng!(38.0, 232.0);
/// assert_eq!(point.lat(), 38.0);
/// assert_eq!(point.lon(), -128.0);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        match ::geowindow::geo::LatLng::new($lat, $lng) {
            Ok(point) => point,
            Err(err) => panic!("invalid coordinate: {err}"),
        }
    };
}
