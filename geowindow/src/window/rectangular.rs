use crate::degrees::Degrees;
use crate::error::GeoWindowError;
use crate::geo::{normalize_latitude, normalize_longitude, Datum, GeoPoint, LatLng, LengthUnit};
use crate::window::GeoWindow;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A "pseudo-rectangular" window bounded by minimum and maximum latitude and by left and right
/// longitude. The larger the window, the less rectangular it actually is.
///
/// A window never spans more than 180 degrees of latitude or 360 degrees of longitude; larger
/// deltas are clamped.
///
/// The latitude span is not a guarantee. A window centered at the North Pole `(90, 0)` with
/// latitude delta of 10 degrees has maximum latitude of 90 and minimum latitude of 85: windows are
/// squashed when they hit the poles.
///
/// A window may cross the antimeridian (180th meridian). In that case
/// [`RectangularWindow::left_longitude`] is greater than [`RectangularWindow::right_longitude`]
/// and the window covers `[left, 180]` and `(-180, right]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RectangularWindow {
    center: LatLng,
    latitude_delta: Degrees,
    longitude_delta: Degrees,
    min_latitude: Degrees,
    max_latitude: Degrees,
    left_longitude: Degrees,
    right_longitude: Degrees,
    crosses_antimeridian: bool,
}

impl RectangularWindow {
    /// Creates a window around `center` spanning `delta_lat` degrees of latitude and `delta_lng`
    /// degrees of longitude.
    ///
    /// Fails if the center coordinates or any of the deltas are not finite.
    pub fn new(
        center: &impl GeoPoint<Num = f64>,
        delta_lat: f64,
        delta_lng: f64,
    ) -> Result<Self, GeoWindowError> {
        let center = window_center(center)?;

        if !delta_lat.is_finite() {
            log::debug!("Rejected window latitude delta: {delta_lat}");
            return Err(GeoWindowError::InvalidArgument("delta_lat"));
        }
        if !delta_lng.is_finite() {
            log::debug!("Rejected window longitude delta: {delta_lng}");
            return Err(GeoWindowError::InvalidArgument("delta_lng"));
        }

        let latitude_delta =
            Degrees::from_f64(delta_lat.abs().min(180.0)).unwrap_or(Degrees::HALF_TURN);
        let longitude_delta =
            Degrees::from_f64(delta_lng.abs().min(360.0)).unwrap_or(Degrees::FULL_TURN);

        let (min_latitude, max_latitude) = latitude_bounds(center.latitude(), latitude_delta);
        let (left_longitude, right_longitude, crosses_antimeridian) =
            longitude_bounds(center.longitude(), longitude_delta);

        Ok(Self {
            center,
            latitude_delta,
            longitude_delta,
            min_latitude,
            max_latitude,
            left_longitude,
            right_longitude,
            crosses_antimeridian,
        })
    }

    /// Creates a window with the given physical size around `center`.
    ///
    /// The window includes all latitudes within `height / 2` north and south, and all longitudes
    /// within `width / 2` east and west of the center. The width is measured along the parallel of
    /// the center, so in the northern hemisphere the top edge of the window is narrower than the
    /// bottom one. This approximation works well for small windows away from the poles.
    pub fn with_size(
        center: &impl GeoPoint<Num = f64>,
        width: f64,
        height: f64,
        unit: LengthUnit,
    ) -> Result<Self, GeoWindowError> {
        let center = window_center(center)?;

        let datum = Datum::default();
        let delta_lat = datum.length_to_latitude_delta(height, unit);
        let delta_lng = datum.length_to_longitude_delta(width, unit, center.lat());

        Self::new(&center, delta_lat, delta_lng)
    }

    /// Creates a window with equal width and height, see [`RectangularWindow::with_size`].
    pub fn square(
        center: &impl GeoPoint<Num = f64>,
        width_height: f64,
        unit: LengthUnit,
    ) -> Result<Self, GeoWindowError> {
        Self::with_size(center, width_height, width_height, unit)
    }

    /// Recalculates the window with new parameters, see [`RectangularWindow::new`].
    ///
    /// On error the window is left unchanged.
    pub fn set_window(
        &mut self,
        center: &impl GeoPoint<Num = f64>,
        delta_lat: f64,
        delta_lng: f64,
    ) -> Result<(), GeoWindowError> {
        *self = Self::new(center, delta_lat, delta_lng)?;
        Ok(())
    }

    /// Recalculates the window with new physical size, see [`RectangularWindow::with_size`].
    ///
    /// On error the window is left unchanged.
    pub fn set_window_with_size(
        &mut self,
        center: &impl GeoPoint<Num = f64>,
        width: f64,
        height: f64,
        unit: LengthUnit,
    ) -> Result<(), GeoWindowError> {
        *self = Self::with_size(center, width, height, unit)?;
        Ok(())
    }

    /// Requested height of the window.
    ///
    /// This is calculated from [`RectangularWindow::latitude_delta`], so near the poles the
    /// actual height can be smaller.
    pub fn height(&self, unit: LengthUnit) -> f64 {
        Datum::default().latitude_delta_to_length(self.latitude_delta.to_f64(), unit)
    }

    /// Width of the window along the parallel of its center.
    pub fn width(&self, unit: LengthUnit) -> f64 {
        Datum::default().longitude_delta_to_length(
            self.longitude_delta.to_f64(),
            unit,
            self.center.lat(),
        )
    }

    /// Returns `true` if the window spans the antimeridian.
    ///
    /// In this case the left longitude is on the positive side of the 180th meridian, and the
    /// right one on the negative side. Instead of testing whether a point lies between the left
    /// and right longitudes, one has to test whether it lies outside of them.
    pub fn crosses_antimeridian(&self) -> bool {
        self.crosses_antimeridian
    }

    /// Returns `true` if the window covers all longitudes.
    pub fn spans_all_longitudes(&self) -> bool {
        self.longitude_delta == Degrees::FULL_TURN
    }

    /// Requested latitude span, clamped to `[0, 180]`.
    pub fn latitude_delta(&self) -> Degrees {
        self.latitude_delta
    }

    /// Actual latitude span after the bounds were squashed at the poles.
    pub fn realized_latitude_delta(&self) -> Degrees {
        self.max_latitude - self.min_latitude
    }

    /// Longitude span, clamped to `[0, 360]`.
    pub fn longitude_delta(&self) -> Degrees {
        self.longitude_delta
    }

    /// Southern boundary.
    pub fn min_latitude(&self) -> Degrees {
        self.min_latitude
    }

    /// Northern boundary.
    pub fn max_latitude(&self) -> Degrees {
        self.max_latitude
    }

    /// Western boundary, normalized.
    pub fn left_longitude(&self) -> Degrees {
        self.left_longitude
    }

    /// Eastern boundary, normalized.
    pub fn right_longitude(&self) -> Degrees {
        self.right_longitude
    }

    /// Same as [`GeoWindow::contains`], but accepts any point type. Points with non-finite
    /// coordinates are never contained.
    pub fn contains_point(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        match LatLng::from_point(point) {
            Ok(point) => self.contains(&point),
            Err(_) => false,
        }
    }

    fn contains_longitude(&self, longitude: Degrees) -> bool {
        if self.spans_all_longitudes() {
            return true;
        }

        if self.crosses_antimeridian {
            !((longitude.is_negative() && longitude > self.right_longitude)
                || (!longitude.is_negative() && longitude < self.left_longitude))
        } else {
            longitude <= self.right_longitude && longitude >= self.left_longitude
        }
    }
}

fn window_center(center: &impl GeoPoint<Num = f64>) -> Result<LatLng, GeoWindowError> {
    LatLng::from_point(center).map_err(|_| {
        log::debug!("Rejected window center: ({}, {})", center.lat(), center.lon());
        GeoWindowError::InvalidArgument("center")
    })
}

/// Returns `(min, max)`. For an odd number of units the extra unit goes to the north edge.
fn latitude_bounds(center: Degrees, delta: Degrees) -> (Degrees, Degrees) {
    let south = center - Degrees::from_units(delta.units() / 2);
    let north = south + delta;
    let lat1 = normalize_latitude(north);
    let lat2 = normalize_latitude(south);

    if lat1 != north || lat2 != south {
        log::trace!("Window at latitude {center} with delta {delta} is squashed at a pole");
    }

    (lat1.min(lat2), lat1.max(lat2))
}

/// Returns `(left, right, crosses_antimeridian)`. For an odd number of units the extra unit goes
/// to the east edge.
fn longitude_bounds(center: Degrees, delta: Degrees) -> (Degrees, Degrees, bool) {
    let left = center - Degrees::from_units(delta.units() / 2);
    let right = left + delta;

    // A left edge of exactly -180 normalizes to 180, so it is on the other side of the
    // antimeridian from the right edge.
    let crosses = right > Degrees::HALF_TURN || left <= -Degrees::HALF_TURN;
    if crosses {
        log::trace!("Window at longitude {center} with delta {delta} crosses the antimeridian");
    }

    (normalize_longitude(left), normalize_longitude(right), crosses)
}

impl GeoWindow for RectangularWindow {
    fn contains(&self, point: &LatLng) -> bool {
        let latitude = point.latitude();
        if latitude > self.max_latitude || latitude < self.min_latitude {
            return false;
        }

        self.contains_longitude(point.longitude())
    }

    /// Both longitude ranges are unwrapped onto a number line that starts at the left longitude
    /// of `self`. Only the right edge of `other` is moved, so the result may depend on the order
    /// of the windows when they wrap around the antimeridian.
    fn overlaps(&self, other: &Self) -> bool {
        if other.max_latitude < self.min_latitude || other.min_latitude > self.max_latitude {
            return false;
        }

        if self.spans_all_longitudes() || other.spans_all_longitudes() {
            return true;
        }

        let this_left = self.left_longitude;
        let mut this_right = self.right_longitude;
        let that_left = other.left_longitude;
        let mut that_right = other.right_longitude;

        if this_right < this_left {
            this_right += Degrees::FULL_TURN;
        }
        if that_right < this_left {
            that_right += Degrees::FULL_TURN;
        }

        !(this_right < that_left || this_left > that_right)
    }

    fn center(&self) -> &LatLng {
        &self.center
    }
}

impl Display for RectangularWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "center: {}; lat range: [{},{}]; lng range: [{},{}]; crosses antimeridian: {}",
            self.center,
            self.min_latitude,
            self.max_latitude,
            self.left_longitude,
            self.right_longitude,
            self.crosses_antimeridian
        )
    }
}
