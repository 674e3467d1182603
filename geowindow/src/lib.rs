//! Latitude/longitude windows on the surface of the Earth.
//!
//! A [`RectangularWindow`] is built from a center point and angular spans (or a physical width and
//! height) and answers whether a point lies inside of it and whether it overlaps another window.
//! Windows are allowed to cross the antimeridian and are squashed when they reach a pole.
//!
//! All boundaries are stored as exact [`Degrees`], so a point that lies on an edge of a window is
//! always reported as contained.
//!
//! ```
//! use geowindow::{latlng, GeoWindow, RectangularWindow};
//!
//! let window = RectangularWindow::new(&latlng!(0.0, 179.0), 4.0, 4.0).unwrap();
//! assert!(window.crosses_antimeridian());
//! assert!(window.contains(&latlng!(1.0, -179.5)));
//! assert!(!window.contains(&latlng!(1.0, 175.0)));
//! ```

extern crate self as geowindow;

pub mod degrees;
pub mod error;
pub mod geo;
pub mod window;

#[cfg(feature = "geo-types")]
pub mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use degrees::Degrees;
pub use error::GeoWindowError;
pub use geo::{GeoPoint, LatLng, LengthUnit};
pub use window::{GeoWindow, RectangularWindow};
