//! Windows on the surface of the Earth.

mod rectangular;

pub use rectangular::RectangularWindow;

use crate::geo::LatLng;

/// Area of the globe that can be tested for containing a point or overlapping another window of
/// the same kind.
pub trait GeoWindow {
    /// Returns `true` if the point lies within the window. Boundaries are included.
    fn contains(&self, point: &LatLng) -> bool;

    /// Returns `true` if the two windows have at least one common point.
    fn overlaps(&self, other: &Self) -> bool;

    /// Center point of the window.
    fn center(&self) -> &LatLng;
}
