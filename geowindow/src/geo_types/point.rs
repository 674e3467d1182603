use crate::geo::GeoPoint;
use geo_types::CoordFloat;

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat> GeoPoint for geo_types::Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

#[cfg(test)]
mod tests {
    use crate::geo::{GeoPoint, LatLng};
    use geo_types::{coord, point};

    #[test]
    fn x_is_longitude() {
        let p = point!(x: 30.5, y: -10.0);
        assert_eq!(GeoPoint::lat(&p), -10.0);
        assert_eq!(GeoPoint::lon(&p), 30.5);

        let c = coord! { x: 200.0, y: 10.0 };
        assert_eq!(LatLng::from_point(&c), LatLng::new(10.0, -160.0));
    }
}
