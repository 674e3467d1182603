use crate::error::GeoWindowError;
use crate::geo::GeoPoint;
use geojson::{Position, Value};

/// GeoJSON position used as a geographic point. Positions are `[longitude, latitude, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonPoint(Position);

impl TryFrom<Position> for GeoJsonPoint {
    type Error = GeoWindowError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(GeoWindowError::InvalidArgument("position"))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl TryFrom<&geojson::Geometry> for GeoJsonPoint {
    type Error = GeoWindowError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Point(position) => Self::try_from(position.clone()),
            _ => Err(GeoWindowError::InvalidArgument("geometry")),
        }
    }
}

impl GeoPoint for GeoJsonPoint {
    type Num = f64;

    fn lat(&self) -> Self::Num {
        self.0[1]
    }

    fn lon(&self) -> Self::Num {
        self.0[0]
    }
}
