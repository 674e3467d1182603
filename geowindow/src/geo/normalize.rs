//! Canonical ranges of geographic coordinates.

use crate::degrees::Degrees;

/// Brings latitude into `[-90, 90]`.
///
/// Values beyond a pole are squashed onto that pole rather than reflected to the other side of
/// it, so `95` becomes `90` and `-100` becomes `-90`.
pub fn normalize_latitude(latitude: Degrees) -> Degrees {
    latitude.clamp(-Degrees::QUARTER_TURN, Degrees::QUARTER_TURN)
}

/// Brings longitude into `(-180, 180]`.
pub fn normalize_longitude(longitude: Degrees) -> Degrees {
    let wrapped = longitude.rem_euclid(Degrees::FULL_TURN);
    if wrapped > Degrees::HALF_TURN {
        wrapped - Degrees::FULL_TURN
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(value: f64) -> Degrees {
        Degrees::from_f64(value).unwrap()
    }

    #[test]
    fn latitude_is_squashed_at_poles() {
        assert_eq!(normalize_latitude(deg(45.5)), deg(45.5));
        assert_eq!(normalize_latitude(deg(90.0)), deg(90.0));
        assert_eq!(normalize_latitude(deg(95.0)), deg(90.0));
        assert_eq!(normalize_latitude(deg(-90.0)), deg(-90.0));
        assert_eq!(normalize_latitude(deg(-270.0)), deg(-90.0));
    }

    #[test]
    fn longitude_wraps() {
        assert_eq!(normalize_longitude(deg(0.0)), deg(0.0));
        assert_eq!(normalize_longitude(deg(179.999)), deg(179.999));
        assert_eq!(normalize_longitude(deg(180.0)), deg(180.0));
        assert_eq!(normalize_longitude(deg(181.0)), deg(-179.0));
        assert_eq!(normalize_longitude(deg(-181.0)), deg(179.0));
        assert_eq!(normalize_longitude(deg(360.0)), deg(0.0));
        assert_eq!(normalize_longitude(deg(540.0)), deg(180.0));
        assert_eq!(normalize_longitude(deg(-725.5)), deg(-5.5));
    }

    #[test]
    fn extreme_values() {
        assert_eq!(
            normalize_longitude(Degrees::from_units(i64::MAX)),
            Degrees::from_units(-43_145_224_193)
        );
        assert_eq!(
            normalize_longitude(Degrees::from_units(i64::MIN)),
            Degrees::from_units(43_145_224_192)
        );
        assert_eq!(
            normalize_latitude(Degrees::from_units(i64::MIN)),
            -Degrees::QUARTER_TURN
        );

        let huge = Degrees::from_f64(9.2233720366e9).unwrap();
        let wrapped = normalize_longitude(huge);
        assert!(wrapped > -Degrees::HALF_TURN && wrapped <= Degrees::HALF_TURN);
    }

    #[test]
    fn minus_180_is_180() {
        assert_eq!(normalize_longitude(deg(-180.0)), deg(180.0));
        assert_eq!(normalize_longitude(deg(-540.0)), deg(180.0));
    }
}
