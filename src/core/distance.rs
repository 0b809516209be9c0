use geo::{coord, HaversineDistance, Intersects, Point, Rect};

use crate::models::GeoRadius;

/// Kilometres per degree of latitude
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance in kilometres between two lat/lon points
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = Point::new(lon1, lat1);
    let to = Point::new(lon2, lat2);

    from.haversine_distance(&to) / 1000.0
}

/// Rectangle enclosing a search radius, for cheap pre-filtering
///
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
///
/// The rectangle does not wrap, so near the antimeridian its longitude
/// range runs past ±180.
pub fn bounding_rect(radius: &GeoRadius) -> Rect<f64> {
    let lat_delta = radius.radius_km / KM_PER_DEGREE;
    let lon_delta = radius.radius_km / (KM_PER_DEGREE * radius.latitude.to_radians().cos().abs());

    Rect::new(
        coord! { x: radius.longitude - lon_delta, y: radius.latitude - lat_delta },
        coord! { x: radius.longitude + lon_delta, y: radius.latitude + lat_delta },
    )
}

/// Distance from the radius centre if the point lies inside the radius
pub fn within_radius(radius: &GeoRadius, latitude: f64, longitude: f64) -> Option<f64> {
    let rect = bounding_rect(radius);
    let crosses_antimeridian = rect.min().x < -180.0 || rect.max().x > 180.0;

    if !crosses_antimeridian && !rect.intersects(&Point::new(longitude, latitude)) {
        return None;
    }

    let km = distance_km(radius.latitude, radius.longitude, latitude, longitude);
    (km <= radius.radius_km).then_some(km)
}
