//! Great-circle distance and in-memory pagination for proximity search.

/// Earth radius in statute miles. Distances are reported in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance in miles between two (latitude, longitude) points
/// given in degrees.
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance-rank candidates around a query point.
///
/// Computes the Haversine distance to every candidate, keeps those inside
/// the radius (boundary inclusive: a candidate at exactly `radius_miles`
/// stays), and returns them closest first. The sort is stable, so ties keep
/// the input order.
pub fn distances_within<T>(
    items: &[T],
    lat: f64,
    lng: f64,
    radius_miles: f64,
    coords: impl Fn(&T) -> (f64, f64),
) -> Vec<(f64, &T)> {
    let mut hits: Vec<(f64, &T)> = items
        .iter()
        .map(|item| {
            let (item_lat, item_lng) = coords(item);
            (haversine_miles(lat, lng, item_lat, item_lng), item)
        })
        .filter(|(distance, _)| *distance <= radius_miles)
        .collect();
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits
}

/// Slice one page out of an already-filtered, already-sorted sequence.
///
/// Returns the page content and the total element count. A page index past
/// the end yields an empty page whose reported total is still the full
/// count, so callers can compute page counts even past the last page.
pub fn paginate<T>(items: Vec<T>, page: u32, size: u32) -> (Vec<T>, i64) {
    let total = items.len();
    let start = (page as usize).saturating_mul(size as usize);

    if start >= total {
        return (Vec::new(), total as i64);
    }

    let content = items
        .into_iter()
        .skip(start)
        .take(size as usize)
        .collect();
    (content, total as i64)
}
