use crate::domain::{GeofenceArea, LatLng, MIN_VERTICES};

/// Returns the first area in `areas` that contains `point`.
///
/// Areas may overlap. In that case the one listed first wins, which makes the result depend on
/// the order the store returns areas in.
pub fn locate<'a>(point: LatLng, areas: &'a [GeofenceArea]) -> Option<&'a GeofenceArea> {
    areas.iter().find(|area| contains(area, point))
}

pub fn contains(area: &GeofenceArea, point: LatLng) -> bool {
    point_in_polygon(point, area.coordinates())
}

/// Even-odd ray casting with a horizontal ray towards increasing longitude.
///
/// Membership of points exactly on an edge is unspecified.
pub fn point_in_polygon(point: LatLng, vertices: &[LatLng]) -> bool {
    if vertices.len() < MIN_VERTICES {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].lng, vertices[i].lat);
        let (xj, yj) = (vertices[j].lng, vertices[j].lat);
        j = i;

        // Only edges straddling the ray count, which also rules out zero vertical span
        if (yi > y) == (yj > y) || yi == yj {
            continue;
        }

        let intersect_x = (xj - xi) * (y - yi) / (yj - yi) + xi;
        if x < intersect_x {
            inside = !inside;
        }
    }

    inside
}
