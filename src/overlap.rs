//! Overlap tests between 3D primitives.

use crate::vector::Vector3;

/// True when `point` lies strictly inside the cuboid; the boundary is not a hit.
pub fn point_in_cuboid(point: Vector3, center: Vector3, size: Vector3) -> bool {
    let p = point - center;
    let d = size.scale(0.5);

    p.x > -d.x && p.x < d.x && p.y > -d.y && p.y < d.y && p.z > -d.z && p.z < d.z
}

/// True when the segment `start`..`end` comes within `radius` of `center`.
pub fn segment_vs_ball(start: Vector3, end: Vector3, center: Vector3, radius: f64) -> bool {
    let v = end - start;
    let c = center - start;
    let projection = v.dot(c);

    let squared_distance = if projection <= 0.0 {
        // center lies before the start
        c.squared_length()
    } else if projection >= v.squared_length() {
        // center lies past the end
        v.squared_distance(c)
    } else {
        // perpendicular distance: |c|² - (c·v)² / |v|²
        c.squared_length() - projection * projection / v.squared_length()
    };

    squared_distance <= radius * radius
}
