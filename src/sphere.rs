use crate::ray::Ray;
use crate::vec3::Point3;

/// True iff the line carrying `ray` touches the sphere `(center, radius)`.
///
/// Writes the sphere equation along the ray as a quadratic in t and checks
/// the discriminant only. Tangents count as hits, and so do intersections at
/// negative t: this is a line test, not a visibility test, and it computes no
/// hit point. Extending it into a nearest-root lookup belongs in a separate
/// function.
pub fn hit_sphere(center: Point3, radius: f64, ray: &Ray) -> bool {
    // https://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection
    let oc = center - ray.origin;
    let a = ray.dir.dot(ray.dir);
    let b = -2. * ray.dir.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4. * a * c;
    discriminant >= 0.
}
