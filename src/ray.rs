use crate::vec3::{Point3, Vec3};

/// Parametric line `origin + t * dir`. The direction is kept as given, not
/// normalized: its magnitude is part of the parametrization.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Ray {
        Ray { origin, dir }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }
}

#[test]
fn test_at() {
    let r = Ray::new(Vec3::new(1., 2., 3.), Vec3::new(0., 0., -2.));

    assert_eq!(r.at(0.), Vec3::new(1., 2., 3.));
    assert_eq!(r.at(2.), Vec3::new(1., 2., -1.));
    // t may run backwards too
    assert_eq!(r.at(-1.), Vec3::new(1., 2., 5.));
}
