use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Pinhole camera at the origin, image plane one focal length down -z.
///
/// All of the viewport geometry is fixed up front; after construction the
/// camera is read-only and only hands out per-pixel rays.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    image_width: usize,
    image_height: usize,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    pub fn new(
        image_width: usize,
        aspect_ratio: f64,
        viewport_height: f64,
        focal_length: f64,
    ) -> Self {
        // floor, then clamp so a skinny aspect ratio can't produce zero rows
        let image_height = ((image_width as f64 / aspect_ratio) as usize).max(1);

        // the flooring above means the grid's real ratio can differ from the
        // nominal one; the viewport has to follow the grid to keep pixels square
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);
        let center = Point3::empty();

        // viewport edges: u runs right, v runs down the image
        let viewport_u = vec3!(viewport_width, 0., 0.);
        let viewport_v = vec3!(0., -viewport_height, 0.);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        // pixel (0,0) sits half a pixel in from the upper left corner
        let viewport_upper_left =
            center - vec3!(0., 0., focal_length) - viewport_u / 2. - viewport_v / 2.;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Camera {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Ray from the camera center through the center of pixel (i, j),
    /// i counting columns from the left, j counting rows from the top.
    pub fn ray_for_pixel(&self, i: usize, j: usize) -> Ray {
        let pixel_center =
            self.pixel00_loc + self.pixel_delta_u * i as f64 + self.pixel_delta_v * j as f64;

        Ray::new(self.center, pixel_center - self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_aspect_ratio() {
        let cam = Camera::new(400, 16. / 9., 2., 1.);
        assert_eq!(cam.image_width(), 400);
        assert_eq!(cam.image_height(), 225);
    }

    #[test]
    fn height_clamps_to_one() {
        let cam = Camera::new(4, 1000., 2., 1.);
        assert_eq!(cam.image_height(), 1);
    }

    #[test]
    fn viewport_uses_actual_grid_ratio() {
        // 300 / (16/9) floors to 168, so 300/168 != 16/9; square pixels
        // require delta_u and -delta_v to have equal magnitude
        let cam = Camera::new(300, 16. / 9., 2., 1.);
        assert_eq!(cam.image_height(), 168);

        let du = cam.pixel_delta_u.mag();
        let dv = cam.pixel_delta_v.mag();
        assert!((du - dv).abs() < 1e-12);
        assert!((du - 2. / 168.).abs() < 1e-12);
    }

    #[test]
    fn pixel00_is_inset_half_a_pixel() {
        let cam = Camera::new(400, 16. / 9., 2., 1.);
        let w = 2. * (400. / 225.);

        let expect = vec3!(-w / 2. + w / 800., 1. - 1. / 225., -1.);
        assert!((cam.pixel00_loc - expect).mag() < 1e-12);
    }

    #[test]
    fn rays_start_at_center_and_point_at_the_plane() {
        let cam = Camera::new(400, 16. / 9., 2., 1.);

        let r = cam.ray_for_pixel(0, 0);
        assert_eq!(r.origin, Point3::empty());
        // every image-plane ray heads down -z one focal length out
        assert!((r.dir.z() - -1.).abs() < 1e-12);

        // stepping one column moves exactly one pixel delta
        let r2 = cam.ray_for_pixel(1, 0);
        assert!((r2.dir - r.dir - cam.pixel_delta_u).mag() < 1e-12);
    }
}
