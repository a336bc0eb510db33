use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::scene::Scene;
use crate::vec3::{Color, Vec3};

const MAX_VAL: i32 = 255;

/// Everything the render needs, with defaults reproducing the reference
/// image: a red sphere dead ahead under a white-to-blue sky.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub image_width: usize,
    pub aspect_ratio: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
    pub scene: Scene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            image_width: 400,
            aspect_ratio: 16. / 9.,
            viewport_height: 2.,
            focal_length: 1.,
            scene: Scene {
                sphere_center: vec3!(0., 0., -1.),
                sphere_radius: 0.5,
                hit_color: vec3!(1., 0., 0.),
                horizon: vec3!(1., 1., 1.),
                zenith: vec3!(0.5, 0.7, 1.0),
            },
        }
    }
}

impl RenderConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(
            self.image_width,
            self.aspect_ratio,
            self.viewport_height,
            self.focal_length,
        )
    }
}

fn to_int_rgb(c: Color) -> (i32, i32, i32) {
    // truncating, so an exact 1.0 still lands on 255
    let scale = |x: f64| (255.999 * x) as i32;
    (scale(c.x()), scale(c.y()), scale(c.z()))
}

/// Shades the whole pixel grid and writes it as plain-text PPM: `P3` header,
/// then one `r g b` triplet per pixel, rows top to bottom, left to right.
///
/// Rows are shaded in parallel but always serialized in scan order; the
/// output bytes match a sequential run exactly. Progress goes to stderr and
/// carries no data.
pub fn render(scene: &Scene, cam: &Camera, out: &mut impl Write) -> Result<()> {
    let width = cam.image_width();
    let height = cam.image_height();

    let rows_left = AtomicUsize::new(height);

    let rows = (0..height)
        .into_par_iter()
        .map(|j| {
            let row = (0..width)
                .map(|i| scene.ray_color(&cam.ray_for_pixel(i, j)))
                .collect::<Vec<_>>();

            let left = rows_left.fetch_sub(1, Ordering::SeqCst) - 1;
            eprint!("\rScanlines remaining: {} ", left);
            row
        })
        .collect::<Vec<_>>();

    write!(out, "P3\n{} {}\n{}\n", width, height, MAX_VAL)?;

    for row in rows {
        for col in row {
            let (r, g, b) = to_int_rgb(col);
            writeln!(out, "{} {} {}", r, g, b)?;
        }
    }

    eprintln!("\rDone.                                    ");
    Ok(())
}
