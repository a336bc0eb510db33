use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

#[macro_use]
mod vec3;
mod camera;
mod ray;
mod render;
mod scene;
mod sphere;

use crate::render::{render, RenderConfig};

fn main() -> Result<()> {
    let config = RenderConfig::default();
    let cam = config.camera();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    render(&config.scene, &cam, &mut out).context("writing image")?;
    out.flush().context("flushing image")?;

    Ok(())
}
