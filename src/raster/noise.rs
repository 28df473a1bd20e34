//! Gradient noise fill
//!
//! A lattice of random unit gradient vectors is laid over the image with
//! `noise_cell_size` pixels between lattice points. Each pixel projects
//! its offset onto the four surrounding gradients, blends the four values
//! bilinearly and uses the result to interpolate between two colors.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, SQRT_2};

use crate::pnm::image::Sample;
use crate::raster::painter::Painter;

/// Lattice of unit gradient vectors
pub struct GradientGrid {
    width: usize,
    height: usize,
    vectors: Vec<(f64, f64)>,
}

impl GradientGrid {
    /// Fills a `width` x `height` lattice with random unit vectors from `rng`
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let vectors = (0..width * height)
            .map(|_| {
                let angle = 2.0 * PI * rng.gen::<f64>();
                (angle.cos(), angle.sin())
            })
            .collect();
        GradientGrid { width, height, vectors }
    }

    /// Gradient at lattice point (x, y), clamped to the lattice edge
    fn at(&self, x: usize, y: usize) -> (f64, f64) {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        self.vectors.get(y * self.width + x).copied().unwrap_or((0.0, 0.0))
    }

    /// Noise at lattice-space position (fx, fy), mapped into [0, 1]
    pub fn sample(&self, fx: f64, fy: f64) -> f64 {
        let x0 = fx.floor().max(0.0) as usize;
        let y0 = fy.floor().max(0.0) as usize;
        let dx = fx - x0 as f64;
        let dy = fy - y0 as f64;

        let dot = |gx: usize, gy: usize, ox: f64, oy: f64| {
            let (vx, vy) = self.at(gx, gy);
            vx * ox + vy * oy
        };
        let n00 = dot(x0, y0, dx, dy);
        let n10 = dot(x0 + 1, y0, dx - 1.0, dy);
        let n01 = dot(x0, y0 + 1, dx, dy - 1.0);
        let n11 = dot(x0 + 1, y0 + 1, dx - 1.0, dy - 1.0);

        let top = n00 * (1.0 - dx) + n10 * dx;
        let bottom = n01 * (1.0 - dx) + n11 * dx;
        let value = top * (1.0 - dy) + bottom * dy;

        // |value| <= sqrt(2) since every offset is at most sqrt(2) long
        ((value / SQRT_2 + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

impl<'a, T: Sample> Painter<'a, T> {
    /// Fills the whole canvas with gradient noise blending `color1` into `color2`
    ///
    /// Uses `noise_seed` from the painter options when set, system entropy
    /// otherwise.
    pub fn draw_perlin_noise(&mut self, color1: T, color2: T) {
        let mut rng = match self.options.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.draw_perlin_noise_with(color1, color2, &mut rng);
    }

    /// Same as `draw_perlin_noise` with a caller-supplied random source
    pub fn draw_perlin_noise_with(&mut self, color1: T, color2: T, rng: &mut impl Rng) {
        let (width, height) = (self.width(), self.height());
        let cell = self.options.noise_cell_size.max(1) as f64;
        debug!("Drawing {}x{} noise with cell size {}", width, height, cell);

        let grid = GradientGrid::random(width as usize, height as usize, rng);
        for y in 0..height {
            for x in 0..width {
                let t = grid.sample(x as f64 / cell, y as f64 / cell);
                self.put(x, y, color1.lerp(color2, t));
            }
        }
    }
}
