//! Drawing scripts
//!
//! A scene is a TOML document with an array of `[[shape]]` tables. Each
//! table names a primitive in `kind`, its geometry and a `color` given as
//! `[v]` or `[r, g, b]`. Colors are converted to the target image's
//! variant when the scene is applied.

mod parse;

use log::{debug, info};
use std::fs;

use crate::pnm::config::RasterOptions;
use crate::pnm::errors::PnmResult;
use crate::pnm::format::Variant;
use crate::pnm::image::{RasterImage, Rgb, Sample};
use crate::raster::{Painter, Point};

/// One drawing primitive with its geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point },
    Rectangle { origin: Point, width: i32, height: i32, filled: bool },
    Circle { center: Point, radius: i32, filled: bool },
    Triangle { points: [Point; 3], filled: bool },
    Polygon { points: Vec<Point>, filled: bool },
    Koch { depth: u32, start: Point, size: i32 },
    Sierpinski { depth: u32, start: Point, size: i32 },
    /// Noise blending the item color into `to`
    Perlin { to: Rgb },
}

/// A shape and the color it is drawn in
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub shape: Shape,
    pub color: Rgb,
}

/// Ordered list of drawing operations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub items: Vec<SceneItem>,
}

impl Scene {
    /// Parses a scene from TOML text
    pub fn from_str(content: &str) -> PnmResult<Self> {
        let items = parse::parse_scene(content)?;
        debug!("Parsed scene with {} item(s)", items.len());
        Ok(Scene { items })
    }

    /// Loads a scene file
    pub fn load(path: &str) -> PnmResult<Self> {
        info!("Loading scene from {}", path);
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draws every item onto `image` in order
    ///
    /// # Arguments
    /// * `image` - Target image of any variant
    /// * `options` - Fractal depth limit and noise settings
    /// * `on_item` - Called with the item index after each item is drawn
    pub fn apply(&self, image: &mut RasterImage, options: RasterOptions, on_item: impl FnMut(usize)) {
        match image.variant() {
            Variant::Bitmap => self.apply_typed::<bool>(image, options, on_item),
            Variant::Gray => self.apply_typed::<u8>(image, options, on_item),
            Variant::Color => self.apply_typed::<Rgb>(image, options, on_item),
        }
    }

    fn apply_typed<T: Sample>(&self, image: &mut RasterImage, options: RasterOptions, mut on_item: impl FnMut(usize)) {
        let mut painter = match image.painter::<T>() {
            Some(painter) => painter.with_options(options),
            None => return,
        };
        debug!("Drawing {} item(s) on a {:?} canvas", self.items.len(), T::VARIANT);
        for (index, item) in self.items.iter().enumerate() {
            draw_item(&mut painter, item);
            on_item(index);
        }
    }
}

fn draw_item<T: Sample>(painter: &mut Painter<'_, T>, item: &SceneItem) {
    let color = T::from_rgb(item.color);
    match &item.shape {
        Shape::Line { from, to } => painter.draw_line(*from, *to, color),
        Shape::Rectangle { origin, width, height, filled: false } => {
            painter.draw_rectangle(*origin, *width, *height, color)
        }
        Shape::Rectangle { origin, width, height, filled: true } => {
            painter.draw_filled_rectangle(*origin, *width, *height, color)
        }
        Shape::Circle { center, radius, filled: false } => painter.draw_circle(*center, *radius, color),
        Shape::Circle { center, radius, filled: true } => painter.draw_filled_circle(*center, *radius, color),
        Shape::Triangle { points: [a, b, c], filled: false } => painter.draw_triangle(*a, *b, *c, color),
        Shape::Triangle { points: [a, b, c], filled: true } => painter.draw_filled_triangle(*a, *b, *c, color),
        Shape::Polygon { points, filled: false } => painter.draw_polygon(points, color),
        Shape::Polygon { points, filled: true } => painter.draw_filled_polygon(points, color),
        Shape::Koch { depth, start, size } => painter.draw_koch_snowflake(*depth, *start, *size, color),
        Shape::Sierpinski { depth, start, size } => {
            painter.draw_sierpinski_triangle(*depth, *start, *size, color)
        }
        Shape::Perlin { to } => painter.draw_perlin_noise(color, T::from_rgb(*to)),
    }
}
