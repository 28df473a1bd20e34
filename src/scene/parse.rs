//! TOML scene parsing

use log::warn;

use crate::pnm::errors::{PnmError, PnmResult};
use crate::pnm::image::Rgb;
use crate::raster::Point;
use super::{SceneItem, Shape};

fn config_error(index: usize, msg: impl AsRef<str>) -> PnmError {
    PnmError::ConfigError(format!("shape #{}: {}", index, msg.as_ref()))
}

/// Parses every `[[shape]]` table of a scene document
pub(super) fn parse_scene(content: &str) -> PnmResult<Vec<SceneItem>> {
    let document: toml::Table = match content.parse() {
        Ok(value) => value,
        Err(e) => return Err(PnmError::ConfigError(format!("Failed to parse TOML: {}", e))),
    };

    let shapes = match document.get("shape") {
        None => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| PnmError::ConfigError("shape must be an array of tables".to_string()))?,
    };

    shapes
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let table = value
                .as_table()
                .ok_or_else(|| config_error(index, "expected a table"))?;
            parse_item(index, table)
        })
        .collect()
}

fn parse_item(index: usize, table: &toml::Table) -> PnmResult<SceneItem> {
    let kind = table
        .get("kind")
        .and_then(|v| v.as_str())
        .ok_or_else(|| config_error(index, "missing string field 'kind'"))?;
    let field = Fields { index, table };
    let color = field.color("color")?;

    let shape = match kind {
        "line" => Shape::Line { from: field.point("from")?, to: field.point("to")? },
        "rectangle" | "filled_rectangle" => Shape::Rectangle {
            origin: field.point("origin")?,
            width: field.int("width")?,
            height: field.int("height")?,
            filled: kind.starts_with("filled"),
        },
        "circle" | "filled_circle" => Shape::Circle {
            center: field.point("center")?,
            radius: field.int("radius")?,
            filled: kind.starts_with("filled"),
        },
        "triangle" | "filled_triangle" => {
            let points = field.points("points")?;
            match points.as_slice() {
                [a, b, c] => Shape::Triangle { points: [*a, *b, *c], filled: kind.starts_with("filled") },
                _ => return Err(config_error(index, "a triangle needs exactly 3 points")),
            }
        }
        "polygon" | "filled_polygon" => Shape::Polygon {
            points: field.points("points")?,
            filled: kind.starts_with("filled"),
        },
        "koch" => Shape::Koch {
            depth: field.depth("depth")?,
            start: field.point("start")?,
            size: field.int("size")?,
        },
        "sierpinski" => Shape::Sierpinski {
            depth: field.depth("depth")?,
            start: field.point("start")?,
            size: field.int("size")?,
        },
        "perlin" => Shape::Perlin { to: field.color("to")? },
        other => return Err(config_error(index, format!("unknown kind '{}'", other))),
    };

    for key in table.keys() {
        if !field.known(kind, key) {
            warn!("Ignoring unknown key '{}' in shape #{}", key, index);
        }
    }

    Ok(SceneItem { shape, color })
}

struct Fields<'a> {
    index: usize,
    table: &'a toml::Table,
}

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> PnmResult<&'a toml::Value> {
        self.table
            .get(key)
            .ok_or_else(|| config_error(self.index, format!("missing field '{}'", key)))
    }

    fn int(&self, key: &str) -> PnmResult<i32> {
        let value = self.get(key)?;
        as_i32(value).ok_or_else(|| config_error(self.index, format!("'{}' must be a 32-bit integer", key)))
    }

    fn depth(&self, key: &str) -> PnmResult<u32> {
        let value = self.int(key)?;
        u32::try_from(value).map_err(|_| config_error(self.index, format!("'{}' must not be negative", key)))
    }

    fn point(&self, key: &str) -> PnmResult<Point> {
        let value = self.get(key)?;
        to_point(value).ok_or_else(|| config_error(self.index, format!("'{}' must be an [x, y] pair", key)))
    }

    fn points(&self, key: &str) -> PnmResult<Vec<Point>> {
        let array = self
            .get(key)?
            .as_array()
            .ok_or_else(|| config_error(self.index, format!("'{}' must be an array of points", key)))?;
        array
            .iter()
            .map(|value| {
                to_point(value)
                    .ok_or_else(|| config_error(self.index, format!("'{}' holds a malformed point", key)))
            })
            .collect()
    }

    /// Reads `[v]` as gray or `[r, g, b]` as color
    fn color(&self, key: &str) -> PnmResult<Rgb> {
        let malformed = || config_error(self.index, format!("'{}' must be [v] or [r, g, b] with values 0..=255", key));
        let array = self.get(key)?.as_array().ok_or_else(malformed)?;
        let channels = array
            .iter()
            .map(|v| v.as_integer().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(malformed)?;
        match channels.as_slice() {
            [v] => Ok(Rgb::new(*v, *v, *v)),
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(malformed()),
        }
    }

    fn known(&self, kind: &str, key: &str) -> bool {
        let geometry: &[&str] = match kind {
            "line" => &["from", "to"],
            "rectangle" | "filled_rectangle" => &["origin", "width", "height"],
            "circle" | "filled_circle" => &["center", "radius"],
            "triangle" | "filled_triangle" | "polygon" | "filled_polygon" => &["points"],
            "koch" | "sierpinski" => &["depth", "start", "size"],
            "perlin" => &["to"],
            _ => &[],
        };
        key == "kind" || key == "color" || geometry.contains(&key)
    }
}

fn as_i32(value: &toml::Value) -> Option<i32> {
    value.as_integer().and_then(|n| i32::try_from(n).ok())
}

fn to_point(value: &toml::Value) -> Option<Point> {
    match value.as_array()?.as_slice() {
        [x, y] => Some(Point::new(as_i32(x)?, as_i32(y)?)),
        _ => None,
    }
}
