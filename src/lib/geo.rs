use super::items::{Boundary, TileIndexEntry};
use geo_types::{Coordinate, LineString, Rect};
use std::f64::consts::PI;

pub type Ring = Vec<(f64, f64)>;

fn tile_lon(x: f64, n: f64) -> f64 {
    x / n * 360.0 - 180.0
}

fn tile_lat(y: f64, n: f64) -> f64 {
    (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees()
}

/// Geographic extent of a Web Mercator tile.
///
/// Tile rows grow southwards, so the northern edge of the tile is row `y`
/// and the southern edge is row `y + 1`.
pub fn tile_bounds(x: u32, y: u32, zoom: u8) -> Rect<f64> {
    let n = 2.0_f64.powi(i32::from(zoom));
    let (x, y) = (f64::from(x), f64::from(y));
    let min = Coordinate {
        x: tile_lon(x, n),
        y: tile_lat(y + 1.0, n),
    };
    let max = Coordinate {
        x: tile_lon(x + 1.0, n),
        y: tile_lat(y, n),
    };
    Rect::new(min, max)
}

/// Closed ring around `rect`, starting at the south-west corner and running
/// counter-clockwise.
pub fn rect_ring(rect: &Rect<f64>) -> Ring {
    let (min, max) = (rect.min(), rect.max());
    vec![
        (min.x, min.y),
        (max.x, min.y),
        (max.x, max.y),
        (min.x, max.y),
        (min.x, min.y),
    ]
}

impl From<&TileIndexEntry> for Ring {
    fn from(entry: &TileIndexEntry) -> Self {
        rect_ring(&tile_bounds(entry.x, entry.y, entry.zoom))
    }
}

pub fn ring_coordinates(line_string: &LineString<f64>) -> Ring {
    line_string.0.iter().map(|c| (c.x, c.y)).collect()
}

impl Boundary {
    /// Exterior ring followed by the holes, as GeoJSON lays out a polygon.
    pub fn coordinates(&self) -> Vec<Ring> {
        let mut rings = vec![ring_coordinates(&self.exterior)];
        rings.extend(self.holes.iter().map(ring_coordinates));
        rings
    }
}
