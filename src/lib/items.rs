use geo_types::LineString;
use smartstring::alias::String as ShortString;

/// A polygon as stored in the catalog: one exterior ring and its holes.
///
/// Rings are kept exactly as decoded, they are neither closed nor re-wound.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub exterior: LineString<f64>,
    pub holes: Vec<LineString<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneRecord {
    pub name: String,
    pub polygons: Vec<Boundary>,
}

/// A slippy-map tile that intersects the named timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct TileIndexEntry {
    pub name: ShortString,
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl TileIndexEntry {
    pub fn new(name: &str, x: u32, y: u32, zoom: u8) -> Self {
        TileIndexEntry {
            name: name.into(),
            x,
            y,
            zoom,
        }
    }
}
