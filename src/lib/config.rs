use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Exact boundary polygons from a `Timezones` catalog.
    Polygons,
    /// Tile rectangles from a `PreindexTimezones` catalog.
    Preindex,
}

impl Mode {
    /// `0` selects polygons, `1` the tile index, anything else nothing.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Mode::Polygons),
            1 => Some(Mode::Preindex),
            _ => None,
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Root directory for vector tiles, tiling is skipped when absent.
    pub tile_dir: Option<PathBuf>,
    pub mode: Option<Mode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_indices() {
        assert_eq!(Mode::from_index(0), Some(Mode::Polygons));
        assert_eq!(Mode::from_index(1), Some(Mode::Preindex));
        assert_eq!(Mode::from_index(2), None);
        assert_eq!(Mode::from_index(255), None);
    }
}
