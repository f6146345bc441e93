use super::tiles::Tiler;
use std::cell::RefCell;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Remembers every file it was asked to tile.
#[derive(Default)]
pub struct RecordingTiler {
    pub calls: RefCell<Vec<(PathBuf, String)>>,
}

impl Tiler for RecordingTiler {
    fn tile(&self, geojson: &Path, safe_name: &str) -> Result<(), Box<dyn Error>> {
        self.calls
            .borrow_mut()
            .push((geojson.to_path_buf(), safe_name.to_string()));
        Ok(())
    }
}

pub struct FailingTiler;

impl Tiler for FailingTiler {
    fn tile(&self, _geojson: &Path, _safe_name: &str) -> Result<(), Box<dyn Error>> {
        Err("tiler exited with 1".into())
    }
}
