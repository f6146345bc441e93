use log::debug;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Renders a written GeoJSON file into vector tiles.
pub trait Tiler {
    fn tile(&self, geojson: &Path, safe_name: &str) -> Result<(), Box<dyn Error>>;
}

/// Runs `tippecanoe` once per file, into `<root>/<safe_name>/`.
pub struct Tippecanoe {
    pub program: String,
    pub root: PathBuf,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Tippecanoe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Tippecanoe {
            program: "tippecanoe".into(),
            root: root.into(),
            min_zoom: 0,
            max_zoom: 5,
        }
    }

    fn args(&self, out_dir: &Path, geojson: &Path) -> Vec<String> {
        vec![
            "--output-to-directory".into(),
            out_dir.display().to_string(),
            format!("--minimum-zoom={}", self.min_zoom),
            format!("--maximum-zoom={}", self.max_zoom),
            geojson.display().to_string(),
        ]
    }
}

impl Tiler for Tippecanoe {
    fn tile(&self, geojson: &Path, safe_name: &str) -> Result<(), Box<dyn Error>> {
        let out_dir = self.root.join(safe_name);
        fs::create_dir_all(&out_dir)
            .map_err(|e| format!("could not create {}: {}", out_dir.display(), e))?;

        let args = self.args(&out_dir, geojson);
        debug!("{} {}", self.program, args.join(" "));
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| format!("could not launch {}: {}", self.program, e))?;

        if !status.success() {
            let message = format!("{} failed on {}: {}", self.program, geojson.display(), status);
            return Err(message.into());
        }
        Ok(())
    }
}
