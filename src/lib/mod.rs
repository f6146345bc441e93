use config::{Config, Mode};
use log::{info, warn};
use output::DirSink;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tiles::{Tiler, Tippecanoe};

pub mod catalog;
pub mod config;
pub mod geo;
pub mod geojson;
pub mod items;
pub mod output;
pub mod polygons;
pub mod preindex;
pub mod tiles;

#[cfg(test)]
mod test_helpers;

pub use catalog::{load_preindex, load_timezones};
pub use polygons::export_polygons;
pub use preindex::export_preindex;

/// Load the catalog named in `config` and export it in the selected mode.
///
/// Returns the paths of all written GeoJSON files. An unknown mode writes
/// nothing.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mode = match config.mode {
        Some(mode) => mode,
        None => {
            warn!("no export mode selected, nothing to do");
            return Ok(vec![]);
        }
    };

    let file = File::open(&config.input)
        .map_err(|e| format!("could not open {}: {}", config.input.display(), e))?;
    let reader = BufReader::new(file);

    let tippecanoe = config.tile_dir.as_ref().map(Tippecanoe::new);
    let tiler = tippecanoe.as_ref().map(|t| t as &dyn Tiler);

    // The output directory is only created once the catalog decoded.
    let (written, sink) = match mode {
        Mode::Polygons => {
            let catalog = load_timezones(reader)?;
            info!(
                "loaded {} timezones (version {:?}, reduced: {})",
                catalog.records.len(),
                catalog.version,
                catalog.reduced
            );
            let mut sink = DirSink::create(&config.output_dir)?;
            (export_polygons(&catalog.records, &mut sink, tiler)?, sink)
        }
        Mode::Preindex => {
            let catalog = load_preindex(reader)?;
            info!(
                "loaded {} tile index entries (version {:?}, idx zoom {}, agg zoom {})",
                catalog.entries.len(),
                catalog.version,
                catalog.idx_zoom,
                catalog.agg_zoom
            );
            let mut sink = DirSink::create(&config.output_dir)?;
            (export_preindex(&catalog.entries, &mut sink, tiler)?, sink)
        }
    };

    info!("wrote {} files to {}", written.len(), sink.dir().display());
    Ok(written)
}
