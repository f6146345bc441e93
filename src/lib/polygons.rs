use super::geojson::{Entity, Geometry};
use super::items::TimezoneRecord;
use super::output::{check_collisions, file_name, put_entity, safe_name, Sink};
use super::tiles::Tiler;
use log::debug;
use std::error::Error;
use std::path::PathBuf;

impl TimezoneRecord {
    /// Always a `MultiPolygon`, even for a single polygon.
    pub fn geometry(&self) -> Geometry {
        let coordinates = self.polygons.iter().map(|p| p.coordinates()).collect();
        Geometry::MultiPolygon { coordinates }
    }

    pub fn to_feature(&self) -> Entity {
        Entity::named_feature(&self.name, self.geometry())
    }
}

/// Write one feature file per timezone record, in catalog order.
pub fn export_polygons(
    records: &[TimezoneRecord],
    sink: &mut dyn Sink,
    tiler: Option<&dyn Tiler>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    check_collisions(records.iter().map(|r| r.name.as_str()))?;

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = put_entity(sink, &file_name(&record.name), &record.to_feature())?;
        debug!("{} -> {}", record.name, path.display());
        if let Some(tiler) = tiler {
            tiler.tile(&path, &safe_name(&record.name))?;
        }
        written.push(path);
    }
    Ok(written)
}
