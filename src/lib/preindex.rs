use super::geo::Ring;
use super::geojson::{Entity, Geometry};
use super::items::TileIndexEntry;
use super::output::{check_collisions, file_name, put_entity, safe_name, Sink};
use super::tiles::Tiler;
use itertools::Itertools;
use log::debug;
use std::error::Error;
use std::path::PathBuf;

pub const ALL_FILE_NAME: &str = "_all.geojson";

/// Tiles of a single timezone, merged into one feature.
#[derive(Debug)]
pub struct TileGroup<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a TileIndexEntry>,
}

impl<'a> TileGroup<'a> {
    pub fn to_feature(&self) -> Entity {
        let coordinates = self
            .entries
            .iter()
            .map(|&entry| vec![Ring::from(entry)])
            .collect();
        Entity::named_feature(self.name, Geometry::MultiPolygon { coordinates })
    }
}

/// Group entries by timezone name. Groups are sorted by name, entries keep
/// their catalog order.
pub fn group_tiles(entries: &[TileIndexEntry]) -> Vec<TileGroup> {
    let groups = entries
        .iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .group_by(|&entry| entry.name.as_str());
    let tile_groups = groups
        .into_iter()
        .map(|(name, entries)| TileGroup {
            name,
            entries: entries.collect(),
        })
        .collect();
    tile_groups
}

/// Write one feature file per timezone plus a collection of all of them.
pub fn export_preindex(
    entries: &[TileIndexEntry],
    sink: &mut dyn Sink,
    tiler: Option<&dyn Tiler>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let groups = group_tiles(entries);
    check_collisions(groups.iter().map(|group| group.name))?;
    if let Some(group) = groups.iter().find(|g| file_name(g.name) == ALL_FILE_NAME) {
        return Err(format!("timezone {:?} would overwrite {}", group.name, ALL_FILE_NAME).into());
    }

    let mut written = Vec::with_capacity(groups.len() + 1);
    let mut features = Vec::with_capacity(groups.len());
    for group in groups.iter() {
        let feature = group.to_feature();
        let path = put_entity(sink, &file_name(group.name), &feature)?;
        debug!("{} ({} tiles) -> {}", group.name, group.entries.len(), path.display());
        if let Some(tiler) = tiler {
            tiler.tile(&path, &safe_name(group.name))?;
        }
        written.push(path);
        features.push(feature);
    }

    let collection = Entity::FeatureCollection { features };
    written.push(put_entity(sink, ALL_FILE_NAME, &collection)?);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use crate::test_helpers::{FailingTiler, RecordingTiler};

    fn entries() -> Vec<TileIndexEntry> {
        vec![
            TileIndexEntry::new("UTC", 0, 0, 0),
            TileIndexEntry::new("X", 0, 0, 0),
            TileIndexEntry::new("UTC", 1, 0, 1),
        ]
    }

    #[test]
    fn groups_by_name() {
        let entries = entries();
        let groups = group_tiles(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "UTC");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[1].zoom, 1);
        assert_eq!(groups[1].name, "X");
        assert_eq!(groups[1].entries.len(), 1);
    }

    #[test]
    fn no_entries_no_groups() {
        assert!(group_tiles(&[]).is_empty());
    }

    #[test]
    fn one_polygon_per_tile() {
        let entries = entries();
        let groups = group_tiles(&entries);
        match groups[0].to_feature() {
            Entity::Feature {
                properties,
                geometry: Geometry::MultiPolygon { coordinates },
            } => {
                assert_eq!(properties["name"], "UTC");
                assert_eq!(coordinates.len(), 2);
                assert!(coordinates.iter().all(|p| p.len() == 1 && p[0].len() == 5));
            }
            _ => panic!("expected a multi polygon feature"),
        }
    }

    #[test]
    fn writes_groups_and_collection() {
        let mut sink = MemorySink::default();
        let written = export_preindex(&entries(), &mut sink, None).unwrap();
        assert_eq!(written.len(), 3);
        let names: Vec<&str> = sink.files.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["UTC.geojson", "X.geojson", "_all.geojson"]);

        let all: Entity = serde_json::from_slice(&sink.files["_all.geojson"]).unwrap();
        match all {
            Entity::FeatureCollection { features } => assert_eq!(features.len(), 2),
            _ => panic!("expected a feature collection"),
        }
    }

    #[test]
    fn empty_index_writes_empty_collection() {
        let mut sink = MemorySink::default();
        export_preindex(&[], &mut sink, None).unwrap();
        assert_eq!(sink.files.len(), 1);
        let all = String::from_utf8(sink.files["_all.geojson"].clone()).unwrap();
        assert_eq!(all.trim(), r#"{"type":"FeatureCollection","features":[]}"#);
    }

    #[test]
    fn colliding_names_write_nothing() {
        let entries = vec![
            TileIndexEntry::new("A/B", 0, 0, 0),
            TileIndexEntry::new("A-B", 0, 0, 0),
        ];
        let mut sink = MemorySink::default();
        assert!(export_preindex(&entries, &mut sink, None).is_err());
        assert!(sink.files.is_empty());
    }

    #[test]
    fn reserved_collection_name_writes_nothing() {
        let entries = vec![
            TileIndexEntry::new("_all", 0, 0, 0),
            TileIndexEntry::new("UTC", 0, 0, 0),
        ];
        let mut sink = MemorySink::default();
        let tiler = RecordingTiler::default();
        let err = export_preindex(&entries, &mut sink, Some(&tiler)).unwrap_err();
        assert!(err.to_string().contains("_all.geojson"));
        assert!(sink.files.is_empty());
        assert!(tiler.calls.into_inner().is_empty());
    }

    #[test]
    fn tiles_each_timezone_but_not_the_collection() {
        let mut sink = MemorySink::default();
        let tiler = RecordingTiler::default();
        export_preindex(&entries(), &mut sink, Some(&tiler)).unwrap();
        assert_eq!(
            tiler.calls.into_inner(),
            vec![
                (PathBuf::from("UTC.geojson"), "UTC".to_string()),
                (PathBuf::from("X.geojson"), "X".to_string()),
            ]
        );
        assert!(sink.files.contains_key(ALL_FILE_NAME));
    }

    #[test]
    fn tiler_failure_aborts_before_collection() {
        let mut sink = MemorySink::default();
        assert!(export_preindex(&entries(), &mut sink, Some(&FailingTiler)).is_err());
        let names: Vec<&str> = sink.files.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["UTC.geojson"]);
    }
}
