use super::items::{Boundary, TileIndexEntry, TimezoneRecord};
use geo_types::LineString;
use prost::Message;
use std::convert::TryFrom;
use std::error::Error;
use std::io::Read;

/// Deepest zoom level a tile index entry may reference.
pub const MAX_TILE_ZOOM: u8 = 30;

pub mod pb {
    //! Wire messages of the timezone catalog.

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Point {
        #[prost(float, tag = "1")]
        pub lng: f32,
        #[prost(float, tag = "2")]
        pub lat: f32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Polygon {
        #[prost(message, repeated, tag = "1")]
        pub points: Vec<Point>,
        #[prost(message, repeated, tag = "2")]
        pub holes: Vec<Polygon>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Timezone {
        #[prost(message, repeated, tag = "1")]
        pub polygons: Vec<Polygon>,
        #[prost(string, tag = "2")]
        pub name: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Timezones {
        #[prost(message, repeated, tag = "1")]
        pub timezones: Vec<Timezone>,
        #[prost(bool, tag = "2")]
        pub reduced: bool,
        #[prost(string, tag = "3")]
        pub version: String,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PreindexTimezone {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(int32, tag = "2")]
        pub x: i32,
        #[prost(int32, tag = "3")]
        pub y: i32,
        #[prost(int32, tag = "4")]
        pub z: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PreindexTimezones {
        #[prost(int32, tag = "1")]
        pub idx_zoom: i32,
        #[prost(int32, tag = "2")]
        pub agg_zoom: i32,
        #[prost(message, repeated, tag = "3")]
        pub keys: Vec<PreindexTimezone>,
        #[prost(string, tag = "4")]
        pub version: String,
    }
}

/// Boundary polygons of every timezone in a catalog.
#[derive(Debug)]
pub struct TimezoneCatalog {
    pub version: String,
    pub reduced: bool,
    pub records: Vec<TimezoneRecord>,
}

/// Tiles known to intersect each timezone.
#[derive(Debug)]
pub struct PreindexCatalog {
    pub version: String,
    pub idx_zoom: i32,
    pub agg_zoom: i32,
    pub entries: Vec<TileIndexEntry>,
}

fn read_all(mut reader: impl Read) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn ring(points: &[pb::Point]) -> LineString<f64> {
    points
        .iter()
        .map(|p| (f64::from(p.lng), f64::from(p.lat)))
        .collect::<Vec<_>>()
        .into()
}

impl From<&pb::Polygon> for Boundary {
    fn from(polygon: &pb::Polygon) -> Self {
        let exterior = ring(&polygon.points);
        let holes = polygon.holes.iter().map(|h| ring(&h.points)).collect();
        Boundary { exterior, holes }
    }
}

impl From<pb::Timezone> for TimezoneRecord {
    fn from(tz: pb::Timezone) -> Self {
        let polygons = tz.polygons.iter().map(Boundary::from).collect();
        TimezoneRecord {
            name: tz.name,
            polygons,
        }
    }
}

impl TryFrom<pb::PreindexTimezone> for TileIndexEntry {
    type Error = Box<dyn Error>;

    fn try_from(key: pb::PreindexTimezone) -> Result<Self, Self::Error> {
        let z = u8::try_from(key.z)
            .ok()
            .filter(|z| *z <= MAX_TILE_ZOOM)
            .ok_or_else(|| format!("{}: invalid tile zoom {}", key.name, key.z))?;
        let x = u32::try_from(key.x)
            .map_err(|_| format!("{}: invalid tile x {}", key.name, key.x))?;
        let y = u32::try_from(key.y)
            .map_err(|_| format!("{}: invalid tile y {}", key.name, key.y))?;
        Ok(TileIndexEntry::new(&key.name, x, y, z))
    }
}

/// Decode a `Timezones` message from `reader`.
pub fn load_timezones(reader: impl Read) -> Result<TimezoneCatalog, Box<dyn Error>> {
    let buf = read_all(reader)?;
    let message = pb::Timezones::decode(buf.as_slice())?;
    let records = message
        .timezones
        .into_iter()
        .map(TimezoneRecord::from)
        .collect();
    Ok(TimezoneCatalog {
        version: message.version,
        reduced: message.reduced,
        records,
    })
}

/// Decode a `PreindexTimezones` message from `reader`.
pub fn load_preindex(reader: impl Read) -> Result<PreindexCatalog, Box<dyn Error>> {
    let buf = read_all(reader)?;
    let message = pb::PreindexTimezones::decode(buf.as_slice())?;
    let entries = message
        .keys
        .into_iter()
        .map(TileIndexEntry::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PreindexCatalog {
        version: message.version,
        idx_zoom: message.idx_zoom,
        agg_zoom: message.agg_zoom,
        entries,
    })
}
