use super::geo::Ring;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        properties: BTreeMap<String, String>,
        geometry: Geometry,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

impl Entity {
    pub fn named_feature(name: &str, geometry: Geometry) -> Self {
        let properties = vec![(String::from("name"), name.to_string())]
            .into_iter()
            .collect();
        Entity::Feature {
            properties,
            geometry,
        }
    }
}
