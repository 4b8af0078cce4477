//! Layer brightness documents.
//!
//! Each layer stands in for one network layer's activation image. The
//! document lists layers in a fixed order:
//!
//! ```json
//! { "layers": [ { "conv1": [[...], ...] }, { "layer1.0.conv1": [[...]] }, ... ] }
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::brightness::BrightnessMatrix;
use crate::rng::FixtureRng;

/// Layer names in output order.
pub const LAYER_NAMES: [&str; 21] = [
    "conv1",
    "layer1.0.conv1",
    "layer1.0.conv2",
    "layer1.1.conv1",
    "layer1.1.conv2",
    "layer2.0.conv1",
    "layer2.0.conv2",
    "layer2.0.downsample.0",
    "layer2.1.conv1",
    "layer2.1.conv2",
    "layer3.0.conv1",
    "layer3.0.conv2",
    "layer3.0.downsample.0",
    "layer3.1.conv1",
    "layer3.1.conv2",
    "layer4.0.conv1",
    "layer4.0.conv2",
    "layer4.0.downsample.0",
    "layer4.1.conv1",
    "layer4.1.conv2",
    "fc",
];

/// Parameters for [`build_layer_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerParams {
    pub width: usize,
    pub height: usize,
    /// Seed for reproducible output. `None` draws from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            width: 28,
            height: 28,
            seed: None,
        }
    }
}

/// A named brightness matrix. Serializes as a single-key object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    pub name: String,
    pub matrix: BrightnessMatrix,
}

impl Serialize for LayerRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.matrix)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for LayerRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = LayerRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with exactly one layer name key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LayerRecord, A::Error> {
                let (name, matrix) = map
                    .next_entry::<String, BrightnessMatrix>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(LayerRecord { name, matrix })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Output document: `{"layers": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDocument {
    pub layers: Vec<LayerRecord>,
}

impl LayerDocument {
    /// Layer names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }
}

/// Build one record per name, in the order given.
///
/// With a seed, each layer draws from its own derived stream.
pub fn build_layer_document<S: AsRef<str>>(names: &[S], params: &LayerParams) -> LayerDocument {
    let mut shared = FixtureRng::from_entropy();

    let layers = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let matrix = match params.seed {
                Some(seed) => {
                    let mut rng = FixtureRng::new(FixtureRng::derive_layer_seed(seed, index as u32));
                    BrightnessMatrix::random(params.width, params.height, &mut rng)
                }
                None => BrightnessMatrix::random(params.width, params.height, &mut shared),
            };
            LayerRecord {
                name: name.as_ref().to_string(),
                matrix,
            }
        })
        .collect();

    LayerDocument { layers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_follows_name_order() {
        let doc = build_layer_document(&LAYER_NAMES, &LayerParams::default());

        assert_eq!(doc.layers.len(), 21);
        assert_eq!(doc.names().collect::<Vec<_>>(), LAYER_NAMES.to_vec());
        assert_eq!(doc.layers[0].name, "conv1");
        assert_eq!(doc.layers[20].name, "fc");
        for layer in &doc.layers {
            assert_eq!(layer.matrix.width(), 28);
            assert_eq!(layer.matrix.height(), 28);
        }
    }

    #[test]
    fn test_records_serialize_with_single_key() {
        let doc = build_layer_document(&LAYER_NAMES, &LayerParams::default());
        let value = serde_json::to_value(&doc).unwrap();

        let layers = value["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 21);
        for (entry, name) in layers.iter().zip(LAYER_NAMES) {
            let obj = entry.as_object().unwrap();
            assert_eq!(obj.len(), 1);
            assert!(obj.contains_key(name));
        }
        let first_key = layers[0].as_object().unwrap().keys().next().unwrap();
        assert_eq!(first_key, "conv1");
    }

    #[test]
    fn test_seeded_documents_match() {
        let params = LayerParams {
            seed: Some(1234),
            ..Default::default()
        };
        let a = build_layer_document(&LAYER_NAMES, &params);
        let b = build_layer_document(&LAYER_NAMES, &params);
        assert_eq!(a, b);
        assert_ne!(a.layers[0].matrix, a.layers[1].matrix);
    }

    #[test]
    fn test_seeded_layer_independent_of_position_count() {
        let params = LayerParams {
            width: 4,
            height: 4,
            seed: Some(5),
        };
        let full = build_layer_document(&LAYER_NAMES, &params);
        let prefix = build_layer_document(&LAYER_NAMES[..3], &params);
        assert_eq!(full.layers[..3], prefix.layers[..]);
    }

    #[test]
    fn test_record_roundtrip_through_json() {
        let record = LayerRecord {
            name: "fc".to_string(),
            matrix: BrightnessMatrix::from_rows(vec![vec![1, 2]]).unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"fc":[[1,2]]}"#);
        let back: LayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_rejects_multiple_keys() {
        let result: Result<LayerRecord, _> = serde_json::from_str(r#"{"a":[[1]],"b":[[2]]}"#);
        assert!(result.is_err());

        let empty: Result<LayerRecord, _> = serde_json::from_str("{}");
        assert!(empty.is_err());
    }
}
