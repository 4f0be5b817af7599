//! Deserialization of the unit metadata document
//!
//! Only the `resources` mapping is read; every other top-level key
//! (`name`, `summary`, `series`, ...) is skipped. Resource order is kept
//! exactly as written so passes fetch in manifest order.

use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Resource attributes as written in the manifest, before defaults are applied
#[derive(Debug, Default, Deserialize)]
pub struct RawResource {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(rename = "auto-fetch", default, deserialize_with = "deserialize_flag")]
    pub auto_fetch: Option<bool>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Boolean attribute that also takes the YAML 1.1 spellings charm metadata
/// still uses (`yes`/`no`, `on`/`off`, `y`/`n`, any case)
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = Option<bool>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean (true/false, yes/no, on/off, y/n)")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
            match value.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "on" => Ok(Some(true)),
                "false" | "no" | "n" | "off" => Ok(Some(false)),
                _ => Err(E::invalid_value(Unexpected::Str(value), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Resources mapping in document order, duplicates included
#[derive(Debug, Default)]
pub struct OrderedResources(pub Vec<(String, Option<RawResource>)>);

impl<'de> Deserialize<'de> for OrderedResources {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResourcesVisitor;

        impl<'de> Visitor<'de> for ResourcesVisitor {
            type Value = OrderedResources;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of resource name to resource attributes")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<OrderedResources, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(name) = map.next_key::<String>()? {
                    let attributes: Option<RawResource> = map.next_value()?;
                    entries.push((name, attributes));
                }
                Ok(OrderedResources(entries))
            }
        }

        deserializer.deserialize_map(ResourcesVisitor)
    }
}

/// Top-level metadata document
#[derive(Debug, Default, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub resources: Option<OrderedResources>,
}
