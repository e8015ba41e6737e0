use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Marker written by the device list generator for entries nobody has
/// documented yet.
pub const PLACEHOLDER_DESCRIPTION: &str = "TODO";

/// One device documentation file, e.g. `documentation/devices/EL7041.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceRecord {
    #[serde(rename = "Device", deserialize_with = "text")]
    pub device: String,
    #[serde(rename = "VendorID", deserialize_with = "text")]
    pub vendor_id: String,
    #[serde(rename = "VendorName", deserialize_with = "text")]
    pub vendor_name: String,
    #[serde(rename = "PID", deserialize_with = "text")]
    pub product_id: String,
    #[serde(rename = "Description", deserialize_with = "text")]
    pub description: String,
    #[serde(rename = "DocumentationURL", deserialize_with = "text")]
    pub documentation_url: String,
    #[serde(rename = "DeviceType", deserialize_with = "text")]
    pub device_type: String,
    /// 0 means "not specified".
    #[serde(rename = "Channels", deserialize_with = "count")]
    pub channels: i64,
    #[serde(rename = "Notes", deserialize_with = "text")]
    pub notes: String,
}

impl DeviceRecord {
    /// Autogenerated entry whose description is still `TODO`.
    pub fn is_placeholder(&self) -> bool {
        self.description.trim() == PLACEHOLDER_DESCRIPTION
    }

    /// True when `DocumentationURL` looks like an absolute http(s) link.
    /// Empty and short values are simply not links.
    pub fn has_documentation_link(&self) -> bool {
        self.documentation_url.starts_with("http")
    }
}

// Plain scalars keep their source text (`0x00000002` stays as written), and
// an empty value (`Notes:`) is "".
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or scalar")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_str(TextVisitor)
}

fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}
