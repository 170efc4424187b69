use crate::reorder::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a filter row. Numeric in practice ("1", "2", ...),
/// but stored and compared as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterId(String);

impl FilterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selected image: the url and its display name always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub name: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// One slot of a filter. Slots at the same position across filters form a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredVariant", into = "StoredVariant")]
pub struct Variant {
    pub id: VariantId,
    pub image: Option<ImageRef>,
}

impl Variant {
    pub fn empty(id: VariantId) -> Self {
        Self { id, image: None }
    }

    pub fn name(&self) -> Option<&str> {
        self.image.as_ref().map(|img| img.name.as_str())
    }
}

// On disk an unset image is `"image": "", "name": ""`.
#[derive(Serialize, Deserialize)]
struct StoredVariant {
    id: VariantId,
    image: String,
    name: String,
}

impl TryFrom<StoredVariant> for Variant {
    type Error = String;

    fn try_from(raw: StoredVariant) -> std::result::Result<Self, Self::Error> {
        let image = match (raw.image.is_empty(), raw.name.is_empty()) {
            (true, true) => None,
            (false, false) => Some(ImageRef {
                url: raw.image,
                name: raw.name,
            }),
            _ => {
                return Err(format!(
                    "variant {} has only one of image/name set",
                    raw.id
                ))
            }
        };
        Ok(Variant { id: raw.id, image })
    }
}

impl From<Variant> for StoredVariant {
    fn from(v: Variant) -> Self {
        let (image, name) = match v.image {
            Some(img) => (img.url, img.name),
            None => (String::new(), String::new()),
        };
        StoredVariant {
            id: v.id,
            image,
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: FilterId,
    #[serde(rename = "productFilter")]
    pub label: String,
    pub variants: Vec<Variant>,
}

impl Filter {
    pub fn new(id: FilterId, label: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            id,
            label: label.into(),
            variants,
        }
    }

    /// Comma-joined names of the variants that have an image, or the label
    /// when none do.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.variants.iter().filter_map(Variant::name).collect();
        if names.is_empty() {
            self.label.clone()
        } else {
            names.join(", ")
        }
    }
}

impl Keyed for Filter {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}
