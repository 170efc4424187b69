//! The image picker's catalog: a small, generated list of selectable images.

use crate::model::ImageRef;

pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/id/{n}/200";
pub const DEFAULT_CATALOG_SIZE: u32 = 20;

/// Largest catalog the picker will generate.
pub const MAX_CATALOG_SIZE: u32 = 1000;

/// Expands the `{n}` placeholder of a url template.
pub fn image_url(template: &str, n: u32) -> String {
    template.replace("{n}", &n.to_string())
}

pub fn image_name(n: u32) -> String {
    format!("Image {}", n)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub number: u32,
    pub url: String,
    pub name: String,
}

impl CatalogEntry {
    /// The (url, name) pair handed to a variant slot.
    pub fn select(&self) -> ImageRef {
        ImageRef::new(self.url.clone(), self.name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generated(DEFAULT_CATALOG_SIZE, DEFAULT_IMAGE_URL)
    }
}

impl Catalog {
    /// Images `1..=size`, named "Image {n}". Sizes above
    /// [`MAX_CATALOG_SIZE`] are capped.
    pub fn generated(size: u32, url_template: &str) -> Self {
        let entries = (1..=size.min(MAX_CATALOG_SIZE))
            .map(|n| CatalogEntry {
                number: n,
                url: image_url(url_template, n),
                name: image_name(n),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, number: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.number == number)
    }

    /// Case-insensitive substring match on the entry name, in catalog order.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<CatalogEntry> {
        let term_lower = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&term_lower))
            .cloned()
            .collect()
    }
}
