//! Rendering surfaces the computed fills are applied to.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use regex::{Captures, Regex};
use thiserror::Error;
use villemeteo_core::AppError;

use crate::band::FillColor;

/// Path ids of the metropolitan department map, Corsica included.
pub const DEFAULT_PATH_IDS: RangeInclusive<u32> = 1..=96;

/// Something with addressable department paths that can be filled.
pub trait MapSurface {
    /// Numeric ids of every path on the surface.
    fn path_ids(&self) -> Vec<u32>;

    fn set_fill(&mut self, id: u32, color: FillColor);
}

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("Failed to read map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<SvgError> for AppError {
    fn from(e: SvgError) -> Self {
        AppError::Data(e.to_string())
    }
}

/// An SVG department map whose `<path>` elements carry numeric `id`s.
///
/// Only `fill` attributes of recolored paths are touched; the rest of the
/// document is written back as-is.
#[derive(Debug, Clone)]
pub struct SvgMap {
    document: String,
    path_ids: Vec<u32>,
    fills: BTreeMap<u32, FillColor>,
    path_tag: Regex,
    id_attr: Regex,
    fill_attr: Regex,
}

impl SvgMap {
    pub fn parse(document: impl Into<String>) -> Result<Self, SvgError> {
        let document = document.into();
        let path_tag = Regex::new(r"<path\b[^>]*>")?;
        let id_attr = Regex::new(r#"\sid\s*=\s*"([^"]*)""#)?;
        let fill_attr = Regex::new(r#"\sfill\s*=\s*"[^"]*""#)?;

        let mut path_ids: Vec<u32> = path_tag
            .find_iter(&document)
            .filter_map(|tag| numeric_id(&id_attr, tag.as_str()))
            .collect();
        path_ids.sort_unstable();
        path_ids.dedup();

        tracing::debug!("Map document has {} numbered paths", path_ids.len());

        Ok(Self {
            document,
            path_ids,
            fills: BTreeMap::new(),
            path_tag,
            id_attr,
            fill_attr,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SvgError> {
        let document = std::fs::read_to_string(path).map_err(|source| SvgError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(document)
    }

    /// The document with every recolored path's `fill` replaced.
    pub fn render(&self) -> String {
        self.path_tag
            .replace_all(&self.document, |caps: &Captures| {
                let tag = caps.get(0).map_or("", |m| m.as_str());
                let fill = numeric_id(&self.id_attr, tag).and_then(|id| self.fills.get(&id));
                match fill {
                    Some(color) => with_fill(&self.fill_attr, tag, *color),
                    None => tag.to_string(),
                }
            })
            .into_owned()
    }
}

impl MapSurface for SvgMap {
    fn path_ids(&self) -> Vec<u32> {
        self.path_ids.clone()
    }

    fn set_fill(&mut self, id: u32, color: FillColor) {
        self.fills.insert(id, color);
    }
}

fn numeric_id(id_attr: &Regex, tag: &str) -> Option<u32> {
    id_attr
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().trim().parse().ok())
}

fn with_fill(fill_attr: &Regex, tag: &str, color: FillColor) -> String {
    let stripped = fill_attr.replace_all(tag, "");
    let (head, close) = match stripped.strip_suffix("/>") {
        Some(head) => (head, "/>"),
        None => (stripped.strip_suffix('>').unwrap_or(&stripped[..]), ">"),
    };
    format!("{} fill=\"{}\"{}", head.trim_end(), color.css_name(), close)
}
