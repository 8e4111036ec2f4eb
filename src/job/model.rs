use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{CollectError, CollectResult},
    products::expand::RenderProduct,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Render job as handed over by the host application.
///
/// This is the typed boundary object: the host fills it once (or it is loaded from JSON) and
/// everything downstream reads named fields only.
pub struct JobDescription {
    /// Render settings captured from the instance node; `None` when the node has none.
    #[serde(default, rename = "render_data", deserialize_with = "deserialize_render_data")]
    pub render_data: Option<RenderData>,
    /// First frame including handles.
    pub frame_start_handle: FrameIndex,
    /// Last frame including handles (inclusive).
    pub frame_end_handle: FrameIndex,
    /// Scene frame step used to expand output files.
    #[serde(default = "default_step")]
    pub frame_step: u64,
    /// Per-instance step override forwarded to the publish record.
    #[serde(default = "default_step")]
    pub by_frame_step: u64,
    /// Project frame rate.
    pub fps: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Output configuration of a render instance.
pub struct RenderData {
    /// Primary (beauty) outputs.
    #[serde(default)]
    pub render_product: Vec<RenderProduct>,
    /// Auxiliary (AOV) outputs.
    #[serde(default)]
    pub aov_file_product: Vec<RenderProduct>,
    /// Output format identifier, also used as file extension (e.g. `exr`).
    pub image_format: String,
    /// Whether passes are written into a single multi-layer file.
    #[serde(default)]
    pub multilayer_exr: bool,
    /// Whether a review artifact should be generated.
    #[serde(default)]
    pub review: bool,
}

fn default_step() -> u64 {
    1
}

// `{}` and `null` both mean the instance carries no render data.
fn deserialize_render_data<'de, D>(deserializer: D) -> Result<Option<RenderData>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{Deserialize, de::Error};

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

impl JobDescription {
    /// Parse a job description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CollectResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CollectError::serde(format!("parse job description JSON: {e}")))
    }

    /// Parse a job description from a JSON string.
    pub fn from_json_str(s: &str) -> CollectResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| CollectError::serde(format!("parse job description JSON: {e}")))
    }

    /// Parse a job description from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CollectResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open job description '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Frame range with handles, stepped by the scene frame step.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::unchecked(self.frame_start_handle, self.frame_end_handle, self.frame_step)
    }

    /// Check boundary invariants.
    ///
    /// A missing render-data block is not checked here; collection reports it.
    pub fn validate(&self) -> CollectResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(CollectError::validation("fps must be finite and > 0"));
        }
        if self.frame_step == 0 {
            return Err(CollectError::validation("frameStep must be >= 1"));
        }
        if self.by_frame_step == 0 {
            return Err(CollectError::validation("byFrameStep must be >= 1"));
        }
        FrameRange::new(self.frame_start_handle, self.frame_end_handle, self.frame_step)?;

        if let Some(rd) = &self.render_data {
            rd.validate()?;
        }
        Ok(())
    }
}

impl RenderData {
    /// Check format and product lists.
    pub fn validate(&self) -> CollectResult<()> {
        if self.image_format.trim().is_empty() {
            return Err(CollectError::validation("image_format must be non-empty"));
        }
        validate_products(&self.render_product, "render_product")?;
        validate_products(&self.aov_file_product, "aov_file_product")
    }
}

fn validate_products(products: &[RenderProduct], field: &str) -> CollectResult<()> {
    let mut seen = BTreeSet::new();
    for p in products {
        if p.name.trim().is_empty() {
            return Err(CollectError::validation(format!(
                "{field} contains a product with an empty name"
            )));
        }
        if !seen.insert(p.name.as_str()) {
            return Err(CollectError::validation(format!(
                "{field} lists product '{}' more than once",
                p.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/job/model.rs"]
mod tests;
