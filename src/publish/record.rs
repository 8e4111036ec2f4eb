use serde::ser::SerializeSeq;

use crate::{foundation::core::FrameIndex, products::expand::ExpectedFiles};

/// Colorspace config path written while the host has no per-job color management.
pub const COLORSPACE_CONFIG: &str = "";
/// Display name written while the host has no per-job color management.
pub const COLORSPACE_DISPLAY: &str = "sRGB";
/// View name written while the host has no per-job color management.
pub const COLORSPACE_VIEW: &str = "ACES 1.0 SDR-video";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Frame span handed to the downstream color pipeline.
pub struct RenderProductsInfo {
    /// First frame including handles.
    pub frame_start: FrameIndex,
    /// Last frame including handles.
    pub frame_end: FrameIndex,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Publish record for one render job.
///
/// Built once by [`crate::collect_render`] and read-only afterwards.
pub struct RenderRecord {
    pub(crate) families: Vec<String>,
    pub(crate) fps: f64,
    pub(crate) by_frame_step: u64,
    pub(crate) review: bool,
    pub(crate) multipart_exr: bool,
    pub(crate) farm: bool,
    #[serde(serialize_with = "serialize_single")]
    pub(crate) expected_files: ExpectedFiles,
    pub(crate) colorspace_config: String,
    pub(crate) colorspace_display: String,
    pub(crate) colorspace_view: String,
    pub(crate) render_products: RenderProductsInfo,
}

// Downstream consumers expect `expectedFiles` as a one-element list.
fn serialize_single<S: serde::Serializer>(
    files: &ExpectedFiles,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(1))?;
    seq.serialize_element(files)?;
    seq.end()
}

impl RenderRecord {
    /// Family tags, generic first.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Project frame rate.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Per-instance frame step override.
    pub fn by_frame_step(&self) -> u64 {
        self.by_frame_step
    }

    /// Whether a review artifact should be generated.
    pub fn review(&self) -> bool {
        self.review
    }

    /// Whether all passes land in one multi-part file per frame.
    pub fn multipart_exr(&self) -> bool {
        self.multipart_exr
    }

    /// Whether the job is routed to the render farm.
    pub fn farm(&self) -> bool {
        self.farm
    }

    /// Merged expected files of primary and auxiliary outputs.
    pub fn expected_files(&self) -> &ExpectedFiles {
        &self.expected_files
    }

    /// Colorspace config path.
    pub fn colorspace_config(&self) -> &str {
        &self.colorspace_config
    }

    /// Colorspace display.
    pub fn colorspace_display(&self) -> &str {
        &self.colorspace_display
    }

    /// Colorspace view.
    pub fn colorspace_view(&self) -> &str {
        &self.colorspace_view
    }

    /// Frame span for the color pipeline.
    pub fn render_products(&self) -> RenderProductsInfo {
        self.render_products
    }

    /// Serialize into the JSON shape consumed by the publishing stage.
    pub fn to_json(&self) -> crate::CollectResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| crate::CollectError::serde(format!("serialize render record: {e}")))
    }
}
