use rayon::prelude::*;

use crate::{
    foundation::error::{CollectError, CollectResult},
    job::model::JobDescription,
    products::expand::{MergePolicy, expand_range, merge_expected_files},
    publish::record::{
        COLORSPACE_CONFIG, COLORSPACE_DISPLAY, COLORSPACE_VIEW, RenderProductsInfo, RenderRecord,
    },
};

/// Base order of collector plugins in the publish pipeline.
pub const COLLECTOR_ORDER: f64 = 0.0;

/// Format identifier that can hold several passes in one file.
pub const MULTILAYER_FORMAT: &str = "exr";

/// Static description of the render collector.
pub struct CollectRender;

impl CollectRender {
    /// Human-readable plugin label.
    pub const LABEL: &'static str = "Collect Render";
    /// Position in the publish pipeline; runs just after the default collectors.
    pub const ORDER: f64 = COLLECTOR_ORDER + 0.01;
    /// Hosts the collector runs in.
    pub const HOSTS: &'static [&'static str] = &["blender"];
    /// Instance families the collector handles.
    pub const FAMILIES: &'static [&'static str] = &["render"];
    /// Family tags written onto every record.
    pub const RECORD_FAMILIES: &'static [&'static str] = &["render", "render.farm"];
    /// Whether the workfile version is synced onto the published product.
    pub const SYNC_WORKFILE_VERSION: bool = false;

    /// Whether an instance of `families` in `host` is handled by this collector.
    pub fn applies_to(host: &str, families: &[&str]) -> bool {
        Self::HOSTS.iter().any(|h| *h == host)
            && families
                .iter()
                .any(|f| Self::FAMILIES.iter().any(|known| known == f))
    }
}

/// Build the publish record for one job, replacing primary outputs on name collisions.
pub fn collect_render(job: &JobDescription) -> CollectResult<RenderRecord> {
    collect_render_with(job, MergePolicy::default())
}

/// Build the publish record for one job under an explicit merge policy.
///
/// Fails with [`CollectError::MissingRenderData`] when the job has no render data.
#[tracing::instrument(
    skip(job),
    fields(start = job.frame_start_handle.0, end = job.frame_end_handle.0)
)]
pub fn collect_render_with(
    job: &JobDescription,
    policy: MergePolicy,
) -> CollectResult<RenderRecord> {
    let render_data = job
        .render_data
        .as_ref()
        .ok_or(CollectError::MissingRenderData)?;

    let ext = render_data.image_format.as_str();
    let range = job.frame_range();

    let beauty = expand_range(&render_data.render_product, range, ext);
    let aovs = expand_range(&render_data.aov_file_product, range, ext);
    let expected_files = merge_expected_files(beauty, aovs, policy)?;

    tracing::debug!(?expected_files, "expected files");

    Ok(RenderRecord {
        families: CollectRender::RECORD_FAMILIES
            .iter()
            .map(|f| f.to_string())
            .collect(),
        fps: job.fps,
        by_frame_step: job.by_frame_step,
        review: render_data.review,
        multipart_exr: ext == MULTILAYER_FORMAT && render_data.multilayer_exr,
        farm: true,
        expected_files,
        colorspace_config: COLORSPACE_CONFIG.to_string(),
        colorspace_display: COLORSPACE_DISPLAY.to_string(),
        colorspace_view: COLORSPACE_VIEW.to_string(),
        render_products: RenderProductsInfo {
            frame_start: job.frame_start_handle,
            frame_end: job.frame_end_handle,
        },
    })
}

/// Collect independent jobs in parallel, returning records in input order.
///
/// `threads` overrides the worker count of the dedicated pool; `None` uses rayon defaults.
#[tracing::instrument(skip(jobs), fields(jobs = jobs.len()))]
pub fn collect_many(
    jobs: &[JobDescription],
    policy: MergePolicy,
    threads: Option<usize>,
) -> CollectResult<Vec<RenderRecord>> {
    let pool = build_thread_pool(threads)?;
    let collected = pool.install(|| {
        jobs.par_iter()
            .map(|job| collect_render_with(job, policy))
            .collect::<Vec<_>>()
    });

    let mut out = Vec::with_capacity(collected.len());
    for item in collected {
        out.push(item?);
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> CollectResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CollectError::validation(
            "collect threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CollectError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/publish/collect.rs"]
mod tests;
