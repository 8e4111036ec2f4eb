//! Render-collect turns a render job description into the files the render will produce and
//! folds them into the record handed to the publishing stage.
//!
//! # Pipeline overview
//!
//! 1. **Load**: host data or JSON -> [`JobDescription`] (typed, validated at the boundary)
//! 2. **Expand**: `[RenderProduct] + frame range + extension -> ExpectedFiles`
//!    (`#` runs become zero-padded frame numbers, separators become `/`)
//! 3. **Merge**: primary and auxiliary [`ExpectedFiles`] under a [`MergePolicy`]
//! 4. **Collect**: merged files + job metadata -> [`RenderRecord`]
//!
//! Expansion and collection are pure: no filesystem access, no shared state. Independent jobs
//! can be collected in parallel with [`collect_many`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod job;
mod products;
mod publish;

pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{CollectError, CollectResult};
pub use job::model::{JobDescription, RenderData};
pub use products::expand::{
    ExpectedFiles, MergePolicy, RenderProduct, expand_expected_files, expand_range,
    merge_expected_files,
};
pub use products::pattern::{
    FRAME_PLACEHOLDER, MIN_FRAME_PADDING, SplitPattern, normalize_separators, pad_frame,
    placeholder_run, substitute_frame,
};
pub use publish::collect::{
    COLLECTOR_ORDER, CollectRender, MULTILAYER_FORMAT, collect_many, collect_render,
    collect_render_with,
};
pub use publish::record::{
    COLORSPACE_CONFIG, COLORSPACE_DISPLAY, COLORSPACE_VIEW, RenderProductsInfo, RenderRecord,
};
