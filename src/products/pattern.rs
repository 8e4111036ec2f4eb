//! Frame-placeholder patterns.
//!
//! A pattern is a path without extension, e.g. `shot_010/render_####`. The first maximal run of
//! [`FRAME_PLACEHOLDER`] in the file-name component is replaced by the zero-padded frame number.
//! Both `/` and `\` separate components on input; output always uses `/`.

use crate::foundation::core::FrameIndex;

/// Character whose contiguous runs stand for the frame number.
pub const FRAME_PLACEHOLDER: char = '#';

/// Minimum number of digits a frame number is padded to.
pub const MIN_FRAME_PADDING: usize = 4;

const SEPARATORS: [char; 2] = ['/', '\\'];

/// A pattern split into its directory and file-name components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitPattern<'a> {
    /// Directory part (separators not yet normalized). Empty when the pattern has no directory.
    pub dir: &'a str,
    /// File-name part, still containing placeholders.
    pub file: &'a str,
}

impl<'a> SplitPattern<'a> {
    /// Split `pattern` at its last `/` or `\`.
    ///
    /// Trailing separators are stripped from the directory unless it consists only of separators
    /// (a root such as `/`).
    pub fn parse(pattern: &'a str) -> Self {
        match pattern.rfind(SEPARATORS) {
            None => Self {
                dir: "",
                file: pattern,
            },
            Some(idx) => {
                let head = &pattern[..=idx];
                let trimmed = head.trim_end_matches(SEPARATORS);
                Self {
                    dir: if trimmed.is_empty() { head } else { trimmed },
                    file: &pattern[idx + 1..],
                }
            }
        }
    }

    /// Build `dir/file.ext` for one frame with `/` separators.
    pub fn render(&self, frame: FrameIndex, ext: &str) -> String {
        let file = substitute_frame(self.file, frame);
        let mut out = String::with_capacity(self.dir.len() + file.len() + ext.len() + 2);
        if !self.dir.is_empty() {
            out.push_str(self.dir);
            if !self.dir.ends_with(SEPARATORS) {
                out.push('/');
            }
        }
        out.push_str(&file);
        out.push('.');
        out.push_str(ext);
        normalize_separators(&out)
    }
}

/// Zero-pad `frame` to at least [`MIN_FRAME_PADDING`] digits; wider frames are never truncated.
pub fn pad_frame(frame: FrameIndex) -> String {
    format!("{:0width$}", frame.0, width = MIN_FRAME_PADDING)
}

/// Byte range of the first maximal placeholder run in `file`, if any.
pub fn placeholder_run(file: &str) -> Option<std::ops::Range<usize>> {
    let start = file.find(FRAME_PLACEHOLDER)?;
    let len = file[start..]
        .find(|c| c != FRAME_PLACEHOLDER)
        .unwrap_or(file.len() - start);
    Some(start..start + len)
}

/// Replace the first placeholder run of `file` with the padded frame.
///
/// A file name without placeholders is returned unchanged.
pub fn substitute_frame(file: &str, frame: FrameIndex) -> String {
    match placeholder_run(file) {
        Some(run) => {
            let mut out = String::with_capacity(file.len() + MIN_FRAME_PADDING);
            out.push_str(&file[..run.start]);
            out.push_str(&pad_frame(frame));
            out.push_str(&file[run.end..]);
            out
        }
        None => file.to_string(),
    }
}

/// Convert every `\` to `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "../../tests/unit/products/pattern.rs"]
mod tests;
