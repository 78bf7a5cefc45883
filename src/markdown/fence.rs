//! Fence marker detection and the line scan state.

/// Prefix that opens or closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Returns `true` if `line` starts with three backticks.
///
/// Anything after the marker (an info string, trailing `\r`) is ignored.
/// Indented fences and tilde fences are not recognized.
///
/// # Examples
///
/// ```
/// use mdfence::markdown::is_fence_marker;
///
/// assert!(is_fence_marker("```rust"));
/// assert!(!is_fence_marker("  ```"));
/// assert!(!is_fence_marker("~~~"));
/// ```
#[inline]
pub fn is_fence_marker(line: &str) -> bool {
    line.starts_with(FENCE_MARKER)
}

/// How a single line was classified by [`ScanState::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A fence marker that toggled the scan state. Emitted unchanged.
    Fence,
    /// A line inside a code region.
    Code,
    /// A line outside any code region. Emitted unchanged.
    Text,
}

/// Scan state carried from line to line.
///
/// The line at index 0 never toggles, even when it looks like a fence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    in_code: bool,
}

impl ScanState {
    /// Create a scan state outside any code region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scan is currently inside a code region.
    pub fn in_code(&self) -> bool {
        self.in_code
    }

    /// Classify the line at `index` and advance the state.
    pub fn observe(&mut self, index: usize, line: &str) -> LineKind {
        if index > 0 && is_fence_marker(line) {
            self.in_code = !self.in_code;
            return LineKind::Fence;
        }

        if self.in_code {
            LineKind::Code
        } else {
            LineKind::Text
        }
    }
}
