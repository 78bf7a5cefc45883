//! The fence-aware escaper.
//!
//! Splits a document on `\n`, folds over the lines carrying a [`ScanState`],
//! escapes the first `<` and `>` of every line inside a code region, and joins
//! the result back together with `\n`. Lines outside code regions and the
//! fence lines themselves come out byte-identical.
//!
//! # Example
//!
//! ```
//! use mdfence::FenceEscaper;
//!
//! let escaper = FenceEscaper::new();
//! let out = escaper.escape("text\n```\n<b>\n```\n");
//! assert_eq!(out, "text\n```\n&ltb&gt\n```\n");
//! ```

use std::future::{Ready, ready};

use crate::markdown::{LineKind, ScanState, escape_first_angle_brackets};

/// Options accepted for interface compatibility with Markdown pipelines.
///
/// The escaper reads no settings from it; any value produces the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {}

impl Options {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Counters collected during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of lines in the document (an empty document has one).
    pub lines: usize,
    /// Number of fence markers that toggled the scan state.
    pub fences: usize,
    /// Number of code lines whose text changed.
    pub escaped_lines: usize,
    /// Whether the document ended inside a code region.
    pub unclosed: bool,
}

impl ScanReport {
    /// Whether escaping changed any line of the document.
    pub fn changed(&self) -> bool {
        self.escaped_lines > 0
    }
}

/// Escaped output together with its [`ScanReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped {
    /// The escaped document.
    pub output: String,
    /// What the scan saw while producing `output`.
    pub report: ScanReport,
}

/// A single text-to-text step in a Markdown processing pipeline.
pub trait Preprocessor {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Transform the raw Markdown. Must not fail.
    fn process(&self, markdown: &str) -> String;
}

/// Escapes `<` and `>` inside fenced code blocks.
#[derive(Debug, Clone, Default)]
pub struct FenceEscaper {
    options: Options,
}

impl FenceEscaper {
    /// Create a FenceEscaper with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FenceEscaper with the specified options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The options this escaper was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Escape the document and return only the output text.
    pub fn escape(&self, document: &str) -> String {
        self.escape_with_report(document).output
    }

    /// Escape the document and report what the scan saw.
    pub fn escape_with_report(&self, document: &str) -> Escaped {
        let (state, report, output) = document.split('\n').enumerate().fold(
            (
                ScanState::new(),
                ScanReport::default(),
                String::with_capacity(document.len()),
            ),
            |(mut state, mut report, mut output), (index, line)| {
                if index > 0 {
                    output.push('\n');
                }
                report.lines += 1;

                match state.observe(index, line) {
                    LineKind::Fence => {
                        report.fences += 1;
                        tracing::trace!(line = index, in_code = state.in_code(), "fence toggled");
                        output.push_str(line);
                    }
                    LineKind::Code => {
                        let escaped = escape_first_angle_brackets(line);
                        if escaped != line {
                            report.escaped_lines += 1;
                        }
                        output.push_str(&escaped);
                    }
                    LineKind::Text => output.push_str(line),
                }

                (state, report, output)
            },
        );

        let report = ScanReport {
            unclosed: state.in_code(),
            ..report
        };
        tracing::debug!(
            lines = report.lines,
            fences = report.fences,
            escaped = report.escaped_lines,
            unclosed = report.unclosed,
            "escaped code fences"
        );

        Escaped { output, report }
    }

    /// Escape the document behind an already-resolved future.
    ///
    /// Awaiting the result never suspends.
    pub fn escape_ready(&self, document: &str) -> Ready<String> {
        ready(self.escape(document))
    }
}

impl Preprocessor for FenceEscaper {
    fn name(&self) -> &'static str {
        "fence-escape"
    }

    fn process(&self, markdown: &str) -> String {
        self.escape(markdown)
    }
}

/// Escape `<` and `>` inside fenced code blocks using default options.
pub fn escape_code_fences(document: &str) -> String {
    FenceEscaper::new().escape(document)
}

/// Escape `<` and `>` inside fenced code blocks.
///
/// `options` is accepted for pipeline compatibility and does not change the
/// output.
pub fn escape_code_fences_with(document: &str, options: &Options) -> String {
    FenceEscaper::with_options(options.clone()).escape(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let escaped = FenceEscaper::new().escape_with_report("");
        assert_eq!(escaped.output, "");
        assert_eq!(escaped.report.lines, 1);
        assert!(!escaped.report.unclosed);
        assert!(!escaped.report.changed());
    }

    #[test]
    fn test_text_outside_fences_untouched() {
        let doc = "# Title\n\n<div>raw html</div>\na > b";
        assert_eq!(escape_code_fences(doc), doc);
    }

    #[test]
    fn test_fenced_block_escaped() {
        assert_eq!(
            escape_code_fences("text\n```\n<b>\n```\n"),
            "text\n```\n&ltb&gt\n```\n"
        );
    }

    #[test]
    fn test_fence_with_info_string() {
        assert_eq!(
            escape_code_fences("intro\n```html\n<p>hi</p>\n```\n<p>after</p>"),
            "intro\n```html\n&ltp&gthi</p>\n```\n<p>after</p>"
        );
    }

    #[test]
    fn test_first_line_fence_is_not_a_toggle() {
        // The closing fence is the first real toggle, so nothing is escaped.
        let escaped = FenceEscaper::new().escape_with_report("```\n<tag>\n```");
        assert_eq!(escaped.output, "```\n<tag>\n```");
        assert_eq!(escaped.report.fences, 1);
        assert!(escaped.report.unclosed);
    }

    #[test]
    fn test_first_line_fence_shifts_regions() {
        assert_eq!(
            escape_code_fences("```\n<a>\n```\n<b>\n```\n<c>"),
            "```\n<a>\n```\n&ltb&gt\n```\n<c>"
        );
    }

    #[test]
    fn test_unclosed_fence_escapes_to_end() {
        let escaped = FenceEscaper::new().escape_with_report("x\n```\n<a>\n<b>");
        assert_eq!(escaped.output, "x\n```\n&lta&gt\n&ltb&gt");
        assert_eq!(escaped.report.escaped_lines, 2);
        assert!(escaped.report.unclosed);
    }

    #[test]
    fn test_fence_lines_never_escaped() {
        assert_eq!(
            escape_code_fences("x\n```<html>\n<a>\n```<end>"),
            "x\n```<html>\n&lta&gt\n```<end>"
        );
    }

    #[test]
    fn test_report_counts() {
        let doc = "a\n```\n<a>\nplain\n```\nb\n```\n<c>\n```";
        let report = FenceEscaper::new().escape_with_report(doc).report;
        assert_eq!(
            report,
            ScanReport {
                lines: 9,
                fences: 4,
                escaped_lines: 2,
                unclosed: false,
            }
        );
        assert!(report.changed());
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            escape_code_fences("a\r\n```\r\n<b>\r\n```\r\n"),
            "a\r\n```\r\n&ltb&gt\r\n```\r\n"
        );
    }

    #[test]
    fn test_options_do_not_change_output() {
        let doc = "x\n```\n<a><b>\n```";
        assert_eq!(
            escape_code_fences_with(doc, &Options::new()),
            escape_code_fences(doc)
        );
    }

    #[test]
    fn test_preprocessor_impl() {
        let step: &dyn Preprocessor = &FenceEscaper::new();
        assert_eq!(step.name(), "fence-escape");
        assert_eq!(step.process("x\n```\n<a>\n```"), "x\n```\n&lta&gt\n```");
    }

    #[test]
    fn test_ready_future_resolves_immediately() {
        let escaper = FenceEscaper::new();
        let out = futures::executor::block_on(escaper.escape_ready("x\n```\n<a>\n```"));
        assert_eq!(out, "x\n```\n&lta&gt\n```");
    }
}
