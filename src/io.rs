//! Reading Markdown from bytes, files, and streams.
//!
//! Input is read whole and decoded to UTF-8 before escaping; output is
//! always written as UTF-8.

use std::borrow::Cow;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};
use crate::escaper::{FenceEscaper, ScanReport};

/// Resolve an encoding label such as `"latin1"` or `"shift_jis"`.
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Decode Markdown bytes to a string.
///
/// 1. UTF-8 first (a BOM is stripped)
/// 2. If malformed, the hint encoding
/// 3. Otherwise Windows-1252
///
/// Borrows when the input is already valid UTF-8 without a BOM.
///
/// # Examples
///
/// ```
/// use mdfence::io::decode_markdown;
///
/// assert_eq!(decode_markdown(b"```\n<a>", None), "```\n<a>");
/// assert_eq!(decode_markdown(b"caf\xe9", None), "café");
/// ```
pub fn decode_markdown<'a>(bytes: &'a [u8], hint: Option<&'static Encoding>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let fallback = hint.unwrap_or(encoding_rs::WINDOWS_1252);
    tracing::debug!(encoding = fallback.name(), "input is not valid UTF-8");
    let (result, _, _) = fallback.decode(bytes);
    result
}

/// Read all of `reader`, escape it, and write the result to `writer`.
pub fn escape_reader<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    escaper: &FenceEscaper,
    hint: Option<&'static Encoding>,
) -> Result<ScanReport> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let document = decode_markdown(&bytes, hint);
    let escaped = escaper.escape_with_report(&document);

    writer.write_all(escaped.output.as_bytes())?;
    writer.flush()?;

    Ok(escaped.report)
}

/// Escape the file at `input` and write the result to `output`.
///
/// `input` and `output` may name the same file; the input is read in full
/// before the output is created. Rewriting a file in place when nothing was
/// escaped leaves its bytes untouched, so a BOM or a legacy encoding survives.
pub fn escape_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    escaper: &FenceEscaper,
    hint: Option<&'static Encoding>,
) -> Result<ScanReport> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let bytes = fs::read(input)?;
    let document = decode_markdown(&bytes, hint);
    let escaped = escaper.escape_with_report(&document);

    if input == output && !escaped.report.changed() {
        tracing::debug!(path = %input.display(), "nothing to escape, file left as is");
        return Ok(escaped.report);
    }

    fs::write(output, escaped.output)?;

    Ok(escaped.report)
}
