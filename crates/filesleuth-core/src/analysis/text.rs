/// Text detection and line counting.
///
/// A file is considered text when its MIME guess says so, when its extension
/// is a known source-code extension, or, only if neither applies, when an
/// encoding probe over the first [`PROBE_BYTES`] bytes is confident enough.
use crate::rules::{guess_mime_type, RuleTable};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Size of the encoding probe read from the start of a file.
pub const PROBE_BYTES: usize = 4096;

/// Minimum detector confidence for the probe to declare a file text.
pub const PROBE_CONFIDENCE: f32 = 0.7;

/// Decide whether `path` is a text file.
pub fn is_text_file(path: &Path, rules: &RuleTable) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    if guess_mime_type(&ext).is_some_and(|m| m.starts_with("text/")) {
        return true;
    }
    if rules.languages().is_source_code(path) {
        return true;
    }

    match probe_encoding(path) {
        Ok(Some((encoding, confidence))) => {
            debug!(
                "{}: probe says {encoding} ({confidence:.2})",
                path.display()
            );
            confidence > PROBE_CONFIDENCE
        }
        Ok(None) => false,
        Err(e) => {
            debug!("{}: encoding probe failed: {e}", path.display());
            false
        }
    }
}

/// Run the charset detector over the first [`PROBE_BYTES`] bytes.
///
/// Returns `None` when the file is empty or no encoding was reported.
fn probe_encoding(path: &Path) -> io::Result<Option<(String, f32)>> {
    let mut sample = Vec::with_capacity(PROBE_BYTES);
    File::open(path)?
        .take(PROBE_BYTES as u64)
        .read_to_end(&mut sample)?;
    if sample.is_empty() {
        return Ok(None);
    }

    let (encoding, confidence, _language) = chardet::detect(&sample);
    if encoding.is_empty() {
        Ok(None)
    } else {
        Ok(Some((encoding, confidence)))
    }
}

/// Read a whole file as text: UTF-8 first, Latin-1 if that fails to decode.
///
/// Latin-1 maps every byte to a code point, so only I/O errors remain.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{}: not UTF-8, decoding as Latin-1", path.display());
            Ok(e.into_bytes().iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Count lines in a file. Any failure yields `0`.
///
/// The file is streamed rather than decoded: line endings are the same bytes
/// in UTF-8 and Latin-1, so the count does not depend on the encoding.
pub fn count_lines(path: &Path) -> u64 {
    let counted = File::open(path)
        .and_then(|f| count_lines_from(BufReader::with_capacity(READ_BUFFER, f)));
    match counted {
        Ok(lines) => lines,
        Err(e) => {
            debug!("{}: cannot count lines: {e}", path.display());
            0
        }
    }
}

/// Count lines with universal newlines: `\n`, `\r\n` and a lone `\r` each
/// end a line, and a trailing unterminated segment is a line too.
pub fn count_lines_in(text: &str) -> u64 {
    let mut counter = LineCounter::default();
    counter.feed(text.as_bytes());
    counter.finish()
}

const READ_BUFFER: usize = 64 * 1024;

fn count_lines_from<R: BufRead>(mut reader: R) -> io::Result<u64> {
    let mut counter = LineCounter::default();
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            break;
        }
        counter.feed(chunk);
        let len = chunk.len();
        reader.consume(len);
    }
    Ok(counter.finish())
}

/// Line-ending state carried across buffer boundaries.
#[derive(Default)]
struct LineCounter {
    lines: u64,
    after_cr: bool,
    last: Option<u8>,
}

impl LineCounter {
    fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            match b {
                // Second half of a `\r\n` pair.
                b'\n' if self.after_cr => {}
                b'\n' | b'\r' => self.lines += 1,
                _ => {}
            }
            self.after_cr = b == b'\r';
        }
        if let Some(&b) = bytes.last() {
            self.last = Some(b);
        }
    }

    fn finish(self) -> u64 {
        match self.last {
            None | Some(b'\n') | Some(b'\r') => self.lines,
            Some(_) => self.lines + 1,
        }
    }
}
