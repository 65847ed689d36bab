use crate::capture::{CaptureEntry, CaptureError};
use std::path::Path;

const DELIMITER_OPEN: &str = "====";
const DELIMITER_CLOSE_LEN: usize = 10;

/// Returns true for a section delimiter line such as `==== 12 ==========`.
///
/// The line is `====`, an index, then exactly ten `=`. Whitespace is allowed
/// around the index and around the line itself.
pub fn is_delimiter_line(line: &str) -> bool {
    let Some(rest) = line.trim().strip_prefix(DELIMITER_OPEN) else {
        return false;
    };

    let rest = rest.trim_start();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }

    let rest = rest[digits..].trim_start();
    rest.len() == DELIMITER_CLOSE_LEN && rest.bytes().all(|b| b == b'=')
}

/// Splits a block capture into its sections.
///
/// Sections are trimmed; empty ones are dropped. Text before the first
/// delimiter counts as a section when it is not blank.
pub fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if is_delimiter_line(line) {
            sections.push(&text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    sections.push(&text[start..]);

    sections
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns every top-level balanced `{...}` substring of `section`, in order.
///
/// Braces inside JSON string literals do not affect nesting. When an object
/// never closes under that rule (a stray `"` in a hand-edited dump), the text
/// from that object onward is rescanned counting every brace.
pub fn extract_json_blocks(section: &str) -> Vec<&str> {
    let (mut blocks, unclosed) = balanced_blocks(section, true);

    if let Some(start) = unclosed {
        let (rest, _) = balanced_blocks(&section[start..], false);
        blocks.extend(rest);
    }

    blocks
}

/// Returns the balanced objects found and the start of an object left open.
fn balanced_blocks(text: &str, string_aware: bool) -> (Vec<&str>, Option<usize>) {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if depth == 0 {
            if ch == '{' {
                start = i;
                depth = 1;
            }
            continue;
        }

        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if string_aware => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    blocks.push(&text[start..=i]);
                }
            }
            _ => {}
        }
    }

    let unclosed = (depth > 0).then_some(start);
    (blocks, unclosed)
}

/// Decodes a block capture. The first JSON object of a section is the
/// request, the second the response; missing objects become empty text.
pub fn decode_blocks(text: &str) -> Vec<CaptureEntry> {
    split_sections(text)
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let mut blocks = extract_json_blocks(section).into_iter();
            let request = blocks.next().unwrap_or_default();
            let response = blocks.next().unwrap_or_default();

            if response.is_empty() {
                tracing::debug!(section = i, "section holds fewer than two JSON objects");
            }

            CaptureEntry::untimed(request, response)
        })
        .collect()
}

pub fn decode_blocks_file(path: &Path) -> Result<Vec<CaptureEntry>, CaptureError> {
    let text = std::fs::read_to_string(path).map_err(|e| CaptureError::read_file(path, e))?;
    let entries = decode_blocks(&text);

    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "decoded block capture"
    );

    Ok(entries)
}
