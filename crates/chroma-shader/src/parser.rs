use crate::error::ParseError;
use crate::source::ShaderSource;

/// Marker token that selects the section receiving subsequent lines.
const MARKER: &str = "#shader";

// ── Section ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Section {
    Vertex,
    Fragment,
}

// ── Parser ────────────────────────────────────────────────────────────────

/// Splits a shader bundle into its vertex and fragment sources.
///
/// A line whose first non-whitespace token is `#shader` selects the section
/// (`vertex` or `fragment`); every other line is appended verbatim to the
/// currently selected section. Sections may be re-selected and split across
/// several blocks.
///
/// Errors:
/// - non-blank content before the first marker
/// - a marker with a missing or unknown section name
/// - a missing or empty `vertex` or `fragment` section at end of input
pub fn parse_str(src: &str) -> Result<ShaderSource, ParseError> {
    let mut out = ShaderSource::default();
    let mut section: Option<Section> = None;
    let mut line_count = 0;

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        line_count = line_no;

        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(MARKER) {
            // The marker must be a whole token: `#shadervertex` is content,
            // not a marker.
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                section = Some(parse_marker(rest, line_no)?);
                continue;
            }
        }

        match section {
            Some(Section::Vertex) => {
                out.vertex.push_str(line);
                out.vertex.push('\n');
            }
            Some(Section::Fragment) => {
                out.fragment.push_str(line);
                out.fragment.push('\n');
            }
            // Blank lines before the first marker are tolerated; anything
            // else has no section to land in.
            None => {
                if !trimmed.is_empty() {
                    return Err(ParseError::new(
                        format!("content before the first {} marker", MARKER),
                        line_no,
                    ));
                }
            }
        }
    }

    let end = line_count.max(1);
    if out.vertex.trim().is_empty() {
        return Err(ParseError::new("missing vertex section", end));
    }
    if out.fragment.trim().is_empty() {
        return Err(ParseError::new("missing fragment section", end));
    }

    Ok(out)
}

fn parse_marker(rest: &str, line_no: usize) -> Result<Section, ParseError> {
    match rest.split_whitespace().next() {
        Some("vertex") => Ok(Section::Vertex),
        Some("fragment") => Ok(Section::Fragment),
        Some(other) => Err(ParseError::new(
            format!("unknown shader section {:?}", other),
            line_no,
        )),
        None => Err(ParseError::new(
            format!("missing section name after {}", MARKER),
            line_no,
        )),
    }
}
