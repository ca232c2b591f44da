//! Parser for combined **shader bundle** files (`.shader`).
//!
//! A bundle keeps both program stages in one text file, separated by
//! `#shader` marker lines. This crate is intentionally dependency-free so
//! bundles can be validated by build tooling and tests without any GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`source`] | `ShaderSource` |
//! | [`error`] | `ParseError` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use chroma_shader::parse_str;
//!
//! let src = "\
//! #shader vertex
//! fn vs_main() {}
//! #shader fragment
//! fn fs_main() {}
//! ";
//!
//! let bundle = parse_str(src).unwrap();
//! assert_eq!(bundle.vertex, "fn vs_main() {}\n");
//! assert_eq!(bundle.fragment, "fn fs_main() {}\n");
//! ```

pub mod error;
pub mod parser;
pub mod source;

pub use error::ParseError;
pub use parser::parse_str;
pub use source::ShaderSource;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> ShaderSource { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test]
    fn minimal_bundle() {
        let b = ok("#shader vertex\nv\n#shader fragment\nf\n");
        assert_eq!(b.vertex, "v\n");
        assert_eq!(b.fragment, "f\n");
    }

    #[test]
    fn lines_kept_verbatim() {
        let b = ok("#shader vertex\n  indented // comment\n\n#shader fragment\nf\n");
        assert_eq!(b.vertex, "  indented // comment\n\n");
    }

    #[test]
    fn fragment_first() {
        let b = ok("#shader fragment\nf\n#shader vertex\nv\n");
        assert_eq!(b.vertex, "v\n");
        assert_eq!(b.fragment, "f\n");
    }

    #[test]
    fn interleaved_sections_concatenate() {
        let b = ok("#shader vertex\nv1\n#shader fragment\nf\n#shader vertex\nv2\n");
        assert_eq!(b.vertex, "v1\nv2\n");
    }

    #[test]
    fn marker_survives_indentation_and_trailing_words() {
        let b = ok("  #shader vertex stage\nv\n#shader fragment\nf\n");
        assert_eq!(b.vertex, "v\n");
    }

    #[test]
    fn blank_lines_before_first_marker() {
        ok("\n\n#shader vertex\nv\n#shader fragment\nf\n");
    }

    #[test]
    fn no_trailing_newline() {
        let b = ok("#shader vertex\nv\n#shader fragment\nf");
        assert_eq!(b.fragment, "f\n");
    }

    #[test] fn err_empty_input() { err(""); }
    #[test] fn err_missing_fragment() { err("#shader vertex\nv\n"); }
    #[test] fn err_marker_only_sections() { err("#shader vertex\n#shader fragment\n"); }
    #[test] fn err_unknown_section() { err("#shader geometry\ng\n"); }
    #[test] fn err_bare_marker() { err("#shader\nv\n"); }

    #[test]
    fn err_glued_marker() {
        // No token boundary after `#shader`: not a marker, so this is
        // content before the first marker.
        let e = err("#shadervertex\nv\n#shader fragment\nf\n");
        assert_eq!(e.line, 1);
    }

    #[test]
    fn glued_marker_inside_section_is_content() {
        let b = ok("#shader vertex\n#shadervertex\n#shader fragment\nf\n");
        assert_eq!(b.vertex, "#shadervertex\n");
    }

    #[test]
    fn err_content_before_marker_reports_line() {
        let e = err("\nstray\n#shader vertex\nv\n#shader fragment\nf\n");
        assert_eq!(e.line, 2);
    }

    #[test]
    fn err_unknown_section_reports_line() {
        let e = err("#shader vertex\nv\n#shader pixel\nf\n");
        assert_eq!(e.line, 3);
    }
}
