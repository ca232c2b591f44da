// ── ShaderSource ──────────────────────────────────────────────────────────

/// The two program stages recovered from one shader bundle file.
///
/// Both strings are the bundle lines reproduced verbatim (newline-terminated),
/// ready to hand to a shader compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}
