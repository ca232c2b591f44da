use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use chroma_engine::anim::BounceChannel;
use chroma_engine::core::{App, AppControl, FrameCtx};
use chroma_engine::device::GpuInit;
use chroma_engine::logging::{init_logging, LoggingConfig};
use chroma_engine::paint::Color;
use chroma_engine::render::QuadRenderer;
use chroma_engine::window::{Runtime, RuntimeConfig};
use chroma_shader::{parse_str, ShaderSource};

/// Shader bundle, read once at startup.
const SHADER_PATH: &str = "res/shaders/basic.shader";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let bundle = load_bundle()?;
    log::debug!("vertex shader source:\n{}", bundle.vertex);
    log::debug!("fragment shader source:\n{}", bundle.fragment);

    let app = QuadApp {
        quad: QuadRenderer::new(bundle.vertex, bundle.fragment),
        red: BounceChannel::new(0.5, 0.05),
        green: BounceChannel::new(0.9, 0.15),
        blue: BounceChannel::new(0.3, 0.20),
    };

    let config = RuntimeConfig {
        title: "chroma quad".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), app)
}

/// Reads and splits the shader bundle.
///
/// The path is tried relative to the working directory first, then relative
/// to this crate's manifest so `cargo run` works from the workspace root.
fn load_bundle() -> Result<ShaderSource> {
    let path = Path::new(SHADER_PATH);
    let path: PathBuf = if path.exists() {
        path.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(SHADER_PATH)
    };

    let src = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read shader bundle {}", path.display()))?;

    parse_str(&src).with_context(|| format!("failed to parse shader bundle {}", path.display()))
}

/// The animated quad demo: three independent bounce channels drive the
/// quad's uniform color, one step per presented frame.
struct QuadApp {
    quad: QuadRenderer,
    red: BounceChannel,
    green: BounceChannel,
    blue: BounceChannel,
}

impl App for QuadApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let r = self.red.tick();
        let g = self.green.tick();
        let b = self.blue.tick();
        log::trace!(
            "frame {}: r={r:.3} g={g:.3} b={b:.3}",
            ctx.time.frame_index
        );

        let color = Color::rgba(r, g, b, 1.0);
        let quad = &mut self.quad;

        ctx.render(Color::BLACK, |rctx, target| {
            quad.render(rctx, target, color);
        })
    }
}
