use std::{
    io::{Read as _, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};
use tracing::Level;

/// Glitch a PNG like a worn-out VHS tape.
///
/// Usage: `glitchtape [options] <input> <output>`, or `glitchtape [options] -` to read a PNG from
/// stdin and write the result to stdout.
#[derive(Parser, Debug)]
#[command(name = "glitchtape", version)]
struct Cli {
    /// Input PNG and output PNG, or `-` for stdin/stdout (anything after `-` is ignored).
    #[arg(value_name = "FILES", num_args = 1..=2)]
    files: Vec<String>,

    /// JSON parameter file; explicit flags override its values.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Dissolve blur strength.
    #[arg(long)]
    mag: Option<f64>,

    /// Average distorted block height.
    #[arg(long)]
    bheight: Option<u32>,

    /// Distorted block offset strength.
    #[arg(long)]
    boffset: Option<f64>,

    /// Distorted block stride strength.
    #[arg(long)]
    stride: Option<f64>,

    /// Per-channel scanline lag strength.
    #[arg(long)]
    lag: Option<f64>,

    /// Initial red scanline lag.
    #[arg(long, allow_hyphen_values = true)]
    lr: Option<f64>,

    /// Initial green scanline lag.
    #[arg(long, allow_hyphen_values = true)]
    lg: Option<f64>,

    /// Initial blue scanline lag.
    #[arg(long, allow_hyphen_values = true)]
    lb: Option<f64>,

    /// Std. dev. of red-blue channel offset (non-destructive).
    #[arg(long)]
    stdoffset: Option<f64>,

    /// Additional brightness (0-255).
    #[arg(long)]
    add: Option<u8>,

    /// Mean chromatic aberration offset.
    #[arg(long, allow_hyphen_values = true)]
    meanabber: Option<i32>,

    /// Std. dev. of chromatic aberration offset (lower values induce longer trails).
    #[arg(long)]
    stdabber: Option<f64>,

    /// Random seed; -1 derives it from the current time.
    #[arg(long, default_value_t = glitchtape::Seed::CLOCK_SENTINEL, allow_hyphen_values = true)]
    seed: i64,

    /// Convert non-RGBA inputs (gray, 16-bit, ...) instead of rejecting them.
    #[arg(long, default_value_t = false)]
    convert: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

enum Io {
    Pipe,
    Files { input: PathBuf, output: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let io = match cli.files.as_slice() {
        [pipe, ..] if pipe == "-" => Io::Pipe,
        [input, output] => Io::Files {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        },
        _ => {
            eprint!("{}", Cli::command().render_help());
            std::process::exit(2);
        }
    };

    let params = build_params(&cli)?;
    let mode = if cli.convert {
        glitchtape::DecodeMode::Convert
    } else {
        glitchtape::DecodeMode::Strict
    };

    let src = match &io {
        Io::Pipe => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("read png from stdin")?;
            glitchtape::decode_png(&bytes, mode)?
        }
        Io::Files { input, .. } => glitchtape::read_png(input, mode)?,
    };

    let (out, seed) = glitchtape::glitch(&src, &params, glitchtape::Seed::from_flag(cli.seed))?;
    tracing::info!(seed, width = out.width(), height = out.height(), "glitched image");

    match &io {
        Io::Pipe => {
            let bytes = glitchtape::encode_png(&out)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("write png to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
        Io::Files { output, .. } => {
            glitchtape::write_png(output, &out)?;
            tracing::info!("wrote {}", output.display());
        }
    }
    Ok(())
}

fn build_params(cli: &Cli) -> anyhow::Result<glitchtape::DistortionParameters> {
    let mut p = match &cli.params {
        Some(path) => glitchtape::DistortionParameters::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        None => glitchtape::DistortionParameters::default(),
    };

    if let Some(v) = cli.mag {
        p.blur_magnitude = v;
    }
    if let Some(v) = cli.bheight {
        p.block_height = v;
    }
    if let Some(v) = cli.boffset {
        p.block_offset_strength = v;
    }
    if let Some(v) = cli.stride {
        p.stride_magnitude = v;
    }
    if let Some(v) = cli.lag {
        p.scan_lag_strength = v;
    }
    if let Some(v) = cli.lr {
        p.initial_lag_r = v;
    }
    if let Some(v) = cli.lg {
        p.initial_lag_g = v;
    }
    if let Some(v) = cli.lb {
        p.initial_lag_b = v;
    }
    if let Some(v) = cli.stdoffset {
        p.nondestructive_offset_stddev = v;
    }
    if let Some(v) = cli.add {
        p.brighten_amount = v;
    }
    if let Some(v) = cli.meanabber {
        p.aberration_mean = v;
    }
    if let Some(v) = cli.stdabber {
        p.aberration_stddev = v;
    }
    Ok(p)
}
