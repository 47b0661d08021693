use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rosetta_pattern::{
    CoverRequest, DataUriEncoding, PatternConfig, PatternGenerator, cover_background, render_png,
};

#[derive(Parser, Debug)]
#[command(name = "rosetta-pattern", version)]
struct Cli {
    /// Log generation details to stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pattern as a data URI.
    Uri(UriArgs),
    /// Write the pattern as an SVG file.
    Svg(FileArgs),
    /// Rasterize the pattern to a PNG file.
    Png(PngArgs),
    /// Print inline CSS for a cover placeholder (applies the minimum size floor).
    Css(CssArgs),
}

#[derive(Args, Debug)]
struct PatternArgs {
    /// Seed text, typically the article title. Empty uses the fallback seed.
    #[arg(long, default_value = "")]
    seed: String,

    /// Width in px.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height in px.
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Pattern config JSON (defaults are used for missing keys).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct UriArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Emit a base64 data URI instead of percent-encoded UTF-8.
    #[arg(long)]
    base64: bool,
}

#[derive(Args, Debug)]
struct FileArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct CssArgs {
    #[command(flatten)]
    pattern: PatternArgs,

    /// Seed stored on the placeholder, used when `--seed` is empty.
    #[arg(long)]
    data_seed: Option<String>,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    file: FileArgs,

    /// Raster scale relative to the pattern size.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Uri(args) => cmd_uri(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Css(args) => cmd_css(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn make_generator(args: &PatternArgs) -> anyhow::Result<PatternGenerator> {
    let config = match &args.config {
        Some(path) => PatternConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PatternConfig::default(),
    };
    Ok(PatternGenerator::new(config)?)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn print_line(s: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{s}").context("write stdout")?;
    Ok(())
}

fn cmd_uri(args: UriArgs) -> anyhow::Result<()> {
    let encoding = if args.base64 {
        DataUriEncoding::Base64
    } else {
        DataUriEncoding::Utf8Percent
    };
    let p = &args.pattern;
    let generator = make_generator(p)?.with_encoding(encoding);
    print_line(&generator.generate(&p.seed, p.width, p.height))
}

fn cmd_svg(args: FileArgs) -> anyhow::Result<()> {
    let p = &args.pattern;
    let generator = make_generator(p)?;
    let svg = generator.generate_svg(&p.seed, p.width, p.height);

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let p = &args.file.pattern;
    let generator = make_generator(p)?;
    let svg = generator.generate_svg(&p.seed, p.width, p.height);
    let png = render_png(&svg, args.scale).context("rasterize pattern")?;

    let out = &args.file.out;
    ensure_parent_dir(out)?;
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let p = &args.pattern;
    let generator = make_generator(p)?;
    let request = CoverRequest::new(Some(p.seed.as_str()), p.width, p.height)
        .with_data_seed(args.data_seed.as_deref());
    let bg = cover_background(&generator, &request);
    if bg.image.is_none() {
        anyhow::bail!("pattern generation failed for seed {:?}", p.seed);
    }
    print_line(&bg.to_css())
}
