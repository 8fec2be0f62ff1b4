use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "panofold", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a sphere net (orange-peel gores) as a PNG.
    Sphere(SphereArgs),
    /// Render a cube cross net with cut and fold lines as a PNG.
    Cube(CubeArgs),
    /// Print where gores or faces land on the page, as JSON.
    Layout(LayoutArgs),
    /// Print assembly steps for a printed net.
    Instructions(InstructionsArgs),
}

#[derive(Parser, Debug)]
struct RenderOpts {
    /// Input equirectangular panorama (PNG, JPEG, WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path. Defaults to `<shape>-to-print.png` in the working directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render rows in parallel. Also enabled by PANOFOLD_PARALLEL=1.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only). Also read from PANOFOLD_THREADS.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SphereArgs {
    #[command(flatten)]
    render: RenderOpts,

    /// Number of gores around the equator.
    #[arg(long, default_value_t = panofold::DEFAULT_GORE_COUNT)]
    gores: u32,
}

#[derive(Parser, Debug)]
struct CubeArgs {
    #[command(flatten)]
    render: RenderOpts,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[arg(long, value_enum)]
    shape: ShapeChoice,

    /// Number of gores (sphere only).
    #[arg(long, default_value_t = panofold::DEFAULT_GORE_COUNT)]
    gores: u32,
}

#[derive(Parser, Debug)]
struct InstructionsArgs {
    #[arg(long, value_enum)]
    shape: ShapeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Sphere,
    Cube,
}

impl ShapeChoice {
    fn request(self, gores: u32) -> panofold::ProjectionRequest {
        match self {
            ShapeChoice::Sphere => panofold::ProjectionRequest::sphere(gores),
            ShapeChoice::Cube => panofold::ProjectionRequest::Cube,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sphere(args) => cmd_render(
            args.render,
            panofold::ProjectionRequest::sphere(args.gores),
        ),
        Command::Cube(args) => cmd_render(args.render, panofold::ProjectionRequest::Cube),
        Command::Layout(args) => cmd_layout(args),
        Command::Instructions(args) => cmd_instructions(args),
    }
}

fn settings_for(opts: &RenderOpts) -> panofold::NetSettings {
    let mut threading = panofold::RenderThreading::from_env();
    threading.parallel |= opts.parallel;
    if opts.threads.is_some() {
        threading.threads = opts.threads;
    }
    panofold::NetSettings {
        threading,
        ..panofold::NetSettings::default()
    }
}

fn cmd_render(opts: RenderOpts, request: panofold::ProjectionRequest) -> anyhow::Result<()> {
    let source = panofold::load_source(&opts.in_path)
        .with_context(|| format!("load panorama '{}'", opts.in_path.display()))?;
    let settings = settings_for(&opts);

    let frame = panofold::render_net_frame(&source, request, &settings)?;

    let out = opts
        .out
        .unwrap_or_else(|| PathBuf::from(request.shape().default_output_name()));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(Path::new(&out))?;

    eprintln!(
        "wrote {} ({}x{}, fingerprint {:016x})",
        out.display(),
        frame.width,
        frame.height,
        frame.fingerprint()
    );
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let layout = panofold::NetLayout::for_request(args.shape.request(args.gores))?;
    println!("{}", layout.to_json_pretty()?);
    Ok(())
}

fn cmd_instructions(args: InstructionsArgs) -> anyhow::Result<()> {
    let shape = args.shape.request(panofold::DEFAULT_GORE_COUNT).shape();
    println!("{}", panofold::assembly_guide(shape));
    Ok(())
}
