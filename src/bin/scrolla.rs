use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrolla", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the palette derived from a concept.
    Palette(PaletteArgs),
    /// Print the seeded scalar for a concept and index.
    Random(RandomArgs),
    /// Generate one art recipe as SVG or PNG.
    Art(ArtArgs),
    /// Render a full card for one atom of a feed.
    Card(CardArgs),
    /// Report type distribution, duplicates and length outliers of a feed.
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    concept: String,

    /// Emit JSON instead of CSS lines.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RandomArgs {
    concept: String,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    index: i64,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path; `.png` is rasterized, anything else is written as SVG.
    #[arg(long)]
    out: PathBuf,

    /// Raster edge length in pixels (defaults to SCROLLA_SIZE_PX or 400).
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Parser, Debug)]
struct ArtArgs {
    /// Recipe name (e.g. `fractal_tree`); picked at random when omitted.
    #[arg(long)]
    recipe: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Derive the seed from this concept's hash when `--seed` is not given.
    #[arg(long)]
    concept: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Atom feed JSON.
    #[arg(long)]
    feed: PathBuf,

    /// Position in the ordered feed (0-based).
    #[arg(long)]
    index: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the card plan as JSON.
    #[arg(long)]
    plan: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Atom feed JSON.
    #[arg(long)]
    feed: PathBuf,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Palette(args) => cmd_palette(args),
        Command::Random(args) => cmd_random(args),
        Command::Art(args) => cmd_art(args),
        Command::Card(args) => cmd_card(args),
        Command::Analyze(args) => cmd_analyze(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> Box<dyn scrolla::RandomSource> {
    match seed {
        Some(seed) => Box::new(scrolla::SplitMix64::new(seed)),
        None => Box::new(scrolla::EntropyRandom::new()),
    }
}

fn settings_for(size: Option<u32>) -> anyhow::Result<scrolla::RenderSettings> {
    let mut settings = scrolla::RenderSettings::from_env();
    if let Some(size) = size {
        settings = settings.with_size(size);
    }
    settings.validate()?;
    Ok(settings)
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let palette = scrolla::concept_palette(&args.concept);
    if args.json {
        let json = serde_json::to_string_pretty(&palette).context("serialize palette")?;
        println!("{json}");
        return Ok(());
    }
    let hues = scrolla::ConceptHues::of(&args.concept);
    println!("hash: {}", scrolla::concept_hash(&args.concept));
    println!("hues: {} / {} / {}", hues.hue, hues.hue2, hues.hue3);
    for (key, css) in palette.css_entries() {
        println!("{key:<10} {css}");
    }
    Ok(())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    println!("{}", scrolla::seeded_random(&args.concept, args.index));
    Ok(())
}

fn cmd_art(args: ArtArgs) -> anyhow::Result<()> {
    let settings = settings_for(args.output.size)?;
    let seed = args
        .seed
        .or_else(|| args.concept.as_deref().map(|c| u64::from(scrolla::concept_hash(c))));
    let mut rng = make_rng(seed);

    let recipe = match args.recipe.as_deref() {
        Some(name) => name.parse::<scrolla::Recipe>()?,
        None => scrolla::Recipe::choose(rng.as_mut()),
    };
    let art = recipe.generate(rng.as_mut());
    let svg = scrolla::to_svg(&art, &scrolla::SvgOptions::from(&settings));
    write_output(&args.output.out, &svg, &settings)?;

    eprintln!("{recipe}: wrote {}", args.output.out.display());
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let settings = settings_for(args.output.size)?;
    let feed = scrolla::AtomFeed::load(&args.feed)?;
    let ordered = feed.ordered();
    let atom = ordered.get(args.index).with_context(|| {
        format!(
            "index {} out of range: feed has {} atoms",
            args.index,
            ordered.len()
        )
    })?;

    let mut rng = make_rng(args.seed);
    let plan = scrolla::CardPlan::new(atom, args.index, ordered.len(), rng.as_mut());
    if args.plan {
        let json = serde_json::to_string_pretty(&plan).context("serialize card plan")?;
        println!("{json}");
    }
    let svg = plan.to_svg(&settings, rng.as_mut());
    write_output(&args.output.out, &svg, &settings)?;

    eprintln!("{} ({}): wrote {}", atom.id, plan.counter, args.output.out.display());
    Ok(())
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let feed = scrolla::AtomFeed::load(&args.feed)?;
    let report = scrolla::FeedReport::analyze(&feed);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

fn write_output(out: &Path, svg: &str, settings: &scrolla::RenderSettings) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let is_png = out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()));
    }

    let img = scrolla::rasterize(svg, settings)?;
    image::save_buffer_with_format(
        out,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
