mod reports;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use inherit_core::{
    EmbeddedRules, FileRules, HeightValue, ParentSelection, TraitEstimator, TraitRequest, bundle,
    is_supported, locales,
};
use reports::{
    EstimateReport, generate_audit_console, generate_audit_markdown, generate_estimate_console,
    generate_estimate_markdown, generate_json_report, generate_sources_console,
    generate_sources_markdown, insufficient_count,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    /// Expected boy
    Male,
    /// Expected girl
    Female,
}

#[derive(Debug, Parser)]
#[command(name = "inherit", version)]
#[command(
    about = "Estimate a child's probable eye color, hair color, skin tone and height from the parents' traits"
)]
struct Args {
    /// Mother's eye color (brown, blue, green, hazel)
    #[arg(long)]
    mother_eye: Option<String>,

    /// Father's eye color (brown, blue, green, hazel)
    #[arg(long)]
    father_eye: Option<String>,

    /// Mother's hair color (black, brown, blonde, red)
    #[arg(long)]
    mother_hair: Option<String>,

    /// Father's hair color (black, brown, blonde, red)
    #[arg(long)]
    father_hair: Option<String>,

    /// Mother's skin tone (light/fair, medium, dark)
    #[arg(long)]
    mother_skin: Option<String>,

    /// Father's skin tone (light/fair, medium, dark)
    #[arg(long)]
    father_skin: Option<String>,

    /// Mother's height in cm; unusable values fall back to 165
    #[arg(long)]
    mother_height: Option<String>,

    /// Father's height in cm; unusable values fall back to 175
    #[arg(long)]
    father_height: Option<String>,

    /// Expected sex of the child
    #[arg(long, value_enum)]
    child_sex: Option<SexArg>,

    /// Language used for rendered results
    #[arg(long, default_value = "en", value_parser = parse_lang)]
    lang: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rule book JSON to use instead of the embedded tables
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Audit the rule tables instead of estimating
    #[arg(long)]
    audit: bool,

    /// List the medical references and exit
    #[arg(long)]
    list_sources: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_lang(raw: &str) -> Result<String, String> {
    if is_supported(raw) {
        return Ok(raw.to_string());
    }
    let codes: Vec<&str> = locales().iter().map(|meta| meta.code).collect();
    Err(format!("unsupported language {raw:?}; expected one of {}", codes.join(", ")))
}

impl Args {
    fn to_request(&self) -> TraitRequest {
        TraitRequest {
            mother: ParentSelection {
                eye: self.mother_eye.clone(),
                hair: self.mother_hair.clone(),
                skin: self.mother_skin.clone(),
                height_cm: self.mother_height.clone().map(HeightValue::Text),
            },
            father: ParentSelection {
                eye: self.father_eye.clone(),
                hair: self.father_hair.clone(),
                skin: self.father_skin.clone(),
                height_cm: self.father_height.clone().map(HeightValue::Text),
            },
            child_is_male: self.child_sex.map(|sex| sex == SexArg::Male),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_sources(&args)? {
        return Ok(());
    }

    let estimator = load_estimator(&args)?;
    if args.audit {
        return run_audit(&args, &estimator);
    }
    run_estimate(&args, &estimator)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn maybe_list_sources(args: &Args) -> Result<bool> {
    if !args.list_sources {
        return Ok(false);
    }
    let bundle = bundle(&args.lang);
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => generate_json_report(&mut output_target, inherit_core::references())?,
        "markdown" => generate_sources_markdown(&mut output_target, bundle)?,
        _ => generate_sources_console(&mut output_target, bundle)?,
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn load_estimator(args: &Args) -> Result<TraitEstimator> {
    if let Some(path) = &args.rules {
        log::info!("loading rule book from {}", path.display());
        TraitEstimator::from_loader(&FileRules::new(path))
            .with_context(|| format!("failed to load rules from {}", path.display()))
    } else {
        Ok(TraitEstimator::from_loader(&EmbeddedRules)?)
    }
}

fn run_audit(args: &Args, estimator: &TraitEstimator) -> Result<()> {
    let report = estimator.audit();
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => generate_json_report(&mut output_target, &report)?,
        "markdown" => generate_audit_markdown(&mut output_target, &report)?,
        _ => generate_audit_console(&mut output_target, &report)?,
    }
    output_target.flush_inner()?;
    if !report.passed() {
        bail!("rule table audit failed");
    }
    Ok(())
}

fn run_estimate(args: &Args, estimator: &TraitEstimator) -> Result<()> {
    let request = args.to_request();
    let result = estimator
        .estimate_request(&request)
        .context("invalid parent selection")?;
    log::debug!(
        "{} of 3 categorical traits lack an authored rule",
        insufficient_count(&result)
    );

    let bundle = bundle(&args.lang);
    let report = EstimateReport::new(result, bundle);
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => generate_json_report(&mut output_target, &report)?,
        "markdown" => generate_estimate_markdown(&mut output_target, &report, bundle)?,
        _ => generate_estimate_console(&mut output_target, &report, bundle)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
