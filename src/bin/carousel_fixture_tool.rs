use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use carousel_rs::api::{Carousel, CarouselConfig, StoredSnapshot};
use carousel_rs::core::Slide;
use carousel_rs::interaction::Key;
use carousel_rs::render::HtmlRenderer;
use serde::Deserialize;

const FIXTURE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    snapshot_output: Option<PathBuf>,
    html_output: Option<PathBuf>,
    expected_snapshot: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct CarouselFixture {
    schema_version: u32,
    config: CarouselConfig,
    slides: Vec<String>,
    #[serde(default)]
    steps: Vec<FixtureStep>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum FixtureStep {
    Next,
    Prev,
    GoToItem { index: i64 },
    ClickNext,
    ClickPrev,
    ClickPagination { page: usize },
    Resize { width: u32 },
    Focus,
    Blur,
    KeyUp { key: String },
    AdvanceAutoplay { ms: u64 },
    StopAutoplay,
    StartAutoplay,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let fixture: CarouselFixture =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    if fixture.schema_version != FIXTURE_SCHEMA_VERSION {
        return Err(format!(
            "unsupported fixture schema version: {}",
            fixture.schema_version
        ));
    }

    let slides = fixture.slides.into_iter().map(Slide::from).collect();
    let mut carousel = Carousel::new(HtmlRenderer::default(), slides, fixture.config)
        .map_err(|err| format!("failed to build carousel: {err}"))?;

    for (position, step) in fixture.steps.iter().enumerate() {
        apply_step(&mut carousel, step).map_err(|err| format!("step {position}: {err}"))?;
    }

    let snapshot = carousel
        .stored_snapshot_json()
        .map_err(|err| err.to_string())?;
    match &args.snapshot_output {
        Some(path) => write_output(path, &snapshot)?,
        None => println!("{snapshot}"),
    }

    if let Some(path) = &args.html_output {
        carousel.render().map_err(|err| err.to_string())?;
        write_output(path, carousel.renderer().markup())?;
    }

    if let Some(path) = &args.expected_snapshot {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
        let expected = StoredSnapshot::from_json_str(&raw).map_err(|err| err.to_string())?;
        carousel
            .verify_snapshot(&expected.snapshot)
            .map_err(|err| format!("`{}`: {err}", path.display()))?;
    }

    Ok(())
}

fn apply_step(carousel: &mut Carousel<HtmlRenderer>, step: &FixtureStep) -> Result<(), String> {
    match step {
        FixtureStep::Next => {
            carousel.next();
        }
        FixtureStep::Prev => {
            carousel.prev();
        }
        FixtureStep::GoToItem { index } => {
            carousel.go_to_item(*index);
        }
        FixtureStep::ClickNext => {
            carousel.click_next().map_err(|err| err.to_string())?;
        }
        FixtureStep::ClickPrev => {
            carousel.click_prev().map_err(|err| err.to_string())?;
        }
        FixtureStep::ClickPagination { page } => {
            carousel
                .click_pagination(*page)
                .map_err(|err| err.to_string())?;
        }
        FixtureStep::Resize { width } => {
            carousel.resize(*width).map_err(|err| err.to_string())?;
        }
        FixtureStep::Focus => carousel.focus(),
        FixtureStep::Blur => carousel.blur(),
        FixtureStep::KeyUp { key } => {
            carousel.key_up(&Key::from_dom_key(key));
        }
        FixtureStep::AdvanceAutoplay { ms } => {
            carousel.advance_autoplay(Duration::from_millis(*ms));
        }
        FixtureStep::StopAutoplay => {
            carousel.stop_autoplay();
        }
        FixtureStep::StartAutoplay => {
            carousel.start_autoplay().map_err(|err| err.to_string())?;
        }
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut snapshot_output: Option<PathBuf> = None;
    let mut html_output: Option<PathBuf> = None;
    let mut expected_snapshot: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_owned())?;
                snapshot_output = Some(PathBuf::from(value));
            }
            "--html" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --html".to_owned())?;
                html_output = Some(PathBuf::from(value));
            }
            "--expect" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --expect".to_owned())?;
                expected_snapshot = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin carousel_fixture_tool -- --input <fixture.json> [--snapshot <path>] [--html <path>] [--expect <snapshot.json>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| "missing required --input <path>".to_owned())?,
        snapshot_output,
        html_output,
        expected_snapshot,
    })
}
