// SPDX-License-Identifier: MPL-2.0
use phishintel_overlay::config::{self, LoadedConfig};
use phishintel_overlay::detection::{self, DetectedBox, STATUS_OK};
use phishintel_overlay::domain::{OverlayTransform, Size};
use phishintel_overlay::error::{Error, Result};
use phishintel_overlay::overlay::{OverlayMeasurements, PlacedOverlay};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
phishintel-overlay: place detection boxes over a rendered screenshot

USAGE:
  phishintel-overlay --display WxH --container WxH [OPTIONS]

OPTIONS:
  --natural WxH      Natural screenshot size (omit while the image is loading)
  --display WxH      Rendered screenshot size
  --container WxH    Size of the element containing the screenshot
  --boxes FILE       Detection payload (JSON)
  --status CODE      HTTP status the payload was served with [default: 200]
  --config FILE      Settings file [default: platform config dir]
  --snap             Round overlays to whole pixels
  -h, --help         Print this help
";

struct Args {
    natural: Option<Size>,
    display: Size,
    container: Size,
    boxes: Option<PathBuf>,
    status: u16,
    config: Option<PathBuf>,
    snap: bool,
}

#[derive(Serialize)]
struct Report {
    transform: Option<TransformReport>,
    overlays: Vec<PlacedOverlay>,
}

#[derive(Serialize)]
struct TransformReport {
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
}

impl From<OverlayTransform> for TransformReport {
    fn from(t: OverlayTransform) -> Self {
        Self {
            scale_x: t.scale_x,
            scale_y: t.scale_y,
            offset_x: t.offset_x,
            offset_y: t.offset_y,
        }
    }
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        natural: args.opt_value_from_str("--natural")?,
        display: args.value_from_str("--display")?,
        container: args.value_from_str("--container")?,
        boxes: args.opt_value_from_os_str("--boxes", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        status: args.opt_value_from_str("--status")?.unwrap_or(STATUS_OK),
        config: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        snap: args.contains("--snap"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "unexpected arguments: {:?}",
            remaining
        )));
    }
    Ok(Some(parsed))
}

fn load_config(path: Option<&PathBuf>) -> Result<LoadedConfig> {
    match path {
        Some(path) => config::load_from_path_checked(path),
        None => config::load_checked(),
    }
}

fn load_boxes(path: Option<&PathBuf>, status: u16) -> Result<Vec<DetectedBox>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let body = fs::read(path)?;
    detection::parse_boxes_response(status, &body)
}

fn run(args: Args) -> Result<()> {
    let loaded = load_config(args.config.as_ref())?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(loaded.config.log_level()),
    )
    .init();
    loaded.report_fallback();
    let config = loaded.config;

    let mut options = config.overlay_options();
    options.snap_to_pixels |= args.snap;

    let boxes = load_boxes(args.boxes.as_ref(), args.status)?;
    let measurements = OverlayMeasurements::new(args.natural, args.display, args.container);
    if !measurements.is_ready() {
        log::info!("Screenshot not measurable yet; no overlays placed");
    }

    let report = Report {
        transform: measurements.transform().map(TransformReport::from),
        overlays: measurements.place_with(&boxes, &options),
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
