// SPDX-License-Identifier: MPL-2.0
use danny_slider::app::{self, Flags};
use danny_slider::config;
use danny_slider::markup::load_page;
use danny_slider::{install, RenderPlan, SliderRegistry};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: danny-slider <page.html> [--width <px>] [--dump] [--config-dir <dir>]

Options:
  --width <px>          Initial viewport width
  --dump                Print every slider's render plan as TOML and exit
  --config-dir <dir>    Directory holding settings.toml
  -h, --help            Show this help";

struct Args {
    page: PathBuf,
    width: Option<f32>,
    dump: bool,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let width = args.opt_value_from_str("--width")?;
    let dump = args.contains("--dump");
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let page = args.free_from_str()?;
    Ok(Some(Args {
        page,
        width,
        dump,
        config_dir,
    }))
}

#[derive(Serialize)]
struct Dump {
    slider: Vec<RenderPlan>,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    config::init_cli_override(args.config_dir.clone());
    let (config, warning) = config::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter_or_default().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let page = match load_page(&args.page) {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(path = %args.page.display(), error = %err, "failed to load page");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        path = %args.page.display(),
        sliders = page.sliders.len(),
        "page loaded"
    );

    if args.dump {
        let width = args
            .width
            .or(config.window.width)
            .unwrap_or(config::DEFAULT_WINDOW_WIDTH);
        let mut registry = SliderRegistry::new();
        install().init(&mut registry, &page, width, Instant::now());
        let dump = Dump {
            slider: registry.plans(),
        };
        return match toml::to_string(&dump) {
            Ok(output) => {
                print!("{output}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize render plans");
                ExitCode::FAILURE
            }
        };
    }

    let flags = Flags {
        page_path: args.page,
        page,
        config,
        width: args.width,
    };
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "window closed with an error");
            ExitCode::FAILURE
        }
    }
}
