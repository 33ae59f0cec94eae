//! Chair configurator demo
//!
//! Runs a headless configurator session: the viewer is built inside an
//! in-memory page, a simulated shopper clicks swatches and flips the
//! accessory checkboxes about once a second, and the summary line is logged
//! whenever it changes.
//!
//! ```text
//! chair_configurator [CONFIG.toml|CONFIG.ron] [--frames N] [--seed N] [--write-config PATH]
//! ```

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};
use product_configurator::foundation::logging;
use product_configurator::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

const REFRESH_RATE: u32 = 60;
const DEFAULT_FRAMES: &str = "600";

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Configurator(#[from] ConfiguratorError),
}

fn cli() -> Command {
    Command::new("chair_configurator")
        .about("Runs a headless chair configurator session driven by a simulated shopper")
        .arg(
            Arg::new("config")
                .value_name("FILE")
                .help("Configuration file (.toml or .ron); defaults are used when omitted")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .help("Number of frames to simulate")
                .value_parser(value_parser!(u64))
                .default_value(DEFAULT_FRAMES),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the simulated shopper (random when omitted)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("write-config")
                .long("write-config")
                .value_name("FILE")
                .help("Save the effective configuration before the session starts")
                .value_parser(value_parser!(PathBuf)),
        )
}

#[derive(Debug)]
struct Options {
    config_path: Option<PathBuf>,
    write_config: Option<PathBuf>,
    frames: u64,
    seed: Option<u64>,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config_path: matches.get_one::<PathBuf>("config").cloned(),
            write_config: matches.get_one::<PathBuf>("write-config").cloned(),
            frames: matches.get_one::<u64>("frames").copied().unwrap_or_default(),
            seed: matches.get_one::<u64>("seed").copied(),
        }
    }
}

/// A page laid out like the product page: viewer, summary, checkboxes and one swatch per palette color
fn product_page(config: &ConfiguratorConfig) -> MemoryHost {
    let viewer = &config.viewer;
    PaletteColor::ALL
        .iter()
        .fold(MemoryHost::new(), |page, color| page.with_swatch(color.color().to_string()))
        .with_container(viewer.container_id.as_str(), 1280, 720)
        .with_text(viewer.summary_id.as_str())
        .with_checkbox(viewer.logo_toggle_id.as_str(), true)
        .with_checkbox(viewer.cushion_toggle_id.as_str(), true)
}

/// Flip a checkbox the way a click would and report its new state
fn click_checkbox(page: &mut MemoryHost, id: &str) -> bool {
    let checked = !page.is_checked(id).unwrap_or(false);
    page.set_checked(id, checked);
    checked
}

/// Simulated shopper picking a random interaction
fn random_event(rng: &mut StdRng, viewer: &mut Configurator<MemoryHost, HeadlessSurface>, config: &ConfiguratorConfig) -> UiEvent {
    let ids = &config.viewer;
    match rng.gen_range(0..5) {
        0 | 1 => {
            let swatches = viewer.host().swatches();
            swatches
                .choose(rng)
                .map_or(UiEvent::Resized, |swatch| UiEvent::ColorSelected(swatch.value.clone()))
        }
        2 => UiEvent::LogoToggled(click_checkbox(viewer.host_mut(), &ids.logo_toggle_id)),
        3 => UiEvent::CushionToggled(click_checkbox(viewer.host_mut(), &ids.cushion_toggle_id)),
        _ => UiEvent::PointerDrag {
            dx: rng.gen_range(-120.0..120.0),
            dy: rng.gen_range(-40.0..40.0),
        },
    }
}

fn run(options: Options) -> Result<(), AppError> {
    let config = match &options.config_path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            ConfiguratorConfig::load_from_file(path)?
        }
        None => ConfiguratorConfig::default(),
    };
    if let Some(path) = &options.write_config {
        config.save_to_file(path)?;
        log::info!("Configuration written to {}", path.display());
    }

    let mut rng = options.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut viewer = Configurator::new(&config, product_page(&config), HeadlessSurface::new())?;
    let mut clock = FrameClock::fixed_rate(REFRESH_RATE);
    let frames = options.frames;

    let mut last_summary = viewer.state().summary();
    log::info!("{}", last_summary);

    for frame in 1..=frames {
        if frame % u64::from(REFRESH_RATE) == 0 {
            let event = random_event(&mut rng, &mut viewer, &config);
            log::debug!("Frame {}: {:?}", frame, event);
            viewer.handle_event(event)?;
        }

        let report = viewer.frame(clock.tick())?;
        if report.frame % 300 == 0 {
            log::debug!("Yaw {:.3} rad, {} tweens running", report.yaw, report.active_animations);
        }

        let summary = viewer.state().summary();
        if summary != last_summary {
            log::info!("{}", summary);
            last_summary = summary;
        }
    }

    log::info!(
        "Session finished after {} frames ({:.1}s simulated): {}",
        clock.frame_count(),
        clock.total_time().as_secs_f32(),
        viewer.host().text(&config.viewer.summary_id).unwrap_or_default()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {panic_info}");
    }));

    logging::init();
    log::info!("Starting chair configurator demo");

    let options = Options::from_matches(&cli().get_matches());
    match run(options) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Chair configurator demo failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        let argv = std::iter::once("chair_configurator").chain(args.iter().copied());
        cli().try_get_matches_from(argv).map(|matches| Options::from_matches(&matches))
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_parse_options() {
        let options = parse(&["chair.toml", "--frames", "120", "-s", "7"]).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("chair.toml")));
        assert_eq!(options.frames, 120);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.write_config, None);
    }

    #[test]
    fn test_defaults_without_arguments() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.config_path, None);
        assert_eq!(options.frames, 600);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse(&["--frames", "many"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["--write-config"]).is_err());
    }

    #[test]
    fn test_click_checkbox_flips_state() {
        let mut page = MemoryHost::new().with_checkbox("logo-toggle", true);
        assert!(!click_checkbox(&mut page, "logo-toggle"));
        assert!(click_checkbox(&mut page, "logo-toggle"));
        assert_eq!(page.is_checked("logo-toggle"), Some(true));
    }

    #[test]
    fn test_seeded_session_runs() {
        let options = Options { config_path: None, write_config: None, frames: 240, seed: Some(42) };
        assert!(run(options).is_ok());
    }
}
