// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! Parses arguments with `pico-args` and runs one command against the
//! catalog, the viewer library or a headless playback session. Output goes
//! to any [`Write`] so commands can be exercised without a terminal.

use super::library::ViewerLibrary;
use crate::application::query::Catalog;
use crate::config::{Config, FEED_LIMIT, RELATED_VIDEOS_LIMIT};
use crate::domain::catalog::{format_view_count, Difficulty, Video, VideoFilter};
use crate::error::{Error, Result};
use crate::video_player::{create_headless_player, format_time};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Catalog used when neither `--catalog` nor the config names one.
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Number of progress reports printed during a headless playback session.
const PLAY_REPORTS: u32 = 4;

pub const HELP: &str = "\
codecast - browse the CodeCast catalog and drive a headless player

USAGE:
    codecast [OPTIONS] <COMMAND>

COMMANDS:
    search [--query Q] [--tag T]... [--category C] [--difficulty D]
    watch-later <VIDEO_ID>     Add or remove a video from watch later
    library                    List watch later and recently watched videos
    play <VIDEO_ID>            Run a headless playback session
    feed                       Show recent uploads and trending videos

OPTIONS:
    --catalog <PATH>           Catalog file (TOML)
    --data-dir <PATH>          Override the data directory
    --config-dir <PATH>        Override the config directory
    --verbose                  Enable debug logging
    -h, --help                 Print this help
";

/// What to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(VideoFilter),
    WatchLater { video_id: String },
    Library,
    Play { video_id: String },
    Feed,
    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    pub verbose: bool,
    pub catalog: Option<PathBuf>,
    pub command: Command,
}

/// Parses the process arguments (without the program name).
///
/// # Errors
///
/// Returns [`Error::Usage`] for unknown commands, missing values or leftover
/// arguments.
pub fn parse(mut args: pico_args::Arguments) -> Result<CliArgs> {
    let help = args.contains(["-h", "--help"]);
    let verbose = args.contains("--verbose");
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let catalog = args.opt_value_from_str("--catalog")?;

    if help {
        return Ok(CliArgs {
            data_dir,
            config_dir,
            verbose,
            catalog,
            command: Command::Help,
        });
    }

    let command = match args.subcommand()?.as_deref() {
        Some("search") => {
            let mut filter = VideoFilter::new();
            if let Some(query) = args.opt_value_from_str::<_, String>("--query")? {
                filter = filter.with_query(query);
            }
            for tag in args.values_from_str::<_, String>("--tag")? {
                filter = filter.with_tag(tag);
            }
            if let Some(category) = args.opt_value_from_str::<_, String>("--category")? {
                filter = filter.with_category(category);
            }
            if let Some(difficulty) = args.opt_value_from_str::<_, Difficulty>("--difficulty")? {
                filter = filter.with_difficulty(difficulty);
            }
            Command::Search(filter)
        }
        Some("watch-later") => Command::WatchLater {
            video_id: args.free_from_str()?,
        },
        Some("library") => Command::Library,
        Some("play") => Command::Play {
            video_id: args.free_from_str()?,
        },
        Some("feed") => Command::Feed,
        Some(other) => return Err(Error::Usage(format!("unknown command '{other}'"))),
        None => Command::Help,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!(
            "unexpected arguments: {}",
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        )));
    }

    Ok(CliArgs {
        data_dir,
        config_dir,
        verbose,
        catalog,
        command,
    })
}

/// Loads the catalog named on the command line, else the configured one,
/// else the bundled sample.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn load_catalog(cli_path: Option<&Path>, config: &Config) -> Result<Catalog> {
    match catalog_path(cli_path, config) {
        Some(path) => {
            log::debug!("loading catalog from {}", path.display());
            Catalog::load_from_path(path)
        }
        None => Catalog::from_toml_str(BUNDLED_CATALOG),
    }
}

/// Catalog file in use, or `None` for the bundled sample.
fn catalog_path<'a>(cli_path: Option<&'a Path>, config: &'a Config) -> Option<&'a Path> {
    cli_path.or(config.catalog.path.as_deref())
}

/// Runs the parsed command.
///
/// Library commands read and write the data directory resolved by
/// `library_dir` (`None` uses the default resolution). `play` counts a view
/// and writes it back when the catalog came from a file.
///
/// # Errors
///
/// Returns an error for unknown video ids, unreadable catalogs and failed
/// writes to `out`.
pub fn run<W: Write>(
    args: &CliArgs,
    config: &Config,
    library_dir: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    if args.command == Command::Help {
        write!(out, "{HELP}")?;
        return Ok(());
    }

    let mut catalog = load_catalog(args.catalog.as_deref(), config)?;
    match &args.command {
        Command::Search(filter) => search(&catalog, filter, out),
        Command::WatchLater { video_id } => {
            let video = find(&catalog, video_id)?;
            let (mut library, warning) = ViewerLibrary::load_from(library_dir.clone());
            report_warning(warning);
            let added = library.toggle_watch_later(&video.id);
            report_warning(library.save_to(library_dir));
            let (verb, preposition) = if added {
                ("Added", "to")
            } else {
                ("Removed", "from")
            };
            writeln!(out, "{verb} \"{}\" {preposition} watch later", video.title)?;
            Ok(())
        }
        Command::Library => {
            let (library, warning) = ViewerLibrary::load_from(library_dir);
            report_warning(warning);
            writeln!(out, "Watch later:")?;
            print_list(&library.watch_later_videos(&catalog), out)?;
            writeln!(out, "Recently watched:")?;
            print_list(&library.recently_watched_videos(&catalog), out)?;
            Ok(())
        }
        Command::Play { video_id } => {
            let video = find(&catalog, video_id)?.clone();
            play(&video, config, out)?;
            let views = catalog
                .increment_view(&video.id)
                .unwrap_or(video.view_count);
            writeln!(out, "{} views", format_view_count(views))?;
            if let Some(path) = catalog_path(args.catalog.as_deref(), config) {
                if let Err(err) = catalog.save_to_path(path) {
                    log::warn!("view count not saved to {}: {err}", path.display());
                }
            }
            writeln!(out, "Up next:")?;
            print_list(&catalog.related(&video.id, RELATED_VIDEOS_LIMIT), out)?;

            let (mut library, warning) = ViewerLibrary::load_from(library_dir.clone());
            report_warning(warning);
            library.record_watched(&video.id);
            report_warning(library.save_to(library_dir));
            Ok(())
        }
        Command::Feed => {
            writeln!(out, "Recent uploads:")?;
            print_list(&catalog.recent(FEED_LIMIT), out)?;
            writeln!(out, "Trending:")?;
            print_list(&catalog.trending(FEED_LIMIT), out)?;
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn find<'a>(catalog: &'a Catalog, video_id: &str) -> Result<&'a Video> {
    catalog
        .get(video_id)
        .ok_or_else(|| Error::Catalog(format!("unknown video id '{video_id}'")))
}

fn report_warning(warning: Option<String>) {
    if let Some(key) = warning {
        log::warn!("library: {key}");
    }
}

fn search<W: Write>(catalog: &Catalog, filter: &VideoFilter, out: &mut W) -> Result<()> {
    let results = catalog.filter(filter);
    if filter.is_active() {
        writeln!(
            out,
            "{} of {} videos match {} filter(s)",
            results.len(),
            catalog.len(),
            filter.active_count()
        )?;
    }
    print_list(&results, out)
}

fn print_list<W: Write>(videos: &[&Video], out: &mut W) -> Result<()> {
    if videos.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for video in videos {
        writeln!(
            out,
            "  {:<20} {} [{}] {} · {} views · {}",
            video.id,
            video.title,
            video.difficulty,
            video.category,
            format_view_count(video.view_count),
            format_time(video.duration_secs)
        )?;
    }
    Ok(())
}

/// Plays `video` to the end on the headless adapters, printing progress.
fn play<W: Write>(video: &Video, config: &Config, out: &mut W) -> Result<()> {
    let mut player = create_headless_player(video.duration_secs, config);
    player.load(&video.video_url);
    player.media_mut().complete_metadata();
    player.pump_events();
    writeln!(out, "Playing \"{}\" ({:?})", video.title, player.status())?;

    player.toggle_playback();
    player.notify_activity();
    player.pump_events();

    let step = if video.duration_secs.is_finite() && video.duration_secs > 0.0 {
        video.duration_secs / f64::from(PLAY_REPORTS)
    } else {
        player.settings().skip_step.value()
    };
    let elapsed = Duration::try_from_secs_f64(step).unwrap_or_default();

    for _ in 0..PLAY_REPORTS {
        player.media_mut().advance(step);
        for timer in player.scheduler_mut().advance(elapsed) {
            player.on_inactivity_timeout(timer);
        }
        player.pump_events();

        let state = player.state();
        writeln!(
            out,
            "  {} / {}  {:?}  controls {}",
            format_time(state.current_time),
            format_time(state.duration),
            player.status(),
            if state.is_controls_visible { "shown" } else { "hidden" }
        )?;
        if !state.is_playing {
            break;
        }
    }

    player.teardown();
    log::debug!(
        "session recorded {} player actions",
        player.diagnostics().total_logged()
    );
    Ok(())
}
