//! Replays window commands against a layout snapshot and prints where focus lands.
//!
//! Usage: panenav [--extended] <layout.json> <step>...
//!
//! A step is a key sequence in vim notation (`<C-W>l`, `<C-W><Down>`), a direction
//! (`left`, `down`, or `h`/`j`/`k`/`l`), one of `next`, `prev`, or a 1-based split number.

use std::io;
use std::path::PathBuf;

use panenav::core::Key;
use panenav::kernel::nav::{
    navigate_direction, select_next_window, select_previous_window, select_window,
};
use panenav::kernel::services::adapters::{
    ensure_settings_file, load_settings, parse_key_sequence, ConfigService, SnapshotWorkspace,
};
use panenav::kernel::{ChordDispatcher, ChordOutcome, NavDirection};

mod logging;

struct Args {
    extended: bool,
    layout: PathBuf,
    steps: Vec<String>,
}

fn parse_args() -> io::Result<Args> {
    let mut extended = false;
    let mut layout = None;
    let mut steps = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--extended" {
            extended = true;
        } else if layout.is_none() {
            layout = Some(PathBuf::from(arg));
        } else {
            steps.push(arg);
        }
    }
    let layout = layout.ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: panenav [--extended] <layout.json> <step>...",
        )
    })?;
    Ok(Args {
        extended,
        layout,
        steps,
    })
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }
    let args = parse_args()?;
    if let Err(error) = ensure_settings_file() {
        tracing::warn!(error = %error, "settings file unavailable, using defaults");
    }

    let json = std::fs::read_to_string(&args.layout)?;
    let mut workspace = SnapshotWorkspace::from_json(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut config = load_settings()
        .map(|settings| ConfigService::from_settings(&settings))
        .unwrap_or_default();
    if args.extended {
        config.set_extended_navigation(true);
    }
    let mut chords = ChordDispatcher::new(config.chords());

    println!("focus: {}", workspace.focus_label());
    for step in &args.steps {
        let moved = match step.as_str() {
            "next" => select_next_window(&mut workspace),
            "prev" => select_previous_window(&mut workspace),
            _ => match (step.parse::<usize>(), NavDirection::parse(step)) {
                (Ok(n), _) => select_window(&mut workspace, n),
                (Err(_), Some(direction)) => move_focus(&mut workspace, &config, direction),
                (Err(_), None) => run_keys(&mut workspace, &mut chords, &config, step),
            },
        };
        let marker = if moved { "->" } else { "==" };
        println!("{step:>14} {marker} {}", workspace.focus_label());
    }
    Ok(())
}

fn run_keys(
    workspace: &mut SnapshotWorkspace,
    chords: &mut ChordDispatcher,
    config: &ConfigService,
    step: &str,
) -> bool {
    let Some(keys) = parse_key_sequence(step) else {
        eprintln!("cannot parse keys: {step}");
        return false;
    };
    let mut moved = false;
    for key in keys {
        match chords.handle_key(key) {
            ChordOutcome::Matched(direction) => moved |= move_focus(workspace, config, direction),
            ChordOutcome::Invalid => eprintln!("invalid window command: {step}"),
            ChordOutcome::PassThrough => ignored(key),
            ChordOutcome::Pending | ChordOutcome::Cancelled => {}
        }
    }
    moved
}

fn move_focus(
    workspace: &mut SnapshotWorkspace,
    config: &ConfigService,
    direction: NavDirection,
) -> bool {
    let caret = workspace.current_caret();
    navigate_direction(workspace, caret.as_ref(), direction, config.navigation())
}

fn ignored(key: Key) {
    tracing::debug!(?key, "key outside a window chord ignored");
}
