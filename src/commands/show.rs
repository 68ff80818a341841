//! Show command implementation

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::Result;
use crate::format::Key;
use crate::overview::{format_json, format_tree, Overview, OverviewState};
use crate::system::{Selection, SelectionRef};

use super::{load, resolve_key};

/// Widget state from the config's `[overview]` section with flags applied.
pub fn initial_state(args: &ShowArgs, config: &Config) -> OverviewState {
    let mut state = config.overview.initial_state();
    if let Some(filter) = &args.filter {
        state.filter = filter.clone();
    }
    if args.no_moons {
        state.show_moons = false;
    }
    if args.no_stations {
        state.show_stations = false;
    }
    if let Some(sort) = args.sort {
        state.sort_mode = sort;
    }
    state
}

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let loaded = load(args.system.as_deref())?;
    let system = &loaded.system;

    let selection = args
        .select
        .iter()
        .map(|key| resolve_key(system, key).map(SelectionRef::Body))
        .collect::<Result<Selection>>()?;
    let root = args
        .root
        .as_deref()
        .map(|key| resolve_key(system, key))
        .transpose()?;

    let state = initial_state(&args, config);
    tracing::info!(system = system.name(), ?state, "Showing system");

    let overview = Overview::new(system, loaded.space.as_ref(), &config.strings);
    let output = if args.json {
        format_json(&overview, &state, root, &selection, true)?
    } else {
        let tree = format_tree(&overview, &state, root, &selection);
        if tree.is_empty() {
            config.strings.get(Key::NoMatches).to_string()
        } else {
            tree.trim_end().to_string()
        }
    };

    println!("{}", output);
    Ok(())
}
