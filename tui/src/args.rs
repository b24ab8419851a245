//! Parsing command-line arguments.

use clap::{
    command,
    error::{Error, ErrorKind},
    value_parser, Arg, ArgMatches, Command,
};
use lifeloop_lib::{Config, Controller, TextFormat};
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) controller: Controller,
    pub(crate) generations: u64,
    pub(crate) format: TextFormat,
    #[cfg(feature = "tui")]
    pub(crate) paused: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let command = command!()
        .long_about(
            "A bounded Conway's Game of Life\n\
             \n\
             The grid is measured in pixels: it has width / cell-size rows \n\
             and height / cell-size columns, and does not wrap around. \n\
             It starts with a given number of randomly chosen living cells.\n\
             \n\
             Options given on the command line override those in the \n\
             configuration file, which override the defaults.\n\
             \n\
             Patterns are printed in a mix of Plaintext and RLE format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each line is ended with `$`;\n\
             * The whole pattern is ended with `!`.",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file")
                .long_help(
                    "Configuration file\n\
                     The format is chosen by the extension: \
                     .toml, .yaml, .yml or .json.\n\
                     Missing fields take their default values.",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the grid, in pixels [default: 800]")
                .short('W')
                .long("width")
                .value_name("PIXELS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the grid, in pixels [default: 600]")
                .short('H')
                .long("height")
                .value_name("PIXELS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("CELL")
                .help("Size of a cell, in pixels [default: 10]")
                .short('z')
                .long("cell-size")
                .value_name("PIXELS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("SEEDS")
                .help("Number of living cells in the first generation [default: 1234]")
                .short('n')
                .long("seed-count")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Interval between two generations, in milliseconds [default: 150]")
                .short('i')
                .long("interval")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton [default: B3/S23]")
                .long_help(
                    "Rule of the cellular automaton [default: B3/S23]\n\
                     Supports Life-like rules without B0.",
                )
                .short('r')
                .long("rule"),
        )
        .arg(
            Arg::new("RNGSEED")
                .help("Seed of the random number generator")
                .long_help(
                    "Seed of the random number generator\n\
                     Runs with the same seed start from the same generation.",
                )
                .short('s')
                .long("rng-seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run without the TUI")
                .short('g')
                .long("generations")
                .value_name("N")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Format of the printed pattern")
                .short('f')
                .long("format")
                .value_parser(["rle", "plaintext", "r", "p"])
                .default_value("rle"),
        );

    #[cfg(feature = "tui")]
    let command = command
        .arg(
            Arg::new("PAUSED")
                .help("Starts the TUI paused")
                .long("paused")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("NOTUI"),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Runs the given number of generations without entering the TUI")
                .long("no-tui")
                .action(clap::ArgAction::SetTrue),
        );

    command
}

/// Reads a configuration file, choosing the format by the extension.
pub(crate) fn load_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Unable to read '{}': {}", path.display(), e))?;
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        _ => {
            return Err(format!(
                "Unknown format of '{}'. Expected .toml, .yaml, .yml or .json",
                path.display()
            ))
        }
    };
    config.map_err(|e| format!("Invalid configuration in '{}': {}", path.display(), e))
}

/// Applies the options given on the command line to the configuration.
fn override_config(mut config: Config, matches: &ArgMatches) -> Config {
    if let Some(&width) = matches.get_one::<isize>("WIDTH") {
        config.width = width;
    }
    if let Some(&height) = matches.get_one::<isize>("HEIGHT") {
        config.height = height;
    }
    if let Some(&cell_size) = matches.get_one::<isize>("CELL") {
        config.cell_size = cell_size;
    }
    if let Some(&seed_count) = matches.get_one::<usize>("SEEDS") {
        config = config.set_seed_count(seed_count);
    }
    if let Some(&interval) = matches.get_one::<u64>("INTERVAL") {
        config = config.set_step_interval_ms(interval);
    }
    if let Some(rule_string) = matches.get_one::<String>("RULE") {
        config = config.set_rule_string(rule_string);
    }
    if let Some(&rng_seed) = matches.get_one::<u64>("RNGSEED") {
        config = config.set_rng_seed(rng_seed);
    }
    config
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the arguments from an iterator.
    pub(crate) fn parse_from<I, T>(itr: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(itr)?;

        let config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                load_config(path).map_err(|e| command.error(ErrorKind::Io, e))?
            }
            None => Config::default(),
        };
        let config = override_config(config, &matches);

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);
        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("plaintext") | Some("p") => TextFormat::Plaintext,
            _ => TextFormat::Rle,
        };
        #[cfg(feature = "tui")]
        let paused = matches.get_flag("PAUSED");
        #[cfg(feature = "tui")]
        let no_tui = matches.get_flag("NOTUI");

        let controller = config
            .controller()
            .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;

        Ok(Args {
            controller,
            generations,
            format,
            #[cfg(feature = "tui")]
            paused,
            #[cfg(feature = "tui")]
            no_tui,
        })
    }
}
