use std::path::PathBuf;

use clap::ArgMatches;
use log::{Level, info};
use plainppm::Transform;

use crate::cli::cmd_args::TransformName;

#[derive(Debug, Clone)]
pub(crate) struct CmdOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transform: Option<Transform>,
    pub strict: bool,
    pub lenient: bool,
    pub max_width: u64,
    pub max_height: u64,
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub(crate) fn parse_options(options: &ArgMatches) -> CmdOptions {
    // Required or defaulted in `create_cmd_args`, so always present.
    let input = options.get_one::<PathBuf>("in").cloned().unwrap_or_default();
    let output = options.get_one::<PathBuf>("out").cloned().unwrap_or_default();
    let name = options
        .get_one::<TransformName>("transform")
        .copied()
        .unwrap_or(TransformName::Unchanged);
    // Only read for flatten-color, where clap makes it required.
    let channel = options.get_one::<i64>("channel").copied().unwrap_or(0);

    let cmd_options = CmdOptions {
        input,
        output,
        transform: name.to_transform(channel),
        strict: flag(options, "strict"),
        lenient: flag(options, "lenient"),
        max_width: options.get_one::<u64>("max-width").copied().unwrap_or(0),
        max_height: options.get_one::<u64>("max-height").copied().unwrap_or(0),
    };
    if cmd_options.lenient {
        info!("Lenient decoding enabled");
    }
    if cmd_options.strict {
        info!("Strict transform arguments enabled");
    }
    cmd_options
}

/// Set up logging options
pub(crate) fn setup_logger(options: &ArgMatches) {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::cmd_args::create_cmd_args;

    #[test]
    fn collects_all_options() {
        let m = create_cmd_args()
            .try_get_matches_from([
                "plainppm", "-i", "in.ppm", "-o", "out.ppm", "-t", "invert", "--lenient", "--strict",
                "--max-width", "64",
            ])
            .unwrap();
        let opts = parse_options(&m);
        assert_eq!(opts.input, PathBuf::from("in.ppm"));
        assert_eq!(opts.output, PathBuf::from("out.ppm"));
        assert_eq!(opts.transform, Some(Transform::Invert));
        assert!(opts.lenient);
        assert!(opts.strict);
        assert_eq!((opts.max_width, opts.max_height), (64, 0));
    }
}
