use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{Arg, ArgAction, Command, ValueEnum, value_parser};
use plainppm::Transform;

/// Transform names accepted by `--transform`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TransformName {
    Unchanged,
    Grayscale,
    FlipHorizontal,
    FlipVertical,
    Invert,
    FlattenColor,
    ExtremeContrast,
}

impl TransformName {
    /// The library transform, with `channel` feeding `flatten-color`.
    pub(crate) fn to_transform(self, channel: i64) -> Option<Transform> {
        match self {
            Self::Unchanged => None,
            Self::Grayscale => Some(Transform::Grayscale),
            Self::FlipHorizontal => Some(Transform::FlipHorizontal),
            Self::FlipVertical => Some(Transform::FlipVertical),
            Self::Invert => Some(Transform::Invert),
            Self::FlattenColor => Some(Transform::FlattenColor(channel)),
            Self::ExtremeContrast => Some(Transform::ExtremeContrast),
        }
    }
}

impl ValueEnum for TransformName {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Unchanged,
            Self::Grayscale,
            Self::FlipHorizontal,
            Self::FlipVertical,
            Self::Invert,
            Self::FlattenColor,
            Self::ExtremeContrast,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Unchanged => PossibleValue::new("none").help("Copy the image unchanged"),
            Self::Grayscale => PossibleValue::new("grayscale").help("Average R, G and B"),
            Self::FlipHorizontal => PossibleValue::new("flip-horizontal").help("Mirror left to right"),
            Self::FlipVertical => PossibleValue::new("flip-vertical").help("Mirror top to bottom"),
            Self::Invert => PossibleValue::new("invert").help("Subtract every channel from the max color value"),
            Self::FlattenColor => PossibleValue::new("flatten-color").help("Zero the channel given by --channel"),
            Self::ExtremeContrast => PossibleValue::new("extreme-contrast").help("Push each channel to 0 or the max color value"),
        })
    }
}

#[rustfmt::skip]
pub(crate) fn create_cmd_args() -> Command {
    Command::new("plainppm")
        .about("Apply a simple transform to a plain PPM (P3) image")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output file to write the result to")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("transform")
            .short('t')
            .long("transform")
            .help_heading("OPERATIONS")
            .help("Transform to apply")
            .value_parser(value_parser!(TransformName))
            .default_value("none"))
        .arg(Arg::new("channel")
            .short('c')
            .long("channel")
            .help_heading("OPERATIONS")
            .help("Channel for flatten-color: 0 red, 1 green, 2 blue")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .required_if_eq("transform", "flatten-color"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Abort on invalid transform arguments instead of skipping the transform"))
        .arg(Arg::new("lenient")
            .long("lenient")
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Read non-numeric samples as 0 and ignore excess samples in a row"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODING")
            .help("Reject images wider than this, 0 for no limit")
            .value_parser(value_parser!(u64))
            .default_value("0"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODING")
            .help("Reject images taller than this, 0 for no limit")
            .value_parser(value_parser!(u64))
            .default_value("0"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display progress information"))
}
