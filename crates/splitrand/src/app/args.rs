//! Command-line argument parsing
//!
//! Arguments are validated completely before any generator is built.
//! Positional arguments may be negative numbers, so only `--name` and `-h`
//! are treated as options.

use crate::domain::mix::MixKind;
use std::path::PathBuf;
use thiserror::Error;

/// Default number of extra root splits checked per seed by the survey
pub const DEFAULT_SURVEY_DEPTH: usize = 16;

/// Argument errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// Wrong number of positional arguments
    #[error("expected exactly {expected} positional arguments, found {found}")]
    Usage { expected: usize, found: usize },
    /// A positional argument is not an integer of the right width
    #[error("Both arguments must be valid integers.")]
    InvalidInteger,
    /// Count parsed but is below zero
    #[error("Count must be a non-negative integer.")]
    NegativeCount,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Missing value for option {0}")]
    MissingOptionValue(String),
    #[error("Unknown mixer '{0}' (expected one of: jdk8, murmur3)")]
    InvalidMix(String),
    #[error("Invalid value for option {option}: {value}")]
    InvalidOptionValue { option: String, value: String },
}

impl ArgsError {
    /// Whether the usage text should accompany this error
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            ArgsError::Usage { .. }
                | ArgsError::UnknownOption(_)
                | ArgsError::MissingOptionValue(_)
        )
    }
}

/// Parsed command: run, or print help
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    Run(T),
    Help,
}

/// Arguments of the dump tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpArgs {
    /// Values of each kind drawn per split-tree node
    pub count: usize,
    /// Root seed, as Java's `long`
    pub seed: i64,
    pub mix: MixKind,
    /// Write here instead of stdout
    pub output: Option<PathBuf>,
}

/// Arguments of the survey tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyArgs {
    pub start_seed: i64,
    pub seed_count: u64,
    pub depth: usize,
    pub mix: MixKind,
}

/// Parse dump arguments (program name excluded)
///
/// Usage: `<count> <seed> [--mix <jdk8|murmur3>] [--output <path>]`
pub fn parse_dump_args<I, S>(args: I) -> Result<Command<DumpArgs>, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut mix = MixKind::default();
    let mut output = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter().map(Into::<String>::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--mix" => mix = parse_mix(&option_value(&mut args, &arg)?)?,
            "--output" | "-o" => output = Some(PathBuf::from(option_value(&mut args, &arg)?)),
            a if a.starts_with("--") => return Err(ArgsError::UnknownOption(arg)),
            _ => positional.push(arg),
        }
    }

    let [count, seed] = two_positional(positional)?;

    // Both must parse before the range check
    let count: i32 = count.parse().map_err(|_| ArgsError::InvalidInteger)?;
    let seed: i64 = seed.parse().map_err(|_| ArgsError::InvalidInteger)?;
    let count = usize::try_from(count).map_err(|_| ArgsError::NegativeCount)?;

    Ok(Command::Run(DumpArgs {
        count,
        seed,
        mix,
        output,
    }))
}

/// Parse survey arguments (program name excluded)
///
/// Usage: `<start_seed> <seed_count> [--depth <n>] [--mix <jdk8|murmur3>]`
pub fn parse_survey_args<I, S>(args: I) -> Result<Command<SurveyArgs>, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut mix = MixKind::default();
    let mut depth = DEFAULT_SURVEY_DEPTH;
    let mut positional = Vec::new();

    let mut args = args.into_iter().map(Into::<String>::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--mix" => mix = parse_mix(&option_value(&mut args, &arg)?)?,
            "--depth" => {
                let value = option_value(&mut args, &arg)?;
                depth = value.parse().map_err(|_| ArgsError::InvalidOptionValue {
                    option: arg.clone(),
                    value,
                })?;
            }
            a if a.starts_with("--") => return Err(ArgsError::UnknownOption(arg)),
            _ => positional.push(arg),
        }
    }

    let [start_seed, seed_count] = two_positional(positional)?;
    let start_seed: i64 = start_seed.parse().map_err(|_| ArgsError::InvalidInteger)?;
    let seed_count: i64 = seed_count.parse().map_err(|_| ArgsError::InvalidInteger)?;
    let seed_count = u64::try_from(seed_count).map_err(|_| ArgsError::NegativeCount)?;

    Ok(Command::Run(SurveyArgs {
        start_seed,
        seed_count,
        depth,
        mix,
    }))
}

fn two_positional(positional: Vec<String>) -> Result<[String; 2], ArgsError> {
    let found = positional.len();
    <[String; 2]>::try_from(positional).map_err(|_| ArgsError::Usage { expected: 2, found })
}

fn option_value(args: &mut impl Iterator<Item = String>, option: &str) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingOptionValue(option.to_string()))
}

fn parse_mix(value: &str) -> Result<MixKind, ArgsError> {
    MixKind::from_name(value).ok_or_else(|| ArgsError::InvalidMix(value.to_string()))
}
