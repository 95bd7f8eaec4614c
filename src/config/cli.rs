//! Command-line argument mapping.
//!
//! Tokens are split into the proxy and general option bags according to the
//! [argument table](super::table). Unknown flags do not abort parsing: the first
//! one is reported through [`MappedArgs::invalid_option`] and every recognized
//! flag is still mapped.

use std::ffi::OsString;
use std::path::Path;
use std::sync::LazyLock;

use clap::{Arg, ArgAction, ArgMatches, Command};
use regex::Regex;
use serde_json::{Number, Value};

use super::error::{ConfigError, field};
use super::options::{DaemonCommand, GeneralOptions, InvalidOption, ProxyOptions, value_text};
use super::path::absolutize;
use super::table::{
    ARGUMENTS, ArgKind, ArgSpec, ArgValue, lookup_long, lookup_short, prefixed,
};

/// Program name shown in help output.
pub const PROGRAM_NAME: &str = "proxy-conf";

/// Argument id collecting positional tokens, which are ignored.
const POSITIONAL: &str = "_";

/// Value recorded for a flag given without a value.
const FLAG_PRESENT: &str = "true";

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?$").expect("valid numeric regex")
});

/// Outcome of mapping command-line tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedArgs {
    /// Proxy options given on the command line, in order of appearance
    pub proxy_options: ProxyOptions,

    /// Help, daemon command and PAC update flag
    pub general_options: GeneralOptions,

    /// First problem found in the arguments, if any
    pub invalid_option: Option<InvalidOption>,
}

/// Builds the clap command for the argument table.
///
/// Help and version flags are disabled because `-h`/`--help` is an ordinary
/// general option here.
#[must_use]
pub fn command() -> Command {
    let positional = Arg::new(POSITIONAL).action(ArgAction::Append).hide(true);

    ARGUMENTS.iter().fold(
        Command::new(PROGRAM_NAME)
            .about("Resolve proxy client configuration from defaults, a JSON file and arguments")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .arg(positional),
        |cmd, spec| cmd.arg(table_arg(spec)),
    )
}

fn table_arg(spec: &ArgSpec) -> Arg {
    let arg = Arg::new(spec.canonical)
        .long(spec.long)
        .help(spec.help)
        .hide(spec.hidden)
        .num_args(0..=1)
        .default_missing_value(FLAG_PRESENT)
        .action(ArgAction::Set);

    match spec.short {
        Some(short) => arg.short(short),
        None => arg,
    }
}

/// Renders the `--help` text.
#[must_use]
pub fn help_text() -> String {
    command().render_help().to_string()
}

/// Maps tokens using the process working directory for relative paths.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined or the
/// token stream cannot be parsed at all.
pub fn map_args<I, T>(tokens: I) -> Result<MappedArgs, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    map_args_in(tokens, &cwd)
}

/// Maps tokens, resolving a relative `logPath` against `cwd`.
///
/// # Errors
///
/// Returns [`ConfigError::Arguments`] if clap rejects the filtered token
/// stream. Unknown flags and bad daemon commands are not errors.
pub fn map_args_in<I, T>(tokens: I, cwd: &Path) -> Result<MappedArgs, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_owned()).collect();
    let (known, unknown) = split_unknown(&tokens);
    let matches = command().try_get_matches_from(known)?;

    let mut present: Vec<(usize, &ArgSpec, &str)> = ARGUMENTS
        .iter()
        .filter_map(|spec| {
            let value = last_value(&matches, spec)?;
            let index = matches.index_of(spec.canonical).unwrap_or(usize::MAX);
            Some((index, spec, value))
        })
        .collect();
    present.sort_by_key(|(index, ..)| *index);

    let mut proxy_options = ProxyOptions::new();
    let mut general_options = GeneralOptions::default();
    let mut daemon_value = None;

    for (_, spec, value) in present {
        match spec.kind {
            ArgKind::Proxy => proxy_options.insert(spec.canonical, coerce(spec.value, value)),
            ArgKind::General => match spec.long {
                "help" => general_options.help = truthy(value),
                "daemon" => daemon_value = Some(value),
                _ => general_options.pac_update_gfwlist = truthy(value),
            },
        }
    }

    let mut invalid_option = unknown.map(InvalidOption::UnknownFlag);
    if let Some(value) = daemon_value {
        match DaemonCommand::parse(value) {
            Some(command) => general_options.daemon = Some(command),
            None if invalid_option.is_none() => {
                tracing::debug!(value, "invalid daemon command");
                invalid_option = Some(InvalidOption::InvalidDaemonCommand(value.to_owned()));
            }
            None => {}
        }
    }

    absolutize_log_path(&mut proxy_options, cwd);

    Ok(MappedArgs {
        proxy_options,
        general_options,
        invalid_option,
    })
}

fn last_value<'a>(matches: &'a ArgMatches, spec: &ArgSpec) -> Option<&'a str> {
    matches
        .get_one::<String>(spec.canonical)
        .map(String::as_str)
}

/// Drops flags that are not in the table, together with the value token that
/// follows them. Returns the remaining tokens and the first dropped flag name.
fn split_unknown(tokens: &[String]) -> (Vec<String>, Option<String>) {
    let mut known = Vec::with_capacity(tokens.len());
    let mut first_unknown = None;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        if token == "--" {
            known.push(token.clone());
            known.extend(iter.cloned());
            break;
        }

        let Some((flag, has_inline_value)) = parse_flag(token) else {
            known.push(token.clone());
            continue;
        };

        if flag.lookup().is_some() {
            known.push(token.clone());
            continue;
        }

        let name = flag.name();
        tracing::debug!(flag = %prefixed(name), "unrecognized argument");
        if first_unknown.is_none() {
            first_unknown = Some(name.to_owned());
        }
        if !has_inline_value && iter.peek().is_some_and(|next| is_value_token(next)) {
            iter.next();
        }
    }

    (known, first_unknown)
}

fn is_value_token(token: &str) -> bool {
    token != "--" && parse_flag(token).is_none()
}

/// A flag as written on the command line, without dashes or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag<'a> {
    Long(&'a str),
    Short(&'a str),
}

impl<'a> Flag<'a> {
    fn lookup(self) -> Option<&'static ArgSpec> {
        match self {
            Self::Long(name) => lookup_long(name),
            Self::Short(name) => name.chars().next().and_then(lookup_short),
        }
    }

    const fn name(self) -> &'a str {
        match self {
            Self::Long(name) | Self::Short(name) => name,
        }
    }
}

/// Splits a token into its flag and whether the token also carries the value
/// (`--name=value`, `-xvalue`). Returns `None` for non-flags.
fn parse_flag(token: &str) -> Option<(Flag<'_>, bool)> {
    if let Some(long) = token.strip_prefix("--") {
        if long.is_empty() {
            return None;
        }
        return Some(match long.split_once('=') {
            Some((name, _)) => (Flag::Long(name), true),
            None => (Flag::Long(long), false),
        });
    }

    let short = token.strip_prefix('-')?;
    let first = short.chars().next()?;
    let len = first.len_utf8();
    Some((Flag::Short(&short[..len]), short.len() > len))
}

/// Types a raw argument value according to its table entry. Text that does
/// not fit the entry's type stays a string.
fn coerce(kind: ArgValue, raw: &str) -> Value {
    match (kind, raw) {
        (ArgValue::Bool, "true") => Value::Bool(true),
        (ArgValue::Bool, "false") => Value::Bool(false),
        (ArgValue::Int, _) if NUMERIC.is_match(raw) => raw
            .parse::<i64>()
            .ok()
            .map(Number::from)
            .or_else(|| raw.parse::<f64>().ok().and_then(Number::from_f64))
            .map_or_else(|| Value::String(raw.to_owned()), Value::Number),
        _ => Value::String(raw.to_owned()),
    }
}

/// Converts process arguments to UTF-8 tokens.
///
/// # Errors
///
/// Returns [`ConfigError::NonUtf8Argument`] with the lossy text of the first
/// argument that is not valid UTF-8.
pub fn utf8_tokens<I>(args: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| ConfigError::NonUtf8Argument(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Only `false`, `0` and empty text clear a general flag; `--help=no` still asks for help.
fn truthy(raw: &str) -> bool {
    !matches!(raw, "false" | "0" | "")
}

fn absolutize_log_path(options: &mut ProxyOptions, cwd: &Path) {
    let Some(raw) = options.get(field::LOG_PATH).and_then(value_text) else {
        return;
    };
    let path = Path::new(&raw);
    if path.is_absolute() {
        return;
    }
    let resolved = absolutize(cwd, path);
    options.insert(field::LOG_PATH, resolved.to_string_lossy().into_owned());
}
