use std::ffi::OsString;

use thiserror::Error;
use tracing::debug;

/// Flag names that may also be spelled with a single leading dash.
const LONG_FLAGS: [&str; 3] = ["previous", "latest", "current"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Usage: get-forth-semver [previous latest current] or with flags -previous -latest -current"
)]
pub struct UsageError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionFlags {
    pub previous: Option<String>,
    pub latest: Option<String>,
    pub current: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionArgs {
    pub previous: String,
    pub latest: String,
    pub current: String,
}

/// Picks the three versions from the flags or the positional arguments.
///
/// The flags win only when all three are present and non-empty. Otherwise
/// the first three positionals are used and any further ones are ignored.
pub fn select_versions(
    flags: VersionFlags,
    positionals: Vec<String>,
) -> Result<VersionArgs, UsageError> {
    if let (Some(previous), Some(latest), Some(current)) = (
        non_empty(flags.previous),
        non_empty(flags.latest),
        non_empty(flags.current),
    ) {
        debug!("using versions from flags");
        return Ok(VersionArgs {
            previous,
            latest,
            current,
        });
    }

    let mut positionals = positionals.into_iter();
    match (positionals.next(), positionals.next(), positionals.next()) {
        (Some(previous), Some(latest), Some(current)) => {
            debug!("using positional versions");
            Ok(VersionArgs {
                previous,
                latest,
                current,
            })
        }
        _ => Err(UsageError),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Rewrites `-previous`, `-latest` and `-current` (with or without `=value`)
/// to their double-dash form. Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_terminator = true;
                    arg
                }
                Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
