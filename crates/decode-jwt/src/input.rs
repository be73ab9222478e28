use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::token::{decode_token, render_payload};

/// Reads a single line and trims it. Anything after the first line is left
/// unread.
///
/// Invalid UTF-8 is replaced rather than rejected, so it only fails once it
/// reaches a segment that gets decoded.
///
/// Returns `None` for a blank line or when the input ends before any line.
pub fn read_token<R: BufRead>(mut reader: R) -> Result<Option<String>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    let line = String::from_utf8_lossy(&line);
    let token = line.trim();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(token.to_owned()))
}

/// Reads a token from `reader` and writes its payload to `writer`.
///
/// Blank input is a no-op that writes nothing.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let Some(token) = read_token(reader)? else {
        debug!("no token on input");
        return Ok(());
    };

    let decoded = decode_token(&token)?;
    let rendered = render_payload(&decoded)?;
    writeln!(writer, "{rendered}")?;
    Ok(())
}
