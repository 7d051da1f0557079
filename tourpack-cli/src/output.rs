//! JSON report emission to stdout or a file.

use camino::Utf8Path;
use serde::Serialize;
use std::io::Write;
use tourpack_fs::create_utf8_file;

use crate::CliError;

/// Write `value` as pretty JSON to `path`, or to `stdout` when no path is set.
pub(crate) fn emit_json<T: Serialize>(
    path: Option<&Utf8Path>,
    stdout: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            write_json(&mut file, value)
        }
        None => write_json(stdout, value),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}
