//! Entry points that read their input through `std::io`.
use std::{fs::File, io::Read, path::Path, string::String};

use crate::{ReadError, Value};

/// Parses the JSON file at `path`.
///
/// The file must be UTF-8; anything else is reported as an
/// [`io::ErrorKind::InvalidData`](std::io::ErrorKind::InvalidData) I/O error.
/// The file is closed before this returns, whether or not the parse
/// succeeded.
///
/// # Errors
///
/// [`ReadError::Io`] if the file cannot be opened or read, without attempting
/// to parse; [`ReadError::Parse`] if its contents are not valid JSON.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, ReadError> {
    let file = File::open(path)?;
    parse_reader(file)
}

/// Reads `reader` to the end and parses the result.
///
/// # Errors
///
/// [`ReadError::Io`] if reading fails or the bytes are not UTF-8;
/// [`ReadError::Parse`] if the text is not valid JSON.
///
/// # Examples
///
/// ```
/// let value = jsontree::parse_reader(&b"[1, 2]"[..]).unwrap();
/// assert_eq!(value.get_index(1).and_then(|v| v.as_i64()), Some(2));
/// ```
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value, ReadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(crate::parse(&text)?)
}
