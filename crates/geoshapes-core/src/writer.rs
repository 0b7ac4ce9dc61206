// crates/geoshapes-core/src/writer.rs
use crate::error::{GeoShapesError, Result};
use crate::model::OutputCollection;
use std::io::Write;

// -----------------------------------------------------------------------------
// OUTPUT
// -----------------------------------------------------------------------------

/// Writes the collection as two-space indented JSON followed by a newline.
pub fn write_collection<W: Write>(writer: &mut W, collection: &OutputCollection<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, collection)
        .map_err(|e| GeoShapesError::Io(e.into()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Renders the collection to a `String` in the same format as
/// [`write_collection`].
pub fn to_pretty_string(collection: &OutputCollection<'_>) -> Result<String> {
    let mut buf = Vec::new();
    write_collection(&mut buf, collection)?;
    String::from_utf8(buf).map_err(|e| GeoShapesError::Io(std::io::Error::other(e)))
}
