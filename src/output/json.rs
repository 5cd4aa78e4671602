//
//  gitlab-cli
//  output/json.rs
//

//! Pretty-printed JSON serialization for scripting use.

use std::io::Write;

use serde::Serialize;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut std::io::stdout().lock(), value)
}

/// Writes pretty-printed JSON to an arbitrary writer.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_json_to_buffer() {
        let mut buffer = Cursor::new(Vec::new());
        write_json_to(&mut buffer, &serde_json::json!({"key": "value"})).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(output.contains("\"key\": \"value\""));
        assert!(output.ends_with('\n'));
    }
}
