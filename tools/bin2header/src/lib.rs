//! Tool for embedding binary assets into a C++ build as `constexpr` byte array headers.

use std::io::Write;

use anyhow::Result;

/// The number of byte literals emitted before a line break is inserted.
///
/// Fixed formatting choice; it has no effect on the emitted array's values.
const BYTES_PER_LINE: usize = 31;

/// Writes a C++ header to `writer` declaring `array_name` as a `constexpr unsigned char`
/// array whose elements are the bytes of `data`, in order, wrapped in the `aka::font`
/// namespaces and guarded by `#pragma once`.
///
/// Each byte is written as a two-digit uppercase hexadecimal literal followed by a comma,
/// [`BYTES_PER_LINE`] values per tab-indented line. `array_name` is used verbatim: an
/// invalid C++ identifier produces a header that does not compile.
///
/// `writer` is flushed before returning.
///
/// # Errors
///
/// Returns errors when writing to or flushing `writer` fails.
pub fn emit_header<W: Write>(data: &[u8], mut writer: W, array_name: &str) -> Result<()> {
    writeln!(writer, "#pragma once")?;
    writeln!(writer, "namespace aka {{")?;
    writeln!(writer, "namespace font {{")?;

    writeln!(writer, "constexpr unsigned char {array_name}[] = {{")?;
    write!(writer, "\t")?;
    let mut line_count = 0;
    for byte in data {
        write!(writer, "0x{byte:02X},")?;

        line_count += 1;
        if line_count == BYTES_PER_LINE {
            write!(writer, "\n\t")?;
            line_count = 0;
        }
    }
    writeln!(writer)?;
    writeln!(writer, "}};")?;

    writeln!(writer, "}}; // namespace font")?;
    writeln!(writer, "}}; // namespace aka")?;

    writer.flush()?;
    Ok(())
}
