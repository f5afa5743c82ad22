//! File I/O utilities for reading table files and game histories.
//!
//! The `read_text_auto` function decompresses `.zst` (Zstandard) files based
//! on the file extension, so `score` and `replay` accept compressed input.

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use pineapple_cli::io_utils::read_text_auto;
/// let content = read_text_auto("table.json").unwrap();
/// let compressed = read_text_auto("games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
