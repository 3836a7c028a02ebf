#![allow(dead_code)]

/// Render `bytes` as a verbose X log dump, 16 bytes per line, each line
/// prefixed with `(--) <label>:`. Adds a footer when `name` is given.
pub fn log_dump(label: &str, bytes: &[u8], name: Option<&str>) -> String {
    let mut out = format!("(--) {label}: Raw EDID bytes:\n(--) {label}:\n");
    for chunk in bytes.chunks(16) {
        let (left, right) = chunk.split_at(chunk.len().min(8));
        let hex = |part: &[u8]| part.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ");
        out.push_str(&format!("(--) {label}:   {}  {}\n", hex(left), hex(right)));
    }
    out.push_str(&format!("(--) {label}:\n"));
    match name {
        Some(n) => out.push_str(&format!("(--) {label}: --- End of EDID for {n} ---\n")),
        None => out.push_str(&format!("(--) {label}: Supported display modes follow\n")),
    }
    out
}

/// Render `bytes` as a CR-LF text dump with an ASCII annotation column,
/// followed by the `EDID Version` and `Monitor Name` fields.
pub fn text_dump(bytes: &[u8], monitor_name: &str) -> String {
    let mut out = String::new();
    for chunk in bytes.chunks(16) {
        let mut row = String::new();
        for (idx, b) in chunk.iter().enumerate() {
            if idx == 8 {
                row.push('-');
            } else if idx > 0 {
                row.push(' ');
            }
            row.push_str(&format!("{b:02X}"));
        }
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{row}    {ascii}\r\n"));
    }
    out.push_str("\r\n");
    out.push_str("EDID Version                : 1.3\r\n");
    out.push_str(&format!("Monitor Name                : {monitor_name}\r\n"));
    out
}

/// A 128-byte EDID-shaped block with a recognisable header.
pub fn sample_edid(seed: u8) -> Vec<u8> {
    let mut bytes = vec![0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00];
    bytes.extend((0..120u32).map(|i| (i as u8).wrapping_mul(7).wrapping_add(seed)));
    bytes
}
