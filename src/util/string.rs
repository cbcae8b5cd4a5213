/// Lowercase hex without separators, e.g. `fe005c`
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
