//! The `sizes` section: integer and pointer widths of this build.

/// What a `usize::MAX` value says about the target's pointer width.
pub fn indicates(max: u64) -> &'static str {
    if max == u64::MAX {
        "indicating 64-bit"
    } else if max == u64::from(u32::MAX) {
        "indicating 32-bit"
    } else {
        "not sure what that means"
    }
}

/// Report `usize::MAX`, pointer width and byte order.
pub fn produce() -> Vec<String> {
    let max = usize::MAX as u64;
    vec![
        format!("usize::MAX: {}, {}", max, indicates(max)),
        format!("isize::MAX: {}", isize::MAX),
        format!("pointer width: {} bits", usize::BITS),
        format!(
            "endianness: {}",
            if cfg!(target_endian = "little") {
                "little"
            } else {
                "big"
            }
        ),
    ]
}
