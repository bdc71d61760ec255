//! The `encoding` section: character and string encodings, locale.

use crate::host::Host;

/// Locale variables, most specific first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

fn os_string_encoding() -> &'static str {
    if cfg!(windows) {
        "WTF-8 over UTF-16 (OsString may hold unpaired surrogates)"
    } else {
        "arbitrary bytes (OsString need not be UTF-8)"
    }
}

/// Report how text is represented and which locale is active.
pub fn produce(host: &dyn Host) -> Vec<String> {
    let mut lines = vec![
        format!(
            "char::MAX: {:?} (U+{:X}), as all Rust chars are Unicode scalar values",
            char::MAX,
            u32::from(char::MAX)
        ),
        "String encoding: UTF-8".to_string(),
        format!("OS string encoding: {}", os_string_encoding()),
    ];

    for var in LOCALE_VARS {
        match host.var(var) {
            Some(value) => lines.push(format!("{}: {:?}", var, value)),
            None => lines.push(format!("{}: not set", var)),
        }
    }
    lines
}
