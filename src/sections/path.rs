//! The `path` section: where programs are looked up.

use std::collections::HashSet;

use crate::host::path::split_path;
use crate::host::Host;

/// List PATH entries in lookup order, flagging missing and repeated ones.
pub fn produce(host: &dyn Host) -> Vec<String> {
    let Some(value) = host.var("PATH") else {
        return vec!["PATH is not set".to_string()];
    };

    let entries = split_path(&value);
    let mut seen = HashSet::new();
    let mut lines = vec![format!("PATH ({} entries):", entries.len())];

    for entry in &entries {
        let mut line = format!("    {:?}", entry);
        if !seen.insert(entry.clone()) {
            line.push_str(" (duplicate)");
        } else if !host.is_dir(entry) {
            line.push_str(" (missing)");
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    #[test]
    fn unset_path() {
        assert_eq!(produce(&MockHost::new()), vec!["PATH is not set"]);
    }

    #[cfg(unix)]
    #[test]
    fn entries_in_order_with_markers() {
        let host = MockHost::new()
            .with_var("PATH", "/home/me/.cargo/bin:/usr/bin:/nope:/usr/bin")
            .with_dir("/home/me/.cargo/bin")
            .with_dir("/usr/bin");

        assert_eq!(
            produce(&host),
            vec![
                "PATH (4 entries):",
                r#"    "/home/me/.cargo/bin""#,
                r#"    "/usr/bin""#,
                r#"    "/nope" (missing)"#,
                r#"    "/usr/bin" (duplicate)"#,
            ]
        );
    }
}
