//! Unified diff chunk filtering.
use regex::Regex;
use std::sync::LazyLock;

/// Matches the start of each per-file chunk in a unified diff.
static DIFF_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^diff --git").unwrap());

/// Snapshot test fixtures dominate CDK diffs and add nothing to a summary.
static SNAPSHOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.snapshot").unwrap());

/// Drop per-file chunks whose `diff --git` header line matches the exclude
/// pattern. Input without any chunk markers passes through unchanged.
pub fn filter_chunks(diff: &str, exclude: &Regex) -> String {
    let positions: Vec<usize> = DIFF_HEADER_REGEX
        .find_iter(diff)
        .map(|m| m.start())
        .collect();

    if positions.is_empty() {
        return diff.to_string();
    }

    let mut filtered = String::new();

    for (i, start) in positions.iter().enumerate() {
        let end = positions.get(i + 1).copied().unwrap_or(diff.len());
        let chunk = &diff[*start..end];

        if chunk.trim().is_empty() {
            continue;
        }

        let header = chunk.lines().next().unwrap_or_default();

        if !exclude.is_match(header) {
            filtered.push_str(chunk);
        }
    }

    filtered
}

/// Filter with the default snapshot-fixture exclusion.
pub fn filter_snapshot_chunks(diff: &str) -> String {
    filter_chunks(diff, &SNAPSHOT_REGEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF: &str = "diff --git a/src/lib.ts b/src/lib.ts\n\
index 111..222 100644\n\
--- a/src/lib.ts\n\
+++ b/src/lib.ts\n\
+real change\n\
diff --git a/test/integ.snapshot/stack.json b/test/integ.snapshot/stack.json\n\
index 333..444 100644\n\
--- a/test/integ.snapshot/stack.json\n\
+++ b/test/integ.snapshot/stack.json\n\
+generated noise\n\
diff --git a/README.md b/README.md\n\
index 555..666 100644\n\
--- a/README.md\n\
+++ b/README.md\n\
+docs change\n";

    #[test]
    fn test_drops_snapshot_chunks() {
        let filtered = filter_snapshot_chunks(DIFF);

        assert!(filtered.contains("a/src/lib.ts"));
        assert!(filtered.contains("a/README.md"));
        assert!(!filtered.contains("integ.snapshot"));
        assert!(!filtered.contains("generated noise"));
    }

    #[test]
    fn test_keeps_chunk_order() {
        let filtered = filter_snapshot_chunks(DIFF);

        let lib = filtered.find("a/src/lib.ts").unwrap();
        let readme = filtered.find("a/README.md").unwrap();
        assert!(lib < readme);
    }

    #[test]
    fn test_input_without_chunk_markers_passes_through() {
        let content = "not a diff at all\njust text\n";
        assert_eq!(filter_snapshot_chunks(content), content);
    }

    #[test]
    fn test_exclusion_only_applies_to_header_line() {
        let diff = "diff --git a/src/ok.ts b/src/ok.ts\n\
--- a/src/ok.ts\n\
+++ b/src/ok.ts\n\
+mentions .snapshot in the body\n";

        let filtered = filter_snapshot_chunks(diff);
        assert!(filtered.contains("mentions .snapshot in the body"));
    }

    #[test]
    fn test_custom_exclude_pattern() {
        let exclude = Regex::new(r"README").unwrap();
        let filtered = filter_chunks(DIFF, &exclude);

        assert!(filtered.contains("a/src/lib.ts"));
        assert!(filtered.contains("integ.snapshot"));
        assert!(!filtered.contains("a/README.md"));
    }
}
