// crates/core/src/markers.rs

//! Splicing an instruction into the region a user marked for copilot.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PipelineError, Result};

/// Delimiter bounding the copilot region in user code.
pub const SENTINEL: &str = "######";

/// First line of every copilot query.
pub const COPILOT_BANNER: &str = "Copilot Code Requested \n";

static SENTINEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&regex::escape(SENTINEL)).expect("escaped sentinel is a valid regex"));

/// Number of non-overlapping sentinel occurrences, scanning left to right.
pub fn count_markers(blob: &str) -> usize {
    SENTINEL_RE.find_iter(blob).count()
}

/// Replace the text between the two sentinels of `blob` with `instruction`.
///
/// The sentinels themselves are kept and the result is prefixed with
/// [`COPILOT_BANNER`].
pub fn splice_at_markers(blob: &str, instruction: &str) -> Result<String> {
    let markers: Vec<_> = SENTINEL_RE.find_iter(blob).collect();

    let (first, second) = match markers.as_slice() {
        [first, second] => (first, second),
        found if found.len() < 2 => {
            return Err(PipelineError::InsufficientMarkers { found: found.len() })
        }
        found => return Err(PipelineError::AmbiguousMarkers { found: found.len() }),
    };

    let head = &blob[..first.end()];
    let tail = &blob[second.start()..];

    let mut out =
        String::with_capacity(COPILOT_BANNER.len() + head.len() + instruction.len() + tail.len());
    out.push_str(COPILOT_BANNER);
    out.push_str(head);
    out.push_str(instruction);
    out.push_str(tail);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_between_markers() {
        let out = splice_at_markers("A\n######\nB\n######\nC", "<do X>").unwrap();
        assert_eq!(out, "Copilot Code Requested \nA\n######<do X>######\nC");
    }

    #[test]
    fn keeps_prefix_and_suffix_intact() {
        let prefix = "fn main() {\n    let x = 1;\n    ";
        let suffix = "\n    println!(\"{x}\");\n}\n";
        let blob = format!("{prefix}{SENTINEL}\n    todo\n    {SENTINEL}{suffix}");

        let out = splice_at_markers(&blob, "\nINSTR\n").unwrap();

        let body = out.strip_prefix(COPILOT_BANNER).unwrap();
        assert_eq!(body, format!("{prefix}{SENTINEL}\nINSTR\n{SENTINEL}{suffix}"));
        assert!(!out.contains("todo"));
    }

    #[test]
    fn adjacent_markers_insert_between() {
        let out = splice_at_markers("x############y", "!").unwrap();
        assert_eq!(out, format!("{COPILOT_BANNER}x######!######y"));
    }

    #[test]
    fn too_few_markers() {
        for (blob, found) in [("no markers", 0), ("one ###### here", 1)] {
            match splice_at_markers(blob, "i") {
                Err(PipelineError::InsufficientMarkers { found: f }) => assert_eq!(f, found),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn too_many_markers() {
        let blob = "a ###### b ###### c ###### d";
        match splice_at_markers(blob, "i") {
            Err(PipelineError::AmbiguousMarkers { found }) => assert_eq!(found, 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn long_runs_count_left_to_right() {
        // Seven hashes hold one sentinel; twelve hold two.
        assert_eq!(count_markers("#######"), 1);
        assert_eq!(count_markers("############"), 2);
        assert_eq!(count_markers("#####"), 0);
    }
}
