//! Response Segmenter: recovers a cover letter and a tailored resume from one model reply.
//!
//! The model is asked to answer with `COVER LETTER:` and `TAILORED RESUME:` sections, but
//! nothing guarantees it does. Each field is resolved independently through a cascade:
//!
//! 1. Marker extraction: text between / after the two labels (case-insensitive).
//! 2. Cover-letter line scan: salutation-triggered capture, stops at the first resume-ish line.
//! 3. Resume line scan: capture from the first resume-ish line to the end.
//! 4. Total fallback: the whole reply becomes the cover letter, the resume gets a placeholder.
//!
//! A tier only runs for a field that every earlier tier left empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ────────────────────────────────────────────────────────────────────────────
// Keyword sets
// ────────────────────────────────────────────────────────────────────────────

/// Section labels, lowercase. Matched ASCII-case-insensitively so byte offsets are preserved.
pub const COVER_LETTER_MARKER: &str = "cover letter:";
pub const RESUME_MARKER: &str = "tailored resume:";

/// A line containing any of these opens the cover letter (the line itself is kept).
pub const COVER_LETTER_START_KEYWORDS: &[&str] =
    &["cover letter", "dear hiring", "dear sir", "dear madam"];

/// While capturing a cover letter, a line containing any of these ends it (the line is dropped).
pub const COVER_LETTER_STOP_KEYWORDS: &[&str] = &["resume", "experience", "skills", "education"];

/// A line containing any of these opens the resume; everything after it is kept.
pub const RESUME_START_KEYWORDS: &[&str] = &[
    "resume",
    "experience",
    "skills",
    "education",
    "summary",
    "objective",
];

/// Resume text used when no tier could recover either document.
pub const RESUME_PLACEHOLDER: &str = "Complete tailored resume for this position.";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// The two documents recovered from a model reply. Both fields are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentedApplication {
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub resume_snippet: String,
}

/// The tier that produced a field's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Marker,
    LineScan,
    TotalFallback,
    /// Field is empty; only possible for empty input or when the other field resolved.
    Unresolved,
}

/// Segmentation result plus the tier trace for each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub application: SegmentedApplication,
    pub cover_letter_tier: Tier,
    pub resume_tier: Tier,
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Splits a raw model reply into a cover letter and a resume. Never fails.
pub fn segment(raw: &str) -> SegmentedApplication {
    segment_traced(raw).application
}

/// Same as [`segment`], also reporting which tier resolved each field.
///
/// Empty input yields two empty fields. Whitespace-only input is not empty and goes through
/// the total fallback like any other unrecognised reply.
pub fn segment_traced(raw: &str) -> Segmentation {
    if raw.is_empty() {
        return Segmentation {
            application: SegmentedApplication::default(),
            cover_letter_tier: Tier::Unresolved,
            resume_tier: Tier::Unresolved,
        };
    }

    let (mut cover_letter, mut resume_snippet) = extract_marked_sections(raw);
    let mut cover_letter_tier = resolved_or(&cover_letter, Tier::Marker);
    let mut resume_tier = resolved_or(&resume_snippet, Tier::Marker);

    if cover_letter.is_empty() {
        cover_letter = COVER_LETTER_SCAN.run(raw);
        cover_letter_tier = resolved_or(&cover_letter, Tier::LineScan);
    }

    if resume_snippet.is_empty() {
        resume_snippet = RESUME_SCAN.run(raw);
        resume_tier = resolved_or(&resume_snippet, Tier::LineScan);
    }

    if cover_letter.is_empty() && resume_snippet.is_empty() {
        cover_letter = raw.to_string();
        resume_snippet = RESUME_PLACEHOLDER.to_string();
        cover_letter_tier = Tier::TotalFallback;
        resume_tier = Tier::TotalFallback;
    }

    debug!(
        cover_letter_tier = ?cover_letter_tier,
        resume_tier = ?resume_tier,
        cover_letter_len = cover_letter.len(),
        resume_len = resume_snippet.len(),
        "Segmented model response"
    );

    Segmentation {
        application: SegmentedApplication {
            cover_letter,
            resume_snippet,
        },
        cover_letter_tier,
        resume_tier,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 1: marker extraction
// ────────────────────────────────────────────────────────────────────────────

/// Returns `(cover_letter, resume)` captured between / after the section labels.
///
/// The cover letter runs from the first `COVER LETTER:` to the next `TAILORED RESUME:` (or the
/// end of text). The resume runs from the first `TAILORED RESUME:` to the end. Both are trimmed;
/// a missing label yields an empty string for that field.
pub fn extract_marked_sections(raw: &str) -> (String, String) {
    // ASCII lowercasing keeps every byte offset valid for slicing `raw`.
    let lower = raw.to_ascii_lowercase();

    let cover_letter = lower
        .find(COVER_LETTER_MARKER)
        .map(|start| {
            let body_start = start + COVER_LETTER_MARKER.len();
            let body_end = lower[body_start..]
                .find(RESUME_MARKER)
                .map_or(raw.len(), |offset| body_start + offset);
            raw[body_start..body_end].trim().to_string()
        })
        .unwrap_or_default();

    let resume = lower
        .find(RESUME_MARKER)
        .map(|start| raw[start + RESUME_MARKER.len()..].trim().to_string())
        .unwrap_or_default();

    (cover_letter, resume)
}

// ────────────────────────────────────────────────────────────────────────────
// Tiers 2 and 3: line scans
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingStart,
    Capturing,
    Done,
}

/// A line-by-line capture automaton: `SeekingStart → Capturing → Done`.
///
/// The start line is captured. A stop line (checked from the start line onwards) is not.
/// An empty stop set captures to end of text.
struct LineScan {
    start: &'static [&'static str],
    stop: &'static [&'static str],
}

const COVER_LETTER_SCAN: LineScan = LineScan {
    start: COVER_LETTER_START_KEYWORDS,
    stop: COVER_LETTER_STOP_KEYWORDS,
};

const RESUME_SCAN: LineScan = LineScan {
    start: RESUME_START_KEYWORDS,
    stop: &[],
};

impl LineScan {
    fn run(&self, raw: &str) -> String {
        let mut state = ScanState::SeekingStart;
        let mut captured: Vec<&str> = Vec::new();

        for line in raw.lines() {
            let lower = line.to_lowercase();

            if state == ScanState::SeekingStart && contains_any(&lower, self.start) {
                state = ScanState::Capturing;
            }

            if state == ScanState::Capturing {
                if contains_any(&lower, self.stop) {
                    state = ScanState::Done;
                } else {
                    captured.push(line);
                }
            }

            if state == ScanState::Done {
                break;
            }
        }

        captured.join("\n").trim().to_string()
    }
}

fn contains_any(line_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| line_lower.contains(k))
}

fn resolved_or(value: &str, tier: Tier) -> Tier {
    if value.is_empty() {
        Tier::Unresolved
    } else {
        tier
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "COVER LETTER:\nDear Hiring Manager,\nI am excited...\n\nTAILORED RESUME:\nJOHN SMITH\n...";

    fn scan_cover_letter(raw: &str) -> String {
        COVER_LETTER_SCAN.run(raw)
    }

    fn scan_resume(raw: &str) -> String {
        RESUME_SCAN.run(raw)
    }

    const UNMARKED: &str = "Dear Hiring Manager,\n\
        I would love to join your team and bring my passion for building things.\n\
        Thank you for your time.\n\
        Skills:\n\
        Rust, Go, Kubernetes\n\
        Projects: payment ledger";

    // ── tier 1 ──────────────────────────────────────────────────────────────

    #[test]
    fn test_well_formed_response_uses_markers() {
        let result = segment_traced(WELL_FORMED);
        assert_eq!(
            result.application.cover_letter,
            "Dear Hiring Manager,\nI am excited..."
        );
        assert_eq!(result.application.resume_snippet, "JOHN SMITH\n...");
        assert_eq!(result.cover_letter_tier, Tier::Marker);
        assert_eq!(result.resume_tier, Tier::Marker);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let raw = "cover letter: Hello there.\ntailored resume: Jane Doe";
        let app = segment(raw);
        assert_eq!(app.cover_letter, "Hello there.");
        assert_eq!(app.resume_snippet, "Jane Doe");
    }

    #[test]
    fn test_text_before_cover_letter_marker_is_ignored() {
        let raw = "Here is your application!\n\nCOVER LETTER:\nBody\nTAILORED RESUME:\nResume body";
        let app = segment(raw);
        assert_eq!(app.cover_letter, "Body");
        assert_eq!(app.resume_snippet, "Resume body");
    }

    #[test]
    fn test_marker_extraction_with_multibyte_text() {
        let raw = "Voilà — COVER LETTER:\nChère équipe,\nMerci.\nTAILORED RESUME:\nRené Müller\nZürich";
        let (cover_letter, resume) = extract_marked_sections(raw);
        assert_eq!(cover_letter, "Chère équipe,\nMerci.");
        assert_eq!(resume, "René Müller\nZürich");
    }

    #[test]
    fn test_cover_letter_without_resume_marker_runs_to_end() {
        let (cover_letter, resume) = extract_marked_sections("COVER LETTER:\n  Dear team,\nThanks.  ");
        assert_eq!(cover_letter, "Dear team,\nThanks.");
        assert!(resume.is_empty());
    }

    #[test]
    fn test_resegmenting_cover_letter_is_idempotent() {
        let first = segment(WELL_FORMED);
        let rewrapped = format!("COVER LETTER:\n{}", first.cover_letter);
        let (cover_letter, resume) = extract_marked_sections(&rewrapped);
        assert_eq!(cover_letter, first.cover_letter);
        assert!(resume.is_empty());
    }

    // ── tiers 2 and 3 ───────────────────────────────────────────────────────

    #[test]
    fn test_unmarked_response_uses_line_scans() {
        let result = segment_traced(UNMARKED);
        assert_eq!(
            result.application.cover_letter,
            "Dear Hiring Manager,\n\
             I would love to join your team and bring my passion for building things.\n\
             Thank you for your time."
        );
        assert_eq!(
            result.application.resume_snippet,
            "Skills:\nRust, Go, Kubernetes\nProjects: payment ledger"
        );
        assert_eq!(result.cover_letter_tier, Tier::LineScan);
        assert_eq!(result.resume_tier, Tier::LineScan);
    }

    #[test]
    fn test_cover_letter_scan_excludes_stop_line() {
        let raw = "Dear Sir,\nI am writing to apply.\nEDUCATION\nBSc";
        assert_eq!(scan_cover_letter(raw), "Dear Sir,\nI am writing to apply.");
    }

    #[test]
    fn test_cover_letter_scan_ignores_stop_words_before_start() {
        let raw = "My experience matters\nDear Madam,\nPlease consider me.";
        assert_eq!(scan_cover_letter(raw), "Dear Madam,\nPlease consider me.");
    }

    #[test]
    fn test_cover_letter_scan_start_line_with_stop_word_captures_nothing() {
        let raw = "Cover letter and resume below\nDear Hiring Manager,\nHello";
        assert_eq!(scan_cover_letter(raw), "");
    }

    #[test]
    fn test_cover_letter_mentioning_experience_is_truncated() {
        // Known trade-off: prose that uses a resume keyword ends the cover letter early.
        let raw = "Dear Hiring Manager,\nMy five years of experience in Rust...\nRegards";
        assert_eq!(scan_cover_letter(raw), "Dear Hiring Manager,");
    }

    #[test]
    fn test_resume_scan_includes_trigger_line_and_everything_after() {
        let raw = "Intro line\nPROFESSIONAL SUMMARY\nBuilt things\n\nAnything else";
        assert_eq!(
            scan_resume(raw),
            "PROFESSIONAL SUMMARY\nBuilt things\n\nAnything else"
        );
    }

    #[test]
    fn test_resume_scan_without_keywords_is_empty() {
        assert_eq!(scan_resume("Hello\nWorld"), "");
    }

    #[test]
    fn test_fields_resolve_through_different_tiers() {
        let raw = "COVER LETTER:\nDear team, I admire your work.\n\nObjective: backend role\nBuilt APIs";
        let result = segment_traced(raw);
        assert_eq!(result.cover_letter_tier, Tier::Marker);
        assert_eq!(result.resume_tier, Tier::LineScan);
        assert_eq!(
            result.application.resume_snippet,
            "Objective: backend role\nBuilt APIs"
        );
    }

    #[test]
    fn test_crlf_lines_are_handled() {
        let raw = "Dear Hiring Manager,\r\nHello.\r\nSkills\r\nRust";
        let app = segment(raw);
        assert_eq!(app.cover_letter, "Dear Hiring Manager,\nHello.");
        assert_eq!(app.resume_snippet, "Skills\nRust");
    }

    // ── tier 4 and empty input ──────────────────────────────────────────────

    #[test]
    fn test_total_fallback_keeps_whole_reply() {
        let raw = "I could not follow the format, sorry.";
        let result = segment_traced(raw);
        assert_eq!(result.application.cover_letter, raw);
        assert_eq!(result.application.resume_snippet, RESUME_PLACEHOLDER);
        assert_eq!(result.cover_letter_tier, Tier::TotalFallback);
        assert_eq!(result.resume_tier, Tier::TotalFallback);
    }

    #[test]
    fn test_empty_input_yields_empty_fields() {
        assert_eq!(segment(""), SegmentedApplication::default());
    }

    #[test]
    fn test_whitespace_input_falls_back_to_whole_reply() {
        for raw in [" ", "\r\n", "  \n\t \n"] {
            let result = segment_traced(raw);
            let app = &result.application;
            assert!(
                !app.cover_letter.is_empty() || !app.resume_snippet.is_empty(),
                "both fields empty for {raw:?}"
            );
            assert_eq!(app.cover_letter, raw);
            assert_eq!(app.resume_snippet, RESUME_PLACEHOLDER);
            assert_eq!(result.cover_letter_tier, Tier::TotalFallback);
        }
    }

    #[test]
    fn test_non_empty_input_never_yields_two_empty_fields() {
        let inputs = [
            WELL_FORMED,
            UNMARKED,
            "x",
            "COVER LETTER:",
            "TAILORED RESUME:",
            "COVER LETTER: TAILORED RESUME:",
            "Cover letter with resume\nnothing else",
            "\n\nskills\n\n",
        ];
        for raw in inputs {
            let app = segment(raw);
            assert!(
                !app.cover_letter.is_empty() || !app.resume_snippet.is_empty(),
                "degenerate segmentation for {raw:?}"
            );
        }
    }

    #[test]
    fn test_segmented_application_serializes_camel_case() {
        let app = segment(WELL_FORMED);
        let json = serde_json::to_value(&app).unwrap();
        assert!(json.get("coverLetter").is_some());
        assert!(json.get("resumeSnippet").is_some());
    }
}
