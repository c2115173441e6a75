//! Filename inference: builds a descriptive, filesystem-safe name from document content.
//!
//! Shape: `{person}_{job_title}_{kind}_{YYYY-MM-DD}_{suffix}`.
//!
//! Both heuristics are English-only keyword matches. The person-name scan takes the first
//! plausible two-word line, so a line like "Austin Texas" above the real name wins.

use std::fmt;

use chrono::Utc;
use uuid::Uuid;

use crate::export::DocumentKind;

pub const DEFAULT_PERSON_TOKEN: &str = "march_fields";
pub const DEFAULT_JOB_TITLE: &str = "professional";

/// Lines containing any of these are never read as a name.
pub const NAME_LINE_STOPLIST: &[&str] = &[
    "resume",
    "experience",
    "skills",
    "education",
    "summary",
    "objective",
    "phone",
    "email",
    "address",
    "linkedin",
];

/// `(keyword, label)` in priority order: the first keyword present wins.
pub const JOB_TITLE_KEYWORDS: &[(&str, &str)] = &[
    ("software engineer", "software_engineer"),
    ("developer", "developer"),
    ("manager", "manager"),
    ("analyst", "analyst"),
    ("designer", "designer"),
    ("consultant", "consultant"),
    ("specialist", "specialist"),
    ("coordinator", "coordinator"),
    ("assistant", "assistant"),
    ("director", "director"),
    ("executive", "executive"),
    ("lead", "lead"),
    ("senior", "senior"),
    ("junior", "junior"),
];

/// Name line length bounds, exclusive, in characters.
const MIN_NAME_LINE_CHARS: usize = 2;
const MAX_NAME_LINE_CHARS: usize = 50;
const SUFFIX_LEN: usize = 4;

/// The components of an inferred filename. Recomputed on every export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredFileName {
    pub person_token: String,
    pub job_title_token: String,
    pub document_kind: DocumentKind,
    pub date_stamp: String,
    pub random_suffix: String,
}

impl InferredFileName {
    /// Infers every component, stamping today's UTC date and a fresh random suffix.
    pub fn infer(document_text: &str, context_text: &str, kind: DocumentKind) -> Self {
        Self {
            person_token: infer_person_token(document_text, context_text),
            job_title_token: sanitize_token(infer_job_title(context_text)),
            document_kind: kind,
            date_stamp: Utc::now().format("%Y-%m-%d").to_string(),
            random_suffix: random_suffix(),
        }
    }
}

impl fmt::Display for InferredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.person_token,
            self.job_title_token,
            self.document_kind.label(),
            self.date_stamp,
            self.random_suffix
        )
    }
}

/// Infers a filename (without extension) for a document.
///
/// The person name is read from `document_text`, or from `context_text` when the document is
/// empty. The job title is read from `context_text`.
pub fn infer_file_name(document_text: &str, context_text: &str, kind: DocumentKind) -> String {
    InferredFileName::infer(document_text, context_text, kind).to_string()
}

/// Returns `first_last` from the first line that looks like a name, or the default token.
pub fn infer_person_token(document_text: &str, context_text: &str) -> String {
    let source = if document_text.is_empty() {
        context_text
    } else {
        document_text
    };

    source
        .lines()
        .filter_map(name_from_line)
        .next()
        .unwrap_or_else(|| DEFAULT_PERSON_TOKEN.to_string())
}

fn name_from_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let char_count = trimmed.chars().count();
    if char_count <= MIN_NAME_LINE_CHARS || char_count >= MAX_NAME_LINE_CHARS {
        return None;
    }

    let lower = trimmed.to_lowercase();
    if NAME_LINE_STOPLIST.iter().any(|word| lower.contains(word)) {
        return None;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }

    let first = letters_only(words[0]);
    let last = letters_only(words[words.len() - 1]);
    if first.len() < 2 || last.len() < 2 || first == last {
        return None;
    }

    Some(format!("{first}_{last}"))
}

/// Lowercases and keeps ASCII letters only.
fn letters_only(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Returns the label of the highest-priority role keyword found in `context_text`.
pub fn infer_job_title(context_text: &str) -> &'static str {
    let lower = context_text.to_lowercase();
    JOB_TITLE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(DEFAULT_JOB_TITLE, |&(_, label)| label)
}

/// Replaces every character outside `[A-Za-z0-9]` with `_` and lowercases.
pub fn sanitize_token(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}
