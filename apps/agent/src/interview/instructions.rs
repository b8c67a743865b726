//! Prompt Builder — renders the interviewer instructions from the external template.
//!
//! Template syntax: `{name}` is a slot, `{{` and `}}` are literal braces. The
//! template must use both `candidate_details_text` and `job_description` and no
//! other slot. Problems are reported when the template is loaded, never papered
//! over with blank text at render time.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const CANDIDATE_SLOT: &str = "candidate_details_text";
pub const JOB_DESCRIPTION_SLOT: &str = "job_description";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Prompt template {path} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt template is malformed: {0}")]
    Format(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Candidate,
    JobDescription,
}

/// A validated interviewer template.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Reads and validates the template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    text.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    text.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(TemplateError::Format(format!(
                                    "unterminated placeholder '{{{name}'"
                                )))
                            }
                            Some(ch) => name.push(ch),
                        }
                    }
                    let slot = match name.trim() {
                        CANDIDATE_SLOT => Segment::Candidate,
                        JOB_DESCRIPTION_SLOT => Segment::JobDescription,
                        other => {
                            return Err(TemplateError::Format(format!(
                                "unexpected placeholder '{{{other}}}'"
                            )))
                        }
                    };
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(slot);
                }
                '}' => {
                    return Err(TemplateError::Format(
                        "single '}' encountered outside a placeholder".to_string(),
                    ))
                }
                other => text.push(other),
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        for (slot, name) in [
            (Segment::Candidate, CANDIDATE_SLOT),
            (Segment::JobDescription, JOB_DESCRIPTION_SLOT),
        ] {
            if !segments.contains(&slot) {
                return Err(TemplateError::Format(format!(
                    "missing placeholder '{{{name}}}'"
                )));
            }
        }

        Ok(Self { segments })
    }

    /// Substitutes both inputs verbatim and trims the result.
    pub fn render(&self, candidate_details: &str, job_description: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Candidate => out.push_str(candidate_details),
                Segment::JobDescription => out.push_str(job_description),
            }
        }
        out.trim().to_string()
    }
}

/// Loads the template at `path` and renders it in one step.
pub fn build_interviewer_instructions(
    path: impl AsRef<Path>,
    candidate_details: &str,
    job_description: &str,
) -> Result<String, TemplateError> {
    Ok(PromptTemplate::load(path)?.render(candidate_details, job_description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEMPLATE: &str = "\n  You are interviewing:\n{candidate_details_text}\n\nRole:\n{job_description}\n";

    #[test]
    fn test_render_substitutes_both_slots_and_trims() {
        let template = PromptTemplate::parse(TEMPLATE).unwrap();
        let rendered = template.render("Ada, 5 years Rust", "Backend Engineer");
        assert_eq!(
            rendered,
            "You are interviewing:\nAda, 5 years Rust\n\nRole:\nBackend Engineer"
        );
    }

    #[test]
    fn test_inputs_are_inserted_verbatim() {
        let template = PromptTemplate::parse(TEMPLATE).unwrap();
        let rendered = template.render("{job_description} & <b>", "{}");
        assert!(rendered.contains("{job_description} & <b>"));
        assert!(rendered.ends_with("{}"));
    }

    #[test]
    fn test_repeated_slots_are_all_filled() {
        let template =
            PromptTemplate::parse("{job_description} / {candidate_details_text} / {job_description}")
                .unwrap();
        assert_eq!(template.render("C", "J"), "J / C / J");
    }

    #[test]
    fn test_double_braces_are_literal() {
        let template = PromptTemplate::parse(
            "Reply as {{\"score\": 0}} for {candidate_details_text} ({job_description})",
        )
        .unwrap();
        assert_eq!(template.render("Ada", "SRE"), "Reply as {\"score\": 0} for Ada (SRE)");
    }

    #[test]
    fn test_missing_slot_is_format_error() {
        let err = PromptTemplate::parse("Only {candidate_details_text}").unwrap_err();
        match err {
            TemplateError::Format(msg) => assert!(msg.contains(JOB_DESCRIPTION_SLOT)),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_slot_is_format_error() {
        let err = PromptTemplate::parse(
            "{candidate_details_text} {job_description} {company_name}",
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::Format(msg) if msg.contains("company_name")));
    }

    #[test]
    fn test_unbalanced_braces_are_format_errors() {
        assert!(matches!(
            PromptTemplate::parse("{candidate_details_text} {job_description"),
            Err(TemplateError::Format(_))
        ));
        assert!(matches!(
            PromptTemplate::parse("{candidate_details_text} } {job_description}"),
            Err(TemplateError::Format(_))
        ));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = PromptTemplate::load(dir.path().join("prompt.txt")).unwrap_err();
        assert!(matches!(err, TemplateError::Unavailable { .. }));
    }

    #[test]
    fn test_build_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEMPLATE.as_bytes()).unwrap();

        let rendered = build_interviewer_instructions(file.path(), "Ada", "SRE").unwrap();
        assert!(rendered.starts_with("You are interviewing:"));
        assert!(rendered.ends_with("SRE"));
    }

    #[test]
    fn test_shipped_template_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("prompt.txt");
        let rendered = build_interviewer_instructions(path, "Ada", "Backend Engineer").unwrap();
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("Backend Engineer"));
    }
}
