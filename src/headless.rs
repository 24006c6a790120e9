//! Headless mode - one request, printed to stdout, no TUI
//!
//! Analysis prints the structured result as pretty JSON; `--run` prints the
//! simulated console output as plain text. An analysis failure is returned as
//! an error so the process exits non-zero.

use std::io::Write;
use std::path::Path;

use codefix_core::prelude::*;
use codefix_core::{encode_file, CodeSubmission, EncodedFile};
use codefix_gemini::CodeAssistant;

/// Load `path`, send it once, and write the reply to `out`
pub async fn run_headless<A, W>(assistant: &A, path: &Path, execute: bool, out: &mut W) -> Result<()>
where
    A: CodeAssistant + Sync,
    W: Write,
{
    info!(
        "Headless {} of {}",
        if execute { "execution" } else { "analysis" },
        path.display()
    );

    let file = encode_file(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let submission = submission_for(file);
    submission.ensure_not_empty()?;

    if execute {
        let output = assistant.execute(&submission).await;
        writeln!(out, "{}", output)?;
    } else {
        let result = assistant
            .analyze(&submission)
            .await
            .context("Headless analysis failed")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    }
    out.flush().context("Failed to flush headless output")?;
    Ok(())
}

/// Source text becomes the code; anything else is sent as the attachment
fn submission_for(file: EncodedFile) -> CodeSubmission {
    match file {
        EncodedFile::Source { text, .. } => CodeSubmission::new(text, None),
        EncodedFile::Binary(attachment) => CodeSubmission::new(String::new(), Some(attachment)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codefix_core::AnalysisResult;
    use tempfile::tempdir;

    struct EchoAssistant {
        fail: bool,
    }

    impl CodeAssistant for EchoAssistant {
        async fn analyze(&self, submission: &CodeSubmission) -> Result<AnalysisResult> {
            if self.fail {
                return Err(Error::service("HTTP 503: overloaded"));
            }
            Ok(AnalysisResult {
                language: "Python".into(),
                errors: vec![],
                correct_syntax: submission.code.clone(),
                explanation: "Nothing to fix.".into(),
                simplified_logic: None,
                formatted_code: submission.code.clone(),
                learning_tips: vec![],
                output: None,
            })
        }

        async fn execute(&self, submission: &CodeSubmission) -> String {
            match &submission.attachment {
                Some(a) => format!("attached {}", a.name),
                None => format!("ran: {}", submission.code),
            }
        }
    }

    #[tokio::test]
    async fn test_analysis_prints_pretty_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("main.py");
        std::fs::write(&path, "print(1)").unwrap();

        let mut out = Vec::new();
        run_headless(&EchoAssistant { fail: false }, &path, false, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"correctSyntax\": \"print(1)\""));
        assert!(text.contains("\"language\": \"Python\""));
    }

    #[tokio::test]
    async fn test_run_prints_raw_output() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("main.py");
        std::fs::write(&path, "print(1)").unwrap();

        let mut out = Vec::new();
        run_headless(&EchoAssistant { fail: false }, &path, true, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "ran: print(1)\n");
    }

    #[tokio::test]
    async fn test_binary_file_sent_as_attachment() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("screen.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let mut out = Vec::new();
        run_headless(&EchoAssistant { fail: false }, &path, true, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "attached screen.png\n");
    }

    #[tokio::test]
    async fn test_analysis_failure_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("main.py");
        std::fs::write(&path, "print(1)").unwrap();

        let mut out = Vec::new();
        let err = run_headless(&EchoAssistant { fail: true }, &path, false, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("overloaded"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_rejected_before_request() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.py");
        std::fs::write(&path, "   \n").unwrap();

        let mut out = Vec::new();
        let result = run_headless(&EchoAssistant { fail: false }, &path, false, &mut out).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let mut out = Vec::new();
        let result = run_headless(
            &EchoAssistant { fail: false },
            &temp.path().join("nope.py"),
            false,
            &mut out,
        )
        .await;
        assert!(result.is_err());
    }
}
