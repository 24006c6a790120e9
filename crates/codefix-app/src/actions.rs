//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use codefix_core::prelude::*;
use codefix_core::{encode_file, CodeSubmission};
use codefix_gemini::CodeAssistant;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, assistant: Arc<A>)
where
    A: CodeAssistant + Sync + 'static,
{
    match action {
        UpdateAction::AnalyzeCode(submission) => {
            spawn_analysis(submission, msg_tx, assistant);
        }

        UpdateAction::ExecuteCode(submission) => {
            spawn_execution(submission, msg_tx, assistant);
        }

        UpdateAction::LoadFile { path } => {
            spawn_file_load(path, msg_tx);
        }

        UpdateAction::CopyToClipboard { text } => {
            spawn_clipboard_copy(text, msg_tx);
        }
    }
}

fn spawn_analysis<A>(
    submission: CodeSubmission,
    msg_tx: mpsc::Sender<Message>,
    assistant: Arc<A>,
) where
    A: CodeAssistant + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match assistant.analyze(&submission).await {
            Ok(result) => Message::AnalysisCompleted {
                result: Box::new(result),
            },
            Err(e) => {
                error!("Gemini analysis error: {}", e);
                Message::AnalysisFailed {
                    error: e.to_string(),
                }
            }
        };
        send(&msg_tx, msg).await;
    });
}

fn spawn_execution<A>(
    submission: CodeSubmission,
    msg_tx: mpsc::Sender<Message>,
    assistant: Arc<A>,
) where
    A: CodeAssistant + Sync + 'static,
{
    tokio::spawn(async move {
        let output = assistant.execute(&submission).await;
        send(&msg_tx, Message::ExecutionCompleted { output }).await;
    });
}

fn spawn_file_load(path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let read_path = path.clone();
        let msg = match tokio::task::spawn_blocking(move || encode_file(&read_path)).await {
            Ok(Ok(file)) => Message::FileLoaded { path, file },
            Ok(Err(e)) => Message::FileLoadFailed {
                path,
                error: file_error_reason(&e),
            },
            Err(e) => Message::FileLoadFailed {
                path,
                error: format!("file loader panicked: {}", e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

fn spawn_clipboard_copy(text: String, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match tokio::task::spawn_blocking(move || copy_to_clipboard(&text)).await {
            Ok(Ok(())) => Message::CopyFinished,
            Ok(Err(e)) => Message::CopyFailed {
                error: e.to_string(),
            },
            Err(e) => Message::CopyFailed {
                error: format!("clipboard task panicked: {}", e),
            },
        };
        send(&msg_tx, msg).await;
    });
}

/// Write text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::clipboard(e.to_string()))?;
    debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

fn file_error_reason(error: &Error) -> String {
    match error {
        Error::FileRead { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

/// Report a task result back to the event loop
async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = try_send(msg_tx, msg).await {
        debug!("Dropping task result: {}", e);
    }
}

async fn try_send(msg_tx: &mpsc::Sender<Message>, msg: Message) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|e| Error::channel_send(format!("event loop gone, lost {:?}", e.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codefix_core::{AnalysisResult, EncodedFile};
    use std::time::Duration;
    use tempfile::tempdir;

    pub(crate) struct StubAssistant {
        pub fail: bool,
    }

    pub(crate) fn stub_result() -> AnalysisResult {
        AnalysisResult {
            language: "Python".into(),
            errors: vec![],
            correct_syntax: "print(1)".into(),
            explanation: "Looks good".into(),
            simplified_logic: None,
            formatted_code: "print(1)".into(),
            learning_tips: vec![],
            output: Some("1".into()),
        }
    }

    impl CodeAssistant for StubAssistant {
        async fn analyze(&self, _submission: &CodeSubmission) -> Result<AnalysisResult> {
            if self.fail {
                Err(Error::service("HTTP 500: boom"))
            } else {
                Ok(stub_result())
            }
        }

        async fn execute(&self, submission: &CodeSubmission) -> String {
            format!("ran {} bytes", submission.code.len())
        }
    }

    async fn recv(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_analyze_action_reports_result() {
        let (tx, mut rx) = mpsc::channel(4);
        let submission = CodeSubmission::new("print(1)", None);
        handle_action(
            UpdateAction::AnalyzeCode(submission),
            tx,
            Arc::new(StubAssistant { fail: false }),
        );

        match recv(&mut rx).await {
            Message::AnalysisCompleted { result } => assert_eq!(result.language, "Python"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze_action_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let submission = CodeSubmission::new("print(1)", None);
        handle_action(
            UpdateAction::AnalyzeCode(submission),
            tx,
            Arc::new(StubAssistant { fail: true }),
        );

        match recv(&mut rx).await {
            Message::AnalysisFailed { error } => assert!(error.contains("boom")),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_action_reports_output() {
        let (tx, mut rx) = mpsc::channel(4);
        let submission = CodeSubmission::new("abc", None);
        handle_action(
            UpdateAction::ExecuteCode(submission),
            tx,
            Arc::new(StubAssistant { fail: false }),
        );

        match recv(&mut rx).await {
            Message::ExecutionCompleted { output } => assert_eq!(output, "ran 3 bytes"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_file_action_encodes_source() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("main.py");
        std::fs::write(&path, "print('hi')").unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::LoadFile { path: path.clone() },
            tx,
            Arc::new(StubAssistant { fail: false }),
        );

        match recv(&mut rx).await {
            Message::FileLoaded {
                path: loaded,
                file: EncodedFile::Source { text, .. },
            } => {
                assert_eq!(loaded, path);
                assert_eq!(text, "print('hi')");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_after_loop_exit_is_channel_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let err = try_send(&tx, Message::CopyFinished).await.unwrap_err();
        assert!(matches!(err, Error::ChannelSend { .. }));
        assert!(err.to_string().contains("CopyFinished"));
    }

    #[tokio::test]
    async fn test_task_result_dropped_quietly_when_loop_gone() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        send(&tx, Message::CopyFinished).await;
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_failure() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.png");

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::LoadFile { path },
            tx,
            Arc::new(StubAssistant { fail: false }),
        );

        assert!(matches!(
            recv(&mut rx).await,
            Message::FileLoadFailed { .. }
        ));
    }
}
