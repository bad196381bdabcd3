use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use eventease_client::{
    ApiError, AssistantApi, ChatAnswer, ClientSettings, DocumentUpload, EngineEvent, EngineEvents,
    EngineHandle, FailureKind, IngestReceipt,
};
use tempfile::NamedTempFile;

#[derive(Default)]
struct RecordingApi {
    chats: Mutex<Vec<(String, String)>>,
    uploads: Mutex<Vec<(DocumentUpload, bool)>>,
}

#[async_trait::async_trait]
impl AssistantApi for RecordingApi {
    async fn send_chat_message(
        &self,
        query: &str,
        conversation_id: &str,
    ) -> Result<ChatAnswer, ApiError> {
        self.chats
            .lock()
            .unwrap()
            .push((query.to_string(), conversation_id.to_string()));
        Ok(ChatAnswer {
            answer: Some(format!("echo: {query}")),
        })
    }

    async fn upload_document(
        &self,
        document: DocumentUpload,
        override_existing: bool,
    ) -> Result<IngestReceipt, ApiError> {
        self.uploads
            .lock()
            .unwrap()
            .push((document, override_existing));
        Ok(IngestReceipt {
            detail: Some("indexed".to_string()),
            ..IngestReceipt::default()
        })
    }
}

fn next_event(events: &EngineEvents) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = events.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "engine did not answer in time");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn chat_command_uses_configured_conversation() {
    let api = Arc::new(RecordingApi::default());
    let (engine, events) = EngineHandle::with_api(api.clone(), "planner-42".to_string()).unwrap();

    engine.send_chat("Where is the keynote?").unwrap();

    match next_event(&events) {
        EngineEvent::ChatCompleted { result } => {
            assert_eq!(
                result.unwrap().answer.as_deref(),
                Some("echo: Where is the keynote?")
            );
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        api.chats.lock().unwrap().as_slice(),
        &[(
            "Where is the keynote?".to_string(),
            "planner-42".to_string()
        )]
    );
}

#[test]
fn upload_command_reads_file_contents() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Day 1: registration").unwrap();

    let api = Arc::new(RecordingApi::default());
    let (engine, events) = EngineHandle::with_api(api.clone(), "demo_user".to_string()).unwrap();

    engine.upload("agenda.txt", file.path(), true).unwrap();

    match next_event(&events) {
        EngineEvent::UploadCompleted { file_name, result } => {
            assert_eq!(file_name, "agenda.txt");
            assert_eq!(result.unwrap().detail.as_deref(), Some("indexed"));
        }
        other => panic!("unexpected event {other:?}"),
    }
    let uploads = api.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0.file_name, "agenda.txt");
    assert_eq!(uploads[0].0.bytes, b"Day 1: registration");
    assert!(uploads[0].1);
}

#[test]
fn unreadable_upload_source_is_reported_as_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.pdf");

    let api = Arc::new(RecordingApi::default());
    let (engine, events) = EngineHandle::with_api(api.clone(), "demo_user".to_string()).unwrap();

    engine.upload("missing.pdf", &missing, true).unwrap();

    match next_event(&events) {
        EngineEvent::UploadCompleted { result, .. } => {
            let err = result.unwrap_err();
            assert_eq!(err.kind, FailureKind::Io);
            assert!(err.detail.is_none());
            assert!(!err.message.is_empty());
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(api.uploads.lock().unwrap().is_empty());
}

#[test]
fn engine_starts_from_settings() {
    let settings = ClientSettings::default();
    assert!(EngineHandle::new(settings).is_ok());
}
