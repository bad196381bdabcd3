use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use eventease_logging::{ee_debug, ee_info, ee_warn};
use thiserror::Error;

use crate::{
    ApiError, AssistantApi, ClientSettings, DocumentUpload, EngineEvent, FailureKind,
    ReqwestAssistant,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
    #[error("request engine has stopped")]
    Stopped,
}

enum EngineCommand {
    SendChat {
        query: String,
    },
    Upload {
        file_name: String,
        path: PathBuf,
        override_existing: bool,
    },
}

/// Submits requests to the background engine thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receives request completions from the engine thread.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts an engine talking to the assistant service described by `settings`.
    pub fn new(settings: ClientSettings) -> Result<(Self, EngineEvents), EngineError> {
        let conversation_id = settings.conversation_id.clone();
        let api = ReqwestAssistant::new(settings)?;
        Self::with_api(Arc::new(api), conversation_id)
    }

    /// Starts an engine on top of any [`AssistantApi`] implementation.
    pub fn with_api(
        api: Arc<dyn AssistantApi>,
        conversation_id: String,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let conversation_id = Arc::new(conversation_id);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let conversation_id = conversation_id.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), &conversation_id, command, event_tx).await;
                });
            }
            ee_debug!("engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    /// Queues a chat request. Fails with [`EngineError::Stopped`] once the
    /// engine thread is gone, in which case no completion will ever arrive.
    pub fn send_chat(&self, query: impl Into<String>) -> Result<(), EngineError> {
        self.submit(EngineCommand::SendChat {
            query: query.into(),
        })
    }

    pub fn upload(
        &self,
        file_name: impl Into<String>,
        path: impl Into<PathBuf>,
        override_existing: bool,
    ) -> Result<(), EngineError> {
        self.submit(EngineCommand::Upload {
            file_name: file_name.into(),
            path: path.into(),
            override_existing,
        })
    }

    fn submit(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|_| {
            ee_warn!("engine thread is gone; request dropped");
            EngineError::Stopped
        })
    }
}

impl EngineEvents {
    /// Blocks until the next completion, or returns `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn AssistantApi,
    conversation_id: &str,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::SendChat { query } => {
            let result = api.send_chat_message(&query, conversation_id).await;
            match &result {
                Ok(_) => ee_info!("chat request answered"),
                Err(err) => ee_warn!("chat request failed ({}): {}", err.kind, err),
            }
            EngineEvent::ChatCompleted { result }
        }
        EngineCommand::Upload {
            file_name,
            path,
            override_existing,
        } => {
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let document = DocumentUpload {
                        file_name: file_name.clone(),
                        bytes,
                    };
                    api.upload_document(document, override_existing).await
                }
                Err(err) => Err(ApiError::new(FailureKind::Io, err.to_string())),
            };
            match &result {
                Ok(_) => ee_info!("upload of {} accepted", file_name),
                Err(err) => ee_warn!("upload of {} failed ({}): {}", file_name, err.kind, err),
            }
            EngineEvent::UploadCompleted { file_name, result }
        }
    };
    let _ = event_tx.send(event);
}
