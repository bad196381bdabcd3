use std::sync::mpsc;
use std::thread;

use eventease_client::{ClientSettings, EngineError, EngineEvent, EngineEvents, EngineHandle};
use eventease_core::{Effect, Msg};
use eventease_logging::{ee_debug, ee_info, ee_warn};

use super::app::UiEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        ui_tx: mpsc::Sender<UiEvent>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, ui_tx);
        Ok(Self { engine })
    }

    /// Starts each effect on the engine. Effects the engine refuses come
    /// back as failure messages so their panel leaves the pending state.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut refused = Vec::new();
        for effect in effects {
            match effect {
                Effect::SendChat { query } => {
                    ee_info!("SendChat query_len={}", query.len());
                    if let Err(err) = self.engine.send_chat(query) {
                        refused.push(refused_chat(&err));
                    }
                }
                Effect::UploadDocument {
                    file,
                    override_existing,
                } => {
                    ee_info!(
                        "UploadDocument file={} override={}",
                        file.name,
                        override_existing
                    );
                    if let Err(err) = self.engine.upload(file.name, file.path, override_existing) {
                        refused.push(refused_upload(&err));
                    }
                }
            }
        }
        refused
    }
}

fn refused_chat(err: &EngineError) -> Msg {
    ee_warn!("chat request not started: {}", err);
    Msg::ChatFailed {
        message: err.to_string(),
    }
}

fn refused_upload(err: &EngineError) -> Msg {
    ee_warn!("upload not started: {}", err);
    Msg::UploadFailed {
        detail: None,
        message: Some(err.to_string()),
    }
}

fn spawn_event_loop(events: EngineEvents, ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if ui_tx.send(UiEvent::Engine(to_msg(event))).is_err() {
                break;
            }
        }
        ee_debug!("engine event loop stopped");
    });
}

/// Folds a request completion into the message the state machine understands.
fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ChatCompleted { result } => match result {
            Ok(answer) => Msg::ChatAnswered {
                answer: answer.answer,
            },
            Err(err) => Msg::ChatFailed {
                message: err.message,
            },
        },
        EngineEvent::UploadCompleted { result, .. } => match result {
            Ok(receipt) => Msg::UploadSucceeded {
                detail: receipt.detail,
            },
            Err(err) => Msg::UploadFailed {
                detail: err.detail,
                message: Some(err.message),
            },
        },
    }
}
