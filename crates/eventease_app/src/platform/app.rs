use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use eventease_core::{update, AppState, Msg, SelectedFile};
use eventease_logging::{ee_debug, ee_info, ee_warn};

use super::config::Cli;
use super::effects::EffectRunner;
use super::input::{parse_line, InputCommand, HELP_LINES};
use super::logging;
use super::ui::constants::{BUSY_HINT, UPLOAD_BUSY_HINT};
use super::ui::render::TerminalRenderer;

/// Everything the UI thread reacts to.
pub enum UiEvent {
    /// A line typed at the prompt.
    Line(String),
    /// A request completion, already folded into a core message.
    Engine(Msg),
    /// Standard input reached end of file.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log_to);

    let settings = cli
        .client_settings()
        .context("invalid assistant service configuration")?;
    ee_info!(
        "starting against {} conversation_id={}",
        settings.base_url,
        settings.conversation_id
    );

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let runner =
        EffectRunner::new(settings, ui_tx.clone()).context("failed to start request engine")?;
    spawn_input_reader(ui_tx);

    let mut app = App::new(runner, TerminalRenderer::new(usize::from(cli.width)));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, &app.renderer.banner())?;
    write_lines(&mut out, &HELP_LINES)?;

    while let Ok(event) = ui_rx.recv() {
        let (flow, lines) = app.handle_event(event);
        write_lines(&mut out, &lines)?;
        if flow == Flow::Quit {
            break;
        }
    }

    ee_info!("exiting");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    renderer: TerminalRenderer,
    quit_when_idle: bool,
}

impl App {
    fn new(runner: EffectRunner, renderer: TerminalRenderer) -> Self {
        Self {
            state: AppState::new(),
            runner,
            renderer,
            quit_when_idle: false,
        }
    }

    fn handle_event(&mut self, event: UiEvent) -> (Flow, Vec<String>) {
        match event {
            UiEvent::Line(line) => self.handle_command(parse_line(&line)),
            UiEvent::Engine(msg) => {
                let lines = self.dispatch(msg);
                (self.flow_after_reply(), lines)
            }
            UiEvent::InputClosed => {
                ee_debug!("stdin closed");
                self.quit_when_idle = true;
                (self.flow_after_reply(), Vec::new())
            }
        }
    }

    fn flow_after_reply(&self) -> Flow {
        if self.quit_when_idle && !self.state.has_pending_request() {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn handle_command(&mut self, command: InputCommand) -> (Flow, Vec<String>) {
        let lines = match command {
            InputCommand::Say(text) => {
                if self.state.chat().is_sending() {
                    vec![BUSY_HINT.to_string()]
                } else {
                    let mut lines = self.dispatch(Msg::InputChanged(text));
                    lines.extend(self.dispatch(Msg::SendClicked));
                    lines
                }
            }
            InputCommand::SelectFile(path) => {
                if self.state.upload().is_uploading() {
                    vec![UPLOAD_BUSY_HINT.to_string()]
                } else if !path.is_file() {
                    vec![format!("No such file: {}", path.display())]
                } else {
                    self.dispatch(Msg::FileSelected(Some(SelectedFile::from_path(path))))
                }
            }
            InputCommand::Unselect => {
                let mut lines = self.dispatch(Msg::FileSelected(None));
                if self.state.upload().selected().is_none() {
                    lines.push("[upload] No file selected.".to_string());
                }
                lines
            }
            InputCommand::Upload => self.dispatch(Msg::UploadClicked),
            InputCommand::Help => HELP_LINES.iter().map(|line| line.to_string()).collect(),
            InputCommand::Quit => return (Flow::Quit, Vec::new()),
            InputCommand::Usage(usage) => vec![format!("Usage: {usage}")],
            InputCommand::Unknown(command) => vec![format!(
                "Unknown command /{command}. Type /help for the list of commands."
            )],
            InputCommand::Empty => Vec::new(),
        };
        (Flow::Continue, lines)
    }

    /// Applies one message, starts its effects and renders whatever changed.
    fn dispatch(&mut self, msg: Msg) -> Vec<String> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        let refused = self.runner.enqueue(effects);
        let mut lines = if was_dirty {
            self.renderer.render(&view)
        } else {
            Vec::new()
        };
        for msg in refused {
            lines.extend(self.dispatch(msg));
        }
        lines
    }
}

fn spawn_input_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        forward_lines(stdin.lock(), &ui_tx);
    });
}

/// Sends each input line to the UI thread, then `InputClosed`. Bytes that
/// are not UTF-8 are replaced rather than ending the session.
fn forward_lines(mut reader: impl BufRead, ui_tx: &mpsc::Sender<UiEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']).to_string();
                if ui_tx.send(UiEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                ee_warn!("stdin read failed: {}", err);
                break;
            }
        }
    }
    let _ = ui_tx.send(UiEvent::InputClosed);
}

fn write_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}
