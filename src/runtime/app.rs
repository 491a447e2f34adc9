use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg, OpenOrigin};
use crate::model::AppModel;
use crate::update::update;
use crate::util::{read_text_file, write_text_file};

/// Whether the editor should keep running after a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the model and performs the side effects `update` asks for
pub struct App {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    quit_requested: bool,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            msg_tx,
            msg_rx,
            quit_requested: false,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    /// Open the files given on the command line, in order
    pub fn open_startup_files(&mut self, paths: Vec<std::path::PathBuf>) -> Flow {
        for path in paths {
            self.dispatch(Msg::App(AppMsg::OpenFile {
                path,
                origin: OpenOrigin::Startup,
            }));
        }
        self.flow()
    }

    /// Run one message through `update`, then everything it triggers
    pub fn dispatch(&mut self, msg: Msg) -> Flow {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        self.process_async_messages();
        self.flow()
    }

    fn flow(&self) -> Flow {
        if self.quit_requested {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::SaveFile {
                document_id,
                path,
                content,
            } => {
                let result = write_text_file(&path, &content);
                let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted {
                    document_id,
                    path,
                    result,
                }));
            }
            Cmd::LoadFile {
                path,
                origin,
                replace,
            } => {
                let result = read_text_file(&path);
                let _ = self.msg_tx.send(Msg::App(AppMsg::FileLoaded {
                    path,
                    origin,
                    replace,
                    result,
                }));
            }
            Cmd::Quit => {
                self.quit_requested = true;
            }
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }
}
