//! Line-oriented console input.
//!
//! Each line holds whitespace-separated key names (`W`, `Tab`, `Escape`) that
//! are resolved through [`KeyBindings`], or a stick sample of the form
//! `stick <x> <y>` routed through [`AnalogAxes`].

use std::io::BufRead;

use crossbeam_channel::Sender;
use scene_camera_input::{AnalogAxes, CameraIntent, IntentSender, KeyAction, KeyBindings};
use tracing::{debug, info, warn};

/// What one console line asks for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineCommand {
    /// Intents to queue, in the order they appeared.
    pub intents: Vec<CameraIntent>,
    /// A quit key was pressed.
    pub quit: bool,
}

/// Why the reader stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A key bound to quit was read.
    Quit,
    /// Input ended.
    EndOfInput,
    /// The intent queue was dropped.
    Disconnected,
}

/// Translates console lines into camera intents.
#[derive(Debug, Clone)]
pub struct Console {
    bindings: KeyBindings,
    axes: AnalogAxes,
}

impl Console {
    pub fn new(bindings: KeyBindings, axes: AnalogAxes) -> Self {
        Self { bindings, axes }
    }

    /// Translate one line. Unknown keys are logged and skipped; everything
    /// after a quit key is ignored.
    pub fn translate(&self, line: &str) -> LineCommand {
        let mut tokens = line.split_whitespace();
        let mut command = LineCommand::default();

        if line.split_whitespace().next() == Some("stick") {
            tokens.next();
            match parse_stick(tokens) {
                Some((x, y)) => command.intents = self.axes.intents(x, y),
                None => warn!("Malformed stick sample: {line:?}"),
            }
            return command;
        }

        for key in tokens {
            match self.bindings.resolve(key) {
                Some(KeyAction::Quit) => {
                    command.quit = true;
                    break;
                }
                Some(action) => command.intents.extend(action.intent()),
                None => warn!("No binding for key {key:?}"),
            }
        }
        command
    }

    /// Read lines until quit or end of input, forwarding intents to `sender`.
    pub fn run<R: BufRead>(&self, reader: R, sender: &IntentSender) -> StopReason {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Console read failed: {e}");
                    break;
                }
            };
            let command = self.translate(&line);
            for intent in command.intents {
                if sender.send(intent).is_err() {
                    debug!("Intent queue closed, stopping console");
                    return StopReason::Disconnected;
                }
            }
            if command.quit {
                info!("Quit requested");
                return StopReason::Quit;
            }
        }
        StopReason::EndOfInput
    }

    /// Spawn a named thread running [`run`](Self::run) on `reader`. The
    /// stop reason is sent on `stop` when it finishes.
    pub fn spawn<R>(
        self,
        reader: R,
        sender: IntentSender,
        stop: Sender<StopReason>,
    ) -> std::io::Result<std::thread::JoinHandle<()>>
    where
        R: BufRead + Send + 'static,
    {
        std::thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || {
                let reason = self.run(reader, &sender);
                let _ = stop.send(reason);
            })
    }
}

fn parse_stick<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<(f32, f32)> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    tokens.next().is_none().then_some((x, y))
}
