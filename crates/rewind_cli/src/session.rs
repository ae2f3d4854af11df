//! Session loop: serializes input into one intent queue and folds it.
//!
//! A reader (a tokio task, or a thread for blocking stdin) turns input lines
//! into commands and pushes them onto an unbounded channel. The session loop is the only consumer, so intents reach
//! the controller strictly in arrival order.

use crate::config::AppConfig;
use crate::input::{Command, InputError, parse_line};
use crate::render::render;
use anyhow::{Context, Result};
use rewind_tictactoe::GameController;
use std::io::BufRead;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// When views are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// At startup and after every accepted intent or `view` command.
    EveryChange,
    /// Once, after the input is exhausted.
    FinalOnly,
}

/// A parsed line with its 1-based line number.
#[derive(Debug)]
struct InputLine {
    number: usize,
    parsed: Result<Command, InputError>,
}

/// Drives a controller from a text source.
pub struct Session<W, E> {
    controller: GameController,
    config: AppConfig,
    emit: EmitMode,
    out: W,
    err: E,
}

impl<W, E> Session<W, E>
where
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    /// Creates a session writing views to `out` and diagnostics to `err`.
    #[instrument(skip(out, err))]
    pub fn new(config: AppConfig, emit: EmitMode, out: W, err: E) -> Self {
        Self {
            controller: GameController::with_jump_policy(*config.jump_policy()),
            config,
            emit,
            out,
            err,
        }
    }

    /// Reads commands from an async source until end of input or `quit`.
    ///
    /// Returns the controller in its final state.
    #[instrument(skip_all, fields(emit = ?self.emit))]
    pub async fn run<R>(self, input: R) -> Result<GameController>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let reader = tokio::spawn(read_lines(input, tx));
        let outcome = self.drive(rx).await;
        reader.abort();
        outcome
    }

    /// Reads commands from a blocking source on a dedicated thread.
    ///
    /// Used for interactive stdin: a blocked read cannot be cancelled, so the
    /// thread is left behind on `quit` and the session returns at once.
    #[instrument(skip_all, fields(emit = ?self.emit))]
    pub async fn run_blocking<R>(self, input: R) -> Result<GameController>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("rewind-input".to_string())
            .spawn(move || read_lines_blocking(input, tx))
            .context("Failed to spawn input thread")?;
        self.drive(rx).await
    }

    async fn drive(
        mut self,
        mut rx: mpsc::UnboundedReceiver<std::io::Result<InputLine>>,
    ) -> Result<GameController> {
        info!("Session started");
        if self.emit == EmitMode::EveryChange {
            self.write_view().await?;
        }

        while let Some(queued) = rx.recv().await {
            let line = queued.context("Failed to read input")?;
            match line.parsed {
                Ok(Command::Quit) => {
                    debug!(line = line.number, "Quit requested");
                    break;
                }
                Ok(Command::View) => self.write_view().await?,
                Ok(Command::Intent(intent)) => {
                    let outcome = self.controller.submit(intent);
                    match outcome.rejection() {
                        None if self.emit == EmitMode::EveryChange => self.write_view().await?,
                        None => {}
                        Some(rejection) => {
                            let message = format!("line {}: ignored {}: {}", line.number, intent, rejection);
                            self.write_diagnostic(&message).await?;
                        }
                    }
                }
                Err(e) => {
                    warn!(line = line.number, error = %e, "Unparseable input");
                    let message = format!("line {}: {}", line.number, e);
                    self.write_diagnostic(&message).await?;
                }
            }
        }

        if self.emit == EmitMode::FinalOnly {
            self.write_view().await?;
        }
        self.out.flush().await?;
        self.err.flush().await?;

        info!(
            plies = self.controller.history().current_ply(),
            status = %self.controller.status(),
            "Session finished"
        );
        Ok(self.controller)
    }

    async fn write_view(&mut self) -> Result<()> {
        let rendered = render(&self.controller.current_view(), *self.config.format())
            .context("Failed to render view")?;
        self.out.write_all(rendered.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn write_diagnostic(&mut self, message: &str) -> Result<()> {
        if *self.config.echo_rejections() {
            self.err.write_all(message.as_bytes()).await?;
            self.err.write_all(b"\n").await?;
        }
        Ok(())
    }
}

/// Numbers a raw line; blank and comment-only lines yield nothing.
fn queue_line(number: usize, line: &str) -> Option<InputLine> {
    let parsed = match parse_line(line) {
        Ok(Some(command)) => Ok(command),
        Ok(None) => return None,
        Err(e) => Err(e),
    };
    Some(InputLine { number, parsed })
}

/// Parses lines from `input` and queues them; stops when the receiver is gone.
async fn read_lines<R>(input: R, tx: mpsc::UnboundedSender<std::io::Result<InputLine>>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut number = 0;

    loop {
        let queued = match lines.next_line().await {
            Ok(Some(line)) => {
                number += 1;
                match queue_line(number, &line) {
                    Some(line) => Ok(line),
                    None => continue,
                }
            }
            Ok(None) => break,
            Err(e) => Err(e),
        };
        let failed = queued.is_err();
        if tx.send(queued).is_err() {
            debug!("Session closed, reader stopping");
            break;
        }
        if failed {
            break;
        }
    }
}

/// Blocking counterpart of [`read_lines`], run on its own thread.
fn read_lines_blocking<R>(input: R, tx: mpsc::UnboundedSender<std::io::Result<InputLine>>)
where
    R: BufRead,
{
    for (index, line) in input.lines().enumerate() {
        let queued = match line {
            Ok(line) => match queue_line(index + 1, &line) {
                Some(line) => Ok(line),
                None => continue,
            },
            Err(e) => Err(e),
        };
        let failed = queued.is_err();
        if tx.send(queued).is_err() {
            debug!("Session closed, input thread stopping");
            break;
        }
        if failed {
            break;
        }
    }
}
