//! Adapter that drives an external UCI engine process (Stockfish or
//! anything else speaking the protocol) behind the [`Engine`] trait.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use chess_rules::{Engine, EngineError, EngineRequest};
use tracing::{debug, trace, warn};

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
const MIN_MOVE_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_MOVE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct UciEngine {
    name: String,
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
}

impl UciEngine {
    pub fn spawn(program: impl AsRef<OsStr>) -> Result<Self, EngineError> {
        Self::from_command(Command::new(program))
    }

    /// Starts `command` and completes the `uci`/`uciok` handshake.
    pub fn from_command(mut command: Command) -> Result<Self, EngineError> {
        let program = command.get_program().to_string_lossy().into_owned();
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EngineError::Unavailable(format!("{program}: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Unavailable(format!("{program}: no stdin")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Unavailable(format!("{program}: no stdout")))?;

        // The process only ever writes lines; a reader thread turns them into
        // a channel so every wait can have a deadline.
        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        let mut engine = UciEngine {
            name: program,
            child,
            stdin,
            lines,
        };
        engine.send("uci")?;
        let mut name = None;
        engine.wait_for(HANDSHAKE_TIMEOUT, |line| {
            if let Some(id) = line.strip_prefix("id name ") {
                name = Some(id.trim().to_string());
            }
            line == "uciok"
        })?;
        if let Some(name) = name {
            engine.name = name;
        }
        engine.sync()?;
        debug!(engine = %engine.name, "UCI engine ready");
        Ok(engine)
    }

    fn send(&mut self, command: &str) -> Result<(), EngineError> {
        trace!(command, "to engine");
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Reads lines until `done` accepts one; returns that line.
    fn wait_for(
        &mut self,
        timeout: Duration,
        mut done: impl FnMut(&str) -> bool,
    ) -> Result<String, EngineError> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(left) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    trace!(line = %line, "from engine");
                    if done(&line) {
                        return Ok(line);
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Err(EngineError::Timeout(timeout)),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(EngineError::Unavailable(format!("{} exited", self.name)));
                }
            }
        }
    }

    fn sync(&mut self) -> Result<(), EngineError> {
        self.send("isready")?;
        self.wait_for(HANDSHAKE_TIMEOUT, |line| line == "readyok")?;
        Ok(())
    }
}

/// Deeper searches get longer, within 3..=30 seconds.
pub fn move_timeout(depth: u8) -> Duration {
    Duration::from_secs(u64::from(depth)).clamp(MIN_MOVE_TIMEOUT, MAX_MOVE_TIMEOUT)
}

/// Move text out of a `bestmove` line; `None` when the engine has no move.
pub fn parse_bestmove(line: &str) -> Option<&str> {
    let mv = line.strip_prefix("bestmove")?.split_whitespace().next()?;
    match mv {
        "(none)" | "0000" => None,
        mv => Some(mv),
    }
}

impl Engine for UciEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn best_move(&mut self, request: &EngineRequest) -> Result<String, EngineError> {
        self.send(&format!("position fen {}", request.fen))?;
        let go = match request.move_time {
            Some(t) => format!("go depth {} movetime {}", request.depth, t.as_millis()),
            None => format!("go depth {}", request.depth),
        };
        self.send(&go)?;
        let line = self.wait_for(move_timeout(request.depth), |l| l.starts_with("bestmove"))?;
        parse_bestmove(&line)
            .map(str::to_string)
            .ok_or(EngineError::NoMove)
    }

    fn new_game(&mut self) {
        if let Err(e) = self.send("ucinewgame").and_then(|_| self.sync()) {
            warn!(engine = %self.name, error = %e, "new game not acknowledged");
        }
    }

    fn set_skill_level(&mut self, level: u8) {
        let level = level.min(20);
        let sent = self.send(&format!("setoption name Skill Level value {level}"));
        if let Err(e) = sent.and_then(|_| self.sync()) {
            warn!(engine = %self.name, error = %e, "skill level not applied");
        }
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        let _ = self.send("quit");
        thread::sleep(Duration::from_millis(50));
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
