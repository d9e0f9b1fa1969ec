//! The console game loop: one [`Game`], its clock and an optional bot.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use chess_pgn::PgnGame;
use chess_rules::{BotDifficulty, ChessClock, Color, Engine, Game, Player, Timer};
use random_engine::RandomEngine;
use tracing::{info, warn};

use crate::commands::{Command, HELP};
use crate::config::{BotConfig, Config};
use crate::display::{clock_line, render_board, status_line};
use crate::uci::UciEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Bot {
    engine: Box<dyn Engine>,
    color: Color,
    difficulty: BotDifficulty,
}

impl Bot {
    pub fn new(mut engine: Box<dyn Engine>, color: Color, difficulty: BotDifficulty) -> Self {
        engine.set_skill_level(difficulty.skill_level());
        Self {
            engine,
            color,
            difficulty,
        }
    }

    pub fn from_config(config: &BotConfig) -> anyhow::Result<Self> {
        let engine: Box<dyn Engine> = match config.engine.uci_path() {
            None => Box::new(RandomEngine::new()),
            Some(path) => Box::new(
                UciEngine::spawn(&path)
                    .with_context(|| format!("failed to start engine {}", path.display()))?,
            ),
        };
        info!(engine = engine.name(), color = %config.color, difficulty = %config.difficulty, "bot ready");
        Ok(Self::new(engine, config.color, config.difficulty))
    }
}

pub struct Session<W: Write> {
    config: Config,
    game: Game,
    clock: ChessClock,
    bot: Option<Bot>,
    out: W,
}

impl<W: Write> Session<W> {
    /// Builds the session, starting the configured engine if any.
    pub fn new(config: Config, out: W) -> anyhow::Result<Self> {
        let bot = config.bot.as_ref().map(Bot::from_config).transpose()?;
        Ok(Self::with_bot(config, bot, out))
    }

    pub fn with_bot(config: Config, bot: Option<Bot>, out: W) -> Self {
        let game = new_game(&config, bot.as_ref().map(|b| b.color));
        let clock = ChessClock::new(config.time_control);
        Self {
            config,
            game,
            clock,
            bot,
            out,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Shows the opening position and lets the bot move if it has White.
    pub fn start(&mut self) -> anyhow::Result<()> {
        let tc = self.config.time_control;
        if !tc.is_untimed() {
            writeln!(self.out, "Time control {tc}")?;
        }
        self.clock.start(self.game.current_color());
        self.show_board()?;
        self.bot_turn()?;
        self.prompt()
    }

    pub fn prompt(&mut self) -> anyhow::Result<()> {
        if let Some(line) = clock_line(&self.clock) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "{}", status_line(&self.game))?;
        self.out.flush()?;
        Ok(())
    }

    /// Handles one line of input. Rule violations are reported and the
    /// session goes on; only I/O failures end it.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        if self.check_flag()? {
            return Ok(Flow::Continue);
        }
        let cmd = match Command::parse(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(usage) => {
                writeln!(self.out, "{usage}")?;
                return Ok(Flow::Continue);
            }
        };
        match self.execute(cmd) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(self.out, "Error: {e:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> anyhow::Result<Flow> {
        match cmd {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Board => self.show_board()?,
            Command::New => self.new_game()?,
            Command::Load(path) => self.load(&path)?,
            Command::Save(path) => self.save(&path)?,
            Command::Resign => {
                let side = self.human_color();
                self.game.resign(side)?;
                self.clock.stop_and_increment();
            }
            Command::OfferDraw => self.offer_draw()?,
            Command::AcceptDraw => {
                let side = self.answering_side();
                self.game.accept_draw(side)?;
                self.clock.stop_and_increment();
            }
            Command::DeclineDraw => {
                let side = self.answering_side();
                self.game.decline_draw(side)?;
                writeln!(self.out, "Draw offer declined")?;
            }
            Command::Undo => self.undo()?,
            Command::Move(text) => self.play_move(&text)?,
        }
        Ok(Flow::Continue)
    }

    fn play_move(&mut self, text: &str) -> anyhow::Result<()> {
        if self.bot.as_ref().map(|b| b.color) == Some(self.game.current_color()) {
            bail!("it is the bot's turn");
        }
        self.game.play(text)?;
        self.after_move()?;
        self.bot_turn()
    }

    /// Lets the bot move while it is its turn.
    fn bot_turn(&mut self) -> anyhow::Result<()> {
        let Some(bot) = self.bot.as_mut() else {
            return Ok(());
        };
        if self.game.is_over() || self.game.current_color() != bot.color {
            return Ok(());
        }
        let depth = bot.difficulty.search_depth();
        match self.game.play_engine_move(bot.engine.as_mut(), depth) {
            Ok(_) => {
                let san = self.game.notation().last().cloned().unwrap_or_default();
                writeln!(self.out, "{} plays {san}", self.game.player(bot.color).name)?;
                self.after_move()
            }
            Err(e) => {
                warn!(error = %e, "bot could not move");
                writeln!(self.out, "The bot could not move: {e}")?;
                Ok(())
            }
        }
    }

    fn after_move(&mut self) -> anyhow::Result<()> {
        if self.game.is_over() {
            self.clock.stop_and_increment();
        } else {
            self.clock.start(self.game.current_color());
        }
        self.show_board()
    }

    /// Ends the game when the side to move has run out of time.
    fn check_flag(&mut self) -> anyhow::Result<bool> {
        let timer: &dyn Timer = &self.clock;
        if self.game.observe_timer(timer) {
            self.clock.stop_and_increment();
            writeln!(self.out, "{}", status_line(&self.game))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        if self.bot.is_some() {
            self.game.undo_turn()?;
        } else {
            self.game.undo()?;
        }
        self.clock.start(self.game.current_color());
        self.show_board()?;
        self.bot_turn()
    }

    fn offer_draw(&mut self) -> anyhow::Result<()> {
        let side = self.human_color();
        self.game.offer_draw(side)?;
        if let Some(bot) = &self.bot {
            self.game.decline_draw(bot.color)?;
            writeln!(self.out, "{} declines the draw", self.game.player(bot.color).name)?;
        } else {
            writeln!(self.out, "{side} offers a draw (accept / decline)")?;
        }
        Ok(())
    }

    fn new_game(&mut self) -> anyhow::Result<()> {
        self.game.reset();
        self.clock.reset();
        if let Some(bot) = self.bot.as_mut() {
            bot.engine.new_game();
        }
        writeln!(self.out, "New game")?;
        self.clock.start(self.game.current_color());
        self.show_board()?;
        self.bot_turn()
    }

    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let record: PgnGame = if is_json(path) {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("invalid game {}", path.display()))?
        } else {
            chess_pgn::read_file(path)?
        };
        let bot_color = self.bot.as_ref().map(|b| b.color);
        let (white, black) = players(&self.config, bot_color);
        let game = record.to_game(white, black)?;
        self.game = game.with_undo_capacity(self.config.undo_capacity);
        self.clock.reset();
        info!(path = %path.display(), plies = self.game.history().len(), "game loaded");
        writeln!(
            self.out,
            "Loaded {} moves from {}",
            self.game.history().len(),
            path.display()
        )?;
        self.clock.start(self.game.current_color());
        self.show_board()?;
        self.bot_turn()
    }

    fn save(&mut self, path: &Path) -> anyhow::Result<()> {
        let record = PgnGame::from_game(&self.game);
        if is_json(path) {
            let json = serde_json::to_string_pretty(&record)?;
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        } else {
            chess_pgn::write_file(path, &record)?;
        }
        writeln!(self.out, "Saved to {}", path.display())?;
        Ok(())
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        write!(self.out, "{}", render_board(self.game.board()))?;
        Ok(())
    }

    /// The human's side against a bot, else whoever is to move.
    fn human_color(&self) -> Color {
        match &self.bot {
            Some(bot) => bot.color.other(),
            None => self.game.current_color(),
        }
    }

    /// The side a pending draw offer is addressed to.
    fn answering_side(&self) -> Color {
        self.game
            .draw_offer()
            .map(Color::other)
            .unwrap_or_else(|| self.human_color())
    }
}

fn players(config: &Config, bot_color: Option<Color>) -> (Player, Player) {
    let make = |name: &str, color: Color| {
        if bot_color == Some(color) {
            Player::engine(name, color)
        } else {
            Player::human(name, color)
        }
    };
    (
        make(&config.white_name, Color::White),
        make(&config.black_name, Color::Black),
    )
}

fn new_game(config: &Config, bot_color: Option<Color>) -> Game {
    let (white, black) = players(config, bot_color);
    Game::new(white, black).with_undo_capacity(config.undo_capacity)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
