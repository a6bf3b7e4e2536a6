//! Runtime-selected session.

use super::ticket::Ticket;
use super::wrapper::Session;
use crate::core::{ArcadeConfig, ArcadeError, GameKind};
use crate::games::{Board2048, Memory, Snake};
use crate::scores::SharedScoreStore;

/// One session of whichever game the player picked.
#[derive(Debug)]
pub enum AnySession {
    Board2048(Session<Board2048>),
    Snake(Session<Snake>),
    Memory(Session<Memory>),
}

macro_rules! dispatch {
    ($self:expr, $session:ident => $body:expr) => {
        match $self {
            AnySession::Board2048($session) => $body,
            AnySession::Snake($session) => $body,
            AnySession::Memory($session) => $body,
        }
    };
}

impl AnySession {
    /// Start a session of `kind` configured from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the section of `config` for `kind` is invalid.
    #[must_use]
    pub fn new(kind: GameKind, config: &ArcadeConfig, store: SharedScoreStore, seed: u64) -> Self {
        match kind {
            GameKind::Board2048 => Self::Board2048(Session::new(config.board_2048.clone(), store, seed)),
            GameKind::Snake => Self::Snake(Session::new(config.snake.clone(), store, seed)),
            GameKind::Memory => Self::Memory(Session::new(config.memory.clone(), store, seed)),
        }
    }

    /// Start a session of `kind`, rejecting an invalid config section.
    pub fn try_new(
        kind: GameKind,
        config: &ArcadeConfig,
        store: SharedScoreStore,
        seed: u64,
    ) -> Result<Self, ArcadeError> {
        Ok(match kind {
            GameKind::Board2048 => Self::Board2048(Session::try_new(config.board_2048.clone(), store, seed)?),
            GameKind::Snake => Self::Snake(Session::try_new(config.snake.clone(), store, seed)?),
            GameKind::Memory => Self::Memory(Session::try_new(config.memory.clone(), store, seed)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        dispatch!(self, s => s.kind())
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        dispatch!(self, s => s.score())
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        dispatch!(self, s => s.high_score())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        dispatch!(self, s => s.is_over())
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        dispatch!(self, s => s.is_paused())
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        dispatch!(self, s => s.generation())
    }

    #[must_use]
    pub fn ticket(&self) -> Ticket {
        dispatch!(self, s => s.ticket())
    }

    pub fn pause(&mut self) {
        dispatch!(self, s => s.pause());
    }

    pub fn resume(&mut self) {
        dispatch!(self, s => s.resume());
    }

    pub fn toggle_pause(&mut self) -> bool {
        dispatch!(self, s => s.toggle_pause())
    }

    pub fn restart(&mut self) {
        dispatch!(self, s => s.restart());
    }

    pub fn as_board_2048(&mut self) -> Option<&mut Session<Board2048>> {
        match self {
            Self::Board2048(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_snake(&mut self) -> Option<&mut Session<Snake>> {
        match self {
            Self::Snake(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_memory(&mut self) -> Option<&mut Session<Memory>> {
        match self {
            Self::Memory(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Session<Board2048>> for AnySession {
    fn from(session: Session<Board2048>) -> Self {
        Self::Board2048(session)
    }
}

impl From<Session<Snake>> for AnySession {
    fn from(session: Session<Snake>) -> Self {
        Self::Snake(session)
    }
}

impl From<Session<Memory>> for AnySession {
    fn from(session: Session<Memory>) -> Self {
        Self::Memory(session)
    }
}
