use sweeper_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No game in progress, start a new one first")]
    NoActiveGame,
    #[error("Previous game must be finished before starting a new one")]
    AlreadyPlaying,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, SessionError>;
