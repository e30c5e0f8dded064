use crate::snake::BodyError;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    BodyError(BodyError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<BodyError> for Error {
    fn from(e: BodyError) -> Self {
        Self(ErrorType::BodyError(e), vec![])
    }
}

// the event loop only understands GameError
impl From<Error> for GameError {
    fn from(e: Error) -> Self {
        let text = e.to_string();
        match e.0 {
            ErrorType::GameError(game_error) => game_error,
            ErrorType::BodyError(_) => GameError::CustomError(text),
        }
    }
}

impl Error {
    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let result: Result = Err(BodyError(vec![], "empty").into());
    let e = result
        .with_trace_step("Game::new")
        .with_trace_step("main")
        .unwrap_err();

    assert!(matches!(e.error_type(), ErrorType::BodyError(_)));
    let text = e.to_string();
    let main = text.find(" in main").unwrap();
    let new = text.find(" in Game::new").unwrap();
    assert!(main < new, "{}", text);
}
