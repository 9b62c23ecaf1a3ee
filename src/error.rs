// Copyright (C) 2020-2024 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lexicon,
    Bag,
    Question,
    Other,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Lexicon => "lexicon",
            ErrorKind::Bag => "bag",
            ErrorKind::Question => "question",
            ErrorKind::Other => "error",
        }
    }
}

pub struct GameError {
    kind: ErrorKind,
    s: String,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.s)
    }
}

impl std::fmt::Debug for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for GameError {}

pub fn new(kind: ErrorKind, s: String) -> GameError {
    GameError { kind, s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

// return_error!(Bag, format!(...)) or return_error!(format!(...))
#[macro_export]
macro_rules! return_error {
    ($kind:ident, $error:expr) => {
        return Err($crate::error::new($crate::error::ErrorKind::$kind, $error).into());
    };
    ($error:expr) => {
        return Err($crate::error::new($crate::error::ErrorKind::Other, $error).into());
    };
}
