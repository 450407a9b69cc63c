use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MessageError {
    MissingMessage,
    Storage(io::Error),
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::MissingMessage => write!(f, "No message provided"),
            MessageError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl Error for MessageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MessageError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MessageError {
    fn from(error: io::Error) -> Self {
        MessageError::Storage(error)
    }
}
