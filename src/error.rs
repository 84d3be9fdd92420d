use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("No credentials found. Please run 'taskboard login --token <TOKEN>' first.")]
    CredentialsNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type BoardResult<T> = Result<T, BoardError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> BoardResult<T>;
    fn with_context<F>(self, f: F) -> BoardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> BoardResult<T> {
        self.map_err(|e| BoardError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> BoardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BoardError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> BoardResult<T> {
        self.ok_or_else(|| BoardError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> BoardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| BoardError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! board_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::BoardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::BoardError::$error_type(format!($fmt, $($arg)*))
    };
}
