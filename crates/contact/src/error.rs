pub const REQUIRED_FIELDS_MESSAGE: &str = "すべての必須項目を入力してください";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// Every rule on the input is a required-field rule, so the caller only ever
// sees the one message.
impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        tracing::debug!(errors = %value, "contact form rejected");

        Self::Validation(REQUIRED_FIELDS_MESSAGE.to_owned())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Validation(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Validation(format!($fmt, $($arg)*)))
    };
}
