use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("input file not found: {path}")]
    InputFileMissing { path: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("login failed: {message}")]
    Login { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
