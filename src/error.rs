// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    InvalidRadius(String), // Radius input was not a usable pixel size
    WindowInit(String),    // Creating the window failed
    WindowUpdate(String),  // Updating the window buffer failed
    ImageSave(String),     // Writing the bitmap to disk failed
    Serialize(String),     // Turning an estimate into JSON failed
    Output(String),        // Writing the report to stdout failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRadius(s) => write!(f, "Invalid radius: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
            Error::Serialize(s) => write!(f, "Serialize error: {s}"),
            Error::Output(s) => write!(f, "Output error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
