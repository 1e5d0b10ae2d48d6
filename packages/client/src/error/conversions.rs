use serde_json::error::Category;

use super::types::{Error, Kind};

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(Kind::Io).with(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        let kind = match error.classify() {
            Category::Io => Kind::Io,
            Category::Syntax | Category::Data | Category::Eof => Kind::MalformedStream,
        };
        Error::new(kind).with(error)
    }
}
