use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `chunkseries_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while decoding a chunked series stream.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The response is not a chunked JSON response
    ProtocolMismatch,
    /// The body does not follow the series stream grammar
    MalformedStream,
    /// Reading the body failed at the transport level
    Io,
    /// Invalid reader or series configuration
    Builder,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// The category of this error
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("chunkseries_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.inner.kind {
            Kind::ProtocolMismatch => "response protocol mismatch",
            Kind::MalformedStream => "malformed series stream",
            Kind::Io => "error reading response body",
            Kind::Builder => "builder error",
        };
        match self.inner.source {
            Some(ref source) => write!(f, "{prefix}: {source}"),
            None => f.write_str(prefix),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
