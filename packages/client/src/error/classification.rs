use super::types::{Error, Kind};

impl Error {
    /// Returns true if the response was rejected before decoding started.
    #[must_use]
    pub fn is_protocol_mismatch(&self) -> bool {
        matches!(self.inner.kind, Kind::ProtocolMismatch)
    }

    /// Returns true if the body did not follow the series stream grammar.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.inner.kind, Kind::MalformedStream)
    }

    /// Returns true if reading the underlying body failed.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self.inner.kind, Kind::Io)
    }

    /// Returns true if the error comes from invalid configuration.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }
}
