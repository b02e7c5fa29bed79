use crate::Date;
use crate::consts::{BINARY_LEN, BINARY_VERSION};

/// Error type for decoding the binary date record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer was empty.
    #[error("Date::from_binary: no data")]
    EmptyInput,

    /// The leading version tag is not one this crate knows how to decode.
    #[error("Date::from_binary: unsupported version {0}")]
    BadVersion(u8),

    /// The buffer length does not match the layout of its version.
    #[error("Date::from_binary: invalid length {len} for version {version}")]
    BadLength { version: u8, len: usize },
}

impl Date {
    /// Encodes the date as a version 1 binary record: the version tag
    /// followed by the ordinal as a big-endian `i64`.
    pub fn to_binary(self) -> [u8; BINARY_LEN] {
        let mut record = [0; BINARY_LEN];
        record[0] = BINARY_VERSION;
        record[1..].copy_from_slice(&self.ordinal().to_be_bytes());
        record
    }

    /// Decodes a binary record produced by [`Date::to_binary`].
    ///
    /// # Errors
    /// Returns `DecodeError::EmptyInput` for an empty buffer,
    /// `DecodeError::BadVersion` for an unknown version tag, and
    /// `DecodeError::BadLength` when the buffer length does not match the
    /// version's layout.
    pub fn from_binary(data: &[u8]) -> Result<Self, DecodeError> {
        let result = match data.split_first() {
            None => Err(DecodeError::EmptyInput),
            Some((&BINARY_VERSION, payload)) => decode_v1(payload),
            Some((&version, _)) => Err(DecodeError::BadVersion(version)),
        };
        log!(if let Err(err) = &result {
            tracing::debug!(len = data.len(), error = %err, "rejected binary date");
        });
        result
    }
}

fn decode_v1(payload: &[u8]) -> Result<Date, DecodeError> {
    let ordinal: [u8; BINARY_LEN - 1] = payload.try_into().map_err(|_| DecodeError::BadLength {
        version: BINARY_VERSION,
        len:     payload.len() + 1,
    })?;
    Ok(Date::from_ordinal(i64::from_be_bytes(ordinal)))
}

impl TryFrom<&[u8]> for Date {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_binary(data)
    }
}

impl From<Date> for [u8; BINARY_LEN] {
    fn from(date: Date) -> Self {
        date.to_binary()
    }
}
