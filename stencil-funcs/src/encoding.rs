use base64::prelude::{Engine as _, BASE64_STANDARD};
use minijinja::{Error, ErrorKind};

/// Encodes a string as standard base64.
pub fn b64encode(value: &str) -> String {
    BASE64_STANDARD.encode(value)
}

/// Decodes a base64 string.
///
/// Fails if the input is not valid base64 or does not decode to UTF-8.
pub fn b64decode(value: &str) -> Result<String, Error> {
    let bytes = BASE64_STANDARD.decode(value).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "input is not valid base64").with_source(err)
    })?;
    String::from_utf8(bytes).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            "decoded base64 is not valid UTF-8",
        )
        .with_source(err)
    })
}

/// Encodes a string as lowercase hex.
pub fn hexencode(value: &str) -> String {
    hex::encode(value)
}

/// Decodes a hex string.
pub fn hexdecode(value: &str) -> Result<String, Error> {
    let bytes = hex::decode(value).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "input is not valid hex").with_source(err)
    })?;
    String::from_utf8(bytes).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "decoded hex is not valid UTF-8").with_source(err)
    })
}
