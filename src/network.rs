//! Fetching questions from the quiz server.
//!
//! Transport is left to the caller: a [`NetworkProvider`] resolves a URL to
//! a readable stream, and [`fetch_question`] turns whatever comes back into a
//! [`QuizQuestion`].

use std::io::{self, Read};

use thiserror::Error;

use crate::data::{parse_from_slice, ParseError};
use crate::models::QuizQuestion;

/// Opens connections to the quiz server.
///
/// Implementations must return the stream as obtained, without reading from
/// or otherwise touching it.
pub trait NetworkProvider {
    type Connection: Read;

    fn get_connection(&self, url: &str) -> io::Result<Self::Connection>;
}

/// Error fetching a question.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {url}: {source}")]
    Connection { url: String, source: io::Error },

    #[error(transparent)]
    Malformed(#[from] ParseError),
}

/// Open `url` through `provider`, read the whole body and parse it.
pub fn fetch_question<P: NetworkProvider>(
    provider: &P,
    url: &str,
) -> Result<QuizQuestion, FetchError> {
    let connection_error = |source| FetchError::Connection {
        url: url.to_string(),
        source,
    };

    let mut connection = provider.get_connection(url).map_err(connection_error)?;
    let mut body = Vec::new();
    connection.read_to_end(&mut body).map_err(connection_error)?;

    Ok(parse_from_slice(&body)?)
}
