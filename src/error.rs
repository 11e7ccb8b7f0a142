use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The platform secure random generator could not be initialized or read.
    #[error("secure random source unavailable")]
    EntropySourceUnavailable(#[source] io::Error),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}
