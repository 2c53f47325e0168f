use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyramidBufferError {
    #[error("Size of buffer don't match to size required by the pyramid layout")]
    InvalidBufferSize,
}
