pub mod file;

use thiserror::Error;

pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

pub fn io_to_generic_error(err: std::io::Error) -> GenericError {
    Box::new(err)
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to initialize persistence: {0}")]
    UnableToInitializePersistence(GenericError),

    #[error("Unable to read roster file: {0}")]
    UnableToReadBlob(GenericError),

    #[error("Unable to write roster file: {0}")]
    UnableToWriteBlob(GenericError),

    #[error("Unable to parse roster file: {0}")]
    UnableToParseRoster(GenericError),

    #[error("Roster file does not exist")]
    RosterFileMissing,
}

pub type StorageResult<T> = Result<T, StorageError>;

pub enum ReadBlobState {
    Found(Vec<u8>),
    NotFound,
}

/// The durable home of the roster. One blob, read and rewritten whole --
/// there are no partial writes, no append log and no rename-based swap, so
/// a crash mid-overwrite can corrupt the file. Accepted for a small local
/// roster.
pub trait Storage {
    fn read_blob(&self) -> StorageResult<ReadBlobState>;
    fn write_blob(&self, bytes: Vec<u8>) -> StorageResult<()>;

    // Called on start-up, should be idempotent
    fn init(&self) -> StorageResult<()>;
}
