use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::PathBuf,
};

use super::{io_to_generic_error, ReadBlobState, Storage, StorageError, StorageResult};

pub struct FileStorage {
    roster_path: PathBuf,
}

impl FileStorage {
    pub fn new(roster_path: PathBuf) -> Self {
        Self { roster_path }
    }
}

impl Storage for FileStorage {
    fn read_blob(&self) -> StorageResult<ReadBlobState> {
        let mut file = match File::open(&self.roster_path) {
            Ok(file) => file,
            Err(err) => match err.kind() {
                std::io::ErrorKind::NotFound => return Ok(ReadBlobState::NotFound),
                _ => return Err(StorageError::UnableToReadBlob(io_to_generic_error(err))),
            },
        };

        let mut buf = Vec::new();

        file.read_to_end(&mut buf)
            .map_err(|e| StorageError::UnableToReadBlob(io_to_generic_error(e)))?;

        Ok(ReadBlobState::Found(buf))
    }

    fn write_blob(&self, bytes: Vec<u8>) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.roster_path)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))?;

        file.write_all(&bytes)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(e)))
    }

    fn init(&self) -> StorageResult<()> {
        if let Some(parent) = self.roster_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::UnableToInitializePersistence(io_to_generic_error(e)))?;
        }

        // Seed an empty roster so a fresh deployment starts clean. An
        // existing file is left untouched.
        if !self.roster_path.exists() {
            self.write_blob(b"[]".to_vec())?;
        }

        Ok(())
    }
}
