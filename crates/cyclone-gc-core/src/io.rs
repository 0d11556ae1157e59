//! Device-file command channel for hosted clients.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use cyclone_gc_hal::CommandChannel;

/// Default gateway device node.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/cyclone-gc";

/// Command channel backed by the gateway's character device node.
/// Opened write-only; one `write` syscall per wire command keeps
/// commands atomic on the pipe.
pub struct FileChannel {
    file: File,
}

impl FileChannel {
    /// Open the gateway device for exclusive writing. An open failure
    /// is the recoverable "transport unavailable" case; callers may
    /// retry or abort.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = OpenOptions::new().write(true).open(path)?;
        Ok(Self { file })
    }
}

impl CommandChannel for FileChannel {
    type Error = std::io::Error;

    fn send(&mut self, command: &[u8]) -> Result<(), Self::Error> {
        self.file.write_all(command)
    }
}
