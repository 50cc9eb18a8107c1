// src/sink.rs
// =============================================================================
// Where results go.
//
// Every reference is printed to stdout. If an output file was given, the same
// line is also appended to it. Many workers call emit() at the same time, so
// each writer sits behind its own Mutex and a lock is held for one line only.
//
// The file is opened in append mode before any page is fetched and closed
// once, after every worker has finished.
//
// Rust concepts:
// - Mutex: only one thread can hold the lock (and the writer) at a time
// - Box<dyn Write + Send>: "any writer that can move between threads"
// =============================================================================

use crate::error::CrawlError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub struct Sink {
    console: Mutex<Box<dyn Write + Send>>,
    file: Option<Mutex<File>>,
}

impl Sink {
    // Sink that prints to stdout and optionally appends to `output`.
    pub fn open(output: Option<&Path>) -> Result<Self, CrawlError> {
        Self::with_console(io::stdout(), output)
    }

    // Same as open(), but prints to `console` instead of stdout.
    pub fn with_console<W>(console: W, output: Option<&Path>) -> Result<Self, CrawlError>
    where
        W: Write + Send + 'static,
    {
        let file = match output {
            Some(path) => Some(Mutex::new(open_append(path)?)),
            None => None,
        };

        Ok(Sink {
            console: Mutex::new(Box::new(console)),
            file,
        })
    }

    // Writes one reference to the console and, if configured, the file.
    //
    // A failed write only loses this line; it is logged and the run goes on.
    pub fn emit(&self, reference: &str) {
        if let Err(e) = writeln!(lock(&self.console), "{}", reference) {
            log::warn!("Error writing to stdout: {}", e);
        }

        if let Some(file) = &self.file {
            if let Err(e) = writeln!(lock(file), "{}", reference) {
                log::warn!("Error writing to output file: {}", e);
            }
        }
    }

    // Flushes both writers and closes the output file.
    pub fn close(self) -> io::Result<()> {
        let mut console = self.console.into_inner().unwrap_or_else(|p| p.into_inner());
        console.flush()?;

        if let Some(file) = self.file {
            let mut file = file.into_inner().unwrap_or_else(|p| p.into_inner());
            file.flush()?;
        }
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, CrawlError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CrawlError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })
}

// A worker that panicked mid-write poisons the lock; the writer itself is
// still usable, so take it back instead of propagating the panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
