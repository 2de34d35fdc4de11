//! Printer adapters for finished text documents
//!
//! Supports:
//! - Console output (stdout)
//! - Spool directory (one `<job>.txt` per document, picked up by the host print queue)

use crate::error::{PrintError, PrintResult};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

/// A rendered document ready to hand to a printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    /// Job name, used as the spool file stem
    pub name: String,
    /// Rendered text
    pub content: String,
}

impl PrintJob {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send a rendered document to the printer
    async fn print(&self, job: &PrintJob) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Prints to standard output
#[derive(Debug, Clone, Default)]
pub struct ConsolePrinter;

impl ConsolePrinter {
    pub fn new() -> Self {
        Self
    }
}

impl Printer for ConsolePrinter {
    #[instrument(skip(self, job), fields(job = %job.name, data_len = job.content.len()))]
    async fn print(&self, job: &PrintJob) -> PrintResult<()> {
        let mut out = tokio::io::stdout();
        out.write_all(job.content.as_bytes()).await?;
        if !job.content.ends_with('\n') {
            out.write_all(b"\n").await?;
        }
        out.flush().await?;
        info!("Print job written to console");
        Ok(())
    }

    async fn is_online(&self) -> bool {
        true
    }
}

/// Spool directory printer
///
/// Each job becomes `<dir>/<name>.txt`. The directory is created on demand.
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    dir: PathBuf,
}

impl SpoolPrinter {
    /// Create a spool printer targeting `dir`
    pub fn new(dir: impl Into<PathBuf>) -> PrintResult<Self> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(PrintError::InvalidConfig("Empty spool directory".to_string()));
        }
        Ok(Self { dir })
    }

    /// Get the spool directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a job will be written to
    pub fn job_path(&self, job: &PrintJob) -> PathBuf {
        let stem: String = job
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.txt", stem))
    }
}

impl Printer for SpoolPrinter {
    #[instrument(skip(self, job), fields(dir = %self.dir.display(), job = %job.name))]
    async fn print(&self, job: &PrintJob) -> PrintResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.job_path(job);
        tokio::fs::write(&path, job.content.as_bytes()).await?;
        info!(path = %path.display(), "Print job spooled");
        Ok(())
    }

    async fn is_online(&self) -> bool {
        match tokio::fs::create_dir_all(&self.dir).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, dir = %self.dir.display(), "Spool directory unavailable");
                false
            }
        }
    }
}

/// Printer selected at runtime from configuration
#[derive(Debug, Clone)]
pub enum HostPrinter {
    Console(ConsolePrinter),
    Spool(SpoolPrinter),
}

impl HostPrinter {
    /// Spool printer when a directory is configured, console otherwise
    pub fn from_spool_dir(dir: Option<&Path>) -> PrintResult<Self> {
        match dir {
            Some(d) => Ok(Self::Spool(SpoolPrinter::new(d)?)),
            None => Ok(Self::Console(ConsolePrinter::new())),
        }
    }
}

impl Printer for HostPrinter {
    async fn print(&self, job: &PrintJob) -> PrintResult<()> {
        match self {
            Self::Console(p) => p.print(job).await,
            Self::Spool(p) => p.print(job).await,
        }
    }

    async fn is_online(&self) -> bool {
        match self {
            Self::Console(p) => p.is_online().await,
            Self::Spool(p) => p.is_online().await,
        }
    }
}
