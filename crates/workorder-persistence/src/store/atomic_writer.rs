use std::io::Write;
use std::path::Path;
use workorder_core::WorkOrderResult;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → rename pattern so a failed save never
/// leaves a truncated file behind
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically
    pub fn write_atomic(path: &Path, data: &[u8]) -> WorkOrderResult<()> {
        // Temp file must live on the same filesystem as the target
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub fn read_all(path: &Path) -> WorkOrderResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
