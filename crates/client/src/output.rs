//! Quote file output.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Create or overwrite `path` with a human-readable line carrying the bid.
pub fn write_quote(path: &Path, bid: &str) -> Result<()> {
    let mut file = File::create(path)?;
    write!(file, "Dólar: {}", bid)?;
    info!(path = %path.display(), bid, "quote written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cambio-{}-{}", std::process::id(), name))
    }

    #[test]
    fn writes_line_containing_bid() {
        let path = temp_path("write.txt");
        write_quote(&path, "5.43").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("5.43"));
        assert!(content.starts_with("Dólar:"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn overwrites_existing_file() {
        let path = temp_path("overwrite.txt");
        write_quote(&path, "5.43").unwrap();
        write_quote(&path, "5.50").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Dólar: 5.50");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reports_unwritable_path() {
        let result = write_quote(Path::new("/nonexistent-dir/cotacao.txt"), "5.43");
        assert!(result.is_err());
    }
}
