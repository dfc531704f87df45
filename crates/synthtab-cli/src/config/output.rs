use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::ConfigResult;
use super::atomic::write_bytes_atomic;

/// File name used when `--out` points at a directory.
pub const DEFAULT_OUTPUT_FILE: &str = "synthetic_data.csv";

/// Where generated CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` and `-` mean stdout; a directory gets the default file name.
    pub fn resolve(out: Option<&Path>) -> Self {
        match out {
            None => Self::Stdout,
            Some(path) if path.as_os_str() == "-" => Self::Stdout,
            Some(path) if path.is_dir() || ends_with_separator(path) => {
                Self::File(path.join(DEFAULT_OUTPUT_FILE))
            }
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    pub fn write(&self, data: &[u8]) -> ConfigResult<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(data)?;
                stdout.flush()?;
            }
            Self::File(path) => write_bytes_atomic(path, data)?,
        }
        Ok(())
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}
