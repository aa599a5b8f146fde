//! Resolves the TinyC runtime archive and builds the system linker command
//! that assembles generated assembly together with it (§6 "shells out to a
//! system C toolchain").
//!
//! The runtime provides the four C-ABI functions generated code may call by
//! name: `print`, `print_int`, `print_char`, `read_int` (§6). It ships as a
//! static archive next to the `tinyc` executable, the same layout the
//! teacher used for its own runtime library.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Linker setup and runtime library resolution errors.
#[derive(Debug)]
pub enum LinkerSetupError {
    /// Failed to resolve the absolute path of the current executable.
    CurrentExecutablePathResolutionFailed(std::io::Error),
    /// Executable path has no parent directory.
    ExecutablePathParentNotFound { executable: PathBuf },
    /// TinyC runtime library was not found next to the tinyc executable.
    RuntimeLibraryNotFound { executable: PathBuf, path: PathBuf },
    /// TinyC runtime library path exists but is not a regular file.
    RuntimeLibraryNotAFile { executable: PathBuf, path: PathBuf },
    /// Failed to access the runtime library path due to an I/O error.
    RuntimeLibraryAccessFailed {
        executable: PathBuf,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for LinkerSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkerSetupError::CurrentExecutablePathResolutionFailed(io_err) => {
                write!(f, "Failed to resolve current executable path: {}", io_err)
            }
            LinkerSetupError::ExecutablePathParentNotFound { executable } => write!(
                f,
                "Current executable path '{}' has no parent directory. This is a compiler bug.",
                executable.display()
            ),
            LinkerSetupError::RuntimeLibraryNotFound { executable, path } => write!(
                f,
                "TinyC runtime library not found at '{}' (resolved from executable '{}'). Place the 'tinyc' executable and runtime library in the same directory.",
                path.display(),
                executable.display()
            ),
            LinkerSetupError::RuntimeLibraryNotAFile { executable, path } => write!(
                f,
                "TinyC runtime library path '{}' is not a regular file (resolved from executable '{}'). Place the 'tinyc' executable and runtime library in the same directory.",
                path.display(),
                executable.display()
            ),
            LinkerSetupError::RuntimeLibraryAccessFailed {
                executable,
                path,
                source,
            } => write!(
                f,
                "Failed to access TinyC runtime library path '{}' (resolved from executable '{}'): {}",
                path.display(),
                executable.display(),
                source
            ),
        }
    }
}

impl std::error::Error for LinkerSetupError {}

/// Returns the runtime static library filename for the current target.
pub fn runtime_library_filename() -> &'static str {
    "libtinyc_runtime.a"
}

/// Returns the runtime library path expected next to the given executable path.
pub fn runtime_library_path_for_binary(
    executable_path: &Path,
) -> Result<PathBuf, LinkerSetupError> {
    let executable_dir =
        executable_path
            .parent()
            .ok_or_else(|| LinkerSetupError::ExecutablePathParentNotFound {
                executable: executable_path.to_path_buf(),
            })?;
    Ok(executable_dir.join(runtime_library_filename()))
}

/// Resolves the runtime library path for the given executable and validates
/// that the path exists and points to a regular file.
pub fn resolve_runtime_library_path_for_binary(
    executable_path: &Path,
) -> Result<PathBuf, LinkerSetupError> {
    let runtime_path = runtime_library_path_for_binary(executable_path)?;
    match std::fs::metadata(&runtime_path) {
        Ok(metadata) => {
            if !metadata.is_file() {
                return Err(LinkerSetupError::RuntimeLibraryNotAFile {
                    executable: executable_path.to_path_buf(),
                    path: runtime_path,
                });
            }
        }
        Err(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            return Err(LinkerSetupError::RuntimeLibraryNotFound {
                executable: executable_path.to_path_buf(),
                path: runtime_path,
            });
        }
        Err(io_err) => {
            return Err(LinkerSetupError::RuntimeLibraryAccessFailed {
                executable: executable_path.to_path_buf(),
                path: runtime_path,
                source: io_err,
            });
        }
    }

    Ok(runtime_path)
}

/// Resolves the runtime static library path next to the running `tinyc` binary.
pub fn resolve_runtime_library_path_from_current_exe() -> Result<PathBuf, LinkerSetupError> {
    let executable =
        std::env::current_exe().map_err(LinkerSetupError::CurrentExecutablePathResolutionFailed)?;
    resolve_runtime_library_path_for_binary(&executable)
}

/// Builds the linker command: `cc <assembly> <runtime archive> -o <output>`.
/// `cc` assembles `.s` input itself, so no separate object-file step is
/// needed between codegen and linking.
pub fn create_linker_command(assembly_path: &str, runtime_path: &str, output_path: &str) -> Command {
    let mut cmd = Command::new("cc");
    cmd.args([assembly_path, runtime_path, "-o", output_path]);
    cmd
}
