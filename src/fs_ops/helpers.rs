//! I/O error enrichment.
//!
//! Wraps io::Error with the failed operation, the path involved and a short
//! platform-aware hint, for use with `map_err`:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
                libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
                libc::ENOENT => Some("path not found; verify it exists"),
                libc::EEXIST => Some("already exists; refusing to overwrite"),
                libc::ENOTDIR => Some("a path component is a file, not a directory"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ENAMETOOLONG => Some("filename or path too long; shorten the name format"),
                libc::EBUSY => Some("resource busy; another process holds the file"),
                _ => None,
            };
            if let Some(h) = hint {
                msg.push_str("; ");
                msg.push_str(h);
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                17 => Some("not same device; cross-filesystem move"),
                32 => Some("sharing violation; file is in use"),
                2 | 3 => Some("path not found; verify it exists"),
                80 | 183 => Some("already exists; refusing to overwrite"),
                112 => Some("insufficient disk space"),
                206 => Some("filename or path too long; shorten the name format"),
                _ => None,
            };
            if let Some(h) = hint {
                msg.push_str("; ");
                msg.push_str(h);
            }
        }
        msg.push_str(&format!(" [os code: {code}]"));
    } else {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
            io::ErrorKind::NotFound => Some("path not found; verify it exists"),
            io::ErrorKind::AlreadyExists => Some("already exists; refusing to overwrite"),
            _ => None,
        };
        if let Some(h) = hint {
            msg.push_str("; ");
            msg.push_str(h);
        }
    }

    msg
}

/// Adapter for anyhow::Result code: io::Error -> anyhow::Error with context and hint.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_fallback_hint() {
        let p = Path::new("/nope");
        let err = io_error_with_help("open", p)(io::Error::from(io::ErrorKind::NotFound));
        let msg = err.to_string();
        assert!(msg.starts_with("open '/nope'"));
        assert!(msg.contains("path not found"));
    }

    #[cfg(unix)]
    #[test]
    fn os_code_is_appended() {
        let p = Path::new("/tmp");
        let err = io_error_with_help("rename", p)(io::Error::from_raw_os_error(libc::EACCES));
        let msg = err.to_string();
        assert!(msg.contains("permission denied"), "msg was: {msg}");
        assert!(msg.contains(&format!("[os code: {}]", libc::EACCES)));
    }
}
