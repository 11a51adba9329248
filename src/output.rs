use owo_colors::OwoColorize;
use std::path::Path;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when the stream is a TTY.
/// Stdout carries only the per-file move records; everything else goes to stderr.
fn is_tty(stream: atty::Stream) -> bool {
    atty::is(stream)
}

pub fn print_info(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix) on stdout.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Record of a completed move: `<src>\t->\t<dest>`. Scripts read these lines.
pub fn print_move(src: &Path, dest: &Path) {
    print_user(&format!("{}\t->\t{}", src.display(), dest.display()));
}

/// Two-line failure report on stderr.
pub fn print_move_failure(src: &Path, dest: &str, reason: &str) {
    if is_tty(atty::Stream::Stderr) {
        eprintln!("{} {}\t->\t{}", "Can't move file:".red().bold(), src.display(), dest);
        eprintln!("{} {}", "Err:".red(), reason);
    } else {
        eprintln!("Can't move file: {}\t->\t{}", src.display(), dest);
        eprintln!("Err: {}", reason);
    }
}
