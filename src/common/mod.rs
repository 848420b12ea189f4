pub mod io;

/// Format an IO error message without the "(os error N)" suffix.
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        format!("{}", os_err).replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

/// Restore default SIGPIPE behavior so writes to a closed pipe terminate
/// the process instead of surfacing as broken-pipe panics.
#[cfg(unix)]
pub fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
pub fn reset_sigpipe() {}
