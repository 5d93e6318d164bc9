use std::process::ExitStatus;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Tells the driver loop whether to keep prompting or shut down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep reading and executing commands.
    Continue,
    /// End the loop; the shell terminates with a success status.
    Break,
}

/// How a child process ended: a normal exit or a signal death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationStatus {
    /// The process exited on its own with the given code.
    Exited(ExitCode),
    /// The process was terminated by the given signal (Unix only).
    Signaled(i32),
}

impl TerminationStatus {
    #[cfg(unix)]
    pub(crate) fn from_exit_status(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;
        match status.code() {
            Some(code) => TerminationStatus::Exited(code),
            None => match ExitStatusExt::signal(&status) {
                Some(signal) => TerminationStatus::Signaled(signal),
                None => TerminationStatus::Exited(-1),
            },
        }
    }

    #[cfg(not(unix))]
    pub(crate) fn from_exit_status(status: ExitStatus) -> Self {
        TerminationStatus::Exited(status.code().unwrap_or(-1))
    }
}
