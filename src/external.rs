use crate::command::TerminationStatus;
use anyhow::{Context, Result};
use std::process::Command;

/// Runs `argv` as an external program and blocks until it finishes.
///
/// `argv[0]` names the program; resolving the name against PATH is left
/// entirely to the platform, exactly as [`Command`] performs it. The
/// remaining words are passed through as the child's argument vector.
/// A successfully spawned child is always waited on by its own handle,
/// so no zombie is left behind and no unrelated process is reaped.
pub(crate) fn run(argv: &[String]) -> Result<TerminationStatus> {
    let name = argv.first().context("empty argument list")?;
    let mut child = Command::new(name)
        .args(&argv[1..])
        .spawn()
        .with_context(|| format!("cannot run '{}'", name))?;
    let status = child
        .wait()
        .with_context(|| format!("failed waiting for '{}'", name))?;
    Ok(TerminationStatus::from_exit_status(status))
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::command::TerminationStatus;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn reports_normal_exit_code() {
        let status = run(&argv(&["sh", "-c", "exit 7"])).unwrap();
        assert_eq!(status, TerminationStatus::Exited(7));
    }

    #[test]
    #[cfg(unix)]
    fn reports_success_exit_code() {
        let status = run(&argv(&["true"])).unwrap();
        assert_eq!(status, TerminationStatus::Exited(0));
    }

    #[test]
    #[cfg(unix)]
    fn reports_signal_death_not_exit_code() {
        let status = run(&argv(&["sh", "-c", "kill -KILL $$"])).unwrap();
        assert_eq!(status, TerminationStatus::Signaled(9));
    }

    #[test]
    fn unknown_program_is_an_error_naming_it() {
        let err = run(&argv(&["definitely_not_a_real_program_3581"])).unwrap_err();
        assert!(
            format!("{}", err).contains("definitely_not_a_real_program_3581"),
            "error should name the program, got: {}",
            err
        );
    }

    #[test]
    fn empty_argv_is_an_error() {
        assert!(run(&[]).is_err());
    }
}
