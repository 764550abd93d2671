use std::process::Command;

use thiserror::Error;

use super::command::SearchCommand;

#[derive(Debug, Error)]
pub enum SearchCommandError {
    #[error("{program} exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run the search command and capture its stdout. Blocks until the process
/// exits; there is no timeout.
pub fn run_search(command: &SearchCommand) -> Result<String, SearchCommandError> {
    let args = command.to_args();
    tracing::debug!(program = %command.program, ?args, "spawning search command");

    let output = Command::new(&command.program)
        .args(&args)
        .output()
        .map_err(|source| SearchCommandError::Spawn {
            program: command.program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(SearchCommandError::NonZeroExit {
            program: command.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_with_program(program: &str) -> SearchCommand {
        SearchCommand {
            program: program.to_string(),
            ..SearchCommand::default()
        }
    }

    #[test]
    fn test_captures_stdout() {
        // echo prints the argument vector back, which is enough to verify capture
        let output = run_search(&command_with_program("echo")).unwrap();
        assert!(output.contains("FT.SEARCH"));
        assert!(output.contains("beamdevlive:config:type"));
    }

    #[test]
    fn test_nonzero_exit_is_typed() {
        let err = run_search(&command_with_program("false")).unwrap_err();
        match err {
            SearchCommandError::NonZeroExit { status, .. } => assert!(!status.success()),
            other => panic!("expected NonZeroExit, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_search(&command_with_program("orgscan-no-such-binary")).unwrap_err();
        assert!(matches!(err, SearchCommandError::Spawn { .. }));
    }
}
