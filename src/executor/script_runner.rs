use super::ExecError;
use indicatif::{ProgressBar as IndicatifProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

/// Runner for external commands emitted by a plan
#[derive(Debug, Default, Clone)]
pub struct ScriptRunner {
    show_progress: bool,
}

impl ScriptRunner {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Run `argv` inside `cwd` and wait for it to exit.
    ///
    /// Without a spinner, stdout is forwarded to the terminal as it arrives
    /// and stdin is inherited, so generator prompts stay answerable. With a
    /// spinner only the latest stdout line is displayed and the child gets no
    /// stdin. Returns the captured stdout.
    pub async fn run(&self, argv: &[String], cwd: &Path) -> Result<String, ExecError> {
        let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;

        let stdin = if self.show_progress {
            Stdio::null()
        } else {
            Stdio::inherit()
        };
        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(cwd)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let progress = if self.show_progress {
            let pb = IndicatifProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
            }
            pb.set_message(format!("Running {}...", argv.join(" ")));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExecError::NotFound(program.clone())
            } else {
                ExecError::Io(e)
            }
        })?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExecError::Io(std::io::Error::other("Failed to capture stdout")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| ExecError::Io(std::io::Error::other("Failed to capture stderr")))?;

        let mut stderr_reader = BufReader::new(stderr).lines();

        let mut chunk = [0u8; 4096];
        let mut output: Vec<u8> = Vec::new();
        let mut stderr_output = String::new();
        let mut stdout_done = false;
        let mut stderr_done = false;

        // Drain both pipes concurrently so neither fills up and blocks the child
        while !stdout_done || !stderr_done {
            tokio::select! {
                read = stdout.read(&mut chunk), if !stdout_done => {
                    let n = read?;
                    if n == 0 {
                        stdout_done = true;
                        continue;
                    }
                    output.extend_from_slice(&chunk[..n]);

                    if let Some(ref pb) = progress {
                        if let Some(line) = last_line(&output) {
                            pb.set_message(shorten(&line));
                        }
                    } else {
                        let mut terminal = std::io::stdout().lock();
                        terminal.write_all(&chunk[..n])?;
                        terminal.flush()?;
                    }
                }
                line = stderr_reader.next_line(), if !stderr_done => {
                    match line? {
                        Some(line) => {
                            stderr_output.push_str(&line);
                            stderr_output.push('\n');

                            if progress.is_none() {
                                eprintln!("{}", line);
                            }
                        }
                        None => stderr_done = true,
                    }
                }
            }
        }

        let status = child.wait().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        if !status.success() {
            return Err(ExecError::CommandFailed {
                program: argv.join(" "),
                code: status.code(),
                stderr: stderr_output,
            });
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

/// Last non-blank line of the output seen so far
fn last_line(output: &[u8]) -> Option<String> {
    String::from_utf8_lossy(output)
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .map(str::to_string)
}

fn shorten(line: &str) -> String {
    if line.chars().count() > 60 {
        let truncated: String = line.chars().take(60).collect();
        format!("{}...", truncated)
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_argv_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = ScriptRunner::default().run(&[], dir.path()).await.unwrap_err();
        assert!(matches!(err, ExecError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let dir = TempDir::new().unwrap();
        let argv = vec!["railsmith-definitely-not-installed".to_string()];
        let err = ScriptRunner::default().run(&argv, dir.path()).await.unwrap_err();
        assert!(
            err.to_string().contains("not found"),
            "Error should mention command not found: {}",
            err
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stdout_in_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let argv = vec!["ls".to_string()];

        let output = ScriptRunner::new(true).run(&argv, dir.path()).await.unwrap();
        assert!(output.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_carries_code_and_stderr() {
        let dir = TempDir::new().unwrap();
        let argv: Vec<String> = ["sh", "-c", "echo boom >&2; exit 3"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let err = ScriptRunner::new(true).run(&argv, dir.path()).await.unwrap_err();
        match err {
            ExecError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("boom"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_partial_line_prompt_is_passed_through() {
        let dir = TempDir::new().unwrap();
        let argv: Vec<String> = ["printf", "Overwrite config/routes.rb? [Ynaqdhm] "]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let output = ScriptRunner::default().run(&argv, dir.path()).await.unwrap();
        assert_eq!(output, "Overwrite config/routes.rb? [Ynaqdhm] ");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spinner_runs_without_stdin() {
        let dir = TempDir::new().unwrap();
        let argv: Vec<String> = ["sh", "-c", "read answer || echo closed"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let output = ScriptRunner::new(true).run(&argv, dir.path()).await.unwrap();
        assert_eq!(output.trim(), "closed");
    }

    #[test]
    fn test_last_line_skips_trailing_blank() {
        assert_eq!(last_line(b"one\ntwo\n\n"), Some("two".to_string()));
        assert_eq!(last_line(b""), None);
    }
}
