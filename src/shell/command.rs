//! Bounded shell command execution.
//!
//! Every external process the experiment spawns goes through [`execute`]:
//! SDKMAN queries and installs, and Maven resolve/tree/compile runs. All of
//! them are unattended (stdin is closed), fully drained (a child must never
//! block on a full pipe buffer), and bounded by a deadline. A child that
//! outlives its deadline is killed together with its process group: `sdk`
//! and `mvn` both fork freely, so killing only the direct child would leave
//! grandchildren running.

use crate::error::{JdkspanError, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the deadline elapsed before the command exited.
    pub timed_out: bool,

    /// Whether the command exited in time with code 0.
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Deadline (None = wait indefinitely).
    pub timeout: Option<Duration>,
}

/// Execute a shell command via `bash -c` with stdin closed.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new("bash");
    cmd.arg("-c");
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    // Own process group, so a timeout kill reaches the whole tree.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd.spawn().map_err(|_| JdkspanError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let stdout = child.stdout.take().unwrap();
    let stderr = child.stderr.take().unwrap();

    // Drain both pipes on their own threads so the child can't block on a
    // full buffer while we wait for it.
    let stdout_handle = thread::spawn(move || drain(stdout));
    let stderr_handle = thread::spawn(move || drain(stderr));

    let deadline = options.timeout.map(|t| start + t);
    let mut timed_out = false;
    let status: Option<ExitStatus> = loop {
        let polled = child.try_wait().map_err(|_| JdkspanError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;
        if let Some(status) = polled {
            break Some(status);
        }

        if deadline.is_some_and(|d| Instant::now() >= d) {
            timed_out = true;
            kill_process_group(&mut child);
            let _ = child.wait();
            break None;
        }

        thread::sleep(POLL_INTERVAL);
    };

    let stdout = String::from_utf8_lossy(&stdout_handle.join().unwrap_or_default()).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_handle.join().unwrap_or_default()).into_owned();
    let duration = start.elapsed();

    let (exit_code, success) = match &status {
        Some(status) => (status.code(), status.success()),
        None => (None, false),
    };

    Ok(CommandResult {
        exit_code,
        stdout,
        stderr,
        duration,
        timed_out,
        success,
    })
}

fn drain(mut pipe: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf);
    buf
}

/// Kill the child's entire process group.
#[cfg(unix)]
fn kill_process_group(child: &mut Child) {
    // The child was spawned as its own process group leader, so its pid is
    // the pgid.
    // SAFETY: killpg with SIGKILL on a pgid we created; no memory involved.
    unsafe {
        libc::killpg(child.id() as i32, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_process_group(child: &mut Child) {
    let _ = child.kill();
}
