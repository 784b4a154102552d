//! External command execution
//!
//! Thin builder over `std::process::Command` that captures output and logs
//! each invocation at debug level. Stdin is always null: the query CLI is
//! driven entirely through its arguments and runs non-interactively.

use std::process::{Command, Output, Stdio};

/// Builder for executing commands with logging.
///
/// # Examples
///
/// ```ignore
/// let output = Cmd::new("bigquery")
///     .args(["query", "--yes"])
///     .context("deal_flow.total_deals")
///     .run()?;
/// ```
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<std::path::PathBuf>,
    context: Option<String>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    pub fn current_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set the logging context (typically the check label).
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// Execute the command synchronously and return its captured output.
    pub fn run(self) -> std::io::Result<Output> {
        // Build command string for logging
        let cmd_str = if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        };

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());

        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let result = cmd.output();

        match (&result, &self.context) {
            (Ok(output), Some(ctx)) => {
                log::debug!("[{}] \"{}\" ok={}", ctx, cmd_str, output.status.success());
            }
            (Ok(output), None) => {
                log::debug!("\"{}\" ok={}", cmd_str, output.status.success());
            }
            (Err(e), Some(ctx)) => {
                log::debug!("[{}] \"{}\" err=\"{}\"", ctx, cmd_str, e);
            }
            (Err(e), None) => {
                log::debug!("\"{}\" err=\"{}\"", cmd_str, e);
            }
        }

        result
    }
}
