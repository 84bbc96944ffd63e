use anyhow::Context;
use thiserror::Error;

#[derive(Error, Debug)]
enum CmdError {
    #[error("`{0}` finished without printing anything to parse.")]
    NoOutput(String),
    #[error("Could not parse a timing value from the last output line `{1}` of `{0}`.")]
    Unparsable(String, String),
}

/// One measured run of the benchmark target.
#[derive(Debug)]
pub struct Sample {
    /// Timing value reported by the target on its last output line.
    pub value: f64,
    /// Exit code, or None when terminated by a signal.
    pub exit_code: Option<i32>,
}

/// The benchmark target, executed directly without a shell.
pub struct BenchCmd {
    program: String,
    args: Vec<String>,
}

impl BenchCmd {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: String::from(program),
            args: args.to_vec(),
        }
    }

    /// Execute the target once and extract its reported timing value.
    pub fn run_once(&self) -> anyhow::Result<Sample> {
        let child = execute(&self.program, &self.args)?;
        let output = child
            .wait_with_output()
            .with_context(|| format!("Could not read the output of `{}`.", self.program))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let value = match parse_reported_value(&stdout) {
            Some(v) => v,
            None => {
                let err = match last_line(&stdout) {
                    Some(line) => {
                        CmdError::Unparsable(self.program.clone(), String::from(line))
                    }
                    None => CmdError::NoOutput(self.program.clone()),
                };
                return Err(err.into());
            }
        };
        Ok(Sample {
            value,
            exit_code: output.status.code(),
        })
    }
}

fn execute(program: &str, args: &[String]) -> anyhow::Result<std::process::Child> {
    std::process::Command::new(program)
        .args(args)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .with_context(|| {
            format!(
                "Could not start `{}` execution with argument `{}`",
                program,
                args.join(" ")
            )
        })
}

fn last_line(stdout: &str) -> Option<&str> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.lines().last()
    }
}

/// The target reports its timing as the first token after the final colon of
/// its last output line, e.g. `total cpu time: 12.34 seconds`. A line without
/// a colon is taken as a whole.
pub fn parse_reported_value(stdout: &str) -> Option<f64> {
    let after_colon = last_line(stdout)?.rsplit(':').next()?;
    after_colon.split_whitespace().next()?.parse().ok()
}
