pub fn parse() -> CliArgs {
    CliArgs::parse()
}

use clap::Parser;
/// Command Line Arguments
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None, trailing_var_arg = true)]
pub struct CliArgs {
    /// Perform NUM runs of the command.
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u16).range(1..), value_name = "NUM", default_value_t = 10)]
    pub num_runs: u16,

    /// The command to benchmark, followed by its arguments.
    ///
    /// The command must report its timing value on the last line it prints,
    /// as the first token after the final colon.
    ///
    /// e.g.) meantime -n 10 ./build/router -f benchmarks/adaptec1.gr
    #[clap(value_parser, required = true)]
    command: Vec<String>,
}

impl CliArgs {
    pub fn program(&self) -> &str {
        self.command[0].as_str()
    }

    pub fn program_args(&self) -> &[String] {
        &self.command[1..]
    }

    /// The command as one line for display.
    pub fn command_line(&self) -> String {
        self.command
            .iter()
            .map(|arg| to_quoted(arg))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

fn to_quoted(arg: &str) -> String {
    if arg.contains(char::is_whitespace) {
        format!("'{}'", arg.replace('\'', "\\'"))
    } else {
        String::from(arg)
    }
}
