mod app;
mod cli_args;
mod cmd;
mod console;
mod report;
mod stats;

fn main() {
    proc_exit::exit(app::run());
}
