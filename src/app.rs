pub fn run() -> proc_exit::ExitResult {
    let cli_args = crate::cli_args::parse();
    let console = crate::console::Console::new();

    let bench = crate::cmd::BenchCmd::new(cli_args.program(), cli_args.program_args());
    console.print_bold(format!("Benchmark> {}", cli_args.command_line()).as_str());

    let mut samples = Vec::with_capacity(cli_args.num_runs as usize);
    let mut success_count: usize = 0;
    let mut failure_count: usize = 0;
    for nth in 1..=cli_args.num_runs {
        let sample = match bench.run_once() {
            Ok(sample) => sample,
            Err(err) => {
                return Err(proc_exit::Exit::new(proc_exit::Code::FAILURE)
                    .with_message(format!("{:#}", err)));
            }
        };
        if sample.exit_code == Some(0) {
            success_count += 1;
        } else {
            failure_count += 1;
        }
        console.print(format!("  #{}/{}: {:.6} seconds", nth, cli_args.num_runs, sample.value).as_str());
        samples.push(sample.value);
    }

    let stats = crate::stats::Stats::new(&samples);
    if stats.count() == 0 {
        return Err(proc_exit::Exit::new(proc_exit::Code::FAILURE).with_message(format!(
            "Every run of `{}` reported a non-finite value. There is nothing to calculate.",
            cli_args.program()
        )));
    }
    if 0 < stats.nan_count {
        console.warn(
            format!(
                "{} of {} runs reported a non-finite value. Those runs are excluded from the statistics.",
                stats.nan_count, cli_args.num_runs
            )
            .as_str(),
        );
    }

    console.print_bold(format!("Benchmark Results (n = {}):", cli_args.num_runs).as_str());
    for line in crate::report::render(&stats) {
        console.print(line.as_str());
    }

    if 0 < failure_count {
        console.warn(
            format!(
                "Exit status: Success {} times. Failure {} times.",
                success_count, failure_count
            )
            .as_str(),
        );
    }

    Ok(())
}
