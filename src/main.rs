//! Command-line entry point.
//!
//! Configuration comes from the environment (`DEVICE`, `PROFILE`,
//! `REPEATS`, `OUT_DIR`, `SEED`, `REPORT_JSON`); there are no positional
//! arguments. The textual report goes to stdout; fatal errors print one
//! prefixed diagnostic line to stderr and exit with a code distinct per
//! taxonomy entry. Chart rendering failures are warnings only.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use colored::Colorize;

use complexity_bench::{
    check_clock, output, BenchError, Config, Driver, PlottersRenderer, StdWorkloads,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", err.prefix().red().bold(), err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), BenchError> {
    let config = Config::from_env()?;
    config.validate()?;

    let clock = check_clock()?;
    eprintln!(
        "{} monotonic clock resolution ~{} ns",
        "clock:".dimmed(),
        clock.resolution_ns
    );

    // The output directory must exist before measurement starts; failing
    // here is fatal, failing to render later is not.
    fs::create_dir_all(&config.out_dir).map_err(|source| BenchError::OutputDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let workloads = StdWorkloads::from_config(&config);
    let out_dir = config.out_dir.clone();
    let report_json = config.report_json.clone();

    let mut driver = Driver::new(config, workloads)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = driver.run(&mut out).map_err(BenchError::ReportIo)?;
    // Rows are flushed by the driver before any rendering begins.
    drop(out);

    if let Some(path) = report_json {
        match output::to_json_pretty(&report) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    eprintln!(
                        "{} could not write {}: {}",
                        "report warning:".yellow().bold(),
                        path.display(),
                        err
                    );
                }
            }
            Err(err) => eprintln!("{} {}", "report warning:".yellow().bold(), err),
        }
    }

    let renderer = PlottersRenderer::new();
    let summary = output::render_report(&report, &out_dir, &renderer);
    for path in &summary.saved {
        println!("Saved chart: {}", path.display());
    }
    for (path, err) in &summary.failures {
        eprintln!(
            "{} {}: {}",
            "render warning:".yellow().bold(),
            path.display(),
            err
        );
    }
    io::stdout().flush().ok();

    Ok(())
}
