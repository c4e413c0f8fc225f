// main.rs - CLI entry point

use std::io;
use std::time::Instant;

use fasta_checksum::cli::{validate_args, Args, Config};
use fasta_checksum::prelude::*;
use log::info;

fn main() {
    let args: Args = argh::from_env();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run_main(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main(mut args: Args) -> Result<()> {
    if args.version {
        println!("{}", fasta_checksum::get_info());
        return Ok(());
    }

    // Handle generate config first
    if args.generate_config {
        print!("{}", Config::generate_sample());
        return Ok(());
    }

    let registry = AlgorithmRegistry::new();

    if args.list_algorithms {
        for (name, desc) in registry.list_algorithms() {
            println!("{}\t{}", name.to_lowercase(), desc);
        }
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation_result = validate_args(&args, &registry)?;

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()?;
        info!("Threads: {}", n);
    } else {
        info!("Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let names: Vec<&str> = validation_result
        .algorithms
        .iter()
        .map(|a| a.name())
        .collect();
    info!(
        "Checksumming {} with {}",
        validation_result.fasta.display(),
        names.join(", ")
    );

    let total_start = Instant::now();
    let report = fasta_report(
        &validation_result.fasta,
        &validation_result.algorithms,
        &validation_result.report_options,
    )?;

    let stdout = io::stdout();
    write_report(
        &mut stdout.lock(),
        &report,
        validation_result.out_format,
        validation_result.genome_id.as_deref(),
    )?;

    info!(
        "{} contigs checksummed in {:.2}s",
        report.record_count(),
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}
