/*
Score the alignment quality of every sequence in one or more alignments
    + read aligned fasta or a table with keep and alignment columns
    + trim the ends of the alignment before scoring
    + classify columns as sparse or dense by fraction of gaps
        + default 0.8
    + report fx_in_sparse, fx_missing_dense and sparse_run_length per sequence

Input files are independent and are scored on a thread pool.
*/

mod utils;
use std::process::ExitCode;
use std::sync::mpsc;
use clap::Parser;
use log::{debug, error, info};
use threadpool::ThreadPool;
use utils::get_args::Cli;
use utils::report_scores::{report_scores, ReportConfig};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsed commandline arguments: {:?}", cli);
    let config = ReportConfig::from_cli(&cli);
    if let Err(e) = config.params.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    let pool = ThreadPool::new(cli.nproc.max(1));
    let (tx, rx) = mpsc::channel();
    for file in cli.input_alignment {
        let tx = tx.clone();
        let config = config.clone();
        pool.execute(move || {
            debug!("Processing file: {:?}", file);
            let result = report_scores(&file, &config);
            // receiver outlives the pool
            let _ = tx.send((file, result));
        });
    }
    drop(tx);

    let mut failed = 0usize;
    for (file, result) in rx {
        match result {
            Ok(out) => info!("Alignment {:?} scored, written to {:?}", file, out),
            Err(e) => {
                error!("Scoring {:?} failed: {}", file, e);
                failed += 1;
            }
        }
    }
    pool.join();
    if failed > 0 {
        error!("{} file(s) could not be scored", failed);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
