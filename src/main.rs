mod cli;

use std::io::Write;

use clap::Parser;
use combsim::{
    table::{self, Format, TableOptions},
    GateId, GateKind,
};

fn main() {
    let cli = cli::Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" })).init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: cli::Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        cli::Commands::Table { file, outputs, csv, output, parallel } => {
            let network = combsim::load(&file)?;
            network.check()?;

            let options = TableOptions { format: if csv { Format::Csv } else { Format::Columns }, outputs: outputs.into_iter().map(GateId).collect() };
            let mut out: Box<dyn Write> = match output {
                Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
                None => Box::new(std::io::BufWriter::new(std::io::stdout().lock())),
            };

            if parallel {
                let rows = combsim::enumerate_parallel(&network)?;
                table::write_table(&mut out, &network, rows.into_iter().map(Ok), &options)?;
            } else {
                table::write_table(&mut out, &network, combsim::enumerate(&network), &options)?;
            }
            out.flush()?;
        }

        cli::Commands::Gates { file } => {
            let network = combsim::load(&file)?;
            table::write_gate_list(&mut std::io::stdout().lock(), &network)?;
        }

        cli::Commands::Gate { kind, bits } => {
            let kind = kind.parse::<GateKind>()?;
            table::write_gate_table(&mut std::io::stdout().lock(), &kind.truth_table(bits)?)?;
        }
    }

    Ok(())
}
