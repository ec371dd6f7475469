use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "combsim", about = "Truth tables for combinational logic netlists", version)]
pub(crate) struct Cli {
    /// Log evaluation details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the truth table of a netlist
    Table {
        /// Netlist file (`.json` for JSON, anything else for the text format)
        file: String,

        /// Gate ids to show, in order; all gates when omitted
        #[arg(long, value_delimiter = ',')]
        outputs: Vec<usize>,

        /// Comma separated values instead of aligned columns
        #[arg(long)]
        csv: bool,

        /// Write the table to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Evaluate rows on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// List the gates of a netlist sorted by id
    Gates {
        /// Netlist file
        file: String,
    },

    /// Print the truth table of a single gate type
    Gate {
        /// Gate type: not, and, or, xor, nand, nor, xnor
        kind: String,

        /// Number of inputs (NOT always uses 1)
        #[arg(long, default_value_t = 3)]
        bits: usize,
    },
}
