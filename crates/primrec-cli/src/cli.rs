use clap::{Parser, Subcommand};

/// Default location of the records JSONL.
pub const DEFAULT_RECORDS_PATH: &str = ".primrec/records.jsonl";

#[derive(Parser)]
#[command(
    name = "primrec",
    about = "Primrec: GCD/LCM arithmetic through a primitive recursive function engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the greatest common divisor of two numbers
    Gcd {
        a: u64,
        b: u64,

        /// Do not append the result to the record store
        #[arg(long)]
        no_record: bool,

        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the least common multiple of two numbers
    Lcm {
        a: u64,
        b: u64,

        /// Do not append the result to the record store
        #[arg(long)]
        no_record: bool,

        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute both GCD and LCM and check the product identity
    Both {
        a: u64,
        b: u64,

        /// Do not append the results to the record store
        #[arg(long)]
        no_record: bool,

        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a table of worked examples
    Examples {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recorded calculations, newest first
    History {
        /// Filter by operation kind: gcd or lcm
        #[arg(long)]
        kind: Option<String>,

        /// Maximum number of rows to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summary counts over recorded calculations
    Stats {
        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every recorded calculation
    Clear {
        /// Path to the records JSONL
        #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
        records: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
