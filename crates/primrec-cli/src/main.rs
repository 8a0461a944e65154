//! Primrec CLI: the `primrec` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gcd {
            a,
            b,
            no_record,
            records,
            json,
        } => commands::compute::run_gcd(commands::compute::Args {
            a,
            b,
            no_record,
            records,
            json,
        }),

        Commands::Lcm {
            a,
            b,
            no_record,
            records,
            json,
        } => commands::compute::run_lcm(commands::compute::Args {
            a,
            b,
            no_record,
            records,
            json,
        }),

        Commands::Both {
            a,
            b,
            no_record,
            records,
            json,
        } => commands::compute::run_both(commands::compute::Args {
            a,
            b,
            no_record,
            records,
            json,
        }),

        Commands::Examples { json } => commands::examples::run(json),

        Commands::History {
            kind,
            limit,
            records,
            json,
        } => commands::history::run(kind, limit, records, json),

        Commands::Stats { records, json } => commands::stats::run(records, json),

        Commands::Clear { records, json } => commands::clear::run(records, json),
    }
}
