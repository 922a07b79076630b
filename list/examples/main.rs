extern crate sentinel_list;

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sentinel_list::{List, RandomDigits};

/// Builds a short linked list of random digits and prints it.
#[derive(Parser, Debug)]
#[command(name = "randlist", version, about)]
struct Options {
    /// Number of values to insert.
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// Fixed seed for reproducible output; the clock is used otherwise.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logger() {
    if env::var("RANDLIST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("RANDLIST_LOG")
            .write_style("RANDLIST_LOG_STYLE");
        env_logger::init_from_env(e);
    }
}

fn main() -> Result<()> {
    init_logger();
    let options = Options::parse();
    info!("{:?}", options);

    let mut source = match options.seed {
        Some(seed) => RandomDigits::from_seed(seed),
        None => RandomDigits::from_time(),
    };

    let mut list = List::new();
    list.insert_random(&mut source, options.count);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    list.write_to(&mut out)
        .context("failed to write the list to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_three_clock_seeded_values() {
        let options = Options::try_parse_from(["randlist"]).unwrap();
        assert_eq!(options.count, 3);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn count_and_seed_flags() {
        let options = Options::try_parse_from(["randlist", "-n", "5", "--seed", "42"]).unwrap();
        assert_eq!(options.count, 5);
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(Options::try_parse_from(["randlist", "--count", "-1"]).is_err());
    }

    #[test]
    fn seeded_runs_render_identically() {
        let render = |seed| {
            let mut list = List::new();
            list.insert_random(&mut RandomDigits::from_seed(seed), 3);
            list.render()
        };
        assert_eq!(render(9), render(9));
        assert!(render(9).ends_with("\nFinished.\n"));
    }
}
