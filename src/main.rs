use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use five_clique::{search, SearchConfig, SeedPool, WordCatalog};
use itertools::Itertools;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// five_clique: find five words with twenty-five distinct letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line
    #[arg(default_value = "words_alpha.txt")]
    word_file: PathBuf,

    /// Worker threads for the search [default: one per core]
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Search seeds one after another on a single thread
    #[arg(long)]
    sequential: bool,

    /// Pool each seed's search draws from
    #[arg(long, value_enum, default_value_t = PoolArg::Shrinking)]
    seed_pool: PoolArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PoolArg {
    /// Drop every seed from the pool once searched
    Shrinking,
    /// Give every seed the whole word list
    Full,
}

impl From<PoolArg> for SeedPool {
    fn from(arg: PoolArg) -> Self {
        match arg {
            PoolArg::Shrinking => SeedPool::Shrinking,
            PoolArg::Full => SeedPool::Full,
        }
    }
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Couldn't open '{}'", path.display()))?;
    let lines: Vec<String> = BufReader::new(file)
        .lines()
        .try_collect()
        .with_context(|| format!("Couldn't read '{}'", path.display()))?;
    Ok(lines
        .iter()
        .map(|line| line.trim().to_lowercase())
        .collect())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let start = Instant::now();

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Couldn't set up the thread pool")?;
    }

    let catalog = WordCatalog::build(read_words(&args.word_file)?);
    let stats = catalog.stats();
    info!("Got {} 5-letter words", stats.five_letter);
    info!("Got {} words with no duplicate letters", stats.distinct_letter);
    info!("Got {} words excluding anagrams", stats.canonical);

    for (letter, count) in ('a'..='z').zip(catalog.letter_frequencies()) {
        debug!(" - '{}' : {} words", letter, count);
    }

    let config = SearchConfig {
        parallel: !args.sequential,
        seed_pool: args.seed_pool.into(),
    };
    info!("Searching for five words with twenty-five unique letters...");
    let combos = search(&catalog, &config).into_iter().sorted().collect_vec();

    info!("Got {} results", combos.len());
    for combo in &combos {
        println!("{}", combo);
    }

    info!("Entire process took {:.2?}", start.elapsed());
    Ok(())
}
