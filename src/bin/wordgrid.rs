use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wordgrid_solver::config::SolverConfig;
use wordgrid_solver::errors::GridError;
use wordgrid_solver::solver::{solve_with_seed, SolveReport};
use wordgrid_solver::utils::{letters_from_str, load_lexicon};

const RULE: &str = "================";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Letters to place, e.g. "ielebtaemltnvaaoalpse"
    letters: String,

    /// Word list, one word per line
    #[clap(short, long, default_value = "words.txt")]
    words: PathBuf,

    /// Seed for the random sampler (random if omitted)
    #[clap(short, long)]
    seed: Option<u64>,

    /// Random samples per target word length
    #[clap(long, default_value_t = 10)]
    attempts: usize,

    /// Most letters drawn per sample
    #[clap(long, default_value_t = 8)]
    sample_size: usize,

    /// Anchors tried per step
    #[clap(long, default_value_t = 4)]
    anchor_limit: usize,

    /// Candidate words tried per anchor
    #[clap(long, default_value_t = 10)]
    candidate_limit: usize,

    /// Stop after this many search steps
    #[clap(long)]
    max_steps: Option<u64>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            attempts: self.attempts,
            sample_size: self.sample_size,
            anchor_limit: self.anchor_limit,
            candidate_limit: self.candidate_limit,
            max_steps: self.max_steps,
            ..SolverConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    wordgrid_solver::log::init_logger(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error [{}]: {}", e.code(), e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), GridError> {
    let letters = letters_from_str(&args.letters)?;
    let lexicon = load_lexicon(&args.words)?;
    println!("Loaded {} words from {}", lexicon.len(), args.words.display());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {}", seed);

    let (report, stats) = solve_with_seed(&lexicon, &letters, args.config(), seed)?;

    match report {
        SolveReport::Solved(solution) => {
            println!("Ideal solution found!");
            println!("{}\n{}\n{}", RULE, solution.grid, RULE);
        }
        SolveReport::PartiallySolved(solutions) => {
            println!("{} good enough solution(s) found!", solutions.len());
            let best = &solutions[0];
            println!("{}\n{}\n{}", RULE, best.grid, RULE);
            println!("Letters left: {}", best.leftover);
        }
        SolveReport::NoSolution => {
            println!("No solution found.");
        }
    }
    if stats.truncated {
        println!("(search stopped after {} steps)", stats.steps);
    }
    Ok(())
}
