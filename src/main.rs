use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use branchmark::{
    benchmark, build_tree, report, ArithmeticRule, BenchOptions, ChildRule, Contender, MemoRule,
    Sample, Strategy,
};

#[derive(Parser, Debug)]
#[command(
    name = "branchmark",
    about = "Synthetic binary tree builders and timing comparisons"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build one tree and print its levels.
    Build {
        /// Root node value.
        #[arg(long, default_value_t = 14)]
        root: i64,
        /// Number of levels, root included.
        #[arg(long, default_value_t = 4)]
        height: i32,
        /// Construction strategy.
        #[arg(long, value_enum, default_value = "recursive")]
        strategy: StrategyArg,
        /// Memoize child computations.
        #[arg(long)]
        cached: bool,
        /// Also build with the other strategy and verify the structures agree.
        #[arg(long)]
        check: bool,
    },
    /// Time the construction strategies across a range of heights.
    Bench {
        /// Root node value.
        #[arg(long, default_value_t = 14)]
        root: i64,
        /// Heights to measure: inclusive range (4..16) or comma list (4,8,12).
        #[arg(long, default_value = "4..16", value_parser = parse_heights)]
        heights: HeightList,
        /// Trials per measurement; the minimum total time is kept.
        #[arg(long, default_value_t = 9)]
        repeat: u32,
        /// Builds per trial.
        #[arg(long, default_value_t = 50)]
        number: u32,
        /// Which comparison to run.
        #[arg(long, value_enum, default_value = "all")]
        experiment: Experiment,
        /// Directory for CSV output; nothing is written when absent.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Recursive,
    Iterative,
}

impl StrategyArg {
    fn strategy(self) -> Strategy {
        match self {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

#[derive(Clone, Debug)]
struct HeightList(Vec<i32>);

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Experiment {
    /// Every comparison below.
    All,
    /// Recursive vs iterative, both plain.
    Strategies,
    /// Recursive: plain vs memoized.
    RecursiveMemo,
    /// Iterative: plain vs memoized.
    IterativeMemo,
    /// Recursive vs iterative, both memoized.
    Memoized,
}

/// One side of a comparison, before any rule state exists.
struct Side {
    strategy: Strategy,
    cached: bool,
    label: &'static str,
}

struct ExperimentSpec {
    file_stem: &'static str,
    title: &'static str,
    a: Side,
    b: Side,
}

const EXPERIMENTS: [ExperimentSpec; 4] = [
    ExperimentSpec {
        file_stem: "exp1_rec_vs_it_no_cache",
        title: "recursive vs iterative (no cache)",
        a: Side {
            strategy: Strategy::Recursive,
            cached: false,
            label: "recursive_nc",
        },
        b: Side {
            strategy: Strategy::Iterative,
            cached: false,
            label: "iterative_nc",
        },
    },
    ExperimentSpec {
        file_stem: "exp2_rec_nc_vs_rec_cached",
        title: "recursive: no cache vs cached",
        a: Side {
            strategy: Strategy::Recursive,
            cached: false,
            label: "recursive_nc",
        },
        b: Side {
            strategy: Strategy::Recursive,
            cached: true,
            label: "recursive_cached",
        },
    },
    ExperimentSpec {
        file_stem: "exp3_it_nc_vs_it_cached",
        title: "iterative: no cache vs cached",
        a: Side {
            strategy: Strategy::Iterative,
            cached: false,
            label: "iterative_nc",
        },
        b: Side {
            strategy: Strategy::Iterative,
            cached: true,
            label: "iterative_cached",
        },
    },
    ExperimentSpec {
        file_stem: "exp4_rec_cached_vs_it_cached",
        title: "recursive vs iterative (cached)",
        a: Side {
            strategy: Strategy::Recursive,
            cached: true,
            label: "recursive_cached",
        },
        b: Side {
            strategy: Strategy::Iterative,
            cached: true,
            label: "iterative_cached",
        },
    },
];

impl Experiment {
    fn specs(self) -> &'static [ExperimentSpec] {
        match self {
            Experiment::All => &EXPERIMENTS,
            Experiment::Strategies => &EXPERIMENTS[0..1],
            Experiment::RecursiveMemo => &EXPERIMENTS[1..2],
            Experiment::IterativeMemo => &EXPERIMENTS[2..3],
            Experiment::Memoized => &EXPERIMENTS[3..4],
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            root,
            height,
            strategy,
            cached,
            check,
        } => run_build(root, height, strategy.strategy(), cached, check)?,
        Commands::Bench {
            root,
            heights,
            repeat,
            number,
            experiment,
            out_dir,
        } => run_bench(root, &heights.0, repeat, number, experiment, out_dir)?,
    }

    Ok(())
}

fn run_build(root: i64, height: i32, strategy: Strategy, cached: bool, check: bool) -> Result<()> {
    let tree = build_with(root, height, strategy, cached)?;
    print!("{tree}");

    if check {
        let other = strategy.counterpart();
        let mirror = build_with(root, height, other, cached)?;
        if mirror != tree {
            bail!("structure mismatch between {strategy} and {other} at height {height}");
        }
        println!("structures agree: {strategy} == {other}");
    }

    Ok(())
}

fn build_with(
    root: i64,
    height: i32,
    strategy: Strategy,
    cached: bool,
) -> Result<branchmark::Tree> {
    let tree = if cached {
        let mut rule = MemoRule::new(ArithmeticRule);
        build_tree(root, height, strategy, &mut rule)
    } else {
        let mut rule = ArithmeticRule;
        build_tree(root, height, strategy, &mut rule)
    };
    tree.with_context(|| format!("failed to build tree (root {root}, height {height})"))
}

fn run_bench(
    root: i64,
    heights: &[i32],
    repeat: u32,
    number: u32,
    experiment: Experiment,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let opts = BenchOptions { repeat, number };

    if let Some(dir) = &out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    for spec in experiment.specs() {
        let samples = run_experiment(root, heights, spec, &opts)
            .with_context(|| format!("benchmark failed for '{}'", spec.title))?;

        println!("\n=== {} ===", spec.title);
        report::render_table(
            &mut io::stdout().lock(),
            spec.a.label,
            spec.b.label,
            &samples,
        )?;

        if let Some(dir) = &out_dir {
            let path = dir.join(format!("{}.csv", spec.file_stem));
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            report::write_csv(&mut BufWriter::new(file), spec.a.label, spec.b.label, &samples)?;
            info!(path = %path.display(), "wrote csv");
        }
    }

    Ok(())
}

fn run_experiment(
    root: i64,
    heights: &[i32],
    spec: &ExperimentSpec,
    opts: &BenchOptions,
) -> Result<Vec<Sample>> {
    // Rule values are created per experiment, so memoized sides run warm
    // across all heights of a run but never leak state between experiments.
    let mut plain_a = ArithmeticRule;
    let mut memo_a = MemoRule::new(ArithmeticRule);
    let rule_a: &mut dyn ChildRule = if spec.a.cached { &mut memo_a } else { &mut plain_a };

    let mut plain_b = ArithmeticRule;
    let mut memo_b = MemoRule::new(ArithmeticRule);
    let rule_b: &mut dyn ChildRule = if spec.b.cached { &mut memo_b } else { &mut plain_b };

    let samples = benchmark(
        root,
        heights,
        Contender {
            label: spec.a.label,
            strategy: spec.a.strategy,
            rule: rule_a,
        },
        Contender {
            label: spec.b.label,
            strategy: spec.b.strategy,
            rule: rule_b,
        },
        opts,
    )?;

    Ok(samples)
}

fn parse_heights(input: &str) -> Result<HeightList, String> {
    let trimmed = input.trim();

    if let Some((start, end)) = trimmed.split_once("..") {
        let start: i32 = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid height '{}'", start.trim()))?;
        let end: i32 = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid height '{}'", end.trim()))?;
        if end < start {
            return Err(format!("empty height range {start}..{end}"));
        }
        return Ok(HeightList((start..=end).collect()));
    }

    let mut heights = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        heights.push(
            part.parse()
                .map_err(|_| format!("invalid height '{part}'"))?,
        );
    }
    Ok(HeightList(heights))
}
