//! clscan — hybrid CLs limit scans and significances for a single-bin
//! counting experiment.
//!
//! Commands:
//! - `limit` — bracket and bisect toward the upper limit on `r`
//! - `significance` — convert accumulated toys at `r = 1` into a
//!   significance, optionally saving or reading the toy outcomes

mod counting;
mod progress;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};

use clscan_core::{
    HypoTestEngine, Rule, TestStatistic,
    store::{JsonStore, LABEL_PREFIX, ResultStore},
};
use clscan_solve::{limit, significance};

use counting::CountingEngine;
use progress::ProgressPrinter;

#[derive(Parser)]
#[command(name = "clscan", about = "Hybrid CLs limit and significance scans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScanOpts {
    /// Number of toy MC extractions to compute CLs+b, CLb and CLs.
    #[arg(long, short = 'T', default_value_t = 500)]
    toys: u32,

    /// Absolute accuracy on CLs to reach to terminate the scan.
    #[arg(long = "cls-acc", default_value_t = 0.005)]
    cls_acc: f64,

    /// Absolute accuracy on r to reach to terminate the scan.
    #[arg(long = "r-abs-acc", default_value_t = 0.1)]
    r_abs_acc: f64,

    /// Relative accuracy on r to reach to terminate the scan.
    #[arg(long = "r-rel-acc", default_value_t = 0.05)]
    r_rel_acc: f64,

    /// Rule to use: CLs, CLsplusb.
    #[arg(long, default_value = "CLs")]
    rule: String,

    /// Test statistic: LEP, TEV, Atlas.
    #[arg(long = "test-stat", default_value = "LEP")]
    test_stat: String,

    /// Confidence level of the reported limit.
    #[arg(long, default_value_t = 0.95)]
    cl: f64,

    /// Observed event count.
    #[arg(long)]
    observed: u64,

    /// Expected background yield.
    #[arg(long)]
    background: f64,

    /// Expected signal yield at r = 1.
    #[arg(long)]
    signal: f64,

    /// Toy generation seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for the upper limit on the signal strength r.
    Limit {
        #[command(flatten)]
        opts: ScanOpts,

        /// Initial upper bound on r for the bracket search.
        #[arg(long = "r-max", default_value_t = 20.0)]
        r_max: f64,

        /// Always try to compute an interval on r after a direct hit on the
        /// target accuracy.
        #[arg(long = "r-interval")]
        r_interval: bool,
    },
    /// Estimate the significance from toys at the reference strength r = 1.
    Significance {
        #[command(flatten)]
        opts: ScanOpts,

        /// Save the toy outcome into the toys directory.
        #[arg(long = "save-hybrid-result")]
        save_hybrid_result: bool,

        /// Read and merge previously saved outcomes instead of running toys.
        #[arg(long = "read-hybrid-results")]
        read_hybrid_results: bool,

        /// Directory holding saved toy outcomes.
        #[arg(long = "toys-dir")]
        toys_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Limit {
            opts,
            r_max,
            r_interval,
        } => run_limit(&opts, r_max, r_interval),
        Commands::Significance {
            opts,
            save_hybrid_result,
            read_hybrid_results,
            toys_dir,
        } => run_significance(&opts, save_hybrid_result, read_hybrid_results, toys_dir),
    }
}

/// Parses the selectors and builds the counting engine; all configuration
/// errors surface here, before any toys run.
fn setup(opts: &ScanOpts) -> Result<(CountingEngine, Rule, TestStatistic)> {
    let rule: Rule = opts.rule.parse()?;
    let test_stat: TestStatistic = opts.test_stat.parse()?;
    if opts.background <= 0.0 {
        bail!("background yield must be positive");
    }
    if opts.signal <= 0.0 {
        bail!("signal yield must be positive");
    }
    let engine = CountingEngine::new(
        opts.observed,
        opts.background,
        opts.signal,
        test_stat.params(),
        opts.seed,
    );
    Ok((engine, rule, test_stat))
}

fn run_limit(opts: &ScanOpts, r_max: f64, r_interval: bool) -> Result<()> {
    let (mut engine, rule, test_stat) = setup(opts)?;
    if test_stat.params().float_poi {
        bail!(
            "test statistic '{}' floats r during the alternate-hypothesis \
             evaluation; the built-in counting model cannot drive a limit \
             scan with it",
            opts.test_stat
        );
    }

    let config = limit::Config {
        n_toys: opts.toys,
        cls_accuracy: opts.cls_acc,
        r_abs_accuracy: opts.r_abs_acc,
        r_rel_accuracy: opts.r_rel_acc,
        rule,
        confidence_level: opts.cl,
        compute_interval: r_interval,
        ..limit::Config::default()
    };

    println!("Search for upper limit to the limit");
    let result = limit::solve(
        &mut engine,
        &config,
        r_max,
        ProgressPrinter::new(rule.label()),
    )?;

    println!("\n -- Hybrid --");
    println!(
        "Limit: r < {} +/- {} @ {}% CL",
        result.limit,
        result.half_width,
        config.confidence_level * 100.0
    );
    Ok(())
}

fn run_significance(
    opts: &ScanOpts,
    save_hybrid_result: bool,
    read_hybrid_results: bool,
    toys_dir: Option<PathBuf>,
) -> Result<()> {
    let (mut engine, _rule, _test_stat) = setup(opts)?;

    let store = toys_dir.map(JsonStore::new);
    if save_hybrid_result && store.is_none() {
        bail!("option --toys-dir must be set to save the hybrid result");
    }

    let outcome = if read_hybrid_results {
        let Some(store) = store.as_ref() else {
            bail!("option --toys-dir must be set to read hybrid results");
        };
        println!("Reading toys from {}", store.dir().display());
        let outcomes = store.load_all_matching(LABEL_PREFIX)?;
        significance::merge_outcomes(&outcomes)?
    } else {
        engine.run_toys(significance::REFERENCE_R, opts.toys)?
    };

    if save_hybrid_result {
        if let Some(store) = store.as_ref() {
            let label = format!("{LABEL_PREFIX}{}", rand::random::<u32>());
            store.save(&outcome, &label)?;
            println!(
                "Hybrid result saved as {label} in {}",
                store.dir().display()
            );
        }
    }

    let sig = significance::from_outcome(&outcome)?;

    println!("\n -- Hybrid --");
    println!(
        "Significance: {}  {}/+{}  (CLb {} +/- {})",
        sig.significance, sig.sigma_high, sig.sigma_low, sig.clb, sig.clb_error
    );
    Ok(())
}
