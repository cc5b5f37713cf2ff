use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use belotree::rng::{random_hands, rng_for_deal};
use belotree::{solve_batch, CardSet};

#[derive(Debug, Parser)]
#[command(
    name = "bench",
    about = "Deal seeded random games and solve each under all four trump suits"
)]
struct Args {
    /// Number of deals to generate and solve
    #[arg(long, default_value_t = 100)]
    deals: usize,

    /// Base seed for the deterministic dealer
    #[arg(long, default_value_t = 0x00C0_FFEE)]
    seed: u64,

    /// Contracting player (0-3)
    #[arg(long, default_value_t = 0)]
    contract: u8,

    /// Player leading the first trick (0-3)
    #[arg(long, default_value_t = 0)]
    starter: u8,

    /// Emit results as JSON instead of the human-readable table
    #[arg(long)]
    json: bool,

    /// Verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    if args.contract > 3 || args.starter > 3 {
        return Err(format!(
            "player indices must be in 0..=3 (contract={}, starter={})",
            args.contract, args.starter
        )
        .into());
    }

    let games: Vec<[CardSet; 4]> = (0..args.deals)
        .map(|i| {
            let mut rng = rng_for_deal(args.seed, i as u64);
            random_hands(&mut rng)
        })
        .collect();
    info!("dealt {} games with seed {:#x}", games.len(), args.seed);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("[{elapsed_precise}] solving {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("{} deals x 4 trumps", args.deals));

    let start = Instant::now();
    let scores = solve_batch(&games, args.contract, args.starter);
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    if args.json {
        let rows: Vec<serde_json::Value> = scores
            .iter()
            .enumerate()
            .map(|(i, row)| serde_json::json!({ "deal": i, "scores": row }))
            .collect();
        let report = serde_json::json!({
            "seed": args.seed,
            "contract": args.contract,
            "starter": args.starter,
            "results": rows,
        });
        println!("{report}");
    } else {
        println!("[bench] deal   hearts  diamonds  clubs  spades");
        for (i, row) in scores.iter().enumerate() {
            println!(
                "[bench] {i:4} {:8} {:9} {:6} {:7}",
                row[0], row[1], row[2], row[3]
            );
        }
        println!(
            "[bench] solved {} deals in {:.2?} ({:.1} deals/s)",
            args.deals,
            elapsed,
            args.deals as f64 / elapsed.as_secs_f64()
        );
    }

    Ok(())
}
