mod report;

use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knap_algorithms::knapsack::{brute_force, dynamic_programming};
use knap_challenges::knapsack::{Challenge, Solution, Track, Validation};
use knap_structs::{
    config::RunConfig,
    core::{BruteForceReport, DpReport, OutputData, SolverReport, TablePreviewReport},
};
use knap_utils::{compress_obj, dejsonify, jsonify, jsonify_pretty, seed_from_str, seed_to_hex};
use log::{debug, info};
use std::{fs, io::Read, path::PathBuf, time::Instant};

const EXIT_MISMATCH: i32 = 2;

fn cli() -> Command {
    Command::new("knap")
        .about("Solves 0/1 knapsack instances and cross-checks the result")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves an instance by dynamic programming and checks it by brute force")
                .arg(
                    arg!([CONFIG] "Config json string or path to json file (default: built-in warehouse data)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"preview-rows" [ROWS] "Rows of the DP table to print")
                        .default_value("6")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"preview-cols" [COLS] "Columns of the DP table to print")
                        .default_value("16")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"skip-brute-force" "Do not run the exhaustive search")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"max-brute-force-items" [N] "Skip the exhaustive search above this many items")
                        .default_value("25")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--json "Print the output data as json instead of the report")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a selection against an instance")
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file (default: built-in warehouse data)")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance config from a seed")
                .arg(
                    arg!(<SEED> "64 hex characters, or any string to hash into a seed")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"num-items" [N] "Number of items")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-weight" [W] "Largest item weight")
                        .default_value("10")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"max-value" [V] "Largest item value")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"capacity-percent" [P] "Capacity as a percentage of the total weight")
                        .default_value("40")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the config is saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn init_logger() {
    if std::env::var("KNAP_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("KNAP_LOG")
            .write_style("KNAP_LOG_STYLE");
        env_logger::init_from_env(env);
    }
}

fn main() {
    init_logger();
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", sub_m)) => SolveOptions::from_matches(sub_m).and_then(solve),
        Some(("verify_solution", sub_m)) => verify_solution(
            sub_m.get_one::<String>("config").cloned(),
            required::<String>(sub_m, "SOLUTION"),
        )
        .map(|_| None),
        Some(("generate", sub_m)) => generate(
            required::<String>(sub_m, "SEED"),
            Track {
                num_items: required(sub_m, "num-items"),
                max_weight: required(sub_m, "max-weight"),
                max_value: required(sub_m, "max-value"),
                capacity_percent: required(sub_m, "capacity-percent"),
            },
            sub_m.get_one::<PathBuf>("output").cloned(),
        )
        .map(|_| None),
        _ => Err(anyhow!("Invalid subcommand")),
    };

    match result {
        Ok(Some(false)) => {
            eprintln!("Validation failed: dynamic programming and brute force disagree");
            std::process::exit(EXIT_MISMATCH);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Arguments that are required or carry a default are always present once
/// clap has accepted the command line.
fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> T {
    matches
        .get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| panic!("argument '{}' is required or has a default", id))
}

#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub config: Option<String>,
    pub preview_rows: usize,
    pub preview_cols: usize,
    pub skip_brute_force: bool,
    pub max_brute_force_items: usize,
    pub json: bool,
    pub output_file: Option<PathBuf>,
    pub compress: bool,
}

impl SolveOptions {
    fn from_matches(sub_m: &ArgMatches) -> Result<Self> {
        let options = Self {
            config: sub_m.get_one::<String>("CONFIG").cloned(),
            preview_rows: required(sub_m, "preview-rows"),
            preview_cols: required(sub_m, "preview-cols"),
            skip_brute_force: sub_m.get_flag("skip-brute-force"),
            max_brute_force_items: required(sub_m, "max-brute-force-items"),
            json: sub_m.get_flag("json"),
            output_file: sub_m.get_one::<PathBuf>("output").cloned(),
            compress: sub_m.get_flag("compress"),
        };
        if options.compress && options.output_file.is_none() {
            return Err(anyhow!("--compress requires --output"));
        }
        Ok(options)
    }
}

/// Returns whether the two solvers agreed, `None` if brute force was skipped.
pub fn solve(options: SolveOptions) -> Result<Option<bool>> {
    let challenge = load_config(options.config.as_deref())?.to_challenge()?;
    info!(
        "solving {} items under capacity {}",
        challenge.num_items(),
        challenge.capacity()
    );

    let start = Instant::now();
    let dp = dynamic_programming::solve_challenge(&challenge)?;
    let dp_elapsed = start.elapsed();
    debug!("dynamic programming took {:?}", dp_elapsed);

    let (brute_force, validation) = if options.skip_brute_force {
        info!("exhaustive search disabled");
        (None, None)
    } else if challenge.num_items() > options.max_brute_force_items {
        info!(
            "skipping exhaustive search: {} items exceed the limit of {}",
            challenge.num_items(),
            options.max_brute_force_items
        );
        (None, None)
    } else {
        let start = Instant::now();
        let solution = brute_force::solve_challenge(&challenge)?;
        let elapsed = start.elapsed();
        debug!("exhaustive search took {:?}", elapsed);
        let validation = Validation::new(
            dp.result.optimal_value,
            solution.result.optimal_value,
        );
        (
            Some(BruteForceReport {
                solver: SolverReport::new(&solution.result, elapsed),
                subsets_examined: solution.subsets_examined,
            }),
            Some(validation),
        )
    };

    let output_data = OutputData {
        capacity: challenge.capacity(),
        items: challenge.items().to_vec(),
        dp: DpReport {
            solver: SolverReport::new(&dp.result, dp_elapsed),
            trace: dp.trace,
            table: TablePreviewReport::new(
                dp.table.rows(),
                dp.table.cols(),
                dp.table.preview(options.preview_rows, options.preview_cols),
            ),
        },
        brute_force,
        validation,
    };
    info!(
        "result signature {:016x}",
        output_data.calc_result_signature()?
    );

    if let Some(path) = &options.output_file {
        if options.compress {
            fs::write(path, compress_obj(&output_data)?)?;
        } else {
            fs::write(path, jsonify(&output_data)?)?;
        }
        eprintln!("output_data written to: {:?}", path);
    }
    if options.json {
        println!("{}", jsonify_pretty(&output_data)?);
    } else {
        print!("{}", report::render(&output_data));
    }
    Ok(output_data.agreed())
}

pub fn verify_solution(config: Option<String>, solution: String) -> Result<()> {
    let challenge = load_config(config.as_deref())?.to_challenge()?;
    let solution = load_solution(&solution)?;

    let result = challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!(
        "Solution is valid: value {}, weight {} of {}",
        result.optimal_value,
        result.total_weight,
        challenge.capacity()
    );

    let optimum = dynamic_programming::solve_challenge(&challenge)?
        .result
        .optimal_value;
    if result.optimal_value == optimum {
        println!("Solution is optimal");
    } else {
        println!(
            "Solution is {} below the optimum of {}",
            optimum - result.optimal_value,
            optimum
        );
    }
    Ok(())
}

pub fn generate(seed: String, track: Track, output_file: Option<PathBuf>) -> Result<()> {
    let seed = seed_from_str(&seed);
    info!("generating instance from seed {}", seed_to_hex(&seed));
    let challenge = Challenge::generate_instance(&seed, &track)?;
    let config = jsonify_pretty(&RunConfig::from_challenge(&challenge)?)?;

    match output_file {
        Some(path) => {
            fs::write(&path, config)?;
            eprintln!("config written to: {:?}", path);
        }
        None => println!("{}", config),
    }
    Ok(())
}

fn read_json_arg(arg: &str, what: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read {} from stdin: {}", what, e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read {} file {}: {}", what, arg, e))
    } else {
        Ok(arg.to_string())
    }
}

fn load_config(config: Option<&str>) -> Result<RunConfig> {
    match config {
        None => Ok(RunConfig::warehouse()),
        Some(config) => {
            let json = read_json_arg(config, "config")?;
            dejsonify::<RunConfig>(&json).map_err(|e| anyhow!("Failed to parse config: {}", e))
        }
    }
}

fn load_solution(solution: &str) -> Result<Solution> {
    let json = read_json_arg(solution, "solution")?;
    dejsonify::<Solution>(&json).map_err(|e| anyhow!("Failed to parse solution: {}", e))
}
