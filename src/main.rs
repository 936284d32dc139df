use clap::Parser;
use lifexpect::prelude::*;
use lifexpect::profile::{MAX_AGE, MIN_AGE};
use lifexpect::report::DISCLAIMER;
use log::info;
use polars::prelude::{CsvWriter, SerWriter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

// ========================================================================================
//                         COMMAND-LINE INTERFACE DEFINITION
// ========================================================================================

#[derive(Parser, Debug)]
#[clap(
    name = "lifexpect",
    version,
    about = "Estimate life expectancy and leading causes of death from lifestyle inputs."
)]
struct Args {
    /// Current age in years (1-100).
    #[clap(long, value_parser = clap::value_parser!(u32).range(i64::from(MIN_AGE)..=i64::from(MAX_AGE)))]
    age: u32,

    /// Sex: male | female.
    #[clap(long, value_parser = parse_label::<Sex>)]
    sex: Sex,

    /// Weight status: normal | overweight | obese.
    #[clap(long, default_value = "normal", value_parser = parse_label::<WeightStatus>)]
    weight: WeightStatus,

    /// Smoking status: never | former | current.
    #[clap(long, default_value = "never", value_parser = parse_label::<SmokingStatus>)]
    smoking: SmokingStatus,

    #[clap(long)]
    diabetes: bool,

    #[clap(long)]
    heart_disease: bool,

    #[clap(long)]
    cancer_history: bool,

    /// Exercise frequency: sedentary | moderate | active.
    #[clap(long, default_value = "sedentary", value_parser = parse_label::<ExerciseLevel>)]
    exercise: ExerciseLevel,

    /// Print the full report as JSON instead of text.
    #[clap(long)]
    json: bool,

    /// Include the sampled density curve in the report.
    #[clap(long)]
    curve: bool,

    /// Write the density curve to a CSV file.
    #[clap(long, value_name = "PATH")]
    curve_csv: Option<PathBuf>,

    /// Spreadsheet (.ods or .xlsx) with a custom base table.
    #[clap(long, value_name = "PATH", requires = "sheet")]
    table: Option<PathBuf>,

    /// Worksheet name inside --table.
    #[clap(long)]
    sheet: Option<String>,
}

fn parse_label<T: FromStr<Err = InvalidProfile>>(s: &str) -> Result<T, String> {
    s.parse::<T>().map_err(|e| e.to_string())
}

// ========================================================================================
//                           THE MAIN ORCHESTRATION LOGIC
// ========================================================================================

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> LifeResult<()> {
    let profile = PersonProfile::builder()
        .age(args.age)
        .sex(args.sex)
        .weight(args.weight)
        .smoking(args.smoking)
        .diabetes(args.diabetes)
        .heart_disease(args.heart_disease)
        .cancer_history(args.cancer_history)
        .exercise(args.exercise)
        .build();

    let table = match (&args.table, &args.sheet) {
        (Some(path), Some(sheet)) => Some(load_table(path, sheet)?),
        _ => None,
    };

    let config = EstimatorConfig::default();
    let result = estimate_with()
        .profile(&profile)
        .maybe_table(table.as_ref())
        .config(&config)
        .call()?;

    let mut report = Report::new(profile, result, &config);
    if args.curve || args.curve_csv.is_some() {
        report = report.with_curve()?;
    }

    if let (Some(path), Some(curve)) = (&args.curve_csv, &report.curve) {
        let mut df = curve.to_df()?;
        let mut file = File::create(path)
            .map_err(|e| format!("Failed to create '{}': {e}", path.display()))?;
        CsvWriter::new(&mut file).finish(&mut df)?;
        info!("Wrote {} curve points to {}", df.height(), path.display());
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
        println!("{DISCLAIMER}");
    }

    Ok(())
}

fn load_table(path: &Path, sheet: &str) -> LifeResult<BaseTable> {
    let path_str = path
        .to_str()
        .ok_or_else(|| format!("Path '{}' is not valid UTF-8", path.display()))?;

    let is_ods = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ods"));

    if is_ods {
        BaseTable::from_ods(path_str, sheet)
    } else {
        BaseTable::from_xlsx(path_str, sheet)
    }
}
