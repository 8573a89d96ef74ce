//! roi-runner: headless automation ROI report generator.
//!
//! Usage:
//!   roi-runner --input process.json
//!   roi-runner --input process.json --format csv
//!   roi-runner --decode "people=5&implOneOff=8000" --format json
//!   roi-runner --example > process.json

use anyhow::{bail, Context, Result};
use roi_core::{
    analysis::{self, RoiAnalysis},
    constants::{category_label, currency_symbol, CATEGORIES, CURRENCIES, DEPARTMENTS, INDUSTRIES},
    export, format as fmt,
    input::ProcessInput,
    narrative,
    scenario::ScenarioProjection,
    sensitivity::{self, SensitivityEntry},
    share,
    types::{ScenarioKey, ScenarioTriple},
};
use std::env;
use std::fs;

/// Everything a rendering layer needs, in one JSON document.
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    input: &'a ProcessInput,
    analysis: &'a RoiAnalysis,
    sensitivity: &'a [SensitivityEntry],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "--example") {
        println!("{}", serde_json::to_string_pretty(&ProcessInput::default())?);
        return Ok(());
    }
    if args.iter().any(|a| a == "--lists") {
        print_lists();
        return Ok(());
    }

    let format = args
        .windows(2)
        .find(|w| w[0] == "--format")
        .map(|w| w[1].as_str())
        .unwrap_or("text");
    let input_path = args
        .windows(2)
        .find(|w| w[0] == "--input")
        .map(|w| w[1].as_str());
    let share_string = args
        .windows(2)
        .find(|w| w[0] == "--decode")
        .map(|w| w[1].as_str());
    let share_mode = args.iter().any(|a| a == "--share");

    let input = load_input(input_path, share_string)?;
    input.validate()?;

    if share_mode {
        println!("{}", share::encode(&input)?);
        return Ok(());
    }

    let results = analysis::analyze(&input);
    let sensitivity = sensitivity::sensitivity_analysis(&input);

    match format {
        "text" => print_report(&input, &results, &sensitivity),
        "json" => {
            let report = JsonReport {
                input: &input,
                analysis: &results,
                sensitivity: &sensitivity,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => println!("{}", export::scenario_csv(&results)),
        other => bail!("unknown format '{other}' (expected text, json or csv)"),
    }

    Ok(())
}

fn load_input(path: Option<&str>, share_string: Option<&str>) -> Result<ProcessInput> {
    if let Some(query) = share_string {
        let input = share::decode(query)?;
        log::debug!("decoded input record from share string");
        return Ok(input);
    }

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            let input = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
            log::debug!("loaded input record from {path}");
            Ok(input)
        }
        None => Ok(ProcessInput::default()),
    }
}

fn print_report(input: &ProcessInput, results: &RoiAnalysis, sensitivity: &[SensitivityEntry]) {
    let today = chrono::Local::now().format("%Y-%m-%d");
    let currency = input.currency.as_str();
    let baseline = &results.baseline;
    let scenarios = &results.scenarios;

    println!("=== AUTOMATION ROI ANALYSIS ===");
    println!("  generated:   {today}");
    println!("  process:     {}", input.process_description);
    println!(
        "  department:  {} | industry: {}",
        input.department, input.industry
    );
    if !input.category.is_empty() {
        let categories: Vec<&str> = input.category.iter().map(|c| category_label(c)).collect();
        println!("  categories:  {}", categories.join(", "));
    }
    println!(
        "  team:        {} people at {}/week each",
        input.people,
        fmt::hours(input.hours_per_week_per_person)
    );
    println!(
        "  salary:      {} {}",
        fmt::currency(input.avg_salary, currency),
        input.salary_period.label()
    );
    println!(
        "  costs:       {} one-time + {}/month",
        fmt::currency(input.impl_one_off, currency),
        fmt::currency(input.run_monthly, currency)
    );
    println!(
        "  automation:  {}% / {}% / {}%",
        input.automation_pct.pess, input.automation_pct.real, input.automation_pct.opt
    );
    println!(
        "  confidence:  hours {} | salary {} | automation {}",
        input.confidence.hours.label(),
        input.confidence.salary.label(),
        input.confidence.automation.label()
    );

    println!();
    println!("=== BASELINE ===");
    println!(
        "  hourly rate:  {}{}",
        currency_symbol(currency),
        fmt::number(baseline.hourly_rate, 2)
    );
    println!("  total hours:  {}/week", fmt::hours(baseline.total_hours_week));
    println!("  weekly cost:  {}", fmt::currency(baseline.weekly_cost, currency));
    println!("  annual cost:  {}", fmt::currency(baseline.annual_cost, currency));

    println!();
    println!("=== SCENARIOS ===");
    println!(
        "  {:<24} {:>14} {:>14} {:>14}",
        "",
        ScenarioKey::Pess.label(),
        ScenarioKey::Real.label(),
        ScenarioKey::Opt.label()
    );
    print_scenario_row(scenarios, "time saved", |s| {
        format!("{}/week", fmt::hours(s.time_saved_hours_week))
    });
    print_scenario_row(scenarios, "total savings (annual)", |s| {
        fmt::currency(s.total_savings_annual, currency)
    });
    print_scenario_row(scenarios, "net savings (year 1)", |s| {
        fmt::currency(s.net_savings_annual, currency)
    });
    print_scenario_row(scenarios, "roi (year 1)", |s| fmt::percent(s.roi));
    print_scenario_row(scenarios, "payback", |s| fmt::months(s.payback_months));
    print_scenario_row(scenarios, "fte freed", |s| fmt::fte(s.fte_freed));
    print_scenario_row(scenarios, "npv (3 years)", |s| fmt::currency(s.npv3y, currency));

    println!();
    println!("=== SENSITIVITY (realistic ROI, +/-10%) ===");
    for entry in sensitivity {
        println!(
            "  {:<18} low: {:>8}  high: {:>8}",
            entry.name,
            format!("{:+.1}%", entry.negative * 100.0),
            format!("{:+.1}%", entry.positive * 100.0)
        );
    }

    println!();
    println!("=== EXECUTIVE SUMMARY ===");
    for line in narrative::executive_summary(input, results) {
        println!("  - {line}");
    }

    println!();
    println!("=== RECOMMENDATIONS ===");
    for line in narrative::recommendations(input, results) {
        println!("  - {line}");
    }

    println!();
    println!("=== RISKS ===");
    for entry in narrative::RISK_REGISTER {
        println!("  [{:<6}] {}", entry.severity.label(), entry.risk);
        println!("           mitigation: {}", entry.mitigation);
    }
}

fn print_scenario_row(
    scenarios: &ScenarioTriple<ScenarioProjection>,
    label: &str,
    value: impl Fn(&ScenarioProjection) -> String,
) {
    println!(
        "  {:<24} {:>14} {:>14} {:>14}",
        label,
        value(&scenarios.pess),
        value(&scenarios.real),
        value(&scenarios.opt)
    );
}

fn print_lists() {
    println!("departments:");
    for department in DEPARTMENTS {
        println!("  {department}");
    }
    println!("industries:");
    for industry in INDUSTRIES {
        println!("  {industry}");
    }
    println!("categories:");
    for category in CATEGORIES {
        println!("  {:<14} {}", category.value, category.label);
    }
    println!("currencies:");
    for currency in CURRENCIES {
        println!("  {} {} ({})", currency.code, currency.symbol, currency.name);
    }
}

fn print_usage() {
    println!("roi-runner - automation ROI report generator");
    println!();
    println!("  --input FILE      read the process input record from a JSON file");
    println!("  --decode STRING   decode a share string as the input record");
    println!("  --format KIND     output format: text (default), json or csv");
    println!("  --share           print the share string for the input and exit");
    println!("  --example         print the default input record as JSON and exit");
    println!("  --lists           print the reference tables and exit");
}
