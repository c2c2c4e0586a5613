use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use unsei_rs::{
    AnalysisOptions, Analyzer, AnalyzerConfig, BirthMoment, Category, Chart, CivilDate, Element,
    FiveElementScore, GuardianResult, KinReading, KinVariant, Reading, kin_reading, tone_name,
};

#[derive(Parser)]
#[command(name = "unsei", about = "Four-pillar and Tzolkin birth readings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and element balance for a birth moment
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (HH:MM), midday when omitted
        #[arg(long)]
        time: Option<String>,
        /// Knowledge tables (TOML) replacing the builtin ones
        #[arg(long)]
        knowledge: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tzolkin Kin, seal, tone and wavespell for a date
    Kin {
        /// Date (YYYY-MM-DD)
        date: String,
        /// naive (default), dreamspell or classical
        #[arg(long, default_value = "naive")]
        variant: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Full reading with composite scores
    Analyze {
        /// Birth date (YYYY-MM-DD)
        date: String,
        /// Birth time (HH:MM), midday when omitted
        #[arg(long)]
        time: Option<String>,
        /// Kin variant; the config default when omitted
        #[arg(long)]
        variant: Option<String>,
        /// Analyzer config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Knowledge tables (TOML), overriding the config
        #[arg(long)]
        knowledge: Option<PathBuf>,
        /// Categories to report (overall, work, love, health, growth); repeatable
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Four-pillar weight of the overall score
        #[arg(long, requires = "maya")]
        suanming: Option<f64>,
        /// Tzolkin weight of the overall score
        #[arg(long, requires = "suanming")]
        maya: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_moment(date: &str, time: Option<&str>) -> BirthMoment {
    BirthMoment::parse(date, time).unwrap_or_else(|e| {
        eprintln!("Invalid birth moment: {e}");
        std::process::exit(1);
    })
}

fn parse_variant(s: &str) -> KinVariant {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid variant: {e}");
        std::process::exit(1);
    })
}

fn parse_category(s: &str) -> Category {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid category: {e}");
        eprintln!("Valid: overall, work, love, health, growth");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> AnalyzerConfig {
    match path {
        Some(p) => AnalyzerConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", p.display());
            std::process::exit(1);
        }),
        None => AnalyzerConfig::default(),
    }
}

fn build_analyzer(config: AnalyzerConfig) -> Analyzer {
    Analyzer::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to initialize analyzer: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_kin(r: &KinReading) {
    println!("{} ({})", r.kin, r.variant.label());
    println!("  Seal:      {} ({})", r.seal.name(), r.seal.japanese_name());
    println!(
        "  Tone:      {} ({})",
        r.tone,
        tone_name(r.tone).unwrap_or("?")
    );
    println!("  Wavespell: {}", r.wavespell.name());
}

fn print_reading(reading: &Reading, with_scores: bool) {
    let chart = &reading.chart;
    println!("Birth: {}", reading.moment);
    println!(
        "Pillars: year {}  month {}  day {}  hour {}",
        chart.year, chart.month, chart.day, chart.hour
    );
    let balance: Vec<String> = reading
        .elements
        .iter()
        .map(|(e, v)| format!("{}:{v}", e.symbol()))
        .collect();
    println!("Elements: {}", balance.join(" "));

    let symbols = |list: &[Element]| -> String {
        list.iter().map(|e| e.symbol()).collect::<Vec<_>>().join("")
    };
    println!("Guardian: {}", symbols(&reading.guardians.guardian));
    println!("Taboo:    {}", symbols(&reading.guardians.taboo));

    if with_scores {
        print_kin(&reading.kin);
        println!("Scores:");
        for (category, score) in &reading.scores {
            println!("  {:<8} {score:.2}", category.name());
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            knowledge,
            json,
        } => {
            let moment = parse_moment(&date, time.as_deref());
            let config = AnalyzerConfig {
                knowledge,
                ..AnalyzerConfig::default()
            };
            let reading = build_analyzer(config).analyze(&moment);
            if json {
                #[derive(Serialize)]
                struct ChartOutput<'a> {
                    moment: String,
                    chart: &'a Chart,
                    elements: &'a FiveElementScore,
                    guardians: &'a GuardianResult,
                }
                print_json(&ChartOutput {
                    moment: reading.moment.to_string(),
                    chart: &reading.chart,
                    elements: &reading.elements,
                    guardians: &reading.guardians,
                });
            } else {
                print_reading(&reading, false);
            }
        }

        Commands::Kin {
            date,
            variant,
            json,
        } => {
            let date: CivilDate = date.parse().unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            let reading = kin_reading(date, parse_variant(&variant));
            if json {
                print_json(&reading);
            } else {
                print_kin(&reading);
            }
        }

        Commands::Analyze {
            date,
            time,
            variant,
            config,
            knowledge,
            categories,
            suanming,
            maya,
            json,
        } => {
            let moment = parse_moment(&date, time.as_deref());
            let mut config = load_config(config.as_ref());
            if let Some(path) = knowledge {
                config = config.with_knowledge(path);
            }
            let analyzer = build_analyzer(config);
            let options = AnalysisOptions {
                variant: variant.as_deref().map(parse_variant),
                blend: suanming.zip(maya),
                categories: categories.iter().map(String::as_str).map(parse_category).collect(),
            };
            let reading = analyzer.analyze_with(&moment, &options).unwrap_or_else(|e| {
                eprintln!("Analysis failed: {e}");
                std::process::exit(1);
            });
            if json {
                print_json(&reading);
            } else {
                print_reading(&reading, true);
            }
        }
    }
}
