use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use saju_analysis::{PunishmentKind, Relation, SinsalMatch};
use saju_chrono::ChronoAdapter;
use saju_pillars::{ChartOptions, ChartPreset};
use saju_rs::{chart, relations, sinsals, solar_terms, strength, ten_gods, yongshen};
use saju_time::CalendarAdapter;

#[derive(Parser)]
#[command(name = "saju", about = "Saju Four Pillars CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the Four Pillars chart for a birth instant
    Pillars {
        /// Birth instant, RFC 3339 (e.g. 2000-01-01T18:00:00+09:00)
        #[arg(long)]
        date: String,
        /// Birth longitude in degrees east
        #[arg(long)]
        lon: f64,
        /// Override UTC offset in hours (defaults to the date's own)
        #[arg(long)]
        tz: Option<f64>,
        /// Preset: standard or traditional
        #[arg(long, default_value = "standard")]
        preset: String,
    },
    /// Ten god classification for four pillar labels
    TenGods {
        year: String,
        month: String,
        day: String,
        hour: String,
    },
    /// Day-master strength score and band
    Strength {
        year: String,
        month: String,
        day: String,
        hour: String,
    },
    /// Yongshen (useful element) selection
    Yongshen {
        year: String,
        month: String,
        day: String,
        hour: String,
    },
    /// Stem/branch relations
    Relations {
        year: String,
        month: String,
        day: String,
        hour: String,
    },
    /// Sinsal markers
    Sinsal {
        year: String,
        month: String,
        day: String,
        hour: String,
    },
    /// Solar terms around an instant
    Terms {
        /// Query instant, RFC 3339
        #[arg(long)]
        date: String,
    },
}

fn parse_instant(adapter: &ChronoAdapter, s: &str) -> <ChronoAdapter as CalendarAdapter>::Instant {
    match adapter.parse(s) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Invalid date '{s}': {e}");
            eprintln!("Expected RFC 3339, e.g. 2000-01-01T18:00:00+09:00");
            std::process::exit(1);
        }
    }
}

fn parse_preset(s: &str) -> ChartPreset {
    match s.parse::<ChartPreset>() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Valid presets: standard, traditional");
            std::process::exit(1);
        }
    }
}

fn labels<'a>(year: &'a str, month: &'a str, day: &'a str, hour: &'a str) -> [&'a str; 4] {
    [year, month, day, hour]
}

fn describe_relation(r: &Relation) -> String {
    match r {
        Relation::StemCombination {
            a, b, result, status, reason, ..
        } => format!(
            "stem combination {}{} -> {} ({status:?}: {reason})",
            a.1.hanja(),
            b.1.hanja(),
            result.hanja()
        ),
        Relation::SixCombination {
            a, b, result, status, reason, ..
        } => format!(
            "six combination {}{} -> {} ({status:?}: {reason})",
            a.1.hanja(),
            b.1.hanja(),
            result.hanja()
        ),
        Relation::TripleCombination {
            members, result, is_complete, status, ..
        } => format!(
            "triple combination [{}] -> {} (complete: {is_complete}, {status:?})",
            member_list(members),
            result.hanja()
        ),
        Relation::DirectionalCombination {
            members, result, is_complete, status, ..
        } => format!(
            "directional combination [{}] -> {} (complete: {is_complete}, {status:?})",
            member_list(members),
            result.hanja()
        ),
        Relation::Clash { a, b } => format!("clash {}{}", a.1.hanja(), b.1.hanja()),
        Relation::Harm { a, b } => format!("harm {}{}", a.1.hanja(), b.1.hanja()),
        Relation::Destruction { a, b } => {
            format!("destruction {}{}", a.1.hanja(), b.1.hanja())
        }
        Relation::Punishment { kind, members } => {
            let kind = match kind {
                PunishmentKind::Triple => "triple",
                PunishmentKind::Pair => "pair",
                PunishmentKind::SelfPunish => "self",
            };
            format!("punishment ({kind}) [{}]", member_list(members))
        }
    }
}

fn member_list(members: &[(saju_analysis::PillarPosition, saju_pillars::Branch)]) -> String {
    members
        .iter()
        .map(|(p, b)| format!("{}:{}", p.name(), b.hanja()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_sinsal(m: &SinsalMatch) {
    println!(
        "{:<14} {:<6} at {} ({})",
        m.sinsal.name(),
        m.sinsal.hangul(),
        m.position.name(),
        m.branch.hanja()
    );
}

fn exit_on<E: std::fmt::Display>(e: E) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let adapter = ChronoAdapter::new();

    match cli.command {
        Commands::Pillars {
            date,
            lon,
            tz,
            preset,
        } => {
            let instant = parse_instant(&adapter, &date);
            let options = ChartOptions {
                longitude_deg: lon,
                tz_offset_hours: tz,
                preset: parse_preset(&preset),
            };
            let built = chart(&adapter, &instant, &options).unwrap_or_else(|e| exit_on(e));
            debug!(?built, "chart composed");
            println!("Year:  {}", built.year);
            println!("Month: {}", built.month);
            println!("Day:   {}", built.day);
            println!("Hour:  {}", built.hour);
            println!("Solar year: {}", built.solar_year);
            println!("Sun longitude: {:.4} deg", built.sun_longitude_deg);
            let (y, m, d) = built.effective_day;
            println!("Effective day: {y:04}-{m:02}-{d:02} ({})", built.preset.name());
        }
        Commands::TenGods {
            year, month, day, hour,
        } => {
            let result =
                ten_gods(labels(&year, &month, &day, &hour)).unwrap_or_else(|e| exit_on(e));
            println!("Day master: {}", result.day_master.hanja());
            for entry in result.entries {
                println!(
                    "{:<6} stem {} ({}), branch {} ({})",
                    entry.position.name(),
                    entry.stem_god.hangul(),
                    entry.stem_god.name(),
                    entry.branch_god.hangul(),
                    entry.branch_god.name()
                );
            }
        }
        Commands::Strength {
            year, month, day, hour,
        } => {
            let result =
                strength(labels(&year, &month, &day, &hour)).unwrap_or_else(|e| exit_on(e));
            println!("Day master: {}", result.day_master.hanja());
            println!("Score: {:.1}", result.score);
            println!("Band: {} ({:?})", result.level.hangul(), result.level);
            let f = result.factors;
            println!("Deukryeong: {:.2}", f.deukryeong);
            println!("Tonggeun: {:.2}", f.tonggeun);
            println!("Transparency: {:.2}", f.transparency);
            println!(
                "Helpers: {} stems, {} total; weakeners: {}",
                f.helper_stem_count, f.help_count, f.weaken_count
            );
            println!("Deukji: {:.2}  Deukse: {}", f.deukji, f.deukse);
        }
        Commands::Yongshen {
            year, month, day, hour,
        } => {
            let result =
                yongshen(labels(&year, &month, &day, &hour)).unwrap_or_else(|e| exit_on(e));
            println!("Method: {:?}", result.method);
            println!(
                "Primary: {}  Secondary: {}",
                result.primary.hanja(),
                result.secondary.hanja()
            );
            if let Some(alt) = result.alternative_balance {
                println!(
                    "Balance alternative: {} / {}",
                    alt.primary.hanja(),
                    alt.secondary.hanja()
                );
            }
            if let Some(johu) = result.johu_adjustment {
                println!(
                    "Johu hint: {} / {}",
                    johu.primary.hanja(),
                    johu.secondary.hanja()
                );
            }
        }
        Commands::Relations {
            year, month, day, hour,
        } => {
            let result =
                relations(labels(&year, &month, &day, &hour)).unwrap_or_else(|e| exit_on(e));
            if result.is_empty() {
                println!("No relations found");
            }
            for r in &result {
                println!("{}", describe_relation(r));
            }
        }
        Commands::Sinsal {
            year, month, day, hour,
        } => {
            let result =
                sinsals(labels(&year, &month, &day, &hour)).unwrap_or_else(|e| exit_on(e));
            if result.is_empty() {
                println!("No sinsal found");
            }
            for m in &result {
                print_sinsal(m);
            }
        }
        Commands::Terms { date } => {
            let instant = parse_instant(&adapter, &date);
            let info = solar_terms(&adapter, &instant).unwrap_or_else(|e| exit_on(e));
            println!("Sun longitude: {:.4} deg", info.sun_longitude_deg);
            println!(
                "Current: {} {} since {} ({} days ago)",
                info.current.term.name(),
                info.current.term.hanja(),
                adapter.to_iso(&info.current.local),
                info.days_since_current
            );
            println!(
                "Next: {} {} at {} (in {} days)",
                info.next.term.name(),
                info.next.term.hanja(),
                adapter.to_iso(&info.next.local),
                info.days_until_next
            );
            println!(
                "Previous jie: {} {} at {} ({} days ago)",
                info.prev_jie.term.name(),
                info.prev_jie.term.hanja(),
                adapter.to_iso(&info.prev_jie.local),
                info.days_since_prev_jie
            );
            println!(
                "Next jie: {} {} at {} (in {} days)",
                info.next_jie.term.name(),
                info.next_jie.term.hanja(),
                adapter.to_iso(&info.next_jie.local),
                info.days_until_next_jie
            );
        }
    }
}
