use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use phishing_analyzer::audit::LoggerAudit;
use phishing_analyzer::{persistence, scorer, EmailAnalysis, Message};
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("phishing-analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based phishing risk scoring and reporting for email collections")
        .arg(
            Arg::new("state")
                .short('s')
                .long("state")
                .value_name("FILE")
                .help("State file path")
                .default_value("./data/appState.json"),
        )
        .arg(
            Arg::new("add")
                .long("add")
                .help("Score a new email and append it to the collection")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sender")
                .long("sender")
                .value_name("TEXT")
                .help("Sender id for --add")
                .default_value(""),
        )
        .arg(
            Arg::new("subject")
                .long("subject")
                .value_name("TEXT")
                .help("Subject for --add")
                .default_value(""),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .value_name("TEXT")
                .help("Body for --add")
                .default_value(""),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("TEXT")
                .help("URL for --add")
                .default_value(""),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List every stored email with its report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-flagged")
                .long("list-flagged")
                .help("List flagged emails only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Show the summary report (default action)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Score built-in sample emails without touching the state file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if matches.get_flag("demo") {
        run_demo();
        return;
    }

    let state_path = Path::new(matches.get_one::<String>("state").unwrap());
    let mut analysis = match persistence::load_state(state_path, Box::new(LoggerAudit)) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error loading state: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("add") {
        let mut message = Message::new(
            matches.get_one::<String>("sender").unwrap().clone(),
            matches.get_one::<String>("subject").unwrap().clone(),
            matches.get_one::<String>("body").unwrap().clone(),
            matches.get_one::<String>("url").unwrap().clone(),
        );
        scorer::score(&mut message);
        println!("{}", message.report());
        analysis.insert(message);
        if let Err(e) = persistence::save_state(state_path, &analysis) {
            eprintln!("Error saving state: {e}");
            process::exit(1);
        }
        println!("Saved {} emails to {}", analysis.len(), state_path.display());
        return;
    }

    if matches.get_flag("list") {
        print_messages("📧 All emails", analysis.all().iter());
        return;
    }

    if matches.get_flag("list-flagged") {
        print_messages("🚩 Flagged emails", analysis.flagged().into_iter());
        return;
    }

    print_summary(&analysis);
}

fn print_messages<'a>(heading: &str, messages: impl Iterator<Item = &'a Message>) {
    println!("{heading}");
    println!("═══════════════════════════════════════");
    let mut count = 0;
    for (i, message) in messages.enumerate() {
        println!(
            "  {}. From: {} | Subject: {}",
            i + 1,
            message.sender(),
            message.subject()
        );
        println!("     {}", message.report());
        count = i + 1;
    }
    if count == 0 {
        println!("  (none)");
    }
}

fn print_summary(analysis: &EmailAnalysis) {
    println!("📊 Phishing Analysis Summary");
    println!("═══════════════════════════════════════");
    println!("  Total emails: {}", analysis.len());
    println!("  Most common indicator: {}", analysis.most_common_indicator());
    println!("  {}", analysis.indicator_percentages());
    println!("  {}", analysis.flagged_percentage());
}

fn run_demo() {
    println!("🎭 Demonstration mode: scoring sample emails");
    println!();

    let samples = [
        (
            "it-support@secure-login.example",
            "URGENT: verify now to keep your account",
            "Click the link.",
            "http://sеcure-login.example/reset",
        ),
        (
            "newsletter@store.example",
            "Limited offer inside",
            "This week only, our full catalog is discounted. Browse hundreds of items across \
             every department and save on your next order.",
            "http://store.example/deals",
        ),
        (
            "hr@company.example",
            "Quarterly all-hands agenda",
            "Please find attached the agenda for the quarterly all-hands meeting, including \
             the schedule of speakers and the Q&A session at the end.",
            "http://intranet.company.example/agenda",
        ),
        ("unknown@example", "", "", "http://例え.jp/prize"),
    ];

    let mut analysis = EmailAnalysis::with_audit(Box::new(LoggerAudit));
    for (sender, subject, body, url) in samples {
        let mut message = Message::new(sender, subject, body, url);
        scorer::score(&mut message);
        println!("From: {sender}");
        println!("  {}", message.report());
        analysis.insert(message);
    }

    println!();
    print_summary(&analysis);
}
