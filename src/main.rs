use chrono::Local;
use clap::Parser;
use mindcare::application::{
    history, init, journal, log_mood, manage_config::ConfigService, purge, ChatService, MoodInput,
};
use mindcare::cli::{output, Cli, Commands, JournalCommand, MoodCommand};
use mindcare::domain::{journal_prompt_for, load_template};
use mindcare::error::MindcareError;
use mindcare::infrastructure::mood_store::STATS_WINDOW_DAYS;
use mindcare::infrastructure::{
    FileSystemRepository, SimulatedVoice, SupportiveResponder, VoiceOutput, WorkspaceRepository,
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so command output on stdout stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_env("MINDCARE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), MindcareError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("language = {}", config.language);
                println!("therapy_approach = {}", config.therapy_approach);
                println!("auto_delete = {}", config.auto_delete);
                println!("retention_days = {}", config.retention_days);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: mindcare config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: language, therapy_approach, auto_delete, retention_days, created"
                );
                Ok(())
            }
        }
        Commands::Chat {
            message,
            emotion,
            voice,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let template = load_template(repo.root())?;
            let language = config.get_language();

            let mut store = repo.open_sessions();
            if config.auto_delete {
                store.purge_older_than(config.retention_days);
            }

            let responder = SupportiveResponder::new(config.therapy_approach, template);
            let mut chat = ChatService::new(store, responder, language.clone());
            let turn = chat.send(&message, emotion)?;

            println!("{}", turn.reply);
            if voice {
                println!("{}", SimulatedVoice.speak(&turn.reply, &language));
            }
            Ok(())
        }
        Commands::Mood(command) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = repo.open_mood();

            match command {
                MoodCommand::Log {
                    mood,
                    energy,
                    anxiety,
                    triggers,
                    notes,
                } => {
                    let entry = log_mood::log_mood(
                        &mut store,
                        MoodInput {
                            mood,
                            energy,
                            anxiety,
                            triggers,
                            notes,
                        },
                    )?;
                    println!(
                        "Logged '{}' (energy {}, anxiety {})",
                        entry.mood,
                        entry.energy.value(),
                        entry.anxiety.value()
                    );
                }
                MoodCommand::History { days } => {
                    println!("{}", output::format_mood_history(&store.history(days)).trim_end());
                }
                MoodCommand::Stats => {
                    let triggers = store.trigger_counts(STATS_WINDOW_DAYS);
                    println!("{}", output::format_mood_stats(&store.stats(), &triggers).trim_end());
                }
            }
            Ok(())
        }
        Commands::Journal(command) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = repo.open_journal();

            match command {
                JournalCommand::Write { text } => {
                    let entry = journal::write_entry(&mut store, &text)?;
                    println!("Saved entry #{} ({} words)", entry.id, entry.word_count);
                }
                JournalCommand::Recent { limit } => {
                    println!("{}", output::format_journal_list(&store.recent(limit)).trim_end());
                }
                JournalCommand::Search { keyword } => {
                    println!("{}", output::format_journal_list(&store.search(&keyword)).trim_end());
                }
                JournalCommand::Show { id } => {
                    let entry = journal::show_entry(&store, id)?;
                    println!("{}", output::format_journal_entry(&entry).trim_end());
                }
                JournalCommand::Prompt => {
                    println!("{}", journal_prompt_for(Local::now().date_naive()));
                }
            }
            Ok(())
        }
        Commands::Sessions { latest } => {
            let repo = FileSystemRepository::discover()?;

            if latest {
                match history::latest_session(&repo) {
                    Some(session) => println!(
                        "{}",
                        output::format_session_detail(&session).trim_end()
                    ),
                    None => println!("No sessions found"),
                }
            } else {
                println!("{}", output::format_sessions(&history::list_sessions(&repo)).trim_end());
            }
            Ok(())
        }
        Commands::Purge { days } => {
            let repo = FileSystemRepository::discover()?;
            let days = match days {
                Some(days) => days,
                None => repo.load_config()?.retention_days,
            };

            let summary = purge::purge(&repo, days);
            println!("{}", output::format_purge_summary(&summary).trim_end());
            Ok(())
        }
    }
}
