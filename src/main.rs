use anyhow::Result;
use clap::{Arg, Command};
use tracing::{info, warn};

use py_tutor_rust::config::Config;
use py_tutor_rust::{
    ChatClient, TutorError, TutorialSelector, VideoSearchClient, VideoStatsClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("py_tutor_rust=info,warn")
        .init();

    let matches = Command::new("Python Tutor (Rust)")
        .version("0.1.0")
        .about("Answers Python questions and finds top-rated YouTube tutorials")
        .arg(
            Arg::new("question")
                .value_name("QUESTION")
                .help("The Python question to ask")
                .required(false),
        )
        .arg(
            Arg::new("tutorials")
                .short('t')
                .long("tutorials")
                .help("Find tutorials for the concepts in the question instead of asking the chat model")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .value_name("N")
                .help("Tutorials to keep per concept"),
        )
        .get_matches();

    let question = matches
        .get_one::<String>("question")
        .map(|q| q.trim().to_string())
        .unwrap_or_default();
    let find_tutorials = matches.get_flag("tutorials");

    if question.is_empty() {
        if find_tutorials {
            println!("Please enter a question to find a tutorial.");
        } else {
            println!("Please enter a question.");
        }
        return Ok(());
    }

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::from_env()
    });

    if let Some(top) = matches.get_one::<String>("top") {
        config.ranking.top_n = top.parse()?;
    }

    config.validate()?;

    if find_tutorials {
        run_tutorial_search(&config, &question).await
    } else {
        run_chat(&config, &question).await
    }
}

async fn run_chat(config: &Config, question: &str) -> Result<()> {
    let chat = ChatClient::new(config.chat.clone())?;

    info!("💬 Asking: {}", question);
    let answer = chat.ask(question).await?;

    println!("Bot Response:");
    println!("{}", answer);

    Ok(())
}

async fn run_tutorial_search(config: &Config, question: &str) -> Result<()> {
    let search = VideoSearchClient::new(config.search.clone())?;
    let stats = VideoStatsClient::new(config.search.clone())?;
    let selector = TutorialSelector::new(Box::new(search), Box::new(stats), config.ranking.clone());

    match selector.find_top_rated(question).await {
        Ok(results) => {
            for entry in results.iter() {
                println!("Tutorials for '{}':", entry.concept);
                if entry.tutorials.is_empty() {
                    println!("  (no qualifying tutorial found)");
                    continue;
                }
                for tutorial in &entry.tutorials {
                    println!("  🎥 {}", tutorial.title);
                    println!("     Channel: {}", tutorial.channel_name);
                    println!(
                        "     Uploaded on: {}",
                        tutorial.date_uploaded.format("%Y-%m-%d")
                    );
                    println!("     Rating: {:.1}/10", tutorial.rating);
                    println!("     Watch: {}", tutorial.url);
                }
            }
            Ok(())
        }
        Err(TutorError::EmptyQuery) => {
            println!("Please enter a question to find a tutorial.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
