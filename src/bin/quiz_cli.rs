use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use quizcraft::clients::{GeminiClient, GenerativeClient, MockClient};
use quizcraft::generator::QuizGenerator;
use quizcraft::interceptors::FileInterceptor;
use quizcraft::session::{Direction, QuizService};
use quizcraft::topic::Topic;

/// Terminal front end for the quiz core.
#[derive(Parser, Debug)]
#[command(name = "quiz-cli", about = "Run an AI-generated quiz in the terminal")]
struct Args {
    /// Topic slug (wellness, tech-trends, space, history, science, pop-culture)
    #[arg(long)]
    topic: Option<String>,

    /// Use scripted responses instead of the Gemini API
    #[arg(long)]
    mock: bool,

    /// Record AI exchanges to this JSONL file
    #[arg(long)]
    record: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let topic = match &args.topic {
        Some(slug) => slug.parse::<Topic>().map_err(anyhow::Error::msg)?,
        None => choose_topic()?,
    };

    let client: Box<dyn GenerativeClient> = if args.mock {
        let (client, _handle) = MockClient::new();
        Box::new(client)
    } else {
        Box::new(GeminiClient::from_env())
    };

    let mut generator = QuizGenerator::new(client);
    if let Some(path) = args.record {
        generator = generator.with_interceptor(Arc::new(FileInterceptor::new(path)));
    }

    let service = QuizService::new(generator);
    let id = service.start(topic);

    println!("Generating questions about {topic}...");
    service.load_questions(id).await?;

    let view = service.snapshot(id)?;
    let Some(questions) = view.questions else {
        anyhow::bail!("session has no questions after loading");
    };

    for (i, question) in questions.questions().iter().enumerate() {
        println!("\n{}. {}", i + 1, question.prompt());
        for (j, option) in question.options().iter().enumerate() {
            println!("   {}) {}", (b'a' + j as u8) as char, option);
        }
        if let Some(choice) = read_choice()? {
            service.select_answer(id, i, choice)?;
        }
        service.navigate(id, Direction::Next)?;
    }

    let outcome = service.finish(id).await?;
    println!("\nScore: {}/{}", outcome.score.correct, outcome.score.total);
    for (i, hit) in outcome.score.flags.iter().enumerate() {
        println!("  {}. {}", i + 1, if *hit { "correct" } else { "incorrect" });
    }
    println!("\n{}", outcome.feedback);

    service.remove(id);
    Ok(())
}

fn choose_topic() -> Result<Topic> {
    println!("Choose a topic:");
    for (i, topic) in Topic::ALL.iter().enumerate() {
        println!("{}. {} - {}", i + 1, topic.display_name(), topic.blurb());
    }
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let choice: usize = input.trim().parse()?;
    Topic::ALL
        .get(choice.wrapping_sub(1))
        .copied()
        .ok_or_else(|| anyhow::anyhow!("no topic number {choice}"))
}

fn read_choice() -> Result<Option<usize>> {
    print!("answer (a-d, enter to skip): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.as_bytes()[0] {
        c @ b'a'..=b'd' => Ok(Some((c - b'a') as usize)),
        c @ b'1'..=b'4' => Ok(Some((c - b'1') as usize)),
        _ => Ok(None),
    }
}
