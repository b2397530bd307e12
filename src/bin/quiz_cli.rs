use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use quiz_submit_server::client::{QuizApiClient, QuizWizard, WizardStep};

/// Terminal front end for the quiz.
#[derive(Parser)]
#[command(name = "quiz-cli", version, about)]
struct Cli {
    /// Base URL of the quiz server
    #[arg(long, env = "QUIZ_SERVER_URL", default_value = "http://localhost:8080")]
    server_url: String,
}

struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    async fn prompt(&mut self, label: &str) -> Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(label.as_bytes()).await?;
        stdout.flush().await?;

        let line = self
            .lines
            .next_line()
            .await?
            .context("input closed before the quiz was finished")?;
        Ok(line.trim().to_string())
    }
}

async fn collect_contact(wizard: &mut QuizWizard, terminal: &mut Terminal) -> Result<()> {
    println!("Enter your details");
    loop {
        let name = terminal.prompt("Name: ").await?;
        let email = terminal.prompt("Email: ").await?;
        wizard.set_name(&name)?;
        wizard.set_email(&email)?;

        match wizard.start() {
            Ok(()) => return Ok(()),
            Err(err) => println!("{}", err),
        }
    }
}

async fn answer_question(wizard: &mut QuizWizard, terminal: &mut Terminal) -> Result<()> {
    let Some((number, question)) = wizard.current_question() else {
        return Ok(());
    };
    let total = wizard.question_count();
    let chosen = wizard.answers()[number - 1];

    println!();
    println!("Question {}/{}", number, total);
    println!("{}", question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let marker = if chosen == Some(i) { "*" } else { " " };
        println!(" {} {}) {}", marker, i + 1, option);
    }

    let input = terminal
        .prompt("Choose an option (b = back, Enter = keep current): ")
        .await?;

    let result = match input.as_str() {
        "b" => wizard.back(),
        "" => wizard.next(),
        digits => match digits.parse::<usize>() {
            Ok(choice) if choice > 0 => wizard.choose(choice - 1).and_then(|_| wizard.next()),
            _ => {
                println!("Unrecognised input: {}", digits);
                return Ok(());
            }
        },
    };

    if let Err(err) = result {
        println!("{}", err);
    }
    Ok(())
}

fn print_review(wizard: &QuizWizard) {
    println!();
    println!("Review");
    println!("Name: {}", wizard.name());
    println!("Email: {}", wizard.email());
    println!("Your answers:");
    for (i, (question, answer)) in wizard
        .questions()
        .iter()
        .zip(wizard.answers().iter())
        .enumerate()
    {
        let text = answer
            .and_then(|index| question.option_text(index))
            .unwrap_or("No answer");
        println!("{}. {} - {}", i + 1, question.prompt, text);
    }
}

async fn review(
    wizard: &mut QuizWizard,
    terminal: &mut Terminal,
    api: &QuizApiClient,
) -> Result<()> {
    print_review(wizard);
    if let Some(error) = wizard.last_error() {
        println!("Error: {}", error);
    }

    match terminal.prompt("s = submit, e = edit: ").await?.as_str() {
        "e" => wizard.edit()?,
        "s" => {
            let request = wizard.begin_submit()?;
            println!("Submitting...");
            let outcome = api.submit(&request).await.map_err(|err| err.to_string());
            wizard.complete_submit(outcome)?;
        }
        other => println!("Unrecognised input: {}", other),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let api = QuizApiClient::new(&cli.server_url);

    let questions = api
        .fetch_questions()
        .await
        .with_context(|| format!("could not load questions from {}", cli.server_url))?;
    log::info!("Loaded {} questions", questions.len());

    let mut wizard = QuizWizard::new(questions);
    let mut terminal = Terminal {
        lines: BufReader::new(io::stdin()).lines(),
    };

    loop {
        match wizard.step().clone() {
            WizardStep::ContactEntry => collect_contact(&mut wizard, &mut terminal).await?,
            WizardStep::Question(_) => answer_question(&mut wizard, &mut terminal).await?,
            WizardStep::Review => review(&mut wizard, &mut terminal, &api).await?,
            WizardStep::Submitted {
                score,
                recommendation,
            } => {
                println!();
                println!(
                    "Thanks, {}, your score: {}/{}",
                    wizard.name(),
                    score,
                    wizard.question_count()
                );
                println!("Recommendation: {}", recommendation);
                return Ok(());
            }
        }
    }
}
