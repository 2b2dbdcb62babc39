//! Newsdesk CLI - ask the news-summary proxy from the terminal

mod api;
mod brief;
mod config;
mod news;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::fs;

use api::NewsdeskClient;
use config::Config;
use news::{Article, NewsFeed};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Newsdesk CLI - Korean news summaries via the Gemini proxy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt through the proxy
    Ask {
        /// Prompt text (or use -f for file; prompts interactively if neither)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
        /// Extra system instruction (overrides the configured default)
        #[arg(short, long)]
        extra: Option<String>,
    },

    /// Extractive brief of article text, computed locally
    Brief {
        /// Article text (or use -f for file)
        text: Option<String>,
        /// Read article from file
        #[arg(short, long)]
        file: Option<String>,
        /// Number of sentences to keep
        #[arg(short = 'n', long, default_value_t = brief::DEFAULT_SENTENCES)]
        sentences: usize,
    },

    /// Search Google News and brief each article locally
    News {
        /// Search keyword (starts an interactive session if omitted)
        query: Option<String>,
        /// Number of articles to show
        #[arg(short, long, default_value_t = news::DEFAULT_MAX_RESULTS)]
        max: usize,
    },

    /// Check that the proxy is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the proxy base URL
    SetUrl {
        /// e.g. https://newsdesk.shuttle.app
        url: String,
    },
    /// Set the default extra system instruction
    SetExtra {
        /// Instruction appended after the base persona
        text: String,
    },
    /// Remove the default extra system instruction
    ClearExtra,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { prompt, file, extra } => cmd_ask(prompt, file, extra).await,
        Commands::Brief { text, file, sentences } => cmd_brief(text, file, sentences),
        Commands::News { query, max } => cmd_news(query, max).await,
        Commands::Health => cmd_health().await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

/// Content from an argument, a file, or an interactive prompt
fn read_content(content: Option<String>, file: Option<String>, label: &str) -> Result<String> {
    match (content, file) {
        (Some(c), None) => Ok(c),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => bail!("Cannot specify both {} and --file", label),
        (None, None) => Input::new()
            .with_prompt(label)
            .interact_text()
            .context("Failed to read input"),
    }
}

async fn cmd_ask(prompt: Option<String>, file: Option<String>, extra: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let prompt = read_content(prompt, file, "Prompt")?;
    let extra = config.resolve_extra(extra);

    let client = NewsdeskClient::new(&config.base_url);
    let text = client.ask(&prompt, extra.as_deref()).await?;

    if text.is_empty() {
        println!("{}", "(empty response)".dimmed());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_brief(text: Option<String>, file: Option<String>, sentences: usize) -> Result<()> {
    if sentences == 0 {
        bail!("--sentences must be at least 1");
    }

    let article = read_content(text, file, "Article")?;
    let summary = brief::summarize(&article, sentences);

    if summary.is_empty() {
        println!("{}", "Nothing to summarize.".yellow());
    } else {
        println!("{} {}", "요약:".cyan().bold(), summary);
    }

    Ok(())
}

const EXIT_WORDS: [&str; 4] = ["exit", "quit", "종료", "끝"];

async fn cmd_news(query: Option<String>, max: usize) -> Result<()> {
    let feed = NewsFeed::new();

    if let Some(query) = query {
        let articles = feed.fetch(&query, max).await;
        show_articles(&articles);
        return Ok(());
    }

    println!("{}", "뉴스 요약 챗봇입니다.".bold());
    println!("키워드를 입력하면 관련된 최신 뉴스 {}개를 구글 뉴스에서 찾아 요약해 드려요.", max);
    println!("종료하려면 'exit', 'quit', '종료' 중 하나를 입력하세요.\n");

    loop {
        let query: String = Input::new()
            .with_prompt("검색할 키워드를 입력하세요")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        let query = query.trim();

        if query.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&query.to_lowercase().as_str()) {
            println!("챗봇을 종료합니다. 이용해 주셔서 감사합니다.");
            break;
        }

        println!("\n'{}' 관련 뉴스를 검색 중입니다. 잠시만 기다려 주세요...\n", query);
        let articles = feed.fetch(query, max).await;
        show_articles(&articles);
        println!("\n{}\n", "-".repeat(80));
    }

    Ok(())
}

fn show_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!(
            "{}",
            "관련 뉴스를 찾지 못했어요. 키워드를 바꿔서 다시 시도해 주세요.".yellow()
        );
        return;
    }

    println!();
    println!("{}", "=".repeat(80));
    println!("총 {}개의 뉴스를 찾았어요.", articles.len());
    println!("{}", "=".repeat(80));

    for (idx, article) in articles.iter().enumerate() {
        println!("\n[{}] {}", idx + 1, article.title.bold());
        if !article.published.is_empty() {
            println!("    - 날짜: {}", article.published);
        }
        println!("    - 링크: {}", article.link.cyan());

        let summary = brief::summarize(article.brief_source(), brief::DEFAULT_SENTENCES);
        println!("    - 요약: {}", summary);
    }
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = NewsdeskClient::new(&config.base_url);

    print!("Checking {} ... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Newsdesk API at {}", config.base_url);
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Base URL:    {}", config.base_url.cyan());
            match &config.extra_system_text {
                Some(extra) => println!("  Extra:       {}", extra),
                None => println!("  Extra:       {}", "(none)".dimmed()),
            }
        }

        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }

        ConfigAction::SetExtra { text } => {
            config.set_extra_system_text(Some(text));
            config.save()?;
            println!("{} Default extra instruction saved", "✓".green());
        }

        ConfigAction::ClearExtra => {
            config.set_extra_system_text(None);
            config.save()?;
            println!("{} Default extra instruction cleared", "✓".green());
        }
    }

    Ok(())
}
