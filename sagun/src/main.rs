use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, queue};
use sagun::{
    FailurePolicy, KeywordIndexBuilder, SessionEffect, SessionEvent, SuggestionSession,
};
use sagun_articles::{ArticleClient, ArticleSourceConfig};
use std::io::{Write, stdout};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the article service
    #[arg(long)]
    base_url: Option<String>,

    /// Seed keyword fetched alongside the unfiltered feed (repeatable)
    #[arg(long = "seed")]
    seeds: Vec<String>,

    /// Date filter attached to every dispatch; "today" expands to the
    /// current local date
    #[arg(short, long)]
    date: Option<String>,

    /// Abandon the whole index build when any title source fails
    #[arg(long)]
    all_or_nothing: bool,

    /// Dispatch this keyword once and exit instead of running interactively
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
        return ExitCode::FAILURE;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("Failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };
    rt.block_on(run())
}

fn init_tracing() -> Result<()> {
    // The interactive loop owns the terminal, so logs go to a file.
    let log_file = std::sync::Arc::new(std::fs::File::create("./sagun.log")?);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(log_file)
        .init();
    Ok(())
}

async fn run() -> ExitCode {
    let cli = Cli::parse();

    let date = match cli.date.as_deref() {
        Some("today") => chrono::Local::now().format("%Y-%m-%d").to_string(),
        Some(raw) => raw.to_string(),
        None => String::new(),
    };

    let config = ArticleSourceConfig::new(cli.base_url, Some(cli.seeds));
    let policy = if cli.all_or_nothing {
        FailurePolicy::AllOrNothing
    } else {
        FailurePolicy::BestEffort
    };

    let client = ArticleClient::new();
    let builder = KeywordIndexBuilder::new(policy);
    let index = builder.build_from_sources(&client, &config.source_urls()).await;
    debug!("startup index holds {} keywords", index.len());
    if index.is_empty() {
        eprintln!("no keywords available; autocomplete disabled, search still works");
    }

    let mut session = SuggestionSession::new(index);
    session.set_date(date);

    let result = if let Some(query) = cli.query {
        dispatch_once(&mut session, query)
    } else {
        run_interactive(&mut session)
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sagun: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch_once(session: &mut SuggestionSession, query: String) -> Result<ExitCode> {
    session.apply(SessionEvent::TextChanged(query));
    match session.apply(SessionEvent::Enter) {
        Some(SessionEffect::Dispatch(request)) => {
            println!("{}", request.route_path());
            Ok(ExitCode::SUCCESS)
        }
        Some(SessionEffect::Reject(err)) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn run_interactive(session: &mut SuggestionSession) -> Result<ExitCode> {
    terminal::enable_raw_mode()?;
    let result = event_loop(session);
    terminal::disable_raw_mode()?;

    match result? {
        Some(request) => {
            println!("{}", request.route_path());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Translate key presses into session events until a dispatch or Ctrl+C.
fn event_loop(session: &mut SuggestionSession) -> Result<Option<sagun::SearchRequest>> {
    let mut notice: Option<String> = None;
    render(session, notice.as_deref())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        notice = None;
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(None),
            (KeyCode::Char(c), _) => {
                let mut text = session.input().to_string();
                text.push(c);
                session.apply(SessionEvent::TextChanged(text));
            }
            (KeyCode::Backspace, _) => {
                let mut text = session.input().to_string();
                text.pop();
                session.apply(SessionEvent::TextChanged(text));
            }
            (KeyCode::Down, _) => {
                session.apply(SessionEvent::ArrowDown);
            }
            (KeyCode::Up, _) => {
                session.apply(SessionEvent::ArrowUp);
            }
            (KeyCode::Esc, _) => {
                session.apply(SessionEvent::Escape);
            }
            (KeyCode::Enter, _) => match session.apply(SessionEvent::Enter) {
                Some(SessionEffect::Dispatch(request)) => return Ok(Some(request)),
                Some(SessionEffect::Reject(err)) => {
                    notice = Some(format!("{err} - 검색어를 입력해주세요"));
                }
                None => {}
            },
            _ => {}
        }

        render(session, notice.as_deref())?;
    }
}

/// Redraw the prompt line and the suggestion list, highlighted entry marked.
fn render(session: &SuggestionSession, notice: Option<&str>) -> Result<()> {
    let mut stdout = stdout();
    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(stdout, Print(format!("검색어: {}\r\n", session.input())))?;

    for (i, suggestion) in session.suggestions().iter().enumerate() {
        if session.highlight_index() == Some(i) {
            queue!(
                stdout,
                SetForegroundColor(Color::Cyan),
                Print(format!("> {suggestion}\r\n")),
                ResetColor
            )?;
        } else {
            queue!(stdout, Print(format!("  {suggestion}\r\n")))?;
        }
    }

    if let Some(notice) = notice {
        queue!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(format!("{notice}\r\n")),
            ResetColor
        )?;
    }

    stdout.flush()?;
    Ok(())
}
