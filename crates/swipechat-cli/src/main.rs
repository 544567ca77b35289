//! SwipeChat CLI
//!
//! Terminal front-end over swipechat-core. The desktop app swipes; here you
//! type commands instead.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session: plain lines are sent
//! swipechat chat
//!
//! # Same, but deletes go through without asking
//! swipechat chat --yes
//!
//! # Apply an event script and print the resulting screen
//! swipechat replay session.chat
//!
//! # Read the script from stdin, print the state as JSON
//! cat session.chat | swipechat replay - --json
//! ```
//!
//! ## Script format
//!
//! One event per line, `#` starts a comment:
//!
//! ```text
//! send hello
//! reply 1
//! send hi back
//! edit 2
//! draft hi again
//! submit
//! delete 1
//! confirm yes
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swipechat_core::{
    parse_script, render, ChatEvent, ChatState, EventOutcome, SendOutcome, DELETE_PROMPT,
};
use tokio::io::{AsyncBufReadExt, AsyncReadExt};

/// SwipeChat - chat composer in the terminal
#[derive(Parser)]
#[command(name = "swipechat")]
#[command(version = "0.1.0")]
#[command(about = "SwipeChat - chat composer in the terminal")]
#[command(
    long_about = "Send, reply to, edit and delete messages from a terminal session, or replay a scripted session and inspect the resulting screen."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session on stdin
    Chat {
        /// Delete messages without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Apply an event script and print the resulting screen
    Replay {
        /// Script file, or `-` to read from stdin
        script: PathBuf,

        /// Print the final state as JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },
}

const HELP: &str = "\
Type a message and press Enter to send it.
  /reply N    reply to message N
  /edit N     edit message N (type the new text next)
  /delete N   delete message N
  /cancel     drop the pending reply or edit
  /show       print the conversation
  /quit       leave
Start a message with // to send it with a leading /.
";

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the transcript
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Chat { yes } => run_chat(yes).await,
        Commands::Replay { script, json } => run_replay(&script, json).await,
    }
}

// ============================================================================
// Replay
// ============================================================================

async fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        tokio::io::stdin()
            .read_to_string(&mut script)
            .await
            .context("Failed to read script from stdin")?;
        return Ok(script);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read script {}", path.display()))
}

async fn run_replay(path: &Path, json: bool) -> Result<()> {
    let script = read_script(path).await?;
    let events = parse_script(&script).context("Invalid script")?;
    tracing::info!(events = events.len(), "Replaying script");

    let mut chat = ChatState::new();
    chat.apply_all(&events);

    if json {
        println!("{}", serde_json::to_string_pretty(&chat)?);
    } else {
        print!("{}", render(&chat).to_transcript());
    }
    Ok(())
}

// ============================================================================
// Interactive session
// ============================================================================

async fn run_chat(auto_confirm: bool) -> Result<()> {
    let mut session = Session::new(auto_confirm);

    let stdin = tokio::io::stdin();
    let reader = tokio::io::BufReader::new(stdin);
    let mut lines = reader.lines();

    println!("SwipeChat - type a message and press Enter. /help lists commands.");

    loop {
        print!("{}", session.prompt());
        std::io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    // EOF
                    println!();
                    break;
                };
                match session.handle_line(&line) {
                    Step::Continue(output) => print!("{output}"),
                    Step::Quit => break,
                }
            }
        }
    }

    tracing::info!(messages = session.chat.len(), "Chat session ended");
    Ok(())
}

/// What the session loop does after a line.
#[derive(Debug, PartialEq)]
enum Step {
    /// Print the text and read the next line
    Continue(String),
    Quit,
}

/// Line-driven wrapper around a [`ChatState`].
///
/// A `/delete` leaves the delete gate open; the next line is taken as the
/// answer to the prompt rather than as a message.
struct Session {
    chat: ChatState,
    auto_confirm: bool,
}

impl Session {
    fn new(auto_confirm: bool) -> Self {
        Self {
            chat: ChatState::new(),
            auto_confirm,
        }
    }

    fn prompt(&self) -> &'static str {
        if self.chat.pending_deletion().is_some() {
            "[y/N] "
        } else if self.chat.pending().is_editing() {
            "edit> "
        } else if self.chat.pending().is_replying() {
            "reply> "
        } else {
            "> "
        }
    }

    fn handle_line(&mut self, line: &str) -> Step {
        if self.chat.pending_deletion().is_some() {
            return Step::Continue(self.answer_delete(line));
        }

        // `//text` sends `/text`
        let text = match line.strip_prefix('/') {
            Some(rest) if rest.starts_with('/') => rest,
            Some(command) => return self.command(command),
            None => line,
        };

        self.chat.set_draft(text);
        match self.chat.submit() {
            SendOutcome::Ignored => Step::Continue(String::new()),
            outcome => {
                tracing::debug!(?outcome, "Sent from terminal");
                Step::Continue(self.transcript())
            }
        }
    }

    fn command(&mut self, command: &str) -> Step {
        let word = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match word.as_str() {
            "quit" | "exit" => return Step::Quit,
            "show" => return Step::Continue(self.transcript()),
            "help" => return Step::Continue(HELP.to_string()),
            "reply" | "edit" | "delete" | "cancel" => {}
            _ => {
                return Step::Continue(format!(
                    "unknown command '/{word}', try /help or send it as //{word}\n"
                ))
            }
        }

        let event = match ChatEvent::parse_line(command, 1) {
            Ok(Some(event)) => event,
            Ok(None) => return Step::Continue(String::new()),
            Err(_) => return Step::Continue(format!("usage: /{word} N\n")),
        };

        let outcome = self.chat.apply(&event);
        tracing::debug!(?event, ?outcome, "Applied command");

        let output = match outcome {
            EventOutcome::Ignored => "no message at that position\n".to_string(),
            EventOutcome::DeleteRequested(_) if self.auto_confirm => {
                self.chat.resolve_delete(true);
                self.transcript()
            }
            EventOutcome::DeleteRequested(_) => format!("{DELETE_PROMPT} [y/N]\n"),
            _ => self.transcript(),
        };
        Step::Continue(output)
    }

    fn answer_delete(&mut self, line: &str) -> String {
        let confirmed = matches!(
            line.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        );
        match self.chat.resolve_delete(confirmed) {
            Some(_) => self.transcript(),
            None => "Kept.\n".to_string(),
        }
    }

    fn transcript(&self) -> String {
        render(&self.chat).to_transcript()
    }
}
