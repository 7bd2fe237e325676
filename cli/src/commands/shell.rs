//! Interactive filtering session
//!
//! Each input line replaces the contents of the search box. The filter is
//! applied once input has been quiet for the debounce delay, or when stdin
//! closes. Lines starting with `/` are session commands.

use super::session::Session;
use crate::config::PreferencesLoader;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
Type a search and press enter:
  category|[subcategory|]title   filter by category path
  handler:title                  filter by entry type (md, pdf, html...)
  anything else                  search every column
Commands:
  /cat [label]   select a category, or list them
  /clear         clear the search and show every category
  /page <n>      show page n
  /help          show this help
  /quit          leave";

/// What the session loop should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Render,
    Quit,
}

/// Run the interactive session until `/quit` or end of input
pub async fn shell_command(data: &Path, loader: PreferencesLoader) -> Result<()> {
    let mut session = Session::open(data, &loader).await?;
    println!("{}", "kbase - type /help for commands".dimmed());
    println!("{}", session.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = session.controller.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match handle_line(&mut session, &line) {
                    Step::Quit => return Ok(()),
                    Step::Render => println!("{}", session.render()),
                    Step::Continue => {}
                }
            }
            _ = sleep_until(deadline) => {
                if session.controller.poll() {
                    println!("{}", session.render());
                }
            }
        }
    }

    // End of input: apply whatever was typed last
    if session.controller.flush() {
        println!("{}", session.render());
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

fn handle_line(session: &mut Session, line: &str) -> Step {
    let Some(command) = line.trim().strip_prefix('/') else {
        return if session.controller.search_input(line) {
            Step::Render
        } else {
            Step::Continue
        };
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    debug!("Shell command {:?} {:?}", name, arg);

    match name {
        "q" | "quit" | "exit" => Step::Quit,
        "clear" => {
            session.controller.clear_search();
            Step::Render
        }
        "cat" if arg.is_empty() => {
            println!("{}", session.render_sidebar());
            Step::Continue
        }
        "cat" => {
            if session.sidebar.find(arg).is_none()
                && !session.controller.categories().is_all(arg)
            {
                eprintln!("{} no category named {}", "!".yellow(), arg.yellow());
            }
            session.controller.select_category(arg);
            Step::Render
        }
        "page" => match arg.parse::<usize>() {
            Ok(page) if page > 0 => {
                session.controller.flush();
                session.controller.view_mut().set_page(page - 1);
                Step::Render
            }
            _ => {
                eprintln!("{} usage: /page <n>", "!".yellow());
                Step::Continue
            }
        },
        "help" => {
            println!("{}", HELP);
            Step::Continue
        }
        _ => {
            eprintln!("{} unknown command /{}, try /help", "!".yellow(), name);
            Step::Continue
        }
    }
}
