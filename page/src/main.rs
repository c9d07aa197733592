use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use skip_page::render::{render_page, COMMAND_HELP};
use skip_page::{transport, Command, Flow, PageConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = PageConfig::from_env();
    info!(base_url = %config.client.base_url, postcode = %config.postcode, "starting skip selection");

    let mut session = Session::mount(&config, transport::execute);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut notice: Option<String> = None;

    loop {
        write!(stdout, "{}", render_page(&session.view())).context("failed to write page")?;
        if session.is_pending() {
            stdout.flush().context("failed to flush stdout")?;
            session.load();
            writeln!(stdout).context("failed to write page")?;
            continue;
        }
        if let Some(text) = notice.take() {
            writeln!(stdout, "{}", text.yellow()).context("failed to write notice")?;
        }
        write!(stdout, "{COMMAND_HELP}\n> ").context("failed to write prompt")?;
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read command")? == 0 {
            return Ok(());
        }
        let Some(command) = Command::parse(&line) else {
            notice = Some(format!("Unknown command: {}", line.trim()));
            continue;
        };

        match session.handle(command) {
            Flow::Render => {}
            Flow::Notice(text) => notice = Some(text),
            Flow::Proceed(selection) => {
                info!(id = selection.skip.id, total = selection.total_price, "selection handed to next step");
                notice = Some(format!(
                    "You selected: {} Yard Skip - £{}",
                    selection.skip.size, selection.total_price
                ));
            }
            Flow::Quit => return Ok(()),
        }
        writeln!(stdout).context("failed to write page")?;
    }
}
