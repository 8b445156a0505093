use std::fs::File;
use std::sync::Mutex;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use univai_landing::app::App;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // logs go to a file so they don't corrupt the TUI
    let log_file = File::create("univai-landing.log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    color_eyre::install()?;

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;
    let result = App::new()?.run(terminal).await;
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
