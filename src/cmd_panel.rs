//! Interactive explain-panel host driven by stdin commands.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use princex_core::panel::{PanelEvent, PanelSession, PanelState};
use princex_core::presenter::render_text;
use princex_core::TermResolver;

const HELP: &str = "\
Commands:
  select <text>   change the selection
  explain         press the Explain button
  close           press the close button
  esc             press Escape
  click           click outside the panel
  wait [ms]       pause (default 200 ms)
  quit            exit";

/// One line of input, parsed.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(PanelEvent),
    Wait(Duration),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match word.trim() {
        "select" => Command::Event(PanelEvent::Selection(rest.to_string())),
        "explain" => Command::Event(PanelEvent::Activate),
        "close" => Command::Event(PanelEvent::Close),
        "esc" | "escape" => Command::Event(PanelEvent::Escape),
        "click" => Command::Event(PanelEvent::OutsideClick),
        "wait" => {
            let ms = rest.trim().parse().unwrap_or(200);
            Command::Wait(Duration::from_millis(ms))
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn describe(state: &PanelState) -> String {
    match state {
        PanelState::Idle => "[idle]".to_string(),
        PanelState::ButtonShown { term } => format!("[button] Explain \"{}\"", term.display()),
        PanelState::PanelLoading { term, .. } => {
            format!("[loading] Analyzing \"{}\"...", term.display())
        }
        PanelState::PanelShown { resolution, .. } => format!(
            "[panel] {:?}\n{}",
            resolution.source,
            render_text(&resolution.term, &resolution.record)
        ),
    }
}

/// Run the panel until `quit` or end of input. A panel still loading at end
/// of input is allowed to finish.
pub(crate) async fn handle_panel(
    resolver: Arc<TermResolver>,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = PanelSession::new(resolver).spawn();

    let mut updates = handle.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("{}", describe(&state));
        }
    });

    eprintln!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Event(event)) => handle.send(event).await?,
            Some(Command::Wait(duration)) => tokio::time::sleep(duration).await,
            Some(Command::Help) => eprintln!("{}", HELP),
            Some(Command::Quit) => break,
            None => eprintln!("Unknown command: {}", line.trim()),
        }
    }

    if matches!(handle.state(), PanelState::PanelLoading { .. }) {
        debug!("Waiting for the open panel to finish loading");
        handle
            .wait_for(|state| !matches!(state, PanelState::PanelLoading { .. }))
            .await?;
    }

    handle.shutdown().await;
    let _ = printer.await;
    Ok(())
}
