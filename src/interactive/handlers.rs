use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::app::InteractiveApp;
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::dashboard::{Completion, DashboardController, Request};
use crate::error::{BoardError, BoardResult};
use crate::logging::{log_debug, log_error, log_info, LogFileSink};

type BoardTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn terminal_error(e: io::Error) -> BoardError {
    BoardError::TerminalError(e.to_string())
}

pub async fn run_interactive_mode(context: &mut CliContext) -> BoardResult<()> {
    log_info("Starting interactive mode");

    // Fail before touching the terminal if there is nothing to authenticate with
    let controller = context.controller()?;
    log_debug(&format!("Using backend {}", context.base_url()));

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)?;
    log_debug("Terminal initialized");

    // The loop blocks on terminal events; request tasks keep running on the
    // other runtime workers.
    let result = tokio::task::block_in_place(|| run_loop(&mut terminal, controller));

    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    log_info("Exiting interactive mode");
    result
}

fn run_loop(terminal: &mut BoardTerminal, controller: DashboardController) -> BoardResult<()> {
    let mut app = InteractiveApp::new(Arc::new(LogFileSink));
    let (tx, mut rx): (UnboundedSender<Completion>, UnboundedReceiver<Completion>) =
        mpsc::unbounded_channel();
    let events = EventHandler::new(100);

    let initial = app.mount();
    dispatch(&controller, &app, initial, &tx);

    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(terminal_error(e));
        }

        let event = events
            .recv()
            .map_err(|e| BoardError::TerminalError(format!("Event channel closed: {}", e)))?;

        match event {
            Event::Key(key_event) => {
                log_debug(&format!("Key pressed: {:?}, popup: {:?}", key_event.code, app.popup));
                let requests = app.handle_key(key_event);
                dispatch(&controller, &app, requests, &tx);
            }
            Event::Resize | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }

        while let Ok(completion) = rx.try_recv() {
            let follow_ups = app.on_completion(completion);
            dispatch(&controller, &app, follow_ups, &tx);
        }
    }

    Ok(())
}

fn dispatch(
    controller: &DashboardController,
    app: &InteractiveApp,
    requests: Vec<Request>,
    tx: &UnboundedSender<Completion>,
) {
    let session = app.dashboard.session();
    for request in requests {
        controller.dispatch(session, request, tx.clone());
    }
}
