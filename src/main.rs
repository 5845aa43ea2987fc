// rankcalc: rank-by-rank arithmetic evaluator with a reduction trace viewer

use std::io::{self, IsTerminal};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rankcalc::config::{usage, Command, Config};
use rankcalc::session::{run_lines, Session};
use rankcalc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "rankcalc".to_string());

    let config = match Config::from_args(args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", usage(&program_name));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    let interactive = io::stdin().is_terminal();
    let mut session = Session::new(config);

    if session.config().plain || !interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        run_lines(
            &mut session,
            stdin.lock(),
            &mut stdout,
            &mut stderr,
            interactive,
        )?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    let (evaluated, rejected) = app.session.counts();
    eprintln!("Session ended: {} evaluated, {} rejected.", evaluated, rejected);

    Ok(())
}
