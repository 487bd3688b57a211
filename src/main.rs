use shadepad::app::App;
use shadepad::engine::error::CliError;
use shadepad::input;
use shadepad::ui::{parse_args, run_batch, Command, Theme, TuiManager, USAGE};
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so markup on stdout and the viewer stay clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into())),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "shadepad failed");
            eprintln!("shadepad: {}", err);
            if matches!(
                err,
                CliError::UnknownCommand(_)
                    | CliError::InvalidOption(_)
                    | CliError::MissingArgument(_)
                    | CliError::UnexpectedArgument(_)
            ) {
                eprintln!("\n{}", USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;

    match &invocation.command {
        Command::View { vertex, fragment } => {
            let vertex = input::load(vertex)?;
            let fragment = input::load(fragment)?;
            let mut app = App::new(vertex, fragment, invocation.config.view.clone());

            let mut tui = TuiManager::new(Theme::default())?;
            tui.run_event_loop(&mut app)?;
            Ok(())
        }
        _ => run_batch(&invocation, &mut io::stdout().lock()),
    }
}
