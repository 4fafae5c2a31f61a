use clap::Parser;
use cmdline_core::command::CommandDescriptor;
use cmdline_core::config::expand_path;
use cmdline_core::error::{Error, Result};
use cmdline_core::execution::ShellExecutor;
use cmdline_core::file_handling;
use log::{debug, info};
use std::process::ExitCode;

use cmdline_cli::cli_args::Args;
use cmdline_cli::invocation::Invocation;

/// Run the command on a runtime owned by this function and wait for the
/// callback to deliver its output.
fn run_in_background(
    descriptor: &CommandDescriptor,
    executor: &ShellExecutor,
) -> Result<(String, bool)> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Misc(format!("Could not start runtime: {e}")))?;

    runtime.block_on(async {
        let (sender, receiver) = tokio::sync::oneshot::channel();

        descriptor.execute_async(executor, move |output, is_empty| {
            let _ = sender.send((output, is_empty));
        })?;

        let reported = receiver
            .await
            .map_err(|_| Error::Misc("Command finished without reporting output".to_string()))?;

        Ok::<_, Error>(reported)
    })
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let invocation = Invocation::from_args(&args)?;
    let command = invocation.descriptor.render();
    debug!("Rendered command: `{}`", command);

    if let Some(save_path) = &args.save {
        let save_path = expand_path(save_path);
        file_handling::write_command_definition(&save_path, &invocation.to_definition())?;
        info!("Saved command definition to `{}`", save_path);
    }

    if !args.execute && !args.background {
        println!("{command}");
        return Ok(());
    }

    let executor = invocation.executor(&args.shell);

    if args.execute {
        let output = invocation.descriptor.execute(&executor)?;
        print!("{output}");
    } else {
        let (output, is_empty) = run_in_background(&invocation.descriptor, &executor)?;
        if is_empty {
            info!("`{}` produced no output", command);
        }
        print!("{output}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
