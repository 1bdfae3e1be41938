use crate::process::ProcessError;

/// Keeps SIGINT from killing the shell. The terminal still delivers it to
/// the foreground children, which terminate on their own.
pub fn setup_interrupt_handler(quiet: bool) -> Result<(), ProcessError> {
    ctrlc::set_handler(move || {
        if !quiet {
            eprintln!("\nUse 'exit' to exit the shell");
        }
    })?;
    Ok(())
}
