//! Interactive fallback for the input path.

use crate::error::AnalyzerError;
use dialoguer::Input;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Checks if both stdin and stdout are connected to a terminal.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask the user for the Authentication Methods export.
///
/// Fails with [`AnalyzerError::InputRequired`] when no terminal is attached.
pub fn prompt_input_path() -> Result<PathBuf, AnalyzerError> {
    if !is_interactive_terminal() {
        return Err(AnalyzerError::InputRequired);
    }

    let input: String = Input::new()
        .with_prompt("Path to the *-AuthenticationMethods.csv export")
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("a path is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(PathBuf::from(input.trim().trim_matches('"')))
}
