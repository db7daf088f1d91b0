use crate::domain::model::MoNumber;
use crate::utils::error::{MotoinatError, Result};
use std::io::Write;
use std::path::Path;

/// Tokens split into the ones worth looking up and the ones that are not MO
/// numbers. Blank tokens land in neither.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidatedInput {
    pub numbers: Vec<MoNumber>,
    pub rejected: Vec<String>,
}

/// Trimmed, non-empty lines of the number file.
pub fn read_number_file(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MotoinatError::from_file_io(path, e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Positional tokens first, then the file's lines.
pub fn collect_tokens(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut tokens = positional.to_vec();
    if let Some(path) = file {
        let lines = read_number_file(path)?;
        tracing::debug!("Read {} line(s) from {}", lines.len(), path.display());
        tokens.extend(lines);
    }
    Ok(tokens)
}

pub fn validate_tokens<I, T>(tokens: I) -> ValidatedInput
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut input = ValidatedInput::default();

    for token in tokens {
        let token = token.as_ref();
        if token.trim().is_empty() {
            continue;
        }
        match MoNumber::parse(token) {
            Ok(number) => input.numbers.push(number),
            Err(_) => input.rejected.push(token.trim().to_string()),
        }
    }

    input
}

/// Gather and validate every MO number for a run. Rejected tokens are reported
/// on `diag`; an empty result is an error.
pub fn prepare_numbers<E: Write>(
    positional: &[String],
    file: Option<&Path>,
    diag: &mut E,
) -> Result<Vec<MoNumber>> {
    let tokens = collect_tokens(positional, file)?;
    let input = validate_tokens(&tokens);

    for token in &input.rejected {
        writeln!(diag, "Warning: Invalid MO number '{}' provided. Skipping.", token)?;
    }

    if input.numbers.is_empty() {
        return Err(MotoinatError::NoValidNumbers);
    }
    Ok(input.numbers)
}
