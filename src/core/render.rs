use crate::domain::model::{Lookup, LookupOutcome, OutputMode};
use std::io::Write;

const MISSING: &str = "N/A";

/// Print one lookup in the requested mode.
pub fn write_lookup<W: Write>(out: &mut W, lookup: &Lookup, mode: OutputMode) -> std::io::Result<()> {
    let mo = &lookup.mo_number;

    match (&lookup.outcome, mode) {
        (LookupOutcome::Found { observation, .. }, OutputMode::NumberOnly) => {
            writeln!(out, "{}", observation.id)
        }
        (LookupOutcome::Found { observation, .. }, OutputMode::UrlOnly) => {
            writeln!(out, "{}", observation.inat_url())
        }
        (
            LookupOutcome::Found {
                observation,
                matched_url,
            },
            OutputMode::Detailed,
        ) => {
            writeln!(out, "Mushroom Observer #{}:", mo)?;
            writeln!(out, "  iNaturalist Observation: {}", observation.inat_url())?;
            writeln!(
                out,
                "  Species: {}",
                observation.species_guess.as_deref().unwrap_or(MISSING)
            )?;
            writeln!(
                out,
                "  Location: {}",
                observation.place_guess.as_deref().unwrap_or(MISSING)
            )?;
            writeln!(out, "  Matched URL: {}", matched_url)?;
            writeln!(out)
        }
        (LookupOutcome::NotFound, OutputMode::UrlOnly | OutputMode::NumberOnly) => writeln!(
            out,
            "Mushroom Observer #{} has no iNaturalist observation associated with it.",
            mo
        ),
        (LookupOutcome::NotFound, OutputMode::Detailed) => {
            writeln!(out, "No iNaturalist observation found for Mushroom Observer #{}", mo)?;
            writeln!(out)
        }
    }
}

/// The text `write_lookup` would print, as a string.
pub fn render_lookup(lookup: &Lookup, mode: OutputMode) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_lookup(&mut buf, lookup, mode)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
