use crate::core::render::write_lookup;
use crate::core::resolver::Resolver;
use crate::domain::model::{MoNumber, OutputMode};
use crate::domain::ports::ObservationSource;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub looked_up: usize,
    pub found: usize,
}

/// Resolves MO numbers one after another and prints each result as soon as
/// it is known.
pub struct LookupRunner<S: ObservationSource> {
    resolver: Resolver<S>,
    mode: OutputMode,
}

impl<S: ObservationSource> LookupRunner<S> {
    pub fn new(resolver: Resolver<S>, mode: OutputMode) -> Self {
        Self { resolver, mode }
    }

    pub async fn run<W: Write>(&self, numbers: &[MoNumber], out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for number in numbers {
            let lookup = self.resolver.resolve(number).await;

            summary.looked_up += 1;
            if lookup.is_found() {
                summary.found += 1;
            }

            write_lookup(out, &lookup, self.mode)?;
            out.flush()?;
        }

        tracing::debug!(
            "Looked up {} Mushroom Observer number(s), {} found",
            summary.looked_up,
            summary.found
        );
        Ok(summary)
    }
}
