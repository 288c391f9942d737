//! `group`: count lines per signature.

use std::io::{self, Write};

use rustc_hash::FxHashMap;

use super::{render_lines, report_failures, RunConfig};

/// A signature and the number of lines that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureCount {
    pub count: usize,
    pub signature: String,
}

/// Count signatures, most frequent first; ties sort by signature.
pub fn group_signatures<I>(signatures: I) -> Vec<SignatureCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for signature in signatures {
        *counts.entry(signature).or_default() += 1;
    }
    let mut groups: Vec<SignatureCount> = counts
        .into_iter()
        .map(|(signature, count)| SignatureCount { count, signature })
        .collect();
    groups.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.signature.cmp(&b.signature))
    });
    groups
}

/// Print `count<TAB>signature`, limited to `config.top` rows when set.
pub fn run_group(
    text: &str,
    config: &RunConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let results = render_lines(text, config, logsig::Sequence::signature);
    let ok = report_failures(&results, err)?;

    let groups = group_signatures(results.into_iter().flatten());
    let limit = config.top.unwrap_or(groups.len());
    tracing::debug!(groups = groups.len(), limit, "grouped");
    for group in groups.iter().take(limit) {
        writeln!(out, "{}\t{}", group.count, group.signature)?;
    }
    Ok(ok)
}
