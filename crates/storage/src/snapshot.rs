//! Ledger snapshots.
//!
//! A snapshot is the ledger written as JSON lines, one event per line, in
//! insertion order. Restoring replays `append` for every line, so a
//! snapshot containing a duplicate id is rejected the same way a live
//! append would be.

use std::io::{BufRead, Write};

use aurora_core::{AuroraError, AuroraResult, Event};

use crate::ledger::Ledger;

/// Write every event of the ledger to `writer`.
pub fn write_snapshot<W: Write>(ledger: &Ledger, mut writer: W) -> AuroraResult<usize> {
    for event in ledger {
        serde_json::to_writer(&mut writer, event)
            .map_err(|e| AuroraError::serialization(e.to_string()))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::debug!(target: "aurora::snapshot", events = ledger.len(), "Wrote snapshot");
    Ok(ledger.len())
}

/// Rebuild a ledger from a snapshot.
///
/// Blank lines are skipped. A malformed line fails with a serialization
/// error naming its line number.
pub fn read_snapshot<R: BufRead>(reader: R) -> AuroraResult<Ledger> {
    let mut ledger = Ledger::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .map_err(|e| AuroraError::serialization(format!("line {}: {}", n + 1, e)))?;
        ledger.append(event)?;
    }
    tracing::debug!(target: "aurora::snapshot", events = ledger.len(), "Restored snapshot");
    Ok(ledger)
}
