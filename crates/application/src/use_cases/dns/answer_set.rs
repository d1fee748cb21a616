use crate::ports::DegradeEntry;
use crate::services::RecordAssembler;
use zonestore_dns_domain::{DomainError, ZoneRecord};

/// Answers accumulated during one resolution, plus the records that had to
/// be skipped because they could not be assembled.
#[derive(Debug, Default)]
pub(crate) struct AnswerSet {
    entry: DegradeEntry,
    diagnostics: Vec<DomainError>,
}

impl AnswerSet {
    /// Returns whether the record was assembled and added.
    pub(crate) fn push(
        &mut self,
        assembler: &RecordAssembler,
        owner: &str,
        record: &ZoneRecord,
    ) -> bool {
        match assembler.assemble(owner, record) {
            Ok((rr_string, rr)) => {
                self.entry.rr_strings.push(rr_string);
                self.entry.records.push(rr);
                true
            }
            Err(e) => {
                self.diagnostics.push(e);
                false
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    pub(crate) fn diagnostics(&self) -> &[DomainError] {
        &self.diagnostics
    }

    pub(crate) fn into_entry(self) -> DegradeEntry {
        self.entry
    }
}
