use super::answer_set::AnswerSet;
use crate::ports::{
    DegradeCachePort, DegradeEntry, QueryResponder, RecordRepository, ZoneRepository,
};
use crate::services::{RecordAssembler, StoreHealth, StoreStatus};
use hickory_proto::op::ResponseCode;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};
use zonestore_dns_domain::zone::{label_count, normalize_name};
use zonestore_dns_domain::{
    DnsRequest, DomainError, RecordType, ResolutionKey, ZoneLocation, WILDCARD_HOST,
    ZONE_SEPARATOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// Freshly resolved from the record store.
    Store,
    /// Served from the degrade cache after live resolution failed.
    Degrade,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Answered {
        entry: Arc<DegradeEntry>,
        source: AnswerSource,
    },
    /// No fresh and no cached answer: the next handler should serve the query.
    PassThrough,
}

/// Resolves queries against the zone/record store, backed by the degrade
/// cache when the store fails or has nothing to say.
///
/// Stages run in order (primary lookup, CNAME expansion, wildcard fallback)
/// and any stage error short-circuits into the degrade fallback. There are
/// no retries.
pub struct HandleDnsQueryUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    degrade_cache: Arc<dyn DegradeCachePort>,
    assembler: RecordAssembler,
    store_health: Option<Arc<StoreHealth>>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        records: Arc<dyn RecordRepository>,
        degrade_cache: Arc<dyn DegradeCachePort>,
    ) -> Self {
        Self {
            zones,
            records,
            degrade_cache,
            assembler: RecordAssembler::default(),
            store_health: None,
        }
    }

    pub fn with_default_ttl(mut self, default_ttl: u32) -> Self {
        self.assembler = RecordAssembler::new(default_ttl);
        self
    }

    pub fn with_store_health(mut self, store_health: Arc<StoreHealth>) -> Self {
        self.store_health = Some(store_health);
        self
    }

    /// Protocol entry point. Writes a reply for any answer, fresh or cached;
    /// on a total miss writes nothing and returns the successor's result.
    pub async fn serve<W>(
        &self,
        request: &DnsRequest,
        responder: &mut W,
    ) -> Result<ResponseCode, DomainError>
    where
        W: QueryResponder + ?Sized,
    {
        match self.execute(request).await {
            QueryOutcome::Answered { entry, .. } => {
                responder.write_reply(&entry.records).await?;
                Ok(ResponseCode::NoError)
            }
            QueryOutcome::PassThrough => {
                debug!(domain = %request.domain, "Passing query to next handler");
                responder.pass_through().await
            }
        }
    }

    #[instrument(skip(self, request), fields(domain = %request.domain, record_type = %request.record_type))]
    pub async fn execute(&self, request: &DnsRequest) -> QueryOutcome {
        let key = request.resolution_key();

        match self.resolve_fresh(request).await {
            Ok(answers) if !answers.is_empty() => {
                let entry = Arc::new(answers.into_entry());
                self.remember(key, &entry);
                QueryOutcome::Answered {
                    entry,
                    source: AnswerSource::Store,
                }
            }
            Ok(_) => {
                debug!("No records found, trying degrade cache");
                self.degrade(&key)
            }
            Err(e) => {
                error!(error = %e, "Resolution failed, trying degrade cache");
                self.degrade(&key)
            }
        }
    }

    async fn resolve_fresh(&self, request: &DnsRequest) -> Result<AnswerSet, DomainError> {
        let fqdn = request.domain.as_ref();
        let record_type = request.record_type;

        let location = self.zones.resolve_name(fqdn)?;
        debug!(zone_id = location.zone_id, host = %location.host, zone = %location.zone, "Zone resolved");

        let direct = self
            .records
            .get_records(location.zone_id, &location.host, &location.zone, record_type)
            .await?;
        debug!(count = direct.len(), "Direct lookup finished");

        let mut answers = AnswerSet::default();

        if direct.is_empty() {
            if record_type != RecordType::CNAME {
                self.expand_cname(fqdn, record_type, &location, &mut answers)
                    .await?;
            }
        } else {
            for record in &direct {
                answers.push(&self.assembler, &record.owner_name(), record);
            }
        }

        if answers.is_empty() && fqdn.matches(ZONE_SEPARATOR).count() > 1 {
            self.expand_wildcard(fqdn, record_type, &mut answers).await?;
        }

        for diagnostic in answers.diagnostics() {
            warn!(error = %diagnostic, "Skipped malformed record");
        }

        Ok(answers)
    }

    /// One level of alias indirection. Aliases are followed in store order and
    /// a failure on any of them aborts the whole resolution. An alias that
    /// cannot be assembled is skipped together with its target.
    async fn expand_cname(
        &self,
        fqdn: &str,
        record_type: RecordType,
        location: &ZoneLocation,
        answers: &mut AnswerSet,
    ) -> Result<(), DomainError> {
        let aliases = self
            .records
            .get_records(
                location.zone_id,
                &location.host,
                &location.zone,
                RecordType::CNAME,
            )
            .await?;

        for alias in &aliases {
            let target = normalize_name(&alias.data);
            let target_location = self.zones.resolve_name(&target)?;

            if !answers.push(&self.assembler, fqdn, alias) {
                continue;
            }
            debug!(
                target = %target,
                zone_id = target_location.zone_id,
                host = %target_location.host,
                zone = %target_location.zone,
                "Following CNAME"
            );

            let target_records = self
                .records
                .get_records(
                    target_location.zone_id,
                    &target_location.host,
                    &target_location.zone,
                    record_type,
                )
                .await?;

            for record in &target_records {
                answers.push(&self.assembler, &record.owner_name(), record);
            }
        }

        Ok(())
    }

    async fn expand_wildcard(
        &self,
        fqdn: &str,
        record_type: RecordType,
        answers: &mut AnswerSet,
    ) -> Result<(), DomainError> {
        let (base_zone, zone_id) = self.wildcard_zone(fqdn).ok_or_else(|| {
            DomainError::ZoneResolution(format!("No wildcard zone found for {}", fqdn))
        })?;

        let records = self
            .records
            .get_records(zone_id, WILDCARD_HOST, base_zone, record_type)
            .await?;
        debug!(base_zone = %base_zone, count = records.len(), "Wildcard lookup finished");

        let owner = format!("{}{}{}", WILDCARD_HOST, ZONE_SEPARATOR, base_zone);
        for record in &records {
            answers.push(&self.assembler, &owner, record);
        }

        Ok(())
    }

    /// Walks up from the parent of `fqdn` to the first registered zone that
    /// still has at least two labels.
    fn wildcard_zone<'a>(&self, fqdn: &'a str) -> Option<(&'a str, i64)> {
        let mut candidate = self.zones.base_zone_of(fqdn);
        while let Some(zone) = candidate {
            if label_count(zone) < 2 {
                break;
            }
            if let Some(zone_id) = self.zones.lookup_zone_id(zone) {
                return Some((zone, zone_id));
            }
            candidate = self.zones.base_zone_of(zone);
        }
        None
    }

    fn remember(&self, key: ResolutionKey, entry: &Arc<DegradeEntry>) {
        let unchanged = self
            .degrade_cache
            .get(&key)
            .is_some_and(|cached| *cached == **entry);

        if !unchanged {
            debug!(records = entry.len(), "Updating degrade cache");
            self.degrade_cache.put(key, Arc::clone(entry));
        }
    }

    fn degrade(&self, key: &ResolutionKey) -> QueryOutcome {
        match self.degrade_cache.get(key) {
            Some(entry) => {
                let store_status = self
                    .store_health
                    .as_ref()
                    .map(|h| h.status())
                    .unwrap_or(StoreStatus::Unknown);
                warn!(
                    records = entry.len(),
                    store_status = ?store_status,
                    "Serving degrade cache answer"
                );
                QueryOutcome::Answered {
                    entry,
                    source: AnswerSource::Degrade,
                }
            }
            None => {
                debug!("Degrade cache miss");
                QueryOutcome::PassThrough
            }
        }
    }
}
