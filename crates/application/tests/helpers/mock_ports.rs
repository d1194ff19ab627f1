use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use zonewatch_application::ports::{
    PostureRepository, ZoneListSource, ZoneResolver, ZoneResponse,
};
use zonewatch_domain::{
    DomainError, RecordKind, ReplyCode, ZoneListEntry, ZonePosture, ZoneRecord,
};

/// Builder for the responses a test scripts into the mock resolver.
pub struct ZoneResponseBuilder {
    reply_code: ReplyCode,
    authentic_data: bool,
    answers: Vec<ZoneRecord>,
    extra_answers: usize,
}

impl ZoneResponseBuilder {
    pub fn new() -> Self {
        Self {
            reply_code: ReplyCode::NoError,
            authentic_data: false,
            answers: Vec::new(),
            extra_answers: 0,
        }
    }

    pub fn reply_code(mut self, reply_code: ReplyCode) -> Self {
        self.reply_code = reply_code;
        self
    }

    pub fn authentic_data(mut self, authentic_data: bool) -> Self {
        self.authentic_data = authentic_data;
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.answers.push(ZoneRecord::Ns {
            target: target.to_string(),
        });
        self
    }

    pub fn soa(mut self, serial: u32) -> Self {
        self.answers.push(ZoneRecord::Soa { serial });
        self
    }

    pub fn dnskey(mut self, flags: u16, algorithm: u8, key_tag: u16) -> Self {
        self.answers.push(ZoneRecord::Dnskey {
            flags,
            algorithm,
            key_tag,
        });
        self
    }

    pub fn ds(mut self, key_tag: u16, algorithm: u8, digest_type: u8) -> Self {
        self.answers.push(ZoneRecord::Ds {
            key_tag,
            algorithm,
            digest_type,
        });
        self
    }

    /// Answer-section records of types the parser does not carry
    /// (e.g. the RRSIGs accompanying a DNSKEY answer).
    pub fn extra_answers(mut self, count: usize) -> Self {
        self.extra_answers = count;
        self
    }

    pub fn build(self) -> ZoneResponse {
        ZoneResponse {
            reply_code: self.reply_code,
            authentic_data: self.authentic_data,
            answer_count: self.answers.len() + self.extra_answers,
            answers: self.answers,
        }
    }
}

impl Default for ZoneResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

type QueryKey = (String, RecordKind, bool);

/// Scriptable resolver that records every issued query, so tests can
/// assert on the query sequence as well as on the classification.
pub struct MockZoneResolver {
    responses: Mutex<HashMap<QueryKey, Result<ZoneResponse, DomainError>>>,
    queries: Mutex<Vec<QueryKey>>,
}

impl MockZoneResolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, zone: &str, kind: RecordKind, dnssec_ok: bool, response: ZoneResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert((zone.to_string(), kind, dnssec_ok), Ok(response));
    }

    pub fn set_error(&self, zone: &str, kind: RecordKind, dnssec_ok: bool, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((zone.to_string(), kind, dnssec_ok), Err(error));
    }

    pub fn issued_queries(&self) -> Vec<QueryKey> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for MockZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneResolver for MockZoneResolver {
    async fn query(
        &self,
        zone: &str,
        kind: RecordKind,
        dnssec_ok: bool,
    ) -> Result<ZoneResponse, DomainError> {
        self.queries
            .lock()
            .unwrap()
            .push((zone.to_string(), kind, dnssec_ok));

        self.responses
            .lock()
            .unwrap()
            .get(&(zone.to_string(), kind, dnssec_ok))
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::QueryFailed(format!(
                    "No mock response for {} {} do={}",
                    zone, kind, dnssec_ok
                )))
            })
    }
}

/// In-memory posture store with the same upsert-by-zone-name semantics
/// the real store enforces via its unique index.
pub struct MockPostureRepository {
    records: Mutex<HashMap<String, ZonePosture>>,
    save_calls: Mutex<usize>,
    should_fail: Mutex<bool>,
}

impl MockPostureRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            save_calls: Mutex::new(0),
            should_fail: Mutex::new(false),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn records(&self) -> HashMap<String, ZonePosture> {
        self.records.lock().unwrap().clone()
    }

    pub fn get(&self, zone_name: &str) -> Option<ZonePosture> {
        self.records.lock().unwrap().get(zone_name).cloned()
    }

    pub fn save_calls(&self) -> usize {
        *self.save_calls.lock().unwrap()
    }
}

impl Default for MockPostureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostureRepository for MockPostureRepository {
    async fn save(&self, posture: &ZonePosture) -> Result<(), DomainError> {
        *self.save_calls.lock().unwrap() += 1;

        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::DatabaseError("Mock store failed".to_string()));
        }

        self.records
            .lock()
            .unwrap()
            .insert(posture.zone_name.clone(), posture.clone());
        Ok(())
    }
}

/// Fixed zone list, or a scripted read failure.
pub struct MockZoneListSource {
    entries: Vec<ZoneListEntry>,
    should_fail: bool,
}

impl MockZoneListSource {
    pub fn new(entries: Vec<ZoneListEntry>) -> Self {
        Self {
            entries,
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ZoneListSource for MockZoneListSource {
    async fn read_entries(&self) -> Result<Vec<ZoneListEntry>, DomainError> {
        if self.should_fail {
            return Err(DomainError::IoError("Mock list unreadable".to_string()));
        }
        Ok(self.entries.clone())
    }
}
