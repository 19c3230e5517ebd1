//! Uniform record shapes shared by the provider adapter and its callers.

use serde::{Deserialize, Serialize};

/// A DNS record as returned by the provider.
///
/// `record_type` is carried verbatim as the provider reports it, so callers
/// can detect when a name is occupied by a record of a foreign type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier (DNSPod's numeric id as a string).
    pub id: String,
    /// Record name relative to the zone (e.g., `"_acme-challenge.foo"`).
    pub name: String,
    /// Record type string (`"TXT"`, `"A"`, `"CNAME"`, ...).
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// Request to create a new DNS record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    /// Zone to create the record in.
    pub zone: String,
    /// Record name relative to the zone.
    pub name: String,
    /// Record type string (`"TXT"` for challenge records).
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}
