// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;

/// Free-form tags, a map of key/value pairs without predefined names.
pub type FreeformTags = HashMap<String, String>;

/// Defined tags, grouped by namespace.
pub type DefinedTags = HashMap<String, HashMap<String, serde_json::Value>>;

gaxi::wire_enum! {
    /// The type of a zone.
    ZoneType {
        Primary => "PRIMARY",
        Secondary => "SECONDARY",
    }
}

gaxi::wire_enum! {
    /// The visibility of a zone or steering policy.
    Scope {
        Global => "GLOBAL",
        Private => "PRIVATE",
    }
}

gaxi::wire_enum! {
    /// The lifecycle state of a [Zone].
    ZoneLifecycleState {
        Active => "ACTIVE",
        Creating => "CREATING",
        Deleted => "DELETED",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
    }
}

gaxi::wire_enum! {
    /// The lifecycle state of a [SteeringPolicy].
    SteeringPolicyLifecycleState {
        Active => "ACTIVE",
        Creating => "CREATING",
        Deleted => "DELETED",
        Deleting => "DELETING",
    }
}

gaxi::wire_enum! {
    /// The lifecycle state of a [SteeringPolicyAttachment].
    SteeringPolicyAttachmentLifecycleState {
        Active => "ACTIVE",
        Creating => "CREATING",
        Deleted => "DELETED",
        Deleting => "DELETING",
    }
}

gaxi::wire_enum! {
    /// The common pattern implemented by a steering policy.
    SteeringPolicyTemplate {
        Failover => "FAILOVER",
        LoadBalance => "LOAD_BALANCE",
        RouteByGeo => "ROUTE_BY_GEO",
        RouteByAsn => "ROUTE_BY_ASN",
        RouteByIp => "ROUTE_BY_IP",
        Custom => "CUSTOM",
    }
}

gaxi::wire_enum! {
    /// The type of a steering policy rule.
    RuleType {
        Filter => "FILTER",
        Health => "HEALTH",
        Weighted => "WEIGHTED",
        Priority => "PRIORITY",
        Limit => "LIMIT",
    }
}

gaxi::wire_enum! {
    /// The sort order of list results.
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

gaxi::wire_enum! {
    /// The field used to sort the results of [list_zones][crate::client::Dns::list_zones].
    ListZonesSortBy {
        Name => "name",
        ZoneType => "zoneType",
        TimeCreated => "timeCreated",
    }
}

gaxi::wire_enum! {
    /// The field used to sort the results of
    /// [list_steering_policies][crate::client::Dns::list_steering_policies].
    ListSteeringPoliciesSortBy {
        DisplayName => "displayName",
        TimeCreated => "timeCreated",
        Template => "template",
    }
}

gaxi::wire_enum! {
    /// The field used to sort the results of
    /// [list_steering_policy_attachments][crate::client::Dns::list_steering_policy_attachments].
    ListSteeringPolicyAttachmentsSortBy {
        DisplayName => "displayName",
        TimeCreated => "timeCreated",
        DomainName => "domainName",
    }
}

/// A DNS zone.
///
/// Zones hold the records for a domain. Primary zones are managed through the
/// DNS service, secondary zones replicate the records from external masters.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Zone {
    /// The name of the zone, e.g. `example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<ZoneType>,

    /// The OCID of the compartment containing the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,

    /// The OCID of the private view containing the zone. Only set for
    /// private zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    /// External master servers for a secondary zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_masters: Option<Vec<ExternalMaster>>,

    /// The canonical absolute URL of the resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// The OCID of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The date and time the zone was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    /// Version is the never-repeating, totally-orderable version of the zone,
    /// from which the serial field of the zone's SOA record is derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The current serial of the zone, as seen in the zone's SOA record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ZoneLifecycleState>,

    /// Protected zones cannot be modified by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,

    /// The authoritative nameservers for the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<Nameserver>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Zone {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Zone::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [zone_type][Zone::zone_type].
    pub fn set_zone_type<T: Into<ZoneType>>(mut self, v: T) -> Self {
        self.zone_type = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Zone::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [scope][Zone::scope].
    pub fn set_scope<T: Into<Scope>>(mut self, v: T) -> Self {
        self.scope = Some(v.into());
        self
    }

    /// Sets the value of [view_id][Zone::view_id].
    pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
        self.view_id = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][Zone::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][Zone::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [external_masters][Zone::external_masters].
    pub fn set_external_masters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ExternalMaster>,
    {
        self.external_masters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [self_link][Zone::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [id][Zone::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [time_created][Zone::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [version][Zone::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [serial][Zone::serial].
    pub fn set_serial<T: Into<i64>>(mut self, v: T) -> Self {
        self.serial = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][Zone::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<ZoneLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [is_protected][Zone::is_protected].
    pub fn set_is_protected<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_protected = Some(v.into());
        self
    }

    /// Sets the value of [nameservers][Zone::nameservers].
    pub fn set_nameservers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Nameserver>,
    {
        self.nameservers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl waiter::Lifecycle for Zone {
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_ref().map(ZoneLifecycleState::as_str)
    }
}

/// An external master server for a secondary zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExternalMaster {
    /// The server's IP address (IPv4 or IPv6).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The server's port. Port value must be a value of 53, otherwise omit
    /// the port value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The OCID of the TSIG key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsig_key_id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExternalMaster {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address][ExternalMaster::address].
    pub fn set_address<T: Into<String>>(mut self, v: T) -> Self {
        self.address = Some(v.into());
        self
    }

    /// Sets the value of [port][ExternalMaster::port].
    pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }

    /// Sets the value of [tsig_key_id][ExternalMaster::tsig_key_id].
    pub fn set_tsig_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.tsig_key_id = Some(v.into());
        self
    }
}

/// An authoritative nameserver for a zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Nameserver {
    /// The hostname of the nameserver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Nameserver {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hostname][Nameserver::hostname].
    pub fn set_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.hostname = Some(v.into());
        self
    }
}

/// The body of [create_zone][crate::client::Dns::create_zone].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateZoneDetails {
    /// The name of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<ZoneType>,

    /// The OCID of the compartment containing the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,

    /// The OCID of the private view containing the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_masters: Option<Vec<ExternalMaster>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateZoneDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateZoneDetails::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [zone_type][CreateZoneDetails::zone_type].
    pub fn set_zone_type<T: Into<ZoneType>>(mut self, v: T) -> Self {
        self.zone_type = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][CreateZoneDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [scope][CreateZoneDetails::scope].
    pub fn set_scope<T: Into<Scope>>(mut self, v: T) -> Self {
        self.scope = Some(v.into());
        self
    }

    /// Sets the value of [view_id][CreateZoneDetails::view_id].
    pub fn set_view_id<T: Into<String>>(mut self, v: T) -> Self {
        self.view_id = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][CreateZoneDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][CreateZoneDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [external_masters][CreateZoneDetails::external_masters].
    pub fn set_external_masters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ExternalMaster>,
    {
        self.external_masters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The body of [update_zone][crate::client::Dns::update_zone].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateZoneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_masters: Option<Vec<ExternalMaster>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateZoneDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [freeform_tags][UpdateZoneDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][UpdateZoneDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [external_masters][UpdateZoneDetails::external_masters].
    pub fn set_external_masters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ExternalMaster>,
    {
        self.external_masters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A DNS resource record.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Record {
    /// The fully qualified domain name where the record can be located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// A unique identifier for the record within its zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,

    /// The record's data, e.g. an IP address for `A` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<String>,

    /// The latest version of the record's zone in which its RRSet differs
    /// from the preceding version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrset_version: Option<String>,

    /// The type of DNS record, such as `A` or `CNAME`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtype: Option<String>,

    /// The Time To Live for the record, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain][Record::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [record_hash][Record::record_hash].
    pub fn set_record_hash<T: Into<String>>(mut self, v: T) -> Self {
        self.record_hash = Some(v.into());
        self
    }

    /// Sets the value of [is_protected][Record::is_protected].
    pub fn set_is_protected<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_protected = Some(v.into());
        self
    }

    /// Sets the value of [rdata][Record::rdata].
    pub fn set_rdata<T: Into<String>>(mut self, v: T) -> Self {
        self.rdata = Some(v.into());
        self
    }

    /// Sets the value of [rrset_version][Record::rrset_version].
    pub fn set_rrset_version<T: Into<String>>(mut self, v: T) -> Self {
        self.rrset_version = Some(v.into());
        self
    }

    /// Sets the value of [rtype][Record::rtype].
    pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
        self.rtype = Some(v.into());
        self
    }

    /// Sets the value of [ttl][Record::ttl].
    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }
}

/// A record to create or replace in a RRSet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecordDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RecordDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain][RecordDetails::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [rdata][RecordDetails::rdata].
    pub fn set_rdata<T: Into<String>>(mut self, v: T) -> Self {
        self.rdata = Some(v.into());
        self
    }

    /// Sets the value of [rtype][RecordDetails::rtype].
    pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
        self.rtype = Some(v.into());
        self
    }

    /// Sets the value of [ttl][RecordDetails::ttl].
    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }
}

/// A collection of records with the same domain and type.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RRSet {
    #[serde(deserialize_with = "gaxi::nullable::or_default")]
    pub items: Vec<Record>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RRSet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][RRSet::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Record>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The body of [update_rr_set][crate::client::Dns::update_rr_set].
///
/// The records replace all the existing records in the RRSet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateRRSetDetails {
    #[serde(deserialize_with = "gaxi::nullable::or_default")]
    pub items: Vec<RecordDetails>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateRRSetDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [items][UpdateRRSetDetails::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<RecordDetails>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A DNS steering policy.
///
/// Steering policies answer DNS queries for the domains they are attached to,
/// choosing among their answers with a sequence of rules.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SteeringPolicy {
    /// The OCID of the compartment containing the steering policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The Time To Live for responses from the steering policy, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    /// The OCID of the health check monitor providing health data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_monitor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<SteeringPolicyTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<SteeringPolicyAnswer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SteeringPolicyRule>>,

    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// The OCID of the steering policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<SteeringPolicyLifecycleState>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SteeringPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][SteeringPolicy::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][SteeringPolicy::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [ttl][SteeringPolicy::ttl].
    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    /// Sets the value of [health_check_monitor_id][SteeringPolicy::health_check_monitor_id].
    pub fn set_health_check_monitor_id<T: Into<String>>(mut self, v: T) -> Self {
        self.health_check_monitor_id = Some(v.into());
        self
    }

    /// Sets the value of [template][SteeringPolicy::template].
    pub fn set_template<T: Into<SteeringPolicyTemplate>>(mut self, v: T) -> Self {
        self.template = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][SteeringPolicy::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][SteeringPolicy::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [answers][SteeringPolicy::answers].
    pub fn set_answers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyAnswer>,
    {
        self.answers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [rules][SteeringPolicy::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyRule>,
    {
        self.rules = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [self_link][SteeringPolicy::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [id][SteeringPolicy::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [time_created][SteeringPolicy::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][SteeringPolicy::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<SteeringPolicyLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }
}

impl waiter::Lifecycle for SteeringPolicy {
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(SteeringPolicyLifecycleState::as_str)
    }
}

/// A DNS resource record returned by a steering policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SteeringPolicyAnswer {
    /// A user-friendly name for the answer, unique within the steering policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<String>,

    /// The freeform name of a group of answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,

    /// Disabled answers are never returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SteeringPolicyAnswer {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][SteeringPolicyAnswer::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [rtype][SteeringPolicyAnswer::rtype].
    pub fn set_rtype<T: Into<String>>(mut self, v: T) -> Self {
        self.rtype = Some(v.into());
        self
    }

    /// Sets the value of [rdata][SteeringPolicyAnswer::rdata].
    pub fn set_rdata<T: Into<String>>(mut self, v: T) -> Self {
        self.rdata = Some(v.into());
        self
    }

    /// Sets the value of [pool][SteeringPolicyAnswer::pool].
    pub fn set_pool<T: Into<String>>(mut self, v: T) -> Self {
        self.pool = Some(v.into());
        self
    }

    /// Sets the value of [is_disabled][SteeringPolicyAnswer::is_disabled].
    pub fn set_is_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_disabled = Some(v.into());
        self
    }
}

/// A rule in a steering policy.
///
/// The service defines one rule shape per [RuleType]. This type holds the
/// union of their fields, the fields that do not apply to the rule type are
/// left unset.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SteeringPolicyRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cases: Option<Vec<SteeringPolicyRuleCase>>,

    /// Used by `FILTER`, `WEIGHTED` and `PRIORITY` rules when no case matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_answer_data: Option<Vec<AnswerData>>,

    /// Used by `LIMIT` rules when no case matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_count: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SteeringPolicyRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [rule_type][SteeringPolicyRule::rule_type].
    pub fn set_rule_type<T: Into<RuleType>>(mut self, v: T) -> Self {
        self.rule_type = Some(v.into());
        self
    }

    /// Sets the value of [description][SteeringPolicyRule::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [cases][SteeringPolicyRule::cases].
    pub fn set_cases<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyRuleCase>,
    {
        self.cases = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [default_answer_data][SteeringPolicyRule::default_answer_data].
    pub fn set_default_answer_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnswerData>,
    {
        self.default_answer_data = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [default_count][SteeringPolicyRule::default_count].
    pub fn set_default_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.default_count = Some(v.into());
        self
    }
}

/// A case in a steering policy rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SteeringPolicyRuleCase {
    /// An expression selecting the queries the case applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_data: Option<Vec<AnswerData>>,

    /// Used by `LIMIT` rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SteeringPolicyRuleCase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [case_condition][SteeringPolicyRuleCase::case_condition].
    pub fn set_case_condition<T: Into<String>>(mut self, v: T) -> Self {
        self.case_condition = Some(v.into());
        self
    }

    /// Sets the value of [answer_data][SteeringPolicyRuleCase::answer_data].
    pub fn set_answer_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnswerData>,
    {
        self.answer_data = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [count][SteeringPolicyRuleCase::count].
    pub fn set_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }
}

/// Selects answers and assigns them a value in a rule case.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnswerData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_condition: Option<String>,

    /// The rank, weight, or other value assigned to the matching answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,

    /// Used by `FILTER` rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_keep: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AnswerData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [answer_condition][AnswerData::answer_condition].
    pub fn set_answer_condition<T: Into<String>>(mut self, v: T) -> Self {
        self.answer_condition = Some(v.into());
        self
    }

    /// Sets the value of [value][AnswerData::value].
    pub fn set_value<T: Into<i32>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [should_keep][AnswerData::should_keep].
    pub fn set_should_keep<T: Into<bool>>(mut self, v: T) -> Self {
        self.should_keep = Some(v.into());
        self
    }
}

/// The body of [create_steering_policy][crate::client::Dns::create_steering_policy].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateSteeringPolicyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_monitor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<SteeringPolicyTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<SteeringPolicyAnswer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SteeringPolicyRule>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateSteeringPolicyDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][CreateSteeringPolicyDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][CreateSteeringPolicyDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [ttl][CreateSteeringPolicyDetails::ttl].
    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    /// Sets the value of [health_check_monitor_id][CreateSteeringPolicyDetails::health_check_monitor_id].
    pub fn set_health_check_monitor_id<T: Into<String>>(mut self, v: T) -> Self {
        self.health_check_monitor_id = Some(v.into());
        self
    }

    /// Sets the value of [template][CreateSteeringPolicyDetails::template].
    pub fn set_template<T: Into<SteeringPolicyTemplate>>(mut self, v: T) -> Self {
        self.template = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][CreateSteeringPolicyDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][CreateSteeringPolicyDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [answers][CreateSteeringPolicyDetails::answers].
    pub fn set_answers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyAnswer>,
    {
        self.answers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [rules][CreateSteeringPolicyDetails::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyRule>,
    {
        self.rules = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The body of [update_steering_policy][crate::client::Dns::update_steering_policy].
///
/// Unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSteeringPolicyDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_monitor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<SteeringPolicyTemplate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<SteeringPolicyAnswer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<SteeringPolicyRule>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateSteeringPolicyDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][UpdateSteeringPolicyDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [ttl][UpdateSteeringPolicyDetails::ttl].
    pub fn set_ttl<T: Into<i32>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    /// Sets the value of [health_check_monitor_id][UpdateSteeringPolicyDetails::health_check_monitor_id].
    pub fn set_health_check_monitor_id<T: Into<String>>(mut self, v: T) -> Self {
        self.health_check_monitor_id = Some(v.into());
        self
    }

    /// Sets the value of [template][UpdateSteeringPolicyDetails::template].
    pub fn set_template<T: Into<SteeringPolicyTemplate>>(mut self, v: T) -> Self {
        self.template = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][UpdateSteeringPolicyDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][UpdateSteeringPolicyDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [answers][UpdateSteeringPolicyDetails::answers].
    pub fn set_answers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyAnswer>,
    {
        self.answers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [rules][UpdateSteeringPolicyDetails::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SteeringPolicyRule>,
    {
        self.rules = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Attaches a steering policy to a domain in a zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SteeringPolicyAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_policy_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// The attached domain within the attached zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The record types covered by the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtypes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<SteeringPolicyAttachmentLifecycleState>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SteeringPolicyAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [steering_policy_id][SteeringPolicyAttachment::steering_policy_id].
    pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.steering_policy_id = Some(v.into());
        self
    }

    /// Sets the value of [zone_id][SteeringPolicyAttachment::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = Some(v.into());
        self
    }

    /// Sets the value of [domain_name][SteeringPolicyAttachment::domain_name].
    pub fn set_domain_name<T: Into<String>>(mut self, v: T) -> Self {
        self.domain_name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][SteeringPolicyAttachment::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [rtypes][SteeringPolicyAttachment::rtypes].
    pub fn set_rtypes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.rtypes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [compartment_id][SteeringPolicyAttachment::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [self_link][SteeringPolicyAttachment::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [id][SteeringPolicyAttachment::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [time_created][SteeringPolicyAttachment::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][SteeringPolicyAttachment::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<SteeringPolicyAttachmentLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }
}

impl waiter::Lifecycle for SteeringPolicyAttachment {
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state
            .as_ref()
            .map(SteeringPolicyAttachmentLifecycleState::as_str)
    }
}

/// The body of [create_steering_policy_attachment][crate::client::Dns::create_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateSteeringPolicyAttachmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_policy_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateSteeringPolicyAttachmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [steering_policy_id][CreateSteeringPolicyAttachmentDetails::steering_policy_id].
    pub fn set_steering_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.steering_policy_id = Some(v.into());
        self
    }

    /// Sets the value of [zone_id][CreateSteeringPolicyAttachmentDetails::zone_id].
    pub fn set_zone_id<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_id = Some(v.into());
        self
    }

    /// Sets the value of [domain_name][CreateSteeringPolicyAttachmentDetails::domain_name].
    pub fn set_domain_name<T: Into<String>>(mut self, v: T) -> Self {
        self.domain_name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][CreateSteeringPolicyAttachmentDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }
}

/// The body of [update_steering_policy_attachment][crate::client::Dns::update_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSteeringPolicyAttachmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateSteeringPolicyAttachmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][UpdateSteeringPolicyAttachmentDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }
}

// Request messages. These types are not serialized, the transport maps each
// field to a path parameter, a query parameter, a header, or the body.

/// The request for [list_zones][crate::client::Dns::list_zones].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListZonesRequest {
    /// The OCID of the compartment. Required.
    pub compartment_id: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    /// Only zones with this exact name.
    pub name: Option<String>,
    /// Only zones whose name contains this value.
    pub name_contains: Option<String>,
    pub zone_type: Option<ZoneType>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    /// Only zones created after this RFC 3339 timestamp.
    pub time_created_greater_than_or_equal_to: Option<String>,
    /// Only zones created before this RFC 3339 timestamp.
    pub time_created_less_than: Option<String>,
    pub lifecycle_state: Option<ZoneLifecycleState>,
    pub sort_by: Option<ListZonesSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_zone][crate::client::Dns::get_zone].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetZoneRequest {
    /// The name or OCID of the zone. Required.
    pub zone_name_or_id: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [create_zone][crate::client::Dns::create_zone].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateZoneRequest {
    /// Required.
    pub body: Option<CreateZoneDetails>,
    /// The compartment to create the zone in, overrides the body value.
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [update_zone][crate::client::Dns::update_zone].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateZoneRequest {
    /// Required.
    pub zone_name_or_id: Option<String>,
    /// Required.
    pub body: Option<UpdateZoneDetails>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [delete_zone][crate::client::Dns::delete_zone].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteZoneRequest {
    /// Required.
    pub zone_name_or_id: Option<String>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_rr_set][crate::client::Dns::get_rr_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRRSetRequest {
    /// Required.
    pub zone_name_or_id: Option<String>,
    /// Required.
    pub domain: Option<String>,
    /// Required.
    pub rtype: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    /// The version of the zone to read the records from.
    pub zone_version: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [update_rr_set][crate::client::Dns::update_rr_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateRRSetRequest {
    /// Required.
    pub zone_name_or_id: Option<String>,
    /// Required.
    pub domain: Option<String>,
    /// Required.
    pub rtype: Option<String>,
    /// Required.
    pub body: Option<UpdateRRSetDetails>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [delete_rr_set][crate::client::Dns::delete_rr_set].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteRRSetRequest {
    /// Required.
    pub zone_name_or_id: Option<String>,
    /// Required.
    pub domain: Option<String>,
    /// Required.
    pub rtype: Option<String>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub compartment_id: Option<String>,
    pub scope: Option<Scope>,
    pub view_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [list_steering_policies][crate::client::Dns::list_steering_policies].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSteeringPoliciesRequest {
    /// Required.
    pub compartment_id: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub display_name_contains: Option<String>,
    pub health_check_monitor_id: Option<String>,
    pub template: Option<SteeringPolicyTemplate>,
    pub lifecycle_state: Option<SteeringPolicyLifecycleState>,
    pub sort_by: Option<ListSteeringPoliciesSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_steering_policy][crate::client::Dns::get_steering_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSteeringPolicyRequest {
    /// Required.
    pub steering_policy_id: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [create_steering_policy][crate::client::Dns::create_steering_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateSteeringPolicyRequest {
    /// Required.
    pub body: Option<CreateSteeringPolicyDetails>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [update_steering_policy][crate::client::Dns::update_steering_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateSteeringPolicyRequest {
    /// Required.
    pub steering_policy_id: Option<String>,
    /// Required.
    pub body: Option<UpdateSteeringPolicyDetails>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [delete_steering_policy][crate::client::Dns::delete_steering_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSteeringPolicyRequest {
    /// Required.
    pub steering_policy_id: Option<String>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [list_steering_policy_attachments][crate::client::Dns::list_steering_policy_attachments].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSteeringPolicyAttachmentsRequest {
    /// Required.
    pub compartment_id: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<String>,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub steering_policy_id: Option<String>,
    pub zone_id: Option<String>,
    pub domain: Option<String>,
    pub domain_contains: Option<String>,
    pub lifecycle_state: Option<SteeringPolicyAttachmentLifecycleState>,
    pub sort_by: Option<ListSteeringPolicyAttachmentsSortBy>,
    pub sort_order: Option<SortOrder>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_steering_policy_attachment][crate::client::Dns::get_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSteeringPolicyAttachmentRequest {
    /// Required.
    pub steering_policy_attachment_id: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [create_steering_policy_attachment][crate::client::Dns::create_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateSteeringPolicyAttachmentRequest {
    /// Required.
    pub body: Option<CreateSteeringPolicyAttachmentDetails>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [update_steering_policy_attachment][crate::client::Dns::update_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateSteeringPolicyAttachmentRequest {
    /// Required.
    pub steering_policy_attachment_id: Option<String>,
    /// Required.
    pub body: Option<UpdateSteeringPolicyAttachmentDetails>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [delete_steering_policy_attachment][crate::client::Dns::delete_steering_policy_attachment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSteeringPolicyAttachmentRequest {
    /// Required.
    pub steering_policy_attachment_id: Option<String>,
    pub if_match: Option<String>,
    pub if_unmodified_since: Option<String>,
    pub opc_request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaxi::enums::WireEnum;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use waiter::Lifecycle;

    #[test]
    fn zone_roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "name": "example.com",
            "zoneType": "PRIMARY",
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "scope": "GLOBAL",
            "freeformTags": {"team": "dns"},
            "definedTags": {"ops": {"cost-center": 42}},
            "self": "https://dns.us-ashburn-1.oraclecloud.com/20180115/zones/example.com",
            "id": "ocid1.dns-zone.oc1..aaaa",
            "timeCreated": "2024-05-01T12:30:45.123Z",
            "version": "7",
            "serial": 7,
            "lifecycleState": "ACTIVE",
            "isProtected": false,
            "nameservers": [{"hostname": "ns1.p68.dns.oraclecloud.net"}],
            "dnssecState": "DISABLED",
        });
        let zone = serde_json::from_value::<Zone>(input.clone())?;
        assert_eq!(zone.name.as_deref(), Some("example.com"));
        assert_eq!(zone.zone_type, Some(ZoneType::Primary));
        assert_eq!(zone.serial, Some(7));
        assert_eq!(zone.is_protected, Some(false));
        assert_eq!(zone.lifecycle_state(), Some("ACTIVE"));
        assert_eq!(
            zone.nameservers,
            Some(vec![Nameserver::new().set_hostname("ns1.p68.dns.oraclecloud.net")])
        );
        let output = serde_json::to_value(&zone)?;
        assert_eq!(output, input);
        Ok(())
    }

    #[test]
    fn zone_unknown_enum() -> anyhow::Result<()> {
        let input = json!({"name": "example.com", "lifecycleState": "MIGRATING"});
        let zone = serde_json::from_value::<Zone>(input.clone())?;
        let state = zone.lifecycle_state.clone();
        assert_eq!(state, Some(ZoneLifecycleState::UnknownValue("MIGRATING".into())));
        assert!(state.as_ref().is_some_and(WireEnum::is_unknown));
        assert_eq!(zone.lifecycle_state(), Some("MIGRATING"));
        assert_eq!(serde_json::to_value(&zone)?, input);
        Ok(())
    }

    #[test]
    fn zone_setters() {
        let zone = Zone::new()
            .set_name("example.com")
            .set_zone_type(ZoneType::Secondary)
            .set_compartment_id("ocid1.compartment.oc1..aaaa")
            .set_external_masters([ExternalMaster::new().set_address("192.0.2.1").set_port(53)])
            .set_freeform_tags([("team", "dns")])
            .set_lifecycle_state(ZoneLifecycleState::Creating);
        assert_eq!(zone.zone_type, Some(ZoneType::Secondary));
        let masters = zone.external_masters.as_deref().unwrap_or_default();
        assert_eq!(masters[0].port, Some(53));
        let tags = zone.freeform_tags.as_ref();
        assert_eq!(tags.and_then(|t| t.get("team")).map(String::as_str), Some("dns"));
        assert_eq!(zone.lifecycle_state(), Some("CREATING"));
    }

    #[test]
    fn missing_lifecycle_state() {
        assert_eq!(Zone::new().lifecycle_state(), None);
        assert_eq!(SteeringPolicy::new().lifecycle_state(), None);
        assert_eq!(SteeringPolicyAttachment::new().lifecycle_state(), None);
    }

    #[test]
    fn steering_policy_roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "displayName": "failover",
            "ttl": 30,
            "template": "FAILOVER",
            "answers": [
                {"name": "primary", "rtype": "A", "rdata": "192.0.2.1", "pool": "p1", "isDisabled": false},
                {"name": "secondary", "rtype": "A", "rdata": "192.0.2.2", "pool": "p2"},
            ],
            "rules": [
                {"ruleType": "FILTER", "defaultAnswerData": [{"answerCondition": "answer.isDisabled != true", "shouldKeep": true}]},
                {"ruleType": "HEALTH"},
                {"ruleType": "PRIORITY", "defaultAnswerData": [{"answerCondition": "answer.pool == 'p1'", "value": 1}]},
                {"ruleType": "LIMIT", "defaultCount": 1},
            ],
            "self": "https://dns.us-ashburn-1.oraclecloud.com/20180115/steeringPolicies/ocid1.dns-steering-policy.oc1..aaaa",
            "id": "ocid1.dns-steering-policy.oc1..aaaa",
            "timeCreated": "2024-05-01T12:30:45Z",
            "lifecycleState": "CREATING",
        });
        let policy = serde_json::from_value::<SteeringPolicy>(input.clone())?;
        assert_eq!(policy.template, Some(SteeringPolicyTemplate::Failover));
        let rules = policy.rules.as_deref().unwrap_or_default();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[3].rule_type, Some(RuleType::Limit));
        assert_eq!(rules[3].default_count, Some(1));
        assert_eq!(policy.lifecycle_state(), Some("CREATING"));
        assert_eq!(serde_json::to_value(&policy)?, input);
        Ok(())
    }

    #[test]
    fn attachment_roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "steeringPolicyId": "ocid1.dns-steering-policy.oc1..aaaa",
            "zoneId": "ocid1.dns-zone.oc1..aaaa",
            "domainName": "www.example.com",
            "displayName": "www",
            "rtypes": ["A", "AAAA", "CNAME"],
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "id": "ocid1.dns-steering-policy-attachment.oc1..aaaa",
            "lifecycleState": "ACTIVE",
        });
        let attachment = serde_json::from_value::<SteeringPolicyAttachment>(input.clone())?;
        assert_eq!(attachment.rtypes.as_deref().unwrap_or_default(), ["A", "AAAA", "CNAME"]);
        assert_eq!(attachment.lifecycle_state(), Some("ACTIVE"));
        assert_eq!(serde_json::to_value(&attachment)?, input);
        Ok(())
    }

    #[test]
    fn rrset_roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "items": [{
                "domain": "www.example.com",
                "recordHash": "abc123",
                "isProtected": false,
                "rdata": "192.0.2.1",
                "rrsetVersion": "3",
                "rtype": "A",
                "ttl": 300,
            }]
        });
        let rrset = serde_json::from_value::<RRSet>(input.clone())?;
        assert_eq!(rrset.items[0].ttl, Some(300));
        assert_eq!(serde_json::to_value(&rrset)?, input);
        Ok(())
    }

    #[test]
    fn create_details_serialize() -> anyhow::Result<()> {
        let details = CreateZoneDetails::new()
            .set_name("example.com")
            .set_zone_type(ZoneType::Primary)
            .set_compartment_id("ocid1.compartment.oc1..aaaa");
        let got = serde_json::to_value(&details)?;
        let want = json!({
            "name": "example.com",
            "zoneType": "PRIMARY",
            "compartmentId": "ocid1.compartment.oc1..aaaa",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(ListZonesSortBy::Name, "name")]
    #[test_case(ListZonesSortBy::ZoneType, "zoneType")]
    #[test_case(ListZonesSortBy::TimeCreated, "timeCreated")]
    fn sort_by_wire_names(value: ListZonesSortBy, want: &str) {
        assert_eq!(value.as_str(), want);
        assert_eq!(ListZonesSortBy::from(want), value);
    }

    #[test]
    fn null_fields() -> anyhow::Result<()> {
        let input = json!({
            "id": "ocid1.dns-zone.oc1..aaaa",
            "name": null,
            "externalMasters": null,
            "freeformTags": null,
            "definedTags": null,
            "serial": null,
        });
        let zone = serde_json::from_value::<Zone>(input)?;
        assert_eq!(zone, Zone::new().set_id("ocid1.dns-zone.oc1..aaaa"));
        assert_eq!(serde_json::to_value(&zone)?, json!({"id": "ocid1.dns-zone.oc1..aaaa"}));

        let rrset = serde_json::from_value::<RRSet>(json!({"items": null}))?;
        assert_eq!(rrset, RRSet::default());
        Ok(())
    }

    #[test]
    fn explicit_empty_values() -> anyhow::Result<()> {
        let input = json!({
            "id": "ocid1.dns-zone.oc1..aaaa",
            "name": "",
            "externalMasters": [],
            "freeformTags": {},
            "lifecycleState": "ACTIVE",
        });
        let zone = serde_json::from_value::<Zone>(input.clone())?;
        assert_eq!(zone.name.as_deref(), Some(""));
        assert_eq!(zone.external_masters, Some(Vec::new()));
        assert_eq!(serde_json::to_value(&zone)?, input);

        let input = json!({"items": []});
        let details = serde_json::from_value::<UpdateRRSetDetails>(input.clone())?;
        assert_eq!(serde_json::to_value(&details)?, input);
        Ok(())
    }

    #[test]
    fn empty_object() -> anyhow::Result<()> {
        let zone = serde_json::from_value::<Zone>(json!({}))?;
        assert_eq!(zone, Zone::default());
        assert_eq!(serde_json::to_value(&zone)?, json!({}));
        Ok(())
    }
}
