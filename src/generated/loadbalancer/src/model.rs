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
    /// The lifecycle state of a [LoadBalancer].
    LoadBalancerLifecycleState {
        Creating => "CREATING",
        Failed => "FAILED",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

gaxi::wire_enum! {
    /// The lifecycle state of a [WorkRequest].
    WorkRequestLifecycleState {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
    }
}

gaxi::wire_enum! {
    /// The IP version of the load balancer addresses.
    IpVersion {
        Ipv4 => "IPV4",
        Ipv4AndIpv6 => "IPV4_AND_IPV6",
    }
}

gaxi::wire_enum! {
    /// The sort field for
    /// [list_load_balancers][crate::client::LoadBalancer::list_load_balancers].
    ListLoadBalancersSortBy {
        TimeCreated => "TIMECREATED",
        DisplayName => "DISPLAYNAME",
    }
}

gaxi::wire_enum! {
    /// The sort order for list operations.
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

/// An IP address assigned to a load balancer.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Whether the address is reachable from the internet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IpAddress {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ip_address][IpAddress::ip_address].
    pub fn set_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.ip_address = Some(v.into());
        self
    }

    /// Sets the value of [is_public][IpAddress::is_public].
    pub fn set_is_public<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_public = Some(v.into());
        self
    }
}

/// The bandwidth range of a flexible load balancer shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ShapeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_bandwidth_in_mbps: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bandwidth_in_mbps: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ShapeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [minimum_bandwidth_in_mbps][ShapeDetails::minimum_bandwidth_in_mbps].
    pub fn set_minimum_bandwidth_in_mbps<T: Into<i32>>(mut self, v: T) -> Self {
        self.minimum_bandwidth_in_mbps = Some(v.into());
        self
    }

    /// Sets the value of [maximum_bandwidth_in_mbps][ShapeDetails::maximum_bandwidth_in_mbps].
    pub fn set_maximum_bandwidth_in_mbps<T: Into<i32>>(mut self, v: T) -> Self {
        self.maximum_bandwidth_in_mbps = Some(v.into());
        self
    }
}

/// The health check policy of a backend set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HealthChecker {
    /// The protocol used for health checks, `HTTP` or `TCP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// The backend port to check. Defaults to the port of each backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,

    /// The status code a healthy backend returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_code: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_in_millis: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_millis: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl HealthChecker {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [protocol][HealthChecker::protocol].
    pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.protocol = Some(v.into());
        self
    }

    /// Sets the value of [port][HealthChecker::port].
    pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }

    /// Sets the value of [url_path][HealthChecker::url_path].
    pub fn set_url_path<T: Into<String>>(mut self, v: T) -> Self {
        self.url_path = Some(v.into());
        self
    }

    /// Sets the value of [return_code][HealthChecker::return_code].
    pub fn set_return_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.return_code = Some(v.into());
        self
    }

    /// Sets the value of [interval_in_millis][HealthChecker::interval_in_millis].
    pub fn set_interval_in_millis<T: Into<i32>>(mut self, v: T) -> Self {
        self.interval_in_millis = Some(v.into());
        self
    }

    /// Sets the value of [timeout_in_millis][HealthChecker::timeout_in_millis].
    pub fn set_timeout_in_millis<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout_in_millis = Some(v.into());
        self
    }

    /// Sets the value of [retries][HealthChecker::retries].
    pub fn set_retries<T: Into<i32>>(mut self, v: T) -> Self {
        self.retries = Some(v.into());
        self
    }
}

/// A backend server, a member of a [BackendSet].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Backend {
    /// The name of the backend, `{ip_address}:{port}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The share of the traffic for this backend, relative to the others.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drain: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Backend {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Backend::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [ip_address][Backend::ip_address].
    pub fn set_ip_address<T: Into<String>>(mut self, v: T) -> Self {
        self.ip_address = Some(v.into());
        self
    }

    /// Sets the value of [port][Backend::port].
    pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }

    /// Sets the value of [weight][Backend::weight].
    pub fn set_weight<T: Into<i32>>(mut self, v: T) -> Self {
        self.weight = Some(v.into());
        self
    }

    /// Sets the value of [backup][Backend::backup].
    pub fn set_backup<T: Into<bool>>(mut self, v: T) -> Self {
        self.backup = Some(v.into());
        self
    }

    /// Sets the value of [drain][Backend::drain].
    pub fn set_drain<T: Into<bool>>(mut self, v: T) -> Self {
        self.drain = Some(v.into());
        self
    }

    /// Sets the value of [offline][Backend::offline].
    pub fn set_offline<T: Into<bool>>(mut self, v: T) -> Self {
        self.offline = Some(v.into());
        self
    }
}

/// A group of backend servers with a load balancing policy and a health check.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BackendSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The load balancing policy, such as `ROUND_ROBIN` or `LEAST_CONNECTIONS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backends: Option<Vec<Backend>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_checker: Option<HealthChecker>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BackendSet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][BackendSet::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [policy][BackendSet::policy].
    pub fn set_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.policy = Some(v.into());
        self
    }

    /// Sets the value of [backends][BackendSet::backends].
    pub fn set_backends<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Backend>,
    {
        self.backends = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [health_checker][BackendSet::health_checker].
    pub fn set_health_checker<T: Into<HealthChecker>>(mut self, v: T) -> Self {
        self.health_checker = Some(v.into());
        self
    }
}

/// A listener, accepting traffic on a port and forwarding it to a backend set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Listener {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_backend_set_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The protocol of the listener, `HTTP`, `HTTP2`, or `TCP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Listener {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][Listener::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [default_backend_set_name][Listener::default_backend_set_name].
    pub fn set_default_backend_set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.default_backend_set_name = Some(v.into());
        self
    }

    /// Sets the value of [port][Listener::port].
    pub fn set_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.port = Some(v.into());
        self
    }

    /// Sets the value of [protocol][Listener::protocol].
    pub fn set_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.protocol = Some(v.into());
        self
    }
}

/// A load balancer.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LoadBalancer {
    /// The OCID of the load balancer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LoadBalancerLifecycleState>,

    /// The RFC 3339 creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<IpAddress>>,

    /// The shape, `flexible` for new load balancers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_details: Option<ShapeDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mode: Option<IpVersion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_security_group_ids: Option<Vec<String>>,

    /// The listeners, keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<HashMap<String, Listener>>,

    /// The backend sets, keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_sets: Option<HashMap<String, BackendSet>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LoadBalancer {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][LoadBalancer::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][LoadBalancer::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][LoadBalancer::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][LoadBalancer::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<LoadBalancerLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [time_created][LoadBalancer::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [ip_addresses][LoadBalancer::ip_addresses].
    pub fn set_ip_addresses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<IpAddress>,
    {
        self.ip_addresses = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [shape_name][LoadBalancer::shape_name].
    pub fn set_shape_name<T: Into<String>>(mut self, v: T) -> Self {
        self.shape_name = Some(v.into());
        self
    }

    /// Sets the value of [shape_details][LoadBalancer::shape_details].
    pub fn set_shape_details<T: Into<ShapeDetails>>(mut self, v: T) -> Self {
        self.shape_details = Some(v.into());
        self
    }

    /// Sets the value of [is_private][LoadBalancer::is_private].
    pub fn set_is_private<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_private = Some(v.into());
        self
    }

    /// Sets the value of [ip_mode][LoadBalancer::ip_mode].
    pub fn set_ip_mode<T: Into<IpVersion>>(mut self, v: T) -> Self {
        self.ip_mode = Some(v.into());
        self
    }

    /// Sets the value of [subnet_ids][LoadBalancer::subnet_ids].
    pub fn set_subnet_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subnet_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [network_security_group_ids][LoadBalancer::network_security_group_ids].
    pub fn set_network_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.network_security_group_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [listeners][LoadBalancer::listeners].
    pub fn set_listeners<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Listener>,
    {
        self.listeners = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [backend_sets][LoadBalancer::backend_sets].
    pub fn set_backend_sets<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<BackendSet>,
    {
        self.backend_sets = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [freeform_tags][LoadBalancer::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][LoadBalancer::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }
}

impl waiter::Lifecycle for LoadBalancer {
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_ref().map(LoadBalancerLifecycleState::as_str)
    }
}

/// The body of
/// [create_load_balancer][crate::client::LoadBalancer::create_load_balancer].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLoadBalancerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_name: Option<String>,

    /// Required with the `flexible` shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_details: Option<ShapeDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mode: Option<IpVersion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<HashMap<String, Listener>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_sets: Option<HashMap<String, BackendSet>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateLoadBalancerDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [compartment_id][CreateLoadBalancerDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [display_name][CreateLoadBalancerDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [shape_name][CreateLoadBalancerDetails::shape_name].
    pub fn set_shape_name<T: Into<String>>(mut self, v: T) -> Self {
        self.shape_name = Some(v.into());
        self
    }

    /// Sets the value of [shape_details][CreateLoadBalancerDetails::shape_details].
    pub fn set_shape_details<T: Into<ShapeDetails>>(mut self, v: T) -> Self {
        self.shape_details = Some(v.into());
        self
    }

    /// Sets the value of [is_private][CreateLoadBalancerDetails::is_private].
    pub fn set_is_private<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_private = Some(v.into());
        self
    }

    /// Sets the value of [ip_mode][CreateLoadBalancerDetails::ip_mode].
    pub fn set_ip_mode<T: Into<IpVersion>>(mut self, v: T) -> Self {
        self.ip_mode = Some(v.into());
        self
    }

    /// Sets the value of [subnet_ids][CreateLoadBalancerDetails::subnet_ids].
    pub fn set_subnet_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.subnet_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [network_security_group_ids][CreateLoadBalancerDetails::network_security_group_ids].
    pub fn set_network_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.network_security_group_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [listeners][CreateLoadBalancerDetails::listeners].
    pub fn set_listeners<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Listener>,
    {
        self.listeners = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [backend_sets][CreateLoadBalancerDetails::backend_sets].
    pub fn set_backend_sets<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<BackendSet>,
    {
        self.backend_sets = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [freeform_tags][CreateLoadBalancerDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][CreateLoadBalancerDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }
}

/// The body of
/// [update_load_balancer][crate::client::LoadBalancer::update_load_balancer].
/// Only the fields with a value are changed.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLoadBalancerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateLoadBalancerDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][UpdateLoadBalancerDetails::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][UpdateLoadBalancerDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][UpdateLoadBalancerDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }
}

/// An error reported by a failed [WorkRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WorkRequestError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [error_code][WorkRequestError::error_code].
    pub fn set_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.error_code = Some(v.into());
        self
    }

    /// Sets the value of [message][WorkRequestError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// An asynchronous operation on a load balancer.
///
/// The mutating operations of the service return the OCID of a work request in
/// the `opc-work-request-id` header. The work request tracks the progress of
/// the change.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_id: Option<String>,

    /// The type of the operation, such as `CreateLoadBalancer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<WorkRequestLifecycleState>,

    /// A human-readable description of the progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_accepted: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<WorkRequestError>>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][WorkRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [load_balancer_id][WorkRequest::load_balancer_id].
    pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.load_balancer_id = Some(v.into());
        self
    }

    /// Sets the value of [r#type][WorkRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_state][WorkRequest::lifecycle_state].
    pub fn set_lifecycle_state<T: Into<WorkRequestLifecycleState>>(mut self, v: T) -> Self {
        self.lifecycle_state = Some(v.into());
        self
    }

    /// Sets the value of [message][WorkRequest::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [time_accepted][WorkRequest::time_accepted].
    pub fn set_time_accepted<T: Into<String>>(mut self, v: T) -> Self {
        self.time_accepted = Some(v.into());
        self
    }

    /// Sets the value of [time_finished][WorkRequest::time_finished].
    pub fn set_time_finished<T: Into<String>>(mut self, v: T) -> Self {
        self.time_finished = Some(v.into());
        self
    }

    /// Sets the value of [error_details][WorkRequest::error_details].
    pub fn set_error_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WorkRequestError>,
    {
        self.error_details = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl waiter::Lifecycle for WorkRequest {
    fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_ref().map(WorkRequestLifecycleState::as_str)
    }
}

// Request messages. These types are not serialized, the transport maps each
// field to a path parameter, a query parameter, a header, or the body.

/// The request for
/// [list_load_balancers][crate::client::LoadBalancer::list_load_balancers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLoadBalancersRequest {
    /// The OCID of the compartment. Required.
    pub compartment_id: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    /// The level of detail, `full` or `simple`.
    pub detail: Option<String>,
    pub sort_by: Option<ListLoadBalancersSortBy>,
    pub sort_order: Option<SortOrder>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LoadBalancerLifecycleState>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [get_load_balancer][crate::client::LoadBalancer::get_load_balancer].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLoadBalancerRequest {
    /// The OCID of the load balancer. Required.
    pub load_balancer_id: Option<String>,
    pub if_none_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [create_load_balancer][crate::client::LoadBalancer::create_load_balancer].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLoadBalancerRequest {
    /// Required.
    pub body: Option<CreateLoadBalancerDetails>,
    /// A token to retry the request safely. Generated if not set.
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [update_load_balancer][crate::client::LoadBalancer::update_load_balancer].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLoadBalancerRequest {
    /// The OCID of the load balancer. Required.
    pub load_balancer_id: Option<String>,
    /// Required.
    pub body: Option<UpdateLoadBalancerDetails>,
    pub if_match: Option<String>,
    /// A token to retry the request safely. Generated if not set.
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [delete_load_balancer][crate::client::LoadBalancer::delete_load_balancer].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLoadBalancerRequest {
    /// The OCID of the load balancer. Required.
    pub load_balancer_id: Option<String>,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [get_work_request][crate::client::LoadBalancer::get_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetWorkRequestRequest {
    /// The OCID of the work request. Required.
    pub work_request_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [list_work_requests][crate::client::LoadBalancer::list_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkRequestsRequest {
    /// The OCID of the load balancer. Required.
    pub load_balancer_id: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use waiter::Lifecycle;

    #[test]
    fn load_balancer_roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "id": "ocid1.loadbalancer.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "displayName": "web",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2024-05-01T10:00:00.000Z",
            "ipAddresses": [{"ipAddress": "192.0.2.10", "isPublic": true}],
            "shapeName": "flexible",
            "shapeDetails": {"minimumBandwidthInMbps": 10, "maximumBandwidthInMbps": 100},
            "subnetIds": ["ocid1.subnet.oc1..cccc"],
            "listeners": {
                "http": {"name": "http", "defaultBackendSetName": "pool", "port": 80, "protocol": "HTTP"},
            },
            "backendSets": {
                "pool": {
                    "name": "pool",
                    "policy": "ROUND_ROBIN",
                    "backends": [{"name": "10.0.0.3:8080", "ipAddress": "10.0.0.3", "port": 8080, "weight": 1}],
                    "healthChecker": {"protocol": "HTTP", "urlPath": "/healthz", "returnCode": 200},
                },
            },
            "freeformTags": {"env": "prod"},
            "systemTags": {"orcl-cloud": {"free-tier-retained": "true"}},
        });
        let lb = serde_json::from_value::<LoadBalancer>(input.clone())?;
        assert_eq!(lb.lifecycle_state(), Some("ACTIVE"));
        let ip_addresses = lb.ip_addresses.as_deref().unwrap_or_default();
        assert_eq!(ip_addresses[0].is_public, Some(true));
        let listener = lb.listeners.as_ref().and_then(|l| l.get("http"));
        assert_eq!(listener.and_then(|l| l.port), Some(80));
        let pool = lb.backend_sets.as_ref().and_then(|b| b.get("pool"));
        let backends = pool.and_then(|p| p.backends.as_deref()).unwrap_or_default();
        assert_eq!(backends[0].ip_address.as_deref(), Some("10.0.0.3"));
        assert_eq!(serde_json::to_value(&lb)?, input);
        Ok(())
    }

    #[test]
    fn work_request() -> anyhow::Result<()> {
        let wr = serde_json::from_value::<WorkRequest>(json!({
            "id": "ocid1.loadbalancerworkrequest.oc1..dddd",
            "loadBalancerId": "ocid1.loadbalancer.oc1..aaaa",
            "type": "CreateLoadBalancer",
            "lifecycleState": "FAILED",
            "message": "failed",
            "timeAccepted": "2024-05-01T10:00:00.000Z",
            "errorDetails": [{"errorCode": "BAD_INPUT", "message": "invalid subnet"}],
        }))?;
        assert_eq!(wr.r#type.as_deref(), Some("CreateLoadBalancer"));
        assert_eq!(wr.lifecycle_state, Some(WorkRequestLifecycleState::Failed));
        let errors = wr.error_details.as_deref().unwrap_or_default();
        assert_eq!(errors[0].error_code.as_deref(), Some("BAD_INPUT"));
        assert_eq!(wr.time_finished, None);
        Ok(())
    }

    #[test]
    fn work_request_unknown_state() -> anyhow::Result<()> {
        let wr = serde_json::from_value::<WorkRequest>(json!({"lifecycleState": "PAUSED"}))?;
        assert_eq!(
            wr.lifecycle_state,
            Some(WorkRequestLifecycleState::UnknownValue("PAUSED".into()))
        );
        assert_eq!(wr.lifecycle_state(), Some("PAUSED"));
        Ok(())
    }

    #[test]
    fn null_fields() -> anyhow::Result<()> {
        let lb = serde_json::from_value::<LoadBalancer>(json!({
            "id": "ocid1.loadbalancer.oc1..aaaa",
            "displayName": null,
            "listeners": null,
            "backendSets": null,
            "freeformTags": null,
            "definedTags": null,
        }))?;
        assert_eq!(lb, LoadBalancer::new().set_id("ocid1.loadbalancer.oc1..aaaa"));

        let wr = serde_json::from_value::<WorkRequest>(json!({"errorDetails": null, "type": null}))?;
        assert_eq!(wr, WorkRequest::default());
        Ok(())
    }

    #[test]
    fn explicit_empty_values() -> anyhow::Result<()> {
        let input = json!({
            "id": "ocid1.loadbalancer.oc1..aaaa",
            "displayName": "",
            "subnetIds": [],
            "listeners": {},
            "lifecycleState": "ACTIVE",
        });
        let lb = serde_json::from_value::<LoadBalancer>(input.clone())?;
        assert_eq!(lb.display_name.as_deref(), Some(""));
        assert_eq!(lb.listeners, Some(HashMap::new()));
        assert_eq!(serde_json::to_value(&lb)?, input);
        Ok(())
    }

    #[test]
    fn create_details() -> anyhow::Result<()> {
        let details = CreateLoadBalancerDetails::new()
            .set_compartment_id("ocid1.compartment.oc1..bbbb")
            .set_display_name("web")
            .set_shape_name("flexible")
            .set_subnet_ids(["ocid1.subnet.oc1..cccc"])
            .set_listeners([(
                "http",
                Listener::new()
                    .set_name("http")
                    .set_default_backend_set_name("pool")
                    .set_port(80)
                    .set_protocol("HTTP"),
            )]);
        assert_eq!(
            serde_json::to_value(&details)?,
            json!({
                "compartmentId": "ocid1.compartment.oc1..bbbb",
                "displayName": "web",
                "shapeName": "flexible",
                "subnetIds": ["ocid1.subnet.oc1..cccc"],
                "listeners": {
                    "http": {"name": "http", "defaultBackendSetName": "pool", "port": 80, "protocol": "HTTP"},
                },
            })
        );
        Ok(())
    }
}
