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
    /// The type of public access enabled on a bucket.
    PublicAccessType {
        NoPublicAccess => "NoPublicAccess",
        ObjectRead => "ObjectRead",
        ObjectReadWithoutList => "ObjectReadWithoutList",
    }
}

gaxi::wire_enum! {
    /// The storage tier of a bucket, immutable after creation.
    BucketStorageTier {
        Standard => "Standard",
        Archive => "Archive",
    }
}

gaxi::wire_enum! {
    /// The versioning status of a bucket.
    Versioning {
        Enabled => "Enabled",
        Suspended => "Suspended",
        Disabled => "Disabled",
    }
}

gaxi::wire_enum! {
    /// The storage tier of an object.
    StorageTier {
        Standard => "Standard",
        InfrequentAccess => "InfrequentAccess",
        Archive => "Archive",
    }
}

gaxi::wire_enum! {
    /// The restore status of an archived object.
    ArchivalState {
        Archived => "Archived",
        Restoring => "Restoring",
        Restored => "Restored",
    }
}

gaxi::wire_enum! {
    /// The operations allowed by a pre-authenticated request.
    AccessType {
        ObjectRead => "ObjectRead",
        ObjectWrite => "ObjectWrite",
        ObjectReadWrite => "ObjectReadWrite",
        AnyObjectWrite => "AnyObjectWrite",
        AnyObjectRead => "AnyObjectRead",
        AnyObjectReadWrite => "AnyObjectReadWrite",
    }
}

gaxi::wire_enum! {
    /// Whether a bucket-level pre-authenticated request allows listing the
    /// objects.
    BucketListingAction {
        Deny => "Deny",
        ListObjects => "ListObjects",
    }
}

/// A bucket, a container for objects.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// The Object Storage namespace of the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The name of the bucket, unique within the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The OCID of the compartment containing the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    /// Arbitrary string keys and values for user-defined metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// The OCID of the user who created the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// The RFC 3339 creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    /// The entity tag of the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_type: Option<PublicAccessType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier: Option<BucketStorageTier>,

    /// Whether the bucket emits events for object state changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_events_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    /// The OCID of the master encryption key used by the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,

    /// The approximate number of objects in the bucket, only returned when
    /// requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_count: Option<i64>,

    /// The approximate total size in bytes, only returned when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,

    /// The OCID of the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Bucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace][Bucket::namespace].
    pub fn set_namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace = Some(v.into());
        self
    }

    /// Sets the value of [name][Bucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][Bucket::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [metadata][Bucket::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [created_by][Bucket::created_by].
    pub fn set_created_by<T: Into<String>>(mut self, v: T) -> Self {
        self.created_by = Some(v.into());
        self
    }

    /// Sets the value of [time_created][Bucket::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [etag][Bucket::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [public_access_type][Bucket::public_access_type].
    pub fn set_public_access_type<T: Into<PublicAccessType>>(mut self, v: T) -> Self {
        self.public_access_type = Some(v.into());
        self
    }

    /// Sets the value of [storage_tier][Bucket::storage_tier].
    pub fn set_storage_tier<T: Into<BucketStorageTier>>(mut self, v: T) -> Self {
        self.storage_tier = Some(v.into());
        self
    }

    /// Sets the value of [object_events_enabled][Bucket::object_events_enabled].
    pub fn set_object_events_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.object_events_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][Bucket::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][Bucket::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_id][Bucket::kms_key_id].
    pub fn set_kms_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_id = Some(v.into());
        self
    }

    /// Sets the value of [versioning][Bucket::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }

    /// Sets the value of [approximate_count][Bucket::approximate_count].
    pub fn set_approximate_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.approximate_count = Some(v.into());
        self
    }

    /// Sets the value of [approximate_size][Bucket::approximate_size].
    pub fn set_approximate_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.approximate_size = Some(v.into());
        self
    }

    /// Sets the value of [is_read_only][Bucket::is_read_only].
    pub fn set_is_read_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_read_only = Some(v.into());
        self
    }

    /// Sets the value of [id][Bucket::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}

/// The summary of a bucket returned by
/// [list_buckets][crate::client::ObjectStorage::list_buckets].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BucketSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace][BucketSummary::namespace].
    pub fn set_namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace = Some(v.into());
        self
    }

    /// Sets the value of [name][BucketSummary::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][BucketSummary::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [created_by][BucketSummary::created_by].
    pub fn set_created_by<T: Into<String>>(mut self, v: T) -> Self {
        self.created_by = Some(v.into());
        self
    }

    /// Sets the value of [time_created][BucketSummary::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [etag][BucketSummary::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][BucketSummary::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][BucketSummary::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }
}

/// The body of [create_bucket][crate::client::ObjectStorage::create_bucket].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateBucketDetails {
    /// The name of the bucket. Avoid entering confidential information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_type: Option<PublicAccessType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier: Option<BucketStorageTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_events_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateBucketDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateBucketDetails::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][CreateBucketDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [metadata][CreateBucketDetails::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [public_access_type][CreateBucketDetails::public_access_type].
    pub fn set_public_access_type<T: Into<PublicAccessType>>(mut self, v: T) -> Self {
        self.public_access_type = Some(v.into());
        self
    }

    /// Sets the value of [storage_tier][CreateBucketDetails::storage_tier].
    pub fn set_storage_tier<T: Into<BucketStorageTier>>(mut self, v: T) -> Self {
        self.storage_tier = Some(v.into());
        self
    }

    /// Sets the value of [object_events_enabled][CreateBucketDetails::object_events_enabled].
    pub fn set_object_events_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.object_events_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][CreateBucketDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][CreateBucketDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_id][CreateBucketDetails::kms_key_id].
    pub fn set_kms_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_id = Some(v.into());
        self
    }

    /// Sets the value of [versioning][CreateBucketDetails::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }
}

/// The body of [update_bucket][crate::client::ObjectStorage::update_bucket].
/// Only the fields with a value are changed.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateBucketDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Moves the bucket to a different compartment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,

    /// Renames the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_type: Option<PublicAccessType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_events_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateBucketDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [namespace][UpdateBucketDetails::namespace].
    pub fn set_namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace = Some(v.into());
        self
    }

    /// Sets the value of [compartment_id][UpdateBucketDetails::compartment_id].
    pub fn set_compartment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.compartment_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateBucketDetails::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [metadata][UpdateBucketDetails::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [public_access_type][UpdateBucketDetails::public_access_type].
    pub fn set_public_access_type<T: Into<PublicAccessType>>(mut self, v: T) -> Self {
        self.public_access_type = Some(v.into());
        self
    }

    /// Sets the value of [object_events_enabled][UpdateBucketDetails::object_events_enabled].
    pub fn set_object_events_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.object_events_enabled = Some(v.into());
        self
    }

    /// Sets the value of [freeform_tags][UpdateBucketDetails::freeform_tags].
    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.freeform_tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [defined_tags][UpdateBucketDetails::defined_tags].
    pub fn set_defined_tags<T: Into<DefinedTags>>(mut self, v: T) -> Self {
        self.defined_tags = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_id][UpdateBucketDetails::kms_key_id].
    pub fn set_kms_key_id<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_id = Some(v.into());
        self
    }

    /// Sets the value of [versioning][UpdateBucketDetails::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }
}

/// An object in a [ListObjects] page. Only `name` is always present, the other
/// fields are returned when requested with `fields`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// The base64-encoded MD5 hash of the object data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier: Option<StorageTier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_state: Option<ArchivalState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_modified: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ObjectSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ObjectSummary::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [size][ObjectSummary::size].
    pub fn set_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.size = Some(v.into());
        self
    }

    /// Sets the value of [md5][ObjectSummary::md5].
    pub fn set_md5<T: Into<String>>(mut self, v: T) -> Self {
        self.md5 = Some(v.into());
        self
    }

    /// Sets the value of [time_created][ObjectSummary::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }

    /// Sets the value of [etag][ObjectSummary::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [storage_tier][ObjectSummary::storage_tier].
    pub fn set_storage_tier<T: Into<StorageTier>>(mut self, v: T) -> Self {
        self.storage_tier = Some(v.into());
        self
    }

    /// Sets the value of [archival_state][ObjectSummary::archival_state].
    pub fn set_archival_state<T: Into<ArchivalState>>(mut self, v: T) -> Self {
        self.archival_state = Some(v.into());
        self
    }

    /// Sets the value of [time_modified][ObjectSummary::time_modified].
    pub fn set_time_modified<T: Into<String>>(mut self, v: T) -> Self {
        self.time_modified = Some(v.into());
        self
    }
}

/// A page of objects returned by
/// [list_objects][crate::client::ObjectStorage::list_objects].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListObjects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<ObjectSummary>>,

    /// The prefixes of objects grouped by the `delimiter` parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<String>>,

    /// The name of the first object in the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_start_with: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListObjects {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [objects][ListObjects::objects].
    pub fn set_objects<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ObjectSummary>,
    {
        self.objects = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [prefixes][ListObjects::prefixes].
    pub fn set_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.prefixes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_start_with][ListObjects::next_start_with].
    pub fn set_next_start_with<T: Into<String>>(mut self, v: T) -> Self {
        self.next_start_with = Some(v.into());
        self
    }
}

/// The body of
/// [create_preauthenticated_request][crate::client::ObjectStorage::create_preauthenticated_request].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreatePreauthenticatedRequestDetails {
    /// A user-specified name for the pre-authenticated request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_listing_action: Option<BucketListingAction>,

    /// The object covered by the request, the whole bucket if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,

    /// The RFC 3339 expiration time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_expires: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreatePreauthenticatedRequestDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreatePreauthenticatedRequestDetails::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [bucket_listing_action][CreatePreauthenticatedRequestDetails::bucket_listing_action].
    pub fn set_bucket_listing_action<T: Into<BucketListingAction>>(mut self, v: T) -> Self {
        self.bucket_listing_action = Some(v.into());
        self
    }

    /// Sets the value of [object_name][CreatePreauthenticatedRequestDetails::object_name].
    pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
        self.object_name = Some(v.into());
        self
    }

    /// Sets the value of [access_type][CreatePreauthenticatedRequestDetails::access_type].
    pub fn set_access_type<T: Into<AccessType>>(mut self, v: T) -> Self {
        self.access_type = Some(v.into());
        self
    }

    /// Sets the value of [time_expires][CreatePreauthenticatedRequestDetails::time_expires].
    pub fn set_time_expires<T: Into<String>>(mut self, v: T) -> Self {
        self.time_expires = Some(v.into());
        self
    }
}

/// A pre-authenticated request, a URL granting access to a bucket or object
/// without signing.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PreauthenticatedRequest {
    /// The unique identifier, used to get or delete the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URI to embed in the request URL. Only returned on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_listing_action: Option<BucketListingAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_expires: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PreauthenticatedRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][PreauthenticatedRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][PreauthenticatedRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [access_uri][PreauthenticatedRequest::access_uri].
    pub fn set_access_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.access_uri = Some(v.into());
        self
    }

    /// Sets the value of [object_name][PreauthenticatedRequest::object_name].
    pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
        self.object_name = Some(v.into());
        self
    }

    /// Sets the value of [bucket_listing_action][PreauthenticatedRequest::bucket_listing_action].
    pub fn set_bucket_listing_action<T: Into<BucketListingAction>>(mut self, v: T) -> Self {
        self.bucket_listing_action = Some(v.into());
        self
    }

    /// Sets the value of [access_type][PreauthenticatedRequest::access_type].
    pub fn set_access_type<T: Into<AccessType>>(mut self, v: T) -> Self {
        self.access_type = Some(v.into());
        self
    }

    /// Sets the value of [time_expires][PreauthenticatedRequest::time_expires].
    pub fn set_time_expires<T: Into<String>>(mut self, v: T) -> Self {
        self.time_expires = Some(v.into());
        self
    }

    /// Sets the value of [time_created][PreauthenticatedRequest::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }
}

/// The summary of a pre-authenticated request, without the access URI.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PreauthenticatedRequestSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_listing_action: Option<BucketListingAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_expires: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PreauthenticatedRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][PreauthenticatedRequestSummary::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][PreauthenticatedRequestSummary::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [object_name][PreauthenticatedRequestSummary::object_name].
    pub fn set_object_name<T: Into<String>>(mut self, v: T) -> Self {
        self.object_name = Some(v.into());
        self
    }

    /// Sets the value of [bucket_listing_action][PreauthenticatedRequestSummary::bucket_listing_action].
    pub fn set_bucket_listing_action<T: Into<BucketListingAction>>(mut self, v: T) -> Self {
        self.bucket_listing_action = Some(v.into());
        self
    }

    /// Sets the value of [access_type][PreauthenticatedRequestSummary::access_type].
    pub fn set_access_type<T: Into<AccessType>>(mut self, v: T) -> Self {
        self.access_type = Some(v.into());
        self
    }

    /// Sets the value of [time_expires][PreauthenticatedRequestSummary::time_expires].
    pub fn set_time_expires<T: Into<String>>(mut self, v: T) -> Self {
        self.time_expires = Some(v.into());
        self
    }

    /// Sets the value of [time_created][PreauthenticatedRequestSummary::time_created].
    pub fn set_time_created<T: Into<String>>(mut self, v: T) -> Self {
        self.time_created = Some(v.into());
        self
    }
}

// The objects in a bucket are paginated using the name of the next object,
// returned in the body instead of the `opc-next-page` header.
impl gax::paginator::PageableResponse for ListObjects {
    fn next_page_token(&self) -> String {
        self.next_start_with.clone().unwrap_or_default()
    }
}

// Request messages. These types are not serialized, the transport maps each
// field to a path parameter, a query parameter, a header, or the body.

/// The request for
/// [get_namespace][crate::client::ObjectStorage::get_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNamespaceRequest {
    /// Returns the namespace of the tenancy owning this compartment.
    pub compartment_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [list_buckets][crate::client::ObjectStorage::list_buckets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketsRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The OCID of the compartment. Required.
    pub compartment_id: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    /// Additional fields to return, `tags` is the only supported value.
    pub fields: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_bucket][crate::client::ObjectStorage::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    /// Additional fields to return, a comma-separated list of
    /// `approximateCount` and `approximateSize`.
    pub fields: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [create_bucket][crate::client::ObjectStorage::create_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBucketRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// Required.
    pub body: Option<CreateBucketDetails>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [update_bucket][crate::client::ObjectStorage::update_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateBucketRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// Required.
    pub body: Option<UpdateBucketDetails>,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [delete_bucket][crate::client::ObjectStorage::delete_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [list_objects][crate::client::ObjectStorage::list_objects].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListObjectsRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// Only objects whose name starts with this value.
    pub prefix: Option<String>,
    /// The first object to return, in lexicographical order.
    pub start: Option<String>,
    /// Only objects whose name is before this value.
    pub end: Option<String>,
    pub limit: Option<i32>,
    /// Groups the objects by the prefix up to this character, only `/` is
    /// supported.
    pub delimiter: Option<String>,
    /// Additional fields to return, a comma-separated list such as
    /// `name,size,etag`.
    pub fields: Option<String>,
    pub start_after: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [put_object][crate::client::ObjectStorage::put_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutObjectRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// The name of the object. Required.
    pub object_name: Option<String>,
    /// The object data. Required.
    pub body: Option<bytes::Bytes>,
    pub content_type: Option<String>,
    /// The base64-encoded MD5 hash of the body, verified by the service.
    pub content_md5: Option<String>,
    pub content_language: Option<String>,
    pub content_encoding: Option<String>,
    pub content_disposition: Option<String>,
    pub cache_control: Option<String>,
    pub if_match: Option<String>,
    /// Set to `*` to fail if the object already exists.
    pub if_none_match: Option<String>,
    pub storage_tier: Option<StorageTier>,
    /// User-defined metadata, sent as `opc-meta-*` headers.
    pub opc_meta: Option<HashMap<String, String>>,
    pub opc_request_id: Option<String>,
}

/// The request for [get_object][crate::client::ObjectStorage::get_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetObjectRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// The name of the object. Required.
    pub object_name: Option<String>,
    pub version_id: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    /// A byte range, as in `bytes=0-1023`.
    pub range: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for [head_object][crate::client::ObjectStorage::head_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct HeadObjectRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// The name of the object. Required.
    pub object_name: Option<String>,
    pub version_id: Option<String>,
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [delete_object][crate::client::ObjectStorage::delete_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteObjectRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// The name of the object. Required.
    pub object_name: Option<String>,
    pub version_id: Option<String>,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [create_preauthenticated_request][crate::client::ObjectStorage::create_preauthenticated_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreatePreauthenticatedRequestRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// Required.
    pub body: Option<CreatePreauthenticatedRequestDetails>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [get_preauthenticated_request][crate::client::ObjectStorage::get_preauthenticated_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPreauthenticatedRequestRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// The unique identifier of the pre-authenticated request. Required.
    pub par_id: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [list_preauthenticated_requests][crate::client::ObjectStorage::list_preauthenticated_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPreauthenticatedRequestsRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    pub object_name_prefix: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
}

/// The request for
/// [delete_preauthenticated_request][crate::client::ObjectStorage::delete_preauthenticated_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeletePreauthenticatedRequestRequest {
    /// The Object Storage namespace. Required.
    pub namespace_name: Option<String>,
    /// The name of the bucket. Required.
    pub bucket_name: Option<String>,
    /// Required.
    pub par_id: Option<String>,
    pub opc_request_id: Option<String>,
}
