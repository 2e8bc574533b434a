use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "LLDAPGroup",
    root = "LldapGroup",
    group = "lldap-operator.github.com",
    version = "v1alpha1",
    namespaced,
    status = "LldapGroupStatus"
)]
#[kube(
    shortname = "lg",
    doc = "Custom resource describing a group inside of LLDAP",
    printcolumn = r#"{"name":"Name", "type":"string", "jsonPath":".spec.name"}"#,
    printcolumn = r#"{"name":"GID", "type":"integer", "jsonPath":".spec.gidNumber"}"#,
    printcolumn = r#"{"name":"Members", "type":"integer", "description":"Number of synced members", "jsonPath":".status.memberCount"}"#,
    printcolumn = r#"{"name":"Synced", "type":"boolean", "jsonPath":".status.synced"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct LldapGroupSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `None` when the store has no gid, which is distinct from a gid of 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LldapGroupStatus {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub synced: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub member_count: i32,
}

fn is_zero(count: &i32) -> bool {
    *count == 0
}
