use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
    kind = "LLDAPUser",
    root = "LldapUser",
    group = "lldap-operator.github.com",
    version = "v1alpha1",
    namespaced,
    status = "LldapUserStatus"
)]
#[kube(
    shortname = "lu",
    doc = "Custom resource describing a user inside of LLDAP",
    printcolumn = r#"{"name":"Username", "type":"string", "jsonPath":".spec.username"}"#,
    printcolumn = r#"{"name":"Email", "type":"string", "jsonPath":".spec.primaryEmail"}"#,
    printcolumn = r#"{"name":"Synced", "type":"boolean", "jsonPath":".status.synced"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct LldapUserSpec {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// Nothing in this crate writes the status, it is carried as-is.
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LldapUserStatus {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub synced: bool,
}
