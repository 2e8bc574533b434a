//! In-memory object store for exercising listing without a cluster.

use std::sync::Mutex;

use async_trait::async_trait;
use kube::api::ObjectMeta;
use kube::core::{ApiResource, DynamicObject, ErrorResponse};
use kube::{Resource, ResourceExt};

use crate::lister::{ObjectSource, Result, Scope};
use crate::resources::{LldapGroup, LldapGroupSpec, LldapUser, LldapUserSpec};

#[derive(Default)]
pub struct MemoryStore {
    objects: Vec<DynamicObject>,
    failing: Vec<String>,
    requests: Mutex<Vec<(String, Scope)>>,
}

impl MemoryStore {
    pub fn with(mut self, object: DynamicObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Makes every list request for `plural` fail with a 403.
    pub fn failing(mut self, plural: &str) -> Self {
        self.failing.push(plural.to_owned());
        self
    }

    /// Plural and scope of every list request seen so far.
    pub fn requests(&self) -> Vec<(String, Scope)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectSource for MemoryStore {
    async fn list(&self, resource: &ApiResource, scope: &Scope) -> Result<Vec<DynamicObject>> {
        self.requests
            .lock()
            .unwrap()
            .push((resource.plural.clone(), scope.clone()));

        if self.failing.contains(&resource.plural) {
            return Err(kube::Error::Api(ErrorResponse {
                status: "Failure".into(),
                message: format!("{} is forbidden", resource.plural),
                reason: "Forbidden".into(),
                code: 403,
            })
            .into());
        }

        Ok(self
            .objects
            .iter()
            .filter(|object| {
                object
                    .types
                    .as_ref()
                    .is_some_and(|types| types.kind == resource.kind)
            })
            .filter(|object| match scope {
                Scope::All => true,
                Scope::Namespace(namespace) => {
                    object.namespace().as_deref() == Some(namespace.as_str())
                }
            })
            .cloned()
            .collect())
    }
}

fn stored<K>(object: K) -> DynamicObject
where
    K: Resource<DynamicType = ()> + serde::Serialize,
{
    serde_json::from_value(serde_json::to_value(object).unwrap()).unwrap()
}

fn meta(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.into()),
        namespace: Some(namespace.into()),
        ..Default::default()
    }
}

pub fn user(namespace: &str, name: &str, username: &str, groups: &[&str]) -> DynamicObject {
    let mut user = LldapUser::new(
        name,
        LldapUserSpec {
            username: username.into(),
            display_name: None,
            primary_email: Some(format!("{username}@example.com")),
            additional_emails: Vec::new(),
            groups: groups.iter().map(|&group| group.into()).collect(),
        },
    );
    user.metadata = meta(namespace, name);

    stored(user)
}

pub fn group(namespace: &str, name: &str, gid: Option<i64>, members: &[&str]) -> DynamicObject {
    let mut group = LldapGroup::new(
        name,
        LldapGroupSpec {
            name: name.into(),
            description: None,
            gid_number: gid,
            members: members.iter().map(|&member| member.into()).collect(),
        },
    );
    group.metadata = meta(namespace, name);

    stored(group)
}
