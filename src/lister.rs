use std::fmt;

use async_trait::async_trait;
use kube::api::ListParams;
use kube::core::{ApiResource, DynamicObject};
use kube::{Api, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::registry::{self, Registry};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Kube api error: {0}")]
    Kube(#[from] kube::Error),
    #[error("Registry error: {0}")]
    Registry(#[from] registry::Error),
    #[error("Failed to decode {kind} '{name}': {reason}")]
    Decode {
        kind: String,
        name: String,
        reason: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Namespace filter applied to list requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Namespace(String),
}

impl From<&str> for Scope {
    /// An empty filter means every namespace.
    fn from(namespace: &str) -> Self {
        if namespace.is_empty() {
            Self::All
        } else {
            Self::Namespace(namespace.to_owned())
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("<all namespaces>"),
            Self::Namespace(namespace) => f.write_str(namespace),
        }
    }
}

/// Something that can hand out a snapshot of the objects of one kind.
#[async_trait]
pub trait ObjectSource {
    async fn list(&self, resource: &ApiResource, scope: &Scope) -> Result<Vec<DynamicObject>>;
}

#[async_trait]
impl ObjectSource for kube::Client {
    async fn list(&self, resource: &ApiResource, scope: &Scope) -> Result<Vec<DynamicObject>> {
        let api: Api<DynamicObject> = match scope {
            Scope::All => Api::all_with(self.clone(), resource),
            Scope::Namespace(namespace) => Api::namespaced_with(self.clone(), namespace, resource),
        };

        Ok(api.list(&ListParams::default()).await?.items)
    }
}

/// Lists registered record kinds from an [`ObjectSource`] as typed objects.
pub struct Lister<S> {
    source: S,
    registry: Registry,
}

impl<S> Lister<S>
where
    S: ObjectSource,
{
    pub fn new(source: S, registry: Registry) -> Self {
        Self { source, registry }
    }

    /// Every `K` in `scope`, in the order the source returned them.
    ///
    /// One object that does not match the schema of `K` fails the whole call.
    #[instrument(skip(self), fields(kind = %K::kind(&())))]
    pub async fn list<K>(&self, scope: &Scope) -> Result<Vec<K>>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        let resource = self.registry.resource::<K>()?;

        let objects = self.source.list(resource, scope).await?;
        debug!(count = objects.len(), "Listed objects");

        objects
            .into_iter()
            .map(|object| {
                let name = object.name_any();
                object.try_parse::<K>().map_err(|err| Error::Decode {
                    kind: resource.kind.clone(),
                    name,
                    reason: err.to_string(),
                })
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }
}
