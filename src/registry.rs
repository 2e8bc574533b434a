use std::collections::BTreeMap;

use kube::core::ApiResource;
use kube::Resource;
use tracing::trace;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Kind '{kind}' is already registered as {existing}, refusing {requested}")]
    Conflict {
        kind: String,
        existing: String,
        requested: String,
    },
    #[error("Kind '{0}' is not registered")]
    NotRegistered(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Maps record kinds, and the list kinds wrapping them, to the group, version
/// and plural the object store serves them under.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: BTreeMap<String, ApiResource>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `K` together with its `<Kind>List` counterpart.
    ///
    /// Re-registering an identical kind does nothing. Either kind clashing
    /// with an entry that routes elsewhere is an error, and in that case
    /// neither kind is added.
    pub fn register<K>(&mut self) -> Result<&mut Self>
    where
        K: Resource<DynamicType = ()>,
    {
        let resource = ApiResource::erase::<K>(&());
        let list = ApiResource {
            kind: format!("{}List", resource.kind),
            ..resource.clone()
        };

        self.check(&resource)?;
        self.check(&list)?;

        trace!(kind = resource.kind, api_version = resource.api_version, "Registering kind");

        self.kinds.insert(list.kind.clone(), list);
        self.kinds.insert(resource.kind.clone(), resource);

        Ok(self)
    }

    fn check(&self, resource: &ApiResource) -> Result<()> {
        match self.kinds.get(&resource.kind) {
            Some(existing)
                if existing.api_version != resource.api_version
                    || existing.plural != resource.plural =>
            {
                Err(Error::Conflict {
                    kind: resource.kind.clone(),
                    existing: describe(existing),
                    requested: describe(resource),
                })
            }
            _ => Ok(()),
        }
    }

    /// Addressing data for `K`, used to route list requests.
    pub fn resource<K>(&self) -> Result<&ApiResource>
    where
        K: Resource<DynamicType = ()>,
    {
        let kind = K::kind(&());
        self.kinds
            .get(kind.as_ref())
            .ok_or_else(|| Error::NotRegistered(kind.into_owned()))
    }

    /// Every registered kind name, list kinds included, in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}

fn describe(resource: &ApiResource) -> String {
    format!("{}/{}", resource.api_version, resource.plural)
}
