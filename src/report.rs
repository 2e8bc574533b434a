use std::io::Write;

use kube::{Resource, ResourceExt};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::lister::{self, Lister, ObjectSource, Scope};
use crate::resources::{LldapGroup, LldapUser};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Listing failed: {0}")]
    List(#[from] lister::Error),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A record kind that can be printed as one section of the report.
pub trait Summary: Resource<DynamicType = ()> + DeserializeOwned {
    const HEADING: &'static str;

    /// One line describing the object, without trailing newline.
    fn summary(&self) -> String;
}

impl Summary for LldapUser {
    const HEADING: &'static str = "LLDAPUsers";

    fn summary(&self) -> String {
        format!(
            "User {}: username={}, primaryEmail={}, groups={}",
            identity(self),
            self.spec.username,
            self.spec.primary_email.as_deref().unwrap_or_default(),
            bracketed(&self.spec.groups),
        )
    }
}

/// An absent `gidNumber` renders as `gid=<unset>` so it never reads as a
/// real gid, a stored 0 renders as `gid=0`.
impl Summary for LldapGroup {
    const HEADING: &'static str = "LLDAPGroups";

    fn summary(&self) -> String {
        let gid = self
            .spec
            .gid_number
            .map_or_else(|| "<unset>".to_owned(), |gid| gid.to_string());

        format!(
            "Group {}: name={}, gid={gid}, members={}",
            identity(self),
            self.spec.name,
            bracketed(&self.spec.members),
        )
    }
}

fn identity<K: ResourceExt>(obj: &K) -> String {
    format!(
        "{}/{}",
        obj.namespace().unwrap_or_default(),
        obj.name_any()
    )
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

/// Lists every `K` and writes its section to `out`.
///
/// Nothing is written when listing fails, so a failed section never looks
/// like an empty one.
pub async fn print_section<K, S, W>(lister: &Lister<S>, scope: &Scope, out: &mut W) -> Result<()>
where
    K: Summary,
    S: ObjectSource,
    W: Write,
{
    let objects = lister.list::<K>(scope).await?;

    writeln!(out, "=== {} ===", K::HEADING)?;
    if objects.is_empty() {
        writeln!(out, "(none)")?;
        return Ok(());
    }

    for obj in &objects {
        writeln!(out, "{}", obj.summary())?;
    }

    Ok(())
}

/// Prints the user section followed by the group section.
///
/// A failing section is logged and skipped, the other one still runs.
/// Returns how many sections failed.
pub async fn print_all<S, W>(lister: &Lister<S>, scope: &Scope, out: &mut W) -> usize
where
    S: ObjectSource,
    W: Write,
{
    debug!(%scope, "Printing report");

    let mut failed = 0;

    if let Err(err) = print_section::<LldapUser, _, _>(lister, scope, out).await {
        warn!("error listing users: {}", err);
        failed += 1;
    }

    if let Err(err) = print_section::<LldapGroup, _, _>(lister, scope, out).await {
        warn!("error listing groups: {}", err);
        failed += 1;
    }

    failed
}
