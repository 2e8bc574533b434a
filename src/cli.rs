use clap::Parser;

use crate::lister::Scope;

/// List the LLDAP users and groups stored in a Kubernetes cluster
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Namespace to look in (empty = all namespaces)
    #[arg(short, long, default_value = "", env = "LLDAP_NAMESPACE")]
    pub namespace: String,
}

impl Args {
    pub fn scope(&self) -> Scope {
        Scope::from(self.namespace.as_str())
    }
}
