use kube::config::{InClusterError, KubeConfigOptions, KubeconfigError};
use kube::{Client, Config};
use tracing::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No usable cluster credentials (in-cluster: {in_cluster}; kubeconfig: {kubeconfig})")]
    Unresolved {
        in_cluster: InClusterError,
        #[source]
        kubeconfig: KubeconfigError,
    },
    #[error("Failed to create client: {0}")]
    Client(#[from] kube::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Resolves cluster credentials, preferring the in-cluster service account and
/// falling back to the local kubeconfig.
pub async fn resolve() -> Result<Config> {
    match Config::incluster() {
        Ok(config) => {
            info!("Using in-cluster configuration");
            Ok(config)
        }
        Err(in_cluster) => {
            debug!("In-cluster configuration unavailable: {}", in_cluster);

            let config = Config::from_kubeconfig(&KubeConfigOptions::default())
                .await
                .map_err(|kubeconfig| Error::Unresolved {
                    in_cluster,
                    kubeconfig,
                })?;
            info!("Using kubeconfig");

            Ok(config)
        }
    }
}

pub async fn connect() -> Result<Client> {
    Ok(Client::try_from(resolve().await?)?)
}
