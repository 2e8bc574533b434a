use kube::CustomResourceExt;
use lldap_lister::resources::{LldapGroup, LldapUser};

fn main() -> anyhow::Result<()> {
    let resources = [
        serde_yaml::to_string(&LldapUser::crd())?,
        serde_yaml::to_string(&LldapGroup::crd())?,
    ]
    .join("---\n");
    print!("{resources}");

    Ok(())
}
