//! Descriptors for the resource kinds the console works with.

use crate::contracts::kind_descriptor::KindDescriptor;

const RBAC_BASE_PATH: &str = "/apis/rbac.authorization.k8s.io/";
const RBAC_API_VERSION: &str = "v1beta1";

fn core(plural: &str, label_plural: &str, namespaced: bool) -> KindDescriptor {
    KindDescriptor::well_known(plural, label_plural, None, None, false, namespaced)
}

fn extension(plural: &str, label_plural: &str) -> KindDescriptor {
    KindDescriptor::well_known(plural, label_plural, None, None, true, true)
}

fn rbac(plural: &str, label_plural: &str, namespaced: bool) -> KindDescriptor {
    KindDescriptor::well_known(
        plural,
        label_plural,
        Some(RBAC_API_VERSION),
        Some(RBAC_BASE_PATH),
        false,
        namespaced,
    )
}

pub fn config_maps() -> KindDescriptor {
    core("configmaps", "Config Maps", true)
}

pub fn nodes() -> KindDescriptor {
    core("nodes", "Nodes", false)
}

pub fn services() -> KindDescriptor {
    core("services", "Services", true)
}

pub fn pods() -> KindDescriptor {
    core("pods", "Pods", true)
}

pub fn containers() -> KindDescriptor {
    core("containers", "Containers", true)
}

pub fn replication_controllers() -> KindDescriptor {
    core("replicationcontrollers", "Replication Controllers", true)
}

pub fn service_accounts() -> KindDescriptor {
    core("serviceaccounts", "Service Accounts", true)
}

pub fn secrets() -> KindDescriptor {
    core("secrets", "Secrets", true)
}

pub fn component_statuses() -> KindDescriptor {
    core("componentstatuses", "Component Statuses", false)
}

pub fn namespaces() -> KindDescriptor {
    core("namespaces", "Namespaces", false)
}

pub fn replica_sets() -> KindDescriptor {
    extension("replicasets", "Replica Sets")
}

pub fn deployments() -> KindDescriptor {
    extension("deployments", "Deployments")
}

pub fn jobs() -> KindDescriptor {
    extension("jobs", "Jobs")
}

pub fn daemon_sets() -> KindDescriptor {
    extension("daemonsets", "Daemon Sets")
}

pub fn horizontal_pod_autoscalers() -> KindDescriptor {
    extension("horizontalpodautoscalers", "Horizontal Pod Autoscalers")
}

pub fn cluster_role_bindings() -> KindDescriptor {
    rbac("clusterrolebindings", "Cluster Role Bindings", false)
}

pub fn cluster_roles() -> KindDescriptor {
    rbac("clusterroles", "Cluster Roles", false)
}

pub fn role_bindings() -> KindDescriptor {
    rbac("rolebindings", "Role Bindings", true)
}

pub fn roles() -> KindDescriptor {
    rbac("roles", "Roles", true)
}

/// Every well-known kind, in the order the console registers them.
pub fn all() -> Vec<KindDescriptor> {
    vec![
        config_maps(),
        nodes(),
        services(),
        pods(),
        containers(),
        replication_controllers(),
        replica_sets(),
        deployments(),
        jobs(),
        daemon_sets(),
        horizontal_pod_autoscalers(),
        service_accounts(),
        secrets(),
        component_statuses(),
        namespaces(),
        cluster_role_bindings(),
        cluster_roles(),
        role_bindings(),
        roles(),
    ]
}
