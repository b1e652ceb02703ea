//! Rule sets for PersistentVolume, PersistentVolumeClaim and StorageClass.
//!
//! These kinds need no structural checks; every rule is a plain field path.

use crate::validator::rules::RuleSet;
use crate::validator::types::ResourceKind;

pub fn persistent_volume_rules() -> RuleSet {
    RuleSet::new(ResourceKind::PersistentVolume)
        .require(&[
            &["spec", "capacity", "storage"],
            &["spec", "accessModes"],
            &["spec", "storageClassName"],
        ])
        .recommend(&[&["spec", "persistentVolumeReclaimPolicy"], &["spec", "volumeMode"]])
}

pub fn persistent_volume_claim_rules() -> RuleSet {
    RuleSet::new(ResourceKind::PersistentVolumeClaim)
        .require(&[
            &["spec", "accessModes"],
            &["spec", "resources", "requests", "storage"],
            &["spec", "storageClassName"],
        ])
        .recommend(&[&["spec", "volumeMode"]])
}

pub fn storage_class_rules() -> RuleSet {
    RuleSet::new(ResourceKind::StorageClass)
        .require(&[&["provisioner"]])
        .recommend(&[
            &["reclaimPolicy"],
            &["volumeBindingMode"],
            &["allowVolumeExpansion"],
            &["parameters"],
        ])
}
