#![cfg(test)]

use super::*;

#[test]
fn test_teardown_order_leaf_to_base() {
    let log = TeardownLog::new();

    {
        let _store = Store::Audited(AuditedStore::new("chain", 8, log.clone()));
        assert_eq!(log.stages(), Vec::<&str>::new(), "Nothing should be recorded while alive.");
    }

    assert_eq!(
        log.stages(),
        ["audited", "metered", "core"],
        "Teardown should run leaf to base."
    );
}

#[test]
fn test_teardown_order_per_level() {
    let log = TeardownLog::new();
    drop(Store::Core(CoreStore::new("base", 1, log.clone())));
    assert_eq!(log.stages(), ["core"], "A base-level store only has one stage.");

    let log = TeardownLog::new();
    drop(Store::Metered(MeteredStore::new("mid", 1, log.clone())));
    assert_eq!(log.stages(), ["metered", "core"]);
}

#[test]
fn test_metering_and_audit() {
    let log = TeardownLog::new();
    let mut store = AuditedStore::new("audit", 4, log.clone());

    assert_eq!(store.high_water(), None, "Untouched stores have no high water mark.");

    store.write(2, 7).expect("index 2 is in bounds");
    assert_eq!(store.read(2), Ok(7));
    assert_eq!(store.read(0), Ok(0));
    assert!(store.read(9).is_err(), "Out-of-bounds reads should fail recoverably.");

    assert_eq!(store.high_water(), Some(2), "Failed accesses should not move the high water mark.");
    let description = store.describe();
    assert!(description.contains("3 reads"), "All reads, failed included, should be metered: {description}");
}

#[test]
fn test_describe_dispatch() {
    let log = TeardownLog::new();

    let core = Store::Core(CoreStore::new("c", 2, log.clone()));
    let metered = Store::Metered(MeteredStore::new("m", 2, log.clone()));
    let audited = Store::Audited(AuditedStore::new("a", 2, log.clone()));

    assert!(core.describe().starts_with("[core]"));
    assert!(metered.describe().starts_with("[metered]"));
    assert!(audited.describe().starts_with("[audited]"));
}
