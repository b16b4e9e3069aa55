// ==========================================
// 参数注册表集成测试
// ==========================================
// 覆盖: 落盘文件上的写读回环、覆盖语义、前缀列举
// ==========================================


use item_param_loader::{ParamValue, ParameterStore, RegistryParameterStore};
use test_helpers::create_registry_db;

#[test]
fn test_roundtrip_on_disk_file() {
    let (_guard, reg_path) = create_registry_db().expect("Failed to create registry db");

    let store = RegistryParameterStore::new(&reg_path).expect("Failed to open registry");
    store
        .set("items/widget/color", ParamValue::Text("red".to_string()))
        .expect("Failed to set");
    store
        .set("items/widget/count", ParamValue::Integer(3))
        .expect("Failed to set");
    drop(store);

    // 重新打开文件,数据仍在
    let store = RegistryParameterStore::new(&reg_path).expect("Failed to reopen registry");
    assert_eq!(
        store
            .get("items/widget/color")
            .expect("Failed to get")
            .expect("Param not found"),
        ParamValue::Text("red".to_string())
    );
    assert_eq!(
        store
            .get("items/widget/count")
            .expect("Failed to get")
            .expect("Param not found"),
        ParamValue::Integer(3)
    );
}

#[test]
fn test_storage_classes_survive_reopen() {
    let (_guard, reg_path) = create_registry_db().expect("Failed to create registry db");

    {
        let store = RegistryParameterStore::new(&reg_path).expect("Failed to open registry");
        store
            .set("t/x/int", ParamValue::Integer(-9))
            .expect("Failed to set");
        store
            .set("t/x/real", ParamValue::Real(0.25))
            .expect("Failed to set");
        store
            .set("t/x/text", ParamValue::Text("文本".to_string()))
            .expect("Failed to set");
        store
            .set("t/x/blob", ParamValue::Blob(vec![0x00, 0xff]))
            .expect("Failed to set");
    }

    let store = RegistryParameterStore::new(&reg_path).expect("Failed to reopen registry");
    let get = |key: &str| {
        store
            .get(key)
            .expect("Failed to get")
            .expect("Param not found")
    };

    assert_eq!(get("t/x/int"), ParamValue::Integer(-9));
    assert_eq!(get("t/x/real"), ParamValue::Real(0.25));
    assert_eq!(get("t/x/text"), ParamValue::Text("文本".to_string()));
    assert_eq!(get("t/x/blob"), ParamValue::Blob(vec![0x00, 0xff]));
}

#[test]
fn test_overwrite_keeps_single_entry() {
    let (_guard, reg_path) = create_registry_db().expect("Failed to create registry db");

    let store = RegistryParameterStore::new(&reg_path).expect("Failed to open registry");
    store
        .set("items/widget/color", ParamValue::Text("red".to_string()))
        .expect("Failed to set");
    store
        .set("items/widget/color", ParamValue::Text("green".to_string()))
        .expect("Failed to set");

    let entries = store.list_by_prefix("items/").expect("Failed to list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1, ParamValue::Text("green".to_string()));
}

#[test]
fn test_list_by_prefix_is_ordered() {
    let (_guard, reg_path) = create_registry_db().expect("Failed to create registry db");

    let store = RegistryParameterStore::new(&reg_path).expect("Failed to open registry");
    store
        .set("items/widget/weight", ParamValue::Real(1.5))
        .expect("Failed to set");
    store
        .set("items/gear/color", ParamValue::Text("blue".to_string()))
        .expect("Failed to set");
    store
        .set("items/widget/color", ParamValue::Text("red".to_string()))
        .expect("Failed to set");

    let keys: Vec<String> = store
        .list_by_prefix("items/")
        .expect("Failed to list")
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    assert_eq!(
        keys,
        vec![
            "items/gear/color".to_string(),
            "items/widget/color".to_string(),
            "items/widget/weight".to_string(),
        ]
    );

    let widget_only = store
        .list_by_prefix("items/widget/")
        .expect("Failed to list");
    assert_eq!(widget_only.len(), 2);
}
