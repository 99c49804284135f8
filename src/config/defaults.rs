use std::collections::BTreeMap;

pub fn default_version() -> u32 {
    1
}

pub fn default_cycle_days() -> u32 {
    420
}

pub fn default_max_details() -> usize {
    3
}

pub fn default_summary_max_chars() -> usize {
    90
}

pub fn default_internal_markers() -> Vec<String> {
    vec![
        "auto-generated from task template".to_string(),
        "avoid fertiliser application near hormone application".to_string(),
    ]
}

pub fn default_harvest_crops() -> BTreeMap<String, u32> {
    // MD2 is the common commercial pineapple cultivar
    let mut crops = BTreeMap::new();
    crops.insert("pineapple".to_string(), 15);
    crops.insert("md2".to_string(), 15);
    crops
}

pub fn default_days_per_month() -> u32 {
    30
}

pub fn default_config_file() -> &'static str {
    "agroplan.yaml"
}
