use serde_json::{Value, json};

/// A grouped-subtotal (type 1) payload with two groups.
pub fn grouped_payload() -> Value {
    json!({
        "微博": {
            "number": 5,
            "groupData": [
                {"no": "1", "name": "账号甲", "count": "2"},
                {"no": "2", "name": "账号乙", "count": "3"},
            ],
        },
        "微信": {
            "number": 4,
            "groupData": [
                {"no": "1", "name": "公众号丙", "count": "4"},
            ],
        },
    })
}

/// A narrative (type 2) payload with two items.
pub fn narrative_payload() -> Value {
    json!([
        {
            "title": "事件一",
            "Children": {"groupNumber": 3, "number": 12, "groupName": "甲报, 乙台"},
            "Content": "事件一概要",
        },
        {
            "title": "事件二",
            "Children": {"groupNumber": 1, "number": 4, "groupName": "丙网"},
            "Content": "事件二概要",
        },
    ])
}

/// A social-profile (type 3) payload with two authors.
pub fn profiles_payload() -> Value {
    json!([
        {"Author": "记者甲", "Posts": 120, "Fans": 30000, "Follows": 45, "Description": "时政"},
        {"Author": "博主乙", "Posts": "88", "Fans": "900", "Follows": "12", "Description": ""},
    ])
}

/// A category-count (type 4/5) payload with three categories.
pub fn categories_payload() -> Value {
    json!([
        {"groupName": "微博", "count": 10},
        {"groupName": "微信", "count": 4},
        {"groupName": "论坛", "count": "1"},
    ])
}

/// A table record wrapping a payload.
pub fn table_record(title: &str, table_type: u8, datas: Value) -> Value {
    json!({"title": title, "table_type": table_type, "datas": datas})
}

/// A minimal section record with one table and a sequence rendering it.
pub fn section_with_table(table: Value) -> Value {
    json!({
        "title": "舆情周报",
        "tables": [table],
        "sequence": ["tables.0"],
    })
}
