use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_camel_case_field_names() {
        let customer = Customer {
            id: "1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            })
        );
    }

    #[test]
    fn rejects_missing_and_unknown_fields() {
        let missing = json!({ "id": "1", "firstName": "Ada", "lastName": "Lovelace" });
        assert!(serde_json::from_value::<Customer>(missing).is_err());

        let unknown = json!({
            "id": "1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "555"
        });
        assert!(serde_json::from_value::<Customer>(unknown).is_err());

        let wrong_type = json!({
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        });
        assert!(serde_json::from_value::<Customer>(wrong_type).is_err());
    }
}
