use std::collections::HashMap;

use serde_json::Value;

/// Canonical form used to compare a submitted answer with the answer key.
pub fn normalize_answer(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// Submitted answers keyed by question id string.
///
/// Built from whatever the submission flow stored. Anything that is not a JSON
/// object of strings is ignored rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: HashMap<String, String>,
}

impl AnswerSheet {
    pub fn from_value(raw: &Value) -> Self {
        let Value::Object(map) = raw else {
            return Self::default();
        };

        let answers = map
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
            .collect();

        Self { answers }
    }

    pub fn get(&self, question_key: &str) -> Option<&str> {
        self.answers.get(question_key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSheet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_answer(Some("  Paris ")), "paris");
        assert_eq!(normalize_answer(Some("OPTION\tA\n")), "option\ta");
    }

    #[test]
    fn normalize_missing_is_empty() {
        assert_eq!(normalize_answer(None), "");
        assert_eq!(normalize_answer(Some("   ")), "");
    }

    #[test]
    fn sheet_keeps_only_string_values() {
        let sheet = AnswerSheet::from_value(&json!({
            "1": "optionA",
            "2": 5,
            "3": null,
            "4": ["optionB"],
            "5": { "nested": "x" },
            "6": ""
        }));

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("1"), Some("optionA"));
        assert_eq!(sheet.get("2"), None);
        assert_eq!(sheet.get("6"), Some(""));
    }

    #[test]
    fn sheet_from_non_object_is_empty() {
        for raw in [json!(null), json!([]), json!(["a"]), json!("1"), json!(7), json!(true)] {
            assert!(AnswerSheet::from_value(&raw).is_empty(), "{raw}");
        }
    }
}
