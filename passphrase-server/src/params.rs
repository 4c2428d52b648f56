use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PassphraseParams {
    pub count: Option<i64>,
    pub allow_duplicates: Option<bool>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PassphraseResponse {
    pub app_name: String,
    pub words: Vec<String>,
    pub passphrase: String,
}

impl PassphraseResponse {
    pub fn new(app_name: &str, words: Vec<String>) -> Self {
        let passphrase = format_passphrase(&words);
        Self {
            app_name: app_name.to_string(),
            words,
            passphrase,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub version: String,
    pub pool_size: usize,
    pub word_count: i64,
    pub allow_duplicates: bool,
    pub selection: String,
}

/// Renders words as `[a, b, c]`.
pub fn format_passphrase(words: &[String]) -> String {
    format!("[{}]", words.join(", "))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn passphrase_is_rendered_as_a_bracketed_list() {
        let words = vec!["abc".to_string(), "g".to_string(), "abc".to_string()];
        assert_eq!("[abc, g, abc]", format_passphrase(&words));
        assert_eq!("[]", format_passphrase(&[]));
    }

    #[test]
    fn response_serializes_with_camel_case_keys() {
        let response = PassphraseResponse::new("portfolio", vec!["dec".into(), "cbc".into()]);

        assert_eq!(
            json!({
                "appName": "portfolio",
                "words": ["dec", "cbc"],
                "passphrase": "[dec, cbc]"
            }),
            serde_json::to_value(&response).unwrap()
        );
    }

    #[test]
    fn params_deserialize_from_camel_case() {
        let params: PassphraseParams =
            serde_json::from_str(r#"{"count": 3, "allowDuplicates": false}"#).unwrap();

        assert_eq!(Some(3), params.count);
        assert_eq!(Some(false), params.allow_duplicates);
    }
}
