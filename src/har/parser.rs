use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Har {
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub version: Option<String>,
    pub creator: Option<Creator>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Creator {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub started_date_time: Option<String>,
    #[serde(default)]
    pub request: Request,
}

/// One recorded request. Fields that exporters sometimes omit fall back to
/// defaults instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    pub cookies: Option<Vec<Cookie>>,
    pub post_data: Option<PostData>,
}

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: Option<String>,
    pub text: Option<String>,
}

/// Parse a HAR file from disk into strongly typed structures.
pub fn parse_har_file(path: &Path) -> Result<Har> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let har: Har = serde_json::from_reader(reader)?;
    Ok(har)
}

#[cfg(test)]
mod tests {
    use super::Har;

    #[test]
    fn parses_minimal_har() {
        let json = r#"
        {
          "log": {
            "entries": [
              {
                "startedDateTime": "2024-01-15T10:30:00.000Z",
                "request": {
                  "method": "GET",
                  "url": "https://example.com/",
                  "headers": []
                }
              }
            ]
          }
        }
        "#;

        let har: Har = serde_json::from_str(json).expect("HAR should parse");
        assert_eq!(har.log.entries.len(), 1);
        assert_eq!(har.log.entries[0].request.method, "GET");
    }

    #[test]
    fn missing_request_fields_use_defaults() {
        let json = r#"{ "log": { "entries": [ { "request": {} } ] } }"#;

        let har: Har = serde_json::from_str(json).expect("HAR should parse");
        let req = &har.log.entries[0].request;
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "");
        assert!(req.headers.is_empty());
        assert!(req.post_data.is_none());
    }

    #[test]
    fn ignores_response_side_fields() {
        let json = r#"
        {
          "log": {
            "entries": [
              {
                "request": { "method": "POST", "url": "https://example.com/a" },
                "response": { "status": 200, "statusText": "OK" },
                "time": 12.5
              }
            ]
          }
        }
        "#;

        let har: Har = serde_json::from_str(json).expect("HAR should parse");
        assert_eq!(har.log.entries[0].request.method, "POST");
    }
}
