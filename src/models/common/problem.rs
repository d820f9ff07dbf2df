use serde::Deserialize;

/// 服务端错误响应体（RFC 7807 problem details），所有字段可选
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// 尝试从响应体解析，失败时退回原始文本
    pub fn describe(body: &[u8]) -> String {
        if let Ok(problem) = serde_json::from_slice::<ProblemDetails>(body) {
            match (problem.title, problem.detail) {
                (Some(title), Some(detail)) => return format!("{title}: {detail}"),
                (Some(title), None) => return title,
                (None, Some(detail)) => return detail,
                (None, None) => {}
            }
        }

        let text = String::from_utf8_lossy(body).trim().to_string();
        if text.is_empty() {
            "empty response body".to_string()
        } else {
            text.chars().take(200).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_problem() {
        let body = br#"{"type":"about:blank","title":"Unauthorized","status":401,"detail":"Token expirado"}"#;
        assert_eq!(ProblemDetails::describe(body), "Unauthorized: Token expirado");
    }

    #[test]
    fn test_describe_plain_text() {
        assert_eq!(ProblemDetails::describe(b"Invalid code"), "Invalid code");
        assert_eq!(ProblemDetails::describe(b""), "empty response body");
    }
}
