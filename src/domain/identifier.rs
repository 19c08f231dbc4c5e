//! 사용자가 입력한 `<id>` 인자를 퀴즈 식별자로 해석하는 모듈.

use thiserror::Error;

use crate::domain::quiz::QuizId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("missing <id> argument")]
    Missing,
    #[error("<id> argument is not a number: {0}")]
    NotANumber(String),
}

/// 숫자 해석 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdParsing {
    /// 앞쪽 숫자만 취하고 나머지는 버린다(`"3abc"` → 3).
    #[default]
    Forgiving,
    /// 입력 전체가 숫자여야 한다.
    Strict,
}

impl IdParsing {
    /// 설정 문자열을 해석한다. 알 수 없는 값은 `None`.
    pub fn from_config(raw: Option<&str>) -> Option<Self> {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("forgiving") => Some(Self::Forgiving),
            Some("strict") => Some(Self::Strict),
            Some(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forgiving => "forgiving",
            Self::Strict => "strict",
        }
    }
}

/// `<id>` 인자를 검증해 식별자로 변환한다.
pub fn parse_identifier(raw: Option<&str>, mode: IdParsing) -> Result<QuizId, IdentifierError> {
    let Some(raw) = raw else {
        return Err(IdentifierError::Missing);
    };

    let digits = match mode {
        IdParsing::Forgiving => leading_digits(raw),
        IdParsing::Strict => {
            let trimmed = raw.trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
                ""
            } else {
                trimmed
            }
        }
    };

    if digits.is_empty() {
        return Err(IdentifierError::NotANumber(raw.to_string()));
    }

    digits
        .parse::<QuizId>()
        .map_err(|_| IdentifierError::NotANumber(raw.to_string()))
}

fn leading_digits(raw: &str) -> &str {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}
