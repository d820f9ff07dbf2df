use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const INVITE_CODE_LEN: usize = 6;
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 10.0;

pub fn validate_required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err(message);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 按字符计数，名字里常有重音字母
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err("O nome deve ter no mínimo 2 caracteres");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("E-mail inválido");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("A senha deve ter no mínimo 6 caracteres");
    }
    Ok(())
}

pub fn validate_invite_code(code: &str) -> Result<(), &'static str> {
    // 邀请码固定 6 位
    if code.chars().count() != INVITE_CODE_LEN {
        return Err("O código deve ter exatamente 6 caracteres");
    }
    Ok(())
}

pub fn validate_grade(value: f64) -> Result<(), &'static str> {
    if value.is_nan() || value < MIN_GRADE {
        return Err("A nota mínima é 0");
    }
    if value > MAX_GRADE {
        return Err("A nota máxima é 10");
    }
    Ok(())
}
