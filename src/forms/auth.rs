use super::{FormErrors, FormSchema};
use crate::models::auth::LoginRequest;
use crate::models::users::{RegisterRequest, UserRole};
use crate::utils::validate::{
    validate_email, validate_name, validate_password, validate_required,
};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormSchema for LoginForm {
    type Output = LoginRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("email", validate_required(&self.email, "O e-mail é obrigatório"));
        errors.check(
            "password",
            validate_required(&self.password, "A senha é obrigatória"),
        );
        errors
    }

    fn into_output(self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// 注册表单，默认角色为学生
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub profile: i64,
    pub avatar_id: Option<i64>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            profile: UserRole::STUDENT,
            avatar_id: None,
        }
    }
}

impl FormSchema for RegisterForm {
    type Output = RegisterRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("name", validate_name(&self.name));
        errors.check("email", validate_email(&self.email));
        errors.check("password", validate_password(&self.password));
        errors.check("confirmPassword", validate_password(&self.confirm_password));

        if errors.get("confirmPassword").is_none() && self.password != self.confirm_password {
            errors.add("confirmPassword", "As senhas não coincidem!");
        }

        if UserRole::from_code(self.profile).is_none() {
            errors.add("profile", "Perfil inválido");
        }
        errors
    }

    fn into_output(self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            // validate 已保证角色合法
            profile: UserRole::from_code(self.profile).unwrap_or(UserRole::Student),
            avatar_id: self.avatar_id,
        }
    }
}
