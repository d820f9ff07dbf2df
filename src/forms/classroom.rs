use super::{FormErrors, FormSchema};
use crate::models::classes::CreateClassroomRequest;
use crate::utils::validate::{validate_invite_code, validate_required};

#[derive(Debug, Clone, Default)]
pub struct CreateClassroomForm {
    pub name: String,
    pub description: String,
}

impl FormSchema for CreateClassroomForm {
    type Output = CreateClassroomRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "name",
            validate_required(&self.name, "O nome da sala de aula é obrigatório"),
        );
        errors
    }

    fn into_output(self) -> CreateClassroomRequest {
        CreateClassroomRequest {
            name: self.name.trim().to_string(),
            description: self.description,
        }
    }
}

/// 加入班级，输出即邀请码
#[derive(Debug, Clone, Default)]
pub struct JoinClassroomForm {
    pub code: String,
}

impl FormSchema for JoinClassroomForm {
    type Output = String;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("code", validate_invite_code(self.code.trim()));
        errors
    }

    fn into_output(self) -> String {
        self.code.trim().to_string()
    }
}
