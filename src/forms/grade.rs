use super::{FormErrors, FormSchema};
use crate::models::submissions::GradeSubmissionRequest;
use crate::utils::validate::{validate_grade, validate_required};

#[derive(Debug, Clone, Default)]
pub struct GradeSubmissionForm {
    pub value: f64,
    pub feedback: String,
}

impl FormSchema for GradeSubmissionForm {
    type Output = GradeSubmissionRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("value", validate_grade(self.value));
        errors.check(
            "feedback",
            validate_required(&self.feedback, "O feedback é obrigatório."),
        );
        errors
    }

    fn into_output(self) -> GradeSubmissionRequest {
        GradeSubmissionRequest {
            value: self.value,
            feedback: self.feedback,
        }
    }
}
