use async_trait::async_trait;

use super::validation::{email, required, FieldError, FieldErrors};
use super::{FieldSpec, Form};
use crate::api::RecruitmentApi;
use crate::errors::ApiError;
use crate::models::{CvProcessed, CvSubmission};

/// "CV Management" page form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cv_text: String,
}

#[async_trait]
impl Form for CvForm {
    type Request = CvSubmission;
    type Response = CvProcessed;

    const NAME: &'static str = "cv";
    const ACTION: &'static str = "upload CV";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::line("name", "Name"),
        FieldSpec::line("email", "Email"),
        FieldSpec::optional("phone", "Phone"),
        FieldSpec::text("cv_text", "CV Text"),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "cv_text" => Some(&self.cv_text),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> Result<(), FieldError> {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "cv_text" => self.cv_text = value,
            other => return Err(FieldError::new(other, "Unknown field")),
        }
        Ok(())
    }

    fn validate(&self) -> Result<CvSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.check("name", required(&self.name, "Name is required"));
        let address = errors.check("email", email(&self.email));
        let cv_text = errors.check("cv_text", required(&self.cv_text, "CV text is required"));

        // A blank phone is sent as absent.
        let phone = Some(self.phone.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        match (name, address, cv_text) {
            (Some(name), Some(address), Some(cv_text)) => Ok(CvSubmission {
                name: name.to_string(),
                email: address.to_string(),
                phone,
                cv_text: cv_text.to_string(),
            }),
            _ => Err(errors),
        }
    }

    async fn dispatch(
        api: &dyn RecruitmentApi,
        request: &CvSubmission,
    ) -> Result<CvProcessed, ApiError> {
        api.submit_cv(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SubmitError;
    use crate::forms::testing::FakeApi;
    use crate::forms::{FormController, SubmissionState};

    fn valid() -> CvForm {
        CvForm {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            phone: String::new(),
            cv_text: "Compiler pioneer".to_string(),
        }
    }

    #[test]
    fn test_blank_phone_is_omitted() {
        let form = CvForm {
            phone: "  ".to_string(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap().phone, None);
    }

    #[test]
    fn test_phone_is_trimmed() {
        let form = CvForm {
            phone: " 555-0100 ".to_string(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap().phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_bad_email_blocks_submission() {
        let form = CvForm {
            email: "grace-at-navy".to_string(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
    }

    #[test]
    fn test_empty_form_lists_required_fields_only() {
        let errors = CvForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("cv_text"), Some("CV text is required"));
        assert!(errors.get("phone").is_none());
    }

    #[tokio::test]
    async fn test_controller_bad_email_never_calls_api() {
        let api = FakeApi::default();
        let mut controller = FormController::with_form(CvForm {
            email: "grace@navy".to_string(),
            ..valid()
        });

        let err = controller.submit(&api).await.unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(
            controller.field_errors().get("email"),
            Some("Invalid email format")
        );
        assert_eq!(controller.state(), &SubmissionState::Idle);
        assert_eq!(controller.form().email, "grace@navy");
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_controller_empty_form_never_calls_api() {
        let api = FakeApi::default();
        let mut controller = FormController::<CvForm>::new();

        assert!(controller.submit(&api).await.is_err());
        assert_eq!(controller.field_errors().len(), 3);
        assert_eq!(api.call_count(), 0);
        assert!(api.cvs.lock().unwrap().is_empty());
    }
}
