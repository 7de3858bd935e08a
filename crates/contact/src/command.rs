use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use validator::Validate;

use crate::{EmployeeRange, InquiryType};

pub const ACKNOWLEDGMENT_MESSAGE: &str =
    "お問い合わせを受け付けました。担当者より3営業日以内にご連絡いたします。";

/// Raw contact form payload as posted by the page.
///
/// Every key may be absent; whether a field is usable is decided by
/// [`Validate`], not by the decoder. Optional fields take any JSON scalar
/// as text and treat arrays or objects as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitFormInput {
    #[serde(
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub employees: Option<String>,
    #[serde(
        rename = "inquiry-type",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub inquiry_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(value)) => Some(value),
        Some(Scalar::Unsigned(value)) => Some(value.to_string()),
        Some(Scalar::Signed(value)) => Some(value.to_string()),
        Some(Scalar::Float(value)) => Some(value.to_string()),
        Some(Scalar::Flag(value)) => Some(value.to_string()),
        Some(Scalar::Other(_)) | None => None,
    };

    Ok(text)
}

/// A validated submission. Lives for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: Option<EmployeeRange>,
    pub inquiry_type: Option<InquiryType>,
    pub message: String,
}

impl TryFrom<SubmitFormInput> for Submission {
    type Error = crate::Error;

    fn try_from(input: SubmitFormInput) -> crate::Result<Self> {
        input.validate()?;

        let employees = parse_choice::<EmployeeRange>(input.employees, "employees")?;
        let inquiry_type = parse_choice::<InquiryType>(input.inquiry_type, "inquiry-type")?;

        Ok(Submission {
            company: input.company.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone: input.phone.filter(|phone| !phone.is_empty()),
            employees,
            inquiry_type,
            message: input.message.unwrap_or_default(),
        })
    }
}

/// The select boxes post "" for their placeholder option.
fn parse_choice<T: FromStr>(value: Option<String>, field: &str) -> crate::Result<Option<T>> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match T::from_str(&value) {
        Ok(choice) => Ok(Some(choice)),
        Err(_) => crate::bail!("invalid value for {field}: {value}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: String,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self {
            success: true,
            message: ACKNOWLEDGMENT_MESSAGE.to_owned(),
        }
    }
}

/// Request context recorded next to the payload.
#[derive(Debug, Default, Clone)]
pub struct Metadata {
    pub user_agent: Option<String>,
    pub origin: Option<String>,
}

/// Stateless contact form handler. Holds nothing between calls, so two
/// identical submissions are acknowledged twice.
#[derive(Debug, Default, Clone, Copy)]
pub struct Command;

impl Command {
    pub fn submit_form(
        &self,
        input: SubmitFormInput,
        metadata: &Metadata,
    ) -> crate::Result<Acknowledgment> {
        let submission = Submission::try_from(input)?;

        tracing::info!(
            company = %submission.company,
            name = %submission.name,
            email = %submission.email,
            phone = submission.phone.as_deref(),
            employees = submission.employees.as_ref().map(AsRef::<str>::as_ref),
            inquiry_type = submission.inquiry_type.as_ref().map(AsRef::<str>::as_ref),
            message = %submission.message,
            user_agent = metadata.user_agent.as_deref(),
            origin = metadata.origin.as_deref(),
            "contact form submission"
        );

        Ok(Acknowledgment::default())
    }
}
