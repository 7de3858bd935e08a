use axum::response::IntoResponse;
use careweave_contact::{EmployeeRange, InquiryType};
use strum::VariantArray;

use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub employee_ranges: &'static [EmployeeRange],
    pub inquiry_types: &'static [InquiryType],
    pub submit_delay_ms: u64,
    pub simulate: bool,
}

/// GET / - the whole company site on one page
pub async fn page(template: Template) -> impl IntoResponse {
    let page = IndexTemplate {
        employee_ranges: EmployeeRange::VARIANTS,
        inquiry_types: InquiryType::VARIANTS,
        submit_delay_ms: template.contact.submit_delay_ms,
        simulate: template.contact.simulate,
    };

    template.render(page)
}
