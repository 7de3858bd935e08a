use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr,
)]
pub enum EmployeeRange {
    #[serde(rename = "1-10")]
    #[strum(serialize = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    #[strum(serialize = "11-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    #[strum(serialize = "51-100")]
    UpTo100,
    #[serde(rename = "101-300")]
    #[strum(serialize = "101-300")]
    UpTo300,
    #[serde(rename = "301-500")]
    #[strum(serialize = "301-500")]
    UpTo500,
    #[serde(rename = "500+")]
    #[strum(serialize = "500+")]
    Over500,
}

impl EmployeeRange {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRange::UpTo10 => "1-10名",
            EmployeeRange::UpTo50 => "11-50名",
            EmployeeRange::UpTo100 => "51-100名",
            EmployeeRange::UpTo300 => "101-300名",
            EmployeeRange::UpTo500 => "301-500名",
            EmployeeRange::Over500 => "500名以上",
        }
    }
}

#[derive(
    EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InquiryType {
    Service,
    Pricing,
    Demo,
    Consultation,
    Other,
}

impl InquiryType {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::Service => "サービス内容について",
            InquiryType::Pricing => "料金について",
            InquiryType::Demo => "デモンストレーション希望",
            InquiryType::Consultation => "導入相談",
            InquiryType::Other => "その他",
        }
    }
}
