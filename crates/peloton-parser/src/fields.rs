//! Field names understood by the registration rules.

pub const NAME: &str = "name";
pub const PATERNAL_SURNAME: &str = "paternal_surname";
pub const MATERNAL_SURNAME: &str = "maternal_surname";
pub const EMAIL: &str = "email";
pub const SEX: &str = "sex";
pub const CATEGORY: &str = "category";
pub const PAYMENT_COMPLETED: &str = "payment_completed";
pub const PAYMENT_RECEIPT_PATH: &str = "payment_receipt_path";
pub const ID_DOCUMENT_PATH: &str = "id_document_path";

/// Fields every registration must declare, in reporting order.
pub const REQUIRED: [&str; 5] = [NAME, PATERNAL_SURNAME, EMAIL, SEX, CATEGORY];
