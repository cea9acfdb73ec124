use serde::{Deserialize, Serialize};

use super::block::ContentBlock;

/// The full input to template rendering: the ordered block sequence plus
/// the static letterhead fields. Every field is addressable by name in the
/// contract template.
///
/// This is also the input contract a real caller would populate with
/// business data; [`assemble_contract`](crate::assemble::assemble_contract)
/// is the placeholder producer that fills it from the filler source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractData {
    /// Ordered block sequence; position encodes vertical layout.
    pub elements: Vec<ContentBlock>,

    // Letterhead
    pub company_full_name: String,
    pub company_addr1: String,
    pub company_addr2: String,

    // Signatories and contact persons
    pub name_sig_1: String,
    pub name_sig_2: String,
    pub anspr1: String,
    pub anspr_pr_1: String,

    // Recipient
    pub rec: String,
    pub rec_addr1: String,
    pub rec_addr2: String,

    /// Issue date, `DD.MM.YYYY`.
    pub datum: String,
    /// City the letter is issued from.
    pub ort: String,
}
