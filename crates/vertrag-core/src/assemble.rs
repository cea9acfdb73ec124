//! Builds the fixed contract structure.

use jiff::Zoned;

use crate::filler;
use crate::models::block::{BlockKind, ContentBlock};
use crate::models::contract::ContractData;

const BODY_PARAGRAPHS: usize = 5;
const TABLE_ROWS: usize = 10;
const SIDE_PARAGRAPHS: usize = 5;

/// Assemble the contract: the ordered block sequence plus the static
/// letterhead fields, all filled with placeholder text.
///
/// The structure is fixed; only the wording changes between runs.
pub fn assemble_contract() -> ContractData {
    ContractData {
        elements: contract_blocks(),
        company_full_name: filler::words(1),
        company_addr1: filler::words(1),
        company_addr2: filler::words(1),
        name_sig_1: filler::words(2),
        name_sig_2: filler::words(2),
        anspr1: filler::words(2),
        anspr_pr_1: filler::words(2),
        rec: filler::words(2),
        rec_addr1: filler::words(2),
        rec_addr2: filler::words(2),
        datum: date_stamp(),
        ort: filler::words(1),
    }
}

/// The block sequence for the contract layout. Order is load-bearing: the
/// address field must come first and the signatures last.
fn contract_blocks() -> Vec<ContentBlock> {
    let mut elements = Vec::new();

    // Recipient data comes from the static fields, not the block itself.
    elements.push(ContentBlock::new(BlockKind::AddressField));

    elements.push(ContentBlock::new(BlockKind::Subject).with_title(filler::words(2)));

    for _ in 0..BODY_PARAGRAPHS {
        elements.push(
            ContentBlock::new(BlockKind::Paragraph)
                .with_title(filler::words(4))
                .with_text(filler::paragraphs(2)),
        );
    }

    let rows = (0..TABLE_ROWS)
        .map(|_| {
            ContentBlock::new(BlockKind::TableRow)
                .with_title(filler::words(2))
                .with_text(filler::words(5))
        })
        .collect();
    elements.push(
        ContentBlock::new(BlockKind::Table)
            .with_title("Testtabelle")
            .with_rows(rows),
    );

    elements.push(ContentBlock::new(BlockKind::Heading).with_title(filler::words(2)));

    for _ in 0..SIDE_PARAGRAPHS {
        elements.push(
            ContentBlock::new(BlockKind::SideParagraph)
                .with_title(filler::words(2))
                .with_text(filler::paragraphs(1)),
        );
    }

    // Closing paragraph sits directly above the signature lines.
    elements.push(ContentBlock::new(BlockKind::Paragraph).with_text(filler::paragraphs(1)));
    elements.push(ContentBlock::new(BlockKind::Signatures));

    elements
}

/// Today as `DD.MM.YYYY`.
fn date_stamp() -> String {
    let today = Zoned::now().date();
    format!("{:02}.{:02}.{:04}", today.day(), today.month(), today.year())
}
