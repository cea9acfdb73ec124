use vertrag_core::assemble::assemble_contract;
use vertrag_core::models::block::{BlockContent, BlockKind};

#[test]
fn address_field_first_signatures_last() {
    let data = assemble_contract();
    let first = data.elements.first().expect("no blocks assembled");
    let last = data.elements.last().expect("no blocks assembled");
    assert_eq!(first.kind, BlockKind::AddressField);
    assert_eq!(last.kind, BlockKind::Signatures);
}

#[test]
fn kind_counts_are_fixed() {
    let data = assemble_contract();
    let count = |kind: BlockKind| data.elements.iter().filter(|b| b.kind == kind).count();

    assert_eq!(count(BlockKind::AddressField), 1);
    assert_eq!(count(BlockKind::Subject), 1);
    assert_eq!(count(BlockKind::Paragraph), 6);
    assert_eq!(count(BlockKind::Table), 1);
    assert_eq!(count(BlockKind::Heading), 1);
    assert_eq!(count(BlockKind::SideParagraph), 5);
    assert_eq!(count(BlockKind::Signatures), 1);
    assert_eq!(data.elements.len(), 16);
}

#[test]
fn table_holds_exactly_ten_rows() {
    let data = assemble_contract();
    let table = data
        .elements
        .iter()
        .find(|b| b.kind == BlockKind::Table)
        .expect("no table block");

    match &table.content {
        Some(BlockContent::Rows(rows)) => {
            assert_eq!(rows.len(), 10);
            assert!(rows.iter().all(|r| r.kind == BlockKind::TableRow));
        }
        other => panic!("table content should be rows, got {other:?}"),
    }
}

#[test]
fn titled_paragraphs_carry_multi_paragraph_bodies() {
    let data = assemble_contract();
    let titled: Vec<_> = data
        .elements
        .iter()
        .filter(|b| b.kind == BlockKind::Paragraph && b.title.is_some())
        .collect();
    assert_eq!(titled.len(), 5);

    for block in titled {
        match &block.content {
            Some(BlockContent::Text(text)) => {
                assert!(text.contains("\n\n"), "body should have two paragraphs");
            }
            other => panic!("paragraph content should be text, got {other:?}"),
        }
    }
}

#[test]
fn static_fields_are_present_and_non_empty() {
    let data = assemble_contract();
    let value = serde_json::to_value(&data).expect("serialization failed");
    let obj = value.as_object().expect("contract data is not an object");

    for key in [
        "company_full_name",
        "company_addr1",
        "company_addr2",
        "name_sig_1",
        "name_sig_2",
        "datum",
        "ort",
        "anspr1",
        "anspr_pr_1",
        "rec",
        "rec_addr1",
        "rec_addr2",
    ] {
        let field = obj.get(key).unwrap_or_else(|| panic!("missing field {key}"));
        let text = field.as_str().unwrap_or_else(|| panic!("{key} is not a string"));
        assert!(!text.is_empty(), "{key} is empty");
    }
}

#[test]
fn datum_is_todays_date_dotted() {
    let data = assemble_contract();
    let today = jiff::Zoned::now().date();
    let expected = format!("{:02}.{:02}.{:04}", today.day(), today.month(), today.year());
    assert_eq!(data.datum, expected);
}

#[test]
fn repeated_assembly_keeps_the_same_shape() {
    let a = assemble_contract();
    let b = assemble_contract();

    let kinds_a: Vec<_> = a.elements.iter().map(|e| e.kind).collect();
    let kinds_b: Vec<_> = b.elements.iter().map(|e| e.kind).collect();
    assert_eq!(kinds_a, kinds_b);
}
