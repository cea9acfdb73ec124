use serde::{Deserialize, Serialize};

/// The closed set of block categories a contract is built from.
///
/// Every renderable unit carries exactly one kind; the HTML template
/// branches on it to pick the markup for the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Generic,
    AddressField,
    Signatures,
    TableRow,
    Table,
    SideParagraph,
    Heading,
    Subject,
    UserHtml,
}

impl BlockKind {
    /// All kinds, in declaration order.
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Paragraph,
        BlockKind::Generic,
        BlockKind::AddressField,
        BlockKind::Signatures,
        BlockKind::TableRow,
        BlockKind::Table,
        BlockKind::SideParagraph,
        BlockKind::Heading,
        BlockKind::Subject,
        BlockKind::UserHtml,
    ];

    /// The serialized tag, as templates see it.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Generic => "generic",
            BlockKind::AddressField => "address_field",
            BlockKind::Signatures => "signatures",
            BlockKind::TableRow => "table_row",
            BlockKind::Table => "table",
            BlockKind::SideParagraph => "side_paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Subject => "subject",
            BlockKind::UserHtml => "user_html",
        }
    }
}

/// Block payload: free text, or the ordered row blocks of a table.
///
/// Serialized untagged, so a template sees either a plain string or an
/// array of blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Text(String),
    Rows(Vec<ContentBlock>),
}

/// One structural unit of the rendered document.
///
/// Block order is layout order: the assembler emits blocks top to bottom
/// and nothing downstream reorders or deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub title: Option<String>,
    pub content: Option<BlockContent>,
}

impl ContentBlock {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Some(BlockContent::Text(text.into()));
        self
    }

    pub fn with_rows(mut self, rows: Vec<ContentBlock>) -> Self {
        self.content = Some(BlockContent::Rows(rows));
        self
    }

    pub fn is_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph
    }

    pub fn is_generic(&self) -> bool {
        self.kind == BlockKind::Generic
    }

    pub fn is_address_field(&self) -> bool {
        self.kind == BlockKind::AddressField
    }

    pub fn is_signatures(&self) -> bool {
        self.kind == BlockKind::Signatures
    }

    pub fn is_table_row(&self) -> bool {
        self.kind == BlockKind::TableRow
    }

    pub fn is_table(&self) -> bool {
        self.kind == BlockKind::Table
    }

    pub fn is_side_paragraph(&self) -> bool {
        self.kind == BlockKind::SideParagraph
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    pub fn is_subject(&self) -> bool {
        self.kind == BlockKind::Subject
    }

    pub fn is_user_html(&self) -> bool {
        self.kind == BlockKind::UserHtml
    }
}
