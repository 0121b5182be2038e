/// Global free-text fields of the form, addressed by one setter message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ExcludeKeywords,
    SheetUrl,
    SupEmailsSheetUrl,
    SupDomainsSheetUrl,
    SupNamesSheetUrl,
    Goal,
    Lpc,
    Size,
    Revenue,
}

/// The multi-select fields of one requirement block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockField {
    JobFunction,
    Level1,
    Level2,
    Level3,
}

pub enum Msg {
    SetProcessType(String),
    SetText(TextField, String),
    SetCompanyGeo(bool),
    SetIndustry(Vec<String>),
    SetGeo(Vec<String>),
    AddBlock,
    SetBlockSelection(usize, BlockField, Vec<String>),
    SetBlockKeywords(usize, String),
    Submit,
    StartPolling(String),
}
