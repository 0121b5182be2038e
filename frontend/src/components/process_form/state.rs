//! Component state for the process form.
//!
//! All form values live here, not in the DOM: submission assembles the
//! payload from this struct, and requirement blocks are instantiated from
//! the constant id template with a fresh suffix per block. The template
//! itself is never mutated, so block N+1 always starts blank.

use common::form::block_ids::{BlockIds, REQUIREMENTS_TEMPLATE};
use common::model::process::ProcessRequest;
use common::model::requirement::RequirementBlock;

use crate::poll::PollHandle;

/// One rendered requirement block: its instantiated element ids and its
/// current field values.
pub struct BlockState {
    pub ids: BlockIds,
    pub fields: RequirementBlock,
}

impl BlockState {
    pub fn fresh(n: u32) -> Self {
        Self {
            ids: REQUIREMENTS_TEMPLATE.instantiate(n),
            fields: RequirementBlock::default(),
        }
    }
}

pub struct ProcessForm {
    pub process_type: Option<String>,
    pub exclude_keywords: String,
    pub sheet_url: String,
    pub sup_emails_sheet_url: String,
    pub sup_domains_sheet_url: String,
    pub sup_names_sheet_url: String,
    pub goal: String,
    pub lpc: String,
    pub size: String,
    pub revenue: String,
    pub company_geo: bool,
    pub industry: Vec<String>,
    pub geo: Vec<String>,
    pub blocks: Vec<BlockState>,
    /// Monotonic counter of blocks ever created; suffixes are never reused.
    pub block_counter: u32,
    pub poll: Option<PollHandle>,
}

impl ProcessForm {
    /// Starts with one blank requirement block, like the served page.
    pub fn new() -> Self {
        Self {
            process_type: None,
            exclude_keywords: String::new(),
            sheet_url: String::new(),
            sup_emails_sheet_url: String::new(),
            sup_domains_sheet_url: String::new(),
            sup_names_sheet_url: String::new(),
            goal: String::new(),
            lpc: String::new(),
            size: String::new(),
            revenue: String::new(),
            company_geo: false,
            industry: Vec::new(),
            geo: Vec::new(),
            blocks: vec![BlockState::fresh(1)],
            block_counter: 1,
            poll: None,
        }
    }

    pub fn add_block(&mut self) {
        self.block_counter += 1;
        self.blocks.push(BlockState::fresh(self.block_counter));
    }

    /// Assembles the submission payload, preserving block insertion order.
    pub fn payload(&self) -> ProcessRequest {
        ProcessRequest {
            geo: self.geo.clone(),
            exclude_keywords: self.exclude_keywords.clone(),
            sheet_url: self.sheet_url.clone(),
            company_geo: self.company_geo,
            sup_emails_sheet_url: self.sup_emails_sheet_url.clone(),
            sup_domains_sheet_url: self.sup_domains_sheet_url.clone(),
            sup_names_sheet_url: self.sup_names_sheet_url.clone(),
            goal: self.goal.clone(),
            lpc: self.lpc.clone(),
            size: self.size.clone(),
            industry: self.industry.clone(),
            revenue: self.revenue.clone(),
            requirements: self
                .blocks
                .iter()
                .map(|block| {
                    let mut fields = block.fields.clone();
                    fields.keywords = fields.keywords.trim().to_string();
                    fields
                })
                .collect(),
            process_type: self.process_type.clone(),
        }
    }

    pub fn cancel_poll(&mut self) {
        if let Some(poll) = self.poll.take() {
            poll.cancel();
        }
    }
}
