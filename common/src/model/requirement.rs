use serde::{Deserialize, Serialize};

/// One requirement filter group from the process form.
///
/// A submission carries these in insertion order; every field is present
/// even when empty so the backend never has to guess at missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementBlock {
    pub job_function: Vec<String>,
    pub level1: Vec<String>,
    pub level2: Vec<String>,
    pub level3: Vec<String>,
    pub keywords: String,
}
