//! Fixed option data for the process form selects.
//!
//! The backend ships these lists as static data, so the frontend carries
//! the same values instead of fetching them.

pub const PROCESS_TYPES: &[(&str, &str)] = &[
    ("search_by_domain", "Search by domain"),
    ("search_by_name", "Search by name"),
    ("search_mixed", "Mixed search"),
];

pub const INDUSTRIES: &[&str] = &[
    "Banking",
    "Insurance",
    "Financial Services",
    "Healthcare",
    "Pharmaceuticals",
    "Manufacturing",
    "Retail",
    "Logistics",
    "Telecommunications",
    "Information Technology",
    "Energy",
    "Construction",
    "Education",
    "Hospitality",
    "Real Estate",
];

pub const JOB_FUNCTIONS: &[&str] = &[
    "Information Technology",
    "Finance",
    "Accounting",
    "Engineering",
    "Operations",
    "Sales",
    "Marketing",
    "Human Resources",
    "Legal",
    "Procurement",
    "Supply Chain",
    "Customer Support",
    "Risk & Compliance",
    "Product",
];

/// Seniority bands, ordered from junior to ownership. The from/to level
/// selects pick a range over this ordering.
pub const JOB_LEVELS: &[&str] = &[
    "Lower Managment (Employee)",
    "Senior Lower Managment (Sr Employee)",
    "Middle Managment (Manager)",
    "Senior Middle Management (Sr Manager)",
    "Senior Management (Director)",
    "C Level",
    "Ownership",
];

pub const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Ireland",
    "Germany",
    "France",
    "Netherlands",
    "Belgium",
    "Switzerland",
    "Austria",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Spain",
    "Italy",
    "Poland",
    "Australia",
    "New Zealand",
    "Singapore",
];
