use common::model::process::ProcessedResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProcessFormProps {
    /// Fired when a submission begins, before the request goes out. The
    /// parent clears the previously displayed result on it.
    pub on_submit_started: Callback<()>,
    /// Fired once when the result poller delivers the processed data.
    pub on_processed: Callback<ProcessedResult>,
}
