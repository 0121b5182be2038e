//! Bounded, cancellable poller for asynchronous processing results.
//!
//! After a submission is accepted the backend keeps answering 404 on the
//! per-entry data endpoint until processing finishes. This task retries on
//! a fixed cadence up to the attempt budget and hands the first complete
//! result to its callback. Resubmitting or tearing the form down cancels
//! the task through the returned handle.

use std::cell::Cell;
use std::rc::Rc;

use common::flow::poll::{PollStep, MAX_ATTEMPTS, RETRY_DELAY_MS};
use common::model::process::ProcessedResult;
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::Callback;

/// Cancellation handle for a running poll task.
#[derive(Clone)]
pub struct PollHandle {
    cancelled: Rc<Cell<bool>>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

/// Starts polling for the processed data of `entry_id`. The callback fires
/// at most once; exhausting the budget only logs.
pub fn start(entry_id: String, on_ready: Callback<ProcessedResult>) -> PollHandle {
    let handle = PollHandle {
        cancelled: Rc::new(Cell::new(false)),
    };
    let cancelled = handle.cancelled.clone();

    spawn_local(async move {
        log!(format!("Polling processed data for entry {entry_id}"));

        for attempt in 1..=MAX_ATTEMPTS {
            if cancelled.get() {
                return;
            }

            match crate::api::fetch_process_data(&entry_id).await {
                Ok(PollStep::Ready(result)) => {
                    if !cancelled.get() {
                        on_ready.emit(result);
                    }
                    return;
                }
                Ok(PollStep::NotReady) => {
                    log!(format!("Data not ready yet (attempt {attempt}/{MAX_ATTEMPTS})"));
                }
                Ok(PollStep::Incomplete) => {
                    log!("Processing incomplete, retrying");
                }
                Ok(PollStep::Failed(status)) => {
                    error!(format!("Processed data request failed with status {status}"));
                }
                Ok(PollStep::Malformed) => {
                    error!("Unexpected processed data payload");
                }
                Err(err) => {
                    error!(format!("Error fetching processed data: {err:?}"));
                }
            }

            TimeoutFuture::new(RETRY_DELAY_MS).await;
        }

        log!("Processed data not available within timeout");
    });

    handle
}
