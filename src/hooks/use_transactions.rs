// ============================================================================
// USE TRANSACTIONS HOOK - list-view state and its side effects
// ============================================================================
// Every filter mutation re-runs the fetch effect once. Each fetch takes a
// ticket; a response whose ticket is no longer the latest is settled to
// nothing, session included.
// ============================================================================

use chrono::NaiveDate;
use yew::prelude::*;

use crate::hooks::{use_notify, use_session_context};
use crate::models::{Notification, UploadFile};
use crate::services::{download_template as save_template, save_bytes};
use crate::stores::{PageSize, RequestSequence, TransactionAction, TransactionStore};
use crate::utils::{messages, redirect_to_entry, XLSX_MIME_TYPE};
use crate::viewmodels::{ExportOutcome, TransactionViewModel};

#[derive(Clone)]
pub struct UseTransactionsHandle {
    pub state: UseReducerHandle<TransactionStore>,
    pub change_page_size: Callback<PageSize>,
    pub change_page: Callback<usize>,
    pub change_search: Callback<String>,
    pub change_date_range: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
    pub export: Callback<()>,
    pub open_upload: Callback<()>,
    pub close_upload: Callback<()>,
    pub select_file: Callback<Option<UploadFile>>,
    pub submit_upload: Callback<()>,
    pub download_template: Callback<()>,
}

fn dispatch_with<T: 'static>(
    dispatcher: UseReducerDispatcher<TransactionStore>,
    make: fn(T) -> TransactionAction,
) -> Callback<T> {
    Callback::from(move |value: T| dispatcher.dispatch(make(value)))
}

#[hook]
pub fn use_transactions() -> UseTransactionsHandle {
    let state = use_reducer(TransactionStore::default);
    let sequence = use_mut_ref(RequestSequence::default);
    let session = use_session_context();
    let notify = use_notify();

    // Fetch on mount and after every filter change
    {
        let dispatcher = state.dispatcher();
        let publish = session.publish.clone();
        let sequence = sequence.clone();
        use_effect_with(state.filter.clone(), move |filter| {
            let ticket = sequence.borrow_mut().issue();
            let filter = filter.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let load = TransactionViewModel::new().load_page(&filter).await;
                let settled = load.settle(ticket, &sequence.borrow());
                if let Some(session) = settled.publish {
                    publish.emit(session);
                }
                if let Some(page) = settled.page {
                    dispatcher.dispatch(TransactionAction::PageLoaded(page));
                }
                if settled.redirect {
                    redirect_to_entry();
                }
            });
            || ()
        });
    }

    let change_page_size = dispatch_with(state.dispatcher(), TransactionAction::ChangePageSize);
    let change_page = dispatch_with(state.dispatcher(), TransactionAction::ChangePage);
    let change_search = dispatch_with(state.dispatcher(), TransactionAction::ChangeSearch);
    let select_file = dispatch_with(state.dispatcher(), TransactionAction::SelectFile);

    let change_date_range = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(start, end): (Option<NaiveDate>, Option<NaiveDate>)| {
            dispatcher.dispatch(TransactionAction::ChangeDateRange(start, end));
        })
    };

    let open_upload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TransactionAction::OpenUpload))
    };

    let close_upload = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TransactionAction::CloseUpload))
    };

    let export = {
        let dispatcher = state.dispatcher();
        let location = session.store.location_code();
        let notify = notify.clone();
        Callback::from(move |_| {
            let vm = TransactionViewModel::new();
            let job = match vm.prepare_export(location.as_deref()) {
                Ok(job) => job,
                Err(notification) => {
                    notify.emit(notification);
                    return;
                }
            };

            dispatcher.dispatch(TransactionAction::SetLoading(true));
            let dispatcher = dispatcher.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = vm.export(&job).await;
                let notification = match &outcome {
                    ExportOutcome::Ready(bytes) => {
                        match save_bytes(bytes, &job.file_name, XLSX_MIME_TYPE) {
                            Ok(()) => outcome.notification(),
                            Err(e) => {
                                log::error!("❌ Could not save {}: {}", job.file_name, e);
                                Notification::error(messages::EXPORT_ERROR)
                            }
                        }
                    }
                    _ => outcome.notification(),
                };
                notify.emit(notification);
                dispatcher.dispatch(TransactionAction::SetLoading(false));
            });
        })
    };

    let submit_upload = {
        let dispatcher = state.dispatcher();
        let staged = state
            .upload
            .as_ref()
            .map(|draft| draft.staged().map(UploadFile::clone));
        let current = session.store.session.clone();
        Callback::from(move |_| {
            let file = match &staged {
                Some(Ok(file)) => file.clone(),
                Some(Err(message)) => {
                    dispatcher.dispatch(TransactionAction::UploadInvalid(message.to_string()));
                    return;
                }
                None => return,
            };
            let session = match &current {
                Some(session) if session.location_code().is_some() => session.clone(),
                _ => {
                    let message = messages::LOCATION_REQUIRED.to_string();
                    dispatcher.dispatch(TransactionAction::UploadInvalid(message));
                    return;
                }
            };

            dispatcher.dispatch(TransactionAction::SetLoading(true));
            let dispatcher = dispatcher.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = TransactionViewModel::new().submit_upload(&session, &file).await;
                if let Some(notification) = outcome.notification() {
                    notify.emit(notification);
                }
                dispatcher.dispatch(TransactionAction::UploadFinished(outcome));
            });
        })
    };

    let download_template = Callback::from(|_| {
        if let Err(e) = save_template() {
            log::error!("❌ Template download failed: {}", e);
        }
    });

    UseTransactionsHandle {
        state,
        change_page_size,
        change_page,
        change_search,
        change_date_range,
        export,
        open_upload,
        close_upload,
        select_file,
        submit_upload,
        download_template,
    }
}
