// ============================================================================
// UPLOAD DIALOG - pick and submit an Excel file
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::UploadFile;
use crate::stores::UploadDraft;

#[derive(Properties, PartialEq)]
pub struct UploadDialogProps {
    pub draft: UploadDraft,
    pub on_select: Callback<Option<UploadFile>>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(UploadDialog)]
pub fn upload_dialog(props: &UploadDialogProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input
                .files()
                .and_then(|files| files.get(0))
                .map(UploadFile::from_browser);
            on_select.emit(file);
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_backdrop = on_cancel.clone();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" aria-modal="true" onclick={stop}>
                <h2 class="modal-title">{"Upload Excel File"}</h2>
                <form {onsubmit}>
                    <input type="file" accept=".xls, .xlsx" {onchange} />
                    if let Some(file) = &props.draft.selected {
                        <p class="selected-file">{file.name.clone()}</p>
                    }
                    if let Some(error) = &props.draft.error {
                        <p class="form-error">{error.clone()}</p>
                    }
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary">{"Upload"}</button>
                        <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
