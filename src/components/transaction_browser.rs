// ============================================================================
// TRANSACTION BROWSER - controls, table, footer and upload dialog
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{DateRangePicker, LoadingOverlay, Pagination, TransactionTable, UploadDialog};
use crate::hooks::use_transactions;
use crate::stores::PageSize;

#[function_component(TransactionBrowser)]
pub fn transaction_browser() -> Html {
    let handle = use_transactions();
    let store = &*handle.state;
    let filter = &store.filter;

    let on_page_size = {
        let change_page_size = handle.change_page_size.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse().ok().and_then(PageSize::from_value) {
                Some(size) => change_page_size.emit(size),
                None => log::warn!("⚠️ Unknown page size {:?}", select.value()),
            }
        })
    };

    let on_search = {
        let change_search = handle.change_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            change_search.emit(input.value());
        })
    };

    let click = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let (from, to) = filter.showing(store.page.rows.len(), store.page.total_items);

    html! {
        <section class="transaction-browser">
            <div class="toolbar">
                <label class="page-size">
                    {"Show "}
                    <select onchange={on_page_size}>
                        { for PageSize::ALL.iter().map(|size| html! {
                            <option
                                value={size.value().to_string()}
                                selected={*size == filter.page_size()}
                            >
                                {size.value().to_string()}
                            </option>
                        }) }
                    </select>
                    {" entries"}
                </label>
                <div class="actions">
                    <button class="btn" onclick={click(&handle.download_template)}>{"Template"}</button>
                    <button class="btn" onclick={click(&handle.open_upload)}>{"Upload"}</button>
                    <DateRangePicker range={filter.range()} on_change={handle.change_date_range.clone()} />
                    <button class="btn btn-primary" onclick={click(&handle.export)}>{"Export"}</button>
                    <input
                        type="search"
                        class="search"
                        placeholder="Search..."
                        value={filter.search().to_string()}
                        oninput={on_search}
                    />
                </div>
            </div>

            <TransactionTable page={store.page.clone()} filter={filter.clone()} />

            <div class="table-footer">
                <span class="summary">
                    {format!("Showing {} to {} of {} results", from, to, store.page.total_items)}
                </span>
                <Pagination
                    current={filter.page()}
                    total_pages={store.page.total_pages}
                    on_change={handle.change_page.clone()}
                />
            </div>

            if let Some(draft) = &store.upload {
                <UploadDialog
                    draft={draft.clone()}
                    on_select={handle.select_file.clone()}
                    on_submit={handle.submit_upload.clone()}
                    on_close={handle.close_upload.clone()}
                />
            }
            if store.loading {
                <LoadingOverlay />
            }
        </section>
    }
}
