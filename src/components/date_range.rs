use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::stores::DateRange;
use crate::utils::{parse_input_date, query_date};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub range: DateRange,
    pub on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
}

/// Start and end date inputs. Either end may be cleared.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let range = props.range;

    let on_start = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((parse_input_date(&input.value()), range.end));
        })
    };

    let on_end = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((range.start, parse_input_date(&input.value())));
        })
    };

    html! {
        <div class="date-range">
            <input type="date" aria-label="Start date" value={query_date(range.start)} onchange={on_start} />
            <span class="date-range-separator">{"to"}</span>
            <input type="date" aria-label="End date" value={query_date(range.end)} onchange={on_end} />
        </div>
    }
}
