use contracts::shared::date_utils::{CalendarDay, MonthGrid, WEEKDAY_SHORT};
use leptos::prelude::*;

/// Month-grid date picker, Sunday first
///
/// Opens on the month of `initial`. Picking a day reports it through `on_select`;
/// closing is up to the caller.
#[component]
pub fn DatePicker(initial: CalendarDay, on_select: Callback<CalendarDay>) -> impl IntoView {
    let Some(start) = MonthGrid::new(initial.year, initial.month) else {
        log::error!("date picker: no month grid for {:?}", initial);
        return ().into_any();
    };
    let grid = RwSignal::new(start);

    let shift = move |forward: bool| {
        let moved = grid.with_untracked(|g| if forward { g.next() } else { g.previous() });
        match moved {
            Some(next) => grid.set(next),
            None => log::warn!("date picker: month out of range"),
        }
    };

    view! {
        <div class="date-picker">
            <div class="date-picker__header">
                <button class="button button--icon" title="Bulan sebelumnya" on:click=move |_| shift(false)>
                    "<"
                </button>
                <div class="date-picker__title">{move || grid.with(MonthGrid::title)}</div>
                <button class="button button--icon" title="Bulan berikutnya" on:click=move |_| shift(true)>
                    ">"
                </button>
            </div>
            <div class="date-picker__weekdays">
                {WEEKDAY_SHORT.iter().map(|day| view! { <div>{*day}</div> }).collect_view()}
            </div>
            <div class="date-picker__days">
                {move || {
                    let (year, month, blanks, days) =
                        grid.with(|g| (g.year, g.month, g.leading_blanks, g.days));
                    let blanks = (0..blanks).map(|_| view! { <div></div> }.into_any());
                    let days = (1..=days).map(move |day| {
                        let picked = CalendarDay::new(year, month, day);
                        view! {
                            <button
                                class="date-picker__day"
                                class:date-picker__day--selected={picked == initial}
                                on:click=move |_| on_select.run(picked)
                            >
                                {day}
                            </button>
                        }
                        .into_any()
                    });
                    blanks.chain(days).collect_view()
                }}
            </div>
        </div>
    }
    .into_any()
}
