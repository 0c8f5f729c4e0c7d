use shared::DateBadge;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateDisplayProps {
    /// Calendar date (YYYY-MM-DD) or RFC 3339 timestamp
    pub date: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Three-line date badge in Spanish: weekday, day number, month and year.
/// Unparseable dates show "Invalid Date" on every line.
#[function_component(DateDisplay)]
pub fn date_display(props: &DateDisplayProps) -> Html {
    let badge = DateBadge::from_date_str(&props.date);

    html! {
        <div class={classes!("date-display", props.class.clone())}>
            <div class="date-display-badge">
                <div class="date-display-day-name">{badge.day_name}</div>
                <div class="date-display-day-number">{badge.day_number}</div>
                <div class="date-display-month-year">{badge.month_year}</div>
            </div>
        </div>
    }
}
