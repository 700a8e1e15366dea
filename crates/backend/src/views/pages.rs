use contracts::domain::a001_timeline::aggregate::{DisasterRecord, YearDisasterEntry};

use super::{escape, layout};
use crate::domain::a001_timeline::service::YearTypeDetail;

pub fn index(disasters: &[DisasterRecord]) -> String {
    let rows: String = disasters.iter().map(timeline_row).collect();
    let body = if disasters.is_empty() {
        r#"<p class="empty">No disaster records available.</p>"#.to_string()
    } else {
        format!(
            r#"<table class="timeline">
  <thead><tr><th>Year</th><th>Type</th><th>Country</th><th>Event</th><th>Deaths</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>"#
        )
    };
    layout(
        "Natural Disasters",
        &format!(
            r#"<h1>Natural disasters through the years</h1>
<p class="summary">{} recorded events</p>
<section id="home-events" data-source="/home_events"></section>
{body}"#,
            disasters.len()
        ),
    )
}

/// Year page. `year` is `None` for the bare `/year` landing page.
pub fn year(year: Option<&str>, entries: &[YearDisasterEntry]) -> String {
    let heading = match year {
        Some(y) => format!("Disasters in {}", escape(y)),
        None => "Pick a year".to_string(),
    };
    let cards: String = entries.iter().map(year_card).collect();
    let body = match (year, entries.is_empty()) {
        (None, _) => String::new(),
        (Some(_), true) => r#"<p class="empty">No disasters recorded for this year.</p>"#.to_string(),
        (Some(_), false) => format!("<div class=\"cards\">\n{cards}</div>"),
    };
    layout(
        "Disasters by year",
        &format!(
            r#"<h1>{heading}</h1>
<form action="/year" method="get" onsubmit="location.href='/year/'+this.y.value;return false;">
  <input name="y" type="number" placeholder="e.g. 2004" />
  <button type="submit">Show</button>
</form>
{body}"#
        ),
    )
}

pub fn year_disaster(view: &YearTypeDetail) -> String {
    let year_label = view.year.map(|y| y.to_string()).unwrap_or_default();
    let detail = match &view.detail {
        Some(detail) => {
            let attributes: String = detail
                .attributes
                .keys()
                .filter_map(|key| {
                    detail.text(key).map(|value| {
                        format!("  <dt>{}</dt><dd>{}</dd>\n", escape(key), escape(&value))
                    })
                })
                .collect();
            format!(
                "<section class=\"disaster-detail\">\n<h2>{}</h2>\n<dl>\n{attributes}</dl>\n</section>",
                escape(&detail.disaster_type)
            )
        }
        None => r#"<section class="disaster-detail empty"></section>"#.to_string(),
    };

    let rows: String = view.records.iter().map(detail_row).collect();
    let list = if view.records.is_empty() {
        r#"<p class="empty">No recorded events.</p>"#.to_string()
    } else {
        format!(
            r#"<table class="events">
  <thead><tr><th>Country</th><th>Location</th><th>Event</th><th>Start</th><th>Deaths</th><th>Affected</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>"#
        )
    };

    layout(
        &format!("{} {}", view.disaster_type, year_label),
        &format!(
            "<h1>{} in {}</h1>\n{detail}\n{list}",
            escape(&view.disaster_type),
            escape(&year_label)
        ),
    )
}

fn year_card(entry: &YearDisasterEntry) -> String {
    let href = format!(
        "/yearDisaster?disasterType={}&year={}",
        urlencoding::encode(&entry.disaster_type),
        urlencoding::encode(&entry.year)
    );
    let image = entry
        .image
        .as_deref()
        .map(|src| format!("  <img src=\"{}\" alt=\"{}\" />\n", escape(src), escape(&entry.disaster_type)))
        .unwrap_or_default();
    format!(
        "<article class=\"disaster-card\" data-type=\"{ty}\">\n{image}  <h2><a href=\"{href}\">{ty}</a></h2>\n  <p>{desc}</p>\n</article>\n",
        ty = escape(&entry.disaster_type),
        href = href.replace('&', "&amp;"),
        desc = escape(entry.desc.as_deref().unwrap_or_default()),
    )
}

fn timeline_row(record: &DisasterRecord) -> String {
    format!(
        "    <tr class=\"timeline-row\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        opt(record.start_year),
        text(&record.disaster_type),
        text(&record.country),
        text(&record.event_name),
        opt(record.total_deaths),
    )
}

fn detail_row(record: &DisasterRecord) -> String {
    let start = [record.start_day, record.start_month, record.start_year]
        .iter()
        .flatten()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(".");
    format!(
        "    <tr class=\"disaster-row\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        text(&record.country),
        text(&record.location),
        text(&record.event_name),
        escape(&start),
        opt(record.total_deaths),
        opt(record.total_affected),
    )
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
