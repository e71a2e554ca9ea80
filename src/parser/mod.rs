use crate::types::{Conference, ConferenceTable, StandingsRow};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

// Body rows only; header rows live under thead
static EAST_ROWS: Lazy<Selector> = Lazy::new(|| body_rows_selector(Conference::East));
static WEST_ROWS: Lazy<Selector> = Lazy::new(|| body_rows_selector(Conference::West));

fn body_rows_selector(conference: Conference) -> Selector {
    let css = format!("#{} > tbody > tr", conference.table_id());
    Selector::parse(&css).expect("standings row selector is valid CSS")
}

fn rows_selector(conference: Conference) -> &'static Selector {
    match conference {
        Conference::East => &EAST_ROWS,
        Conference::West => &WEST_ROWS,
    }
}

/// Extracts (East, West) standings from a parsed page.
///
/// A missing table yields an empty sequence rather than an error, and a
/// missing cell yields an empty string.
pub fn extract(doc: &Html) -> (ConferenceTable, ConferenceTable) {
    let east = extract_conference(doc, Conference::East);
    let west = extract_conference(doc, Conference::West);
    (east, west)
}

pub fn extract_conference(doc: &Html, conference: Conference) -> ConferenceTable {
    let rows: ConferenceTable = doc.select(rows_selector(conference)).map(parse_row).collect();

    if rows.is_empty() {
        warn!(
            table_id = conference.table_id(),
            "No standings rows found for {}; the page structure may have changed",
            conference.display_name()
        );
    } else {
        debug!(table_id = conference.table_id(), rows = rows.len(), "Extracted standings rows");
    }
    rows
}

/// Reads data cells 1, 2 and 3 of a row as team, wins and losses.
fn parse_row(row: ElementRef<'_>) -> StandingsRow {
    let mut cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "td")
        .map(cell_text);

    let team = cells.next().unwrap_or_default();
    let wins = cells.next().unwrap_or_default();
    let losses = cells.next().unwrap_or_default();
    StandingsRow { team, wins, losses }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
