const INSERT_SPANS: &str = include_str!("scripts/insert_spans.sql");
const INSERT_EVENTS: &str = include_str!("scripts/insert_events.sql");
const INSERT_LOGS: &str = include_str!("scripts/insert_logs.sql");

pub enum Queries {
    InsertSpans,
    InsertEvents,
    InsertLogs,
}

impl Queries {
    pub fn get_query(&self) -> &'static str {
        match self {
            Queries::InsertSpans => INSERT_SPANS,
            Queries::InsertEvents => INSERT_EVENTS,
            Queries::InsertLogs => INSERT_LOGS,
        }
    }
}
