use turntrace_types::Event;

/// Chronological order by timestamp.
///
/// The sort is stable: events sharing a timestamp keep their file order,
/// which matters because tool results are often written within the same
/// millisecond as the call. Events without a timestamp sort before every
/// timestamped event and keep file order among themselves.
pub fn order_events(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|e| e.timestamp);
    events
}
