use super::step_builder::PendingStep;

/// Flag steps issued together by one assistant event.
///
/// Adjacent steps with the same origin are both marked; a run of three or
/// more is marked end to end. Steps without an origin are never marked.
pub(crate) fn mark_parallel(steps: &mut [PendingStep]) {
    for i in 1..steps.len() {
        let shared = match (&steps[i - 1].origin, &steps[i].origin) {
            (Some(prev), Some(cur)) => prev == cur,
            _ => false,
        };

        if shared {
            steps[i - 1].is_parallel = true;
            steps[i].is_parallel = true;
        }
    }
}
