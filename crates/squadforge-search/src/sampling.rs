//! Random-sampling strategy.

use rand::Rng;

use crate::{searcher::SearchContext, top::TopTeams};

/// Teams evaluated per cancellation/time-budget check.
const BATCH_SIZE: usize = 64;

/// Draws `samples` random teams, scoring them in parallel batches.
/// Returns the number of evaluations performed.
pub(crate) fn run<R: Rng + ?Sized>(
    ctx: &SearchContext<'_>,
    samples: usize,
    top: &mut TopTeams,
    rng: &mut R,
) -> u64 {
    let mut evaluations = 0_u64;
    let mut remaining = samples;

    while remaining > 0 {
        if ctx.should_stop() {
            break;
        }
        let batch_len = remaining.min(BATCH_SIZE);
        let batch: Vec<Vec<usize>> = (0..batch_len).map(|_| ctx.draw_team(rng)).collect();
        let fitness = ctx.evaluate_batch(&batch);
        for (team, score) in batch.iter().zip(&fitness) {
            top.offer(team, *score);
        }
        evaluations += batch_len as u64;
        remaining -= batch_len;
    }

    evaluations
}
