//! Genetic strategy: tournament selection, slot-mask crossover with
//! duplicate repair, single-slot mutation, and best-ever elitism.

use rand::{Rng, seq::IndexedRandom};

use crate::{searcher::SearchContext, top::TopTeams};

/// An evaluated population member: member indices plus fitness.
type Evaluated = (Vec<usize>, f32);

/// Evolves a population for `generations` rounds, offering every
/// evaluated team to `top`. Returns the number of evaluations performed.
pub(crate) fn run<R: Rng + ?Sized>(
    ctx: &SearchContext<'_>,
    population_size: usize,
    generations: usize,
    mutation_probability: f64,
    tournament_size: usize,
    top: &mut TopTeams,
    rng: &mut R,
) -> u64 {
    let mut evaluations = 0_u64;
    let mut population: Vec<Vec<usize>> =
        (0..population_size).map(|_| ctx.draw_team(rng)).collect();
    let mut best_ever: Option<Evaluated> = None;

    for _generation in 0..generations {
        if ctx.should_stop() {
            break;
        }

        let fitness = ctx.evaluate_batch(&population);
        evaluations += population.len() as u64;

        let evaluated: Vec<Evaluated> = population
            .iter()
            .cloned()
            .zip(fitness.iter().copied())
            .collect();
        for (team, score) in &evaluated {
            top.offer(team, *score);
            if best_ever.as_ref().is_none_or(|(_, best)| *score > *best) {
                best_ever = Some((team.clone(), *score));
            }
        }

        // elitism: the best team ever seen survives unchanged
        let mut next: Vec<Vec<usize>> = Vec::with_capacity(population_size);
        if let Some((best, _)) = &best_ever {
            next.push(best.clone());
        }
        while next.len() < population_size {
            let parent_a = tournament_select(&evaluated, tournament_size, rng);
            let parent_b = tournament_select(&evaluated, tournament_size, rng);
            let mut child = crossover(ctx, parent_a, parent_b, rng);
            if rng.random_bool(mutation_probability) {
                mutate(ctx, &mut child, rng);
            }
            next.push(child);
        }
        population = next;
    }

    evaluations
}

/// Picks the fittest of `tournament_size` randomly chosen members.
fn tournament_select<'a, R: Rng + ?Sized>(
    evaluated: &'a [Evaluated],
    tournament_size: usize,
    rng: &mut R,
) -> &'a [usize] {
    let (team, _) = evaluated
        .choose_multiple(rng, tournament_size.max(1))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap();
    team
}

/// Copies each slot from a random parent, then repairs duplicate members
/// by redrawing from the pool.
fn crossover<R: Rng + ?Sized>(
    ctx: &SearchContext<'_>,
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let mut child: Vec<usize> = parent_a
        .iter()
        .zip(parent_b)
        .map(|(a, b)| if rng.random_bool(0.5) { *a } else { *b })
        .collect();
    ctx.repair_duplicates(&mut child, rng);
    child
}

/// Replaces one random slot with a fresh draw.
fn mutate<R: Rng + ?Sized>(ctx: &SearchContext<'_>, child: &mut Vec<usize>, rng: &mut R) {
    if child.is_empty() {
        return;
    }
    let slot = rng.random_range(0..child.len());
    child[slot] = ctx.draw_member(child, slot, rng);
}
