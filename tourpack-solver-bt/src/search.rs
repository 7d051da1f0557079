//! Depth-first enumeration of attraction-disjoint tour combinations.
//!
//! Candidates are visited in a fixed order and each combination is generated
//! once, as an increasing sequence of candidate indices. Every node of the
//! search tree, the root included, is compared against the best package seen
//! so far, so a bound violated deep in a branch still leaves its accepted
//! prefixes in contention.

use std::collections::{BTreeSet, HashSet};

use tourpack_core::{AttractionId, Catalog, PackageRequest, Tour};

/// A tour eligible for selection, with its attraction set and value resolved.
#[derive(Debug)]
pub(crate) struct Candidate<'a> {
    tour: &'a Tour,
    attractions: &'a BTreeSet<AttractionId>,
    value: u64,
}

impl<'a> Candidate<'a> {
    /// Resolve the candidates for `region_id`, in catalog order.
    pub(crate) fn for_region(catalog: &'a Catalog, region_id: &str) -> Vec<Self> {
        catalog
            .get_tours_in_region(region_id)
            .into_iter()
            .map(|tour| Self {
                tour,
                attractions: catalog.attractions_of(tour.id),
                value: catalog.tour_value(tour.id),
            })
            .collect()
    }

    fn conflicts_with(&self, consumed: &HashSet<AttractionId>) -> bool {
        self.attractions.iter().any(|id| consumed.contains(id))
    }
}

/// Upper bounds applied while extending a package.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Bounds {
    max_days: Option<u64>,
    max_budget: Option<f64>,
}

impl From<&PackageRequest> for Bounds {
    fn from(request: &PackageRequest) -> Self {
        Self {
            max_days: request.max_days.map(u64::from),
            max_budget: request.max_budget,
        }
    }
}

/// Cumulative totals of a partial package.
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    days: u64,
    cost: f64,
    value: u64,
}

impl Totals {
    #[expect(
        clippy::float_arithmetic,
        reason = "tour costs are monetary amounts stored as f64"
    )]
    fn extend(self, candidate: &Candidate<'_>, bounds: &Bounds) -> Option<Self> {
        let days = self.days + u64::from(candidate.tour.duration_days);
        if bounds.max_days.is_some_and(|max| days > max) {
            return None;
        }
        let cost = self.cost + candidate.tour.cost;
        if bounds.max_budget.is_some_and(|max| cost > max) {
            return None;
        }
        Some(Self {
            days,
            cost,
            value: self.value + candidate.value,
        })
    }
}

/// Mutable state shared by sibling branches; restored after each recursion.
#[derive(Debug, Default)]
struct Frontier<'a> {
    selection: Vec<&'a Tour>,
    consumed: HashSet<AttractionId>,
}

impl<'a> Frontier<'a> {
    fn push(&mut self, candidate: &Candidate<'a>) {
        self.selection.push(candidate.tour);
        self.consumed.extend(candidate.attractions.iter().copied());
    }

    fn pop(&mut self, candidate: &Candidate<'a>) {
        self.selection.pop();
        for id in candidate.attractions {
            self.consumed.remove(id);
        }
    }
}

/// Best package found by a search.
#[derive(Debug, Default)]
pub(crate) struct SearchOutcome<'a> {
    /// Selected tours in selection order.
    pub(crate) selection: Vec<&'a Tour>,
    /// Summed cost of `selection`.
    pub(crate) total_cost: f64,
    /// Summed distinct-attraction value of `selection`.
    pub(crate) total_value: u64,
    /// Nodes of the search tree visited, the root included.
    pub(crate) nodes_explored: u64,
}

impl<'a> SearchOutcome<'a> {
    fn consider(&mut self, frontier: &Frontier<'a>, totals: Totals) {
        self.nodes_explored += 1;
        if totals.value > self.total_value {
            self.selection.clone_from(&frontier.selection);
            self.total_cost = totals.cost;
            self.total_value = totals.value;
        }
    }
}

/// Search `candidates` for the most valuable package within `bounds`.
///
/// Ties keep the first package reached in traversal order.
pub(crate) fn search<'a>(candidates: &[Candidate<'a>], bounds: Bounds) -> SearchOutcome<'a> {
    let mut frontier = Frontier::default();
    let mut best = SearchOutcome::default();
    explore(
        candidates,
        0,
        bounds,
        Totals::default(),
        &mut frontier,
        &mut best,
    );
    best
}

fn explore<'a>(
    candidates: &[Candidate<'a>],
    start: usize,
    bounds: Bounds,
    totals: Totals,
    frontier: &mut Frontier<'a>,
    best: &mut SearchOutcome<'a>,
) {
    best.consider(frontier, totals);

    for (index, candidate) in candidates.iter().enumerate().skip(start) {
        if candidate.conflicts_with(&frontier.consumed) {
            continue;
        }
        let Some(extended) = totals.extend(candidate, &bounds) else {
            continue;
        };

        frontier.push(candidate);
        explore(candidates, index + 1, bounds, extended, frontier, best);
        frontier.pop(candidate);
    }
}
