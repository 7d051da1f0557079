//! Behavioural tests for `BacktrackingPlanner` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tourpack_core::test_support::scenario_snapshot;
use tourpack_core::{Catalog, PackageRequest, PackageResponse, PlanError, Planner};
use tourpack_solver_bt::BacktrackingPlanner;

#[derive(Debug)]
struct PlannerWorld {
    catalog: RefCell<Option<Catalog>>,
    request: RefCell<PackageRequest>,
    outcome: RefCell<Option<Result<PackageResponse, PlanError>>>,
}

impl PlannerWorld {
    fn new() -> Self {
        Self {
            catalog: RefCell::new(None),
            request: RefCell::new(PackageRequest::new("R1")),
            outcome: RefCell::new(None),
        }
    }

    fn expect_response(&self) -> PackageResponse {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
            .expect("expected package generation to succeed")
    }

    fn selected_ids(&self) -> Vec<u64> {
        self.expect_response()
            .package
            .tours
            .iter()
            .map(|tour| tour.id)
            .collect()
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::new()
}

#[given("a region with three tours where the third repeats an attraction of the first")]
fn given_scenario_region(world: &PlannerWorld) {
    let catalog = Catalog::load(&scenario_snapshot()).expect("scenario catalog loads");
    world.catalog.replace(Some(catalog));
}

#[given("a limit of 5 days")]
fn given_five_days(world: &PlannerWorld) {
    world.request.borrow_mut().max_days = Some(5);
}

#[given("a limit of 3 days")]
fn given_three_days(world: &PlannerWorld) {
    world.request.borrow_mut().max_days = Some(3);
}

#[given("a budget of 300")]
fn given_budget_300(world: &PlannerWorld) {
    world.request.borrow_mut().max_budget = Some(300.0);
}

#[given("a budget of 0")]
fn given_budget_zero(world: &PlannerWorld) {
    world.request.borrow_mut().max_budget = Some(0.0);
}

#[given("a budget that is not a number")]
fn given_nan_budget(world: &PlannerWorld) {
    world.request.borrow_mut().max_budget = Some(f64::NAN);
}

#[given("the request targets a region without tours")]
fn given_empty_region(world: &PlannerWorld) {
    world.request.borrow_mut().region_id = "R2".to_owned();
}

#[when("the package is generated")]
fn when_generated(world: &PlannerWorld) {
    let catalog = world
        .catalog
        .borrow_mut()
        .take()
        .expect("catalog should be prepared");
    let planner = BacktrackingPlanner::new(catalog);
    let outcome = planner.generate_package(&world.request.borrow());
    world.outcome.replace(Some(outcome));
}

#[then("the package contains tours 1 and 2")]
fn then_tours_one_and_two(world: &PlannerWorld) {
    assert_eq!(world.selected_ids(), vec![1, 2]);
}

#[then("the package contains tour 2 only")]
fn then_tour_two(world: &PlannerWorld) {
    assert_eq!(world.selected_ids(), vec![2]);
}

#[then("the package costs 250")]
fn then_costs_250(world: &PlannerWorld) {
    let cost = world.expect_response().package.total_cost;
    assert!((cost - 250.0).abs() < f64::EPSILON);
}

#[then("the package is worth 35")]
fn then_worth_35(world: &PlannerWorld) {
    assert_eq!(world.expect_response().package.total_value, 35);
}

#[then("the package is worth 20")]
fn then_worth_20(world: &PlannerWorld) {
    assert_eq!(world.expect_response().package.total_value, 20);
}

#[then("the package is empty")]
fn then_empty(world: &PlannerWorld) {
    let package = world.expect_response().package;
    assert!(package.is_empty());
    assert_eq!(package.total_value, 0);
    assert!(package.total_cost.abs() < f64::EPSILON);
}

#[then("the request is rejected as invalid")]
fn then_invalid(world: &PlannerWorld) {
    let outcome = world.outcome.borrow();
    assert!(matches!(
        outcome.as_ref(),
        Some(Err(PlanError::InvalidRequest))
    ));
}

#[scenario(path = "tests/features/package_planner.feature", index = 0)]
fn five_day_budget_trip(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_planner.feature", index = 1)]
fn three_day_limit(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_planner.feature", index = 2)]
fn zero_budget(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_planner.feature", index = 3)]
fn region_without_tours(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/package_planner.feature", index = 4)]
fn not_a_number_budget(world: PlannerWorld) {
    let _ = world;
}
