//! Behaviour-driven step definitions driving the CLI scenarios.

use super::helpers::{Workspace, evening};
use super::*;
use crate::profile::{run_cuisines_with, run_reset_with, run_swipe_with, run_undo_with};
use crate::recommend::run_recommend_with;
use dishswipe_core::PreferenceStore;
use dishswipe_data::JsonFilePreferenceStore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct CliWorld {
    workspace: RefCell<Workspace>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        Self {
            workspace: RefCell::new(Workspace::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn command_line(&self, command: &str, with_candidates: bool) -> Vec<String> {
        let workspace = self.workspace.borrow();
        let mut words = command.split_whitespace().map(str::to_owned);
        let mut argv = vec!["dishswipe".to_owned()];
        argv.extend(words.next());
        argv.extend([
            format!("--{ARG_PROFILE}"),
            workspace.profile.as_str().to_owned(),
        ]);
        if with_candidates {
            argv.extend([
                format!("--{ARG_CANDIDATES}"),
                workspace.candidates.as_str().to_owned(),
            ]);
        }
        argv.extend(words);
        argv
    }

    fn run(&self, argv: Vec<String>) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        buffer.clear();
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Recommend(args) => run_recommend_with(args, &mut *buffer),
            Command::Swipe(args) => run_swipe_with(args, evening(), &mut *buffer),
            Command::Undo(args) => run_undo_with(args, evening(), &mut *buffer),
            Command::Reset(args) => run_reset_with(args, evening()),
            Command::Cuisines(args) => run_cuisines_with(args, evening(), &mut *buffer),
            Command::Fetch(_) => panic!("fetch needs network access"),
        });
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("a candidate file holding the sample dishes")]
fn sample_candidates(#[from(world)] world: &CliWorld) {
    *world.workspace.borrow_mut() = Workspace::with_sample_candidates();
}

const CARBONARA: &str = "52982";
const GREEN_CURRY: &str = "52814";
const UNKNOWN_DISH: &str = "1";

#[when("I like the carbonara from the command line")]
fn like_carbonara(#[from(world)] world: &CliWorld) {
    world.run(world.command_line(&format!("swipe --dish {CARBONARA} --action like"), true));
}

#[when("I super like the green curry from the command line")]
fn super_like_curry(#[from(world)] world: &CliWorld) {
    world.run(world.command_line(
        &format!("swipe --dish {GREEN_CURRY} --action superlike"),
        true,
    ));
}

#[when("I like an unknown dish from the command line")]
fn like_unknown(#[from(world)] world: &CliWorld) {
    world.run(world.command_line(&format!("swipe --dish {UNKNOWN_DISH} --action like"), true));
}

#[when("I ask for three evening recommendations")]
fn recommend_evening(#[from(world)] world: &CliWorld) {
    world.run(world.command_line("recommend --hour 19 --limit 3", true));
}

#[when("I undo the last swipe")]
fn undo_last(#[from(world)] world: &CliWorld) {
    world.run(world.command_line("undo", false));
}

#[when("I ask for recommendations without a candidate file")]
fn recommend_without_candidates(#[from(world)] world: &CliWorld) {
    world.run(world.command_line("recommend", false));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CliWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

fn printed_recommendations(world: &CliWorld) -> Vec<serde_json::Value> {
    let printed: serde_json::Value =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be JSON");
    printed.as_array().cloned().expect("a JSON array")
}

#[then("the arrabiata is recommended first")]
fn arrabiata_first(#[from(world)] world: &CliWorld) {
    let recommendations = printed_recommendations(world);
    let first = recommendations.first().expect("at least one recommendation");
    assert_eq!(first["dish"]["name"], "Spicy Arrabiata Penne");
    assert_eq!(recommendations.len(), 3);
}

#[then("the carbonara is not recommended again")]
fn carbonara_excluded(#[from(world)] world: &CliWorld) {
    assert!(
        printed_recommendations(world)
            .iter()
            .all(|entry| entry["dish"]["id"] != CARBONARA)
    );
}

#[then("the green curry name is printed")]
fn curry_printed(#[from(world)] world: &CliWorld) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert_eq!(stdout.trim_end(), "Thai Green Curry");
}

#[then("the stored profile holds no swipes")]
fn stored_profile_empty(#[from(world)] world: &CliWorld) {
    let path = world.workspace.borrow().profile.clone();
    let profile = JsonFilePreferenceStore::new(path)
        .load()
        .expect("profile should load");
    assert_eq!(profile.swipe_count(), 0);
    assert!(profile.history.is_empty());
}

#[then("the command fails because the dish is unknown")]
fn fails_unknown_dish(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::UnknownDish { id, .. } => assert_eq!(id, UNKNOWN_DISH),
        other => panic!("expected UnknownDish, found {other:?}"),
    }
}
#[then("the command fails because candidates is missing")]
fn fails_missing_candidates(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CANDIDATES),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/cli_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(ranking_after_swipe, "ranking after a swipe");
register_cli_scenario!(undoing_super_like, "undoing a super like");
register_cli_scenario!(unknown_dish_rejected, "rejecting a swipe on an unknown dish");
register_cli_scenario!(
    missing_candidates_rejected,
    "rejecting a missing candidate file argument"
);
