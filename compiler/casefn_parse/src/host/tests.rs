use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lookup_by_name() {
    let host = HostFunctions::new()
        .with_guard("heavy", |env| env.int("n").is_ok_and(|n| n > 10_000))
        .with_action("double", |env| Ok(Value::int(env.int("n")? * 2)));

    let env: Bindings = [(Name::new("n"), Value::int(20_000))].into_iter().collect();
    assert_eq!(host.guard("heavy").map(|g| g.check(&env).ok()), Some(Some(true)));
    assert_eq!(
        host.action("double").and_then(|a| a.run(&env).ok()),
        Some(Value::int(40_000))
    );
    assert!(host.guard("double").is_none());
    assert!(host.action("heavy").is_none());
}

#[test]
fn names_are_sorted() {
    let mut host = HostFunctions::new();
    host.register_guard("zeta", Guard::new(|_| true));
    host.register_guard("alpha", Guard::new(|_| false));
    host.register_action("mid", Action::constant(Value::Absent));
    assert_eq!(host.guard_names(), vec!["alpha", "zeta"]);
    assert_eq!(host.action_names(), vec!["mid"]);
}
