use role::{Role, RoleError, RoleRegistry};

struct Echo;

impl Role for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn introduction(&self) -> &str {
        "Repeat after the user."
    }

    fn rules(&self) -> &[&str] {
        &[]
    }

    fn format_input(&self, message: Option<&str>) -> String {
        message.unwrap_or("").to_string()
    }

    fn uses_system(&self) -> bool {
        false
    }
}

#[test]
fn defaults_include_anachrovox() {
    let registry = RoleRegistry::with_defaults();
    let role = registry.get("anachrovox").unwrap();
    assert_eq!(role.rules().len(), 5);
    assert_eq!(registry.names(), vec!["anachrovox".to_string()]);
}

#[test]
fn unknown_role_is_an_error() {
    let registry = RoleRegistry::new();
    assert!(registry.is_empty());
    match registry.get("hal") {
        Err(e) => assert_eq!(e, RoleError::UnknownRole("hal".into())),
        Ok(_) => panic!("expected error"),
    }
}

#[test]
fn custom_roles_sort_by_name() {
    let mut registry = RoleRegistry::with_defaults();
    registry.register(Echo);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names(), vec!["anachrovox", "echo"]);
    let echo = registry.get("echo").unwrap();
    assert!(!echo.uses_system());
    assert_eq!(echo.system_prompt(), "Repeat after the user.");
}
