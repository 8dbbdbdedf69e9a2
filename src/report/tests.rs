// check-env: Environment Configuration Checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::render::{cell, render_json, render_text};
use super::transform::{service_display_name, tab_display_name};
use super::{Environment, Filter, RawReport, Service, Tab, Variable, filter_tabs, transform};

fn parse(json: &str) -> RawReport {
    RawReport::from_json(json).expect("fixture should decode")
}

fn variable(key: &str, dev: Option<&str>, staging: Option<&str>, prod: Option<&str>) -> Variable {
    Variable {
        key: key.to_string(),
        dev: dev.map(str::to_string),
        staging: staging.map(str::to_string),
        production: prod.map(str::to_string),
    }
}

const AUTH_SVC: &str = r#"{
    "data": {
        "backend": {
            "services": {
                "auth-svc": {
                    "modules": {
                        "m1": {
                            "all_keys": { "API_KEY": 1, "TIMEOUT": 1 },
                            "envs": {
                                "dev": { "key": { "API_KEY": "abc" } },
                                "production": { "key": { "API_KEY": "xyz", "TIMEOUT": "" } }
                            }
                        }
                    }
                }
            }
        }
    }
}"#;

// =============================================================================
// transform
// =============================================================================

#[test]
fn test_transform_end_to_end_scenario() {
    let tabs = transform(parse(AUTH_SVC));

    assert_eq!(
        tabs,
        vec![Tab {
            id: "backend".to_string(),
            name: "Backend".to_string(),
            services: vec![Service {
                id: "auth-svc".to_string(),
                name: "Auth Svc".to_string(),
                variables: vec![
                    variable("API_KEY", Some("abc"), None, Some("xyz")),
                    variable("TIMEOUT", None, None, Some("")),
                ],
            }],
        }]
    );
}

#[test]
fn test_transform_dedups_keys_across_modules() {
    let raw = parse(
        r#"{"data": {"ai": {"services": {"llm": {"modules": {
            "api": {"all_keys": {"MODEL": 1, "TOKEN": 1}},
            "worker": {"all_keys": {"TOKEN": 1, "QUEUE": 1},
                       "envs": {"staging": {"key": {"TOKEN": "t-stg"}}}}
        }}}}}}"#,
    );

    let tabs = transform(raw);
    let keys: Vec<&str> = tabs[0].services[0]
        .variables
        .iter()
        .map(|v| v.key.as_str())
        .collect();
    assert_eq!(keys, ["MODEL", "TOKEN", "QUEUE"]);
    assert_eq!(
        tabs[0].services[0].variables[1],
        variable("TOKEN", None, Some("t-stg"), None)
    );
}

#[test]
fn test_transform_later_module_wins_per_environment() {
    let raw = parse(
        r#"{"data": {"backend": {"services": {"api": {"modules": {
            "first": {"all_keys": {"URL": 1},
                      "envs": {"dev": {"key": {"URL": "one"}},
                               "production": {"key": {"URL": "prod"}}}},
            "second": {"all_keys": {"URL": 1},
                       "envs": {"dev": {"key": {"URL": "two"}}}}
        }}}}}}"#,
    );

    let tabs = transform(raw);
    assert_eq!(
        tabs[0].services[0].variables,
        vec![variable("URL", Some("two"), None, Some("prod"))]
    );
}

#[test]
fn test_transform_absent_differs_from_empty() {
    let absent = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"K": 1}, "envs": {"dev": {"key": {}}}
        }}}}}}}"#,
    ));
    let empty = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"K": 1}, "envs": {"dev": {"key": {"K": ""}}}
        }}}}}}}"#,
    ));

    assert_eq!(absent[0].services[0].variables[0].dev, None);
    assert_eq!(
        empty[0].services[0].variables[0].dev,
        Some(String::new())
    );
}

#[test]
fn test_transform_ignores_env_values_outside_all_keys() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"KNOWN": 1},
            "envs": {"dev": {"key": {"KNOWN": "a", "STRAY": "b"}}}
        }}}}}}}"#,
    ));

    assert_eq!(
        tabs[0].services[0].variables,
        vec![variable("KNOWN", Some("a"), None, None)]
    );
}

#[test]
fn test_transform_prunes_empty_services_and_tabs() {
    let tabs = transform(parse(
        r#"{"data": {
            "ai": {"services": {"empty-svc": {"modules": {"m": {"all_keys": {}}}}}},
            "frontend": {},
            "devops": {"services": {
                "no-modules": {},
                "inert": {"modules": {"m": {"envs": {"dev": {"key": {"X": "1"}}}}}},
                "ci": {"modules": {"m": {"all_keys": {"RUNNER": 1}}}}
            }}
        }}"#,
    ));

    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].id, "devops");
    assert_eq!(tabs[0].name, "Devops");
    let service_ids: Vec<&str> = tabs[0].services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(service_ids, ["ci"]);
}

#[test]
fn test_transform_preserves_document_order() {
    let tabs = transform(parse(
        r#"{"data": {
            "zeta": {"services": {"b": {"modules": {"m": {"all_keys": {"Z": 1, "A": 1}}}},
                                  "a": {"modules": {"m": {"all_keys": {"M": 1}}}}}},
            "alpha": {"services": {"x": {"modules": {"m": {"all_keys": {"K": 1}}}}}}
        }}"#,
    ));

    let tab_ids: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(tab_ids, ["zeta", "alpha"]);
    let service_ids: Vec<&str> = tabs[0].services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(service_ids, ["b", "a"]);
    let keys: Vec<&str> = tabs[0].services[0]
        .variables
        .iter()
        .map(|v| v.key.as_str())
        .collect();
    assert_eq!(keys, ["Z", "A"]);
}

#[test]
fn test_transform_empty_data() {
    assert!(transform(parse(r#"{"data": {}}"#)).is_empty());
}

#[test]
fn test_transform_tolerates_null_substructures() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {
            "a": {"modules": null},
            "b": {"modules": {"m": {"all_keys": null, "envs": null}}},
            "c": {"modules": {"m": {"all_keys": {"K": 1},
                  "envs": {"dev": null, "staging": {"key": null}, "production": {"key": {"K": "p"}}}}}}
        }}}}"#,
    ));

    assert_eq!(tabs[0].services.len(), 1);
    assert_eq!(
        tabs[0].services[0].variables,
        vec![variable("K", None, None, Some("p"))]
    );
}

// =============================================================================
// raw decoding
// =============================================================================

#[test]
fn test_raw_accepts_capitalized_field_names() {
    let tabs = transform(parse(
        r#"{"data": {"backend": {"services": {"api": {"modules": {"api": {
            "all_keys": {"DB_URL": ""},
            "Envs": {"dev": {"Key": {"DB_URL": "postgres://dev"}},
                     "staging": {"Key": {"DB_URL": null}}}
        }}}}}}}"#,
    ));

    assert_eq!(
        tabs[0].services[0].variables,
        vec![variable("DB_URL", Some("postgres://dev"), Some(""), None)]
    );
}

#[test]
fn test_raw_scalar_values_keep_json_text() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"PORT": 1, "DEBUG": 1},
            "envs": {"dev": {"key": {"PORT": 8080, "DEBUG": true}}}
        }}}}}}}"#,
    ));

    let vars = &tabs[0].services[0].variables;
    assert_eq!(vars[0].dev.as_deref(), Some("8080"));
    assert_eq!(vars[1].dev.as_deref(), Some("true"));
}

#[test]
fn test_raw_scalar_values_are_not_blanked() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"RETRIES": 1, "VERBOSE": 1},
            "envs": {"dev": {"key": {"RETRIES": 0, "VERBOSE": false}}}
        }}}}}}}"#,
    ));

    let vars = &tabs[0].services[0].variables;
    assert_eq!(vars[0].dev.as_deref(), Some("0"));
    assert_eq!(vars[1].dev.as_deref(), Some("false"));
}

#[test]
fn test_raw_module_with_both_env_spellings() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"A": 1, "B": 1, "C": 1},
            "envs": {"dev": {"key": {"A": "lower", "B": "lower"}},
                     "staging": {"key": {"A": "stage"}}},
            "Envs": {"dev": {"Key": {"A": "upper"}},
                     "production": {"Key": {"C": "prod"}}}
        }}}}}}}"#,
    ));

    assert_eq!(
        tabs[0].services[0].variables,
        vec![
            variable("A", Some("upper"), Some("stage"), None),
            variable("B", Some("lower"), None, None),
            variable("C", None, None, Some("prod")),
        ]
    );
}

#[test]
fn test_raw_env_with_both_key_spellings() {
    let tabs = transform(parse(
        r#"{"data": {"t": {"services": {"s": {"modules": {"m": {
            "all_keys": {"A": 1, "B": 1},
            "envs": {"dev": {"key": {"A": "lower", "B": "lower"}, "Key": {"A": "upper"}}}
        }}}}}}}"#,
    ));

    assert_eq!(
        tabs[0].services[0].variables,
        vec![
            variable("A", Some("upper"), None, None),
            variable("B", Some("lower"), None, None),
        ]
    );
}

#[test]
fn test_raw_duplicate_tab_key_keeps_first_position_last_value() {
    let raw = parse(
        r#"{"data": {
            "a": {"services": {"one": {"modules": {"m": {"all_keys": {"OLD": 1}}}}}},
            "b": {"services": {"two": {"modules": {"m": {"all_keys": {"B": 1}}}}}},
            "a": {"services": {"one": {"modules": {"m": {"all_keys": {"NEW": 1}}}}}}
        }}"#,
    );
    assert_eq!(raw.data.keys().collect::<Vec<_>>(), ["a", "b"]);

    let tabs = transform(raw);
    assert_eq!(tabs[0].services[0].variables[0].key, "NEW");
}

#[test]
fn test_raw_rejects_missing_or_invalid_data() {
    assert!(RawReport::from_json(r"{}").is_err());
    assert!(RawReport::from_json(r#"{"data": null}"#).is_err());
    assert!(RawReport::from_json(r#"{"data": []}"#).is_err());
    assert!(RawReport::from_json("not json").is_err());
}

#[test]
fn test_raw_module_value_lookup() {
    let raw = parse(AUTH_SVC);
    let (_, tab) = raw.data.iter().next().unwrap();
    let (service_id, service) = tab.services.as_ref().unwrap().iter().next().unwrap();
    assert_eq!(service_id, "auth-svc");
    let (module_id, module) = service.modules.as_ref().unwrap().iter().next().unwrap();
    assert_eq!(module_id, "m1");

    assert_eq!(module.value(Environment::Dev, "API_KEY"), Some("abc"));
    assert_eq!(module.value(Environment::Staging, "API_KEY"), None);
    assert_eq!(module.value(Environment::Production, "TIMEOUT"), Some(""));
}

// =============================================================================
// display names
// =============================================================================

#[test]
fn test_display_names() {
    assert_eq!(service_display_name("user-auth"), "User Auth");
    assert_eq!(service_display_name("auth-svc"), "Auth Svc");
    assert_eq!(service_display_name("single"), "Single");
    assert_eq!(service_display_name("a--b"), "A  B");
    assert_eq!(service_display_name("api-gRPC"), "Api GRPC");
    assert_eq!(tab_display_name("devops"), "Devops");
    assert_eq!(tab_display_name("backEnd"), "BackEnd");
    assert_eq!(tab_display_name(""), "");
}

// =============================================================================
// view helpers
// =============================================================================

#[test]
fn test_variable_completeness() {
    assert!(variable("K", Some("a"), Some("b"), Some("c")).is_complete());
    assert!(!variable("K", Some("a"), None, Some("c")).is_complete());
    assert!(!variable("K", Some("a"), Some(""), Some("c")).is_complete());

    let mut v = Variable::new("K");
    for env in Environment::ALL {
        v.set(env, env.as_str());
    }
    assert!(v.is_complete());
    assert_eq!(v.value(Environment::Staging), Some("staging"));
}

#[test]
fn test_filter_tabs() {
    let tabs = transform(parse(
        r#"{"data": {
            "backend": {"services": {
                "api": {"modules": {"m": {"all_keys": {"A": 1},
                        "envs": {"dev": {"key": {"A": "1"}}, "staging": {"key": {"A": "1"}},
                                 "production": {"key": {"A": "1"}}}}}},
                "worker": {"modules": {"m": {"all_keys": {"W": 1}}}}
            }},
            "ai": {"services": {"llm": {"modules": {"m": {"all_keys": {"L": 1}}}}}}
        }}"#,
    ));

    assert_eq!(filter_tabs(tabs.clone(), &Filter::default()), tabs);

    let by_tab = filter_tabs(
        tabs.clone(),
        &Filter {
            tabs: vec!["ai".to_string()],
            ..Filter::default()
        },
    );
    assert_eq!(by_tab.len(), 1);
    assert_eq!(by_tab[0].id, "ai");

    let missing = filter_tabs(
        tabs.clone(),
        &Filter {
            tabs: vec!["backend".to_string()],
            missing_only: true,
            ..Filter::default()
        },
    );
    assert_eq!(missing.len(), 1);
    let ids: Vec<&str> = missing[0].services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["worker"]);

    let unknown = filter_tabs(
        tabs,
        &Filter {
            services: vec!["nope".to_string()],
            ..Filter::default()
        },
    );
    assert!(unknown.is_empty());
}

// =============================================================================
// render
// =============================================================================

#[test]
fn test_cell_markers() {
    assert_eq!(cell(None), "-");
    assert_eq!(cell(Some("")), "\"\"");
    assert_eq!(cell(Some("v")), "v");
}

#[test]
fn test_render_text() {
    let tabs = transform(parse(AUTH_SVC));
    insta::assert_snapshot!(render_text(&tabs), @r#"
Backend (backend)
  Auth Svc (auth-svc), 2 incomplete
    Key      Development  Staging  Production
    API_KEY  abc          -        xyz
    TIMEOUT  -            -        ""
"#);
}

#[test]
fn test_render_text_empty() {
    assert_eq!(render_text(&[]), "No variables found\n");
}

#[test]
fn test_render_json_keeps_null_and_empty_apart() {
    let tabs = transform(parse(AUTH_SVC));
    let json: serde_json::Value = serde_json::from_str(&render_json(&tabs).unwrap()).unwrap();

    let timeout = &json[0]["services"][0]["variables"][1];
    assert_eq!(timeout["key"], "TIMEOUT");
    assert!(timeout["dev"].is_null());
    assert_eq!(timeout["production"], "");
}
