use log::Level;
use readonly_services::TypeScriptEngine;
use readonly_services::rules::default_registry;
use readonly_services::rules::readonly_injected_services::{
    ReadonlyInjectedServices, ServiceNamePattern,
};
use readonly_services::scope::{MethodScope, ScopeResolver, SyntacticScopes};
use readonly_services::trace::{CaptureTrace, NoTrace};
use readonly_services::types::class::MethodDefinition;
use readonly_services::types::config::{Config, ResolvedTargets};
use readonly_services::types::{Diagnostic, Dialect, Target};
use readonly_services::{LintRule, RuleRegistry};
use tempfile::tempdir;

fn create_test_target(content: &str, filename: &str) -> (tempfile::TempDir, Target) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join(filename);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    let dialect = Dialect::from_path(&file_path).expect("TypeScript file");
    let target = Target::new(file_path, content.to_string(), dialect);
    (temp_dir, target)
}

fn lint(source: &str) -> Vec<Diagnostic> {
    let (_temp_dir, target) = create_test_target(source, "test.ts");
    let rule = ReadonlyInjectedServices::default();
    TypeScriptEngine::new()
        .lint_source_with_trace(&target, &[&rule], &NoTrace)
        .expect("lint should succeed")
}

fn flagged<'s>(source: &'s str, diagnostics: &[Diagnostic]) -> Vec<&'s str> {
    diagnostics.iter().map(|d| d.span.text(source)).collect()
}

#[test]
fn test_angular_style_component() {
    let source = r#"
import { Component } from '@angular/core';

@Component({ selector: 'app-root', template: '' })
export class AppComponent {
    title = 'app';

    constructor(
        private userService: UserService,
        private readonly authService: AuthService,
        private loggerService: LoggerService,
        public router: Router,
    ) {}

    ngOnInit() {
        this.loggerService = new ConsoleLogger();
        this.title = 'ready';
    }
}
"#;
    let diagnostics = lint(source);
    assert_eq!(flagged(source, &diagnostics), vec!["private userService: UserService"]);
    assert_eq!(diagnostics[0].message, "Parameter property can be made readonly");
    assert_eq!(diagnostics[0].rule, "readonly-injected-services");
    assert_eq!(diagnostics[0].span.line, 8);
}

#[test]
fn test_nested_reassignment_is_not_detected() {
    let source = r#"
class CacheHolder {
    constructor(private cacheService: CacheService) {}

    reset(force: boolean) {
        if (force) {
            this.cacheService = null;
        }
    }
}
"#;
    assert_eq!(lint(source).len(), 1);
}

#[test]
fn test_classes_are_analysed_independently() {
    let source = r#"
export class First {
    constructor(private dataService: DataService) {}
    swap() { this.dataService = other; }
}

export default class {
    constructor(private dataService: DataService) {}

    build() {
        class Inner {
            constructor(private innerService: InnerService) {}
        }
        return Inner;
    }
}
"#;
    let diagnostics = lint(source);
    assert_eq!(
        flagged(source, &diagnostics),
        vec![
            "private dataService: DataService",
            "private innerService: InnerService"
        ]
    );
}

#[test]
fn test_class_without_constructor_or_methods() {
    assert!(lint("class Empty {}").is_empty());
    assert!(lint("class NoCtor { run() { this.aService = 1; } }").is_empty());
    assert!(lint("const notAClass = 1;").is_empty());
}

#[test]
fn test_abstract_and_tsx_sources() {
    let source = r#"
export abstract class Base {
    constructor(private httpService: HttpService) {}
    abstract render(): void;
}
"#;
    assert_eq!(lint(source).len(), 1);

    let tsx = r#"
export class View {
    constructor(private themeService: ThemeService) {}
    render() { return <div className="x">{this.themeService.name}</div>; }
}
"#;
    let (_temp_dir, target) = create_test_target(tsx, "view.tsx");
    assert_eq!(target.dialect, Dialect::Tsx);
    let rule = ReadonlyInjectedServices::default();
    let diagnostics = TypeScriptEngine::new()
        .lint_source_with_trace(&target, &[&rule], &NoTrace)
        .unwrap();
    assert_eq!(diagnostics.len(), 1);
}

struct FailingFor(&'static str);

impl ScopeResolver for FailingFor {
    fn acquire<'a>(&self, method: &'a MethodDefinition) -> Option<MethodScope<'a>> {
        if method.key == self.0 {
            None
        } else {
            SyntacticScopes.acquire(method)
        }
    }
}

#[test]
fn test_scope_failure_is_contained_to_one_method() {
    let source = r#"
class Service {
    constructor(private aService: A, private bService: B) {}
    unresolved() { this.aService = null; }
    resolved() { this.bService = null; }
}
"#;
    let (_temp_dir, target) = create_test_target(source, "scope.ts");
    let rule = ReadonlyInjectedServices::default();
    let trace = CaptureTrace::new();
    let diagnostics = TypeScriptEngine::with_scopes(FailingFor("unresolved"))
        .lint_source_with_trace(&target, &[&rule], &trace)
        .unwrap();

    assert_eq!(flagged(source, &diagnostics), vec!["private aService: A"]);
    let errors: Vec<String> = trace
        .events()
        .into_iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, message)| message)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'unresolved'"));
    assert!(errors[0].contains("'Service'"));
}

#[test]
fn test_trace_reports_each_candidate() {
    let source = "class A { constructor(private aService: A, private bService: B, c: C) {} }";
    let (_temp_dir, target) = create_test_target(source, "trace.ts");
    let rule = ReadonlyInjectedServices::default();
    let trace = CaptureTrace::new();
    TypeScriptEngine::new()
        .lint_source_with_trace(&target, &[&rule], &trace)
        .unwrap();

    let candidates: Vec<String> = trace
        .events()
        .into_iter()
        .map(|(_, message)| message)
        .filter(|message| message.starts_with("[Constructor Analysis]"))
        .collect();
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].ends_with("aService"));
    assert!(candidates[1].ends_with("bService"));
}

#[test]
fn test_registry_built_from_config() {
    let cfg: Config = toml::from_str(
        r#"
[readonly_injected_services]
name_pattern = "Repository"
include_class_fields = true
"#,
    )
    .unwrap();
    let registry: RuleRegistry = default_registry(&cfg);
    let rules = registry.enabled(None);
    assert_eq!(rules.len(), 1);

    let source = r#"
class Users {
    private userRepository: UserRepository;
    constructor(private mailService: MailService) {}
    reset() { this.mailService = other; }
}
"#;
    let (_temp_dir, target) = create_test_target(source, "users.ts");
    let diagnostics = TypeScriptEngine::new()
        .lint_source_with_trace(&target, &rules, &NoTrace)
        .unwrap();

    // mailService writes do not match "repository", so it stays reported
    assert_eq!(
        flagged(source, &diagnostics),
        vec![
            "private userRepository: UserRepository",
            "private mailService: MailService"
        ]
    );
    assert_eq!(diagnostics[0].message, "Property can be made readonly");
}

#[test]
fn test_custom_pattern_rule() {
    let rule = ReadonlyInjectedServices::new(ServiceNamePattern::new("STORE"), false);
    assert_eq!(rule.name(), "readonly-injected-services");
    let source = r#"
class Cart {
    constructor(private cartStore: CartStore) {}
    reset() { this.cartStore = fresh(); }
}
"#;
    let (_temp_dir, target) = create_test_target(source, "cart.ts");
    let diagnostics = TypeScriptEngine::new()
        .lint_source_with_trace(&target, &[&rule], &NoTrace)
        .unwrap();
    assert!(diagnostics.is_empty());
}

#[test]
fn test_load_targets_from_directory() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("src/nested")).unwrap();
    std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    std::fs::create_dir_all(root.join("dist")).unwrap();
    for file in [
        "src/b.ts",
        "src/a.service.ts",
        "src/nested/view.tsx",
        "src/types.d.ts",
        "src/readme.md",
        "src/legacy.js",
        "node_modules/pkg/index.ts",
        "dist/out.ts",
    ] {
        std::fs::write(root.join(file), "class A {}").unwrap();
    }

    let cfg = Config {
        ignore_targets: Some(vec!["dist".to_string()]),
        ..Config::default()
    };
    let resolved = cfg.resolve_targets(&[root.to_string_lossy().to_string()], None);
    let loaded = Target::load_targets(&resolved).unwrap();
    assert!(loaded.unreadable.is_empty());
    let names: Vec<String> = loaded
        .targets
        .iter()
        .map(|t| {
            t.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(names, vec!["src/a.service.ts", "src/b.ts", "src/nested/view.tsx"]);
}

#[test]
fn test_load_targets_with_glob_and_empty_result() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    std::fs::write(root.join("one.ts"), "class A {}").unwrap();
    std::fs::write(root.join("two.mts"), "class B {}").unwrap();

    let glob = ResolvedTargets {
        include: vec![format!("{}/*.ts", root.display())],
        ignore: vec![],
    };
    let targets = Target::load_targets(&glob).unwrap().targets;
    assert_eq!(targets.len(), 1);
    assert!(targets[0].path.ends_with("one.ts"));

    let none = ResolvedTargets {
        include: vec![format!("{}/*.tsx", root.display())],
        ignore: vec![],
    };
    let err = Target::load_targets(&none).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_load_targets_skips_unreadable_file() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    std::fs::write(
        root.join("good.ts"),
        "class A { constructor(private fooService: Foo) {} }",
    )
    .unwrap();
    // Latin-1 encoded comment, not valid UTF-8
    std::fs::write(root.join("latin1.ts"), b"// caf\xe9\n").unwrap();

    let resolved = ResolvedTargets {
        include: vec![root.to_string_lossy().to_string()],
        ignore: vec![],
    };
    let loaded = Target::load_targets(&resolved).unwrap();
    assert_eq!(loaded.targets.len(), 1);
    assert!(loaded.targets[0].path.ends_with("good.ts"));
    assert_eq!(loaded.unreadable.len(), 1);
    assert!(loaded.unreadable[0].ends_with("latin1.ts"));

    // A lone unreadable file is still reported rather than "not found"
    let single = ResolvedTargets {
        include: vec![root.join("latin1.ts").to_string_lossy().to_string()],
        ignore: vec![],
    };
    let loaded = Target::load_targets(&single).unwrap();
    assert!(loaded.targets.is_empty());
    assert_eq!(loaded.unreadable.len(), 1);
}

#[test]
fn test_long_else_if_chain_does_not_block_linting() {
    let mut chain = String::from("if (step === 0) { this.state = 0; }");
    for i in 1..5000 {
        chain.push_str(&format!(" else if (step === {i}) {{ this.state = {i}; }}"));
    }
    let source = format!(
        "class Wizard {{
    constructor(private stepService: StepService, private fooService: FooService) {{}}

    advance(step: number) {{
        {chain}
        this.fooService = new FooService();
    }}
}}
"
    );
    let diagnostics = lint(&source);
    assert_eq!(
        flagged(&source, &diagnostics),
        vec!["private stepService: StepService"]
    );
}
