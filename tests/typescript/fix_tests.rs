use pretty_assertions::assert_eq;
use readonly_services::TypeScriptEngine;
use readonly_services::rules::readonly_injected_services::{
    ReadonlyInjectedServices, ServiceNamePattern,
};
use readonly_services::trace::NoTrace;
use readonly_services::types::{Diagnostic, Dialect, Fix, LintError, Target};
use tempfile::tempdir;

fn create_test_target(content: &str, filename: &str) -> (tempfile::TempDir, Target) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join(filename);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    let dialect = Dialect::from_path(&file_path).expect("TypeScript file");
    let target = Target::new(file_path, content.to_string(), dialect);
    (temp_dir, target)
}

fn diagnostics_for(target: &Target, rule: &ReadonlyInjectedServices) -> Vec<Diagnostic> {
    TypeScriptEngine::new()
        .lint_source_with_trace(target, &[rule], &NoTrace)
        .expect("lint should succeed")
}

fn fix_source(source: &str, rule: &ReadonlyInjectedServices) -> String {
    let (_temp_dir, target) = create_test_target(source, "fix.ts");
    let fixes: Vec<Fix> = diagnostics_for(&target, rule)
        .into_iter()
        .filter_map(|d| d.fix)
        .collect();
    target.apply_fixes(&fixes).expect("fixes should apply")
}

#[test]
fn test_fix_inserts_after_accessibility_modifier() {
    let source = r#"
export class OrderComponent {
    constructor(
        @Inject(ORDER_TOKEN) private orderService: OrderService,
        private   paymentService: PaymentService,
        private readonly auditService: AuditService,
    ) {}
}
"#;
    let expected = r#"
export class OrderComponent {
    constructor(
        @Inject(ORDER_TOKEN) private readonly orderService: OrderService,
        private   readonly paymentService: PaymentService,
        private readonly auditService: AuditService,
    ) {}
}
"#;
    assert_eq!(fix_source(source, &ReadonlyInjectedServices::default()), expected);
}

#[test]
fn test_fixed_source_is_clean() {
    let source = r#"
class A {
    constructor(private aService: A, private bService: B, private cService: C) {}
    swap() { this.bService = other; }
}
class B {
    constructor(private dService: D) {}
}
"#;
    let rule = ReadonlyInjectedServices::default();
    let fixed = fix_source(source, &rule);
    assert_eq!(
        fixed,
        r#"
class A {
    constructor(private readonly aService: A, private bService: B, private readonly cService: C) {}
    swap() { this.bService = other; }
}
class B {
    constructor(private readonly dService: D) {}
}
"#
    );

    // A second pass has nothing left to report
    let (_temp_dir, target) = create_test_target(&fixed, "again.ts");
    assert!(diagnostics_for(&target, &rule).is_empty());
}

#[test]
fn test_field_fix_with_class_fields_enabled() {
    let rule = ReadonlyInjectedServices::new(ServiceNamePattern::default(), true);
    let source = r#"
class Store {
    private cacheService: CacheService;
    private static sharedService: SharedService;
    #secretService = createSecret();

    constructor(private apiService: ApiService) {}
}
"#;
    let expected = r#"
class Store {
    private readonly cacheService: CacheService;
    private static sharedService: SharedService;
    readonly #secretService = createSecret();

    constructor(private readonly apiService: ApiService) {}
}
"#;
    assert_eq!(fix_source(source, &rule), expected);
}

#[test]
fn test_fix_survives_multibyte_text() {
    let source = "// héllo wörld\nclass Ü { constructor(private ünïService: S) {} }\n";
    let fixed = fix_source(source, &ReadonlyInjectedServices::default());
    assert_eq!(
        fixed,
        "// héllo wörld\nclass Ü { constructor(private readonly ünïService: S) {} }\n"
    );
}

#[test]
fn test_write_back_replaces_file_contents() {
    let source = "class A { constructor(private aService: A) {} }\n";
    let (_temp_dir, target) = create_test_target(source, "write.ts");
    let fixes: Vec<Fix> = diagnostics_for(&target, &ReadonlyInjectedServices::default())
        .into_iter()
        .filter_map(|d| d.fix)
        .collect();
    let fixed = target.apply_fixes(&fixes).unwrap();
    target.write(&fixed).unwrap();

    assert_eq!(
        std::fs::read_to_string(&target.path).unwrap(),
        "class A { constructor(private readonly aService: A) {} }\n"
    );
}

#[test]
fn test_fix_off_char_boundary_is_rejected() {
    let (_temp_dir, target) = create_test_target("const é = 1;", "bad.ts");
    let fix = Fix {
        byte_offset: 7,
        text: "readonly ".to_string(),
    };
    assert!(matches!(
        target.apply_fixes(&[fix]),
        Err(LintError::InvalidFix { offset: 7, .. })
    ));
}
